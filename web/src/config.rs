#![deny(missing_docs)]

//! # Configuration
//!
//! Command-line flags with environment fallbacks. The binary loads `.env`
//! through `dotenvy` before parsing, so any of the variables below may also
//! live there.

use clap::Parser;

/// Server settings.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about = "Project tracker HTTP service")]
pub struct Config {
    /// Address to listen on.
    #[clap(long, env = "TRACKER_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// SQLite database file, or `:memory:`.
    #[clap(long, env = "DATABASE_URL", default_value = "tracker.db")]
    pub database_url: String,

    /// Maximum number of pooled connections.
    #[clap(
        long,
        env = "TRACKER_POOL_SIZE",
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pool_size: u32,

    /// Path prefix for the resource routes.
    #[clap(long, env = "TRACKER_PREFIX", default_value = "/api")]
    pub prefix: String,
}

impl Config {
    /// The route prefix with one leading slash and no trailing slash.
    ///
    /// An empty or `/` prefix mounts the routes at the root.
    pub fn route_prefix(&self) -> String {
        let trimmed = self.prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}
