#![deny(missing_docs)]

//! # Tracker Web Binary
//!
//! Entry point for the Actix Web server.

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use clap::Parser;
use log::info;
use std::io;
use std::net::TcpListener;
use tracker_web::config::Config;
use tracker_web::configure;
use tracker_web::db::Database;

/// One access-log line per request: request line, origin, status, latency.
const ACCESS_LOG_FORMAT: &str = "%r from %{Origin}i -> %s (%Dms)";

fn build_server(
    listener: TcpListener,
    db: Database,
    prefix: String,
) -> io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::new(ACCESS_LOG_FORMAT))
            .configure(configure(db.clone(), prefix.clone()))
    })
    .listen(listener)?
    .run())
}

fn open_database(config: &Config) -> io::Result<Database> {
    let db = Database::connect(&config.database_url, config.pool_size).map_err(io::Error::other)?;
    db.migrate().map_err(io::Error::other)?;
    Ok(db)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let db = open_database(&config)?;
    let listener = TcpListener::bind(&config.bind)?;
    info!(
        "listening on {} with routes under '{}'",
        listener.local_addr()?,
        config.route_prefix()
    );

    build_server(listener, db, config.route_prefix())?.await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_database_in_memory() {
        let config = Config::try_parse_from(["tracker-web", "--database-url", ":memory:"]).unwrap();
        let db = open_database(&config).unwrap();
        assert!(db.ping().is_ok());
    }

    #[actix_web::test]
    async fn test_build_server_start_stop() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let db = Database::connect(tracker_web::db::IN_MEMORY, 1).unwrap();
        let server = build_server(listener, db, "/api".into()).unwrap();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        handle.stop(true).await;
    }
}
