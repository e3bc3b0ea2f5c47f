#![deny(missing_docs)]

//! # Tracker Web Library
//!
//! Contains route handlers, the SQLite store, and schema definitions.

use actix_web::error::BlockingError;
use actix_web::{get, web, HttpResponse, Responder};
use tracker_core::StoreResult;

/// Re-export diesel so generated models can access `crate::diesel`.
pub use diesel;

/// Command-line and environment configuration.
pub mod config;

/// SQLite implementation of the core store traits.
pub mod db;

/// Error rendering.
pub mod error;

/// Row models generated from schema.
pub mod models;

/// Resource routes.
pub mod routes;

/// Auto-generated database schema.
pub mod schema;

use db::Database;

/// Reports whether the store can hand out a connection.
#[get("/health")]
pub async fn health_check(db: web::Data<Database>) -> impl Responder {
    health_reply(web::block(move || db.ping()).await)
}

fn health_reply(result: Result<StoreResult<()>, BlockingError>) -> HttpResponse {
    let failure = match result {
        Ok(Ok(())) => return HttpResponse::Ok().body("OK"),
        Ok(Err(e)) => e.to_string(),
        Err(e) => e.to_string(),
    };
    log::error!("health check failed: {}", failure);
    HttpResponse::ServiceUnavailable().body("UNAVAILABLE")
}

/// Builds the app configuration: shared store, extractor error handlers, the
/// health check, and the resource routes mounted under `prefix`.
pub fn configure(db: Database, prefix: String) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(db))
            .app_data(web::JsonConfig::default().error_handler(error::json_error))
            .app_data(web::PathConfig::default().error_handler(error::path_error))
            .service(health_check)
            .service(web::scope(&prefix).configure(routes::configure));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let db = Database::connect(db::IN_MEMORY, 1).unwrap();
        let app = test::init_service(App::new().configure(configure(db, "/api".into()))).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[::std::prelude::v1::test]
    fn test_unreachable_store_is_unavailable() {
        let resp = health_reply(Ok(Err(tracker_core::StoreError::connection(
            "timed out waiting for connection",
        ))));
        assert_eq!(resp.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }
}
