#![allow(dead_code, unused_macros)]

use tracker_web::db::{Database, IN_MEMORY};

/// Fresh in-memory database with the schema applied.
pub fn memory_db() -> Database {
    let db = Database::connect(IN_MEMORY, 1).unwrap();
    db.migrate().unwrap();
    db
}

/// Builds the app over `$db` with routes under `/api`.
macro_rules! tracker_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new().configure(tracker_web::configure($db, "/api".to_string())),
        )
        .await
    };
}

/// Sends a `TestRequest` and returns the status with the body parsed as JSON
/// (`Null` when the body is empty).
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = actix_web::test::read_body(resp).await;
        let json: serde_json::Value = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }};
}
