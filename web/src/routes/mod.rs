//! # Route Dispatch Table
//!
//! Binds each method and path to a service operation. Projects and actions
//! share the same generic handlers; the only extra route is the
//! project -> actions lookup.

use crate::db::Database;
use crate::error::WebError;
use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracker_core::{service, Action, Id, Project, Resource, Store};

type Db = web::Data<Database>;

/// Registers every resource route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(collection::<Project>("/projects"))
        .service(member::<Project>("/projects/{id}"))
        .service(web::resource("/projects/{id}/actions").route(web::get().to(project_actions)))
        .service(collection::<Action>("/actions"))
        .service(member::<Action>("/actions/{id}"));
}

/// `GET` lists, `POST` creates.
fn collection<R>(path: &str) -> actix_web::Resource
where
    R: Resource,
    Database: Store<R>,
{
    web::resource(path)
        .route(web::get().to(list::<R>))
        .route(web::post().to(create::<R>))
}

/// `GET` reads, `PUT` updates, `DELETE` removes.
fn member<R>(path: &str) -> actix_web::Resource
where
    R: Resource,
    Database: Store<R>,
{
    web::resource(path)
        .route(web::get().to(read::<R>))
        .route(web::put().to(update::<R>))
        .route(web::delete().to(remove::<R>))
}

async fn list<R>(db: Db) -> Result<HttpResponse, WebError>
where
    R: Resource,
    Database: Store<R>,
{
    let items = web::block(move || service::list::<R, _>(db.get_ref())).await??;
    Ok(HttpResponse::Ok().json(items))
}

async fn read<R>(db: Db, id: web::Path<Id>) -> Result<HttpResponse, WebError>
where
    R: Resource,
    Database: Store<R>,
{
    let id = id.into_inner();
    let item = web::block(move || service::read::<R, _>(db.get_ref(), id)).await??;
    Ok(HttpResponse::Ok().json(item))
}

async fn create<R>(db: Db, payload: web::Json<Value>) -> Result<HttpResponse, WebError>
where
    R: Resource,
    Database: Store<R>,
{
    let payload = payload.into_inner();
    let item = web::block(move || service::create::<R, _>(db.get_ref(), &payload)).await??;
    Ok(HttpResponse::Created().json(item))
}

async fn update<R>(
    db: Db,
    id: web::Path<Id>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, WebError>
where
    R: Resource,
    Database: Store<R>,
{
    let id = id.into_inner();
    let payload = payload.into_inner();
    let item = web::block(move || service::update::<R, _>(db.get_ref(), id, &payload)).await??;
    Ok(HttpResponse::Ok().json(item))
}

async fn remove<R>(db: Db, id: web::Path<Id>) -> Result<HttpResponse, WebError>
where
    R: Resource,
    Database: Store<R>,
{
    let id = id.into_inner();
    web::block(move || service::remove::<R, _>(db.get_ref(), id)).await??;
    Ok(HttpResponse::NoContent().finish())
}

async fn project_actions(db: Db, id: web::Path<Id>) -> Result<HttpResponse, WebError> {
    let id = id.into_inner();
    let actions = web::block(move || service::project_actions(db.get_ref(), id)).await??;
    Ok(HttpResponse::Ok().json(actions))
}
