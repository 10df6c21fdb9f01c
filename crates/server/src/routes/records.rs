use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::Message;
use service::storage::record_store::{Fields, Record};
use service::RecordRepository;
use tracing::info;

use crate::errors::ApiError;
use crate::observability::record_op;

pub type Repo = Arc<dyn RecordRepository>;

/// Routes for one collection, mounted at `/{kind}`.
///
/// Both `/{kind}` and `/{kind}/` accept list and create.
pub fn router(repo: Repo) -> Router {
    let kind = repo.kind();
    let collection = get(list_records).post(create_record);
    Router::new()
        .route(&format!("/{kind}"), collection.clone())
        .route(&format!("/{kind}/"), collection)
        .route(
            &format!("/{kind}/:id"),
            get(get_record).put(update_record).delete(delete_record),
        )
        .with_state(repo)
}

// Non-integer ids cannot name a record, so they read as "not found".
fn record_id(repo: &Repo, id: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    id.map(|Path(id)| id).map_err(|_| ApiError::not_found(repo.kind()))
}

#[utoipa::path(
    get,
    path = "/{resource}/",
    tag = "records",
    params(("resource" = String, Path, description = "Collection: `user` or `animal`")),
    responses((status = 200, description = "All records in insertion order"))
)]
pub async fn list_records(State(repo): State<Repo>) -> Json<Vec<Record>> {
    let items = repo.list().await;
    record_op::<_, ()>(repo.kind(), "list", &Ok(()));
    Json(items)
}

#[utoipa::path(
    get,
    path = "/{resource}/{id}",
    tag = "records",
    params(
        ("resource" = String, Path, description = "Collection: `user` or `animal`"),
        ("id" = u64, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "The record"),
        (status = 404, description = "No record with this id", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_record(
    State(repo): State<Repo>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Record>, ApiError> {
    let id = record_id(&repo, id)?;
    let res = repo.get(id).await;
    record_op(repo.kind(), "get", &res);
    Ok(Json(res?))
}

#[utoipa::path(
    post,
    path = "/{resource}",
    tag = "records",
    params(("resource" = String, Path, description = "Collection: `user` or `animal`")),
    request_body = crate::openapi::RecordInputDoc,
    responses(
        (status = 201, description = "Created record with its assigned id"),
        (status = 400, description = "A record with this name already exists", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_record(
    State(repo): State<Repo>,
    Json(input): Json<Fields>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let res = repo.create(input).await;
    record_op(repo.kind(), "create", &res);
    let rec = res?;
    info!(kind = repo.kind(), id = rec.id, "created record");
    Ok((StatusCode::CREATED, Json(rec)))
}

#[utoipa::path(
    put,
    path = "/{resource}/{id}",
    tag = "records",
    params(
        ("resource" = String, Path, description = "Collection: `user` or `animal`"),
        ("id" = u64, Path, description = "Record id")
    ),
    request_body = crate::openapi::RecordInputDoc,
    responses(
        (status = 200, description = "Updated record; empty, zero and null values are ignored"),
        (status = 404, description = "No record with this id", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update_record(
    State(repo): State<Repo>,
    id: Result<Path<u64>, PathRejection>,
    Json(input): Json<Fields>,
) -> Result<Json<Record>, ApiError> {
    let id = record_id(&repo, id)?;
    let res = repo.update(id, input).await;
    record_op(repo.kind(), "update", &res);
    Ok(Json(res?))
}

#[utoipa::path(
    delete,
    path = "/{resource}/{id}",
    tag = "records",
    params(
        ("resource" = String, Path, description = "Collection: `user` or `animal`"),
        ("id" = u64, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "No record with this id", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_record(
    State(repo): State<Repo>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let id = record_id(&repo, id)?;
    let res = repo.delete(id).await;
    record_op(repo.kind(), "delete", &res);
    res?;
    info!(kind = repo.kind(), id, "deleted record");
    Ok(Json(Message::new(format!(
        "{} with ID {} has been deleted successfully.",
        repo.kind(),
        id
    ))))
}
