use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use campus_application::EntityApiClient;
use campus_core::AppError;
use campus_domain::{EntityRecord, RecordId};
use serde_json::Value;
use tracing::info;

use crate::dto::CollectionListQuery;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_records_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Query(query): Query<CollectionListQuery>,
) -> ApiResult<Json<Vec<EntityRecord>>> {
    let filter = query.status_filter()?;
    let records = state
        .collection(collection.as_str())?
        .list_records(filter)
        .await?;

    Ok(Json(records))
}

pub async fn find_record_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult<Json<EntityRecord>> {
    let id = record_id(id.as_str())?;
    let record = state
        .collection(collection.as_str())?
        .find_record(&id)
        .await?;

    Ok(Json(record))
}

pub async fn create_record_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Json(payload): Json<EntityRecord>,
) -> ApiResult<(StatusCode, Json<EntityRecord>)> {
    let created = state
        .collection(collection.as_str())?
        .create_record(payload)
        .await?
        .ok_or_else(|| AppError::Internal("created record was not returned".to_owned()))?;
    info!(collection = %collection, "record created");

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_record_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
    Json(payload): Json<EntityRecord>,
) -> ApiResult<Json<EntityRecord>> {
    let id = record_id(id.as_str())?;
    let updated = state
        .collection(collection.as_str())?
        .update_record(&id, payload)
        .await?
        .ok_or_else(|| AppError::Internal("updated record was not returned".to_owned()))?;
    info!(collection = %collection, record_id = %id, "record updated");

    Ok(Json(updated))
}

pub async fn delete_record_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let id = record_id(id.as_str())?;
    state
        .collection(collection.as_str())?
        .delete_record(&id)
        .await?;
    info!(collection = %collection, record_id = %id, "record deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn record_id(raw: &str) -> Result<RecordId, AppError> {
    RecordId::from_value(&Value::String(raw.to_owned()))
        .ok_or_else(|| AppError::NotFound(format!("record '{raw}' does not exist")))
}
