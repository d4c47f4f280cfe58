use super::error::ApiError;
use super::upload::{PhotoForm, RegisterForm};
use super::{DynBackend, SharedApi};
use crate::api::InventoryApi;
use crate::model::{ItemChanges, ItemView};
use crate::store::photos::content_type;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

/// Run a store call on the blocking pool; the stores do plain file I/O.
async fn blocking<T, F>(api: &SharedApi, call: F) -> Result<T, ApiError>
where
    F: FnOnce(&InventoryApi<DynBackend>) -> crate::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let api = api.clone();
    tokio::task::spawn_blocking(move || call(&api))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_items(State(api): State<SharedApi>) -> Result<Json<Vec<ItemView>>, ApiError> {
    let items = blocking(&api, |api| api.list()).await?;
    Ok(Json(items))
}

pub async fn register_item(
    State(api): State<SharedApi>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ItemView>), ApiError> {
    let form = RegisterForm::from_multipart(multipart).await?;
    let item = blocking(&api, move |api| {
        api.register(form.name, form.description, form.photo)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchParams {
    pub id: Option<String>,
    #[serde(default)]
    pub include_photo: bool,
}

pub async fn search_items(
    State(api): State<SharedApi>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ItemView>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let item = blocking(&api, move |api| {
        api.search(params.id.as_deref(), params.include_photo)
    })
    .await?;
    Ok(Json(item))
}

pub async fn get_item(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
) -> Result<Json<ItemView>, ApiError> {
    let item = blocking(&api, move |api| api.get(&id)).await?;
    Ok(Json(item))
}

pub async fn update_item(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
    body: Result<Json<ItemChanges>, JsonRejection>,
) -> Result<Json<ItemView>, ApiError> {
    let Json(changes) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let item = blocking(&api, move |api| api.update(&id, changes)).await?;
    Ok(Json(item))
}

pub async fn update_photo(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<ItemView>, ApiError> {
    let form = PhotoForm::from_multipart(multipart).await?;
    let item = blocking(&api, move |api| api.update_photo(&id, form.photo)).await?;
    Ok(Json(item))
}

pub async fn get_photo(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let photo = blocking(&api, move |api| api.photo(&id)).await?;
    let headers = [(header::CONTENT_TYPE, content_type(&photo.filename))];
    Ok((headers, photo.bytes).into_response())
}

pub async fn delete_item(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    blocking(&api, move |api| api.delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
