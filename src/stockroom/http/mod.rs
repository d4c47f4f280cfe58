//! HTTP routes.
//!
//! Handlers only translate: path/query/body in, [`InventoryApi`] call,
//! status code out. Every id arrives as a raw string so that a non-numeric id
//! surfaces as 400 from the API layer instead of an extractor rejection.

mod error;
mod handlers;
mod upload;

pub use error::ApiError;

use crate::api::InventoryApi;
use crate::store::backend::CollectionBackend;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub type DynBackend = Box<dyn CollectionBackend>;
pub type SharedApi = Arc<InventoryApi<DynBackend>>;

/// Create all HTTP routes.
pub fn routes() -> Router<SharedApi> {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/inventory",
            get(handlers::list_items).post(handlers::register_item),
        )
        .route("/inventory/search", get(handlers::search_items))
        .route(
            "/inventory/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route(
            "/inventory/{id}/photo",
            get(handlers::get_photo).put(handlers::update_photo),
        )
}

/// The full application: routes, body limit, request tracing, state.
pub fn app(api: SharedApi, max_upload_bytes: usize) -> Router {
    routes()
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(api)
}
