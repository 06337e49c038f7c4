use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::models::Product;
use crate::state::AppState;

use super::dto::AddCartItemRequest;
use super::service;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/cart", get(get_cart).post(add_to_cart))
        .route("/users/:user_id/cart/:product_id", delete(remove_from_cart))
}

#[instrument(skip(state))]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let cart =
        service::resolved_cart(state.store.as_ref(), &user_id, state.config.resolve_policy).await?;
    Ok(Json(cart))
}

/// Set-add the reference, then return the re-resolved cart. The product is
/// not checked for existence here; a dangling reference is dropped at the
/// next resolution. The update matches nothing for an unknown user, so the
/// re-fetch inside `resolved_cart` carries the 404.
#[instrument(skip(state, body))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<AddCartItemRequest>,
) -> Result<Json<Vec<Product>>, ApiError> {
    state
        .store
        .add_cart_item(&user_id, &body.product_id)
        .await?;
    let cart =
        service::resolved_cart(state.store.as_ref(), &user_id, state.config.resolve_policy).await?;
    info!(%user_id, product_id = %body.product_id, "cart item added");
    Ok(Json(cart))
}

#[instrument(skip(state))]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> Result<Json<Vec<Product>>, ApiError> {
    state.store.remove_cart_item(&user_id, &product_id).await?;
    let cart =
        service::resolved_cart(state.store.as_ref(), &user_id, state.config.resolve_policy).await?;
    info!(%user_id, %product_id, "cart item removed");
    Ok(Json(cart))
}
