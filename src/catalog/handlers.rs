use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::models::Product;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:product_id", get(get_product))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.list_products().await?;
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .store
        .find_product(&product_id)
        .await?
        .ok_or(ApiError::ProductNotFound)?;
    Ok(Json(product))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::response::IntoResponse;

    use super::*;
    use crate::store::testing::MemStore;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            price: "$9.99".into(),
            description: String::new(),
            image_url: String::new(),
        }
    }

    fn state(products: Vec<Product>) -> AppState {
        AppState::fake(Arc::new(MemStore::new(products, Vec::new())))
    }

    #[tokio::test]
    async fn test_list_products_returns_catalog() {
        let state = state(vec![product("1", "Shirt"), product("2", "Hat")]);

        let Json(products) = list_products(State(state)).await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[1].name, "Hat");
    }

    #[tokio::test]
    async fn test_get_product_by_id() {
        let state = state(vec![product("1", "Shirt"), product("2", "Hat")]);

        let Json(found) = get_product(State(state), Path("2".into())).await.unwrap();
        assert_eq!(found.name, "Hat");
    }

    #[tokio::test]
    async fn test_get_unknown_product_is_404() {
        let state = state(vec![product("1", "Shirt")]);

        let err = get_product(State(state), Path("999".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ProductNotFound));
        assert_eq!(
            err.into_response().status(),
            axum::http::StatusCode::NOT_FOUND
        );
    }
}
