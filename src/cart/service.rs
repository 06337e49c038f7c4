use std::collections::HashMap;

use crate::config::ResolvePolicy;
use crate::error::ApiError;
use crate::models::Product;
use crate::store::Store;

/// Join cart item references against the catalog. Output order follows the
/// reference list; a reference with no matching product is dropped, not an
/// error. Both policies produce the same sequence.
pub fn resolve_cart(
    cart_item_ids: &[String],
    products: &[Product],
    policy: ResolvePolicy,
) -> Vec<Product> {
    match policy {
        ResolvePolicy::FullScan => cart_item_ids
            .iter()
            .filter_map(|id| products.iter().find(|p| &p.id == id))
            .cloned()
            .collect(),
        ResolvePolicy::Indexed => {
            let by_id: HashMap<&str, &Product> =
                products.iter().map(|p| (p.id.as_str(), p)).collect();
            cart_item_ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).map(|p| (*p).clone()))
                .collect()
        }
    }
}

/// Fetch the user's references and the full catalog, then resolve. Shared by
/// read-cart and both cart mutations, which call it after their update.
pub async fn resolved_cart(
    store: &dyn Store,
    user_id: &str,
    policy: ResolvePolicy,
) -> Result<Vec<Product>, ApiError> {
    let user = store
        .find_user(user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;
    let products = store.list_products().await?;
    Ok(resolve_cart(&user.cart_items, &products, policy))
}
