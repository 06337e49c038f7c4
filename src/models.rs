use serde::{Deserialize, Serialize};

/// Catalog product. `id` is the external key the front end and the cart use;
/// the store's own `_id` is never exposed. Display attributes are opaque to
/// this service and pass through as-is. Products are created out of band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

/// A user and the cart item references stored against it. `cart_items`
/// holds product ids in insertion order with duplicates collapsed on add.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub cart_items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_shape_is_camel_case() {
        let product = Product {
            id: "1".into(),
            name: "Shirt".into(),
            price: "$16.99".into(),
            description: "A plain shirt".into(),
            image_url: "/images/products/shirt.jpg".into(),
        };

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(!json.contains("image_url"));
    }

    #[test]
    fn test_user_deserializes_without_cart_items() {
        let user: User = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.cart_items.is_empty());
    }

    #[test]
    fn test_user_cart_items_is_camel_case() {
        let user: User = serde_json::from_str(r#"{"id":"u1","cartItems":["2","1"]}"#).unwrap();
        assert_eq!(user.cart_items, vec!["2".to_string(), "1".to_string()]);
    }
}
