use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection, Database};
use thiserror::Error;

use crate::config::StoreConfig;
use crate::models::{Product, User};

/// The document store could not be reached or a query failed. Not retried;
/// surfaces to the HTTP layer as a server error.
#[derive(Debug, Error)]
#[error("document store unavailable: {0}")]
pub struct StoreError(#[from] mongodb::error::Error);

/// Query/update interface the handlers need from the document store.
/// Identifiers are opaque strings end-to-end; both `id` fields are matched
/// by string equality, never by the store's `_id`.
#[async_trait]
pub trait Store: Send + Sync {
    /// All products, in store-native order.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_product(&self, product_id: &str) -> Result<Option<Product>, StoreError>;

    async fn find_user(&self, user_id: &str) -> Result<Option<User>, StoreError>;

    /// Set-add: appends `product_id` to the user's cart items unless already
    /// present. Matching no user is a no-op, not an error.
    async fn add_cart_item(&self, user_id: &str, product_id: &str) -> Result<(), StoreError>;

    /// Removes every occurrence of `product_id` from the user's cart items.
    /// Removing an absent reference is a no-op.
    async fn remove_cart_item(&self, user_id: &str, product_id: &str) -> Result<(), StoreError>;
}

/// MongoDB-backed store. The `Client` behind `Database` is created once at
/// startup and pools connections internally; handlers never connect.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.db_name);
        // Fail fast at startup instead of on the first request.
        db.run_command(doc! { "ping": 1 }).await?;
        Ok(Self { db })
    }

    fn products(&self) -> Collection<Product> {
        self.db.collection("products")
    }

    fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let cursor = self.products().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_product(&self, product_id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.products().find_one(doc! { "id": product_id }).await?)
    }

    async fn find_user(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users().find_one(doc! { "id": user_id }).await?)
    }

    async fn add_cart_item(&self, user_id: &str, product_id: &str) -> Result<(), StoreError> {
        self.users()
            .update_one(
                doc! { "id": user_id },
                doc! { "$addToSet": { "cartItems": product_id } },
            )
            .await?;
        Ok(())
    }

    async fn remove_cart_item(&self, user_id: &str, product_id: &str) -> Result<(), StoreError> {
        self.users()
            .update_one(
                doc! { "id": user_id },
                doc! { "$pull": { "cartItems": product_id } },
            )
            .await?;
        Ok(())
    }
}
