use std::sync::Arc;

use anyhow::Context;

use crate::config::AppConfig;
use crate::store::{MongoStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());
        let store: Arc<dyn Store> = Arc::new(
            MongoStore::connect(&config.store)
                .await
                .context("connect to document store")?,
        );
        Ok(Self { store, config })
    }

    #[cfg(test)]
    pub(crate) fn fake(store: Arc<dyn Store>) -> Self {
        use crate::config::{ResolvePolicy, StoreConfig};

        let config = Arc::new(AppConfig {
            store: StoreConfig {
                uri: "mongodb://localhost:27017".into(),
                db_name: "shopcart-test".into(),
            },
            host: "127.0.0.1".into(),
            port: 0,
            static_dir: "dist".into(),
            assets_dir: "assets".into(),
            resolve_policy: ResolvePolicy::FullScan,
        });
        Self { store, config }
    }
}
