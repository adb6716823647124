use std::sync::Arc;

use thiserror::Error;

use stockd_core::StockId;
use stockd_infra::{
    InMemoryKeyValueStore, KeyValueStore, RepositoryError, RepositoryResult, ServiceConfig,
    StockRepository, StoreBackend, StoreError,
};
use stockd_inventory::{StockInput, StockRecord};

#[cfg(feature = "redis")]
use stockd_infra::kv::RedisKeyValueStore;

/// Repository over whichever backend was selected at startup.
pub type DynStockRepository = StockRepository<Arc<dyn KeyValueStore>>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The blocking store call panicked or was cancelled.
    #[error("store task failed: {0}")]
    Task(String),
}

/// Async facade over the (synchronous) stock repository.
///
/// Store calls run on tokio's blocking pool so a slow backend never stalls
/// the request executor.
#[derive(Clone)]
pub struct AppServices {
    stock: Arc<DynStockRepository>,
    backend: StoreBackend,
}

impl AppServices {
    pub fn new(store: Arc<dyn KeyValueStore>, backend: StoreBackend) -> Self {
        Self {
            stock: Arc::new(StockRepository::new(store)),
            backend,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryKeyValueStore::new()), StoreBackend::Memory)
    }

    pub fn backend(&self) -> StoreBackend {
        self.backend
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&DynStockRepository) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let repo = self.stock.clone();
        let result = tokio::task::spawn_blocking(move || op(&repo))
            .await
            .map_err(|e| ServiceError::Task(e.to_string()))?;
        Ok(result?)
    }

    pub async fn create(&self, input: StockInput) -> Result<StockRecord, ServiceError> {
        self.blocking(move |repo| repo.create(input)).await
    }

    pub async fn list(&self) -> Result<Vec<StockRecord>, ServiceError> {
        self.blocking(|repo| repo.list()).await
    }

    pub async fn get(&self, id: StockId) -> Result<StockRecord, ServiceError> {
        self.blocking(move |repo| repo.get(id)).await
    }

    pub async fn update(&self, id: StockId, input: StockInput) -> Result<StockRecord, ServiceError> {
        self.blocking(move |repo| repo.update(id, input)).await
    }

    pub async fn delete(&self, id: StockId) -> Result<(), ServiceError> {
        self.blocking(move |repo| repo.delete(id)).await
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        self.blocking(|repo| repo.ping()).await
    }
}

/// Select and construct the store backend named by the configuration.
pub fn build_services(config: &ServiceConfig) -> Result<AppServices, StoreError> {
    match config.store {
        StoreBackend::Memory => {
            tracing::info!("using in-memory stock store; records are lost on exit");
            Ok(AppServices::in_memory())
        }
        StoreBackend::Redis => build_redis_services(config),
    }
}

#[cfg(feature = "redis")]
fn build_redis_services(config: &ServiceConfig) -> Result<AppServices, StoreError> {
    let store = RedisKeyValueStore::new(&config.redis_url)?;
    tracing::info!(redis_url = %config.redis_url, "using redis stock store");
    Ok(AppServices::new(Arc::new(store), StoreBackend::Redis))
}

#[cfg(not(feature = "redis"))]
fn build_redis_services(_config: &ServiceConfig) -> Result<AppServices, StoreError> {
    tracing::warn!("STOCK_STORE=redis but redis feature not enabled, falling back to in-memory");
    Ok(AppServices::in_memory())
}
