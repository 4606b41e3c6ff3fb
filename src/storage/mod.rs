use std::sync::Arc;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;
pub mod traits;

pub use backend::SeaOrmStorage;
pub use models::{
    CitySummary, CostIndicator, CountrySummary, Inspiration, InspirationFilter, InspirationType,
    MAX_RESULTS, NewInspiration, StatusCheck,
};
pub use traits::InspirationStore;

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn InspirationStore>> {
        let database_url = config.connection_url()?;

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(&database_url)?;

        let settings = backend::ConnectionSettings {
            pool_size: config.pool_size,
            call_timeout: Duration::from_secs(config.timeout),
        };

        let storage =
            backend::SeaOrmStorage::new(&database_url, &backend_type, settings).await?;
        Ok(Arc::new(storage))
    }
}
