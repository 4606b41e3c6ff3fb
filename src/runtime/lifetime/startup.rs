use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::StaticConfig;
use crate::services::InspirationService;
use crate::storage::{InspirationStore, StorageFactory};

pub struct StartupContext {
    pub store: Arc<dyn InspirationStore>,
    pub service: Arc<InspirationService>,
    pub route_config: RouteConfig,
}

#[derive(Clone, Debug)]
pub struct RouteConfig {
    pub api_prefix: String,
}

/// 准备服务器启动的上下文
/// 包括存储连接、迁移和服务实例
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|e| anyhow::anyhow!("Failed to install rustls crypto provider: {:?}", e))?;

    let store = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    let service = Arc::new(InspirationService::new(store.clone()));

    let route_config = RouteConfig {
        api_prefix: config.routes.api_prefix.trim_end_matches('/').to_string(),
    };

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        store,
        service,
        route_config,
    })
}
