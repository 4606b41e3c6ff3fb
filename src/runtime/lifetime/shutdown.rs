use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::storage::InspirationStore;

/// 关闭连接池的超时时间（秒）
const CLOSE_TIMEOUT_SECS: u64 = 10;

/// 等待 Ctrl+C 信号
pub async fn wait_for_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}

/// 关闭存储连接，进程退出前调用一次
pub async fn close_storage(store: Arc<dyn InspirationStore>) {
    match timeout(Duration::from_secs(CLOSE_TIMEOUT_SECS), store.close()).await {
        Ok(Ok(())) => {
            info!("Storage closed, shutting down...");
        }
        Ok(Err(e)) => {
            error!("Failed to close storage: {}", e);
        }
        Err(_) => {
            error!(
                "Closing storage timed out after {} seconds",
                CLOSE_TIMEOUT_SECS
            );
        }
    }
}
