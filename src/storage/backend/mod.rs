//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod timeout;

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::{Result, VersoError};
use crate::storage::models::{
    CitySummary, CountrySummary, Inspiration, InspirationFilter, NewInspiration, StatusCheck,
};
use crate::storage::traits::InspirationStore;

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{
    decode_list, encode_list, model_to_inspiration, model_to_status_check,
    new_inspiration_to_active_model, status_check_to_active_model,
};
pub use query::{build_condition, merge_country_contributors};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(VersoError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite:, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 规范化 backend 名称
pub fn normalize_backend_name(backend: &str) -> String {
    match backend {
        "mariadb" => "mysql".to_string(),
        other => other.to_string(),
    }
}

/// 连接参数
#[derive(Clone, Copy, Debug)]
pub struct ConnectionSettings {
    pub pool_size: u32,
    /// 单次数据库调用的超时时间
    pub call_timeout: Duration,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            pool_size: 10,
            call_timeout: Duration::from_secs(10),
        }
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    call_timeout: Duration,
}

impl SeaOrmStorage {
    pub async fn new(
        database_url: &str,
        backend_name: &str,
        settings: ConnectionSettings,
    ) -> Result<Self> {
        if database_url.is_empty() {
            return Err(VersoError::database_config("database_url 未设置"));
        }

        let backend_name = normalize_backend_name(backend_name);

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, &backend_name, settings.pool_size).await?
        };

        let storage = SeaOrmStorage {
            db,
            backend_name,
            call_timeout: settings.call_timeout,
        };

        // 运行迁移
        run_migrations(&storage.db).await?;

        info!(
            "Storage initialized, using backend: {}",
            storage.backend_name
        );
        Ok(storage)
    }
}

#[async_trait]
impl InspirationStore for SeaOrmStorage {
    async fn insert_status_check(&self, check: StatusCheck) -> Result<()> {
        self.insert_status_check_row(check).await
    }

    async fn list_status_checks(&self, limit: u64) -> Result<Vec<StatusCheck>> {
        self.load_status_checks(limit).await
    }

    async fn insert_inspiration(&self, new: NewInspiration) -> Result<Inspiration> {
        self.insert_inspiration_row(new).await
    }

    async fn find_inspirations(
        &self,
        filter: &InspirationFilter,
        limit: u64,
    ) -> Result<Vec<Inspiration>> {
        self.load_inspirations(filter, limit).await
    }

    async fn country_summaries(&self) -> Result<Vec<CountrySummary>> {
        self.aggregate_countries().await
    }

    async fn city_summaries(&self, country: &str) -> Result<Vec<CitySummary>> {
        self.aggregate_cities(country).await
    }

    async fn close(&self) -> Result<()> {
        // 克隆句柄共享同一个连接池，关闭任意一个即释放整个池
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| VersoError::database_connection(format!("关闭数据库连接失败: {}", e)))?;
        info!("{} connection closed", self.backend_name.to_uppercase());
        Ok(())
    }
}
