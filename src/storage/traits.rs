//! Storage trait
//!
//! HTTP 层与服务层只依赖此 trait，数据库实现与测试替身均可注入。

use async_trait::async_trait;

use crate::errors::Result;
use crate::storage::models::{
    CitySummary, CountrySummary, Inspiration, InspirationFilter, NewInspiration, StatusCheck,
};

#[async_trait]
pub trait InspirationStore: Send + Sync {
    /// 写入一条心跳记录
    async fn insert_status_check(&self, check: StatusCheck) -> Result<()>;

    /// 按写入顺序返回心跳记录
    async fn list_status_checks(&self, limit: u64) -> Result<Vec<StatusCheck>>;

    /// 写入灵感并返回落库后的记录
    async fn insert_inspiration(&self, new: NewInspiration) -> Result<Inspiration>;

    /// 按过滤条件查询，`created_at` 倒序
    async fn find_inspirations(
        &self,
        filter: &InspirationFilter,
        limit: u64,
    ) -> Result<Vec<Inspiration>>;

    /// 按国家聚合，数量倒序
    async fn country_summaries(&self) -> Result<Vec<CountrySummary>>;

    /// 指定国家下按城市聚合，数量倒序
    async fn city_summaries(&self, country: &str) -> Result<Vec<CitySummary>>;

    /// 关闭底层连接，进程退出时调用一次
    async fn close(&self) -> Result<()>;
}
