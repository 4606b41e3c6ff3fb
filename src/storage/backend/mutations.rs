//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use chrono::Utc;
use sea_orm::EntityTrait;
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{
    model_to_inspiration, new_inspiration_to_active_model, status_check_to_active_model,
};
use super::timeout::with_timeout;
use crate::errors::{Result, VersoError};
use crate::storage::models::{Inspiration, NewInspiration, StatusCheck};

use migration::entities::{inspiration, status_check};

impl SeaOrmStorage {
    pub(super) async fn insert_status_check_row(&self, check: StatusCheck) -> Result<()> {
        let active_model = status_check_to_active_model(&check);

        with_timeout(
            &format!("insert_status_check({})", check.id),
            self.call_timeout,
            status_check::Entity::insert(active_model).exec(&self.db),
        )
        .await?;

        info!("Status check recorded: {} ({})", check.id, check.client_name);
        Ok(())
    }

    /// 写入灵感记录并读回持久化后的结果
    pub(super) async fn insert_inspiration_row(&self, new: NewInspiration) -> Result<Inspiration> {
        let id = uuid::Uuid::new_v4().to_string();
        let active_model = new_inspiration_to_active_model(&new, &id, Utc::now());

        with_timeout(
            &format!("insert_inspiration({})", id),
            self.call_timeout,
            inspiration::Entity::insert(active_model).exec(&self.db),
        )
        .await?;

        let stored = with_timeout(
            &format!("reload_inspiration({})", id),
            self.call_timeout,
            inspiration::Entity::find_by_id(id.clone()).one(&self.db),
        )
        .await?
        .ok_or_else(|| {
            VersoError::database_operation(format!("插入后未找到灵感记录: {}", id))
        })?;

        info!(
            "Inspiration created: {} ({}/{})",
            stored.id, stored.country, stored.city
        );
        model_to_inspiration(stored)
    }
}
