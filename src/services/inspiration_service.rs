//! Inspiration service
//!
//! Business logic shared by the HTTP handlers. Works against any
//! `InspirationStore`, so tests can inject an in-memory double.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::Result;
use crate::storage::{
    CitySummary, CountrySummary, Inspiration, InspirationFilter, InspirationStore,
    InspirationType, MAX_RESULTS, NewInspiration, StatusCheck,
};

/// Inspiration service for bookmark and collection operations
pub struct InspirationService {
    store: Arc<dyn InspirationStore>,
}

impl InspirationService {
    /// Create a new InspirationService instance
    pub fn new(store: Arc<dyn InspirationStore>) -> Self {
        Self { store }
    }

    /// Record a heartbeat from `client_name`
    pub async fn create_status_check(&self, client_name: String) -> Result<StatusCheck> {
        let check = StatusCheck {
            id: uuid::Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        };
        self.store.insert_status_check(check.clone()).await?;
        Ok(check)
    }

    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>> {
        self.store.list_status_checks(MAX_RESULTS).await
    }

    /// Persist a validated inspiration; contributors are seeded from `added_by`
    pub async fn create_inspiration(&self, new: NewInspiration) -> Result<Inspiration> {
        let created = self.store.insert_inspiration(new).await?;
        info!(
            "Inspiration {} added to {}/{}",
            created.id, created.country, created.city
        );
        Ok(created)
    }

    pub async fn list_inspirations(&self, filter: InspirationFilter) -> Result<Vec<Inspiration>> {
        let items = self.store.find_inspirations(&filter, MAX_RESULTS).await?;
        debug!("Listed {} inspirations for {:?}", items.len(), filter);
        Ok(items)
    }

    pub async fn country_summaries(&self) -> Result<Vec<CountrySummary>> {
        self.store.country_summaries().await
    }

    pub async fn city_summaries(&self, country: &str) -> Result<Vec<CitySummary>> {
        self.store.city_summaries(country).await
    }

    /// Items for one city, optionally narrowed by type
    pub async fn city_items(
        &self,
        country: &str,
        city: &str,
        kind: Option<InspirationType>,
    ) -> Result<Vec<Inspiration>> {
        self.list_inspirations(InspirationFilter::for_city(country, city, kind))
            .await
    }
}
