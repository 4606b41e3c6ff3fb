//! Shared test doubles

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use verso::errors::{Result, VersoError};
use verso::storage::{
    CitySummary, CountrySummary, Inspiration, InspirationFilter, InspirationStore,
    NewInspiration, StatusCheck,
};

/// In-memory `InspirationStore`
#[derive(Default)]
pub struct MockStore {
    checks: RwLock<Vec<StatusCheck>>,
    items: RwLock<Vec<Inspiration>>,
    failure: Option<VersoError>,
    calls: AtomicUsize,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns `err`
    pub fn failing(err: VersoError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn matches(filter: &InspirationFilter, item: &Inspiration) -> bool {
    filter.country.as_ref().is_none_or(|c| *c == item.country)
        && filter.city.as_ref().is_none_or(|c| *c == item.city)
        && filter.kind.is_none_or(|k| k == item.kind)
}

#[async_trait]
impl InspirationStore for MockStore {
    async fn insert_status_check(&self, check: StatusCheck) -> Result<()> {
        self.enter()?;
        self.checks.write().await.push(check);
        Ok(())
    }

    async fn list_status_checks(&self, limit: u64) -> Result<Vec<StatusCheck>> {
        self.enter()?;
        let checks = self.checks.read().await;
        Ok(checks.iter().take(limit as usize).cloned().collect())
    }

    async fn insert_inspiration(&self, new: NewInspiration) -> Result<Inspiration> {
        self.enter()?;
        let contributors = new.initial_contributors();
        let item = Inspiration {
            id: uuid::Uuid::new_v4().to_string(),
            url: new.url,
            title: new.title,
            image_base64: new.image_base64,
            country: new.country,
            city: new.city,
            kind: new.kind,
            theme: new.theme,
            cost_indicator: new.cost_indicator,
            vibe_notes: new.vibe_notes,
            added_by: new.added_by,
            contributors,
            created_at: Utc::now(),
        };
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn find_inspirations(
        &self,
        filter: &InspirationFilter,
        limit: u64,
    ) -> Result<Vec<Inspiration>> {
        self.enter()?;
        let items = self.items.read().await;
        // 新写入的在前
        Ok(items
            .iter()
            .rev()
            .filter(|item| matches(filter, item))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn country_summaries(&self) -> Result<Vec<CountrySummary>> {
        self.enter()?;
        let items = self.items.read().await;
        let mut groups: BTreeMap<String, (i64, BTreeSet<String>)> = BTreeMap::new();
        for item in items.iter() {
            let entry = groups.entry(item.country.clone()).or_default();
            entry.0 += 1;
            if let Some(name) = item.added_by.as_ref().filter(|n| !n.is_empty()) {
                entry.1.insert(name.clone());
            }
        }
        let mut summaries: Vec<CountrySummary> = groups
            .into_iter()
            .map(|(country, (count, names))| CountrySummary {
                country,
                count,
                contributors: names.into_iter().collect(),
            })
            .collect();
        summaries.sort_by(|a, b| b.count.cmp(&a.count).then(a.country.cmp(&b.country)));
        Ok(summaries)
    }

    async fn city_summaries(&self, country: &str) -> Result<Vec<CitySummary>> {
        self.enter()?;
        let items = self.items.read().await;
        let mut groups: BTreeMap<String, i64> = BTreeMap::new();
        for item in items.iter().filter(|i| i.country == country) {
            *groups.entry(item.city.clone()).or_default() += 1;
        }
        let mut summaries: Vec<CitySummary> = groups
            .into_iter()
            .map(|(city, count)| CitySummary { city, count })
            .collect();
        summaries.sort_by(|a, b| b.count.cmp(&a.count).then(a.city.cmp(&b.city)));
        Ok(summaries)
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
