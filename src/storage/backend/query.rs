//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
    sea_query::Expr,
};
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::{model_to_inspiration, model_to_status_check};
use super::timeout::with_timeout;
use crate::errors::Result;
use crate::storage::models::{
    CitySummary, CountrySummary, Inspiration, InspirationFilter, MAX_RESULTS, StatusCheck,
};

use migration::entities::{inspiration, status_check};

/// 按国家分组的计数结果
#[derive(Debug, FromQueryResult)]
struct CountryCountRow {
    country: String,
    count: i64,
}

/// 按城市分组的计数结果
#[derive(Debug, FromQueryResult)]
struct CityCountRow {
    city: String,
    count: i64,
}

/// 构建过滤条件：所有提供的字段按 AND 组合
pub fn build_condition(filter: &InspirationFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(ref country) = filter.country {
        condition = condition.add(inspiration::Column::Country.eq(country.as_str()));
    }

    if let Some(ref city) = filter.city {
        condition = condition.add(inspiration::Column::City.eq(city.as_str()));
    }

    if let Some(kind) = filter.kind {
        condition = condition.add(inspiration::Column::Kind.eq(kind.as_ref()));
    }

    condition
}

/// 将 (country, added_by) 去重结果合并进国家汇总
///
/// 空字符串的 `added_by` 不计入贡献者，贡献者按字母序输出。
pub fn merge_country_contributors(
    counts: Vec<(String, i64)>,
    pairs: Vec<(String, String)>,
) -> Vec<CountrySummary> {
    let mut contributors: HashMap<String, BTreeSet<String>> = HashMap::new();
    for (country, added_by) in pairs {
        if added_by.is_empty() {
            continue;
        }
        contributors.entry(country).or_default().insert(added_by);
    }

    counts
        .into_iter()
        .map(|(country, count)| {
            let names = contributors
                .remove(&country)
                .map(|set| set.into_iter().collect())
                .unwrap_or_default();
            CountrySummary {
                country,
                count,
                contributors: names,
            }
        })
        .collect()
}

impl SeaOrmStorage {
    pub(super) async fn load_status_checks(&self, limit: u64) -> Result<Vec<StatusCheck>> {
        let models = with_timeout(
            "list_status_checks",
            self.call_timeout,
            status_check::Entity::find()
                .order_by_asc(status_check::Column::Seq)
                .limit(limit.min(MAX_RESULTS))
                .all(&self.db),
        )
        .await?;

        Ok(models.into_iter().map(model_to_status_check).collect())
    }

    pub(super) async fn load_inspirations(
        &self,
        filter: &InspirationFilter,
        limit: u64,
    ) -> Result<Vec<Inspiration>> {
        let models = with_timeout(
            "find_inspirations",
            self.call_timeout,
            inspiration::Entity::find()
                .filter(build_condition(filter))
                .order_by_desc(inspiration::Column::CreatedAt)
                .limit(limit.min(MAX_RESULTS))
                .all(&self.db),
        )
        .await?;

        debug!(
            "Loaded {} inspirations for filter {:?}",
            models.len(),
            filter
        );
        models.into_iter().map(model_to_inspiration).collect()
    }

    /// 国家汇总：COUNT 分组 + DISTINCT added_by
    pub(super) async fn aggregate_countries(&self) -> Result<Vec<CountrySummary>> {
        let counts = with_timeout(
            "country_summaries(count)",
            self.call_timeout,
            inspiration::Entity::find()
                .select_only()
                .column(inspiration::Column::Country)
                .column_as(inspiration::Column::Id.count(), "count")
                .group_by(inspiration::Column::Country)
                .order_by_desc(Expr::cust("count"))
                .order_by_asc(inspiration::Column::Country)
                .limit(MAX_RESULTS)
                .into_model::<CountryCountRow>()
                .all(&self.db),
        )
        .await?;

        let pairs = with_timeout(
            "country_summaries(contributors)",
            self.call_timeout,
            inspiration::Entity::find()
                .select_only()
                .column(inspiration::Column::Country)
                .column(inspiration::Column::AddedBy)
                .distinct()
                .filter(inspiration::Column::AddedBy.is_not_null())
                .filter(inspiration::Column::AddedBy.ne(""))
                .into_tuple::<(String, String)>()
                .all(&self.db),
        )
        .await?;

        Ok(merge_country_contributors(
            counts.into_iter().map(|r| (r.country, r.count)).collect(),
            pairs,
        ))
    }

    pub(super) async fn aggregate_cities(&self, country: &str) -> Result<Vec<CitySummary>> {
        let rows = with_timeout(
            "city_summaries",
            self.call_timeout,
            inspiration::Entity::find()
                .select_only()
                .column(inspiration::Column::City)
                .column_as(inspiration::Column::Id.count(), "count")
                .filter(inspiration::Column::Country.eq(country))
                .group_by(inspiration::Column::City)
                .order_by_desc(Expr::cust("count"))
                .order_by_asc(inspiration::Column::City)
                .limit(MAX_RESULTS)
                .into_model::<CityCountRow>()
                .all(&self.db),
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CitySummary {
                city: r.city,
                count: r.count,
            })
            .collect())
    }
}
