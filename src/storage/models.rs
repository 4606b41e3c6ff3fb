use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// 单次查询返回的最大记录数
pub const MAX_RESULTS: u64 = 1000;

/// 心跳记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

/// 灵感类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InspirationType {
    Activity,
    Cafe,
}

/// 花费等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr)]
pub enum CostIndicator {
    #[serde(rename = "$")]
    #[strum(serialize = "$")]
    Low,
    #[serde(rename = "$$")]
    #[strum(serialize = "$$")]
    Medium,
    #[serde(rename = "$$$")]
    #[strum(serialize = "$$$")]
    High,
}

/// 对外暴露的灵感记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspiration {
    pub id: String,
    pub url: String,
    pub title: Option<String>,
    pub image_base64: Option<String>,
    pub country: String,
    pub city: String,
    #[serde(rename = "type")]
    pub kind: InspirationType,
    #[serde(default)]
    pub theme: Vec<String>,
    pub cost_indicator: Option<CostIndicator>,
    pub vibe_notes: Option<String>,
    pub added_by: Option<String>,
    #[serde(default)]
    pub contributors: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// 已通过校验、待写入的灵感
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInspiration {
    pub url: String,
    pub title: Option<String>,
    pub image_base64: Option<String>,
    pub country: String,
    pub city: String,
    pub kind: InspirationType,
    pub theme: Vec<String>,
    pub cost_indicator: Option<CostIndicator>,
    pub vibe_notes: Option<String>,
    pub added_by: Option<String>,
}

impl NewInspiration {
    /// 初始贡献者列表：仅包含非空的 `added_by`
    pub fn initial_contributors(&self) -> Vec<String> {
        match self.added_by.as_deref() {
            Some(name) if !name.is_empty() => vec![name.to_string()],
            _ => Vec::new(),
        }
    }
}

/// 灵感列表过滤条件（所有字段按 AND 组合，缺省字段不参与过滤）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspirationFilter {
    pub country: Option<String>,
    pub city: Option<String>,
    pub kind: Option<InspirationType>,
}

impl InspirationFilter {
    pub fn for_city(country: &str, city: &str, kind: Option<InspirationType>) -> Self {
        Self {
            country: Some(country.to_string()),
            city: Some(city.to_string()),
            kind,
        }
    }
}

/// 按国家聚合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub country: String,
    pub count: i64,
    #[serde(default)]
    pub contributors: Vec<String>,
}

/// 按城市聚合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySummary {
    pub city: String,
    pub count: i64,
}
