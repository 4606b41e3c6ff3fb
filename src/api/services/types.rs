//! API 请求/响应类型定义

use serde::{Deserialize, Serialize};

/// 错误响应信封
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

/// 根路径问候
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Greeting {
    pub message: String,
}

/// POST /status 请求体
#[derive(Deserialize, Clone, Debug, Default)]
pub struct StatusCheckCreateRequest {
    #[serde(default)]
    pub client_name: Option<String>,
}

/// POST /inspirations 请求体
///
/// 所有字段先按可选接收，由校验层统一收集缺失/非法字段。
#[derive(Deserialize, Clone, Debug, Default)]
pub struct InspirationCreateRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub theme: Option<Vec<String>>,
    #[serde(default)]
    pub cost_indicator: Option<String>,
    #[serde(default)]
    pub vibe_notes: Option<String>,
    #[serde(default)]
    pub added_by: Option<String>,
}

/// GET /inspirations 查询参数
#[derive(Deserialize, Clone, Debug, Default)]
pub struct InspirationsQuery {
    pub country: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /city/{country}/{city}/items 查询参数
#[derive(Deserialize, Clone, Debug, Default)]
pub struct CityItemsQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
