//! 请求校验
//!
//! 收集所有字段级错误后一次性返回，校验失败不会触达存储层。

use std::str::FromStr;

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};

use crate::errors::{FieldViolation, Result, VersoError};
use crate::storage::{CostIndicator, InspirationType, NewInspiration};

use super::types::{InspirationCreateRequest, StatusCheckCreateRequest};

/// JSON 请求体上限（包含 base64 图片）
pub const MAX_JSON_BODY_BYTES: usize = 10 * 1024 * 1024;

const FIELD_REQUIRED: &str = "Field required";
const TYPE_EXPECTED: &str = "Input should be 'activity' or 'cafe'";
const COST_EXPECTED: &str = "Input should be '$', '$$' or '$$$'";

/// 字段错误收集器
#[derive(Debug, Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn required(&mut self, field: &str, value: Option<String>) -> String {
        value.unwrap_or_else(|| {
            self.0.push(FieldViolation::new(field, FIELD_REQUIRED));
            String::new()
        })
    }

    fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldViolation::new(field, message));
    }

    fn finish<T>(self, value: T) -> Result<T> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(VersoError::Validation(self.0))
        }
    }
}

/// 解析可选的 `type` 参数
pub fn parse_kind(raw: Option<&str>) -> Result<Option<InspirationType>> {
    raw.map(|value| {
        InspirationType::from_str(value).map_err(|_| VersoError::validation("type", TYPE_EXPECTED))
    })
    .transpose()
}

impl StatusCheckCreateRequest {
    /// 返回校验后的 client_name
    pub fn validate(self) -> Result<String> {
        let mut violations = Violations::default();
        let client_name = violations.required("client_name", self.client_name);
        violations.finish(client_name)
    }
}

impl InspirationCreateRequest {
    pub fn validate(self) -> Result<NewInspiration> {
        let mut violations = Violations::default();

        let url = violations.required("url", self.url);
        let country = violations.required("country", self.country);
        let city = violations.required("city", self.city);

        let kind = match self.kind.as_deref() {
            None => {
                violations.push("type", FIELD_REQUIRED);
                None
            }
            Some(raw) => match InspirationType::from_str(raw) {
                Ok(kind) => Some(kind),
                Err(_) => {
                    violations.push("type", TYPE_EXPECTED);
                    None
                }
            },
        };

        let cost_indicator = match self.cost_indicator.as_deref() {
            None => None,
            Some(raw) => match CostIndicator::from_str(raw) {
                Ok(cost) => Some(cost),
                Err(_) => {
                    violations.push("cost_indicator", COST_EXPECTED);
                    None
                }
            },
        };

        // kind 为空时必然已记录 type 错误
        let Some(kind) = kind else {
            return Err(VersoError::Validation(violations.0));
        };

        violations.finish(NewInspiration {
            url,
            title: self.title,
            image_base64: self.image_base64,
            country,
            city,
            kind,
            theme: self.theme.unwrap_or_default(),
            cost_indicator,
            vibe_notes: self.vibe_notes,
            added_by: self.added_by,
        })
    }
}

/// JSON 解析失败统一转换为 422
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            err.into()
        }
        JsonPayloadError::Deserialize(e) => {
            VersoError::validation("body", format!("Invalid JSON: {}", e)).into()
        }
        other => VersoError::validation("body", other.to_string()).into(),
    }
}

/// 查询参数解析失败统一转换为 422
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    VersoError::validation("query", err.to_string()).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(json_error_handler)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}
