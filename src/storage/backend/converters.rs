use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::errors::{Result, VersoError};
use crate::storage::models::{
    CostIndicator, Inspiration, InspirationType, NewInspiration, StatusCheck,
};
use migration::entities::{inspiration, status_check};

/// 将列表编码为 JSON 数组文本
pub fn encode_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// 解码 JSON 数组文本；缺失或损坏时返回空列表
pub fn decode_list(raw: Option<&str>, field: &str) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(text) if text.trim().is_empty() => Vec::new(),
        Some(text) => serde_json::from_str::<Vec<String>>(text).unwrap_or_else(|e| {
            warn!("Malformed '{}' column ({}), treating as empty", field, e);
            Vec::new()
        }),
    }
}

/// 将 Sea-ORM Model 转换为对外的 Inspiration
///
/// `theme`/`contributors` 缺失时为空列表，`created_at` 缺失时取当前时间。
pub fn model_to_inspiration(model: inspiration::Model) -> Result<Inspiration> {
    let kind = InspirationType::from_str(&model.kind).map_err(|_| {
        VersoError::serialization(format!(
            "Inspiration '{}' has unknown type '{}'",
            model.id, model.kind
        ))
    })?;

    let cost_indicator = model
        .cost_indicator
        .as_deref()
        .map(|raw| {
            CostIndicator::from_str(raw).map_err(|_| {
                VersoError::serialization(format!(
                    "Inspiration '{}' has unknown cost_indicator '{}'",
                    model.id, raw
                ))
            })
        })
        .transpose()?;

    Ok(Inspiration {
        theme: decode_list(model.theme.as_deref(), "theme"),
        contributors: decode_list(model.contributors.as_deref(), "contributors"),
        created_at: model.created_at.unwrap_or_else(Utc::now),
        id: model.id,
        url: model.url,
        title: model.title,
        image_base64: model.image_base64,
        country: model.country,
        city: model.city,
        kind,
        cost_indicator,
        vibe_notes: model.vibe_notes,
        added_by: model.added_by,
    })
}

/// 将待写入的灵感转换为 ActiveModel，并初始化贡献者列表
pub fn new_inspiration_to_active_model(
    new: &NewInspiration,
    id: &str,
    created_at: DateTime<Utc>,
) -> inspiration::ActiveModel {
    use sea_orm::ActiveValue::Set;

    inspiration::ActiveModel {
        id: Set(id.to_string()),
        url: Set(new.url.clone()),
        title: Set(new.title.clone()),
        image_base64: Set(new.image_base64.clone()),
        country: Set(new.country.clone()),
        city: Set(new.city.clone()),
        kind: Set(new.kind.as_ref().to_string()),
        theme: Set(Some(encode_list(&new.theme))),
        cost_indicator: Set(new.cost_indicator.map(|c| c.as_ref().to_string())),
        vibe_notes: Set(new.vibe_notes.clone()),
        added_by: Set(new.added_by.clone()),
        contributors: Set(Some(encode_list(&new.initial_contributors()))),
        created_at: Set(Some(created_at)),
    }
}

pub fn model_to_status_check(model: status_check::Model) -> StatusCheck {
    StatusCheck {
        id: model.id,
        client_name: model.client_name,
        timestamp: model.timestamp,
    }
}

pub fn status_check_to_active_model(check: &StatusCheck) -> status_check::ActiveModel {
    use sea_orm::ActiveValue::{NotSet, Set};

    status_check::ActiveModel {
        seq: NotSet,
        id: Set(check.id.clone()),
        client_name: Set(check.client_name.clone()),
        timestamp: Set(check.timestamp),
    }
}
