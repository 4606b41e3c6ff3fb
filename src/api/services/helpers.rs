//! API 帮助函数

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{error, warn};

use crate::errors::{FieldViolation, VersoError};

use super::error_code::ErrorCode;
use super::types::ApiResponse;

/// 构建信封格式的 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 构建成功响应：直接返回记录本身
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(data)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// 构建校验失败响应（422 + 字段列表）
pub fn validation_response(violations: &[FieldViolation]) -> HttpResponse {
    json_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ValidationFailed,
        "Validation failed",
        Some(violations),
    )
}

/// 从 VersoError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
///
/// 5xx 只返回概要信息，细节写入日志。
pub fn error_from_verso(err: &VersoError) -> HttpResponse {
    let status = err.http_status();
    let code = ErrorCode::from(err);

    match err.violations() {
        Some(violations) => {
            warn!("Rejected request: {}", err.message());
            validation_response(violations)
        }
        None if status == StatusCode::SERVICE_UNAVAILABLE => {
            error!("Storage unavailable: {}", err.format_simple());
            error_response(status, code, "Service temporarily unavailable")
        }
        None => {
            error!("Request failed: {}", err.format_simple());
            error_response(status, code, "Internal server error")
        }
    }
}

impl ResponseError for VersoError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        error_from_verso(self)
    }
}
