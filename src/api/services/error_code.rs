//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::VersoError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 灵感数据错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    InternalServerError = 1005,
    ValidationFailed = 1022,
    ServiceUnavailable = 1030,

    // 灵感数据错误 3000-3099
    InspirationDatabaseError = 3005,
    InspirationCorruptRecord = 3007,
}

impl From<&VersoError> for ErrorCode {
    fn from(err: &VersoError) -> Self {
        match err {
            VersoError::Validation(_) => ErrorCode::ValidationFailed,
            VersoError::DatabaseConnection(_) | VersoError::Timeout(_) => {
                ErrorCode::ServiceUnavailable
            }
            VersoError::DatabaseOperation(_) => ErrorCode::InspirationDatabaseError,
            VersoError::Serialization(_) => ErrorCode::InspirationCorruptRecord,
            VersoError::DatabaseConfig(_) | VersoError::FileOperation(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}
