use std::fmt;

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// 单个字段的校验失败信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum VersoError {
    Validation(Vec<FieldViolation>),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Timeout(String),
    FileOperation(String),
    Serialization(String),
}

impl VersoError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            VersoError::Validation(_) => "E001",
            VersoError::DatabaseConfig(_) => "E002",
            VersoError::DatabaseConnection(_) => "E003",
            VersoError::DatabaseOperation(_) => "E004",
            VersoError::Timeout(_) => "E005",
            VersoError::FileOperation(_) => "E006",
            VersoError::Serialization(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            VersoError::Validation(_) => "Validation Error",
            VersoError::DatabaseConfig(_) => "Database Configuration Error",
            VersoError::DatabaseConnection(_) => "Database Connection Error",
            VersoError::DatabaseOperation(_) => "Database Operation Error",
            VersoError::Timeout(_) => "Database Timeout",
            VersoError::FileOperation(_) => "File Operation Error",
            VersoError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            VersoError::Validation(violations) => violations
                .iter()
                .map(|v| format!("{}: {}", v.field, v.message))
                .collect::<Vec<_>>()
                .join("; "),
            VersoError::DatabaseConfig(msg)
            | VersoError::DatabaseConnection(msg)
            | VersoError::DatabaseOperation(msg)
            | VersoError::Timeout(msg)
            | VersoError::FileOperation(msg)
            | VersoError::Serialization(msg) => msg.clone(),
        }
    }

    /// 映射到 HTTP 状态码
    ///
    /// 连接失败与超时视为服务暂不可用，其余存储故障为 500。
    pub fn http_status(&self) -> StatusCode {
        match self {
            VersoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            VersoError::DatabaseConnection(_) | VersoError::Timeout(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            VersoError::DatabaseConfig(_)
            | VersoError::DatabaseOperation(_)
            | VersoError::FileOperation(_)
            | VersoError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 校验错误携带的字段列表
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            VersoError::Validation(violations) => Some(violations),
            _ => None,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for VersoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for VersoError {}

// 便捷的构造函数
impl VersoError {
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        VersoError::Validation(vec![FieldViolation::new(field, message)])
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        VersoError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        VersoError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        VersoError::DatabaseOperation(msg.into())
    }

    pub fn timeout<T: Into<String>>(msg: T) -> Self {
        VersoError::Timeout(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        VersoError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        VersoError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for VersoError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                VersoError::DatabaseConnection(err.to_string())
            }
            _ => VersoError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for VersoError {
    fn from(err: std::io::Error) -> Self {
        VersoError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for VersoError {
    fn from(err: serde_json::Error) -> Self {
        VersoError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VersoError>;
