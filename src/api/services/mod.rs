//! API 服务模块
//!
//! 该模块包含全部 HTTP 端点：
//! - 问候
//! - 心跳记录
//! - 灵感记录的创建与查询
//! - 国家/城市汇总

mod collections;
pub mod error_code;
mod helpers;
mod inspirations;
mod root;
pub mod routes;
mod status;
mod types;
pub mod validation;

// 重新导出类型
pub use types::*;

// 重新导出帮助函数
pub use helpers::{error_from_verso, error_response, success_response, validation_response};

// 重新导出错误码
pub use error_code::ErrorCode;

pub use root::GREETING;
pub use routes::api_routes;
