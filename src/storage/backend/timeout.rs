//! 数据库调用超时与错误转换
//!
//! 每次数据库操作都在独立的超时内执行；超时后 future 被丢弃，查询随之取消。
//! 不做重试。

use sea_orm::DbErr;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error};

use crate::errors::VersoError;

/// 判断数据库错误是否属于连接层故障
pub fn is_connectivity_error(err: &DbErr) -> bool {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => true,
        DbErr::Exec(_) | DbErr::Query(_) => {
            is_connectivity_message(&err.to_string().to_lowercase())
        }
        _ => false,
    }
}

/// 通过错误消息识别连接故障（回退方案）
fn is_connectivity_message(err_str: &str) -> bool {
    err_str.contains("connection refused")
        || err_str.contains("connection reset")
        || err_str.contains("broken pipe")
        || err_str.contains("pool timed out")
        || err_str.contains("pool closed")
        || err_str.contains("unable to open database")
}

/// 将 DbErr 转换为对外错误：连接故障 → 503，其余 → 500
pub fn translate_db_error(operation_name: &str, err: DbErr) -> VersoError {
    if is_connectivity_error(&err) {
        error!("Operation '{}' lost database connectivity: {}", operation_name, err);
        VersoError::database_connection(format!("{}: {}", operation_name, err))
    } else {
        error!("Operation '{}' failed: {}", operation_name, err);
        VersoError::database_operation(format!("{}: {}", operation_name, err))
    }
}

/// 带超时的执行器
pub async fn with_timeout<T, Fut>(
    operation_name: &str,
    timeout: Duration,
    operation: Fut,
) -> Result<T, VersoError>
where
    Fut: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(Ok(result)) => {
            debug!("Operation '{}' completed", operation_name);
            Ok(result)
        }
        Ok(Err(e)) => Err(translate_db_error(operation_name, e)),
        Err(_) => {
            error!(
                "Operation '{}' timed out after {} ms",
                operation_name,
                timeout.as_millis()
            );
            Err(VersoError::timeout(format!(
                "{} timed out after {} ms",
                operation_name,
                timeout.as_millis()
            )))
        }
    }
}
