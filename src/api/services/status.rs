//! 心跳记录端点

use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::{info, trace};

use crate::services::InspirationService;

use super::helpers::success_response;
use super::types::StatusCheckCreateRequest;

/// POST /status
pub async fn create_status_check(
    payload: web::Json<StatusCheckCreateRequest>,
    service: web::Data<Arc<InspirationService>>,
) -> ActixResult<HttpResponse> {
    let client_name = payload.into_inner().validate()?;
    trace!("API: status check from '{}'", client_name);

    let check = service.create_status_check(client_name).await?;
    info!("API: status check {} recorded", check.id);
    Ok(success_response(check))
}

/// GET /status
pub async fn list_status_checks(
    service: web::Data<Arc<InspirationService>>,
) -> ActixResult<HttpResponse> {
    let checks = service.list_status_checks().await?;
    trace!("API: returning {} status checks", checks.len());
    Ok(success_response(checks))
}
