//! 灵感记录端点

use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::trace;

use crate::services::InspirationService;
use crate::storage::InspirationFilter;

use super::helpers::success_response;
use super::types::{InspirationCreateRequest, InspirationsQuery};
use super::validation::parse_kind;

/// POST /inspirations
pub async fn create_inspiration(
    payload: web::Json<InspirationCreateRequest>,
    service: web::Data<Arc<InspirationService>>,
) -> ActixResult<HttpResponse> {
    let new = payload.into_inner().validate()?;
    trace!("API: creating inspiration for {}/{}", new.country, new.city);

    let created = service.create_inspiration(new).await?;
    Ok(success_response(created))
}

/// GET /inspirations?country=&city=&type=
pub async fn list_inspirations(
    query: web::Query<InspirationsQuery>,
    service: web::Data<Arc<InspirationService>>,
) -> ActixResult<HttpResponse> {
    let query = query.into_inner();
    // 空值等同于未提供；空的 type 仍按非法枚举处理
    let filter = InspirationFilter {
        kind: parse_kind(query.kind.as_deref())?,
        country: query.country.filter(|c| !c.is_empty()),
        city: query.city.filter(|c| !c.is_empty()),
    };
    trace!("API: listing inspirations with {:?}", filter);

    let items = service.list_inspirations(filter).await?;
    Ok(success_response(items))
}
