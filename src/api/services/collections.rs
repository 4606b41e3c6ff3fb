//! 国家/城市汇总端点

use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::trace;

use crate::services::InspirationService;

use super::helpers::success_response;
use super::types::CityItemsQuery;
use super::validation::parse_kind;

/// GET /collections/summary
pub async fn country_summary(
    service: web::Data<Arc<InspirationService>>,
) -> ActixResult<HttpResponse> {
    let summaries = service.country_summaries().await?;
    trace!("API: {} countries in summary", summaries.len());
    Ok(success_response(summaries))
}

/// GET /collections/{country}/cities
pub async fn country_cities(
    path: web::Path<String>,
    service: web::Data<Arc<InspirationService>>,
) -> ActixResult<HttpResponse> {
    let country = path.into_inner();
    let cities = service.city_summaries(&country).await?;
    trace!("API: {} cities for '{}'", cities.len(), country);
    Ok(success_response(cities))
}

/// GET /city/{country}/{city}/items?type=
pub async fn city_items(
    path: web::Path<(String, String)>,
    query: web::Query<CityItemsQuery>,
    service: web::Data<Arc<InspirationService>>,
) -> ActixResult<HttpResponse> {
    let (country, city) = path.into_inner();
    let kind = parse_kind(query.kind.as_deref())?;

    let items = service.city_items(&country, &city, kind).await?;
    trace!("API: {} items for {}/{}", items.len(), country, city);
    Ok(success_response(items))
}
