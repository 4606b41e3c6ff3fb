//! API 路由配置

use actix_web::web;

use super::collections::{city_items, country_cities, country_summary};
use super::inspirations::{create_inspiration, list_inspirations};
use super::root::greeting;
use super::status::{create_status_check, list_status_checks};
use super::validation::{json_config, query_config};

/// 挂载在 `prefix` 下的全部路由
///
/// 包含：
/// - GET / - 问候
/// - GET/POST /status - 心跳记录
/// - GET/POST /inspirations - 灵感记录
/// - GET /collections/summary - 按国家汇总
/// - GET /collections/{country}/cities - 按城市汇总
/// - GET /city/{country}/{city}/items - 单个城市的灵感
pub fn api_routes(prefix: &str) -> actix_web::Scope {
    web::scope(prefix)
        .app_data(json_config())
        .app_data(query_config())
        .route("", web::get().to(greeting))
        .route("/", web::get().to(greeting))
        .route("/status", web::get().to(list_status_checks))
        .route("/status", web::post().to(create_status_check))
        .route("/inspirations", web::get().to(list_inspirations))
        .route("/inspirations", web::post().to(create_inspiration))
        // summary 必须在 /{country}/cities 之前
        .route("/collections/summary", web::get().to(country_summary))
        .route("/collections/{country}/cities", web::get().to(country_cities))
        .route("/city/{country}/{city}/items", web::get().to(city_items))
}
