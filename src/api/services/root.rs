//! 根路径

use actix_web::HttpResponse;

use super::helpers::success_response;
use super::types::Greeting;

pub const GREETING: &str = "Verso API";

/// GET /
pub async fn greeting() -> HttpResponse {
    success_response(Greeting {
        message: GREETING.to_string(),
    })
}
