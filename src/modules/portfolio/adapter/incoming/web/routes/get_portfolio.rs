use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public portfolio content
///
/// Profile, grouped skills, projects, education and the active CV and image.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Portfolio content", body = inline(SuccessResponse<Portfolio>)),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.execute().await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => e.to_response(),
    }
}
