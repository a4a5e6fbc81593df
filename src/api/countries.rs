use actix_web::{web, HttpResponse};

use crate::database::MongoDB;
use crate::services::country_service;
use crate::utils::error::AppError;

#[utoipa::path(
    get,
    path = "/countries",
    tag = "Countries",
    responses(
        (status = 200, description = "Array of all country documents"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_countries(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    log::info!("🌍 GET /countries - Listing all countries");

    let countries = country_service::all_countries(&db).await?;

    log::info!("✅ Returned {} countries", countries.len());
    Ok(HttpResponse::Ok().json(countries))
}
