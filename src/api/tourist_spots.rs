use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::database::MongoDB;
use crate::models::TouristSpotPayload;
use crate::services::spot_service;
use crate::utils::error::AppError;

#[utoipa::path(
    get,
    path = "/tourist-spot",
    tag = "Tourist Spots",
    responses(
        (status = 200, description = "Array of all tourist spot documents"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_tourist_spots(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    log::info!("🏝️ GET /tourist-spot - Listing all spots");

    let spots = spot_service::all_spots(&db).await?;

    log::info!("✅ Returned {} spots", spots.len());
    Ok(HttpResponse::Ok().json(spots))
}

#[utoipa::path(
    get,
    path = "/tourist-spot/{id}",
    tag = "Tourist Spots",
    params(
        ("id" = String, Path, description = "Spot ObjectId (24 hex chars)")
    ),
    responses(
        (status = 200, description = "The matching document, or null when none exists"),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_tourist_spot(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🏝️ GET /tourist-spot/{}", id);

    let spot = spot_service::spot_by_id(&db, &id).await?;

    Ok(HttpResponse::Ok().json(spot))
}

#[utoipa::path(
    get,
    path = "/tourist-spot/country/{country_name}",
    tag = "Tourist Spots",
    params(
        ("country_name" = String, Path, description = "Exact country name to match")
    ),
    responses(
        (status = 200, description = "Array of spots in that country"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_spots_by_country(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let country_name = path.into_inner();
    log::info!("🌍 GET /tourist-spot/country/{}", country_name);

    let spots = spot_service::spots_by_country(&db, &country_name).await?;

    log::info!("✅ Found {} spots in {}", spots.len(), country_name);
    Ok(HttpResponse::Ok().json(spots))
}

#[utoipa::path(
    post,
    path = "/tourist-spot",
    tag = "Tourist Spots",
    responses(
        (status = 200, description = "Insert acknowledgment with the assigned id"),
        (status = 400, description = "Body is not an object or a field has the wrong type"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_tourist_spot(
    db: web::Data<MongoDB>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    log::info!("📝 POST /tourist-spot - New spot: {}", body);

    let payload = TouristSpotPayload::from_body(body)?;
    let ack = spot_service::insert_spot(&db, &payload).await?;

    log::info!("✅ Spot inserted with id {}", ack.inserted_id);
    Ok(HttpResponse::Ok().json(ack))
}

#[utoipa::path(
    delete,
    path = "/tourist-spot/{id}",
    tag = "Tourist Spots",
    params(
        ("id" = String, Path, description = "Spot ObjectId (24 hex chars)")
    ),
    responses(
        (status = 200, description = "Delete acknowledgment"),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn delete_tourist_spot(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /tourist-spot/{}", id);

    let ack = spot_service::delete_spot(&db, &id).await?;

    log::info!("✅ Deleted {} spot(s)", ack.deleted_count);
    Ok(HttpResponse::Ok().json(ack))
}
