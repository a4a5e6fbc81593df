use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;

use crate::database::MongoDB;
use crate::models::TouristSpotPayload;
use crate::services::spot_service;
use crate::utils::error::AppError;

#[derive(Debug, Deserialize)]
pub struct MyListQuery {
    pub email: Option<String>,
}

/// A lista pessoal é identificada pelo e-mail do dono. Query string vazia
/// conta como ausente.
fn required_email(query: &MyListQuery) -> Result<&str, AppError> {
    match query.email.as_deref() {
        Some(email) if !email.is_empty() => Ok(email),
        _ => Err(AppError::MissingQueryParam("Email")),
    }
}

#[utoipa::path(
    get,
    path = "/my-list",
    tag = "My List",
    params(
        ("email" = String, Query, description = "Owner email, required and non-empty")
    ),
    responses(
        (status = 200, description = "Array of spots saved by that owner"),
        (status = 400, description = "Email query parameter missing or empty"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_my_list(
    db: web::Data<MongoDB>,
    query: web::Query<MyListQuery>,
) -> Result<HttpResponse, AppError> {
    let email = required_email(&query)?;
    log::info!("📋 GET /my-list - Listing spots for {}", email);

    let spots = spot_service::spots_by_owner(&db, email).await?;

    log::info!("✅ Found {} spots for {}", spots.len(), email);
    Ok(HttpResponse::Ok().json(spots))
}

#[utoipa::path(
    get,
    path = "/my-list/{id}",
    tag = "My List",
    params(
        ("id" = String, Path, description = "Spot ObjectId (24 hex chars)")
    ),
    responses(
        (status = 200, description = "The matching document, or null when none exists"),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_my_list_spot(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("📋 GET /my-list/{}", id);

    let spot = spot_service::spot_by_id(&db, &id).await?;

    Ok(HttpResponse::Ok().json(spot))
}

#[utoipa::path(
    put,
    path = "/my-list/{id}",
    tag = "My List",
    params(
        ("id" = String, Path, description = "Spot ObjectId (24 hex chars)")
    ),
    responses(
        (status = 200, description = "Update acknowledgment message"),
        (status = 400, description = "Malformed id or invalid body"),
        (status = 500, description = "Database error")
    )
)]
pub async fn update_my_list_spot(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let body = body.into_inner();
    log::info!("📝 PUT /my-list/{} - New data: {}", id, body);

    let payload = TouristSpotPayload::from_body(body)?;
    let ack = spot_service::overwrite_spot(&db, &id, &payload).await?;

    log::info!("✅ {}", ack.message);
    Ok(HttpResponse::Ok().json(ack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    fn my_list_scope() -> actix_web::Scope {
        web::scope("/my-list")
            .route("", web::get().to(get_my_list))
            .route("/{id}", web::get().to(get_my_list_spot))
            .route("/{id}", web::put().to(update_my_list_spot))
    }

    #[actix_web::test]
    async fn test_missing_email_is_rejected() {
        let db = web::Data::new(MongoDB::lazy("touristSpotDB").await);
        let app = test::init_service(App::new().app_data(db).service(my_list_scope())).await;

        let req = test::TestRequest::get().uri("/my-list").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "message": "Email is required" }));
    }

    #[actix_web::test]
    async fn test_empty_email_is_rejected() {
        let db = web::Data::new(MongoDB::lazy("touristSpotDB").await);
        let app = test::init_service(App::new().app_data(db).service(my_list_scope())).await;

        let req = test::TestRequest::get().uri("/my-list?email=").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "message": "Email is required" }));
    }

    #[actix_web::test]
    async fn test_update_with_malformed_id_is_rejected() {
        let db = web::Data::new(MongoDB::lazy("touristSpotDB").await);
        let app = test::init_service(App::new().app_data(db).service(my_list_scope())).await;

        let req = test::TestRequest::put()
            .uri("/my-list/oops")
            .set_json(serde_json::json!({ "spotName": "Kuta Beach" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "message": "Invalid id: oops" }));
    }

    #[actix_web::test]
    async fn test_required_email_accepts_non_empty() {
        let query = MyListQuery {
            email: Some("ana@example.com".to_string()),
        };
        assert_eq!(required_email(&query).unwrap(), "ana@example.com");
    }
}
