// ==================== TOURIST SPOT QUERIES ====================
// Consultas e escritas na coleção touristSpot: cada operação monta um
// filtro e dispara exatamente uma chamada ao MongoDB.

use crate::database::MongoDB;
use crate::models::TouristSpotPayload;
use crate::utils::error::AppError;
use crate::utils::json::{bson_into_json, document_into_json};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::Serialize;
use serde_json::Value;

// ==================== RESPONSE MODELS ====================

/// Insert acknowledgment, matching the field names old clients expect.
#[derive(Debug, Serialize)]
pub struct InsertAck {
    pub acknowledged: bool,
    #[serde(rename = "insertedId")]
    pub inserted_id: Value,
}

#[derive(Debug, Serialize)]
pub struct UpdateAck {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

// ==================== SERVICE FUNCTIONS ====================

pub async fn all_spots(db: &MongoDB) -> Result<Vec<Value>, AppError> {
    find_spots(db, doc! {}).await
}

pub async fn spots_by_country(db: &MongoDB, country: &str) -> Result<Vec<Value>, AppError> {
    find_spots(db, doc! { "country": country }).await
}

pub async fn spots_by_owner(db: &MongoDB, email: &str) -> Result<Vec<Value>, AppError> {
    find_spots(db, doc! { "userEmail": email }).await
}

pub async fn spot_by_id(db: &MongoDB, id: &str) -> Result<Option<Value>, AppError> {
    let object_id = parse_object_id(id)?;
    let collection = db.collection::<Document>("touristSpot");

    let spot = collection.find_one(doc! { "_id": object_id }).await?;

    Ok(spot.map(document_into_json))
}

pub async fn insert_spot(
    db: &MongoDB,
    payload: &TouristSpotPayload,
) -> Result<InsertAck, AppError> {
    let collection = db.collection::<Document>("touristSpot");

    let result = collection.insert_one(payload.document()?).await?;

    Ok(InsertAck {
        acknowledged: true,
        inserted_id: bson_into_json(result.inserted_id),
    })
}

/// Overwrites the named fields of a spot. Matching no document is not an
/// error; the acknowledgment just says nothing changed.
pub async fn overwrite_spot(
    db: &MongoDB,
    id: &str,
    payload: &TouristSpotPayload,
) -> Result<UpdateAck, AppError> {
    let object_id = parse_object_id(id)?;
    let collection = db.collection::<Document>("touristSpot");

    let update = doc! { "$set": payload.update_document()? };
    let result = collection.update_one(doc! { "_id": object_id }, update).await?;

    let message = if result.modified_count > 0 {
        "Spot updated successfully!"
    } else {
        "No changes were made."
    };

    Ok(UpdateAck { message })
}

pub async fn delete_spot(db: &MongoDB, id: &str) -> Result<DeleteAck, AppError> {
    let object_id = parse_object_id(id)?;
    let collection = db.collection::<Document>("touristSpot");

    let result = collection.delete_one(doc! { "_id": object_id }).await?;

    Ok(DeleteAck {
        acknowledged: true,
        deleted_count: result.deleted_count,
    })
}

async fn find_spots(db: &MongoDB, filter: Document) -> Result<Vec<Value>, AppError> {
    let collection = db.collection::<Document>("touristSpot");

    let mut cursor = collection.find(filter).await?;

    let mut spots = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(document) => spots.push(document_into_json(document)),
            Err(e) => log::error!("Error reading spot document: {}", e),
        }
    }

    Ok(spots)
}

fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}
