use crate::database::MongoDB;
use crate::utils::error::AppError;
use crate::utils::json::document_into_json;
use futures::stream::StreamExt;
use mongodb::bson::{doc, Document};
use serde_json::Value;

/// Countries are free-form documents: this service only reads them out and
/// passes them along.
pub async fn all_countries(db: &MongoDB) -> Result<Vec<Value>, AppError> {
    let collection = db.collection::<Document>("countriesOfSoutheastAsia");

    let mut cursor = collection.find(doc! {}).await?;

    let mut countries = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(document) => countries.push(document_into_json(document)),
            Err(e) => log::error!("Error reading country document: {}", e),
        }
    }

    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_all_countries_reads_the_whole_collection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db = MongoDB::new(&uri, "touristSpotCountryTestDB").await.expect("connection");

        let collection = db.collection::<Document>("countriesOfSoutheastAsia");
        collection.delete_many(doc! {}).await.expect("clean collection");
        collection
            .insert_many(vec![
                doc! { "name": "Vietnam", "capital": "Hanoi" },
                doc! { "name": "Thailand", "capital": "Bangkok" },
            ])
            .await
            .expect("seed countries");

        let countries = all_countries(&db).await.unwrap();
        assert_eq!(countries.len(), 2);
        assert!(countries.iter().any(|country| country["name"] == "Vietnam"));
    }
}
