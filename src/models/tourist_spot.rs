use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Value};

use crate::utils::error::AppError;

/// Campos convencionais de um ponto turístico. Nenhum é obrigatório; tudo
/// que o cliente enviar além deles é aceito e armazenado como veio.
pub const SPOT_FIELDS: [&str; 11] = [
    "image",
    "spotName",
    "country",
    "location",
    "description",
    "cost",
    "seasonality",
    "travelTime",
    "visitors",
    "userEmail",
    "userName",
];

/// Fields that existing data carries as either a string or a number.
const STRING_OR_NUMBER_FIELDS: [&str; 2] = ["cost", "visitors"];

/// A tourist spot as clients send it: the validated request object, kept
/// whole so inserts store exactly what arrived, explicit nulls included.
#[derive(Debug, Clone)]
pub struct TouristSpotPayload {
    body: Map<String, Value>,
}

impl TouristSpotPayload {
    /// Validates a request body and turns it into a payload.
    ///
    /// The body must be a JSON object. Conventional fields are type-checked
    /// when present (null is always accepted); nothing is required and
    /// unknown fields pass through untouched.
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        let map = match body {
            Value::Object(map) => map,
            _ => {
                return Err(AppError::ValidationError(
                    "request body must be a JSON object".to_string(),
                ))
            }
        };

        for field in SPOT_FIELDS {
            if let Some(value) = map.get(field) {
                validate_field(field, value)?;
            }
        }

        Ok(Self { body: map })
    }

    /// The document inserted on POST: exactly what the client sent.
    pub fn document(&self) -> Result<Document, AppError> {
        bson::to_document(&self.body)
            .map_err(|e| AppError::ValidationError(format!("unsupported value in body: {}", e)))
    }

    /// O documento `$set` do PUT: sobrescreve os 11 campos nomeados
    /// incondicionalmente, com null para os que o corpo não trouxe.
    pub fn update_document(&self) -> Result<Document, AppError> {
        let mut set = Document::new();
        for field in SPOT_FIELDS {
            let value = match self.body.get(field) {
                Some(value) => bson::to_bson(value).map_err(|e| {
                    AppError::ValidationError(format!(
                        "unsupported value for field '{}': {}",
                        field, e
                    ))
                })?,
                None => Bson::Null,
            };
            set.insert(field, value);
        }
        Ok(set)
    }
}

fn validate_field(field: &str, value: &Value) -> Result<(), AppError> {
    if value.is_null() {
        return Ok(());
    }

    let (ok, expected) = if STRING_OR_NUMBER_FIELDS.contains(&field) {
        (value.is_string() || value.is_number(), "string or number")
    } else {
        (value.is_string(), "string")
    };

    if ok {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "field '{}' must be a {}",
            field, expected
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_must_be_an_object() {
        let result = TouristSpotPayload::from_body(json!(["not", "an", "object"]));
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_ill_typed_field_is_rejected() {
        let result = TouristSpotPayload::from_body(json!({ "spotName": 42 }));
        match result {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "field 'spotName' must be a string");
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_cost_accepts_string_or_number() {
        assert!(TouristSpotPayload::from_body(json!({ "cost": "1200 USD" })).is_ok());
        assert!(TouristSpotPayload::from_body(json!({ "cost": 1200 })).is_ok());
        assert!(TouristSpotPayload::from_body(json!({ "cost": { "amount": 1 } })).is_err());
    }

    #[test]
    fn test_null_fields_pass_validation() {
        assert!(TouristSpotPayload::from_body(json!({ "image": null })).is_ok());
        assert!(TouristSpotPayload::from_body(json!({ "cost": null })).is_ok());
    }

    #[test]
    fn test_explicit_nulls_survive_the_insert_document() {
        let payload = TouristSpotPayload::from_body(json!({
            "spotName": null,
            "note": null,
        }))
        .unwrap();

        let document = payload.document().unwrap();
        assert_eq!(document.get("spotName"), Some(&Bson::Null));
        assert_eq!(document.get("note"), Some(&Bson::Null));
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let payload = TouristSpotPayload::from_body(json!({
            "spotName": "Ha Long Bay",
            "rating": 5,
            "nested": { "anything": true },
        }))
        .unwrap();

        let document = payload.document().unwrap();
        assert_eq!(document.get_i64("rating").unwrap(), 5);
        assert!(document.get_document("nested").unwrap().get_bool("anything").unwrap());
    }

    #[test]
    fn test_insert_document_matches_body() {
        let payload = TouristSpotPayload::from_body(json!({
            "spotName": "Ha Long Bay",
            "country": "Vietnam",
            "visitors": 10000,
            "rating": 5,
        }))
        .unwrap();

        let document = payload.document().unwrap();
        assert_eq!(document.get_str("spotName").unwrap(), "Ha Long Bay");
        assert_eq!(document.get_str("country").unwrap(), "Vietnam");
        assert_eq!(document.get_i64("visitors").unwrap(), 10000);
        assert_eq!(document.get_i64("rating").unwrap(), 5);
    }

    #[test]
    fn test_update_document_overwrites_all_named_fields() {
        let payload = TouristSpotPayload::from_body(json!({
            "spotName": "Ha Long Bay",
            "ignored_extra": "not part of the update",
        }))
        .unwrap();

        let set = payload.update_document().unwrap();
        assert_eq!(set.len(), SPOT_FIELDS.len());
        assert_eq!(set.get_str("spotName").unwrap(), "Ha Long Bay");
        assert_eq!(set.get("country"), Some(&Bson::Null));
        assert_eq!(set.get("userEmail"), Some(&Bson::Null));
        assert!(set.get("ignored_extra").is_none());
    }
}
