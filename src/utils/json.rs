use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Converts a stored document into the plain JSON the API serves. ObjectIds
/// become 24-hex strings and datetimes RFC 3339 strings; everything else
/// keeps its relaxed extended-JSON rendering.
pub fn document_into_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_into_json(value)))
            .collect(),
    )
}

pub fn bson_into_json(bson: Bson) -> Value {
    match bson {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(dt.try_to_rfc3339_string().unwrap_or_default()),
        Bson::Document(document) => document_into_json(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_into_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
