// =============================================================================
// FloodWatch Web - Firestore REST Types
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Value Decoding
// 3. Tests
// =============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value as JsonValue};

use crate::reports::RawDocument;

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

/// One page of a `documents.list` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<FirestoreDocument>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A stored document as returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreDocument {
    /// Full resource name, `projects/{p}/databases/{d}/documents/{collection}/{id}`.
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValue>,
}

/// Typed field value. Exactly one key is present per value object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FirestoreValue {
    NullValue(()),
    BooleanValue(bool),
    /// int64 travels as a decimal string.
    IntegerValue(String),
    /// Non-finite doubles arrive as `"NaN"`, `"Infinity"` or `"-Infinity"`.
    DoubleValue(#[serde(deserialize_with = "double_from_wire")] f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(LatLng),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

/// Zero coordinates are omitted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireDouble {
    Number(f64),
    Text(String),
}

fn double_from_wire<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match WireDouble::deserialize(deserializer)? {
        WireDouble::Number(value) => Ok(value),
        WireDouble::Text(text) => match text.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => Err(serde::de::Error::custom(format!(
                "invalid double value: {other}"
            ))),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<FirestoreValue>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValue>,
}

// -----------------------------------------------------------------------------
// 2. Value Decoding
// -----------------------------------------------------------------------------

impl FirestoreValue {
    /// Strip the type tags, leaving the plain JSON shape the SDKs expose.
    pub fn into_json(self) -> JsonValue {
        match self {
            Self::NullValue(()) => JsonValue::Null,
            Self::BooleanValue(b) => JsonValue::Bool(b),
            Self::IntegerValue(raw) => match raw.parse::<i64>() {
                Ok(n) => JsonValue::Number(n.into()),
                Err(_) => JsonValue::String(raw),
            },
            Self::DoubleValue(d) => Number::from_f64(d)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::TimestampValue(s)
            | Self::StringValue(s)
            | Self::BytesValue(s)
            | Self::ReferenceValue(s) => JsonValue::String(s),
            Self::GeoPointValue(point) => {
                let mut map = Map::new();
                map.insert("latitude".into(), json_f64(point.latitude));
                map.insert("longitude".into(), json_f64(point.longitude));
                JsonValue::Object(map)
            }
            Self::ArrayValue(array) => {
                JsonValue::Array(array.values.into_iter().map(Self::into_json).collect())
            }
            Self::MapValue(map) => JsonValue::Object(fields_into_json(map.fields)),
        }
    }
}

fn json_f64(value: f64) -> JsonValue {
    Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

fn fields_into_json(fields: BTreeMap<String, FirestoreValue>) -> Map<String, JsonValue> {
    fields
        .into_iter()
        .map(|(key, value)| (key, value.into_json()))
        .collect()
}

impl FirestoreDocument {
    /// Document id, the last segment of the resource name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Convert into the untyped document the normalizer consumes.
    pub fn into_raw(self) -> RawDocument {
        let id = self.id().to_string();
        RawDocument {
            id,
            fields: fields_into_json(self.fields),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------
