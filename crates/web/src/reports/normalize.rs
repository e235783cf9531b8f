// =============================================================================
// FloodWatch Web - Report Normalization
// =============================================================================
// Table of Contents:
// 1. Coordinate Conventions
// 2. Normalizer
// 3. Tests
// =============================================================================

use serde_json::{Map, Value as JsonValue};

use super::{GeoPoint, RawDocument, Report};

// -----------------------------------------------------------------------------
// 1. Coordinate Conventions
// -----------------------------------------------------------------------------

/// Field-name pair a location object may use for its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateConvention {
    /// `{ "_lat", "_long" }`, a GeoPoint serialized by the client SDK.
    Underscored,
    /// `{ "latitude", "longitude" }`.
    Named,
}

impl CoordinateConvention {
    /// Tried in order; the first convention yielding both coordinates wins.
    pub const PRIORITY: [CoordinateConvention; 2] = [Self::Underscored, Self::Named];

    pub fn field_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Underscored => ("_lat", "_long"),
            Self::Named => ("latitude", "longitude"),
        }
    }

    pub fn extract(self, location: &Map<String, JsonValue>) -> Option<GeoPoint> {
        let (lat_key, lng_key) = self.field_names();
        let latitude = location.get(lat_key)?.as_f64()?;
        let longitude = location.get(lng_key)?.as_f64()?;
        Some(GeoPoint::new(latitude, longitude))
    }
}

/// Resolve a raw `location` value into a point, if any convention fits.
pub fn resolve_location(value: Option<&JsonValue>) -> Option<GeoPoint> {
    let location = value?.as_object()?;
    CoordinateConvention::PRIORITY
        .iter()
        .find_map(|convention| convention.extract(location))
}

// -----------------------------------------------------------------------------
// 2. Normalizer
// -----------------------------------------------------------------------------

fn string_field(fields: &Map<String, JsonValue>, key: &str) -> Option<String> {
    fields.get(key)?.as_str().map(str::to_string)
}

/// Map one raw document to a [`Report`]. Never fails.
pub fn normalize(doc: &RawDocument) -> Report {
    let fields = &doc.fields;
    Report {
        id: doc.id.clone(),
        username: string_field(fields, "username"),
        location: resolve_location(fields.get("location")),
        created_at: string_field(fields, "createdAt"),
        severity: string_field(fields, "severity"),
        status: string_field(fields, "status"),
        note: string_field(fields, "note"),
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str, fields: JsonValue) -> RawDocument {
        RawDocument {
            id: id.to_string(),
            fields: fields.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_full_document() {
        let report = normalize(&doc(
            "r1",
            json!({
                "username": "alice",
                "location": { "latitude": 8.5241, "longitude": 76.9366 },
                "createdAt": "2024-06-01T10:00:00Z",
                "severity": "Severe",
                "status": "pending",
                "note": "water rising near the bridge",
                "photoUrl": "ignored"
            }),
        ));

        assert_eq!(report.id, "r1");
        assert_eq!(report.username.as_deref(), Some("alice"));
        assert_eq!(report.location, Some(GeoPoint::new(8.5241, 76.9366)));
        assert_eq!(report.created_at.as_deref(), Some("2024-06-01T10:00:00Z"));
        assert_eq!(report.severity.as_deref(), Some("Severe"));
        assert_eq!(report.status.as_deref(), Some("pending"));
        assert_eq!(report.note.as_deref(), Some("water rising near the bridge"));
    }

    #[test]
    fn test_missing_location_is_none() {
        let report = normalize(&doc("r2", json!({ "username": "bob" })));
        assert_eq!(report.location, None);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(normalize(&doc("r3", json!({}))), Report::new("r3"));
    }

    #[test]
    fn test_underscored_alias_matches_named_convention() {
        let named = normalize(&doc(
            "a",
            json!({ "location": { "latitude": 8.49, "longitude": 76.95 } }),
        ));
        let underscored = normalize(&doc(
            "a",
            json!({ "location": { "_lat": 8.49, "_long": 76.95 } }),
        ));
        assert_eq!(named.location, underscored.location);
        assert!(named.location.is_some());
    }

    #[test]
    fn test_first_convention_wins_when_both_present() {
        let report = normalize(&doc(
            "a",
            json!({ "location": {
                "_lat": 1.0, "_long": 2.0,
                "latitude": 3.0, "longitude": 4.0
            } }),
        ));
        assert_eq!(report.location, Some(GeoPoint::new(1.0, 2.0)));
    }

    #[test]
    fn test_half_convention_falls_through() {
        // `_lat` without `_long` does not complete the first convention.
        let report = normalize(&doc(
            "a",
            json!({ "location": { "_lat": 1.0, "latitude": 3.0, "longitude": 4.0 } }),
        ));
        assert_eq!(report.location, Some(GeoPoint::new(3.0, 4.0)));

        let report = normalize(&doc(
            "b",
            json!({ "location": { "_lat": 1.0, "longitude": 4.0 } }),
        ));
        assert_eq!(report.location, None);
    }

    #[test]
    fn test_integer_coordinates_accepted() {
        let report = normalize(&doc(
            "a",
            json!({ "location": { "latitude": 8, "longitude": 77 } }),
        ));
        assert_eq!(report.location, Some(GeoPoint::new(8.0, 77.0)));
    }

    #[test]
    fn test_malformed_fields_degrade_to_none() {
        let report = normalize(&doc(
            "a",
            json!({
                "username": 42,
                "location": "8.5,76.9",
                "severity": null,
                "status": ["pending"],
                "note": { "text": "hi" }
            }),
        ));
        assert_eq!(report, Report::new("a"));

        let report = normalize(&doc(
            "b",
            json!({ "location": { "latitude": "8.5", "longitude": 76.9 } }),
        ));
        assert_eq!(report.location, None);
    }
}
