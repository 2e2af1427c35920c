// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend.

use serde::{Deserialize, Serialize};

/// Boat record (matches the boats table schema)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Hull length in feet
    pub length: f64,
    pub price: rust_decimal::Decimal,
    /// Image path served from the site root
    pub picture: String,
    pub boat_type_id: i32,
    /// Denormalized type name, joined in by the query layer
    pub boat_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// Boat category used by the search filter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoatType {
    pub id: i32,
    pub name: String,
}

/// Customer review attached to a boat
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub boat_id: i32,
    pub subject: String,
    pub comment: String,
    /// 1-5 stars
    pub rating: i32,
    pub reviewer: String,
    pub created_at: chrono::NaiveDateTime,
}

/// Staged inline edit for a single boat row
///
/// Only the editable columns appear here; `None` means "leave unchanged".
/// A batch save submits one of these per touched row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoatUpdate {
    pub id: i32,
    pub name: Option<String>,
    pub length: Option<f64>,
    pub price: Option<rust_decimal::Decimal>,
    pub description: Option<String>,
}

impl BoatUpdate {
    pub fn for_boat(id: i32) -> Self {
        BoatUpdate {
            id,
            ..Default::default()
        }
    }

    /// True when no field was actually edited
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.length.is_none()
            && self.price.is_none()
            && self.description.is_none()
    }
}

/// Similarity criterion for the related-boats panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarBy {
    #[default]
    Type,
    Price,
    Length,
}

impl SimilarBy {
    pub const ALL: [SimilarBy; 3] = [SimilarBy::Type, SimilarBy::Price, SimilarBy::Length];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarBy::Type => "Type",
            SimilarBy::Price => "Price",
            SimilarBy::Length => "Length",
        }
    }

    pub fn parse(value: &str) -> SimilarBy {
        match value {
            "Price" => SimilarBy::Price,
            "Length" => SimilarBy::Length,
            _ => SimilarBy::Type,
        }
    }
}

impl std::fmt::Display for SimilarBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renderable map annotation
///
/// Derived data: rebuilt from boat records on every change, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl MapMarker {
    /// Marker for a boat record
    pub fn for_boat(boat: &Boat) -> MapMarker {
        MapMarker {
            latitude: boat.latitude,
            longitude: boat.longitude,
            title: boat.name.clone(),
            description: coords_description(boat.latitude, boat.longitude),
            icon: "map".to_string(),
        }
    }
}

/// Shared `Coords: lat, lon` marker description format
pub fn coords_description(latitude: f64, longitude: f64) -> String {
    format!("Coords: {}, {}", latitude, longitude)
}

/// One-shot browser geolocation result
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// User-facing toast payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: uuid::Uuid,
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Notification {
            id: uuid::Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_boat() -> Boat {
        Boat {
            id: 1,
            name: "Gallifrey Falls".to_string(),
            description: "A sturdy fishing boat".to_string(),
            length: 28.0,
            price: Decimal::new(8500000, 2),
            picture: "/images/boats/fishing1.png".to_string(),
            boat_type_id: 2,
            boat_type: "Fishing Boat".to_string(),
            latitude: 36.8508,
            longitude: -75.9779,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_boat_serialization_round_trip() {
        let boat = sample_boat();
        let json = serde_json::to_string(&boat).unwrap();
        let back: Boat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, boat);
    }

    #[test]
    fn test_boat_update_is_empty() {
        let update = BoatUpdate::for_boat(7);
        assert_eq!(update.id, 7);
        assert!(update.is_empty());

        let update = BoatUpdate {
            id: 7,
            price: Some(Decimal::new(100, 0)),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_similar_by_default_and_display() {
        assert_eq!(SimilarBy::default(), SimilarBy::Type);
        assert_eq!(SimilarBy::Type.to_string(), "Type");
        assert_eq!(SimilarBy::Price.to_string(), "Price");
        assert_eq!(SimilarBy::Length.to_string(), "Length");
    }

    #[test]
    fn test_similar_by_parse() {
        for variant in SimilarBy::ALL {
            assert_eq!(SimilarBy::parse(variant.as_str()), variant);
        }
        // Unknown input falls back to the default criterion
        assert_eq!(SimilarBy::parse("Color"), SimilarBy::Type);
    }

    #[test]
    fn test_marker_for_boat() {
        let boat = sample_boat();
        let marker = MapMarker::for_boat(&boat);
        assert_eq!(marker.latitude, boat.latitude);
        assert_eq!(marker.longitude, boat.longitude);
        assert_eq!(marker.title, "Gallifrey Falls");
        assert_eq!(marker.description, "Coords: 36.8508, -75.9779");
        assert_eq!(marker.icon, "map");
    }

    #[test]
    fn test_coords_description_format() {
        assert_eq!(coords_description(10.0, 20.0), "Coords: 10, 20");
        assert_eq!(coords_description(36.85, -75.97), "Coords: 36.85, -75.97");
    }

    #[test]
    fn test_notification_unique_ids() {
        let a = Notification::new("Success", "Ship It!", Severity::Success);
        let b = Notification::new("Success", "Ship It!", Severity::Success);
        assert_ne!(a.id, b.id);
        assert_eq!(a.severity, Severity::Success);
    }
}
