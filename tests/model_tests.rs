// tests/model_tests.rs - Integration tests for the shared data model
//
// These run without any web feature enabled: the model and the marker
// derivation are plain data code.

use rust_decimal::Decimal;

use boatyard::web_app::model::{
    coords_description, Boat, BoatUpdate, MapMarker, Notification, Review, Severity, SimilarBy,
};

fn boat(id: i32, name: &str, latitude: f64, longitude: f64) -> Boat {
    Boat {
        id,
        name: name.to_string(),
        description: "A boat".to_string(),
        length: 25.0,
        price: Decimal::new(5000000, 2),
        picture: format!("/images/boats/{}.png", id),
        boat_type_id: 1,
        boat_type: "Sailboat".to_string(),
        latitude,
        longitude,
        created_at: chrono::NaiveDateTime::default(),
        updated_at: chrono::NaiveDateTime::default(),
    }
}

#[test]
fn boat_round_trips_through_json() {
    let original = boat(3, "Knot on Call", 36.9, -76.2);
    let payload = serde_json::to_string(&original).unwrap();
    let decoded: Boat = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn nearby_payload_shape_is_a_boat_list() {
    // The location fetch delivers Vec<Boat> as a serialized payload
    let fleet = vec![boat(1, "A", 10.0, 20.0), boat(2, "B", 11.0, 21.0)];
    let payload = serde_json::to_string(&fleet).unwrap();
    let decoded: Vec<Boat> = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[1].latitude, 11.0);
}

#[test]
fn marker_derivation_from_boat() {
    let marker = MapMarker::for_boat(&boat(1, "Pier Pressure", 36.8468, -76.2852));
    assert_eq!(marker.title, "Pier Pressure");
    assert_eq!(marker.description, "Coords: 36.8468, -76.2852");
}

#[test]
fn coords_description_matches_display_format() {
    assert_eq!(coords_description(10.0, 20.0), "Coords: 10, 20");
}

#[test]
fn update_draft_tracks_only_edited_fields() {
    let mut draft = BoatUpdate::for_boat(4);
    assert!(draft.is_empty());

    draft.name = Some("Renamed".to_string());
    assert!(!draft.is_empty());
    assert!(draft.length.is_none());
    assert!(draft.price.is_none());
}

#[test]
fn update_draft_serializes_for_the_wire() {
    let draft = BoatUpdate {
        id: 4,
        name: Some("Renamed".to_string()),
        length: None,
        price: Some(Decimal::new(9900000, 2)),
        description: None,
    };
    let payload = serde_json::to_string(&draft).unwrap();
    let decoded: BoatUpdate = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded, draft);
}

#[test]
fn similar_by_covers_all_criteria() {
    assert_eq!(SimilarBy::ALL.len(), 3);
    for variant in SimilarBy::ALL {
        assert_eq!(SimilarBy::parse(variant.as_str()), variant);
    }
}

#[test]
fn review_serialization() {
    let review = Review {
        id: 1,
        boat_id: 2,
        subject: "Fish magnet".to_string(),
        comment: "Caught my limit.".to_string(),
        rating: 5,
        reviewer: "Reel Deal Neil".to_string(),
        created_at: chrono::NaiveDateTime::default(),
    };
    let payload = serde_json::to_string(&review).unwrap();
    let decoded: Review = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded, review);
}

#[test]
fn notifications_carry_title_message_severity() {
    let toast = Notification::new("Success", "Ship It!", Severity::Success);
    assert_eq!(toast.title, "Success");
    assert_eq!(toast.message, "Ship It!");
    assert_eq!(toast.severity, Severity::Success);

    let other = Notification::new("Error", "nope", Severity::Error);
    assert_ne!(toast.id, other.id);
}
