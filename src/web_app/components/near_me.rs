// web_app/components/near_me.rs - Boats near the caller
//
// Asks the browser for the caller's position once, on first render, then
// keeps a location-scoped fetch reactive over (latitude, longitude, boat
// type). The nearby payload arrives as serialized JSON and is decoded
// client-side. The self marker always leads the marker list.

use leptos::prelude::*;

use crate::web_app::model::{coords_description, Boat, GeoPosition, MapMarker};
use crate::web_app::notifications::use_notifications;
use crate::web_app::server_fns::get_boats_by_location;

pub const LABEL_YOU_ARE_HERE: &str = "You are here!";
pub const ICON_STANDARD_USER: &str = "user";
pub const NEARBY_ERROR_TITLE: &str = "Error loading Boats Near Me";

/// Decode the serialized nearby payload.
pub fn decode_nearby_payload(payload: &str) -> Result<Vec<Boat>, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Build the marker list: the caller's own position first, then one
/// marker per boat.
pub fn create_map_markers(boats: &[Boat], latitude: f64, longitude: f64) -> Vec<MapMarker> {
    let mut markers: Vec<MapMarker> = boats.iter().map(MapMarker::for_boat).collect();
    markers.insert(
        0,
        MapMarker {
            latitude,
            longitude,
            title: LABEL_YOU_ARE_HERE.to_string(),
            description: coords_description(latitude, longitude),
            icon: ICON_STANDARD_USER.to_string(),
        },
    );
    markers
}

/// One-shot browser geolocation request.
///
/// Only available in hydrated (WASM) builds; on the server this is a
/// no-op, and a browser-side geolocation failure is silently ignored.
fn request_browser_location(on_position: impl Fn(GeoPosition) + 'static) {
    cfg_if::cfg_if! {
        if #[cfg(feature = "hydrate")] {
            use wasm_bindgen::closure::Closure;
            use wasm_bindgen::JsCast;

            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(geolocation) = window.navigator().geolocation() else {
                return;
            };

            let callback = Closure::<dyn FnMut(web_sys::GeolocationPosition)>::new(
                move |position: web_sys::GeolocationPosition| {
                    let coords = position.coords();
                    on_position(GeoPosition {
                        latitude: coords.latitude(),
                        longitude: coords.longitude(),
                    });
                },
            );
            let _ = geolocation.get_current_position(callback.as_ref().unchecked_ref());
            callback.forget();
        } else {
            let _ = on_position;
        }
    }
}

#[component]
pub fn BoatsNearMe(
    /// Optional type filter shared with the search form
    #[prop(into)]
    boat_type_id: Signal<Option<i32>>,
) -> impl IntoView {
    let notifications = use_notifications();

    let latitude = RwSignal::new(None::<f64>);
    let longitude = RwSignal::new(None::<f64>);
    let map_markers = RwSignal::new(Vec::<MapMarker>::new());
    let is_loading = RwSignal::new(true);
    let is_rendered = StoredValue::new(false);

    // First render only: ask the browser where we are.
    Effect::new(move || {
        if !is_rendered.get_value() {
            request_browser_location(move |position| {
                latitude.set(Some(position.latitude));
                longitude.set(Some(position.longitude));
            });
        }
        is_rendered.set_value(true);
    });

    // Location-scoped fetch, reactive over position and type filter.
    let nearby = Resource::new(
        move || (latitude.get(), longitude.get(), boat_type_id.get()),
        |(lat, lon, type_id)| async move {
            match (lat, lon) {
                (Some(lat), Some(lon)) => {
                    get_boats_by_location(lat, lon, type_id).await.map(Some)
                }
                _ => Ok(None),
            }
        },
    );

    // Decode the payload and rebuild markers. A failure raises a toast
    // and clears the loading flag but keeps previously rendered markers.
    Effect::new(move || match nearby.get() {
        Some(Ok(Some(payload))) => {
            is_loading.set(true);
            match decode_nearby_payload(&payload) {
                Ok(boats) => {
                    let lat = latitude.get_untracked().unwrap_or_default();
                    let lon = longitude.get_untracked().unwrap_or_default();
                    map_markers.set(create_map_markers(&boats, lat, lon));
                }
                Err(e) => {
                    notifications.error(NEARBY_ERROR_TITLE, e.to_string());
                }
            }
            is_loading.set(false);
        }
        Some(Ok(None)) => {}
        Some(Err(e)) => {
            notifications.error(NEARBY_ERROR_TITLE, e.to_string());
            is_loading.set(false);
        }
        None => {}
    });

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6">
            <h2 class="text-lg font-bold text-gray-900 mb-4">"Boats Near Me"</h2>

            <Show when=move || is_loading.get() && map_markers.get().is_empty()>
                <p class="text-gray-400 text-sm animate-pulse">"Locating you..."</p>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <For
                    each=move || map_markers.get()
                    key=|marker| (marker.title.clone(), marker.description.clone())
                    children=move |marker| {
                        let is_self = marker.icon == ICON_STANDARD_USER;
                        view! {
                            <div class=if is_self {
                                "bg-blue-600 text-white rounded-xl p-4"
                            } else {
                                "bg-gray-50 border border-gray-100 rounded-xl p-4"
                            }>
                                <p class="font-bold">{marker.title.clone()}</p>
                                <p class="text-sm opacity-75 font-mono">{marker.description.clone()}</p>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn boat_at(id: i32, latitude: f64, longitude: f64) -> Boat {
        Boat {
            id,
            name: format!("Boat {}", id),
            description: String::new(),
            length: 20.0,
            price: Decimal::new(100000, 0),
            picture: String::new(),
            boat_type_id: 1,
            boat_type: "Sailboat".to_string(),
            latitude,
            longitude,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_self_marker_always_first() {
        let boats = vec![boat_at(1, 11.0, 21.0)];
        let markers = create_map_markers(&boats, 10.0, 20.0);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].title, "You are here!");
        assert_eq!(markers[0].latitude, 10.0);
        assert_eq!(markers[0].longitude, 20.0);
        assert_eq!(markers[0].icon, ICON_STANDARD_USER);
        assert_eq!(markers[1].title, "Boat 1");
    }

    #[test]
    fn test_markers_with_no_boats() {
        let markers = create_map_markers(&[], 10.0, 20.0);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title, LABEL_YOU_ARE_HERE);
    }

    #[test]
    fn test_decode_nearby_payload_round_trip() {
        let boats = vec![boat_at(1, 11.0, 21.0), boat_at(2, 12.0, 22.0)];
        let payload = serde_json::to_string(&boats).unwrap();
        let decoded = decode_nearby_payload(&payload).unwrap();
        assert_eq!(decoded, boats);
    }

    #[test]
    fn test_decode_nearby_payload_rejects_garbage() {
        assert!(decode_nearby_payload("not json").is_err());
    }

    #[test]
    fn test_marker_descriptions() {
        let boats = vec![boat_at(1, 11.0, 21.0)];
        let markers = create_map_markers(&boats, 10.0, 20.0);
        assert_eq!(markers[0].description, "Coords: 10, 20");
        assert_eq!(markers[1].description, "Coords: 11, 21");
    }
}
