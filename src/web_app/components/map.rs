// web_app/components/map.rs - Boat location map
//
// Resolves the active boat's coordinates into a single map marker. The
// boat id arrives either directly from the parent or over the message
// channel; the held id is mirrored onto a data attribute of the host
// element for external styling hooks. A failed coordinate lookup clears
// the marker and the id instead of keeping stale data.

use leptos::prelude::*;

use crate::web_app::messaging::{BoatMessageChannel, Subscription};
use crate::web_app::model::{coords_description, MapMarker};
use crate::web_app::server_fns::get_boat;

pub const MAP_MARKER_ICON: &str = "anchor";

#[component]
pub fn BoatMap(
    /// Direct record id; when absent, the channel supplies it
    #[prop(optional)]
    record_id: Option<i32>,
) -> impl IntoView {
    let channel = expect_context::<BoatMessageChannel>();
    let boat_id = RwSignal::new(record_id);
    let map_markers = RwSignal::new(Vec::<MapMarker>::new());
    let error = RwSignal::new(None::<String>);
    let subscription = StoredValue::new(None::<Subscription>);

    if boat_id.get_untracked().is_none() && subscription.with_value(|s| s.is_none()) {
        let sub = channel.subscribe(move |message| boat_id.set(Some(message.record_id)));
        subscription.set_value(Some(sub));
    }
    on_cleanup({
        let channel = channel.clone();
        move || {
            if let Some(sub) = subscription.try_update_value(|s| s.take()).flatten() {
                channel.unsubscribe(sub);
            }
        }
    });

    let wired_record = Resource::new(
        move || boat_id.get(),
        |id| async move {
            match id {
                None => Ok(None),
                Some(id) => get_boat(id).await.map(Some),
            }
        },
    );

    Effect::new(move || match wired_record.get() {
        Some(Ok(Some(boat))) => {
            error.set(None);
            map_markers.set(vec![MapMarker {
                latitude: boat.latitude,
                longitude: boat.longitude,
                title: boat.name.clone(),
                description: coords_description(boat.latitude, boat.longitude),
                icon: MAP_MARKER_ICON.to_string(),
            }]);
        }
        Some(Ok(None)) => {}
        Some(Err(e)) => {
            error.set(Some(e.to_string()));
            boat_id.set(None);
            map_markers.set(Vec::new());
        }
        None => {}
    });

    let show_map = move || !map_markers.get().is_empty();

    view! {
        <div
            class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6"
            data-record-id=move || boat_id.get().map(|id| id.to_string()).unwrap_or_default()
        >
            <h2 class="text-lg font-bold text-gray-900 mb-4">"Current Boat Location"</h2>

            {move || error.get().map(|e| view! {
                <p class="text-red-600 text-sm mb-2">{e}</p>
            })}

            <Show
                when=show_map
                fallback=|| view! {
                    <p class="text-gray-400 text-center py-8">"Please select a boat"</p>
                }
            >
                <For
                    each=move || map_markers.get()
                    key=|marker| marker.description.clone()
                    children=move |marker| {
                        view! {
                            <div class="bg-blue-50 border border-blue-100 rounded-xl p-4 flex items-center gap-3">
                                <span class="text-2xl">"⚓"</span>
                                <div>
                                    <p class="font-bold text-gray-900">{marker.title.clone()}</p>
                                    <p class="text-sm text-gray-500 font-mono">{marker.description.clone()}</p>
                                </div>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
