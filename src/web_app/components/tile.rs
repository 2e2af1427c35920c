// web_app/components/tile.rs - Boat tile component
//
// One boat in the gallery grid. Clicking a tile raises the selection
// event; the owning results component decides what to do with it.

use leptos::prelude::*;

use super::common::{Badge, PriceDisplay};
use crate::web_app::model::Boat;

const TILE_WRAPPER_SELECTED_CLASS: &str = "tile-wrapper selected";
const TILE_WRAPPER_UNSELECTED_CLASS: &str = "tile-wrapper";

/// Tile class for the current selection state.
pub fn tile_class(selected_boat_id: Option<i32>, boat_id: i32) -> &'static str {
    if selected_boat_id == Some(boat_id) {
        TILE_WRAPPER_SELECTED_CLASS
    } else {
        TILE_WRAPPER_UNSELECTED_CLASS
    }
}

/// Inline style placing the boat picture as the tile background.
pub fn background_style(picture: &str) -> String {
    format!("background-image:url({})", picture)
}

#[component]
pub fn BoatTile(
    /// The boat to render
    boat: Boat,
    /// Currently selected boat, for highlight state
    #[prop(into)]
    selected_boat_id: Signal<Option<i32>>,
    /// Fired with the boat id when the tile is clicked
    on_boat_select: Callback<i32>,
) -> impl IntoView {
    let boat_id = boat.id;
    let picture_style = background_style(&boat.picture);

    view! {
        <div
            class=move || tile_class(selected_boat_id.get(), boat_id)
            on:click=move |_| on_boat_select.run(boat_id)
        >
            <div
                class="h-40 rounded-t-xl bg-gray-100 bg-cover bg-center"
                style=picture_style
            ></div>

            <div class="p-4 space-y-2">
                <h3 class="font-bold text-gray-900 text-lg truncate">
                    {boat.name.clone()}
                </h3>
                <div class="flex justify-between items-center">
                    <PriceDisplay price=boat.price highlight=true />
                    <Badge variant="blue">{boat.boat_type.clone()}</Badge>
                </div>
                <p class="text-sm text-gray-500">
                    "Length: " {boat.length} " ft"
                </p>
            </div>
        </div>
    }
}
