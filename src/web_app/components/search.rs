// web_app/components/search.rs - Boat search form
//
// Loads the boat types and raises a search event when the user picks one.
// The actual fetching lives in the results component; this form only owns
// the filter choice.

use leptos::prelude::*;

use super::common::ErrorDisplay;
use crate::web_app::server_fns::get_boat_types;

/// Parse the dropdown value; the empty "All Types" option maps to None.
pub fn parse_type_selection(value: &str) -> Option<i32> {
    value.parse::<i32>().ok()
}

#[component]
pub fn BoatSearchForm(
    /// Fired with the chosen boat type (None = all types)
    on_search: Callback<Option<i32>>,
) -> impl IntoView {
    let boat_types = Resource::new(|| (), |_| async move { get_boat_types().await });

    view! {
        <div class="flex items-end gap-4">
            <div class="flex-1">
                <label class="block text-sm font-semibold text-gray-600 mb-1">
                    "Boat Type"
                </label>
                <Suspense fallback=|| view! {
                    <div class="text-sm text-gray-400 py-2">"Loading boat types..."</div>
                }>
                    {move || boat_types.get().map(|result| match result {
                        Ok(types) => view! {
                            <select
                                class="w-full px-4 py-2 border border-gray-300 rounded-lg bg-white \
                                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                                       outline-none cursor-pointer shadow-sm"
                                on:change=move |ev| {
                                    on_search.run(parse_type_selection(&event_target_value(&ev)));
                                }
                            >
                                <option value="">"All Types"</option>
                                {types.into_iter().map(|boat_type| view! {
                                    <option value=boat_type.id.to_string()>
                                        {boat_type.name.clone()}
                                    </option>
                                }).collect_view()}
                            </select>
                        }.into_any(),
                        Err(e) => view! {
                            <ErrorDisplay error=e.to_string() />
                        }.into_any(),
                    })}
                </Suspense>
            </div>
        </div>
    }
}
