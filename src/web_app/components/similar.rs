// web_app/components/similar.rs - Similar boats panel
//
// Pure derived view: re-fetches whenever the active boat or the
// similarity criterion changes. There is no manual refresh path.

use leptos::prelude::*;

use super::common::PriceDisplay;
use crate::web_app::messaging::{BoatMessageChannel, BoatSelected};
use crate::web_app::model::SimilarBy;
use crate::web_app::server_fns::get_similar_boats;

/// Panel heading for the current criterion.
pub fn panel_title(similar_by: SimilarBy) -> String {
    format!("Similar boats by {}", similar_by)
}

#[component]
pub fn SimilarBoats(
    /// The reference boat
    #[prop(into)]
    boat_id: Signal<Option<i32>>,
    /// Caller-supplied similarity criterion
    #[prop(into)]
    similar_by: Signal<SimilarBy>,
) -> impl IntoView {
    let channel = expect_context::<BoatMessageChannel>();

    let related = Resource::new(
        move || (boat_id.get(), similar_by.get()),
        |(id, by)| async move {
            match id {
                None => Ok(Vec::new()),
                Some(id) => get_similar_boats(id, by).await,
            }
        },
    );

    let related_boats = Signal::derive(move || {
        related.get().and_then(|r| r.ok()).unwrap_or_default()
    });
    let error = Signal::derive(move || {
        related.get().and_then(|r| r.err()).map(|e| e.to_string())
    });
    let no_boats = Signal::derive(move || related_boats.get().is_empty());

    // Picking a related boat makes it the active selection everywhere.
    let open_related = {
        let channel = channel.clone();
        Callback::new(move |record_id: i32| {
            channel.publish(BoatSelected { record_id });
        })
    };

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6">
            <h2 class="text-lg font-bold text-gray-900 mb-4">
                {move || panel_title(similar_by.get())}
            </h2>

            {move || error.get().map(|e| view! {
                <p class="text-red-600 text-sm mb-2">{e}</p>
            })}

            <Show
                when=move || !no_boats.get()
                fallback=move || view! {
                    <p class="text-gray-400 text-center py-8">
                        {move || format!("There are no related boats by {}", similar_by.get())}
                    </p>
                }
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <For
                        each=move || related_boats.get()
                        key=|boat| boat.id
                        children=move |boat| {
                            let boat_id = boat.id;
                            view! {
                                <div
                                    class="border border-gray-100 rounded-xl overflow-hidden cursor-pointer \
                                           hover:shadow-md transition-shadow"
                                    on:click=move |_| open_related.run(boat_id)
                                >
                                    <div
                                        class="h-24 bg-gray-100 bg-cover bg-center"
                                        style=format!("background-image:url({})", boat.picture)
                                    ></div>
                                    <div class="p-3 space-y-1">
                                        <h3 class="font-bold text-gray-900 text-sm truncate">
                                            {boat.name.clone()}
                                        </h3>
                                        <div class="flex justify-between items-center text-xs text-gray-500">
                                            <span>{boat.length} " ft"</span>
                                            <PriceDisplay price=boat.price />
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
