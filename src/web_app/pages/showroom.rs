// web_app/pages/showroom.rs - Dealership gallery page
//
// Composes the full showroom: search form feeding the results grid, the
// detail/map/similar panels listening on the message channel, and the
// nearby-boats view. The page itself subscribes to the channel only to
// feed the similar-boats panel its reference boat.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::messaging::{BoatMessageChannel, Subscription};
use crate::web_app::model::SimilarBy;

#[component]
pub fn ShowroomPage() -> impl IntoView {
    let channel = expect_context::<BoatMessageChannel>();

    // Search state, handed down to the results component
    let boat_type_id = RwSignal::new(None::<i32>);
    let is_loading = RwSignal::new(false);

    // Active selection, mirrored from the channel for the similar panel
    let active_boat_id = RwSignal::new(None::<i32>);
    let similar_by = RwSignal::new(SimilarBy::Type);

    let subscription = StoredValue::new(None::<Subscription>);
    if subscription.with_value(|s| s.is_none()) {
        let sub = channel.subscribe(move |message| active_boat_id.set(Some(message.record_id)));
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

    let on_search = Callback::new(move |type_id: Option<i32>| {
        boat_type_id.set(type_id);
    });

    // The loading/doneloading pair raised by the results component
    let on_loading = Callback::new(move |loading: bool| {
        is_loading.set(loading);
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"⛵"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                            "Boatyard"
                        </h1>
                    </div>
                    <div class="text-sm text-gray-500">
                        "Find Your Boat Today!"
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                // Search bar section
                <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                    <div class="flex items-center gap-4">
                        <div class="flex-1">
                            <BoatSearchForm on_search=on_search />
                        </div>
                        <Show when=move || is_loading.get()>
                            <div class="animate-spin rounded-full h-6 w-6 border-4 border-gray-200 border-t-blue-600"></div>
                        </Show>
                    </div>
                </section>

                // Results + detail panels
                <div class="flex flex-col lg:flex-row gap-8 items-start">
                    <section class="flex-1 w-full min-w-0">
                        <BoatSearchResults
                            boat_type_id=boat_type_id
                            on_loading=on_loading
                        />
                    </section>

                    <aside class="w-full lg:w-96 flex-shrink-0 space-y-8">
                        <BoatDetailTabs />
                        <BoatMap />

                        <div class="space-y-3">
                            <div class="flex justify-end">
                                <select
                                    class="text-sm font-semibold text-gray-800 bg-white border border-gray-200 \
                                           rounded-lg px-3 py-1.5 shadow-sm cursor-pointer"
                                    on:change=move |ev| {
                                        similar_by.set(SimilarBy::parse(&event_target_value(&ev)));
                                    }
                                >
                                    {SimilarBy::ALL.into_iter().map(|by| view! {
                                        <option
                                            value=by.as_str()
                                            selected=move || similar_by.get() == by
                                        >
                                            "Similar by " {by.as_str()}
                                        </option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <SimilarBoats boat_id=active_boat_id similar_by=similar_by />
                        </div>
                    </aside>
                </div>

                // Nearby boats, scoped to the same type filter
                <BoatsNearMe boat_type_id=boat_type_id />
            </main>

            // Footer
            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"© 2025 Boatyard. Built with Leptos, Actix, and PostgreSQL."</p>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_by_options_cover_all_criteria() {
        assert_eq!(SimilarBy::ALL.len(), 3);
        assert_eq!(SimilarBy::ALL[0], SimilarBy::Type);
    }

    #[test]
    fn test_search_event_updates_filter() {
        // The logic applied by on_search
        let mut boat_type_id: Option<i32> = None;
        boat_type_id = Some(3);
        assert_eq!(boat_type_id, Some(3));

        // "All Types" clears the filter
        boat_type_id = None;
        assert!(boat_type_id.is_none());
    }

    #[test]
    fn test_loading_event_round_trip() {
        // The logic applied by on_loading
        let mut is_loading = false;
        is_loading = true;
        assert!(is_loading);
        is_loading = false;
        assert!(!is_loading);
    }
}
