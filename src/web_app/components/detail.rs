// web_app/components/detail.rs - Boat detail tabs
//
// Shows the active boat across three sub-tabs: details, reviews, and the
// add-review form. Learns the active boat from the message channel unless
// a record id was supplied directly (deep link). A created review switches
// the view back to the reviews tab and explicitly refreshes it.

use leptos::prelude::*;

use super::common::{Badge, PriceDisplay};
use super::results::tab_button_class;
use super::reviews::{BoatAddReviewForm, BoatReviews};
use crate::web_app::messaging::{BoatMessageChannel, Subscription};
use crate::web_app::model::Boat;
use crate::web_app::server_fns::get_boat;

pub const LABEL_DETAILS: &str = "Details";
pub const LABEL_REVIEWS: &str = "Reviews";
pub const LABEL_ADD_REVIEW: &str = "Add Review";
pub const LABEL_PLEASE_SELECT_A_BOAT: &str = "Please select a boat";

/// Icon shown on the details tab once the record resolved.
pub fn details_tab_icon_name(record_resolved: bool) -> Option<&'static str> {
    if record_resolved {
        Some("⚓")
    } else {
        None
    }
}

#[component]
pub fn BoatDetailTabs(
    /// Direct record id for deep-linked usage; otherwise the channel
    /// supplies the selection.
    #[prop(optional)]
    record_id: Option<i32>,
) -> impl IntoView {
    let channel = expect_context::<BoatMessageChannel>();
    let boat_id = RwSignal::new(record_id);
    let subscription = StoredValue::new(None::<Subscription>);

    // Subscribe once, on first mount, and only when no id was supplied
    // directly and no subscription is held yet.
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

    let boat = Signal::derive(move || wired_record.get().and_then(|r| r.ok()).flatten());
    let boat_name = Signal::derive(move || boat.get().map(|b| b.name).unwrap_or_default());

    let active_tab = RwSignal::new("details");
    let reviews_refresh_tick = RwSignal::new(0u32);

    // A freshly created review jumps back to the reviews list and forces
    // the panel to re-fetch.
    let on_review_created = Callback::new(move |()| {
        active_tab.set("reviews");
        reviews_refresh_tick.update(|t| *t += 1);
    });

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6">
            <Show
                when=move || boat_id.get().is_some()
                fallback=|| view! {
                    <div class="text-center py-12 text-gray-400">
                        <div class="text-5xl mb-3">"🚤"</div>
                        <p class="font-medium">{LABEL_PLEASE_SELECT_A_BOAT}</p>
                    </div>
                }
            >
                <div class="flex items-center gap-2 mb-4">
                    {move || details_tab_icon_name(boat.get().is_some()).map(|icon| view! {
                        <span class="text-2xl">{icon}</span>
                    })}
                    <h2 class="text-xl font-bold text-gray-900">{move || boat_name.get()}</h2>
                </div>

                <div class="flex border-b border-gray-200 mb-4">
                    {[
                        ("details", LABEL_DETAILS),
                        ("reviews", LABEL_REVIEWS),
                        ("add", LABEL_ADD_REVIEW),
                    ]
                        .into_iter()
                        .map(|(tab, label)| view! {
                            <button
                                class=move || tab_button_class(active_tab.get() == tab)
                                on:click=move |_| active_tab.set(tab)
                            >
                                {label}
                            </button>
                        })
                        .collect_view()}
                </div>

                <Show when=move || active_tab.get() == "details">
                    {move || boat.get().map(|b| view! { <BoatDetailPanel boat=b /> })}
                </Show>

                <Show when=move || active_tab.get() == "reviews">
                    <BoatReviews boat_id=boat_id refresh_tick=reviews_refresh_tick />
                </Show>

                <Show when=move || active_tab.get() == "add">
                    <BoatAddReviewForm boat_id=boat_id on_review_created=on_review_created />
                </Show>
            </Show>
        </div>
    }
}

/// Read-only record panel inside the details tab.
#[component]
fn BoatDetailPanel(boat: Boat) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div
                class="h-48 rounded-xl bg-gray-100 bg-cover bg-center"
                style=format!("background-image:url({})", boat.picture)
            ></div>

            <div class="flex items-center justify-between">
                <Badge variant="blue">{boat.boat_type.clone()}</Badge>
                <PriceDisplay price=boat.price highlight=true />
            </div>

            <div class="text-sm text-gray-500">
                "Length: " {boat.length} " ft"
            </div>

            <p class="text-gray-600 leading-relaxed">
                {boat.description.clone()}
            </p>
        </div>
    }
}
