// web_app/components/reviews.rs - Boat reviews panel and add-review form
//
// The panel re-fetches whenever the boat id or the caller-driven refresh
// tick changes. The fetch is a no-op without an id, and the loading flag
// is cleared on success and failure alike.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::common::{Loading, StarRating, TextInput};
use crate::web_app::model::Review;
use crate::web_app::notifications::use_notifications;
use crate::web_app::server_fns::{create_review, get_all_reviews};

/// Short display form of a review timestamp.
pub fn format_review_date(created_at: chrono::NaiveDateTime) -> String {
    created_at.format("%b %e, %Y").to_string()
}

#[component]
pub fn BoatReviews(
    /// The boat whose reviews are shown; None renders the empty hint
    #[prop(into)]
    boat_id: Signal<Option<i32>>,
    /// Bumped by the parent to force a re-fetch
    #[prop(into)]
    refresh_tick: Signal<u32>,
) -> impl IntoView {
    let reviews = RwSignal::new(Vec::<Review>::new());
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    // Imperative fetch; returns immediately when no boat is active.
    let get_reviews = move |id: Option<i32>| {
        let Some(id) = id else {
            return;
        };
        is_loading.set(true);
        spawn_local(async move {
            match get_all_reviews(id).await {
                Ok(data) => {
                    error.set(None);
                    reviews.set(data);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            // Cleared whether the fetch succeeded or failed.
            is_loading.set(false);
        });
    };

    Effect::new(move || {
        refresh_tick.track();
        get_reviews(boat_id.get());
    });

    let reviews_to_show = move || !reviews.get().is_empty();

    view! {
        <div class="space-y-4">
            <Show when=move || is_loading.get()>
                <Loading message="Loading reviews..." />
            </Show>

            {move || error.get().map(|e| view! {
                <p class="text-red-600 text-sm">{e}</p>
            })}

            <Show
                when=reviews_to_show
                fallback=|| view! {
                    <p class="text-gray-400 text-center py-8">"No reviews available"</p>
                }
            >
                <For
                    each=move || reviews.get()
                    key=|review| review.id
                    children=move |review| {
                        view! {
                            <div class="border border-gray-100 rounded-xl p-4 space-y-2">
                                <div class="flex justify-between items-start">
                                    <h4 class="font-bold text-gray-900">{review.subject.clone()}</h4>
                                    <StarRating rating={review.rating as f64} />
                                </div>
                                <p class="text-gray-600 text-sm">{review.comment.clone()}</p>
                                <p class="text-xs text-gray-400">
                                    {review.reviewer.clone()}
                                    " · "
                                    {format_review_date(review.created_at)}
                                </p>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}

/// Add-review form nested under the detail tabs.
///
/// Clears itself and fires `on_review_created` after a successful submit;
/// failures keep the form contents and raise an error toast.
#[component]
pub fn BoatAddReviewForm(
    #[prop(into)]
    boat_id: Signal<Option<i32>>,
    on_review_created: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();

    let subject = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let reviewer = RwSignal::new(String::new());
    let rating = RwSignal::new(5i32);
    let is_submitting = RwSignal::new(false);

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = boat_id.get_untracked() else {
            return;
        };
        is_submitting.set(true);
        spawn_local(async move {
            let result = create_review(
                id,
                subject.get_untracked(),
                comment.get_untracked(),
                rating.get_untracked(),
                reviewer.get_untracked(),
            )
            .await;
            match result {
                Ok(_) => {
                    subject.set(String::new());
                    comment.set(String::new());
                    reviewer.set(String::new());
                    rating.set(5);
                    on_review_created.run(());
                }
                Err(e) => {
                    notifications.error("Error creating review", e.to_string());
                }
            }
            is_submitting.set(false);
        });
    };

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <div>
                <label class="block text-sm font-semibold text-gray-600 mb-1">"Subject"</label>
                <TextInput value=subject placeholder="Review title" />
            </div>

            <div>
                <label class="block text-sm font-semibold text-gray-600 mb-1">"Your Name"</label>
                <TextInput value=reviewer placeholder="Anonymous" />
            </div>

            <div>
                <label class="block text-sm font-semibold text-gray-600 mb-1">"Rating"</label>
                <div class="flex gap-1">
                    {(1..=5).map(|star| view! {
                        <button
                            type="button"
                            class=move || if rating.get() >= star {
                                "text-yellow-400 text-2xl"
                            } else {
                                "text-gray-300 text-2xl hover:text-yellow-300"
                            }
                            on:click=move |_| rating.set(star)
                        >
                            "★"
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <div>
                <label class="block text-sm font-semibold text-gray-600 mb-1">"Comment"</label>
                <textarea
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg \
                           focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                           outline-none transition-shadow shadow-sm"
                    rows=4
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button
                type="submit"
                class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                       disabled:bg-gray-400 disabled:cursor-not-allowed font-medium shadow-sm"
                disabled=move || is_submitting.get()
            >
                "Submit Review"
            </button>
        </form>
    }
}
