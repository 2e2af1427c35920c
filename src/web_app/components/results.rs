// web_app/components/results.rs - Boat search results
//
// Owns the filtered boat list, the current selection, and the inline
// editor drafts. Fetches are imperative so the loading/doneloading pair
// brackets every fetch-triggering mutation: type filter change, explicit
// refresh, and save. Selecting a tile publishes the boat id on the
// application-wide message channel.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::common::{ErrorDisplay, Loading, SecondaryButton};
use super::tile::BoatTile;
use crate::web_app::messaging::{BoatMessageChannel, BoatSelected};
use crate::web_app::model::{Boat, BoatUpdate};
use crate::web_app::notifications::use_notifications;
use crate::web_app::server_fns::{get_boats, update_boat};

/// Editable columns of the boat editor tab: (field key, header label).
pub const COLUMNS: [(&str, &str); 4] = [
    ("name", "Name"),
    ("length", "Length"),
    ("price", "Price"),
    ("description", "Description"),
];

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Ship It!";
pub const ERROR_TITLE: &str = "Error updating records";

/// Merge one cell edit into the draft set for its row.
///
/// Unparseable numeric input leaves the field untouched rather than
/// submitting garbage.
pub fn stage_edit(drafts: &mut BTreeMap<i32, BoatUpdate>, boat_id: i32, field: &str, value: &str) {
    let draft = drafts
        .entry(boat_id)
        .or_insert_with(|| BoatUpdate::for_boat(boat_id));
    match field {
        "name" => draft.name = Some(value.to_string()),
        "length" => draft.length = value.parse().ok(),
        "price" => draft.price = value.parse().ok(),
        "description" => draft.description = Some(value.to_string()),
        _ => {}
    }
}

/// Value shown in an editor cell: the staged draft wins over the record.
pub fn cell_value(draft: Option<&BoatUpdate>, boat: &Boat, field: &str) -> String {
    match field {
        "name" => draft
            .and_then(|d| d.name.clone())
            .unwrap_or_else(|| boat.name.clone()),
        "length" => draft
            .and_then(|d| d.length)
            .map(|l| l.to_string())
            .unwrap_or_else(|| boat.length.to_string()),
        "price" => draft
            .and_then(|d| d.price)
            .map(|p| p.to_string())
            .unwrap_or_else(|| boat.price.to_string()),
        "description" => draft
            .and_then(|d| d.description.clone())
            .unwrap_or_else(|| boat.description.clone()),
        _ => String::new(),
    }
}

/// Collapse the settled batch into one outcome.
///
/// Any failure wins and carries an aggregate message; there is no
/// rollback of the updates that already went through.
pub fn save_outcome(results: &[Result<(), String>]) -> Result<(), String> {
    let failures: Vec<&String> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} updates failed: {}",
            failures.len(),
            results.len(),
            failures[0]
        ))
    }
}

pub fn tab_button_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 font-semibold text-blue-600 border-b-2 border-blue-600"
    } else {
        "px-4 py-2 font-medium text-gray-500 hover:text-gray-800"
    }
}

async fn run_search(
    boat_type_id: Option<i32>,
    boats: RwSignal<Vec<Boat>>,
    error: RwSignal<Option<String>>,
) {
    match get_boats(boat_type_id).await {
        Ok(data) => {
            error.set(None);
            boats.set(data);
        }
        Err(e) => {
            error.set(Some(e.to_string()));
        }
    }
}

#[component]
pub fn BoatSearchResults(
    /// Active type filter; None means all types. Changing it re-issues the
    /// fetch (last write wins).
    #[prop(into)]
    boat_type_id: Signal<Option<i32>>,
    /// The loading / doneloading event pair, forwarded to the parent
    on_loading: Callback<bool>,
) -> impl IntoView {
    let channel = expect_context::<BoatMessageChannel>();
    let notifications = use_notifications();

    let boats = RwSignal::new(Vec::<Boat>::new());
    let error = RwSignal::new(None::<String>);
    let selected_boat_id = RwSignal::new(None::<i32>);
    let draft_values = RwSignal::new(BTreeMap::<i32, BoatUpdate>::new());
    let is_loading = RwSignal::new(false);
    let is_saving = RwSignal::new(false);
    // Bumping this re-executes the last fetch without changing the filter.
    let refresh_tick = RwSignal::new(0u32);
    let active_tab = RwSignal::new("gallery");

    let notify_loading = move |loading: bool| {
        is_loading.set(loading);
        on_loading.run(loading);
    };

    // Re-fetch on every filter change or refresh request.
    Effect::new(move || {
        let type_id = boat_type_id.get();
        refresh_tick.track();
        notify_loading(true);
        spawn_local(async move {
            run_search(type_id, boats, error).await;
            notify_loading(false);
        });
    });

    let on_boat_select = {
        let channel = channel.clone();
        Callback::new(move |record_id: i32| {
            selected_boat_id.set(Some(record_id));
            channel.publish(BoatSelected { record_id });
        })
    };

    // Submit every staged draft, wait for all to settle, then either
    // clear-and-refresh (full success) or surface one aggregate error
    // (drafts are kept, applied updates stay applied).
    let handle_save = move |_: leptos::web_sys::MouseEvent| {
        let drafts: Vec<BoatUpdate> = draft_values.get_untracked().values().cloned().collect();
        if drafts.is_empty() {
            return;
        }
        is_saving.set(true);
        spawn_local(async move {
            let mut results = Vec::with_capacity(drafts.len());
            for draft in &drafts {
                results.push(update_boat(draft.clone()).await.map_err(|e| e.to_string()));
            }
            match save_outcome(&results) {
                Ok(()) => {
                    notifications.success(SUCCESS_TITLE, SUCCESS_MESSAGE);
                    draft_values.set(BTreeMap::new());
                    refresh_tick.update(|t| *t += 1);
                }
                Err(message) => {
                    notifications.error(ERROR_TITLE, message);
                }
            }
            is_saving.set(false);
        });
    };

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6">
            // Sub-tab header: gallery and inline editor
            <div class="flex border-b border-gray-200 mb-6">
                {[("gallery", "Gallery"), ("editor", "Boat Editor")]
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

            {move || error.get().map(|e| view! { <ErrorDisplay error=e /> })}

            <Show when=move || is_loading.get() && boats.get().is_empty()>
                <Loading message="Searching boats..." />
            </Show>

            // Gallery tab
            <Show when=move || active_tab.get() == "gallery">
                <Show
                    when=move || !boats.get().is_empty()
                    fallback=|| view! {
                        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                            <div class="text-gray-300 text-6xl mb-4">"⛵"</div>
                            <h3 class="text-xl font-bold text-gray-900 mb-2">"No boats found"</h3>
                            <p class="text-gray-500 max-w-md mx-auto">
                                "There are no boats matching your current selection. Try a different boat type."
                            </p>
                        </div>
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                        <For
                            each=move || boats.get()
                            key=|boat| boat.id
                            children=move |boat| {
                                view! {
                                    <BoatTile
                                        boat=boat
                                        selected_boat_id=selected_boat_id
                                        on_boat_select=on_boat_select
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            // Inline editor tab
            <Show when=move || active_tab.get() == "editor">
                <div class="bg-white rounded-xl border border-gray-200 overflow-hidden">
                    <table class="w-full text-sm">
                        <thead class="bg-gray-50 text-left">
                            <tr>
                                {COLUMNS.into_iter().map(|(_, label)| view! {
                                    <th class="px-3 py-2 font-semibold text-gray-600">{label}</th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || boats.get()
                                key=|boat| boat.id
                                children=move |boat| {
                                    let boat_id = boat.id;
                                    view! {
                                        <tr class="border-b border-gray-100 hover:bg-gray-50">
                                            {COLUMNS.into_iter().map(|(field, _)| {
                                                let boat = boat.clone();
                                                let value = move || {
                                                    let drafts = draft_values.get();
                                                    cell_value(drafts.get(&boat_id), &boat, field)
                                                };
                                                view! {
                                                    <td class="px-3 py-2">
                                                        <input
                                                            class="w-full px-2 py-1 border border-transparent rounded \
                                                                   focus:border-blue-400 outline-none bg-transparent"
                                                            prop:value=value
                                                            on:change=move |ev| {
                                                                draft_values.update(|drafts| {
                                                                    stage_edit(
                                                                        drafts,
                                                                        boat_id,
                                                                        field,
                                                                        &event_target_value(&ev),
                                                                    );
                                                                });
                                                            }
                                                        />
                                                    </td>
                                                }
                                            }).collect_view()}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <Show when=move || !draft_values.get().is_empty()>
                        <div class="flex justify-end gap-2 p-3 bg-gray-50 border-t border-gray-200">
                            <SecondaryButton on_click=Callback::new(move |()| {
                                draft_values.set(BTreeMap::new());
                            })>
                                "Cancel"
                            </SecondaryButton>
                            <button
                                class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                                       disabled:bg-gray-400 disabled:cursor-not-allowed font-medium shadow-sm"
                                disabled=move || is_saving.get()
                                on:click=handle_save
                            >
                                "Save"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
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
    fn test_stage_edit_merges_fields_per_row() {
        let mut drafts = BTreeMap::new();
        stage_edit(&mut drafts, 1, "name", "Renamed");
        stage_edit(&mut drafts, 1, "price", "120000");
        stage_edit(&mut drafts, 2, "length", "31.5");

        assert_eq!(drafts.len(), 2);
        let first = &drafts[&1];
        assert_eq!(first.name.as_deref(), Some("Renamed"));
        assert_eq!(first.price, Some(Decimal::new(120000, 0)));
        assert!(first.length.is_none());
        assert_eq!(drafts[&2].length, Some(31.5));
    }

    #[test]
    fn test_stage_edit_rejects_garbage_numbers() {
        let mut drafts = BTreeMap::new();
        stage_edit(&mut drafts, 1, "length", "not-a-number");
        assert!(drafts[&1].length.is_none());
        assert!(drafts[&1].is_empty());
    }

    #[test]
    fn test_cell_value_prefers_draft() {
        let boat = sample_boat();
        assert_eq!(cell_value(None, &boat, "name"), "Gallifrey Falls");

        let draft = BoatUpdate {
            id: 1,
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert_eq!(cell_value(Some(&draft), &boat, "name"), "Renamed");
        // Fields the draft does not touch fall back to the record
        assert_eq!(cell_value(Some(&draft), &boat, "length"), "28");
    }

    #[test]
    fn test_save_outcome_all_success() {
        let results = vec![Ok(()), Ok(())];
        assert!(save_outcome(&results).is_ok());
    }

    #[test]
    fn test_save_outcome_partial_failure_is_error() {
        // One success, one failure: aggregate error, success path skipped
        let results = vec![Ok(()), Err("boat 2 not found".to_string())];
        let outcome = save_outcome(&results);
        let message = outcome.unwrap_err();
        assert!(message.contains("1 of 2 updates failed"));
        assert!(message.contains("boat 2 not found"));
    }

    #[test]
    fn test_save_outcome_empty_batch() {
        assert!(save_outcome(&[]).is_ok());
    }

    #[test]
    fn test_columns_cover_editable_fields() {
        let fields: Vec<&str> = COLUMNS.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, vec!["name", "length", "price", "description"]);
    }

    #[test]
    fn test_tab_button_class() {
        assert!(tab_button_class(true).contains("border-blue-600"));
        assert!(!tab_button_class(false).contains("border-blue-600"));
    }
}
