// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Displays error messages with appropriate styling.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Error Occurred"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Secondary button component for lighter actions (cancel, dismiss).
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Star rating display component
///
/// Displays a star rating (0-5) with filled and empty stars.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
    /// Whether to show the numeric value
    #[prop(default = false)]
    show_value: bool,
) -> impl IntoView {
    let full_stars = rating.floor() as usize;
    let empty_stars = 5usize.saturating_sub(full_stars);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400 text-lg">"★"</span>
            }).collect_view()}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200 text-lg">"★"</span>
            }).collect_view()}

            <Show when=move || show_value>
                <span class="ml-2 text-sm font-bold text-gray-700 bg-gray-100 px-1.5 py-0.5 rounded">
                    {format!("{:.1}", rating)}
                </span>
            </Show>
        </div>
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    let class = match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}

/// Text input component
///
/// A styled text input bound to a signal.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none transition-shadow shadow-sm";

    view! {
        <input
            type="text"
            placeholder=placeholder
            class=class
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Price display component
///
/// Formats and displays a price value.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: rust_decimal::Decimal,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-xl font-bold text-blue-600"
    } else {
        "text-gray-900 font-medium"
    };

    view! {
        <span class=class>
            {format!("${:.2}", price)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    // Component tests would typically be done via end-to-end testing
    // or component testing frameworks. Unit tests verify logic only.

    #[test]
    fn test_star_calculation() {
        let rating = 4.0_f64;
        let full_stars = rating.floor() as usize;
        let empty_stars = 5usize.saturating_sub(full_stars);
        assert_eq!(full_stars, 4);
        assert_eq!(empty_stars, 1);
    }

    #[test]
    fn test_star_calculation_boundaries() {
        for (rating, expected_full) in [(0.0_f64, 0usize), (5.0, 5), (2.9, 2)] {
            let full_stars = rating.floor() as usize;
            let empty_stars = 5usize.saturating_sub(full_stars);
            assert_eq!(full_stars, expected_full, "full stars for rating {}", rating);
            assert_eq!(full_stars + empty_stars, 5);
        }
    }

    #[test]
    fn test_price_formatting_logic() {
        use rust_decimal::Decimal;

        let prices = [
            (Decimal::new(0, 0), "$0.00"),
            (Decimal::new(9999, 2), "$99.99"),
            (Decimal::new(8500000, 2), "$85000.00"),
        ];

        for (price, expected) in prices {
            let formatted = format!("${:.2}", price);
            assert_eq!(formatted, expected);
        }
    }

    #[test]
    fn test_badge_variants() {
        let variants = ["green", "red", "blue", "gray", "unknown"];
        for variant in variants {
            let class = match variant {
                "green" => "bg-green-100",
                "red" => "bg-red-100",
                "blue" => "bg-blue-100",
                _ => "bg-gray-100",
            };
            if variant == "unknown" {
                assert_eq!(class, "bg-gray-100");
            } else {
                assert!(class.contains(variant) || variant == "gray");
            }
        }
    }

    #[test]
    fn test_rating_title_format() {
        let title = format!("Rating: {:.1}", 4.0);
        assert_eq!(title, "Rating: 4.0");
    }
}
