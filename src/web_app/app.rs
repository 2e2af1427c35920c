// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the shared message channel, the toast store,
// and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::messaging::BoatMessageChannel;
use crate::web_app::notifications::{provide_notifications, Toaster};
use crate::web_app::pages::ShowroomPage;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The application-scoped boat selection channel
/// - The toast notification store
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    // Application-wide selection channel and toast store, shared by every
    // component below via context.
    provide_context(BoatMessageChannel::new());
    provide_notifications();

    view! {
        // HTML meta tags
        <Title text="Boatyard Showroom" />
        <Meta name="description" content="Boat dealership showroom with search, reviews, and nearby boats" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/boatyard.css" />

        // Toast stack renders above everything
        <Toaster />

        // Router setup
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ShowroomPage />
                    <Route path=path!("/gallery") view=ShowroomPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Showroom"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_route_paths() {
        let root_path = "/";
        let gallery_path = "/gallery";
        assert!(gallery_path.starts_with('/'));
        assert_eq!(root_path, "/");
    }

    #[test]
    fn test_stylesheet_path() {
        let stylesheet_path = "/pkg/boatyard.css";
        assert!(stylesheet_path.ends_with(".css"));
        assert!(stylesheet_path.contains("boatyard"));
    }
}
