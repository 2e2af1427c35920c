// lib.rs - Root module for the boatyard library
//
// The web_app module holds the whole application; fixtures carries the
// shared schema/seed SQL used by the server binary and database tests.

pub mod web_app;

/// The fixtures module contains reusable schema and seed data
#[cfg(feature = "ssr")]
pub mod fixtures;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrate the server-rendered body.
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
