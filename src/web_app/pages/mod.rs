// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - ShowroomPage: The dealership gallery composing every boat component

pub mod showroom;

// Re-export page components
pub use showroom::ShowroomPage;
