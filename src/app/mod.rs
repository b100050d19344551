//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod context;
pub mod pages;

use crate::resolver::RouteQuery;
use context::use_app_providers;
use pages::{Landing, NotFound, RoutePlan};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Settings and session context live at the root so every page shares them
    use_app_providers();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/route?:..query")]
    RoutePlan { query: RouteQuery },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
