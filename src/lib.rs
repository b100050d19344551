//! Para Po! - Rust Implementation
//!
//! Web UI for a ride/route-finding service.
//!
//! This library provides:
//! - A navigation bar with session-driven sign-in / avatar control
//! - A landing page that resolves the device location and opens the route view
//! - Reverse geocoding against a Nominatim-compatible service
//! - Web UI (Dioxus fullstack + Tailwind CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Session model and sign-in collaborator (shared)
pub mod auth;

// Destination resolver: state machine, geolocation, reverse geocoding (shared)
pub mod resolver;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
