//! Dioxus fullstack page components.

mod landing;
mod not_found;
mod route_plan;

pub use landing::{Landing, RECENT_SEARCHES};
pub use not_found::NotFound;
pub use route_plan::RoutePlan;
