//! Shared UI components for the Dioxus fullstack web UI.

pub mod layout;
pub mod nav;
pub mod viewport;

pub use layout::Layout;
pub use nav::{Nav, NavIcon, NavLink, NAV_LINKS};
pub use viewport::use_window_width;
