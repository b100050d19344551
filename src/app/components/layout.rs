//! Layout component wrapping all pages with the navigation bar.

use dioxus::prelude::*;

use super::nav::{Nav, BRAND};

/// Tailwind play CDN; pages are styled with utility classes only.
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} - {}", props.title, BRAND);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Script { src: TAILWIND_CDN }

        Nav {}
        main { class: "min-h-[calc(100vh-4rem)] bg-white",
            {props.children}
        }
    }
}
