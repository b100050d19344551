//! Fallback for paths without a page.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            title: "Not Found".to_string(),

            div { class: "mx-auto max-w-xl px-4 py-8 text-center",
                h1 { class: "mb-2 text-2xl font-bold", "Nothing here yet" }
                p { class: "text-gray-600", "{path} is not available." }
                a { class: "mt-6 inline-block text-sm font-medium hover:underline", href: "/", "Back to search" }
            }
        }
    }
}
