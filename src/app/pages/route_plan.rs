//! Route view page component.
//!
//! Reads origin and destination from the query string. Computing the route
//! itself is done elsewhere; this page confirms both endpoints.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::resolver::RouteQuery;

#[component]
pub fn RoutePlan(query: RouteQuery) -> Element {
    let content = if query.is_complete() {
        let origin_name = if query.origin_name.is_empty() {
            "Your location".to_string()
        } else {
            query.origin_name.clone()
        };
        rsx! {
            div { class: "card space-y-4 rounded-lg border border-gray-200 p-6",
                div {
                    p { class: "text-sm font-semibold text-gray-500", "From" }
                    p { class: "text-lg", "{origin_name}" }
                    p { class: "text-sm text-gray-500", "{query.origin_lat}, {query.origin_lon}" }
                }
                div { class: "border-t border-gray-200" }
                div {
                    p { class: "text-sm font-semibold text-gray-500", "To" }
                    p { class: "text-lg", "{query.destination}" }
                }
            }
        }
    } else {
        rsx! {
            div { class: "card rounded-lg border border-gray-200 p-6",
                p { class: "text-gray-600", "Tell us where you are going first." }
            }
        }
    };

    rsx! {
        Layout {
            title: "Route".to_string(),

            div { class: "mx-auto max-w-xl px-4 py-8",
                h1 { class: "mb-6 text-2xl font-bold", "Your Route" }
                {content}
                a { class: "mt-6 inline-block text-sm font-medium hover:underline", href: "/", "← New search" }
            }
        }
    }
}
