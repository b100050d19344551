//! Landing page component.
//!
//! Collects a destination, resolves the device location and sends the user
//! to the route view. All view state lives in one `Signal<ResolverState>`
//! and changes only through `ResolverState::apply`.

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::components::{use_window_width, Layout};
use crate::app::context::use_settings;
use crate::app::Route;
use crate::resolver::{
    BrowserGeolocator, DestinationResolver, NominatimClient, ResolverEvent, ResolverState,
    RouteNavigator, RouteQuery, StateCell,
};

/// Shortcuts shown under the search box on small screens.
pub const RECENT_SEARCHES: [&str; 2] = ["Mall of Asia", "BGC Central"];

impl StateCell for Signal<ResolverState> {
    fn update<T>(&mut self, f: impl FnOnce(&mut ResolverState) -> T) -> T {
        self.with_mut(f)
    }
}

/// Pushes the route view onto the Dioxus router.
#[derive(Clone, Copy)]
struct RouterNavigator(Navigator);

impl RouteNavigator for RouterNavigator {
    fn navigate(&self, query: &RouteQuery) {
        tracing::info!(href = %query.href(), "Navigating to route view");
        self.0.push(Route::RoutePlan {
            query: query.clone(),
        });
    }
}

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let settings = use_settings();
    let nav = navigator();

    let mut state =
        use_signal(|| ResolverState::with_breakpoint(settings.peek().mobile_breakpoint));

    // Window width feeds the mobile flag; breakpoint may arrive later from the server
    let mut width = use_signal(|| None::<f64>);
    use_window_width(move |w| width.set(Some(w)));
    use_effect(move || {
        let breakpoint = settings.read().mobile_breakpoint;
        if let Some(w) = width() {
            state.with_mut(|s| {
                s.mobile_breakpoint = breakpoint;
                s.apply(ResolverEvent::Resize { width: w });
            });
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let resolver = DestinationResolver::new(
            BrowserGeolocator,
            NominatimClient::new(settings.read().geocoder_url.clone()),
            RouterNavigator(nav),
        );
        spawn(async move {
            let mut cell = state;
            resolver.submit(&mut cell).await;
        });
    };

    let current = state.read().clone();

    rsx! {
        Layout {
            title: "Find Your Way".to_string(),

            div { class: "flex min-h-screen flex-col lg:flex-row",
                div { class: "relative flex w-full flex-col items-center justify-center lg:w-1/3",
                    div {
                        class: if current.is_mobile { "flex h-[40vh] w-full items-center justify-center pt-5" } else { "flex h-[50vh] w-full items-center justify-center" },
                        div {
                            class: if current.is_mobile { "scale-50 transform transition-transform duration-300" } else { "transform transition-transform duration-300" },
                            svg { class: "h-48 w-48 text-blue-600", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "1.5",
                                path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M9 20l-5.447-2.724A1 1 0 013 16.382V5.618a1 1 0 011.447-.894L9 7m0 13l6-3m-6 3V7m6 10l4.553 2.276A1 1 0 0021 18.382V7.618a1 1 0 00-.553-.894L15 4m0 13V4m0 0L9 7" }
                            }
                        }
                    }

                    div { class: "w-full space-y-6 px-4 lg:px-0",
                        div { class: "mb-4 text-center",
                            h2 { class: "text-2xl font-semibold text-gray-800", "Find Your Way" }
                            p { class: "mt-1 text-gray-600", "Enter your destination to get started" }
                        }

                        SearchForm { state: state, on_submit: on_submit }

                        if current.is_mobile {
                            MobileExtras { state: state }
                        }
                    }
                }

                if !current.is_mobile {
                    div { class: "flex h-[50vh] w-full items-center justify-center overflow-hidden bg-gradient-to-br from-blue-50 to-blue-200 lg:h-screen lg:w-2/3",
                        div { class: "text-center text-blue-900",
                            p { class: "text-4xl font-bold", "Para Po!" }
                            p { class: "mt-2 text-lg", "Your commute, mapped." }
                        }
                    }
                }
            }
        }
    }
}

/// Destination input, Go button and the error line.
#[component]
fn SearchForm(state: Signal<ResolverState>, on_submit: EventHandler<FormEvent>) -> Element {
    let mut state = state;
    let current = state.read().clone();

    rsx! {
        form {
            class: "mx-auto flex w-full max-w-sm items-center space-x-2",
            onsubmit: move |evt| on_submit.call(evt),
            div { class: "relative flex-grow",
                svg { class: "absolute left-3 top-1/2 h-4 w-4 -translate-y-1/2 transform text-gray-400", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" }
                }
                input {
                    class: "w-full rounded-md border border-gray-300 py-2 pl-10 pr-3",
                    r#type: "text",
                    placeholder: "Where are you going?",
                    value: "{current.destination}",
                    oninput: move |evt| {
                        state.with_mut(|s| {
                            s.apply(ResolverEvent::InputChanged(evt.value()));
                        });
                    },
                }
            }
            button {
                class: "relative rounded-md bg-gray-900 px-4 py-2 text-white disabled:opacity-50",
                r#type: "submit",
                disabled: !current.can_submit(),
                if current.is_locating {
                    svg { class: "h-4 w-4 animate-spin", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                        path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M21 12a9 9 0 11-6.219-8.56" }
                    }
                } else {
                    "Go"
                }
            }
        }

        if let Some(error) = &current.error {
            div { class: "text-center text-sm text-red-500", "{error}" }
        }
    }
}

/// Quick actions and recent searches shown on small screens.
#[component]
fn MobileExtras(state: Signal<ResolverState>) -> Element {
    let mut state = state;

    rsx! {
        div { class: "mx-auto mt-8 grid max-w-sm grid-cols-2 gap-4",
            button {
                class: "flex items-center justify-center gap-2 rounded-md border border-gray-300 py-6 hover:bg-gray-50",
                r#type: "button",
                svg { class: "h-5 w-5", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M17.657 16.657L13.414 20.9a2 2 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0zM15 11a3 3 0 11-6 0 3 3 0 016 0z" }
                }
                span { "Nearby Spots" }
            }
            a {
                class: "flex w-full items-center justify-center gap-2 rounded-md border border-gray-300 py-6 hover:bg-gray-50",
                href: "/forum",
                svg { class: "h-5 w-5", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z" }
                }
                span { "Latest Updates" }
            }
        }

        div { class: "mx-auto mt-8 max-w-sm",
            h3 { class: "mb-3 text-sm font-medium text-gray-500", "Recent Searches" }
            div { class: "space-y-2",
                for place in RECENT_SEARCHES {
                    button {
                        key: "{place}",
                        class: "flex w-full items-center justify-start rounded-md px-3 py-2 text-gray-600 hover:bg-gray-100",
                        r#type: "button",
                        onclick: move |_| {
                            state.with_mut(|s| {
                                s.apply(ResolverEvent::InputChanged(place.to_string()));
                            });
                        },
                        svg { class: "mr-2 h-4 w-4", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z" }
                        }
                        "{place}"
                    }
                }
            }
        }
    }
}
