//! Navigation component using Tailwind CSS.

use dioxus::prelude::*;

use crate::app::context::use_auth;
use crate::auth::AuthControl;

/// Icon shown next to a navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Route,
    Forum,
    Marketplace,
    Profile,
}

impl NavIcon {
    /// SVG path data (24x24 viewBox, stroked).
    pub fn path(self) -> &'static str {
        match self {
            NavIcon::Route => "M9 20l-5.447-2.724A1 1 0 013 16.382V5.618a1 1 0 011.447-.894L9 7m0 13l6-3m-6 3V7m6 10l4.553 2.276A1 1 0 0021 18.382V7.618a1 1 0 00-.553-.894L15 4m0 13V4m0 0L9 7",
            NavIcon::Forum => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z",
            NavIcon::Marketplace => "M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z",
            NavIcon::Profile => "M5.121 17.804A13.937 13.937 0 0112 16c2.5 0 4.847.655 6.879 1.804M15 10a3 3 0 11-6 0 3 3 0 016 0zm6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        name: "Route",
        href: "/route",
        icon: NavIcon::Route,
    },
    NavLink {
        name: "Forum",
        href: "/forum",
        icon: NavIcon::Forum,
    },
    NavLink {
        name: "Marketplace",
        href: "/marketplace",
        icon: NavIcon::Marketplace,
    },
    NavLink {
        name: "Profile",
        href: "/profile",
        icon: NavIcon::Profile,
    },
];

pub const BRAND: &str = "Para Po!";

#[component]
fn Icon(icon: NavIcon, #[props(default = "h-6 w-6".to_string(), into)] class: String) -> Element {
    rsx! {
        svg { class: "{class}", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: icon.path() }
        }
    }
}

#[component]
fn GoogleMark(#[props(into)] class: String) -> Element {
    rsx! {
        svg { class: "{class}", view_box: "0 0 48 48",
            path { fill: "#FFC107", d: "M43.6 20.1H42V20H24v8h11.3C33.7 32.7 29.2 36 24 36c-6.6 0-12-5.4-12-12s5.4-12 12-12c3.1 0 5.8 1.2 7.9 3.1l5.7-5.7C34 6.1 29.3 4 24 4 12.9 4 4 12.9 4 24s8.9 20 20 20 20-8.9 20-20c0-1.3-.1-2.6-.4-3.9z" }
            path { fill: "#FF3D00", d: "M6.3 14.7l6.6 4.8C14.7 15.1 19 12 24 12c3.1 0 5.8 1.2 7.9 3.1l5.7-5.7C34 6.1 29.3 4 24 4 16.3 4 9.7 8.3 6.3 14.7z" }
            path { fill: "#4CAF50", d: "M24 44c5.2 0 9.9-2 13.4-5.2l-6.2-5.2C29.2 35.1 26.7 36 24 36c-5.2 0-9.6-3.3-11.3-8l-6.5 5C9.5 39.6 16.2 44 24 44z" }
            path { fill: "#1976D2", d: "M43.6 20.1H42V20H24v8h11.3c-.8 2.2-2.2 4.2-4.1 5.6l6.2 5.2C37 39.2 44 34 44 24c0-1.3-.1-2.6-.4-3.9z" }
        }
    }
}

/// Avatar with a fallback initial underneath the image.
#[component]
fn Avatar(image: String, alt: String, initial: String) -> Element {
    rsx! {
        span { class: "relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full bg-gray-200",
            span { class: "flex h-full w-full items-center justify-center text-sm font-medium text-gray-700", "{initial}" }
            if !image.is_empty() {
                img { class: "absolute inset-0 h-full w-full object-cover", src: "{image}", alt: "{alt}" }
            }
        }
    }
}

/// Top navigation bar: brand, links, and a single auth control. The mobile
/// sheet always offers Google sign-in.
#[component]
pub fn Nav() -> Element {
    let auth = use_auth();
    let mut menu_open = use_signal(|| false);

    let mobile_menu_class = if menu_open() {
        "fixed inset-0 z-50 flex md:hidden"
    } else {
        "hidden"
    };

    let auth_control = match auth.control() {
        AuthControl::Avatar {
            image,
            alt,
            initial,
        } => rsx! {
            Avatar { image: image, alt: alt, initial: initial }
        },
        AuthControl::SignIn => rsx! {
            button {
                class: "inline-flex items-center gap-2 rounded-md border border-gray-300 px-4 py-2 text-sm font-medium hover:bg-gray-100",
                r#type: "button",
                onclick: move |_| auth.sign_in(),
                GoogleMark { class: "h-5 w-5" }
                "Sign in"
            }
        },
    };

    rsx! {
        header { class: "sticky top-0 left-0 z-50 flex w-full justify-center bg-white shadow-sm dark:bg-gray-950 dark:text-gray-50",
            div { class: "container flex h-16 items-center justify-between px-4 md:px-6",
                // Mobile menu button
                button {
                    class: "inline-flex items-center justify-center rounded-md border border-gray-300 p-2 md:hidden",
                    r#type: "button",
                    onclick: move |_| menu_open.toggle(),
                    svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                        path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
                    }
                    span { class: "sr-only", "Toggle navigation menu" }
                }

                // Logo / Brand
                a { class: "flex items-center gap-2", href: "/",
                    Icon { icon: NavIcon::Route, class: "h-8 w-8 text-blue-600" }
                    span { class: "text-lg font-semibold", "{BRAND}" }
                }

                // Desktop navigation
                nav { class: "hidden items-center gap-6 md:flex",
                    for link in NAV_LINKS {
                        a { key: "{link.href}", class: "text-sm font-medium hover:underline", href: link.href, "{link.name}" }
                    }
                    {auth_control}
                }
            }

            // Mobile sheet
            div { class: "{mobile_menu_class}", id: "mobile-menu",
                div { class: "flex h-full w-72 flex-col justify-between bg-white shadow-lg",
                    div { class: "grid gap-4 p-4",
                        for link in NAV_LINKS {
                            a {
                                key: "{link.href}",
                                class: "flex items-center gap-4 font-medium hover:underline",
                                href: link.href,
                                onclick: move |_| menu_open.set(false),
                                Icon { icon: link.icon }
                                "{link.name}"
                            }
                        }
                    }
                    div { class: "flex flex-col gap-4 p-4",
                        button {
                            class: "inline-flex w-full items-center justify-center gap-2 rounded-md border border-gray-300 px-4 py-3 font-medium hover:bg-gray-100",
                            r#type: "button",
                            onclick: move |_| auth.sign_in(),
                            GoogleMark { class: "h-8 w-8" }
                            "Sign in with Google"
                        }
                    }
                }
                // Backdrop closes the sheet
                div { class: "flex-1 bg-black/40", onclick: move |_| menu_open.set(false) }
            }
        }
    }
}


#[cfg(all(test, feature = "server"))]
mod render_tests {
    use std::rc::Rc;

    use super::*;
    use crate::app::context::AuthContext;
    use crate::auth::{RedirectAuthClient, Session, SessionUser};

    #[component]
    fn NavHost(session: Session) -> Element {
        use_context_provider(|| {
            AuthContext::new(
                Rc::new(RedirectAuthClient::default()),
                "google",
                session.clone(),
            )
        });
        rsx! { Nav {} }
    }

    fn render(session: Session) -> String {
        let mut dom = VirtualDom::new_with_props(NavHost, NavHostProps { session });
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    fn maria() -> Session {
        Session::authenticated(SessionUser {
            name: Some("Maria".to_string()),
            image: Some("https://img/maria.png".to_string()),
        })
    }

    #[test]
    fn test_signed_out_nav_shows_sign_in_twice() {
        let html = render(Session::unauthenticated());

        // menu toggle, desktop sign-in, sheet sign-in
        assert_eq!(html.matches("<button").count(), 3);
        assert_eq!(html.matches("Sign in with Google").count(), 1);
        assert!(!html.contains("https://img/maria.png"));
        for link in NAV_LINKS {
            let href = format!("href=\"{}\"", link.href);
            assert_eq!(html.matches(&href).count(), 2, "{} in bar and sheet", link.href);
        }
    }

    #[test]
    fn test_session_toggle_swaps_only_desktop_control() {
        let signed_in = render(maria());
        let signed_out = render(Session::unauthenticated());

        // desktop sign-in becomes the avatar; the sheet keeps its button
        assert_eq!(signed_in.matches("<button").count(), 2);
        assert_eq!(signed_in.matches("Sign in with Google").count(), 1);
        assert_eq!(signed_in.matches("https://img/maria.png").count(), 1);
        assert!(signed_in.contains(">M<"));

        let links = |html: &str| {
            NAV_LINKS
                .iter()
                .map(|l| html.matches(&format!("href=\"{}\"", l.href)).count())
                .collect::<Vec<_>>()
        };
        assert_eq!(links(&signed_in), links(&signed_out));
        assert_eq!(
            signed_in.matches(BRAND).count(),
            signed_out.matches(BRAND).count()
        );
    }

    #[test]
    fn test_loading_session_renders_like_signed_out() {
        assert_eq!(render(Session::loading()), render(Session::unauthenticated()));
    }
}
