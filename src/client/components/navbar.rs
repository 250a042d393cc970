use dioxus::prelude::*;

use crate::client::{
    components::{NavActions, VisionTrackTitleButton},
    router::Route,
    session::{logout, use_session_provider, SessionView},
    storage::BrowserStorage,
};

/// Layout wrapping every route with the VisionTrack navbar.
///
/// Owns the session for the lifetime of the layout: the session is resolved once when
/// the navbar mounts and provided to the routed pages through context.
#[component]
pub fn Navbar() -> Element {
    let mut session = use_session_provider();
    let mut menu_open = use_signal(|| false);
    let navigator = use_navigator();

    let view = SessionView::new(&session.read(), menu_open());
    let actions = view.actions();

    let on_navigate = use_callback(move |()| menu_open.set(view.after_select().menu_open));
    let on_logout = use_callback(move |()| {
        let redirect = logout(&BrowserStorage, &mut session.write(), &mut menu_open.write());
        navigator.push(redirect);
    });

    rsx! {
        nav {
            class: "fixed top-0 left-0 right-0 z-50 bg-base-200/80 backdrop-blur-md border-b border-base-300",
            div {
                class: "container mx-auto px-4 py-4 relative",
                div {
                    class: "flex items-center justify-between",
                    VisionTrackTitleButton {
                        onclick: move |_| menu_open.set(view.after_select().menu_open)
                    }
                    div {
                        class: "flex items-center gap-3 md:hidden",
                        if let Some(role) = view.role_badge() {
                            span { class: "text-sm opacity-70",
                                "{role.label()}"
                            }
                        }
                        button {
                            class: "btn btn-outline btn-square",
                            "aria-label": "Toggle menu",
                            onclick: move |_| menu_open.set(view.toggled().menu_open),
                            "{view.menu_icon()}"
                        }
                    }
                    div {
                        class: "hidden md:flex items-center gap-3",
                        NavActions {
                            actions: actions,
                            on_navigate: on_navigate,
                            on_logout: on_logout,
                        }
                    }
                }
                if let Some(panel_actions) = view.panel_actions() {
                    div {
                        class: "absolute left-4 right-4 mt-4 md:hidden grid gap-2 rounded-lg border border-base-300 bg-base-100 p-3 shadow-lg",
                        NavActions {
                            actions: panel_actions,
                            on_navigate: on_navigate,
                            on_logout: on_logout,
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
