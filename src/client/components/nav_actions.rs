use dioxus::prelude::*;

use crate::client::session::NavAction;

/// Renders the navbar actions shared by the horizontal bar and the mobile panel.
///
/// Link actions call `on_navigate` when clicked so the mobile panel can close, the
/// logout action calls `on_logout`.
#[component]
pub fn NavActions(
    actions: Vec<NavAction>,
    on_navigate: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx!(
        for action in actions {
            if let Some(to) = action.target() {
                Link {
                    to: to,
                    class: "w-full md:w-auto",
                    onclick: move |_| on_navigate.call(()),
                    button {
                        class: "{action.style().class()} w-full justify-center text-sm sm:text-base",
                        "{action.label()}"
                    }
                }
            } else {
                button {
                    class: "{action.style().class()} w-full justify-center text-sm sm:text-base md:w-auto",
                    onclick: move |_| on_logout.call(()),
                    "{action.label()}"
                }
            }
        }
    )
}
