use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl font-bold",
                "Page not found"
            }
            p { class: "opacity-70",
                "/{path}"
            }
            Link { to: Route::Home {}, class: "btn btn-outline",
                "Back to Home"
            }
        }
    )
}
