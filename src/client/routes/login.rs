use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Login() -> Element {
    rsx!(
        Title { "Login | VisionTrack" }
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl font-bold",
                "Login"
            }
            p {
                "Sign in with your VisionTrack account to open your dashboard."
            }
        }
    )
}
