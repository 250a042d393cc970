use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Attendance() -> Element {
    rsx!(
        Title { "Mark Attendance | VisionTrack" }
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl font-bold",
                "Mark Attendance"
            }
            p {
                "Look into the camera to check in."
            }
        }
    )
}
