use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaQrcode;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn VisionTrackTitleButton(onclick: EventHandler<MouseEvent>) -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            class: "flex items-center gap-2",
            onclick: move |event| onclick.call(event),
            div { class: "w-10 h-10 rounded-lg bg-primary text-primary-content flex items-center justify-center",
                Icon {
                    width: 24,
                    height: 24,
                    icon: FaQrcode
                }
            }
            p { class: "text-xl font-bold text-primary",
                "VisionTrack"
            }
        }
    )
}
