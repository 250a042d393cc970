use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCamera, FaChartLine};
use dioxus_free_icons::Icon;

use crate::client::{
    components::Page,
    router::Route,
    session::{use_session, view::dashboard_route},
};

#[component]
pub fn StartButton() -> Element {
    let session = use_session();
    let state = *session.read();

    rsx!(
        ul { class: "flex gap-2",
            li {
                Link {
                    to: Route::Attendance {},
                    class: "btn btn-primary w-44 flex gap-2",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaCamera
                    }
                    "Mark Attendance"
                }
            }
            if let Some(role) = state.role().filter(|_| state.logged_in()) {
                li {
                    Link {
                        to: dashboard_route(role),
                        class: "btn btn-outline w-44 flex gap-2",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaChartLine
                        }
                        "Dashboard"
                    }
                }
            } else if !state.checking() && !state.logged_in() {
                li {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-outline w-44",
                        "Get Started"
                    }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "VisionTrack" }
        Meta {
            name: "description",
            content: "Face recognition attendance tracking for teams."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6 text-center",
                h1 { class: "text-4xl font-bold text-primary",
                    "VisionTrack"
                }
                p { class: "max-w-xl",
                    "Mark attendance with a glance. Employees check in from any device with a camera, administrators follow attendance from their dashboard."
                }
                StartButton { }
            }
        }
    )
}
