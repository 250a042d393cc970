use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{components::Page, router::Route, session::use_session},
    model::user::UserRole,
};

#[component]
pub fn AdminDashboard() -> Element {
    rsx!(
        Title { "Admin Dashboard | VisionTrack" }
        Page { class: "flex flex-col items-center",
            DashboardCard { role: UserRole::Admin }
        }
    )
}

#[component]
pub fn EmployeeDashboard() -> Element {
    rsx!(
        Title { "Dashboard | VisionTrack" }
        Page { class: "flex flex-col items-center",
            DashboardCard { role: UserRole::Employee }
        }
    )
}

#[component]
pub fn DashboardCard(role: UserRole) -> Element {
    let session = use_session();
    let state = *session.read();

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-96",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "{role.label()} Dashboard"
                }
                if state.checking() {
                    div {
                        class: "skeleton h-6 w-40"
                    }
                } else if state.logged_in() && state.role() == Some(role) {
                    p {
                        "You are signed in as {role}."
                    }
                } else {
                    p {
                        "Sign in with your {role} account to view this dashboard."
                    }
                    div { class: "card-actions justify-end",
                        Link {
                            to: Route::Login {},
                            class: "btn btn-primary",
                            "Login"
                        }
                    }
                }
            }
        }
    )
}
