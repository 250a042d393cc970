use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{AdminDashboard, Attendance, EmployeeDashboard, Home, Login, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/attendance")]
    Attendance {},

    #[route("/login")]
    Login {},

    #[route("/admin")]
    AdminDashboard {},

    #[route("/employee")]
    EmployeeDashboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
