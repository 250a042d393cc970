use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{config::Config, router::Route};

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        Config::from_env().unwrap_or_else(|err| {
            tracing::error!("Invalid configuration, using default API URL: {}", err);
            Config::default()
        })
    });

    rsx! {
        document::Title { "VisionTrack" }
        Router::<Route> {}
    }
}
