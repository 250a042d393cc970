use dioxus::prelude::*;

/// Page body offset below the fixed navbar
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[80px] px-4 pb-8 container mx-auto {class}",
            {children}
        }
    )
}
