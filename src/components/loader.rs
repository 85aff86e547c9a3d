use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader", "data-cy": "loader" }
    }
}
