use dioxus::prelude::*;
use crate::i18n::t;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");

    rsx! {
        h1 { class: "title", {t("not_found.title")} }
    }
}
