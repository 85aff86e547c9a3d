use dioxus::prelude::*;
use crate::i18n::t;

#[component]
pub fn Home() -> Element {
    rsx! {
        h1 { class: "title", {t("home.title")} }
    }
}
