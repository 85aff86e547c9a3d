use dioxus::prelude::*;

use crate::app::Route;
use crate::people::{Person, Sex};
use crate::search::SearchParams;

/// Name link that selects `person` while keeping the current filters.
#[component]
pub fn PeopleLink(person: Person, params: SearchParams) -> Element {
    let link_class = if person.sex == Sex::Female { "has-text-danger" } else { "" };

    rsx! {
        Link {
            to: Route::SelectedPerson { slug: person.slug.clone(), params },
            class: link_class,
            "{person.name}"
        }
    }
}
