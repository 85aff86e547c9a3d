use dioxus::prelude::*;

use crate::components::Navbar;
use crate::config::provide_config;
use crate::i18n::provide_i18n;
use crate::search::SearchParams;
use crate::views::{Home, NotFound, People, PeopleLayout, SelectedPerson};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[nest("/people")]
            #[layout(PeopleLayout)]
                #[route("/?:..params")]
                People { params: SearchParams },
                #[route("/:slug?:..params")]
                SelectedPerson { slug: String, params: SearchParams },
            #[end_layout]
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// The people list, optionally with `selected` highlighted.
    pub fn people(selected: Option<String>, params: SearchParams) -> Route {
        match selected {
            Some(slug) => Route::SelectedPerson { slug, params },
            None => Route::People { params },
        }
    }

    pub fn search_params(&self) -> Option<&SearchParams> {
        match self {
            Route::People { params } | Route::SelectedPerson { params, .. } => Some(params),
            _ => None,
        }
    }
}

#[component]
pub fn App() -> Element {
    provide_config();
    provide_i18n();

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        document::Meta { name: "description", content: "People table" }
        Router::<Route> {}
    }
}
