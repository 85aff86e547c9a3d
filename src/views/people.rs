use dioxus::prelude::*;

use crate::api::{fetch_people, ApiError};
use crate::app::Route;
use crate::components::{Loader, PeopleFilters, PeopleTable};
use crate::config::use_config;
use crate::i18n::t;
use crate::people::{Criteria, LoadState, NameIndex, Panel, Person};
use crate::search::SearchParams;

/// The one-shot people fetch, shared by every route under `/people`.
pub type PeopleResource = Resource<Result<Vec<Person>, ApiError>>;

/// Owns the people list for all `/people` routes, so moving between the list
/// and a selected person never refetches. The request future lives in this
/// scope and is dropped with it; nothing is written after unmount.
#[component]
pub fn PeopleLayout() -> Element {
    let config = use_config();

    let people: PeopleResource = use_resource(move || {
        let url = config.api_url.clone();
        async move {
            let result = fetch_people(&url).await;
            if let Err(err) = &result {
                tracing::error!(%err, "failed to load people");
            }
            result
        }
    });

    let parents = use_memo(move || match &*people.read() {
        Some(Ok(list)) => NameIndex::new(list),
        _ => NameIndex::default(),
    });

    use_context_provider(|| people);
    use_context_provider(|| parents);

    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
pub fn People(params: SearchParams) -> Element {
    rsx! {
        PeoplePage { params: params, selected: None }
    }
}

#[component]
pub fn SelectedPerson(slug: String, params: SearchParams) -> Element {
    rsx! {
        PeoplePage { params: params, selected: Some(slug) }
    }
}

#[component]
fn PeoplePage(params: SearchParams, #[props(!optional)] selected: Option<String>) -> Element {
    let people = use_context::<PeopleResource>();
    let parents = use_context::<Memo<NameIndex>>();

    let criteria = Criteria::from_params(&params);
    let (panel, filters_visible) = {
        let value = people.read();
        let state = LoadState::from_result((*value).as_ref());
        (Panel::derive(&state, &criteria), state.filters_visible())
    };

    rsx! {
        h1 { class: "title", {t("people.title")} }

        div { class: "people-layout",
            if filters_visible {
                PeopleFilters { params: params.clone(), selected: selected.clone() }
            }

            div { class: "people-results",
                {match panel {
                    Panel::Loading => rsx! { Loader {} },
                    Panel::Error => rsx! {
                        p { class: "has-text-danger", "data-cy": "peopleLoadingError", {t("people.error")} }
                    },
                    Panel::EmptyDataset => rsx! {
                        p { "data-cy": "noPeopleMessage", {t("people.empty")} }
                    },
                    Panel::NoMatches => rsx! {
                        p { {t("people.no_matches")} }
                    },
                    Panel::Results(rows) => rsx! {
                        PeopleTable { rows: rows, parents: parents(), params: params.clone(), selected: selected.clone() }
                    },
                }}
            }
        }
    }
}
