use dioxus::prelude::*;

use crate::app::Route;
use crate::i18n::t;
use crate::people::controls::{
    all_centuries, century_toggled, query_changed, reset_filters, sex_selected, CENTURIES,
};
use crate::people::{Criteria, Sex};
use crate::search::SearchParams;

#[component]
pub fn PeopleFilters(params: SearchParams, #[props(!optional)] selected: Option<String>) -> Element {
    let nav = navigator();
    let criteria = Criteria::from_params(&params);

    let sex_tabs: Vec<(String, Route, &'static str)> = [
        (None, "filters.all"),
        (Some(Sex::Male), "filters.male"),
        (Some(Sex::Female), "filters.female"),
    ]
    .into_iter()
    .map(|(sex, key)| {
        let active = criteria.sex == sex.map(Sex::as_str).unwrap_or_default();
        (
            t(key),
            Route::people(selected.clone(), sex_selected(&params, sex)),
            if active { "is-active" } else { "" },
        )
    })
    .collect();

    let century_buttons: Vec<(i32, Route, &'static str)> = CENTURIES
        .into_iter()
        .map(|century| {
            let class = if criteria.centuries.contains(&century) { "button is-info" } else { "button" };
            (century, Route::people(selected.clone(), century_toggled(&params, century)), class)
        })
        .collect();

    let all_class = if criteria.centuries.is_empty() { "button is-success" } else { "button" };
    let all_route = Route::people(selected.clone(), all_centuries(&params));
    let reset_route = Route::people(selected.clone(), reset_filters());

    let query = criteria.query.clone();
    let oninput = move |evt: FormEvent| {
        let next = query_changed(&params, &evt.value());
        tracing::debug!(query = %evt.value(), "name filter changed");
        nav.replace(Route::people(selected.clone(), next));
    };

    rsx! {
        nav { class: "panel", "data-cy": "filters",
            p { class: "panel-heading", {t("filters.title")} }

            p { class: "panel-tabs panel-block", "data-cy": "SexFilter",
                for (label, to, class) in sex_tabs {
                    Link { to: to, class: class, "{label}" }
                }
            }

            div { class: "panel-block",
                input {
                    class: "search-input",
                    "data-cy": "NameFilter",
                    r#type: "search",
                    placeholder: t("filters.search"),
                    value: "{query}",
                    oninput: oninput,
                }
            }

            div { class: "panel-block", "data-cy": "CenturyFilter",
                for (century, to, class) in century_buttons {
                    Link { to: to, class: class, "{century}" }
                }
                Link { to: all_route, class: all_class, {t("filters.all")} }
            }

            div { class: "panel-block",
                Link { to: reset_route, class: "button is-fullwidth", {t("filters.reset")} }
            }
        }
    }
}
