use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::app::Route;
use crate::components::PeopleLink;
use crate::i18n::t;
use crate::people::controls::sort_toggled;
use crate::people::{icon_for, Criteria, NameIndex, ParentRef, Person, SortField, SortIcon};
use crate::search::SearchParams;

//Icons
use dioxus_free_icons::icons::fa_solid_icons::FaSort;
use dioxus_free_icons::icons::fa_solid_icons::FaSortDown;
use dioxus_free_icons::icons::fa_solid_icons::FaSortUp;

#[component]
pub fn PeopleTable(
    rows: Vec<Person>,
    parents: NameIndex,
    params: SearchParams,
    #[props(!optional)] selected: Option<String>,
) -> Element {
    let criteria = Criteria::from_params(&params);

    // (label, link target, current icon) per sortable column
    let headers: Vec<(String, Route, SortIcon)> = SortField::ALL
        .into_iter()
        .map(|field| {
            (
                t(field.label_key()),
                Route::people(selected.clone(), sort_toggled(&params, field)),
                icon_for(field, criteria.sort, criteria.order),
            )
        })
        .collect();

    rsx! {
        table { class: "table", "data-cy": "peopleTable",
            thead {
                tr {
                    for (label, to, icon) in headers {
                        th {
                            span { class: "sort-header",
                                "{label}"
                                Link { to: to, class: "sort-link",
                                    SortIndicator { icon: icon }
                                }
                            }
                        }
                    }
                    th { {t("table.mother")} }
                    th { {t("table.father")} }
                }
            }

            tbody {
                {rows.iter().map(|person| {
                    let row_class = if selected.as_deref() == Some(person.slug.as_str()) { "is-selected" } else { "" };
                    let mother = parent_cell(parents.resolve(person.mother_name.as_deref()), &params);
                    let father = parent_cell(parents.resolve(person.father_name.as_deref()), &params);
                    rsx! {
                        tr { key: "{person.slug}", class: row_class, "data-cy": "person",
                            td {
                                PeopleLink { person: person.clone(), params: params.clone() }
                            }
                            td { {person.sex.as_str()} }
                            td { "{person.born}" }
                            td { "{person.died}" }
                            td { {mother} }
                            td { {father} }
                        }
                    }
                })}
            }
        }
    }
}

fn parent_cell(parent: ParentRef<'_>, params: &SearchParams) -> Element {
    match parent {
        ParentRef::Missing => rsx! { "-" },
        ParentRef::Unresolved(name) => rsx! { "{name}" },
        ParentRef::Linked(person) => rsx! {
            PeopleLink { person: person.clone(), params: params.clone() }
        },
    }
}

#[component]
fn SortIndicator(icon: SortIcon) -> Element {
    rsx! {
        span { class: "icon",
            {match icon {
                SortIcon::Unsorted => rsx! { Icon { width: 12, height: 12, fill: "currentColor", icon: FaSort } },
                SortIcon::Ascending => rsx! { Icon { width: 12, height: 12, fill: "currentColor", icon: FaSortUp } },
                SortIcon::Descending => rsx! { Icon { width: 12, height: 12, fill: "currentColor", icon: FaSortDown } },
            }}
        }
    }
}
