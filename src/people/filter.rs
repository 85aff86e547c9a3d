use std::collections::BTreeSet;

use super::model::Person;
use super::sort::{SortField, SortOrder, ORDER_PARAM, SORT_PARAM};
use crate::search::SearchParams;

pub const QUERY_PARAM: &str = "query";
pub const SEX_PARAM: &str = "sex";
pub const CENTURIES_PARAM: &str = "centuries";

/// Filter and sort settings for one render, read from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub query: String,
    pub sex: String,
    pub centuries: BTreeSet<i32>,
    pub sort: Option<SortField>,
    /// Raw `sort` value. A non-empty but unknown column sorts nothing, yet
    /// `order=desc` still reverses the rows.
    pub sort_param: String,
    pub order: SortOrder,
}

impl Criteria {
    pub fn from_params(params: &SearchParams) -> Self {
        Self {
            query: params.get(QUERY_PARAM).unwrap_or_default().to_string(),
            sex: params.get(SEX_PARAM).unwrap_or_default().to_string(),
            // Entries that are not numbers can never match a century.
            centuries: params
                .get_all(CENTURIES_PARAM)
                .into_iter()
                .filter_map(|c| c.trim().parse().ok())
                .collect(),
            sort: params.get(SORT_PARAM).and_then(SortField::parse),
            sort_param: params.get(SORT_PARAM).unwrap_or_default().to_string(),
            order: SortOrder::from_param(params.get(ORDER_PARAM)),
        }
    }

    pub fn descending(&self) -> bool {
        self.order == SortOrder::Descending
    }
}

/// Visible rows for `criteria`, always computed from the full list.
pub fn apply(people: &[Person], criteria: &Criteria) -> Vec<Person> {
    filter_people(
        people,
        &criteria.query,
        &criteria.sex,
        &criteria.centuries,
        &criteria.sort_param,
        criteria.descending(),
    )
}

/// Filters narrow in order (text, sex, century). With a non-empty `sort` the
/// survivors are stable-sorted ascending by that column (an unknown column
/// leaves them as they are) and, when `descending`, the whole sequence is
/// reversed. Equal keys therefore come out in reverse input order.
pub fn filter_people(
    people: &[Person],
    query: &str,
    sex: &str,
    centuries: &BTreeSet<i32>,
    sort: &str,
    descending: bool,
) -> Vec<Person> {
    let needle = query.to_lowercase();

    let mut visible: Vec<Person> = people
        .iter()
        .filter(|p| needle.is_empty() || matches_query(p, &needle))
        .filter(|p| sex.is_empty() || p.sex.as_str() == sex)
        .filter(|p| centuries.is_empty() || centuries.contains(&p.century()))
        .cloned()
        .collect();

    if !sort.is_empty() {
        if let Some(field) = SortField::parse(sort) {
            visible.sort_by(|a, b| field.compare(a, b));
        }
        if descending {
            visible.reverse();
        }
    }

    visible
}

fn matches_query(person: &Person, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&person.name)
        || person.mother_name.as_deref().is_some_and(contains)
        || person.father_name.as_deref().is_some_and(contains)
}
