//! Query-string updates behind the filter and sort controls. Each returns a
//! new parameter set that keeps every key it does not touch.

use super::filter::{Criteria, CENTURIES_PARAM, QUERY_PARAM, SEX_PARAM};
use super::model::Sex;
use super::sort::{toggle, SortField};
use crate::search::{ParamValue, SearchParams};

/// Century buttons offered by the filter panel.
pub const CENTURIES: [i32; 5] = [16, 17, 18, 19, 20];

pub fn query_changed(params: &SearchParams, text: &str) -> SearchParams {
    params.with([(QUERY_PARAM, ParamValue::text(text))])
}

pub fn sex_selected(params: &SearchParams, sex: Option<Sex>) -> SearchParams {
    params.with([(SEX_PARAM, ParamValue::from(sex.map(Sex::as_str)))])
}

/// Adds `century` to the selection, or removes it if already selected.
pub fn century_toggled(params: &SearchParams, century: i32) -> SearchParams {
    let mut selected: Vec<String> = params
        .get_all(CENTURIES_PARAM)
        .into_iter()
        .map(str::to_string)
        .collect();
    let value = century.to_string();
    match selected.iter().position(|c| *c == value) {
        Some(pos) => {
            selected.remove(pos);
        }
        None => selected.push(value),
    }
    params.with([(CENTURIES_PARAM, ParamValue::Many(selected))])
}

pub fn all_centuries(params: &SearchParams) -> SearchParams {
    params.with([(CENTURIES_PARAM, ParamValue::Clear)])
}

pub fn sort_toggled(params: &SearchParams, field: SortField) -> SearchParams {
    let criteria = Criteria::from_params(params);
    toggle(field, criteria.sort, criteria.order).apply_to(params)
}

pub fn reset_filters() -> SearchParams {
    SearchParams::new()
}
