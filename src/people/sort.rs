use std::cmp::Ordering;

use super::model::Person;
use crate::search::{ParamValue, SearchParams};

pub const SORT_PARAM: &str = "sort";
pub const ORDER_PARAM: &str = "order";
const DESC: &str = "desc";

/// Sortable columns of the people table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Sex,
    Born,
    Died,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Sex,
        SortField::Born,
        SortField::Died,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Sex => "sex",
            SortField::Born => "born",
            SortField::Died => "died",
        }
    }

    pub fn parse(value: &str) -> Option<SortField> {
        SortField::ALL.into_iter().find(|f| f.as_str() == value)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            SortField::Name => "table.name",
            SortField::Sex => "table.sex",
            SortField::Born => "table.born",
            SortField::Died => "table.died",
        }
    }

    /// Ascending comparison: case-insensitive for text columns, numeric for
    /// years.
    pub fn compare(self, a: &Person, b: &Person) -> Ordering {
        match self {
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Sex => compare_text(a.sex.as_str(), b.sex.as_str()),
            SortField::Born => a.born.cmp(&b.born),
            SortField::Died => a.died.cmp(&b.died),
        }
    }
}

/// Letters compare ignoring case, so "de"/"van" particles sort among the
/// capitalised names; exact case only breaks ties.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Only the `desc` marker means descending; anything else is ascending.
    pub fn from_param(value: Option<&str>) -> SortOrder {
        match value {
            Some(DESC) => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SortOrder::Ascending => None,
            SortOrder::Descending => Some(DESC),
        }
    }
}

/// The `sort` / `order` pair a header link navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortUpdate {
    pub sort: Option<SortField>,
    pub order: SortOrder,
}

impl SortUpdate {
    pub fn apply_to(&self, params: &SearchParams) -> SearchParams {
        params.with([
            (SORT_PARAM, ParamValue::from(self.sort.map(SortField::as_str))),
            (ORDER_PARAM, ParamValue::from(self.order.as_param())),
        ])
    }
}

/// Next sort state when the header of `field` is clicked: unsorted, then
/// ascending, then descending, then back to unsorted.
pub fn toggle(field: SortField, sort: Option<SortField>, order: SortOrder) -> SortUpdate {
    match (sort == Some(field), order) {
        (false, _) => SortUpdate {
            sort: Some(field),
            order: SortOrder::Ascending,
        },
        (true, SortOrder::Ascending) => SortUpdate {
            sort: Some(field),
            order: SortOrder::Descending,
        },
        (true, SortOrder::Descending) => SortUpdate {
            sort: None,
            order: SortOrder::Ascending,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIcon {
    Unsorted,
    Ascending,
    Descending,
}

pub fn icon_for(field: SortField, sort: Option<SortField>, order: SortOrder) -> SortIcon {
    if sort != Some(field) {
        return SortIcon::Unsorted;
    }
    match order {
        SortOrder::Ascending => SortIcon::Ascending,
        SortOrder::Descending => SortIcon::Descending,
    }
}
