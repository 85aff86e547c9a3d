use super::filter::{apply, Criteria};
use super::model::Person;

/// Where the one-shot people fetch stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState<'a> {
    /// Not mounted yet; nothing requested.
    #[default]
    Idle,
    Loading,
    Failed,
    Loaded(&'a [Person]),
}

impl<'a> LoadState<'a> {
    /// Maps the fetch resource value. Every error collapses to `Failed`.
    pub fn from_result<E>(value: Option<&'a Result<Vec<Person>, E>>) -> Self {
        match value {
            None => LoadState::Loading,
            Some(Ok(people)) => LoadState::Loaded(people),
            Some(Err(_)) => LoadState::Failed,
        }
    }

    /// The filter panel only makes sense over a loaded, non-empty list.
    pub fn filters_visible(&self) -> bool {
        matches!(self, LoadState::Loaded(people) if !people.is_empty())
    }
}

/// Content of the results box. Exactly one is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Error,
    EmptyDataset,
    NoMatches,
    Results(Vec<Person>),
}

impl Panel {
    pub fn derive(state: &LoadState<'_>, criteria: &Criteria) -> Self {
        match *state {
            LoadState::Idle | LoadState::Loading => Panel::Loading,
            LoadState::Failed => Panel::Error,
            LoadState::Loaded([]) => Panel::EmptyDataset,
            LoadState::Loaded(people) => {
                let visible = apply(people, criteria);
                if no_matches(people, &visible) {
                    Panel::NoMatches
                } else {
                    Panel::Results(visible)
                }
            }
        }
    }
}

pub fn no_matches(people: &[Person], visible: &[Person]) -> bool {
    visible.is_empty() && !people.is_empty()
}
