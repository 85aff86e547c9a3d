use std::collections::HashMap;

use super::model::Person;

/// First person in `people` whose `name` equals `name`.
///
/// Parents are referenced by name, so duplicate names resolve to whichever
/// record comes first in the list.
pub fn find_parent<'a>(people: &'a [Person], name: &str) -> Option<&'a Person> {
    people.iter().find(|p| p.name == name)
}

/// Name lookup built once per loaded list. Answers exactly like
/// [`find_parent`] on the list it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameIndex {
    by_name: HashMap<String, Person>,
}

impl NameIndex {
    pub fn new(people: &[Person]) -> Self {
        let mut by_name = HashMap::with_capacity(people.len());
        for person in people {
            by_name
                .entry(person.name.clone())
                .or_insert_with(|| person.clone());
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&Person> {
        self.by_name.get(name)
    }

    pub fn resolve<'a>(&'a self, name: Option<&'a str>) -> ParentRef<'a> {
        match name {
            None => ParentRef::Missing,
            Some(name) => match self.get(name) {
                Some(person) => ParentRef::Linked(person),
                None => ParentRef::Unresolved(name),
            },
        }
    }
}

/// What a Mother/Father cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRef<'a> {
    /// No parent name on the record.
    Missing,
    /// Named, but nobody in the list carries that name.
    Unresolved(&'a str),
    Linked(&'a Person),
}
