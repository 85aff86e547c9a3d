mod search;

use crate::people::{Person, Sex};

pub(crate) fn person(name: &str, sex: Sex, born: i32, died: i32) -> Person {
    Person {
        slug: format!("{}-{}", name.to_lowercase().replace(' ', "-"), born),
        name: name.to_string(),
        sex,
        born,
        died,
        mother_name: None,
        father_name: None,
    }
}

pub(crate) fn with_parents(mut p: Person, mother: Option<&str>, father: Option<&str>) -> Person {
    p.mother_name = mother.map(str::to_string);
    p.father_name = father.map(str::to_string);
    p
}

/// Alice (f, 1850) and her son Bob (m, 1950).
pub(crate) fn alice_and_bob() -> Vec<Person> {
    vec![
        person("Alice", Sex::Female, 1850, 1920),
        with_parents(person("Bob", Sex::Male, 1950, 2010), Some("Alice"), None),
    ]
}

pub(crate) fn family() -> Vec<Person> {
    vec![
        person("Carolus Haverbeke", Sex::Male, 1832, 1905),
        person("Maria van Brussel", Sex::Female, 1801, 1834),
        with_parents(
            person("Emma de Milliano", Sex::Female, 1876, 1956),
            Some("Sophia van Damme"),
            Some("Petrus de Milliano"),
        ),
        with_parents(
            person("Emile Haverbeke", Sex::Male, 1877, 1968),
            Some("Maria Sturm"),
            Some("Carolus Haverbeke"),
        ),
        person("Jan Frans van Brussel", Sex::Male, 1761, 1833),
        with_parents(
            person("Lieven de Causmaecker", Sex::Male, 1696, 1724),
            None,
            Some("Carel de Causmaecker"),
        ),
        person("Pauwels van Haverbeke", Sex::Male, 1535, 1582),
    ]
}

pub(crate) fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.name.as_str()).collect()
}
