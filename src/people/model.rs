use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Wire and query-string form: `"m"` / `"f"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }

    pub fn parse(value: &str) -> Option<Sex> {
        match value {
            "m" => Some(Sex::Male),
            "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// A person record as served by the people endpoint.
///
/// `mother_name` / `father_name` hold the *name* of another record, not its
/// slug. Nothing guarantees they resolve, or resolve uniquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub slug: String,
    pub name: String,
    pub sex: Sex,
    pub born: i32,
    pub died: i32,
    #[serde(default)]
    pub mother_name: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
}

impl Person {
    /// `ceil(born / 100)`, so 1800 is the 18th century and 1801 the 19th.
    pub fn century(&self) -> i32 {
        century_of(self.born)
    }
}

pub fn century_of(year: i32) -> i32 {
    // i64 so that negating i32::MIN cannot overflow; the result always fits.
    (-(-i64::from(year)).div_euclid(100)) as i32
}
