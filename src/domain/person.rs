use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::probing::KeyTag;

/// The canonical benchmark key.
///
/// Identity is the full (name, surname, birth date) triple. The string
/// projection is `Display`; the generator keeps it injective over any
/// sample it produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            birth_date,
        }
    }

    pub fn short_display(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.name,
            self.surname,
            self.birth_date.format("%Y-%m-%d")
        )
    }
}

// Surname first, then name, then birth date. The sorted containers require
// every tie to break deterministically.
impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.surname
            .cmp(&other.surname)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.birth_date.cmp(&other.birth_date))
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl KeyTag for Person {
    const TAG: &'static str = "person";
}

/// Missing-key synthesis rule for [`Person`].
///
/// Returns a sentinel person no generator produces: names outside every
/// roster table and a birth date at the calendar minimum. The realized
/// sample is not consulted.
pub fn absent_person(_keys: &[Person]) -> Person {
    Person::new("Nobody", "Unregistered", NaiveDate::MIN)
}
