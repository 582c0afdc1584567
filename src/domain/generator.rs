use chrono::{Days, NaiveDate};

use super::{Education, Exam, Person, Student};

/// Deterministic source of benchmark pairs.
///
/// Contract: `generate` is total, and deterministic for a fixed index.
/// Distinct indices must yield pairwise distinct keys with pairwise
/// distinct string projections; the harness validates key uniqueness once
/// per run and fails fast when the contract is violated.
pub trait KeyValueGenerator {
    type Key;
    type Value;

    fn generate(&self, index: usize) -> (Self::Key, Self::Value);
}

const NAMES: [&str; 8] = [
    "Ivan", "Olena", "Petro", "Maria", "Taras", "Oksana", "Andrii", "Iryna",
];

const SURNAMES: [&str; 8] = [
    "Petrov",
    "Shevchenko",
    "Kovalenko",
    "Bondarenko",
    "Tkachenko",
    "Kravchenko",
    "Boiko",
    "Melnyk",
];

const SUBJECTS: [&str; 4] = ["Math", "Physics", "Chemistry", "History"];

const EDUCATION_CYCLE: [Education; 3] = [
    Education::Bachelor,
    Education::Master,
    Education::SecondEducation,
];

/// Default generator: a synthetic student roster.
///
/// Names cycle through fixed tables with the index mixed into the surname,
/// so keys and their projections stay injective for any sample size. No
/// randomness anywhere: two generators with the same base date produce
/// identical streams.
#[derive(Debug, Clone)]
pub struct RosterGenerator {
    base_date: NaiveDate,
}

impl RosterGenerator {
    pub fn new(base_date: NaiveDate) -> Self {
        Self { base_date }
    }
}

impl Default for RosterGenerator {
    fn default() -> Self {
        // Unix epoch; only an anchor for date arithmetic.
        Self::new(NaiveDate::default())
    }
}

impl KeyValueGenerator for RosterGenerator {
    type Key = Person;
    type Value = Student;

    fn generate(&self, index: usize) -> (Person, Student) {
        let name = NAMES[index % NAMES.len()];
        let surname = format!(
            "{}-{:03}",
            SURNAMES[(index / NAMES.len()) % SURNAMES.len()],
            index
        );
        let birth_date = self.base_date + Days::new((3650 + (index * 13) % 7300) as u64);
        let person = Person::new(name, surname, birth_date);

        let mut student = Student::new(
            person.clone(),
            EDUCATION_CYCLE[index % EDUCATION_CYCLE.len()],
            100 + (index % 12) as u32,
        );
        let exams = (0..index % 3).map(|k| {
            Exam::new(
                SUBJECTS[(index + k) % SUBJECTS.len()],
                60 + ((index * 7 + k * 11) % 41) as u32,
                self.base_date + Days::new((19_000 + index + k) as u64),
            )
        });
        student.add_exams(exams);

        (person, student)
    }
}
