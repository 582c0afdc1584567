pub mod generator;
pub mod person;
pub mod student;

pub use generator::{KeyValueGenerator, RosterGenerator};
pub use person::{absent_person, Person};
pub use student::{Education, Exam, Student};
