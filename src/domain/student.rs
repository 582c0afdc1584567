use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    Master,
    Bachelor,
    SecondEducation,
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Education::Master => "Master",
            Education::Bachelor => "Bachelor",
            Education::SecondEducation => "SecondEducation",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub subject: String,
    pub grade: u32,
    pub exam_date: NaiveDate,
}

impl Exam {
    pub fn new(subject: impl Into<String>, grade: u32, exam_date: NaiveDate) -> Self {
        Self {
            subject: subject.into(),
            grade,
            exam_date,
        }
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subject: {}, Grade: {}, Date: {}",
            self.subject,
            self.grade,
            self.exam_date.format("%Y-%m-%d")
        )
    }
}

/// The canonical benchmark value.
///
/// All fields are owned, so `Clone` is a deep copy. The containers never
/// rely on that; it exists for collaborators that hold copies of values
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub person: Person,
    pub education: Education,
    pub group: u32,
    exams: Vec<Exam>,
}

impl Student {
    pub fn new(person: Person, education: Education, group: u32) -> Self {
        Self {
            person,
            education,
            group,
            exams: Vec::new(),
        }
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    /// Appends exams in the given order. An empty batch is a no-op.
    pub fn add_exams(&mut self, new_exams: impl IntoIterator<Item = Exam>) {
        self.exams.extend(new_exams);
    }

    /// Mean grade across all exams taken, 0.0 when none have been.
    pub fn average_grade(&self) -> f64 {
        if self.exams.is_empty() {
            return 0.0;
        }
        let total: u32 = self.exams.iter().map(|e| e.grade).sum();
        f64::from(total) / self.exams.len() as f64
    }

    pub fn matches_education(&self, education: Education) -> bool {
        self.education == education
    }

    /// Condensed projection: person, education, group, and average grade.
    pub fn short_display(&self) -> String {
        format!(
            "{}, Education: {}, Group: {}, Avg. Grade: {:.2}",
            self.person,
            self.education,
            self.group,
            self.average_grade()
        )
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exams_info = if self.exams.is_empty() {
            "No exams taken".to_string()
        } else {
            self.exams
                .iter()
                .map(Exam::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };
        write!(
            f,
            "{}, Education: {}, Group: {}, Exams: {}",
            self.person, self.education, self.group, exams_info
        )
    }
}
