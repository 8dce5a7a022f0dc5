//! Student Record Model
//! Typed projection of one CSV row from the student-mat dataset.

use std::fmt;

/// Student sex as recorded in the source data ("M" / "F").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse the single-letter code used by the CSV.
    pub fn parse(code: &str) -> Option<Sex> {
        match code.trim() {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Human-readable label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    /// The one-letter code used in the CSV.
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the student CSV.
///
/// A field that fails numeric coercion is `None`; the record is still
/// retained so the other fields stay usable. Aggregators skip `None`
/// fields rather than fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentRecord {
    /// First-period grade (G1), 0-20.
    pub first_period: Option<u8>,
    /// Final grade (G3), 0-20.
    pub final_grade: Option<u8>,
    /// Weekly study-time level, ordinal 1-4.
    pub study_time: Option<u8>,
    pub sex: Option<Sex>,
}
