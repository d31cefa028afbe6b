#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Clone, Copy, Default, Builder, Serialize, Deserialize, Debug, PartialEq)]
/// A struct representing a grade
pub struct Grade {
    /// The actual grade received
    pub grade:  f64,
    /// The maximum grade possible
    pub out_of: f64,
}

impl Grade {
    /// Creates a new grade -
    /// * `grade` - The actual grade received
    /// * `out_of` - The maximum grade possible
    pub fn new(grade: f64, out_of: f64) -> Self {
        Self { grade, out_of }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/{:.2}", self.grade, self.out_of)
    }
}

#[derive(Tabled, Clone, Default, Builder, Serialize, Deserialize, Debug, PartialEq)]
#[builder(on(String, into))]
/// A struct to store grading results and display them
pub struct GradeResult {
    #[tabled(rename = "Requirement")]
    /// * `requirement`: the graded unit this result belongs to
    pub(crate) requirement: String,
    #[tabled(rename = "Grade")]
    /// * `grade`: grade received for above Requirement
    #[builder(default)]
    pub(crate) grade:       Grade,
    #[tabled(rename = "Reason")]
    /// * `reason`: human-readable summary of how the grade was reached
    pub(crate) reason:      String,
}

impl GradeResult {
    /// Returns the graded unit's name.
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// Returns the underlying grade struct.
    pub fn grade_struct(&self) -> &Grade {
        &self.grade
    }

    /// Returns the numeric grade value.
    pub fn grade_value(&self) -> f64 {
        self.grade.grade
    }

    /// Returns the numeric out-of value.
    pub fn out_of_value(&self) -> f64 {
        self.grade.out_of
    }

    /// Returns the human-readable summary for this result.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
