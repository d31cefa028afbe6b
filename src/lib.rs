//! # mutagrade
//!
//! An autograder that scores student-submitted test suites by running
//! mutation testing against an instructor-provided system under test and
//! translating the resulting mutant-kill data into per-unit grades.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Grading configuration structures and validation
pub mod config;
/// For all things related to grading
pub mod grade;
/// For all parsers used
pub mod parsers;
/// Mutation report structures produced by the mutation-testing tool
pub mod report;
/// Shared location and error types
pub mod types;

pub use config::{BreakPoint, GradedUnit, GradingConfig, SubmissionFile, validate_config};
pub use grade::{GradeResult, grade_results};
pub use report::{MutantStatus, MutationReport};
pub use types::{GraderError, LocationRange};
