#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Gradescope integration utilities.
pub mod gradescope;
/// Mutant classification, unit grading, and report aggregation.
pub mod mutation;
/// Shared grade result types.
pub mod results;

pub use gradescope::{
    DEFAULT_PASS_THRESHOLD, GradescopeOutputFormat, GradescopeStatus, GradescopeSubmission,
    GradescopeTestCase, GradescopeVisibility, RESULTS_PATH, build_submission, show_results,
    write_submission,
};
pub use mutation::{grade_results, grade_unit};
pub use results::{Grade, GradeResult};

pub use crate::types::{GraderError, LocationRange};
