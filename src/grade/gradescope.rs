#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use bon::Builder;
use serde::{Deserialize, Serialize};
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use super::results::GradeResult;

/// Score fraction below which a test case is reported to Gradescope as
/// failed.
pub const DEFAULT_PASS_THRESHOLD: f64 = 0.7;

/// Where Gradescope expects the results file inside the autograder
/// container.
pub const RESULTS_PATH: &str = "/autograder/results/results.json";

/// Represents output format settings for Gradescope submissions.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum GradescopeOutputFormat {
    /// Plain text format.
    Text,
    /// HTML format.
    Html,
    /// This is very similar to the "html" format option but will also convert
    /// \n into <br /> and \n\n+ into a page break.
    SimpleFormat,
    /// Markdown format.
    Md,
    /// ANSI format for including ANSI escape codes (often used in terminal
    /// outputs).
    Ansi,
}

/// Represents visibility settings for Gradescope submissions and test cases.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum GradescopeVisibility {
    /// Hidden from students.
    Hidden,
    /// Visible after the due date of the assignment.
    AfterDueDate,
    /// Visible after the grades are published.
    AfterPublished,
    /// Always visible to students.
    Visible,
}

/// Represents the status of a test case in Gradescope submissions.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradescopeStatus {
    /// Indicates the test case passed successfully.
    Passed,
    /// Indicates the test case failed.
    Failed,
}

/// Represents the overall submission data.
#[derive(Serialize, Deserialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct GradescopeSubmission {
    /// Optional overall score. Overrides total of test cases if specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Optional execution time in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<u32>,

    /// Optional text relevant to the entire submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Optional output format settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<GradescopeOutputFormat>,

    /// Optional default output format for test case outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_output_format: Option<GradescopeOutputFormat>,

    /// Optional default output format for test case names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_name_format: Option<GradescopeOutputFormat>,

    /// Optional visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<GradescopeVisibility>,

    /// Optional stdout visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout_visibility: Option<GradescopeVisibility>,

    /// Optional extra data to be stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<serde_json::Value>,

    /// Optional test cases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<GradescopeTestCase>>,
}

/// Represents an individual test case.
#[derive(Serialize, Deserialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct GradescopeTestCase {
    /// Optional score for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Optional maximum score for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,

    /// Optional status of the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GradescopeStatus>,

    /// Optional name of the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional formatting for the test case name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_format: Option<GradescopeOutputFormat>,

    /// Optional number for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Optional detailed output for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Optional formatting for the test case output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<GradescopeOutputFormat>,

    /// Optional tags associated with the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Optional visibility setting for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<GradescopeVisibility>,

    /// Optional extra data to be stored with the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<serde_json::Value>,
}

/// Prints the grading overview table to stderr.
///
/// * `results`: one `GradeResult` per graded unit, in report order.
pub fn show_results(results: &[GradeResult]) {
    let (grade, out_of) = results
        .iter()
        .fold((0f64, 0f64), |acc, r| (acc.0 + r.grade_value(), acc.1 + r.out_of_value()));

    eprintln!(
        "{}",
        Table::new(results)
            .with(Panel::header("Grading Overview"))
            .with(Panel::footer(format!("Total: {grade:.2}/{out_of:.2}")))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(24).keep_words(true)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
    );
}

/// Wraps per-unit grade results in the run-level metadata Gradescope
/// expects. Each unit becomes one test case carrying its score, maximum
/// score, name, and summary output; a case is marked passed when its score
/// exceeds `pass_threshold` of its maximum.
pub fn build_submission(results: &[GradeResult], pass_threshold: f64) -> GradescopeSubmission {
    let test_cases: Vec<GradescopeTestCase> = results
        .iter()
        .map(|result| {
            GradescopeTestCase::builder()
                .name(result.requirement())
                .name_format(GradescopeOutputFormat::Text)
                .max_score(result.out_of_value())
                .score(result.grade_value())
                .status(if result.grade_value() > pass_threshold * result.out_of_value() {
                    GradescopeStatus::Passed
                } else {
                    GradescopeStatus::Failed
                })
                .output(result.reason())
                .output_format(GradescopeOutputFormat::Md)
                .build()
        })
        .collect();

    GradescopeSubmission::builder()
        .tests(test_cases)
        .test_output_format(GradescopeOutputFormat::Md)
        .test_name_format(GradescopeOutputFormat::Text)
        .stdout_visibility(GradescopeVisibility::Visible)
        .visibility(GradescopeVisibility::Visible)
        .build()
}

/// Writes a Gradescope submission as pretty-printed JSON.
pub fn write_submission(submission: &GradescopeSubmission, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    let mut file = fs::File::create(path)
        .with_context(|| format!("Could not create {}", path.display()))?;
    file.write_all(serde_json::to_string_pretty(submission)?.as_bytes())
        .with_context(|| format!("Could not write {}", path.display()))
}
