#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{GraderError, LocationRange};

/// A threshold rule: award at least `points_to_award` once at least
/// `minimum_mutants_detected` mutants assigned to the unit have been killed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakPoint {
    /// Detected-mutant count at which this breakpoint starts to apply.
    pub minimum_mutants_detected: u32,
    /// Points awarded once the detected count reaches the threshold.
    pub points_to_award:          f64,
}

/// One gradable concept: a named grouping of source locations whose mutants
/// are scored together under one breakpoint table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedUnit {
    /// Unique, human-readable identifier for the unit.
    pub name:         String,
    /// Breakpoint table, declared in ascending threshold order. The validator
    /// rejects tables that are not strictly ascending; it never reorders
    /// them.
    pub break_points: Vec<BreakPoint>,
    /// Location-range strings (`"<file>:<line>"` or
    /// `"<file>:<start>-<end>"`) identifying which source regions count
    /// toward this unit.
    pub locations:    Vec<String>,
}

impl GradedUnit {
    /// Parses every location string for this unit into a `LocationRange`.
    pub fn location_ranges(&self) -> Result<Vec<LocationRange>, GraderError> {
        self.locations.iter().map(|l| LocationRange::parse(l)).collect()
    }

    /// The highest `points_to_award` across this unit's breakpoints. Computed
    /// independently of declared order rather than trusting the last entry to
    /// be the maximum.
    pub fn max_points(&self) -> f64 {
        self.break_points
            .iter()
            .map(|bp| bp.points_to_award)
            .fold(0.0, f64::max)
    }

    /// The nominal target for full marks: the threshold of the last declared
    /// breakpoint, or 0 when the unit has no breakpoints.
    pub fn target_count(&self) -> u32 {
        self.break_points
            .last()
            .map(|bp| bp.minimum_mutants_detected)
            .unwrap_or(0)
    }
}

/// A rule for copying one submitted file into the instructor's test
/// workspace. Enforced by the submission pipeline before the mutation run;
/// the grading engine never reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionFile {
    /// Path of the file within the student's submission.
    pub source:      String,
    /// Path the file is copied to inside the test workspace.
    pub destination: String,
}

/// The full grading specification for one assignment. Loaded once and
/// immutable for the duration of a grading run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingConfig {
    /// Every graded unit, in the order results should be reported.
    #[serde(default)]
    pub graded_units:              Vec<GradedUnit>,
    /// Placement rules for submitted files. External to the grading engine.
    #[serde(default)]
    pub submission_files:          Vec<SubmissionFile>,
    /// How many `skip`-style test annotations the submission pipeline
    /// tolerates before failing the submission. External to the grading
    /// engine.
    #[serde(default)]
    pub skip_annotation_tolerance: u32,
    /// How many `only`-style test annotations the submission pipeline
    /// tolerates before failing the submission. External to the grading
    /// engine.
    #[serde(default)]
    pub only_annotation_tolerance: u32,
}

impl GradingConfig {
    /// Reads a grading configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).with_context(|| {
            format!("Could not read grading configuration at {}", path.display())
        })?;
        serde_json::from_str(&raw).with_context(|| {
            format!("Could not parse grading configuration at {}", path.display())
        })
    }
}

/// Checks structural invariants of a grading configuration before any
/// grading work begins: every unit's breakpoint table must be strictly
/// ascending in `minimum_mutants_detected`. Duplicate thresholds are a
/// violation. A malformed configuration must never produce a
/// partially-graded report, so this runs eagerly over the whole
/// configuration.
pub fn validate_config(config: &GradingConfig) -> Result<(), GraderError> {
    for unit in &config.graded_units {
        for pair in unit.break_points.windows(2) {
            if pair[1].minimum_mutants_detected <= pair[0].minimum_mutants_detected {
                return Err(GraderError::InvalidBreakpointOrdering {
                    unit: unit.name.clone(),
                });
            }
        }
    }

    Ok(())
}
