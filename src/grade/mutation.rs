#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tracing::debug;

use super::results::{Grade, GradeResult};
use crate::{
    config::{BreakPoint, GradedUnit, GradingConfig, validate_config},
    report::{MutantResult, MutationReport},
    types::{GraderError, LocationRange},
};

/// Whether a report file path belongs to a unit claiming `ranges`. Substring
/// containment against each range's file name; report paths may carry
/// workspace-relative prefixes the configuration does not know about.
fn file_in_ranges(ranges: &[LocationRange], path: &str) -> bool {
    ranges.iter().any(|range| range.matches_path(path))
}

/// Whether a mutant from an already-qualifying file belongs to a unit
/// claiming `ranges`. Only the mutant's start line is checked; multi-line
/// mutants are attributed by their first line.
fn mutant_in_ranges(ranges: &[LocationRange], mutant: &MutantResult) -> bool {
    ranges
        .iter()
        .any(|range| range.contains_line(mutant.location.start.line))
}

/// Resolves a detected-mutant count against a breakpoint table, scanning
/// from the highest threshold downward over a read-only view and awarding
/// the first breakpoint whose threshold the count meets. Returns 0 when the
/// count is below the lowest threshold.
fn resolve_points(break_points: &[BreakPoint], detected: usize) -> f64 {
    break_points
        .iter()
        .rev()
        .find(|bp| bp.minimum_mutants_detected as usize <= detected)
        .map(|bp| bp.points_to_award)
        .unwrap_or(0.0)
}

/// Grades one unit against the full mutation report.
///
/// Counts the mutants assigned to the unit whose status is exactly `Killed`
/// (a surviving, uncovered, or timed-out mutant was not detected by the
/// submitted tests) and resolves the count through the unit's breakpoint
/// table. An absence of qualifying mutants is not an error; it is the normal
/// "zero detected, score 0" case.
pub fn grade_unit(unit: &GradedUnit, report: &MutationReport) -> Result<GradeResult, GraderError> {
    let ranges = unit.location_ranges()?;

    let detected = report
        .files
        .iter()
        .filter(|(path, _)| file_in_ranges(&ranges, path))
        .flat_map(|(_, file)| file.mutants.iter())
        .filter(|mutant| mutant_in_ranges(&ranges, mutant))
        .filter(|mutant| mutant.status.is_killed())
        .count();

    debug!(unit = %unit.name, detected, target = unit.target_count(), "graded unit");

    Ok(GradeResult {
        requirement: unit.name.clone(),
        grade:       Grade::new(resolve_points(&unit.break_points, detected), unit.max_points()),
        reason:      format!("Faults detected: {detected}/{}", unit.target_count()),
    })
}

/// Grades every unit in the configuration against the mutation report and
/// returns one result per unit, in the configuration's declared order.
///
/// The configuration is validated eagerly before any unit is graded, so a
/// malformed configuration can never produce a partially-graded report.
/// Units are graded independently; a mutant whose location matches several
/// units counts toward each of them.
pub fn grade_results(
    config: &GradingConfig,
    report: &MutationReport,
) -> Result<Vec<GradeResult>, GraderError> {
    validate_config(config)?;

    config
        .graded_units
        .iter()
        .map(|unit| grade_unit(unit, report))
        .collect()
}
