#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Status assigned to a mutant by the mutation-testing tool. Only `Killed`
/// counts as detected by the submitted test suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutantStatus {
    /// At least one test failed when run against the mutated code.
    Killed,
    /// Every test passed against the mutated code.
    Survived,
    /// No test executed the mutated code.
    NoCoverage,
    /// The test run against the mutated code timed out.
    Timeout,
    /// The mutated code failed to compile.
    CompileError,
    /// The test run against the mutated code crashed.
    RuntimeError,
    /// The mutant was excluded from the run.
    Ignored,
    /// The mutant has not been evaluated yet.
    Pending,
    /// Any status this tool does not recognise.
    #[serde(other)]
    Unknown,
}

impl MutantStatus {
    /// Whether the submitted tests detected this mutant.
    pub fn is_killed(self) -> bool {
        matches!(self, MutantStatus::Killed)
    }
}

/// A position within a source file, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Line number.
    pub line:   u32,
    /// Column number. Present in reports but not used for grading.
    #[serde(default)]
    pub column: u32,
}

/// The source span a mutant was injected at. Grading attributes a mutant by
/// the start line only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutantLocation {
    /// Where the mutation begins.
    pub start: Position,
    /// Where the mutation ends, when the tool reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end:   Option<Position>,
}

/// One mutant from the mutation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutantResult {
    /// Identifier assigned by the mutation-testing tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:           Option<String>,
    /// Name of the mutator that produced this mutant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutator_name: Option<String>,
    /// Replacement text the mutator injected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement:  Option<String>,
    /// Outcome of running the submitted tests against this mutant.
    pub status:       MutantStatus,
    /// Source span the mutant was injected at.
    pub location:     MutantLocation,
}

/// Per-file mutant list from the mutation report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileMutations {
    /// Every mutant the tool injected into this file.
    pub mutants: Vec<MutantResult>,
}

/// The mutation-testing tool's report, keyed by file path as the tool wrote
/// it. Paths may be workspace-relative and carry prefixes the grading
/// configuration does not know about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationReport {
    /// Schema version stamped by the mutation-testing tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Mapping from file path to that file's mutants.
    pub files:          BTreeMap<String, FileMutations>,
}

impl MutationReport {
    /// Reads a mutation report from a JSON file produced by the
    /// mutation-testing tool.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read mutation report at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Could not parse mutation report at {}", path.display()))
    }

    /// Total number of mutants across every file in the report.
    pub fn mutant_count(&self) -> usize {
        self.files.values().map(|f| f.mutants.len()).sum()
    }
}
