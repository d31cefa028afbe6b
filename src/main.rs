#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # mutagrade
//!
//! Scores student-submitted test suites from a mutation-testing report and a
//! declarative grading configuration, and emits Gradescope-style feedback.
//!
//! Placing submission files, installing dependencies, and running the
//! mutation-testing tool itself all happen before this binary is invoked;
//! `mutagrade` consumes the artifacts those steps leave behind.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use itertools::Itertools;
use mutagrade::{
    config::{GradingConfig, validate_config},
    grade::{
        DEFAULT_PASS_THRESHOLD, RESULTS_PATH, build_submission, grade_results, show_results,
        write_submission,
    },
    report::MutationReport,
};
use tracing::{Level, info, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Options for the `grade` subcommand.
#[derive(Debug, Clone)]
struct GradeOpts {
    /// Path to the grading configuration JSON.
    config:         PathBuf,
    /// Path to the mutation report JSON.
    report:         PathBuf,
    /// Whether to write the Gradescope results JSON.
    results_json:   bool,
    /// Write the results JSON to the current directory instead of the
    /// autograder results path.
    debug:          bool,
    /// Score fraction below which a test case is reported as failed.
    pass_threshold: f64,
    /// Skip the grading overview table.
    no_table:       bool,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Validate a grading configuration without grading anything
    Validate(PathBuf),
    /// Grade a mutation report against a configuration
    Grade(GradeOpts),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the grading configuration path
    fn c() -> impl Parser<PathBuf> {
        positional("CONFIG").help("Path to grading configuration JSON")
    }

    let validate = construct!(Cmd::Validate(c()))
        .to_options()
        .command("validate")
        .help("Check a grading configuration for authoring mistakes");

    let results_json = long("results-json")
        .help("Write Gradescope results JSON")
        .switch();
    let debug = long("debug")
        .help("Write the results JSON to the current directory instead of the autograder path")
        .switch();
    let pass_threshold = long("pass-threshold")
        .help("Score fraction below which a test case is reported as failed")
        .argument::<f64>("FRACTION")
        .fallback(DEFAULT_PASS_THRESHOLD);
    let no_table = long("no-table")
        .help("Skip the grading overview table")
        .switch();
    let config = c();
    let report = positional("REPORT").help("Path to mutation report JSON");

    let grade_opts = construct!(GradeOpts {
        results_json,
        debug,
        pass_threshold,
        no_table,
        config,
        report,
    });
    let grade = construct!(Cmd::Grade(grade_opts))
        .to_options()
        .command("grade")
        .help("Grade a mutation report and emit feedback");

    let cmd = construct!([validate, grade]);

    cmd.to_options()
        .descr("Mutation-testing autograder")
        .run()
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Validate(path) => {
            let config = GradingConfig::from_path(&path)?;
            validate_config(&config)
                .with_context(|| format!("Invalid grading configuration at {}", path.display()))?;
            println!(
                "{} {} graded unit(s): {}",
                "Configuration OK.".green(),
                config.graded_units.len(),
                config.graded_units.iter().map(|u| u.name.as_str()).join(", ")
            );
        }
        Cmd::Grade(opts) => {
            let config = GradingConfig::from_path(&opts.config)?;
            let report = MutationReport::from_path(&opts.report)?;
            info!(
                units = config.graded_units.len(),
                mutants = report.mutant_count(),
                "grading mutation report"
            );

            let results = grade_results(&config, &report)
                .context("Grading aborted; no units were scored")?;

            if !opts.no_table {
                show_results(&results);
            }

            if opts.results_json {
                let path = if opts.debug {
                    PathBuf::from("./results.json")
                } else {
                    PathBuf::from(RESULTS_PATH)
                };
                let submission = build_submission(&results, opts.pass_threshold);
                write_submission(&submission, &path)?;
                info!(path = %path.display(), "wrote Gradescope results");
            }
        }
    };

    Ok(())
}
