use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

use clap::ArgMatches;
use patterns::debug_pattern::PatternTracer;
use patterns::{GlobOptions, Limits, PatternError, compile_os, decompose, intersect_with, union_with};

use crate::report::DecompositionReport;
use crate::{EXIT_ERROR, EXIT_NO_MATCH, EXIT_SUCCESS};

/// Failure of a subcommand after argument parsing succeeded.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CommandError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Builds engine options from the global flags.
pub(crate) fn glob_options(matches: &ArgMatches) -> GlobOptions {
    let mut limits = Limits::default();
    if let Some(&tokens) = matches.get_one::<usize>("max-tokens") {
        limits = limits.with_max_tokens(tokens);
    }
    if let Some(&states) = matches.get_one::<usize>("max-states") {
        limits = limits.with_max_states(states);
    }
    GlobOptions::new()
        .with_case_sensitive(matches.get_flag("case-sensitive"))
        .with_limits(limits)
}

/// Runs one parsed subcommand and returns its exit status.
pub(crate) fn execute<Out: Write>(
    name: &str,
    matches: &ArgMatches,
    stdout: &mut Out,
) -> Result<i32, CommandError> {
    let options = glob_options(matches);
    match name {
        "match" => run_match(matches, &options, stdout),
        "decompose" => run_decompose(matches, stdout),
        "intersect" => run_intersect(matches, &options, stdout),
        "union" => run_union(matches, &options, stdout),
        _ => Ok(EXIT_ERROR),
    }
}

fn pattern_arg<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map_or("", String::as_str)
}

fn run_match<Out: Write>(
    matches: &ArgMatches,
    options: &GlobOptions,
    stdout: &mut Out,
) -> Result<i32, CommandError> {
    let pattern = matches
        .get_one::<OsString>("pattern")
        .map_or_else(OsString::new, Clone::clone);
    let matcher = compile_os(&pattern, options)?;

    let mut tracer = PatternTracer::new();
    tracer.record_compiled();

    for path in matches.get_many::<OsString>("paths").into_iter().flatten() {
        let path = Path::new(path);
        let matched = matcher.is_match_path(path);
        tracer.record_match(matched);
        if matched {
            writeln!(stdout, "{}", path.display())?;
        }
    }
    tracer.summary();

    Ok(if tracer.paths_matched() > 0 {
        EXIT_SUCCESS
    } else {
        EXIT_NO_MATCH
    })
}

fn run_decompose<Out: Write>(matches: &ArgMatches, stdout: &mut Out) -> Result<i32, CommandError> {
    let parts = decompose(pattern_arg(matches, "pattern"));

    if matches.get_flag("json") {
        serde_json::to_writer(&mut *stdout, &DecompositionReport::from(parts))?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "prefix: {}", parts.prefix())?;
        writeln!(stdout, "suffix: {}", parts.suffix())?;
        writeln!(stdout, "depth: {}", parts.suffix_depth())?;
    }
    Ok(EXIT_SUCCESS)
}

fn run_intersect<Out: Write>(
    matches: &ArgMatches,
    options: &GlobOptions,
    stdout: &mut Out,
) -> Result<i32, CommandError> {
    let overlap = intersect_with(
        pattern_arg(matches, "left"),
        pattern_arg(matches, "right"),
        options,
    )?;
    match overlap {
        Some(pattern) => {
            writeln!(stdout, "{pattern}")?;
            Ok(EXIT_SUCCESS)
        }
        None => Ok(EXIT_NO_MATCH),
    }
}

fn run_union<Out: Write>(
    matches: &ArgMatches,
    options: &GlobOptions,
    stdout: &mut Out,
) -> Result<i32, CommandError> {
    let merged = union_with(
        pattern_arg(matches, "left"),
        pattern_arg(matches, "right"),
        options,
    )?;
    writeln!(stdout, "{merged}")?;
    Ok(EXIT_SUCCESS)
}
