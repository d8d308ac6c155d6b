#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front end of the vfsglob workspace. It exposes
//! the pattern engine as four subcommands: `match`, `decompose`, `intersect`
//! and `union`.
//!
//! # Design
//!
//! [`run`] accepts the argument list and the output handles explicitly so the
//! binary and the tests drive the same code. Argument parsing uses clap's
//! builder API. Diagnostics are routed through `tracing` and initialised from
//! the number of `-v` flags via the `logging` crate.
//!
//! # Exit status
//!
//! - [`EXIT_SUCCESS`]: a path matched, the patterns overlap, or the command
//!   simply completed.
//! - [`EXIT_NO_MATCH`]: no path matched, or the patterns are disjoint.
//! - [`EXIT_ERROR`]: invalid usage or an engine error such as an exceeded
//!   complexity ceiling.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(
//!     ["vfsglob", "decompose", "dir/dir/*/*.txt"],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(status, cli::EXIT_SUCCESS);
//! assert_eq!(
//!     String::from_utf8(stdout).unwrap(),
//!     "prefix: dir/dir/\nsuffix: */*.txt\ndepth: 2\n"
//! );
//! ```

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use logging::VerbosityConfig;

mod command;
mod execute;
mod report;

/// Name used in usage text and diagnostics.
pub const PROGRAM_NAME: &str = "vfsglob";

/// The command succeeded and found what it looked for.
pub const EXIT_SUCCESS: i32 = 0;
/// The command ran but nothing matched or overlapped.
pub const EXIT_NO_MATCH: i32 = 1;
/// Usage error or engine failure.
pub const EXIT_ERROR: i32 = 2;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the command line and returns the process exit status.
///
/// Help and version output go to `stdout` with status zero, or status two
/// when `stdout` cannot be written; every other parsing failure is reported
/// on `stderr`.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let matches = match command::clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    match write!(stdout, "{error}").and_then(|()| stdout.flush()) {
                        Ok(()) => EXIT_SUCCESS,
                        Err(_) => EXIT_ERROR,
                    }
                }
                _ => {
                    let _ = write!(stderr, "{error}");
                    EXIT_ERROR
                }
            };
        }
    };

    let Some((name, sub_matches)) = matches.subcommand() else {
        return EXIT_ERROR;
    };

    let verbose = sub_matches.get_count("verbose");
    logging::init_tracing(VerbosityConfig::from_verbose_level(verbose));

    match execute::execute(name, sub_matches, stdout) {
        Ok(status) => status,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            EXIT_ERROR
        }
    }
}

/// Converts a status returned by [`run`] into an [`ExitCode`](std::process::ExitCode).
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}
