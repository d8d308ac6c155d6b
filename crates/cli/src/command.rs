use clap::builder::OsStringValueParser;
use clap::{Arg, ArgAction, Command, value_parser};

use crate::PROGRAM_NAME;

/// Builds the clap definition for every subcommand and global flag.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Match, decompose and combine glob patterns.")
        .subcommand_required(true)
        .arg(
            Arg::new("case-sensitive")
                .long("case-sensitive")
                .help("Compare literal characters case-sensitively.")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("max-tokens")
                .long("max-tokens")
                .value_name("N")
                .help("Reject patterns that lex into more than N tokens.")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("max-states")
                .long("max-states")
                .value_name("N")
                .help("Abort set operations after visiting N search states.")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output on stderr; may be supplied multiple times.")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("match")
                .about("Print every PATH matched by PATTERN.")
                .arg(
                    Arg::new("pattern")
                        .value_name("PATTERN")
                        .required(true)
                        .value_parser(OsStringValueParser::new()),
                )
                .arg(
                    Arg::new("paths")
                        .value_name("PATH")
                        .required(true)
                        .num_args(1..)
                        .value_parser(OsStringValueParser::new()),
                ),
        )
        .subcommand(
            Command::new("decompose")
                .about("Split PATTERN into a literal prefix and a wildcard suffix.")
                .arg(Arg::new("pattern").value_name("PATTERN").required(true))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the decomposition as a JSON object.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("intersect")
                .about("Print a pattern for the paths matched by both LEFT and RIGHT.")
                .arg(Arg::new("left").value_name("LEFT").required(true))
                .arg(Arg::new("right").value_name("RIGHT").required(true)),
        )
        .subcommand(
            Command::new("union")
                .about("Print a pattern covering every path matched by LEFT or RIGHT.")
                .arg(Arg::new("left").value_name("LEFT").required(true))
                .arg(Arg::new("right").value_name("RIGHT").required(true)),
        )
}
