//! Flags shared by every `barrel` subcommand.
//!
//! They control diagnostics and presentation only; none of them changes the
//! computed export map. `--quiet` silences tables, headers and notes but not
//! errors, and never the JSON written by `--format json`, so
//! `barrel -q resolve feature --format json > exports.json` stays usable.
//! Log lines always go to stderr.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log verbosity on stderr, `-v` to `-vvv`; `RUST_LOG` takes precedence.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more on stderr (-v, -vv, -vvv)",
        long_help = "Log more on stderr:
    (none)  - Warnings (unsupported kinds, shadowed wildcards) and errors
    -v      - Manifests loaded, maps merged, validation summaries
    -vv     - Every lookup and resolved entry count
    -vvv    - Everything"
    )]
    pub verbose: u8,

    /// Human-readable output off; errors and `--format json` data still print.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and machine-readable data"
    )]
    pub quiet: bool,

    /// Plain symbols and no ANSI styling. Also set by `NO_COLOR`, by
    /// `output.no_color` in the config, or when stdout is not a terminal.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Print without ANSI colors"
    )]
    pub no_color: bool,

    /// Config file to use instead of `./.barrel.toml` or the user config.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read layout and output settings from FILE"
    )]
    pub config: Option<PathBuf>,
}
