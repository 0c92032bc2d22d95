//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use barrel_core::domain::{LibraryKindConfig, Platform};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "barrel",
    bin_name = "barrel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Export maps for layered TypeScript libraries",
    long_about = "Barrel computes the package.json exports map of a generated \
                  library from its kind (contract, data-access, feature, infra, \
                  provider) and answers which source file serves an import path.",
    after_help = "EXAMPLES:\n\
        \x20 barrel resolve contract --entities\n\
        \x20 barrel resolve data-access --format json\n\
        \x20 barrel lookup data-access ./queries/find-by-id\n\
        \x20 barrel validate libs/\n\
        \x20 barrel completions bash > /usr/share/bash-completion/completions/barrel",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the export map of a library kind.
    #[command(
        visible_alias = "r",
        about = "Resolve the export map for a library kind",
        after_help = "EXAMPLES:\n\
            \x20 barrel resolve contract --entities --entity UserProfile\n\
            \x20 barrel resolve feature --rpc\n\
            \x20 barrel resolve provider --base package.json --base-wins"
    )]
    Resolve(ResolveArgs),

    /// Find the export serving an import path.
    #[command(
        visible_alias = "l",
        about = "Find which export serves an import path",
        after_help = "EXAMPLES:\n\
            \x20 barrel lookup data-access ./queries/find-by-id\n\
            \x20 barrel lookup infra ./providers/redis --format json"
    )]
    Lookup(LookupArgs),

    /// Check manifests for malformed exports.
    #[command(
        about = "Validate the exports of package.json files",
        after_help = "EXAMPLES:\n\
            \x20 barrel validate package.json\n\
            \x20 barrel validate libs/   # every package.json below libs/"
    )]
    Validate(ValidateArgs),

    /// List the supported library kinds.
    #[command(visible_alias = "ls", about = "List supported library kinds")]
    Kinds(KindsArgs),

    /// Initialise a Barrel configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 barrel init           # global config\n\
            \x20 barrel init --local   # .barrel.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 barrel completions bash > ~/.local/share/bash-completion/completions/barrel\n\
            \x20 barrel completions zsh  > ~/.zfunc/_barrel\n\
            \x20 barrel completions fish > ~/.config/fish/completions/barrel.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Barrel configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 barrel config get layout.source_root\n\
            \x20 barrel config list\n\
            \x20 barrel config path"
    )]
    Config(ConfigCommands),
}

// ── shared library arguments ──────────────────────────────────────────────────

/// Describes the library whose exports are computed.
#[derive(Debug, Args)]
pub struct LibraryArgs {
    /// Library kind. Unknown kinds yield a barrel-only map.
    #[arg(value_name = "KIND", help = "Library kind (contract, data-access, feature, infra, provider)")]
    pub kind: String,

    /// Publish entity sub-paths (contract libraries).
    #[arg(long = "entities", help = "Publish ./entities sub-paths")]
    pub entities: bool,

    /// Entity names; implies `--entities`.
    #[arg(
        long = "entity",
        value_name = "NAME",
        help = "Entity name (repeatable, implies --entities)"
    )]
    pub entity: Vec<String>,

    /// Publish RPC handler sub-paths (feature libraries).
    #[arg(long = "rpc", help = "Publish ./rpc/handlers sub-paths")]
    pub rpc: bool,

    /// Target platforms.
    #[arg(
        long = "platform",
        value_name = "PLATFORM",
        help = "Target platform: client, server or edge (repeatable)"
    )]
    pub platform: Vec<Platform>,

    /// Manifest whose exports are merged with the generated map.
    #[arg(long = "base", value_name = "FILE", help = "Merge with the exports of FILE")]
    pub base: Option<PathBuf>,

    /// Keep base entries when keys collide.
    #[arg(long = "base-wins", requires = "base", help = "Base entries win on conflicts")]
    pub base_wins: bool,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

impl LibraryArgs {
    /// Build the domain configuration described by these flags.
    pub fn to_config(&self) -> LibraryKindConfig {
        let config = LibraryKindConfig::from_kind_str(&self.kind)
            .with_entities(self.entities)
            .with_rpc(self.rpc);

        let config = self
            .entity
            .iter()
            .fold(config, |config, name| config.with_entity(name.as_str()));

        self.platform
            .iter()
            .fold(config, |config, platform| config.with_platform(*platform))
    }
}

/// Per-invocation overrides of the configured source layout.
#[derive(Debug, Default, Args)]
pub struct LayoutArgs {
    #[arg(long = "source-root", value_name = "DIR", help = "Source root, e.g. ./src")]
    pub source_root: Option<String>,

    #[arg(long = "lib-dir", value_name = "DIR", help = "Directory below the source root")]
    pub lib_dir: Option<String>,

    #[arg(long = "extension", value_name = "EXT", help = "Source file extension, e.g. ts")]
    pub extension: Option<String>,
}

/// Rendering of an export map or lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// JSON, suitable for a package.json `exports` field.
    Json,
}

impl std::fmt::Display for MapFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

// ── resolve ───────────────────────────────────────────────────────────────────

/// Arguments for `barrel resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub library: LibraryArgs,

    /// Output format; defaults to `output.format` from the config.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<MapFormat>,
}

// ── lookup ────────────────────────────────────────────────────────────────────

/// Arguments for `barrel lookup`.
#[derive(Debug, Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub library: LibraryArgs,

    /// Import sub-path, e.g. `./queries/find-by-id`.
    #[arg(value_name = "PATH", help = "Import sub-path to look up")]
    pub path: String,

    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<MapFormat>,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `barrel validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// A manifest file, or a directory searched for package.json files.
    #[arg(value_name = "PATH", help = "Manifest file or directory")]
    pub path: PathBuf,

    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<MapFormat>,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `barrel kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<MapFormat>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `barrel init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.barrel.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `barrel completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `barrel config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `layout.lib_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
