//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod kinds;
pub mod lookup;
pub mod resolve;
pub mod validate;

use tracing::debug;

use barrel_adapters::JsonManifestStore;
use barrel_core::{
    application::{ExportService, MergePrecedence},
    domain::{ExportMap, KindSelection, LibraryKindConfig},
};

use crate::{
    cli::{LibraryArgs, MapFormat},
    config::AppConfig,
    error::{CliResult, kind_suggestions},
    output::OutputManager,
};

/// Build a service over the on-disk manifest store with the effective
/// layout (config file and environment, then flags).
fn export_service(args: &LibraryArgs, config: &AppConfig) -> CliResult<ExportService> {
    let layout = config.layout_with(&args.layout);
    debug!(?layout, "Effective layout");
    Ok(ExportService::with_layout(
        Box::new(JsonManifestStore::new()),
        layout,
    )?)
}

/// The export map a set of library flags describes, merged with `--base`
/// when given.
fn library_map(
    service: &ExportService,
    args: &LibraryArgs,
    library: &LibraryKindConfig,
) -> CliResult<ExportMap> {
    match &args.base {
        Some(base) => {
            let precedence = if args.base_wins {
                MergePrecedence::BaseWins
            } else {
                MergePrecedence::GeneratedWins
            };
            Ok(service.generate_with_base(library, base, precedence)?)
        }
        None => Ok(service.generate(library)),
    }
}

/// Tell a table reader that an unknown kind only got the barrel.
fn warn_if_unsupported(library: &LibraryKindConfig, output: &OutputManager) -> CliResult<()> {
    if let KindSelection::Unsupported(raw) = library.kind() {
        output.warning(&format!(
            "Unknown library kind '{raw}'; only the root barrel is exported. Supported kinds:"
        ))?;
        for line in kind_suggestions() {
            output.print(&line)?;
        }
    }
    Ok(())
}

fn effective_format(requested: Option<MapFormat>, config: &AppConfig) -> MapFormat {
    requested.unwrap_or(config.output.format)
}
