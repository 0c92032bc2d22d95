//! Implementation of the `barrel resolve` command.
//!
//! Responsibility: translate CLI arguments into a `LibraryKindConfig`, ask
//! the export service for the map, and display it. No business logic lives
//! here.

use tracing::instrument;

use barrel_adapters::to_manifest_string;

use crate::{
    cli::{MapFormat, ResolveArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{effective_format, export_service, library_map, warn_if_unsupported};

/// Execute the `barrel resolve` command.
#[instrument(skip_all, fields(kind = %args.library.kind))]
pub fn execute(args: ResolveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let library = args.library.to_config();
    let service = export_service(&args.library, &config)?;
    let map = library_map(&service, &args.library, &library)?;

    match effective_format(args.format, &config) {
        MapFormat::Json => output.data(&to_manifest_string(&map)?)?,
        MapFormat::Table => {
            warn_if_unsupported(&library, &output)?;
            output.header(&format!("Exports for {} library:", library.kind()))?;

            let rows: Vec<(String, String)> = map
                .iter()
                .map(|(key, entry)| {
                    let target = if entry.types_target == entry.import_target {
                        entry.import_target.clone()
                    } else {
                        format!("{} (types: {})", entry.import_target, entry.types_target)
                    };
                    (key.to_string(), target)
                })
                .collect();
            output.table(&rows)?;

            let entity_paths = library.entity_subpaths();
            if !entity_paths.is_empty() {
                output.info(&format!("Entity imports: {}", entity_paths.join(", ")))?;
            }
        }
    }

    Ok(())
}
