//! Implementation of the `barrel lookup` command.

use serde_json::json;
use tracing::instrument;

use crate::{
    cli::{LookupArgs, MapFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

use super::{effective_format, export_service, library_map, warn_if_unsupported};

/// Execute the `barrel lookup` command.
///
/// Exits with "not found" when no export key serves the path.
#[instrument(skip_all, fields(kind = %args.library.kind, path = %args.path))]
pub fn execute(args: LookupArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let library = args.library.to_config();
    let service = export_service(&args.library, &config)?;
    let map = library_map(&service, &args.library, &library)?;

    let format = effective_format(args.format, &config);
    if format == MapFormat::Table {
        warn_if_unsupported(&library, &output)?;
    }

    let Some(hit) = service.lookup(&map, &args.path) else {
        return Err(CliError::NotPublished {
            path: args.path,
            kind: library.kind().to_string(),
            available: map.key_strings(),
        });
    };

    let Some(target) = hit.target(&map) else {
        return Err(CliError::NotPublished {
            path: args.path,
            kind: library.kind().to_string(),
            available: map.key_strings(),
        });
    };

    let shadowed: Vec<String> = hit.shadowed.iter().map(ToString::to_string).collect();

    match format {
        MapFormat::Json => {
            let payload = json!({
                "path": args.path,
                "key": hit.key.to_string(),
                "suffix": hit.suffix,
                "import": target.import_target,
                "types": target.types_target,
                "shadowed": shadowed,
            });
            output.data(&payload.to_string())?;
        }
        MapFormat::Table => {
            output.table(&[
                ("key".into(), hit.key.to_string()),
                ("import".into(), target.import_target.clone()),
                ("types".into(), target.types_target.clone()),
            ])?;
            if hit.is_ambiguous() {
                output.warning(&format!(
                    "Also matched by {}; the first key in sorted order wins",
                    shadowed.join(", ")
                ))?;
            }
        }
    }

    Ok(())
}
