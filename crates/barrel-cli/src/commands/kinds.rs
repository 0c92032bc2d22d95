//! Implementation of the `barrel kinds` command.

use serde_json::json;

use barrel_core::domain::{LibraryKind, registry::exports_for};

use crate::{
    cli::{KindsArgs, MapFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::effective_format;

pub fn execute(args: KindsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match effective_format(args.format, &config) {
        MapFormat::Json => {
            let kinds: Vec<_> = LibraryKind::ALL
                .iter()
                .map(|kind| {
                    let keys: Vec<&str> = exports_for(*kind).iter().map(|def| def.key).collect();
                    json!({
                        "kind": kind.as_str(),
                        "description": kind.description(),
                        "keys": keys,
                    })
                })
                .collect();
            output.data(&serde_json::Value::from(kinds).to_string())?;
        }
        MapFormat::Table => {
            output.header("Supported library kinds:")?;
            let rows: Vec<(String, String)> = LibraryKind::ALL
                .iter()
                .map(|kind| (kind.as_str().to_string(), kind.description().to_string()))
                .collect();
            output.table(&rows)?;
        }
    }
    Ok(())
}
