//! Implementation of the `barrel validate` command.

use std::path::PathBuf;

use serde_json::json;
use tracing::{info, instrument};

use barrel_adapters::{JsonManifestStore, discover_manifests};
use barrel_core::{
    application::ExportService,
    domain::{DomainValidator, ExportMap},
};

use crate::{
    cli::{MapFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

use super::effective_format;

/// Problems found in one manifest.
struct Report {
    path: PathBuf,
    problems: Vec<String>,
}

/// Execute the `barrel validate` command.
///
/// Every problem is reported before the command fails, so one malformed
/// manifest does not hide the others.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let manifests = discover_manifests(&args.path);
    if manifests.is_empty() {
        return Err(CliError::NoManifests { path: args.path });
    }

    let service = ExportService::new(Box::new(JsonManifestStore::new()));
    let reports: Vec<Report> = manifests
        .into_iter()
        .map(|path| {
            let problems = match service.load(&path) {
                Ok(map) => problems_in(&service, &map),
                Err(e) => vec![e.to_string()],
            };
            Report { path, problems }
        })
        .collect();

    let issues: usize = reports.iter().map(|r| r.problems.len()).sum();
    info!(manifests = reports.len(), issues, "Validation finished");

    match effective_format(args.format, &config) {
        MapFormat::Json => {
            let payload: Vec<_> = reports
                .iter()
                .map(|r| json!({ "path": r.path.display().to_string(), "issues": r.problems }))
                .collect();
            output.data(&serde_json::Value::from(payload).to_string())?;
        }
        MapFormat::Table => {
            for report in &reports {
                if report.problems.is_empty() {
                    output.success(&report.path.display().to_string())?;
                } else {
                    output.error(&report.path.display().to_string())?;
                    for problem in &report.problems {
                        output.print(&format!("    {problem}"))?;
                    }
                }
            }
        }
    }

    if issues > 0 {
        return Err(CliError::ValidationFailed {
            issues,
            manifests: reports.len(),
        });
    }
    Ok(())
}

fn problems_in(service: &ExportService, map: &ExportMap) -> Vec<String> {
    let mut problems: Vec<String> = service
        .validate(map)
        .iter()
        .map(ToString::to_string)
        .collect();

    if let Err(e) = DomainValidator::validate_wildcards(map) {
        problems.push(e.to_string());
    }
    problems
}
