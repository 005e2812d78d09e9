//! `crateway status` — report each crate's freshness without building.

use std::path::Path;

use serde::Serialize;

use crateway_config::ProjectConfig;
use crateway_freshness::{check_freshness, FreshnessVerdict};

use crate::pipeline::{crate_paths, resolve_project_root};
use crate::{GlobalArgs, ReportFormat, StatusArgs};

/// One crate's freshness, as reported by `crateway status`.
#[derive(Debug, Serialize)]
pub struct CrateStatus {
    /// The configured crate name.
    pub name: String,
    /// What the next build would do for this crate.
    pub verdict: FreshnessVerdict,
}

/// Runs the `crateway status` command.
pub fn run(args: &StatusArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = crateway_config::load_config(&project_dir)?;

    let statuses = collect_statuses(&project_dir, &config);

    match args.format {
        ReportFormat::Text => {
            for status in &statuses {
                println!("{:>20}  {}", status.name, status.verdict);
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&statuses)?);
        }
    }
    Ok(0)
}

/// Checks every configured crate and collects the verdicts.
fn collect_statuses(project_dir: &Path, config: &ProjectConfig) -> Vec<CrateStatus> {
    config
        .crates
        .iter()
        .map(|krate| {
            let paths = crate_paths(project_dir, config, krate);
            let verdict = check_freshness(
                &paths.source_dir,
                &paths.manifest_path,
                &paths.reference_artifact,
            );
            CrateStatus {
                name: krate.name.clone(),
                verdict,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crateway_config::load_config_from_str;
    use crateway_freshness::RebuildReason;
    use std::fs;

    #[test]
    fn unbuilt_crate_reports_missing_reference() {
        let dir = tempfile::tempdir().unwrap();
        let crate_dir = dir.path().join("demo");
        fs::create_dir_all(crate_dir.join("src")).unwrap();
        fs::write(crate_dir.join("Cargo.toml"), "[package]\nname = \"demo\"\n").unwrap();

        let config = load_config_from_str("[[crates]]\nname = \"demo\"\n").unwrap();
        let statuses = collect_statuses(dir.path(), &config);

        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].name, "demo");
        assert_eq!(
            statuses[0].verdict,
            FreshnessVerdict::Rebuild(RebuildReason::MissingReference)
        );
    }

    #[test]
    fn statuses_serialize_to_json() {
        let statuses = vec![CrateStatus {
            name: "demo".to_string(),
            verdict: FreshnessVerdict::Reuse,
        }];
        let json = serde_json::to_string(&statuses).unwrap();
        assert_eq!(json, r#"[{"name":"demo","verdict":"reuse"}]"#);
    }
}
