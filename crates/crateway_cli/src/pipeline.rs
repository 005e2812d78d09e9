//! Shared helpers for CLI commands: project root resolution, per-crate path
//! computation, crate selection, and toolchain lookup.

use std::path::{Path, PathBuf};

use crateway_config::{ConfigError, CrateConfig, ProjectConfig, CONFIG_FILE};
use crateway_pack::{dest_for_public_path, PACKAGE_MANIFEST_FILE};

use crate::GlobalArgs;

/// Walks up from `start` looking for the nearest directory containing
/// `crateway.toml`.
///
/// Returns the directory containing the file, or an error if none is found.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {} in {} or any parent directory",
                CONFIG_FILE,
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir →
/// itself). Otherwise walks up from the current directory looking for
/// `crateway.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Filesystem locations the pipeline touches for one configured crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CratePaths {
    /// The crate's own directory.
    pub crate_dir: PathBuf,
    /// The crate's source tree, walked by the freshness check.
    pub source_dir: PathBuf,
    /// The crate's build manifest, checked before the tree walk.
    pub manifest_path: PathBuf,
    /// The compiler output directory inside the crate.
    pub output_dir: PathBuf,
    /// The freshness baseline: the descriptor the last build wrote.
    pub reference_artifact: PathBuf,
    /// Where the bundler-served copy of the package lands.
    pub dest_dir: PathBuf,
}

/// Computes every path the pipeline needs for `krate`.
pub fn crate_paths(project_dir: &Path, config: &ProjectConfig, krate: &CrateConfig) -> CratePaths {
    let crate_dir = project_dir.join(&config.project.root).join(&krate.name);
    let output_dir = crate_dir.join(&krate.out_dir);
    CratePaths {
        source_dir: crate_dir.join("src"),
        manifest_path: crate_dir.join("Cargo.toml"),
        reference_artifact: output_dir.join(PACKAGE_MANIFEST_FILE),
        dest_dir: dest_for_public_path(project_dir, &config.project.dest, &krate.name),
        crate_dir,
        output_dir,
    }
}

/// Selects the crates to operate on, optionally narrowed to one by name.
pub fn select_crates<'a>(
    config: &'a ProjectConfig,
    only: Option<&str>,
) -> Result<Vec<&'a CrateConfig>, ConfigError> {
    match only {
        None => Ok(config.crates.iter().collect()),
        Some(name) => {
            let found = config.crates.iter().find(|c| c.name == name);
            match found {
                Some(krate) => Ok(vec![krate]),
                None => Err(ConfigError::UnknownCrate(name.to_string())),
            }
        }
    }
}

/// Platform-specific executable name of the external compiler driver.
pub fn wasm_pack_executable() -> &'static str {
    if cfg!(windows) {
        "wasm-pack.exe"
    } else {
        "wasm-pack"
    }
}

/// Searches `PATH` for the external compiler driver.
pub fn locate_wasm_pack() -> Option<PathBuf> {
    find_in_path(wasm_pack_executable())
}

/// Searches every `PATH` entry for `executable`.
fn find_in_path(executable: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(executable))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crateway_config::load_config_from_str;

    fn demo_config() -> ProjectConfig {
        load_config_from_str(
            r#"
[project]
dest = "/pkg"

[[crates]]
name = "demo"
"#,
        )
        .unwrap()
    }

    #[test]
    fn find_project_root_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[[crates]]\nname = \"a\"\n").unwrap();
        let nested = dir.path().join("web").join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let root = find_project_root(&nested).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn find_project_root_missing_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_project_root(dir.path()).unwrap_err();
        assert!(err.to_string().contains("crateway.toml"));
    }

    #[test]
    fn crate_paths_layout() {
        let config = demo_config();
        let paths = crate_paths(Path::new("/proj"), &config, &config.crates[0]);

        assert_eq!(paths.crate_dir, PathBuf::from("/proj/./demo"));
        assert_eq!(paths.source_dir, PathBuf::from("/proj/./demo/src"));
        assert_eq!(paths.manifest_path, PathBuf::from("/proj/./demo/Cargo.toml"));
        assert_eq!(paths.output_dir, PathBuf::from("/proj/./demo/pkg"));
        assert_eq!(
            paths.reference_artifact,
            PathBuf::from("/proj/./demo/pkg/package.json")
        );
        // The public path's leading separator is stripped, not treated as
        // an absolute filesystem location.
        assert_eq!(paths.dest_dir, PathBuf::from("/proj/pkg/demo"));
    }

    #[test]
    fn select_all_crates() {
        let config = demo_config();
        let selected = select_crates(&config, None).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "demo");
    }

    #[test]
    fn select_named_crate() {
        let config = demo_config();
        let selected = select_crates(&config, Some("demo")).unwrap();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn select_unknown_crate_errors() {
        let config = demo_config();
        let err = select_crates(&config, Some("nope")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCrate(_)));
    }

    #[test]
    fn wasm_pack_executable_name() {
        let name = wasm_pack_executable();
        assert!(name.starts_with("wasm-pack"));
    }

    #[test]
    fn find_in_path_misses_unknown_executable() {
        assert!(find_in_path("definitely-not-a-real-executable-a1b2c3").is_none());
    }
}
