//! The compiler output's package descriptor.
//!
//! `wasm-pack` writes a `package.json` into its output directory naming the
//! package and its generated entry module. The wasm binary's filename is not
//! listed explicitly; it is derived from the entry module's name by
//! convention.

use std::path::Path;

use serde::Deserialize;

/// Name of the descriptor file within the compiler output directory.
pub const PACKAGE_MANIFEST_FILE: &str = "package.json";

/// Suffix of the generated entry module.
const MODULE_SUFFIX: &str = ".js";

/// Suffix of the wasm binary emitted alongside the entry module.
const WASM_SUFFIX: &str = "_bg.wasm";

/// On-disk shape of the descriptor; only the fields we consume.
#[derive(Debug, Deserialize)]
struct RawManifest {
    name: String,
    module: String,
}

/// Parsed output-package descriptor.
///
/// Created once per relocation from the output directory's `package.json`
/// and discarded afterwards; the filesystem is the only persistent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    /// The package name, e.g. `demo`.
    pub name: String,
    /// Filename of the generated entry module, e.g. `demo.js`.
    pub module: String,
    /// Filename of the wasm binary, derived from `module`,
    /// e.g. `demo_bg.wasm`.
    pub wasm_filename: String,
}

impl PackageManifest {
    /// Reads and parses the descriptor from a compiler output directory.
    ///
    /// Returns `None` if the directory or descriptor does not exist or the
    /// JSON cannot be parsed. This is fail-safe: a missing descriptor means
    /// "no build output yet", a normal condition before the first build.
    pub fn load(output_dir: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(output_dir.join(PACKAGE_MANIFEST_FILE)).ok()?;
        let raw: RawManifest = serde_json::from_str(&content).ok()?;
        let wasm_filename = derive_wasm_filename(&raw.module);
        Some(Self {
            name: raw.name,
            module: raw.module,
            wasm_filename,
        })
    }
}

/// Replaces the entry module's `.js` suffix with the wasm binary suffix.
///
/// A module name without the expected suffix gets the binary suffix appended
/// to the whole name, matching the compiler's `<stem>_bg.wasm` convention.
fn derive_wasm_filename(module: &str) -> String {
    let stem = module.strip_suffix(MODULE_SUFFIX).unwrap_or(module);
    format!("{stem}{WASM_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_parses_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "demo", "module": "demo.js" }"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.name, "demo");
        assert_eq!(manifest.module, "demo.js");
        assert_eq!(manifest.wasm_filename, "demo_bg.wasm");
    }

    #[test]
    fn load_ignores_extra_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{
                "name": "demo",
                "version": "0.1.0",
                "files": ["demo_bg.wasm", "demo.js"],
                "module": "demo.js",
                "types": "demo.d.ts"
            }"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.name, "demo");
    }

    #[test]
    fn load_missing_dir_returns_none() {
        assert!(PackageManifest::load(Path::new("/nonexistent/pkg")).is_none());
    }

    #[test]
    fn load_missing_descriptor_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PackageManifest::load(dir.path()).is_none());
    }

    #[test]
    fn load_corrupt_json_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "not json {{{").unwrap();
        assert!(PackageManifest::load(dir.path()).is_none());
    }

    #[test]
    fn load_missing_module_field_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), r#"{ "name": "demo" }"#).unwrap();
        assert!(PackageManifest::load(dir.path()).is_none());
    }

    #[test]
    fn wasm_filename_derivation() {
        assert_eq!(derive_wasm_filename("demo.js"), "demo_bg.wasm");
        assert_eq!(derive_wasm_filename("my_lib.js"), "my_lib_bg.wasm");
        // No `.js` suffix: the binary suffix is appended to the whole name.
        assert_eq!(derive_wasm_filename("demo"), "demo_bg.wasm");
    }
}
