//! Configuration data structures for `crateway.toml`.

use serde::Deserialize;

/// Top-level project configuration.
///
/// ```toml
/// [project]
/// root = "."
/// dest = "pkg"
///
/// [[crates]]
/// name = "demo"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project-wide settings.
    #[serde(default)]
    pub project: ProjectSection,

    /// The wasm crates this project builds and serves.
    #[serde(default)]
    pub crates: Vec<CrateConfig>,
}

/// The `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Directory containing the wasm crates, relative to the project root.
    #[serde(default = "default_root")]
    pub root: String,

    /// Bundler public path under which compiled packages are served.
    /// May carry a leading separator (`/pkg`); it is stripped on use.
    #[serde(default = "default_dest")]
    pub dest: String,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            root: default_root(),
            dest: default_dest(),
        }
    }
}

/// One `[[crates]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CrateConfig {
    /// The crate's directory name under the project root.
    pub name: String,

    /// The compiler output directory inside the crate.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_root() -> String {
    ".".to_string()
}

fn default_dest() -> String {
    "pkg".to_string()
}

fn default_out_dir() -> String {
    "pkg".to_string()
}
