//! Copies a compiler output directory into the bundler-served destination.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PackError;
use crate::manifest::PackageManifest;
use crate::patcher::patch_loader;

/// Files the compiler writes for its own housekeeping; never relocated.
const HOUSEKEEPING_FILES: &[&str] = &[".gitignore", "package-lock.json"];

/// What a relocation did, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationReport {
    /// Name of the relocated package, from its descriptor.
    pub package_name: String,
    /// Filename of the entry module that was patched in transit.
    pub entry_module: String,
    /// Number of files written to the destination (patched entry included).
    pub files_copied: usize,
}

/// Converts a bundler public path into a destination directory path.
///
/// Bundler configuration speaks in URL-like public paths (`/pkg`, `pkg`);
/// a single leading separator is notation for "served from the root", not an
/// absolute filesystem location, so it is stripped before the path is joined
/// under the project root.
pub fn dest_for_public_path(project_root: &Path, public_path: &str, package: &str) -> PathBuf {
    let stripped = public_path
        .strip_prefix('/')
        .or_else(|| public_path.strip_prefix('\\'))
        .unwrap_or(public_path);
    project_root.join(stripped).join(package)
}

/// Relocates a compiler output directory to `dest_dir`.
///
/// The destination is fully replaced: if it already exists it is removed
/// recursively and recreated, so two successive relocations leave only the
/// second output behind. Every regular file directly inside `output_dir` is
/// copied byte-for-byte, except housekeeping files (skipped) and the entry
/// module named by the package descriptor, which is routed through
/// [`patch_loader`] so the served copy fetches its wasm binary by network
/// path.
///
/// Returns `Ok(None)` when there is nothing to relocate — the output
/// directory does not exist, or it has no readable descriptor. Filesystem
/// failures during the replacement itself are returned as [`PackError`];
/// a partially relocated artifact is worse than none, so the caller should
/// stop rather than skip.
pub fn relocate(output_dir: &Path, dest_dir: &Path) -> Result<Option<RelocationReport>, PackError> {
    if !output_dir.exists() {
        return Ok(None);
    }

    if dest_dir.exists() {
        fs::remove_dir_all(dest_dir).map_err(|e| io_error(dest_dir, e))?;
    }
    fs::create_dir_all(dest_dir).map_err(|e| io_error(dest_dir, e))?;

    let manifest = match PackageManifest::load(output_dir) {
        Some(m) => m,
        None => return Ok(None),
    };

    let mut files_copied = 0;
    let entries = fs::read_dir(output_dir).map_err(|e| io_error(output_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_error(output_dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_error(&path, e))?;
        if !file_type.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if HOUSEKEEPING_FILES.contains(&name.as_ref()) {
            continue;
        }

        let target = dest_dir.join(&file_name);
        if name == manifest.module {
            let code = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
            // Same filename before and after: relocation changes the load
            // strategy, not the asset's name.
            let patched = patch_loader(&code, &manifest.wasm_filename, &manifest.wasm_filename);
            fs::write(&target, patched).map_err(|e| io_error(&target, e))?;
        } else {
            fs::copy(&path, &target).map_err(|e| PackError::Copy {
                from: path.clone(),
                to: target.clone(),
                source: e,
            })?;
        }
        files_copied += 1;
    }

    Ok(Some(RelocationReport {
        package_name: manifest.name,
        entry_module: manifest.module,
        files_copied,
    }))
}

fn io_error(path: &Path, source: std::io::Error) -> PackError {
    PackError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writes a minimal compiler output directory for package `name`.
    fn write_output(dir: &Path, name: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("package.json"),
            format!(r#"{{ "name": "{name}", "module": "{name}.js" }}"#),
        )
        .unwrap();
        fs::write(
            dir.join(format!("{name}.js")),
            format!("input = new URL('{name}_bg.wasm', import.meta.url);\n"),
        )
        .unwrap();
        fs::write(dir.join(format!("{name}_bg.wasm")), b"\0asm").unwrap();
        fs::write(dir.join(".gitignore"), "*\n").unwrap();
        fs::write(dir.join("package-lock.json"), "{}\n").unwrap();
    }

    #[test]
    fn missing_output_dir_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("pkg").join("demo");
        let report = relocate(&dir.path().join("no_output"), &dest).unwrap();
        assert!(report.is_none());
        assert!(!dest.exists());
    }

    #[test]
    fn missing_descriptor_aborts_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("demo.js"), "code").unwrap();

        let report = relocate(&out, &dir.path().join("dest")).unwrap();
        assert!(report.is_none());
    }

    #[test]
    fn relocates_and_patches_entry_module() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write_output(&out, "demo");
        let dest = dir.path().join("pkg").join("demo");

        let report = relocate(&out, &dest).unwrap().unwrap();
        assert_eq!(report.package_name, "demo");
        assert_eq!(report.entry_module, "demo.js");
        assert_eq!(report.files_copied, 3);

        let loader = fs::read_to_string(dest.join("demo.js")).unwrap();
        assert!(loader.contains("new URL('demo_bg.wasm', location.origin)"));
        assert!(!loader.contains("import.meta.url"));

        // The binary came through byte-for-byte.
        assert_eq!(fs::read(dest.join("demo_bg.wasm")).unwrap(), b"\0asm");
        assert!(dest.join("package.json").exists());
    }

    #[test]
    fn housekeeping_files_are_never_copied() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write_output(&out, "demo");
        let dest = dir.path().join("dest");

        relocate(&out, &dest).unwrap().unwrap();
        assert!(!dest.join(".gitignore").exists());
        assert!(!dest.join("package-lock.json").exists());
    }

    #[test]
    fn second_relocation_fully_replaces_the_first() {
        let dir = tempfile::tempdir().unwrap();
        let out_a = dir.path().join("out_a");
        let out_b = dir.path().join("out_b");
        write_output(&out_a, "demo");
        fs::write(out_a.join("stale.txt"), "left over from a").unwrap();
        write_output(&out_b, "demo");
        let dest = dir.path().join("dest");

        relocate(&out_a, &dest).unwrap().unwrap();
        assert!(dest.join("stale.txt").exists());

        relocate(&out_b, &dest).unwrap().unwrap();
        assert!(!dest.join("stale.txt").exists());
        assert!(dest.join("demo.js").exists());
    }

    #[test]
    fn subdirectories_in_output_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write_output(&out, "demo");
        fs::create_dir_all(out.join("snippets")).unwrap();
        let dest = dir.path().join("dest");

        relocate(&out, &dest).unwrap().unwrap();
        assert!(!dest.join("snippets").exists());
    }

    #[test]
    fn public_path_leading_separator_is_stripped() {
        let root = Path::new("/proj");
        assert_eq!(
            dest_for_public_path(root, "/pkg", "demo"),
            PathBuf::from("/proj/pkg/demo")
        );
        assert_eq!(
            dest_for_public_path(root, "pkg", "demo"),
            PathBuf::from("/proj/pkg/demo")
        );
    }

    #[test]
    fn end_to_end_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(
            out.join("package.json"),
            r#"{ "name": "demo", "module": "demo.js" }"#,
        )
        .unwrap();
        fs::write(
            out.join("demo.js"),
            "input = new URL('demo_bg.wasm', import.meta.url);\n",
        )
        .unwrap();

        let dest = dest_for_public_path(dir.path(), "/pkg", "demo");
        relocate(&out, &dest).unwrap().unwrap();

        let loader = fs::read_to_string(dest.join("demo.js")).unwrap();
        assert!(loader.contains("new URL('demo_bg.wasm', location.origin)"));
        assert!(!loader.contains("new URL('demo_bg.wasm', import.meta.url)"));
    }
}
