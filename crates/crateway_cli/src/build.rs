//! `crateway build` — freshness-gated compilation and relocation.
//!
//! For each configured crate:
//! 1. Decide from filesystem timestamps whether its artifact is stale or
//!    reusable (skipped by `--force`).
//! 2. On rebuild, invoke `wasm-pack` as a blocking subprocess and route its
//!    captured output through the diagnostic formatter.
//! 3. On success, relocate the compiler output into the bundler-served
//!    destination, patching the entry module in transit.

use std::io;
use std::path::Path;
use std::process::{Command, Output};

use crateway_diagnostics::{OutputRenderer, TerminalRenderer};
use crateway_freshness::{check_freshness, FreshnessVerdict};
use crateway_pack::relocate;

use crate::pipeline::{
    crate_paths, locate_wasm_pack, resolve_project_root, select_crates, wasm_pack_executable,
};
use crate::{BuildArgs, BuildProfile, GlobalArgs};

/// Runs the `crateway build` command.
///
/// Returns exit code 0 on success, 1 when the compiler reports an error.
/// Filesystem failures during relocation propagate as errors: a partially
/// relocated package must stop the loop, not be skipped.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = crateway_config::load_config(&project_dir)?;

    if locate_wasm_pack().is_none() {
        // Warn but continue: the subprocess will fail on its own terms.
        eprintln!(
            "warning: {} not found in PATH; builds will fail until it is installed",
            wasm_pack_executable()
        );
        eprintln!("  install: https://rustwasm.github.io/wasm-pack/installer/");
    }

    let selected = select_crates(&config, args.only.as_deref())?;
    let renderer = TerminalRenderer::new(global.color);

    for krate in selected {
        let paths = crate_paths(&project_dir, &config, krate);

        if !args.force {
            let verdict =
                check_freshness(&paths.source_dir, &paths.manifest_path, &paths.reference_artifact);
            match verdict {
                FreshnessVerdict::Reuse => {
                    if !global.quiet {
                        eprintln!("     Fresh {} (artifact up to date)", krate.name);
                    }
                    continue;
                }
                FreshnessVerdict::Rebuild(reason) => {
                    if !global.quiet {
                        eprintln!("  Building {} ({reason})", krate.name);
                    }
                }
            }
        } else if !global.quiet {
            eprintln!("  Building {} (forced)", krate.name);
        }

        let output = run_wasm_pack(&paths.crate_dir, args.profile)?;

        // wasm-pack relays cargo's diagnostics on stderr.
        let stderr_text = String::from_utf8_lossy(&output.stderr);
        if !stderr_text.trim().is_empty() {
            eprintln!("{}", renderer.render(stderr_text.trim_end()));
        }

        if !output.status.success() {
            eprintln!("error: wasm-pack failed for crate '{}'", krate.name);
            return Ok(1);
        }

        match relocate(&paths.output_dir, &paths.dest_dir)? {
            Some(report) => {
                if !global.quiet {
                    eprintln!(
                        "   Relocated {} -> {} ({} files)",
                        report.package_name,
                        paths.dest_dir.display(),
                        report.files_copied
                    );
                }
            }
            None => {
                if !global.quiet {
                    eprintln!("   Nothing to relocate for '{}'", krate.name);
                }
            }
        }
    }

    if !global.quiet {
        eprintln!("   Build complete.");
    }
    Ok(0)
}

/// Invokes `wasm-pack build` for one crate and captures its output.
fn run_wasm_pack(crate_dir: &Path, profile: BuildProfile) -> io::Result<Output> {
    let mut cmd = Command::new(wasm_pack_executable());
    cmd.arg("build").arg(crate_dir).args(["--target", "web"]);
    if let Some(flag) = profile_flag(profile) {
        cmd.arg(flag);
    }
    cmd.output()
}

/// Maps a profile to its `wasm-pack` flag; release is the default and
/// needs none.
fn profile_flag(profile: BuildProfile) -> Option<&'static str> {
    match profile {
        BuildProfile::Dev => Some("--dev"),
        BuildProfile::Release => None,
        BuildProfile::Profiling => Some("--profiling"),
    }
}
