//! Compiled-package handling: manifest reading, loader patching, and
//! artifact relocation.
//!
//! `wasm-pack` leaves its output in a `pkg/` directory next to the crate it
//! compiled: a `package.json` descriptor, a generated JavaScript loader
//! module, the `.wasm` binary, and assorted support files. This crate reads
//! that descriptor, copies the output into the directory a web bundler
//! serves, and rewrites the loader so it fetches the binary over the network
//! instead of resolving it relative to its own module URL.

#![warn(missing_docs)]

pub mod error;
pub mod manifest;
pub mod patcher;
pub mod relocate;

pub use error::PackError;
pub use manifest::{PackageManifest, PACKAGE_MANIFEST_FILE};
pub use patcher::patch_loader;
pub use relocate::{dest_for_public_path, relocate, RelocationReport};
