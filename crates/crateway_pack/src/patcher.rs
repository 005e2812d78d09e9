//! Rewrites the generated loader's wasm load path.
//!
//! The compiler's default loader assumes it is served from a directory that
//! also contains the wasm binary, and derives the binary's URL from its own
//! module URL. Behind a bundler the module and the binary are served from
//! paths the bundler controls, so both derivations are rewritten to
//! network-addressed forms.
//!
//! The two patterns below are literal text emitted by the current compiler
//! version. A compiler upgrade that changes its loader template may require
//! updating them; when neither pattern is present the patch is a no-op, so an
//! already-patched (or differently shaped) module passes through unchanged.

/// The loader expression that derives the wasm URL from the module's own URL.
const SELF_URL_REWRITE: &str = r"import.meta.url.replace(/\.js$/, '_bg.wasm');";

/// Rewrites the loader source to fetch the wasm binary by network path.
///
/// Performs two independent, order-insensitive replacements, each on the
/// first occurrence only:
///
/// - the self-referential URL derivation becomes a direct `fetch` of
///   `new_wasm_path`;
/// - the `new URL(<old_wasm_path>, import.meta.url)` construction becomes a
///   `new URL(<new_wasm_path>, location.origin)` construction.
///
/// The transform is idempotent: patched text contains neither source pattern,
/// so running it again returns the input unchanged.
pub fn patch_loader(source: &str, old_wasm_path: &str, new_wasm_path: &str) -> String {
    let fetch_call = format!("fetch('{new_wasm_path}')");
    let relative_url = format!("new URL('{old_wasm_path}', import.meta.url)");
    let origin_url = format!("new URL('{new_wasm_path}', location.origin)");

    source
        .replacen(SELF_URL_REWRITE, &fetch_call, 1)
        .replacen(&relative_url, &origin_url, 1)
}
