//! Line-oriented tagging of compiler output for terminal and HTML display.
//!
//! `wasm-pack` relays cargo's human-readable output: progress lines, source
//! location carets, gutters, and `warning:`/`error:`/`help:` prefixes. This
//! crate classifies each line against a fixed rule set and wraps the matched
//! text for one of two render targets — ANSI color for the terminal, or
//! `<code>` elements with semantic classes for a dev-server error payload.
//! Both targets share the same matching rules.

#![warn(missing_docs)]

pub mod classify;
pub mod renderer;

pub use classify::{rewrite_line, LineClass};
pub use renderer::{HtmlRenderer, OutputRenderer, TerminalRenderer};
