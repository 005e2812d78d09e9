//! Render targets for classified compiler output.

use owo_colors::OwoColorize;

use crate::classify::{rewrite_line, LineClass};

/// Trait for wrapping classified compiler output for a display target.
///
/// Implementations differ only in the wrapping syntax; the matching rules
/// are shared via the default [`render`](OutputRenderer::render) method,
/// which processes each line of the input independently.
pub trait OutputRenderer {
    /// Wraps a matched piece of text according to its class.
    fn wrap(&self, text: &str, class: LineClass) -> String;

    /// Renders a full multi-line compiler output string.
    fn render(&self, output: &str) -> String {
        output
            .split('\n')
            .map(|line| rewrite_line(line, |text, class| self.wrap(text, class)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders compiler output with ANSI color codes for terminal display.
pub struct TerminalRenderer {
    /// Whether to emit color codes at all.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl OutputRenderer for TerminalRenderer {
    fn wrap(&self, text: &str, class: LineClass) -> String {
        if !self.color {
            return text.to_string();
        }
        match class {
            LineClass::Location => text.blue().to_string(),
            LineClass::Progress => text.green().bold().to_string(),
            LineClass::Warning => text.yellow().bold().to_string(),
            LineClass::Error => text.red().bold().to_string(),
            LineClass::Help => text.cyan().bold().to_string(),
        }
    }
}

/// Renders compiler output as markup for a browser-delivered error payload.
///
/// Matched text is wrapped in `<code>` elements whose class names carry the
/// semantic category; the consuming stylesheet maps them to colors.
pub struct HtmlRenderer;

impl OutputRenderer for HtmlRenderer {
    fn wrap(&self, text: &str, class: LineClass) -> String {
        format!("<code class=\"{}\">{}</code>", class.css_class(), text)
    }
}
