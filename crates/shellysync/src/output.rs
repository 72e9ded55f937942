//! Output formatting: table, JSON, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.
//! Diagnostics always go to stderr.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use shellysync_core::{Diagnostics, Field, Severity};

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a single serde-serializable item in the chosen format.
///
/// - `table`: one-row table built from `to_row`
/// - `json` / `json-compact`: serializes the original data via serde
/// - `plain`: calls `id_fn` to emit one identifier
pub fn render_single<T, R>(
    format: OutputFormat,
    data: &T,
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => Table::new([to_row(data)])
            .with(Style::rounded())
            .to_string(),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print every diagnostic to stderr, severity-tagged and colored when the
/// terminal supports it.
pub fn print_diagnostics(diags: &Diagnostics, color: bool) {
    let mut stderr = io::stderr().lock();
    for diag in diags {
        let tag = match diag.severity {
            Severity::Error => {
                if color {
                    format!("{}", "error".red().bold())
                } else {
                    "error".to_string()
                }
            }
            Severity::Warning => {
                if color {
                    format!("{}", "warning".yellow().bold())
                } else {
                    "warning".to_string()
                }
            }
        };
        let _ = writeln!(stderr, "{tag}: {}", diag.summary);
        if !diag.detail.is_empty() {
            let _ = writeln!(stderr, "  {}", diag.detail);
        }
    }
}

// ── Field rendering ──────────────────────────────────────────────────

/// Table cell for a tri-state field.
pub fn field_cell<T: std::fmt::Display>(field: &Field<T>) -> String {
    match field {
        Field::Unset => "-".to_string(),
        Field::Null => "null".to_string(),
        Field::Value(v) => v.to_string(),
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    // Record types serialize infallibly; an error here is a programming bug
    // worth surfacing in the output rather than panicking over.
    rendered.unwrap_or_else(|e| format!("<serialization error: {e}>"))
}
