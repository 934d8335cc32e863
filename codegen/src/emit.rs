//! Rust source emission helpers.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// An in-progress Rust source file.
pub struct RustFile {
    /// The accumulated source text.
    pub buf: String,
}

impl RustFile {
    /// Starts a file with a `//!` module doc comment. Embedded newlines in
    /// `module_doc` become continuation lines.
    #[must_use]
    pub fn new(module_doc: &str) -> Self {
        let mut buf = String::with_capacity(8 * 1024);
        for line in module_doc.lines() {
            if line.starts_with("//!") {
                let _ = writeln!(buf, "{line}");
            } else if line.is_empty() {
                let _ = writeln!(buf, "//!");
            } else {
                let _ = writeln!(buf, "//! {line}");
            }
        }
        buf.push('\n');
        Self { buf }
    }

    /// Appends a line of source text.
    pub fn line(&mut self, line: &str) {
        let _ = writeln!(self.buf, "{line}");
    }

    /// Appends a blank line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a `///` doc comment; embedded newlines become continuation
    /// lines.
    pub fn doc_comment(&mut self, comment: &str) {
        for line in comment.lines() {
            if line.is_empty() {
                let _ = writeln!(self.buf, "///");
            } else {
                let _ = writeln!(self.buf, "/// {line}");
            }
        }
        if comment.is_empty() {
            let _ = writeln!(self.buf, "///");
        }
    }

    /// Appends a `///` doc comment indented one level (for items inside an
    /// `impl` or struct body).
    pub fn indented_doc_comment(&mut self, comment: &str) {
        for line in comment.lines() {
            if line.is_empty() {
                let _ = writeln!(self.buf, "    ///");
            } else {
                let _ = writeln!(self.buf, "    /// {line}");
            }
        }
    }

    /// Finishes the file, ensuring it ends with exactly one newline.
    #[must_use]
    pub fn finish(mut self) -> String {
        while self.buf.ends_with("\n\n") {
            self.buf.pop();
        }
        if !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
        self.buf
    }
}

/// Collapses runs of whitespace in a model comment into single spaces, so
/// multi-line model text becomes a single doc-comment line.
#[must_use]
pub fn normalize_comment(comment: &str) -> String {
    comment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escapes a string for inclusion in a generated Rust string literal.
#[must_use]
pub fn escape_str(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes generated content to a file, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
