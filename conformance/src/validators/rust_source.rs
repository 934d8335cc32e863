//! Generated Rust source standards.
//!
//! Walks a generated `src/` tree and enforces the rules the generator is
//! expected to uphold: a module doc header per file, no panicking calls, and
//! a doc comment on every public item.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::report::TestResult;

const VALIDATOR: &str = "rust-source";

/// Runs all source checks against a generated `src/` directory.
#[must_use]
pub fn validate_dir(label: &str, src_dir: &Path) -> Vec<TestResult> {
    let mut results = Vec::new();
    let mut violations: Vec<String> = Vec::new();
    let mut checked = 0usize;

    for entry in WalkDir::new(src_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(path) else {
            violations.push(format!("{}: unreadable", path.display()));
            continue;
        };
        checked += 1;
        let name = path
            .strip_prefix(src_dir)
            .unwrap_or(path)
            .display()
            .to_string();
        check_file(&name, &content, &mut violations);
    }

    if checked == 0 {
        results.push(TestResult::warn(
            VALIDATOR,
            format!("{label}: no Rust sources found under {}", src_dir.display()),
        ));
        return results;
    }

    if violations.is_empty() {
        results.push(TestResult::pass(
            VALIDATOR,
            format!("{label}: {checked} generated files conform"),
        ));
    } else {
        results.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{label}: generated source violations"),
            violations,
        ));
    }
    results
}

fn check_file(name: &str, content: &str, violations: &mut Vec<String>) {
    if !content.starts_with("//!") {
        violations.push(format!("{name}: missing module doc header"));
    }

    for needle in [".unwrap()", ".expect(", "panic!(", "unimplemented!(", "todo!("] {
        if content.contains(needle) {
            violations.push(format!("{name}: contains `{needle}`"));
        }
    }

    check_pub_docs(name, content, violations);
}

/// Every `pub` item must be directly preceded by a doc comment, allowing
/// attribute lines in between.
fn check_pub_docs(name: &str, content: &str, violations: &mut Vec<String>) {
    let lines: Vec<&str> = content.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        let is_item = ["pub struct ", "pub enum ", "pub fn ", "pub const ", "pub mod "]
            .iter()
            .any(|prefix| trimmed.starts_with(prefix));
        if !is_item {
            continue;
        }
        let mut j = i;
        let mut documented = false;
        while j > 0 {
            j -= 1;
            let above = lines[j].trim_start();
            if above.starts_with("#[") || above.starts_with("#!") {
                continue;
            }
            documented = above.starts_with("///") || above.starts_with("//!");
            break;
        }
        if !documented {
            violations.push(format!("{name}:{}: undocumented public item", i + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    #[test]
    fn conforming_file_passes() {
        let mut violations = Vec::new();
        let content = "//! Module.\n\n/// A thing.\n#[derive(Debug)]\npub struct Thing;\n";
        check_file("ok.rs", content, &mut violations);
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn undocumented_pub_item_is_reported() {
        let mut violations = Vec::new();
        let content = "//! Module.\n\npub struct Thing;\n";
        check_file("bad.rs", content, &mut violations);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("undocumented public item"));
    }

    #[test]
    fn panicking_calls_are_reported() {
        let mut violations = Vec::new();
        let content = "//! Module.\n\n/// F.\npub fn f(x: Option<u8>) -> u8 { x.unwrap() }\n";
        check_file("bad.rs", content, &mut violations);
        assert!(violations.iter().any(|v| v.contains(".unwrap()")));
    }

    #[test]
    fn missing_directory_warns_instead_of_failing() {
        let results = validate_dir("movement", Path::new("/nonexistent/samm-gen"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].severity, Severity::Warning);
    }
}
