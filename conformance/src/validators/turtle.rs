//! Structural checks on emitted Turtle.
//!
//! These are surface checks, not a full RDF parse: prefix discipline,
//! statement termination, bracket balance, and language tag shape.

use std::collections::HashSet;

use regex::Regex;

use crate::report::TestResult;

const VALIDATOR: &str = "turtle";

/// Runs all Turtle checks against one serialized document.
#[must_use]
pub fn validate(label: &str, turtle: &str) -> Vec<TestResult> {
    let mut results = Vec::new();

    check_prefixes(label, turtle, &mut results);
    check_balance(label, turtle, &mut results);
    check_language_tags(label, turtle, &mut results);

    if results.is_empty() {
        results.push(TestResult::pass(
            VALIDATOR,
            format!("{label}: turtle output is well-formed"),
        ));
    }
    results
}

/// Strips IRI references and string literals, so token scans do not trip
/// over colons and brackets inside them.
fn strip_opaque(turtle: &str) -> String {
    let mut out = String::with_capacity(turtle.len());
    let mut chars = turtle.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                for c in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                }
                out.push_str("<>");
            }
            '"' => {
                let mut escaped = false;
                for c in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    }
                }
                out.push_str("\"\"");
            }
            _ => out.push(ch),
        }
    }
    out
}

fn check_prefixes(label: &str, turtle: &str, results: &mut Vec<TestResult>) {
    let Ok(decl) = Regex::new(r"@prefix\s+([A-Za-z][A-Za-z0-9-]*)?:\s+<") else {
        results.push(TestResult::fail(VALIDATOR, "internal: bad prefix regex"));
        return;
    };
    let mut declared: HashSet<String> = HashSet::new();
    for caps in decl.captures_iter(turtle) {
        declared.insert(
            caps.get(1)
                .map_or(String::new(), |m| m.as_str().to_string()),
        );
    }

    let stripped = strip_opaque(turtle);
    let Ok(usage) = Regex::new(r"(?:^|[\s(\[])([A-Za-z][A-Za-z0-9-]*)?:[A-Za-z_]") else {
        results.push(TestResult::fail(VALIDATOR, "internal: bad usage regex"));
        return;
    };
    let mut undeclared: Vec<String> = Vec::new();
    for caps in usage.captures_iter(&stripped) {
        let prefix = caps
            .get(1)
            .map_or(String::new(), |m| m.as_str().to_string());
        if prefix == "urn" {
            continue;
        }
        if !declared.contains(&prefix) && !undeclared.contains(&prefix) {
            undeclared.push(prefix);
        }
    }

    if !undeclared.is_empty() {
        results.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{label}: prefixes used but never declared"),
            undeclared,
        ));
    }
}

fn check_balance(label: &str, turtle: &str, results: &mut Vec<TestResult>) {
    let stripped = strip_opaque(turtle);
    let parens =
        stripped.matches('(').count() as i64 - stripped.matches(')').count() as i64;
    let brackets =
        stripped.matches('[').count() as i64 - stripped.matches(']').count() as i64;
    if parens != 0 || brackets != 0 {
        results.push(TestResult::fail(
            VALIDATOR,
            format!("{label}: unbalanced collection or blank node delimiters"),
        ));
    }

    // Every statement block ends with ` .`
    let trimmed = turtle.trim_end();
    if !trimmed.ends_with('.') {
        results.push(TestResult::fail(
            VALIDATOR,
            format!("{label}: document does not end with a statement terminator"),
        ));
    }
}

fn check_language_tags(label: &str, turtle: &str, results: &mut Vec<TestResult>) {
    let Ok(tag) = Regex::new(r#""@([A-Za-z0-9-]+)"#) else {
        results.push(TestResult::fail(VALIDATOR, "internal: bad tag regex"));
        return;
    };
    let Ok(shape) = Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,8})*$") else {
        results.push(TestResult::fail(VALIDATOR, "internal: bad shape regex"));
        return;
    };
    let mut bad: Vec<String> = Vec::new();
    for caps in tag.captures_iter(turtle) {
        if let Some(m) = caps.get(1) {
            if !shape.is_match(m.as_str()) && !bad.contains(&m.as_str().to_string()) {
                bad.push(m.as_str().to_string());
            }
        }
    }
    if !bad.is_empty() {
        results.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{label}: malformed language tags"),
            bad,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use samm_metamodel::serializer::turtle::to_turtle;
    use samm_metamodel::models;

    #[test]
    fn shipped_models_emit_well_formed_turtle() {
        for model in models::all() {
            let turtle = to_turtle(model);
            let results = validate(model.aspect.name(), &turtle);
            for result in &results {
                assert_eq!(
                    result.severity,
                    Severity::Pass,
                    "{}: {:?}",
                    result.message,
                    result.details
                );
            }
        }
    }

    #[test]
    fn undeclared_prefix_is_reported() {
        let doc = "@prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .\n\
                   :Movement a samm:Aspect ;\n  samm-c:values ( \"a\" ) .\n";
        let results = validate("test", doc);
        assert!(results
            .iter()
            .any(|r| r.severity == Severity::Failure && r.details.contains(&"samm-c".to_string())));
    }

    #[test]
    fn unbalanced_list_is_reported() {
        let doc = "@prefix : <urn:samm:com.example:1.0.0#> .\n:A a :B ;\n  :c ( :d .\n";
        let results = validate("test", doc);
        assert!(results.iter().any(|r| r.severity == Severity::Failure));
    }

    #[test]
    fn malformed_language_tag_is_reported() {
        let doc = "@prefix : <urn:samm:com.example:1.0.0#> .\n:A :b \"x\"@ENGLISH-US-TOOLONG1 .\n";
        let results = validate("test", doc);
        assert!(results
            .iter()
            .any(|r| r.message.contains("malformed language tags")));
    }
}
