//! Model inventory validation.
//!
//! Enforces the invariants the element types themselves do not: URN
//! uniqueness and syntax, one entry per language tag, constraint placement,
//! structured value deconstruction rules, and entity extension targets.

use std::collections::HashSet;

use regex::Regex;
use samm_metamodel::model::{CharacteristicKind, LangText};
use samm_metamodel::{AspectModel, ModelUrn};

use crate::report::TestResult;

const VALIDATOR: &str = "inventory";

/// Runs all inventory checks against a model.
#[must_use]
pub fn validate(model: &AspectModel) -> Vec<TestResult> {
    let mut results = Vec::new();
    let label = model.aspect.name();

    check_urns(model, label, &mut results);
    check_language_tags(model, label, &mut results);
    check_characteristics(model, label, &mut results);
    check_entities(model, label, &mut results);
    check_units(model, label, &mut results);

    if results.is_empty() {
        results.push(TestResult::pass(
            VALIDATOR,
            format!("{label}: all inventory checks passed"),
        ));
    }
    results
}

fn check_urns(model: &AspectModel, label: &str, results: &mut Vec<TestResult>) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    let mut unparseable: Vec<String> = Vec::new();

    let mut visit = |urn: &'static str| {
        if !seen.insert(urn) {
            duplicates.push(urn.to_string());
        }
        if ModelUrn::parse(urn).is_err() {
            unparseable.push(urn.to_string());
        }
    };

    visit(model.aspect.urn);
    for prop in model.all_properties() {
        visit(prop.urn);
    }
    for characteristic in model.characteristics() {
        visit(characteristic.urn);
    }
    for entity in &model.entities {
        visit(entity.urn);
    }
    for unit in &model.units {
        visit(unit.urn);
    }

    if !duplicates.is_empty() {
        results.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{label}: duplicate element URNs"),
            duplicates,
        ));
    }
    if !unparseable.is_empty() {
        results.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{label}: URNs violating the urn:samm grammar"),
            unparseable,
        ));
    }
}

fn check_language_tags(model: &AspectModel, label: &str, results: &mut Vec<TestResult>) {
    // BCP-47 shape: primary subtag plus optional subtags.
    let Ok(tag_shape) = Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,8})*$") else {
        results.push(TestResult::fail(VALIDATOR, "internal: bad tag regex"));
        return;
    };
    let mut bad: Vec<String> = Vec::new();

    let mut check = |owner: &str, texts: &[LangText]| {
        let mut tags: HashSet<&str> = HashSet::new();
        for text in texts {
            if !tags.insert(text.language_tag) {
                bad.push(format!("{owner}: duplicate language tag `{}`", text.language_tag));
            }
            if !tag_shape.is_match(text.language_tag) {
                bad.push(format!("{owner}: malformed language tag `{}`", text.language_tag));
            }
        }
    };

    check(model.aspect.urn, &model.aspect.preferred_names);
    check(model.aspect.urn, &model.aspect.descriptions);
    for prop in model.all_properties() {
        check(prop.urn, &prop.preferred_names);
        check(prop.urn, &prop.descriptions);
    }
    for characteristic in model.characteristics() {
        check(characteristic.urn, &characteristic.preferred_names);
        check(characteristic.urn, &characteristic.descriptions);
    }
    for entity in &model.entities {
        check(entity.urn, &entity.preferred_names);
        check(entity.urn, &entity.descriptions);
    }

    if !bad.is_empty() {
        results.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{label}: language tag violations"),
            bad,
        ));
    }
}

fn check_characteristics(model: &AspectModel, label: &str, results: &mut Vec<TestResult>) {
    let mut bad: Vec<String> = Vec::new();

    for characteristic in model.characteristics() {
        match &characteristic.kind {
            CharacteristicKind::Trait { constraints, .. } => {
                if constraints.is_empty() {
                    bad.push(format!("{}: trait without constraints", characteristic.urn));
                }
            }
            CharacteristicKind::Either { .. } => {
                if characteristic.data_type.is_some() {
                    bad.push(format!(
                        "{}: either must not declare its own data type",
                        characteristic.urn
                    ));
                }
            }
            CharacteristicKind::StructuredValue {
                deconstruction_rule,
                elements,
            } => match Regex::new(deconstruction_rule) {
                Ok(rule) => {
                    let groups = rule.captures_len() - 1;
                    if groups != elements.len() {
                        bad.push(format!(
                            "{}: {} capture groups for {} elements",
                            characteristic.urn,
                            groups,
                            elements.len()
                        ));
                    }
                    for element in elements {
                        if ModelUrn::parse(element).is_err() {
                            bad.push(format!(
                                "{}: element is not a valid URN: {element}",
                                characteristic.urn
                            ));
                        }
                    }
                }
                Err(_) => {
                    bad.push(format!(
                        "{}: deconstruction rule is not a valid regex",
                        characteristic.urn
                    ));
                }
            },
            CharacteristicKind::State {
                values,
                default_value,
            } => {
                if !values.contains(default_value) {
                    bad.push(format!(
                        "{}: default value is not among the state values",
                        characteristic.urn
                    ));
                }
            }
            CharacteristicKind::Enumeration { values } => {
                if values.is_empty() {
                    bad.push(format!("{}: empty enumeration", characteristic.urn));
                }
            }
            _ => {}
        }
    }

    if !bad.is_empty() {
        results.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{label}: characteristic violations"),
            bad,
        ));
    }
}

fn check_entities(model: &AspectModel, label: &str, results: &mut Vec<TestResult>) {
    let mut bad: Vec<String> = Vec::new();

    for entity in &model.entities {
        if let Some(parent_urn) = entity.extends {
            match model.find_entity(parent_urn) {
                Some(parent) if !parent.is_abstract => {
                    bad.push(format!(
                        "{}: extends the non-abstract entity {parent_urn}",
                        entity.urn
                    ));
                }
                Some(_) => {}
                None => {
                    bad.push(format!(
                        "{}: extends the unknown entity {parent_urn}",
                        entity.urn
                    ));
                }
            }
        }
    }

    if !bad.is_empty() {
        results.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{label}: entity violations"),
            bad,
        ));
    }
}

fn check_units(model: &AspectModel, label: &str, results: &mut Vec<TestResult>) {
    let mut bad: Vec<String> = Vec::new();

    for characteristic in model.characteristics() {
        let unit = match &characteristic.kind {
            CharacteristicKind::Measurement { unit } => Some(*unit),
            CharacteristicKind::Quantifiable { unit } => *unit,
            _ => None,
        };
        if let Some(unit) = unit {
            if model.find_unit(unit).is_none() {
                bad.push(format!(
                    "{}: references the undeclared unit {unit}",
                    characteristic.urn
                ));
            }
        }
    }

    if !bad.is_empty() {
        results.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{label}: unit violations"),
            bad,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use samm_metamodel::models;

    #[test]
    fn shipped_models_pass_all_inventory_checks() {
        for model in models::all() {
            let results = validate(model);
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
}
