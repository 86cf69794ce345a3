//! Validation of a rule-table set before any character is built against it.
//!
//! Reports the problems `build_character` would either trip over (zero
//! divisors, missing carry-weight rules, unresolvable references) or quietly
//! paper over (duplicate keys, unknown item classes).

use std::collections::{BTreeMap, BTreeSet};

use crate::rules::RuleRegistry;
use crate::rules::decode::name_list;
use crate::rules::tables::RuleTables;

/// A warning or error found while validating rule tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The table row the issue was found in, e.g. `"weapon class 'Bow'"`.
    pub entity: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.entity, self.message)
    }
}

/// Validate a rule-table set.
///
/// Returns every issue found; an empty list means the tables are safe to
/// build characters against.
pub fn validate_tables(tables: &RuleTables) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    validate_divisors(tables, &mut issues);
    validate_duplicates(tables, &mut issues);
    validate_item_classes(tables, &mut issues);

    if tables.weight_classes.is_empty() {
        issues.push(ValidationIssue::error(
            "weight classes",
            "no weight classes defined",
        ));
    }
    if tables.carry_weight_calculations.is_empty() {
        issues.push(ValidationIssue::error(
            "carry weight calculations",
            "no carry weight calculation defined",
        ));
    }

    if let Err(e) = RuleRegistry::build(tables) {
        issues.push(ValidationIssue::error("rule tables", e.to_string()));
    }

    issues
}

/// Formula rows that would divide by zero once resolved.
fn validate_divisors(tables: &RuleTables, issues: &mut Vec<ValidationIssue>) {
    for row in &tables.penetration_calculations {
        if row.divisor == 0 {
            issues.push(ValidationIssue::error(
                format!("penetration calculation '{}'", row.desc),
                "divisor is zero",
            ));
        }
    }
    for row in &tables.engageable_opponents_calculations {
        if row.divisor == 0 {
            issues.push(ValidationIssue::error(
                format!("engageable opponents calculation '{}'", row.desc),
                "divisor is zero",
            ));
        }
    }
    for row in &tables.range_calculations {
        if row.dice_per_unit == 0 {
            issues.push(ValidationIssue::error(
                format!("range calculation '{}'", row.desc),
                "dice per unit is zero",
            ));
        }
    }
}

fn validate_duplicates(tables: &RuleTables, issues: &mut Vec<ValidationIssue>) {
    let keyed: [(&str, Vec<&str>); 12] = [
        ("damage type", tables.damage_types.iter().map(|r| r.name.as_str()).collect()),
        ("attribute", tables.attributes.iter().map(|r| r.name.as_str()).collect()),
        (
            "range",
            tables
                .calculated_ranges
                .iter()
                .map(|r| r.desc.as_str())
                .chain(tables.range_calculations.iter().map(|r| r.desc.as_str()))
                .collect(),
        ),
        (
            "penetration calculation",
            tables.penetration_calculations.iter().map(|r| r.desc.as_str()).collect(),
        ),
        ("magic skill", tables.magic_skills.iter().map(|r| r.desc.as_str()).collect()),
        (
            "magic combat type",
            tables.magic_combat_types.iter().map(|r| r.desc.as_str()).collect(),
        ),
        ("weapon class", tables.weapon_classes.iter().map(|r| r.desc.as_str()).collect()),
        ("conduit class", tables.conduit_classes.iter().map(|r| r.desc.as_str()).collect()),
        (
            "weapon resource class",
            tables.weapon_resource_classes.iter().map(|r| r.name.as_str()).collect(),
        ),
        ("defense class", tables.defense_classes.iter().map(|r| r.name.as_str()).collect()),
        ("item tier", tables.item_tiers.iter().map(|r| r.desc.as_str()).collect()),
        ("item", tables.items.iter().map(|r| r.name.as_str()).collect()),
    ];

    for (table, keys) in keyed {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for key in keys {
            *counts.entry(key).or_default() += 1;
        }
        for (key, count) in counts.into_iter().filter(|(_, count)| *count > 1) {
            issues.push(ValidationIssue::warning(
                format!("{table} '{key}'"),
                format!("defined {count} times, the last definition wins"),
            ));
        }
    }
}

/// Item class names that match no weapon, conduit, resource or defense class
/// are dropped when the registry is built.
fn validate_item_classes(tables: &RuleTables, issues: &mut Vec<ValidationIssue>) {
    let known: BTreeSet<&str> = tables
        .weapon_classes
        .iter()
        .map(|r| r.desc.as_str())
        .chain(tables.conduit_classes.iter().map(|r| r.desc.as_str()))
        .chain(tables.weapon_resource_classes.iter().map(|r| r.name.as_str()))
        .chain(tables.defense_classes.iter().map(|r| r.name.as_str()))
        .collect();

    for item in &tables.items {
        for class in name_list(&item.item_classes) {
            if !known.contains(class) {
                issues.push(ValidationIssue::warning(
                    format!("item '{}'", item.name),
                    format!("unknown item class '{class}' is ignored"),
                ));
            }
        }
    }
}
