//! Decoders for the string-encoded columns of the rule tables.
//!
//! Decoding is permissive: a tag that is not recognised decodes to the zero
//! value of its type instead of failing. Resolving a decoded *reference*
//! against a registry table is the fail-fast step, done by
//! [`RuleRegistry`](super::RuleRegistry).

/// Written in optional columns to mean "no value".
pub const NONE: &str = "None";

/// A decoded penetration column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenetrationTag<'a> {
    /// `"CalculatedPenetration n"`, a flat value.
    Calculated(u32),
    /// `"PenetrationCalculation Name"`, a reference to a formula.
    Calculation(&'a str),
}

impl<'a> PenetrationTag<'a> {
    /// Decode a penetration column. Unrecognised input is a flat 0.
    pub fn parse(s: &'a str) -> Self {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("CalculatedPenetration ") {
            Self::Calculated(rest.trim().parse().unwrap_or(0))
        } else if let Some(rest) = s.strip_prefix("PenetrationCalculation ") {
            Self::Calculation(rest.trim())
        } else {
            Self::Calculated(0)
        }
    }
}

/// A decoded engageable-opponents column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngageableOpponentsTag<'a> {
    /// `"EOCalculation Name"`, a reference to a formula.
    Calculation(&'a str),
    /// `"CalculatedEO Name"`, a reference to a flat rule.
    Calculated(&'a str),
    /// Anything else: a flat 0.
    Zero,
}

impl<'a> EngageableOpponentsTag<'a> {
    /// Decode an engageable-opponents column.
    pub fn parse(s: &'a str) -> Self {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("EOCalculation ") {
            Self::Calculation(rest.trim())
        } else if let Some(rest) = s.strip_prefix("CalculatedEO ") {
            Self::Calculated(rest.trim())
        } else {
            Self::Zero
        }
    }
}

/// `None` for the `"None"` marker, the trimmed text otherwise.
pub fn optional(s: &str) -> Option<&str> {
    match s.trim() {
        NONE => None,
        other => Some(other),
    }
}

/// Split a comma-separated attribute list, ignoring spaces.
pub fn attribute_names(s: &str) -> Vec<String> {
    let compact: String = s.chars().filter(|c| *c != ' ').collect();
    compact
        .split(',')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// The attribute list inside the last pair of braces, as in
/// `"Ranger {DEX, RX}"`. No braces means no attributes.
pub fn braced_attribute_names(s: &str) -> Vec<String> {
    match s.rsplit_once('{') {
        Some((_, rest)) => {
            let inner = rest.split('}').next().unwrap_or_default();
            attribute_names(inner)
        }
        None => Vec::new(),
    }
}

/// Split a `", "`-separated name list. The empty string is the empty list.
pub fn name_list(s: &str) -> Vec<&str> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split(", ").collect()
    }
}
