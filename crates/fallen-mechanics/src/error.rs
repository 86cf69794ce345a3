//! Error types for the rules engine.

/// Errors that abort a character build.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An attribute name is not declared in the attribute table.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A required rule-table lookup found no entry for the key.
    #[error("unknown {table} entry: \"{key}\"")]
    UnknownEntry {
        /// The rule table that was searched.
        table: &'static str,
        /// The key that had no entry.
        key: String,
    },

    /// A formula was configured with a divisor of zero.
    #[error("division by zero in {0} formula")]
    DivisionByZero(&'static str),

    /// No weight class bracket contains the character's load.
    #[error("no weight class covers {percent:.2} of max carry weight")]
    NoWeightClass {
        /// Total carried weight divided by max carry weight.
        percent: f64,
    },

    /// The carry weight calculation table is empty.
    #[error("no carry weight calculation configured")]
    MissingCarryWeightCalculation,

    /// A sheet snapshot could not be deserialized.
    #[error("invalid sheet snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}

impl MechError {
    /// Shorthand for a failed lookup in `table`.
    pub fn unknown(table: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownEntry {
            table,
            key: key.into(),
        }
    }
}

/// Convenience result type for rules-engine operations.
pub type MechResult<T> = Result<T, MechError>;
