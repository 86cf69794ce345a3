//! Character-statistics rules engine for the Fallen tabletop RPG.
//!
//! Resolves a character sheet (attributes, skills, vocations, equipment and
//! active effects) against a set of rule tables into dice pools for every
//! vocation and skill, combat rolls for every usable weapon and spell, and a
//! table of calculated effects. Nothing is rolled; the engine only works out
//! what a player would throw.

pub mod character;
pub mod combat;
pub mod config;
pub mod dice;
pub mod effects;
pub mod error;
pub mod format;
pub mod item;
pub mod level;
pub mod magic;
pub mod progression;
pub mod rules;
pub mod stats;
pub mod validate;

pub use character::{Character, build_character, build_character_with, build_from_snapshot};
pub use combat::CombatRoll;
pub use config::EngineConfig;
pub use dice::{DicePool, DicePoolModification, Die};
pub use effects::CalculatedEffect;
pub use error::{MechError, MechResult};
pub use level::Level;
pub use rules::{CharacterInput, RuleRegistry, RuleTables, SheetSnapshot};
pub use validate::{ValidationIssue, validate_tables};
