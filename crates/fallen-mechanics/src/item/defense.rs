//! Armor.

use serde::{Deserialize, Serialize};

/// Defense granted against each kind of attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseClass {
    /// Class name.
    pub name: String,
    /// Physical defense.
    pub physical: f64,
    /// Mental defense.
    pub mental: f64,
    /// Spiritual defense.
    pub spiritual: f64,
}

impl DefenseClass {
    /// Add another class's defense to this one.
    pub fn plus(&self, other: &DefenseClass) -> DefenseClass {
        DefenseClass {
            name: self.name.clone(),
            physical: self.physical + other.physical,
            mental: self.mental + other.mental,
            spiritual: self.spiritual + other.spiritual,
        }
    }
}
