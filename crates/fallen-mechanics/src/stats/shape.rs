//! Area-of-effect templates and the shapes they resolve to.

use serde::{Deserialize, Serialize};

use crate::format::fixed;

/// Cone opening angle, as configured in the rules.
pub const CONE_ANGLE: f64 = 53.0;
/// Cone length gained per die.
pub const CONE_FT_PER_DIE: u32 = 5;
/// Sphere radius gained per die.
pub const SPHERE_FT_PER_DIE: f64 = 2.5;

/// An area-of-effect template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaOfEffect {
    /// A cone projecting from the caster.
    Cone,
    /// A sphere around a point.
    Sphere,
}

impl AreaOfEffect {
    /// Decode a rule-table tag. `"None"` and unrecognised tags mean no area.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Cone" => Some(Self::Cone),
            "Sphere" => Some(Self::Sphere),
            _ => None,
        }
    }

    /// Size this template for a dice total.
    pub fn shape(self, dice_total: u32) -> Shape {
        match self {
            Self::Cone => Shape::Cone(ConeShape::for_dice(dice_total)),
            Self::Sphere => Shape::Sphere(SphereShape::for_dice(dice_total)),
        }
    }

    /// The shape a roll produces: an override from an equipped resource or
    /// conduit replaces the base template entirely.
    pub fn resolve(dice_total: u32, base: Option<Self>, overriding: Option<Self>) -> Option<Shape> {
        overriding.or(base).map(|aoe| aoe.shape(dice_total))
    }
}

/// A sized cone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeShape {
    /// Area in square feet.
    pub area: f64,
    /// Length in feet.
    pub distance: u32,
    /// Opening angle.
    pub angle: f64,
}

impl ConeShape {
    /// A cone five feet long per die.
    pub fn for_dice(dice_total: u32) -> Self {
        let distance = dice_total.saturating_mul(CONE_FT_PER_DIE);
        Self {
            area: cone_area(distance, CONE_ANGLE),
            distance,
            angle: CONE_ANGLE,
        }
    }
}

/// Area of a cone of the given length and opening angle.
///
/// The tangent is taken of the raw half-angle value.
pub fn cone_area(distance: u32, angle: f64) -> f64 {
    let distance = f64::from(distance);
    distance * distance * (angle / 2.0).tan()
}

/// A sized sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereShape {
    /// Area in square feet.
    pub area: f64,
    /// Radius in feet.
    pub radius: f64,
}

impl SphereShape {
    /// A sphere with a radius of two and a half feet per die.
    pub fn for_dice(dice_total: u32) -> Self {
        let radius = SPHERE_FT_PER_DIE * f64::from(dice_total);
        Self {
            area: 2.0 * std::f64::consts::PI * radius.powi(2),
            radius,
        }
    }
}

/// A resolved area of effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A cone.
    Cone(ConeShape),
    /// A sphere.
    Sphere(SphereShape),
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cone(cone) => write!(
                f,
                "area: {} ft^2, distance: {} ft, angle: {} ",
                fixed(cone.area, 1),
                cone.distance,
                fixed(cone.angle, 1)
            ),
            Self::Sphere(sphere) => write!(
                f,
                "area: {} ft^2, radius: {} ft",
                fixed(sphere.area, 1),
                fixed(sphere.radius, 1)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags() {
        assert_eq!(AreaOfEffect::parse("Cone"), Some(AreaOfEffect::Cone));
        assert_eq!(AreaOfEffect::parse("Sphere"), Some(AreaOfEffect::Sphere));
        assert_eq!(AreaOfEffect::parse("None"), None);
        assert_eq!(AreaOfEffect::parse("Line"), None);
    }

    #[test]
    fn cone_scales_with_dice() {
        let cone = ConeShape::for_dice(4);
        assert_eq!(cone.distance, 20);
        assert_eq!(cone.angle, CONE_ANGLE);
        assert_eq!(cone.area, 400.0 * (26.5f64).tan());
    }

    #[test]
    fn cone_display_keeps_trailing_space() {
        assert_eq!(
            Shape::Cone(ConeShape::for_dice(4)).to_string(),
            "area: 1938.0 ft^2, distance: 20 ft, angle: 53.0 "
        );
    }

    #[test]
    fn sphere_scales_with_dice() {
        let sphere = SphereShape::for_dice(2);
        assert_eq!(sphere.radius, 5.0);
        assert_eq!(sphere.area, 50.0 * std::f64::consts::PI);
        assert_eq!(
            Shape::Sphere(sphere).to_string(),
            "area: 157.1 ft^2, radius: 5.0 ft"
        );
    }

    #[test]
    fn override_replaces_base() {
        let shape = AreaOfEffect::resolve(2, Some(AreaOfEffect::Cone), Some(AreaOfEffect::Sphere));
        assert!(matches!(shape, Some(Shape::Sphere(_))));
    }

    #[test]
    fn base_used_without_override() {
        let shape = AreaOfEffect::resolve(2, Some(AreaOfEffect::Cone), None);
        assert!(matches!(shape, Some(Shape::Cone(_))));
        assert_eq!(AreaOfEffect::resolve(2, None, None), None);
    }
}
