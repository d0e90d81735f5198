use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{f64::Time, time::hour};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Names accepted by [`resolve_material`], in [`Material::ALL`] order.
const MATERIAL_NAMES: &[&str] = &["wood", "brick", "concrete"];

/// Errors that can occur while selecting a house material.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    /// The name does not match a known material.
    #[error("unknown material {name:?}, expected one of: {}", .known.join(", "))]
    Unknown {
        name: String,
        known: &'static [&'static str],
    },

    /// The time constant is not strictly positive.
    #[error("invalid time constant")]
    TimeConstant(#[from] ConstraintError),
}

/// Construction materials with a tabulated time constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Wood,
    Brick,
    Concrete,
}

impl Material {
    /// Every known material.
    pub const ALL: [Self; 3] = [Self::Wood, Self::Brick, Self::Concrete];

    /// Returns the lowercase name of this material.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Wood => MATERIAL_NAMES[0],
            Self::Brick => MATERIAL_NAMES[1],
            Self::Concrete => MATERIAL_NAMES[2],
        }
    }

    /// Returns the thermal time constant of a typical house built from this material.
    ///
    /// These are rough values; the real constant depends on insulation,
    /// house size, and air leakage.
    #[must_use]
    pub fn time_constant(self) -> Time {
        let hours = match self {
            Self::Wood => 4.0,
            Self::Brick => 6.0,
            Self::Concrete => 8.0,
        };
        Time::new::<hour>(hours)
    }

    /// Returns the profile for this material.
    #[must_use]
    pub fn profile(self) -> MaterialProfile {
        MaterialProfile {
            name: self.name().to_owned(),
            time_constant: self.time_constant(),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    /// Parses a material name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|material| material.name() == normalized)
            .ok_or_else(|| MaterialError::Unknown {
                name: s.to_owned(),
                known: MATERIAL_NAMES,
            })
    }
}

/// A named house material and its thermal time constant.
///
/// The time constant is guaranteed to be strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProfile {
    name: String,
    time_constant: Time,
}

impl MaterialProfile {
    /// Constructs a validated material profile.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::TimeConstant`] if the time constant is zero,
    /// negative, or NaN.
    pub fn new(name: impl Into<String>, time_constant: Time) -> Result<Self, MaterialError> {
        let time_constant = StrictlyPositive::new(time_constant)?;
        Ok(Self::from_constrained(name, time_constant))
    }

    /// Constructs a material profile from a pre-validated time constant.
    #[must_use]
    pub fn from_constrained(
        name: impl Into<String>,
        time_constant: Constrained<Time, StrictlyPositive>,
    ) -> Self {
        Self {
            name: name.into(),
            time_constant: time_constant.into_inner(),
        }
    }

    /// Returns the material name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the thermal time constant.
    #[must_use]
    pub fn time_constant(&self) -> Time {
        self.time_constant
    }
}

/// Resolves a material name to its profile.
///
/// Matching ignores case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`MaterialError::Unknown`] if the name is not a known material.
pub fn resolve_material(name: &str) -> Result<MaterialProfile, MaterialError> {
    name.parse::<Material>().map(Material::profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn known_materials() {
        for (name, tau) in [("wood", 4.0), ("brick", 6.0), ("concrete", 8.0)] {
            let profile = resolve_material(name).unwrap();
            assert_eq!(profile.name(), name);
            assert_relative_eq!(profile.time_constant().get::<hour>(), tau, epsilon = 1e-12);
        }
    }

    #[test]
    fn names_are_case_and_whitespace_insensitive() {
        assert_eq!(resolve_material("  Brick\n").unwrap(), Material::Brick.profile());
        assert_eq!("CONCRETE".parse::<Material>().unwrap(), Material::Concrete);
    }

    #[test]
    fn unknown_material_lists_the_choices() {
        let err = resolve_material("straw").unwrap_err();
        assert_eq!(
            err,
            MaterialError::Unknown {
                name: "straw".to_owned(),
                known: MATERIAL_NAMES,
            }
        );
        assert_eq!(
            err.to_string(),
            "unknown material \"straw\", expected one of: wood, brick, concrete"
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for material in Material::ALL {
            assert_eq!(material.to_string().parse::<Material>().unwrap(), material);
        }
    }

    #[test]
    fn custom_profiles_need_a_positive_time_constant() {
        let adobe = MaterialProfile::new("adobe", Time::new::<hour>(10.0)).unwrap();
        assert_eq!(adobe.name(), "adobe");

        assert_eq!(
            MaterialProfile::new("tent", Time::new::<hour>(0.0)),
            Err(MaterialError::TimeConstant(ConstraintError::Zero))
        );
        assert_eq!(
            MaterialProfile::new("tent", Time::new::<hour>(-1.0)),
            Err(MaterialError::TimeConstant(ConstraintError::Negative))
        );
    }
}
