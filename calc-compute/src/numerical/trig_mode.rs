#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::{fmt, str::FromStr};

/// The trigonometric mode of a context. This will affect the evaluation of input to trigonometric
/// functions, and output from inverse trigonometric functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum TrigMode {
    /// Use radians.
    #[default]
    Radians,

    /// Use degrees.
    Degrees,
}

impl TrigMode {
    /// Converts an angle in this mode to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            TrigMode::Radians => angle,
            TrigMode::Degrees => angle.to_radians(),
        }
    }

    /// Converts an angle in radians to this mode.
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            TrigMode::Radians => angle,
            TrigMode::Degrees => angle.to_degrees(),
        }
    }
}

impl fmt::Display for TrigMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrigMode::Radians => write!(f, "radians"),
            TrigMode::Degrees => write!(f, "degrees"),
        }
    }
}

impl FromStr for TrigMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "radians" | "rad" => Ok(TrigMode::Radians),
            "degrees" | "deg" => Ok(TrigMode::Degrees),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn parse_and_display() {
        assert_eq!("degrees".parse::<TrigMode>(), Ok(TrigMode::Degrees));
        assert_eq!("rad".parse::<TrigMode>(), Ok(TrigMode::Radians));
        assert_eq!("gradians".parse::<TrigMode>(), Err(()));
        assert_eq!(TrigMode::Degrees.to_string(), "degrees");
    }

    #[test]
    fn conversions() {
        assert_eq!(TrigMode::Radians.to_radians(1.5), 1.5);
        assert_float_relative_eq!(TrigMode::Degrees.to_radians(180.0), PI);
        assert_float_relative_eq!(TrigMode::Degrees.from_radians(PI / 2.0), 90.0);
    }
}
