use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

const HZ_PER_GHZ: f64 = 1e9;

/// Operating frequency of a tower
///
/// Stored in gigahertz. A `Frequency` is always finite and strictly positive,
/// so values that reach the physics code never need re-checking.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Frequency(f64);

impl Frequency {
    /// Create a frequency from a value in GHz
    ///
    /// Returns `Error::InvalidFrequency` for zero, negative, NaN or infinite input.
    pub fn from_ghz(ghz: f64) -> Result<Self> {
        if ghz.is_finite() && ghz > 0.0 {
            Ok(Self(ghz))
        } else {
            Err(Error::InvalidFrequency(ghz.to_string()))
        }
    }

    pub fn as_ghz(self) -> f64 {
        self.0
    }

    pub fn as_hz(self) -> f64 {
        self.0 * HZ_PER_GHZ
    }
}

impl FromStr for Frequency {
    type Err = Error;

    /// Parse user input such as `"5.8"` (GHz)
    ///
    /// Surrounding whitespace is ignored. Anything that is not a positive
    /// number is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let ghz = s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidFrequency(s.to_string()))?;

        Self::from_ghz(ghz).map_err(|_| Error::InvalidFrequency(s.to_string()))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} GHz", self.0)
    }
}
