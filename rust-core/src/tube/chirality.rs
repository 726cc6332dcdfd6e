use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TubeGenError;

/// Chiral indices `(n, m)` of a nanotube.
///
/// `(n, n)` is an armchair tube, `(n, 0)` a zigzag tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chirality {
    pub n: u32,
    pub m: u32,
}

impl Chirality {
    /// Create a chirality pair, rejecting the degenerate `(0, 0)`.
    pub fn new(n: u32, m: u32) -> Result<Self, TubeGenError> {
        if n == 0 && m == 0 {
            return Err(TubeGenError::InvalidChirality { n: 0, m: 0 });
        }
        Ok(Chirality { n, m })
    }

    pub fn is_armchair(&self) -> bool {
        self.n == self.m
    }

    pub fn is_zigzag(&self) -> bool {
        self.n == 0 || self.m == 0
    }
}

impl FromStr for Chirality {
    type Err = TubeGenError;

    /// Parses `"n,m"`, surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || TubeGenError::InvalidChiralityFormat(s.to_string());

        let (n, m) = s.split_once(',').ok_or_else(format_error)?;
        let n: i64 = n.trim().parse().map_err(|_| format_error())?;
        let m: i64 = m.trim().parse().map_err(|_| format_error())?;

        let invalid = || TubeGenError::InvalidChirality { n, m };
        let n = u32::try_from(n).map_err(|_| invalid())?;
        let m = u32::try_from(m).map_err(|_| invalid())?;
        Chirality::new(n, m)
    }
}

impl fmt::Display for Chirality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.n, self.m)
    }
}
