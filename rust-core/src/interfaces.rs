// Definitions that are used throughout all modules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TubeGenError;

// Enumeration for the embedding dimensionality of a generated structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "2d")]
    _2D,
    #[serde(rename = "3d")]
    _3D,
}

impl FromStr for Dimension {
    type Err = TubeGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2d" => Ok(Dimension::_2D),
            "3d" => Ok(Dimension::_3D),
            _ => Err(TubeGenError::UnknownEmbedding(s.to_string())),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::_2D => write!(f, "2d"),
            Dimension::_3D => write!(f, "3d"),
        }
    }
}

/// Boundary condition along one direction of the ribbon (Ch or T).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryCondition {
    #[default]
    Periodic,
    Open,
}

impl BoundaryCondition {
    pub fn is_periodic(&self) -> bool {
        matches!(self, BoundaryCondition::Periodic)
    }
}

impl FromStr for BoundaryCondition {
    type Err = TubeGenError;

    /// Accepts `periodic`/`p` and `open`/`o`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p" | "periodic" => Ok(BoundaryCondition::Periodic),
            "o" | "open" => Ok(BoundaryCondition::Open),
            _ => Err(TubeGenError::UnknownBoundaryCondition(s.to_string())),
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryCondition::Periodic => write!(f, "periodic"),
            BoundaryCondition::Open => write!(f, "open"),
        }
    }
}
