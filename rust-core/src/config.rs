// Constants and run configuration

use serde::{Deserialize, Serialize};

use crate::interfaces::{BoundaryCondition, Dimension};
use crate::tube::Chirality;

// Tolerances
pub const SITE_POSITION_TOLERANCE: f64 = 1e-6; // Relative to the lattice spacing, for spatial lookups
pub const GEOMETRY_TOLERANCE: f64 = 1e-10; // For identities between derived vectors

// Defaults mirrored by the command line front end
pub const DEFAULT_SPACING: f64 = 1.0;

/// Everything needed to generate one ribbon or tube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeConfig {
    pub chirality: Chirality,
    /// Number of unit cells along the translation vector.
    pub length: usize,
    #[serde(default)]
    pub bc_ch: BoundaryCondition,
    #[serde(default)]
    pub bc_t: BoundaryCondition,
    #[serde(default = "default_embedding")]
    pub embedding: Dimension,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    /// Overrides the generated name when non-empty.
    #[serde(default)]
    pub name: String,
    /// Overrides the generated comment when non-empty.
    #[serde(default)]
    pub comment: String,
}

impl TubeConfig {
    pub fn new(chirality: Chirality, length: usize) -> Self {
        TubeConfig {
            chirality,
            length,
            bc_ch: BoundaryCondition::default(),
            bc_t: BoundaryCondition::default(),
            embedding: default_embedding(),
            spacing: DEFAULT_SPACING,
            name: String::new(),
            comment: String::new(),
        }
    }

    pub fn with_boundary_conditions(mut self, bc_ch: BoundaryCondition, bc_t: BoundaryCondition) -> Self {
        self.bc_ch = bc_ch;
        self.bc_t = bc_t;
        self
    }

    pub fn with_embedding(mut self, embedding: Dimension) -> Self {
        self.embedding = embedding;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }
}

fn default_embedding() -> Dimension {
    Dimension::_3D
}

fn default_spacing() -> f64 {
    DEFAULT_SPACING
}
