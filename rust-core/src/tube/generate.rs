use log::info;
use serde::{Deserialize, Serialize};

use crate::config::TubeConfig;
use crate::error::TubeGenError;
use crate::interfaces::Dimension;
use crate::lattice::{Ribbon, Tube};
use crate::tube::tube_gen::TubeGen;

/// A generated structure in either embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Structure {
    Ribbon(Ribbon),
    Tube(Tube),
}

impl Structure {
    pub fn dimension(&self) -> Dimension {
        match self {
            Structure::Ribbon(_) => Dimension::_2D,
            Structure::Tube(_) => Dimension::_3D,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Structure::Ribbon(lattice) => &lattice.name,
            Structure::Tube(lattice) => &lattice.name,
        }
    }

    pub fn comment(&self) -> &str {
        match self {
            Structure::Ribbon(lattice) => &lattice.comment,
            Structure::Tube(lattice) => &lattice.comment,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Structure::Ribbon(lattice) => lattice.name = name.into(),
            Structure::Tube(lattice) => lattice.name = name.into(),
        }
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        match self {
            Structure::Ribbon(lattice) => lattice.comment = comment.into(),
            Structure::Tube(lattice) => lattice.comment = comment.into(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Structure::Ribbon(lattice) => lattice.len(),
            Structure::Tube(lattice) => lattice.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_ribbon(&self) -> Option<&Ribbon> {
        match self {
            Structure::Ribbon(lattice) => Some(lattice),
            Structure::Tube(_) => None,
        }
    }

    pub fn as_tube(&self) -> Option<&Tube> {
        match self {
            Structure::Tube(lattice) => Some(lattice),
            Structure::Ribbon(_) => None,
        }
    }
}

impl TubeConfig {
    /// Check every parameter before any generation work starts.
    pub fn validate(&self) -> Result<(), TubeGenError> {
        if self.chirality.n == 0 && self.chirality.m == 0 {
            return Err(TubeGenError::InvalidChirality { n: 0, m: 0 });
        }
        if !(self.spacing > 0.0 && self.spacing.is_finite()) {
            return Err(TubeGenError::InvalidSpacing(self.spacing));
        }
        if self.length == 0 {
            return Err(TubeGenError::InvalidLength(self.length));
        }
        Ok(())
    }
}

/// Generate a ribbon or tube as described by `config`.
///
/// A non-empty `name` or `comment` in the configuration replaces the generated
/// metadata.
pub fn generate(config: &TubeConfig) -> Result<Structure, TubeGenError> {
    config.validate()?;

    let generator = TubeGen::new(config.chirality, config.spacing)?;
    info!(
        "Generating {} unit cells of chirality {} ({} atoms per cell), bc_ch = {}, bc_t = {}, embedding {}",
        config.length,
        config.chirality,
        generator.n_atoms_ucell(),
        config.bc_ch,
        config.bc_t,
        config.embedding
    );

    let ribbon = generator.make_ribbon(config.length, config.bc_ch, config.bc_t)?;
    let mut structure = match config.embedding {
        Dimension::_2D => Structure::Ribbon(ribbon),
        Dimension::_3D => Structure::Tube(generator.roll_tube(&ribbon)),
    };

    if !config.name.is_empty() {
        structure.set_name(config.name.as_str());
    }
    if !config.comment.is_empty() {
        structure.set_comment(config.comment.as_str());
    }

    Ok(structure)
}
