
//! Carbon nanotube structure generator
//!
//! This library builds nanoribbons and nanotubes of arbitrary chirality `(n, m)` on a
//! honeycomb lattice: atomic positions in 2D or 3D together with nearest-neighbour
//! bonds, ready for tight-binding style simulations.

pub mod config;
pub mod error;
pub mod interfaces;
pub mod lattice;
pub mod tube;

pub use config::TubeConfig;
pub use error::TubeGenError;
pub use interfaces::{BoundaryCondition, Dimension};
pub use lattice::{Lattice, Ribbon, Site, Tube};
pub use tube::{Chirality, Structure, TubeGen, generate};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, TubeGenError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
