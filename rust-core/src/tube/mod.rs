// Tube module: Carbon nanotube and nanoribbon generation
// This module derives the chirality vectors, builds a periodic unit cell, stitches ribbons and rolls tubes

// ======================== MODULE DECLARATIONS ========================
pub mod chirality;
pub mod generate;
pub mod ribbon;
pub mod rolling;
pub mod tube_gen;
pub mod unit_cell;

mod _tests_scenarios;
mod _tests_ribbon;

// ======================== CHIRALITY & VECTOR ALGEBRA ========================
pub use chirality::Chirality; // struct - chiral indices (n, m), parsed from "n,m"

pub use tube_gen::{
    TubeGen,              // struct - generator holding all chirality-derived vectors
    find_symmetry_vector, // fn(t_lat: (i64, i64), max_p: i64) -> Option<(i64, i64)> - bounded search for (p, q)
    gcd,                  // fn(a: i64, b: i64) -> i64 - greatest common divisor
    unit_vectors,         // fn(spacing: f64) -> (Vector2<f64>, Vector2<f64>) - honeycomb basis a1, a2
};
// TubeGen impl methods:
//   new(chirality: Chirality, spacing: f64) -> Result<Self, TubeGenError> - derives all vectors
//   n_hex_ucell / n_atoms_ucell -> usize                        - hexagons / atoms per unit cell
//   circumference / diameter / radius -> f64                    - tube geometry
//   unit_vectors -> (Vector2<f64>, Vector2<f64>)                - a1, a2
//   chiral_vector / translation_vector / symmetry_vector -> Vector2<f64> - Ch, T, R (physical basis)
//   translation_vector_lat_basis / symmetry_vector_lat_basis -> (i64, i64) - T, R (lattice basis)
//   make_ucell(&self) -> UnitCell                               - periodically connected unit cell
//   make_ribbon(&self, n_ucells, bc_ch, bc_t) -> Result<Ribbon, TubeGenError> - stitched 2D ribbon
//   roll_tube(&self, ribbon: &Ribbon) -> Tube                   - 3D cylindrical embedding
//   Display                                                     - "## TubeGen ##" summary

// ======================== UNIT CELL ========================
pub use unit_cell::{
    CellBond,                  // struct - cell-local bond with Ch/T seam crossings
    NEAREST_NEIGHBOUR_HOPPING, // const - hopping strength of every bond
    UnitCell,                  // struct - unit cell lattice plus per-bond crossings
};

// ======================== GENERATION ========================
pub use generate::{
    Structure, // enum - Ribbon or Tube
    generate,  // fn(config: &TubeConfig) -> Result<Structure, TubeGenError> - full pipeline
};
