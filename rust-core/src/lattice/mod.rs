// Lattice module: Site containers and spatial lookup used by the tube generator
// This module provides ordered site storage with bonds, translation and tolerant position lookup

// ======================== MODULE DECLARATIONS ========================
pub mod site;
pub mod spatial_index;


// ======================== SITE CONTAINERS ========================
pub use site::{
    Lattice, // struct - ordered sites plus name/comment, generic over dimension D
    Site,    // struct - atom with index, position, neighbours, hopping and sublattice tag
};
// Site impl methods:
//   new(idx: usize, pos: SVector<f64, D>, even: bool) -> Self    - creates an unconnected site
//   degree(&self) -> usize                                        - number of bonds
//   set_bonds(&mut self, bonds: impl IntoIterator<Item = (usize, f64)>) - replaces neighbours and hopping together
//   bonds(&self) -> impl Iterator<Item = (usize, f64)>            - (neighbour, hopping) pairs

// Lattice impl methods:
//   new(name) -> Self                                             - empty lattice
//   with_name(self, name) / with_comment(self, comment) -> Self   - metadata (builder pattern)
//   len / is_empty / push / get / iter / iter_mut                 - ordered storage
//   at(&self, pos: &SVector<f64, D>, tol: f64) -> Option<&Site<D>> - tolerant positional lookup (linear scan)
//   shifted(&self, shift: &SVector<f64, D>) -> Self               - copy translated by a vector
//   n_bonds / min_degree / max_degree                             - connectivity statistics

/// 2D structure: an unrolled tube.
pub type Ribbon = Lattice<2>;
/// 3D structure: a rolled tube.
pub type Tube = Lattice<3>;

// ======================== SPATIAL LOOKUP ========================
pub use spatial_index::SpatialIndex; // struct - hash grid for tolerant point -> value lookup
// SpatialIndex impl methods:
//   new(tolerance: f64) -> Self                                   - empty index, grid cell = tolerance
//   insert(&mut self, point: SVector<f64, D>, value: T)           - stores a value
//   get(&self, point: &SVector<f64, D>) -> Option<&T>             - value within tolerance of point
//   get_point_and_value(&self, point) -> Option<(&SVector, &T)>   - stored point and value
