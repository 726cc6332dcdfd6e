use nalgebra::SVector;
use serde::{Deserialize, Serialize};

/// A single atom of a generated structure together with its bonds.
///
/// `neighbours` and `hopping` are index-aligned: bond `i` connects this site to
/// `neighbours[i]` with strength `hopping[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site<const D: usize> {
    /// Dense index within the owning lattice.
    pub idx: usize,
    /// Cartesian position.
    pub pos: SVector<f64, D>,
    pub neighbours: Vec<usize>,
    pub hopping: Vec<f64>,
    /// Sublattice tag of the bipartite honeycomb lattice.
    pub even: bool,
}

impl<const D: usize> Site<D> {
    /// Create an unconnected site.
    pub fn new(idx: usize, pos: SVector<f64, D>, even: bool) -> Self {
        Site {
            idx,
            pos,
            neighbours: Vec::new(),
            hopping: Vec::new(),
            even,
        }
    }

    /// Number of bonds leaving this site.
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Replace all bonds at once, keeping `neighbours` and `hopping` aligned.
    pub fn set_bonds(&mut self, bonds: impl IntoIterator<Item = (usize, f64)>) {
        let (neighbours, hopping) = bonds.into_iter().unzip();
        self.neighbours = neighbours;
        self.hopping = hopping;
    }

    /// Iterate over `(neighbour, hopping)` pairs.
    pub fn bonds(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.neighbours.iter().copied().zip(self.hopping.iter().copied())
    }
}

/// An ordered collection of sites with a name and a free-text comment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lattice<const D: usize> {
    pub name: String,
    pub comment: String,
    pub sites: Vec<Site<D>>,
}

impl<const D: usize> Lattice<D> {
    pub fn new(name: impl Into<String>) -> Self {
        Lattice {
            name: name.into(),
            comment: String::new(),
            sites: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn push(&mut self, site: Site<D>) {
        self.sites.push(site);
    }

    pub fn get(&self, idx: usize) -> Option<&Site<D>> {
        self.sites.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Site<D>> {
        self.sites.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Site<D>> {
        self.sites.iter_mut()
    }

    /// Find the first site within `tol` of `pos`.
    ///
    /// Linear scan; use [`SpatialIndex`](super::SpatialIndex) for repeated lookups.
    pub fn at(&self, pos: &SVector<f64, D>, tol: f64) -> Option<&Site<D>> {
        self.sites.iter().find(|site| (site.pos - pos).norm() < tol)
    }

    /// Copy of this lattice with every position translated by `shift`.
    /// Indices, bonds and metadata are unchanged.
    pub fn shifted(&self, shift: &SVector<f64, D>) -> Self {
        let mut shifted = self.clone();
        for site in shifted.sites.iter_mut() {
            site.pos += shift;
        }
        shifted
    }

    /// Total number of directed bonds (each undirected bond counts twice).
    pub fn n_bonds(&self) -> usize {
        self.sites.iter().map(Site::degree).sum()
    }

    pub fn min_degree(&self) -> Option<usize> {
        self.sites.iter().map(Site::degree).min()
    }

    pub fn max_degree(&self) -> Option<usize> {
        self.sites.iter().map(Site::degree).max()
    }
}

impl<'a, const D: usize> IntoIterator for &'a Lattice<D> {
    type Item = &'a Site<D>;
    type IntoIter = std::slice::Iter<'a, Site<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}
