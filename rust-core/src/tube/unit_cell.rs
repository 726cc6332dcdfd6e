use log::{debug, warn};
use nalgebra::Vector2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SITE_POSITION_TOLERANCE;
use crate::lattice::{Ribbon, Site, SpatialIndex};
use crate::tube::tube_gen::TubeGen;

/// Hopping strength assigned to every nearest-neighbour bond.
pub const NEAREST_NEIGHBOUR_HOPPING: f64 = 1.0;

/// Padding offsets in units of `Ch` and `T`.
const PADDING: [i8; 3] = [0, 1, -1];

/// A bond of a unit-cell site under fully periodic boundary conditions.
///
/// `cross_ch` and `cross_t` are -1, 0 or +1 and tell whether the bond leaves the
/// cell through its own circumferential or axial seam, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBond {
    /// Cell-local index of the bonded site.
    pub target: usize,
    pub hopping: f64,
    pub cross_ch: i8,
    pub cross_t: i8,
}

impl CellBond {
    pub fn crosses_boundary(&self) -> bool {
        self.cross_ch != 0 || self.cross_t != 0
    }
}

/// A site of the 3x3 padded tiling: which original site it copies and from
/// which periodic image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PaddedSite {
    cell_idx: usize,
    pad_ch: i8,
    pad_t: i8,
}

/// One periodically self-connected unit cell.
///
/// The lattice holds positions and cell-local bonds; `bonds[i]` carries the
/// seam crossings of site `i`'s bonds in the same order as its neighbours.
#[derive(Debug, Clone)]
pub struct UnitCell {
    lattice: Ribbon,
    bonds: Vec<Vec<CellBond>>,
}

impl UnitCell {
    pub fn lattice(&self) -> &Ribbon {
        &self.lattice
    }

    pub fn bonds(&self) -> &[Vec<CellBond>] {
        &self.bonds
    }

    pub fn len(&self) -> usize {
        self.lattice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lattice.is_empty()
    }
}

impl TubeGen {
    /// Create a single unit cell with all nearest neighbours connected under
    /// periodic boundary conditions in both directions.
    pub fn make_ucell(&self) -> UnitCell {
        let mut lattice = self.place_sites();
        let bonds = self.connect_sites(&lattice);

        for (site, site_bonds) in lattice.iter_mut().zip(&bonds) {
            site.set_bonds(site_bonds.iter().map(|bond| (bond.target, bond.hopping)));
        }

        debug!(
            "Unit cell {}: {} sites, {} seam bonds",
            self.chirality(),
            lattice.len(),
            bonds.iter().flatten().filter(|bond| bond.crosses_boundary()).count()
        );

        UnitCell { lattice, bonds }
    }

    /// Place the atoms of one unit cell at integer multiples of `R`.
    ///
    /// `i R` is projected onto `Ch` and `T` and reduced modulo their lengths so
    /// that it lands inside the cell. Even sites sit at `i R`, odd sites at
    /// `i R + (a1 + a2) / 3`.
    fn place_sites(&self) -> Ribbon {
        let ch = self.circumference();
        let t = self.translation_length();
        let u_ch = self.unit_chiral_direction();
        let u_t = self.unit_translation_direction();
        let r = self.symmetry_vector();
        let eo_shift = self.even_odd_shift();

        let reduce = |v: Vector2<f64>| {
            let psi = v.dot(&u_ch).rem_euclid(ch);
            let tau = v.dot(&u_t).rem_euclid(t);
            u_ch * psi + u_t * tau
        };

        let mut ucell = Ribbon::new(format!("Unit cell {}", self.chirality()));
        for i in 0..self.n_atoms_ucell() / 2 {
            let ir = r * i as f64;
            ucell.push(Site::new(2 * i, reduce(ir), true));
            ucell.push(Site::new(2 * i + 1, reduce(ir + eo_shift), false));
        }
        ucell
    }

    /// Surround the cell with its eight periodic images and index every copy
    /// by position.
    fn padded_lattice(&self, ucell: &Ribbon) -> SpatialIndex<PaddedSite, 2> {
        let ch = self.chiral_vector();
        let t = self.translation_vector();

        let mut padded = SpatialIndex::new(SITE_POSITION_TOLERANCE * self.spacing());
        for pad_ch in PADDING {
            for pad_t in PADDING {
                let shift = ch * f64::from(pad_ch) + t * f64::from(pad_t);
                for site in ucell {
                    padded.insert(
                        site.pos + shift,
                        PaddedSite {
                            cell_idx: site.idx,
                            pad_ch,
                            pad_t,
                        },
                    );
                }
            }
        }
        padded
    }

    /// Find the nearest-neighbour bonds of every site in the cell.
    fn connect_sites(&self, ucell: &Ribbon) -> Vec<Vec<CellBond>> {
        let padded = self.padded_lattice(ucell);

        // three shifts from a site to its nearest neighbours
        let (a1, a2) = self.unit_vectors();
        let shift0 = self.even_odd_shift();
        let shifts = [shift0, shift0 - a1, shift0 - a2];

        #[cfg(feature = "parallel")]
        let bonds = ucell
            .sites
            .par_iter()
            .map(|site| site_bonds(site, &shifts, &padded))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let bonds = ucell
            .iter()
            .map(|site| site_bonds(site, &shifts, &padded))
            .collect();

        bonds
    }
}

fn site_bonds(
    site: &Site<2>,
    shifts: &[Vector2<f64>; 3],
    padded: &SpatialIndex<PaddedSite, 2>,
) -> Vec<CellBond> {
    shifts
        .iter()
        .filter_map(|shift| {
            // odd sites see the mirror image of the even environment
            let candidate = if site.even { site.pos + shift } else { site.pos - shift };

            let Some(neighbour) = padded.get(&candidate) else {
                warn!(
                    "No neighbour of site {} at ({}, {}), leaving it under-coordinated",
                    site.idx, candidate.x, candidate.y
                );
                return None;
            };

            Some(CellBond {
                target: neighbour.cell_idx,
                hopping: NEAREST_NEIGHBOUR_HOPPING,
                cross_ch: neighbour.pad_ch,
                cross_t: neighbour.pad_t,
            })
        })
        .collect()
}
