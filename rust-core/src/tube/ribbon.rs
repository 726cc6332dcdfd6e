use log::debug;

use crate::error::TubeGenError;
use crate::interfaces::BoundaryCondition;
use crate::lattice::{Ribbon, Site};
use crate::tube::tube_gen::TubeGen;
use crate::tube::unit_cell::{CellBond, UnitCell};

impl TubeGen {
    /// Create a 2D nanoribbon of `n_ucells` unit cells stacked along `T`.
    ///
    /// `bc_ch` applies to the seam along the circumference, `bc_t` to the two
    /// ends of the ribbon along the tube axis.
    ///
    /// # Errors
    /// Returns [`TubeGenError::InvalidLength`] if `n_ucells` is zero.
    pub fn make_ribbon(
        &self,
        n_ucells: usize,
        bc_ch: BoundaryCondition,
        bc_t: BoundaryCondition,
    ) -> Result<Ribbon, TubeGenError> {
        if n_ucells == 0 {
            return Err(TubeGenError::InvalidLength(n_ucells));
        }

        let t = self.translation_vector();
        let ucell = self.make_ucell();
        let luc = ucell.len();

        // replicate unit cell along T
        let mut ribbon = Ribbon::new(format!("Ribbon {}", self.chirality()));
        ribbon.sites.reserve(n_ucells * luc);
        for i in 0..n_ucells {
            let shifted = ucell.lattice().shifted(&(t * i as f64));
            ribbon.sites.extend(shifted.sites.into_iter().map(|mut site| {
                site.idx += i * luc;
                site
            }));
        }

        sow_cells(&mut ribbon.sites, &ucell, n_ucells, bc_ch, bc_t);

        debug!(
            "{}: {} sites in {} cells (bc_ch = {}, bc_t = {}), {} directed bonds",
            ribbon.name,
            ribbon.len(),
            n_ucells,
            bc_ch,
            bc_t,
            ribbon.n_bonds()
        );

        Ok(ribbon)
    }
}

/// Stitch neighbouring unit cells together and apply the boundary conditions
/// in both directions.
///
/// `sites` holds `n_ucells` consecutive copies of `ucell`; the seam crossings
/// recorded in the unit cell decide where each bond ends up.
fn sow_cells(
    sites: &mut [Site<2>],
    ucell: &UnitCell,
    n_ucells: usize,
    bc_ch: BoundaryCondition,
    bc_t: BoundaryCondition,
) {
    let luc = ucell.len();
    for (cell, cell_sites) in sites.chunks_mut(luc).enumerate() {
        for (site, bonds) in cell_sites.iter_mut().zip(ucell.bonds()) {
            site.set_bonds(bonds.iter().filter_map(|bond| {
                resolve_bond(bond, cell, n_ucells, luc, bc_ch, bc_t)
                    .map(|target| (target, bond.hopping))
            }));
        }
    }
}

/// Global index of the site that `bond`, leaving a site in cell `cell`, connects
/// to, or `None` if the boundary conditions cut it.
fn resolve_bond(
    bond: &CellBond,
    cell: usize,
    n_ucells: usize,
    luc: usize,
    bc_ch: BoundaryCondition,
    bc_t: BoundaryCondition,
) -> Option<usize> {
    // a bond across the Ch seam only exists if the circumference is closed
    if bond.cross_ch != 0 && !bc_ch.is_periodic() {
        return None;
    }

    let target_cell = match bond.cross_t {
        0 => cell,
        1 if bc_t.is_periodic() || cell + 1 != n_ucells => (cell + 1) % n_ucells,
        -1 if bc_t.is_periodic() || cell != 0 => (cell + n_ucells - 1) % n_ucells,
        _ => return None,
    };

    Some(bond.target + target_cell * luc)
}
