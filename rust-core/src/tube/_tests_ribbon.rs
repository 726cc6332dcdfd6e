#[cfg(test)]
mod _tests_ribbon {
    use super::super::chirality::Chirality;
    use super::super::tube_gen::TubeGen;
    use crate::error::TubeGenError;
    use crate::interfaces::BoundaryCondition::{self, Open, Periodic};
    use crate::lattice::Ribbon;

    const TOL: f64 = 1e-8;

    const BOUNDARIES: [(BoundaryCondition, BoundaryCondition); 4] =
        [(Periodic, Periodic), (Periodic, Open), (Open, Periodic), (Open, Open)];

    // Helper function to create a generator with unit spacing
    fn create_tube(n: u32, m: u32) -> TubeGen {
        TubeGen::new(Chirality::new(n, m).unwrap(), 1.0).unwrap()
    }

    fn assert_symmetric(ribbon: &Ribbon) {
        for site in ribbon {
            for &j in &site.neighbours {
                let forward = site.neighbours.iter().filter(|&&k| k == j).count();
                let backward = ribbon.sites[j]
                    .neighbours
                    .iter()
                    .filter(|&&k| k == site.idx)
                    .count();
                assert_eq!(forward, backward, "bond {} -> {} is one-sided", site.idx, j);
            }
        }
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let result = create_tube(4, 4).make_ribbon(0, Periodic, Periodic);
        assert_eq!(result, Err(TubeGenError::InvalidLength(0)));
    }

    #[test]
    fn test_indices_are_dense_and_ordered() {
        let tube = create_tube(3, 1);
        let ribbon = tube.make_ribbon(3, Periodic, Open).unwrap();
        assert_eq!(ribbon.len(), 3 * tube.n_atoms_ucell());
        assert_eq!(ribbon.name, "Ribbon (3, 1)");
        for (i, site) in ribbon.iter().enumerate() {
            assert_eq!(site.idx, i);
            assert_eq!(site.even, i % 2 == 0);
        }
    }

    #[test]
    fn test_cells_are_translated_copies() {
        let tube = create_tube(4, 2);
        let ribbon = tube.make_ribbon(3, Periodic, Periodic).unwrap();
        let luc = tube.n_atoms_ucell();
        let t = tube.translation_vector();
        for k in 0..luc {
            for i in 1..3 {
                let expected = ribbon.sites[k].pos + t * i as f64;
                assert!((ribbon.sites[k + i * luc].pos - expected).norm() < TOL);
            }
        }
    }

    #[test]
    fn test_fully_periodic_ribbon_is_three_regular() {
        for (n, m) in [(1, 0), (2, 1), (4, 4), (5, 0), (4, 2), (7, 3)] {
            let tube = create_tube(n, m);
            for length in 1..=3 {
                let ribbon = tube.make_ribbon(length, Periodic, Periodic).unwrap();
                assert!(
                    ribbon.iter().all(|site| site.degree() == 3),
                    "({}, {}) x {} is not 3-regular",
                    n,
                    m,
                    length
                );
                assert_eq!(ribbon.n_bonds(), 3 * ribbon.len());
                assert_symmetric(&ribbon);
            }
        }
    }

    #[test]
    fn test_bonds_stay_in_range_and_aligned() {
        for (bc_ch, bc_t) in BOUNDARIES {
            let tube = create_tube(5, 2);
            let ribbon = tube.make_ribbon(2, bc_ch, bc_t).unwrap();
            for site in &ribbon {
                assert_eq!(site.neighbours.len(), site.hopping.len());
                assert!(site.degree() <= 3);
                assert!(site.neighbours.iter().all(|&j| j < ribbon.len()));
                assert!(site.neighbours.iter().all(|&j| ribbon.sites[j].even != site.even));
                assert!(site.hopping.iter().all(|&h| h == 1.0));
            }
            assert_symmetric(&ribbon);
        }
    }

    #[test]
    fn test_open_circumference_cuts_the_seam() {
        let tube = create_tube(4, 4);
        let ribbon = tube.make_ribbon(2, Open, Periodic).unwrap();
        assert!(ribbon.iter().any(|site| site.degree() < 3));
        assert!(ribbon.n_bonds() < 3 * ribbon.len());
        // both cells lose the same sites
        let luc = tube.n_atoms_ucell();
        for k in 0..luc {
            assert_eq!(ribbon.sites[k].degree(), ribbon.sites[k + luc].degree());
        }
    }

    #[test]
    fn test_open_axis_cuts_only_the_ends() {
        let tube = create_tube(5, 0);
        let luc = tube.n_atoms_ucell();
        let ribbon = tube.make_ribbon(3, Periodic, Open).unwrap();

        let first = &ribbon.sites[..luc];
        let middle = &ribbon.sites[luc..2 * luc];
        let last = &ribbon.sites[2 * luc..];
        assert!(first.iter().any(|site| site.degree() < 3));
        assert!(last.iter().any(|site| site.degree() < 3));
        assert!(middle.iter().all(|site| site.degree() == 3));
    }

    #[test]
    fn test_single_open_cell_has_no_axial_bonds() {
        let tube = create_tube(4, 4);
        let periodic = tube.make_ribbon(1, Periodic, Periodic).unwrap();
        let open = tube.make_ribbon(1, Periodic, Open).unwrap();
        let ucell = tube.make_ucell();
        let axial = ucell
            .bonds()
            .iter()
            .flatten()
            .filter(|bond| bond.cross_t != 0)
            .count();
        assert!(axial > 0);
        assert_eq!(open.n_bonds(), periodic.n_bonds() - axial);
    }

    #[test]
    fn test_open_ribbon_bonds_have_spacing_length() {
        // without any wrap every surviving bond is a real bond in the plane
        for (n, m) in [(4, 4), (5, 0), (3, 1)] {
            let ribbon = create_tube(n, m).make_ribbon(3, Open, Open).unwrap();
            for site in &ribbon {
                for &j in &site.neighbours {
                    let length = (ribbon.sites[j].pos - site.pos).norm();
                    assert!((length - 1.0).abs() < TOL, "bond {} -> {} has length {}", site.idx, j, length);
                }
            }
        }
    }

    #[test]
    fn test_periodic_axis_wraps_last_cell_to_first() {
        let tube = create_tube(5, 0);
        let luc = tube.n_atoms_ucell();
        let ribbon = tube.make_ribbon(3, Periodic, Periodic).unwrap();
        let wraps = ribbon.sites[2 * luc..]
            .iter()
            .flat_map(|site| site.neighbours.iter())
            .filter(|&&j| j < luc)
            .count();
        assert!(wraps > 0);
    }
}
