use std::f64::consts::PI;

use log::debug;
use nalgebra::Vector3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::lattice::{Ribbon, Site, Tube};
use crate::tube::tube_gen::TubeGen;

impl TubeGen {
    /// Roll a 2D ribbon into a 3D nanotube.
    ///
    /// The ribbon is wrapped around the chiral vector `Ch`; the translation
    /// vector `T` becomes the tube axis (`z`). Indices, bonds and sublattice tags
    /// are copied unchanged.
    pub fn roll_tube(&self, ribbon: &Ribbon) -> Tube {
        let u_ch = self.unit_chiral_direction();
        let u_t = self.unit_translation_direction();
        let radius = self.radius();
        // turns the ribbon coordinate along Ch into an angle
        let angle_conversion = 2.0 * PI / self.circumference();

        let embed = |site: &Site<2>| {
            let phi = angle_conversion * site.pos.dot(&u_ch);
            let z = site.pos.dot(&u_t);
            Site {
                idx: site.idx,
                pos: Vector3::new(radius * phi.cos(), radius * phi.sin(), z),
                neighbours: site.neighbours.clone(),
                hopping: site.hopping.clone(),
                even: site.even,
            }
        };

        #[cfg(feature = "parallel")]
        let sites = ribbon.sites.par_iter().map(embed).collect();
        #[cfg(not(feature = "parallel"))]
        let sites = ribbon.iter().map(embed).collect();

        let tube = Tube {
            name: format!("Tube {}", self.chirality()),
            comment: ribbon.comment.clone(),
            sites,
        };
        debug!("{}: rolled {} sites onto radius {}", tube.name, tube.len(), radius);
        tube
    }
}
