use std::f64::consts::PI;
use std::fmt;

use log::debug;
use nalgebra::Vector2;

use crate::error::TubeGenError;
use crate::tube::chirality::Chirality;

/// Generator for carbon nanotubes of arbitrary chirality.
///
/// Symbols follow Saito, Dresselhaus & Dresselhaus, *Physical Properties of
/// Carbon Nanotubes*: `Ch` is the chiral vector around the circumference, `T`
/// the translation vector along the tube axis and `R` the symmetry vector that
/// generates every atom of a unit cell.
///
/// A ribbon is built with [`TubeGen::make_ribbon`]; its length is given in unit
/// cells of the unrolled tube, so a single cell can hold many hexagons. A tube
/// is obtained by rolling a ribbon with [`TubeGen::roll_tube`].
///
/// All derived vectors are computed once in [`TubeGen::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct TubeGen {
    chirality: Chirality,
    spacing: f64,
    n_hex_ucell: usize,
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    chiral_vector: Vector2<f64>,
    translation_lat: (i64, i64),
    translation_vector: Vector2<f64>,
    symmetry_lat: (i64, i64),
    symmetry_vector: Vector2<f64>,
}

impl TubeGen {
    /// Construct a generator for the given chirality and lattice spacing.
    ///
    /// # Errors
    /// * [`TubeGenError::InvalidSpacing`] for non-positive or non-finite spacing.
    /// * [`TubeGenError::InvalidChirality`] when `gcd(2m+n, 2n+m)` vanishes.
    /// * [`TubeGenError::SymmetryVectorNotFound`] if no symmetry vector exists
    ///   within the unit cell; this is an internal inconsistency.
    pub fn new(chirality: Chirality, spacing: f64) -> Result<Self, TubeGenError> {
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(TubeGenError::InvalidSpacing(spacing));
        }

        let n = i64::from(chirality.n);
        let m = i64::from(chirality.m);

        // 1) Translation vector in the lattice basis
        let d_r = gcd(2 * m + n, 2 * n + m);
        if d_r == 0 {
            return Err(TubeGenError::InvalidChirality { n, m });
        }
        let translation_lat = ((2 * m + n) / d_r, -(2 * n + m) / d_r);
        let n_hex_ucell = (2 * (n * n + m * m + n * m) / d_r) as usize;

        // 2) Physical vectors
        let (a1, a2) = unit_vectors(spacing);
        let chiral_vector = a1 * n as f64 + a2 * m as f64;
        let translation_vector =
            a1 * translation_lat.0 as f64 + a2 * translation_lat.1 as f64;

        // 3) Symmetry vector, searched within one unit cell's worth of atoms
        let symmetry_lat = find_symmetry_vector(translation_lat, 2 * n_hex_ucell as i64)
            .ok_or(TubeGenError::SymmetryVectorNotFound {
                n: chirality.n,
                m: chirality.m,
            })?;
        let symmetry_vector = a1 * symmetry_lat.0 as f64 + a2 * symmetry_lat.1 as f64;

        debug!(
            "TubeGen {}: T = {:?}, R = {:?}, {} hexagons per unit cell",
            chirality, translation_lat, symmetry_lat, n_hex_ucell
        );

        Ok(TubeGen {
            chirality,
            spacing,
            n_hex_ucell,
            a1,
            a2,
            chiral_vector,
            translation_lat,
            translation_vector,
            symmetry_lat,
            symmetry_vector,
        })
    }

    pub fn chirality(&self) -> Chirality {
        self.chirality
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Number of hexagons per unit cell.
    pub fn n_hex_ucell(&self) -> usize {
        self.n_hex_ucell
    }

    /// Number of atoms per unit cell.
    pub fn n_atoms_ucell(&self) -> usize {
        2 * self.n_hex_ucell
    }

    pub fn circumference(&self) -> f64 {
        self.chiral_vector.norm()
    }

    pub fn diameter(&self) -> f64 {
        self.circumference() / PI
    }

    pub fn radius(&self) -> f64 {
        self.diameter() / 2.0
    }

    /// The two lattice basis vectors `a1`, `a2` in the plane.
    pub fn unit_vectors(&self) -> (Vector2<f64>, Vector2<f64>) {
        (self.a1, self.a2)
    }

    /// Chiral vector `Ch` in the physical basis.
    pub fn chiral_vector(&self) -> Vector2<f64> {
        self.chiral_vector
    }

    /// Translation vector `T` in the lattice basis spanned by the unit vectors.
    pub fn translation_vector_lat_basis(&self) -> (i64, i64) {
        self.translation_lat
    }

    /// Translation vector `T` in the physical basis.
    pub fn translation_vector(&self) -> Vector2<f64> {
        self.translation_vector
    }

    /// Length of one unit cell along the tube axis.
    pub fn translation_length(&self) -> f64 {
        self.translation_vector.norm()
    }

    /// Symmetry vector `R = p a1 + q a2` as `(p, q)`.
    pub fn symmetry_vector_lat_basis(&self) -> (i64, i64) {
        self.symmetry_lat
    }

    /// Symmetry vector `R` in the physical basis.
    pub fn symmetry_vector(&self) -> Vector2<f64> {
        self.symmetry_vector
    }

    /// Vector from an even site to one of its odd neighbours.
    pub(crate) fn even_odd_shift(&self) -> Vector2<f64> {
        (self.a1 + self.a2) / 3.0
    }

    pub(crate) fn unit_chiral_direction(&self) -> Vector2<f64> {
        self.chiral_vector / self.circumference()
    }

    pub(crate) fn unit_translation_direction(&self) -> Vector2<f64> {
        self.translation_vector / self.translation_length()
    }
}

impl fmt::Display for TubeGen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a1, a2) = self.unit_vectors();
        let ch = self.chiral_vector();
        let t = self.translation_vector();
        let r = self.symmetry_vector();

        writeln!(f, "## TubeGen ##")?;
        writeln!(f, "Chirality:           ({}, {})", self.chirality.n, self.chirality.m)?;
        writeln!(f, "Hexes per unit cell: {}", self.n_hex_ucell())?;
        writeln!(f, "Atoms per unit cell: {}", self.n_atoms_ucell())?;
        writeln!(f, "Circumference:       {}", self.circumference())?;
        writeln!(f, "Diameter:            {}", self.diameter())?;
        writeln!(f, "Unit vectors:        ({}, {}), ({}, {})", a1.x, a1.y, a2.x, a2.y)?;
        writeln!(f, "Chiral vector:       ({}, {})", ch.x, ch.y)?;
        writeln!(f, "Translation Vector:  ({}, {})", t.x, t.y)?;
        write!(f, "Symmetry Vector:     ({}, {})", r.x, r.y)
    }
}

/// Honeycomb basis vectors for the given spacing.
pub fn unit_vectors(spacing: f64) -> (Vector2<f64>, Vector2<f64>) {
    let half_sqrt3 = 3.0_f64.sqrt() / 2.0;
    (
        Vector2::new(1.5, half_sqrt3) * spacing,
        Vector2::new(1.5, -half_sqrt3) * spacing,
    )
}

/// Smallest `p` in `1..=max_p` with integer `q` such that `t1 q - t2 p = 1`.
///
/// `t1` is positive for every non-degenerate chirality. The bound is never
/// widened: running out of candidates is reported as `None`.
pub fn find_symmetry_vector((t1, t2): (i64, i64), max_p: i64) -> Option<(i64, i64)> {
    if t1 == 0 {
        return None;
    }
    (1..=max_p).find_map(|p| {
        let numerator = 1 + p * t2;
        (numerator % t1 == 0).then(|| (p, numerator / t1))
    })
}

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
