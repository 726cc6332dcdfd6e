use std::collections::HashMap;

use nalgebra::SVector;

/// Tolerant point lookup backed by a uniform hash grid.
///
/// The grid cell size equals the matching tolerance, so any stored point within
/// tolerance of a query lies in the query's cell or one of its direct
/// neighbours (3^D cells in total).
#[derive(Debug, Clone)]
pub struct SpatialIndex<T, const D: usize> {
    tolerance: f64,
    cells: HashMap<[i64; D], Vec<(SVector<f64, D>, T)>>,
}

impl<T, const D: usize> SpatialIndex<T, D> {
    /// # Panics
    /// Panics if `tolerance` is not a positive finite number.
    pub fn new(tolerance: f64) -> Self {
        assert!(
            tolerance > 0.0 && tolerance.is_finite(),
            "Tolerance must be positive and finite"
        );
        SpatialIndex {
            tolerance,
            cells: HashMap::new(),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn cell_of(&self, point: &SVector<f64, D>) -> [i64; D] {
        let mut cell = [0i64; D];
        for (c, x) in cell.iter_mut().zip(point.iter()) {
            *c = (x / self.tolerance).floor() as i64;
        }
        cell
    }

    /// Store `value` at `point`. Points closer than the tolerance are not merged.
    pub fn insert(&mut self, point: SVector<f64, D>, value: T) {
        let cell = self.cell_of(&point);
        self.cells.entry(cell).or_default().push((point, value));
    }

    /// Value stored within tolerance of `point`, if any.
    pub fn get(&self, point: &SVector<f64, D>) -> Option<&T> {
        self.get_point_and_value(point).map(|(_, value)| value)
    }

    /// Stored point and value within tolerance of `point`, if any.
    pub fn get_point_and_value(&self, point: &SVector<f64, D>) -> Option<(&SVector<f64, D>, &T)> {
        let centre = self.cell_of(point);
        let n_offsets = 3usize.pow(D as u32);

        for k in 0..n_offsets {
            // decode k as D base-3 digits, each mapped to an offset in {-1, 0, 1}
            let mut cell = centre;
            let mut rest = k;
            for c in cell.iter_mut() {
                *c += (rest % 3) as i64 - 1;
                rest /= 3;
            }

            if let Some(entries) = self.cells.get(&cell) {
                let hit = entries
                    .iter()
                    .find(|(stored, _)| (stored - point).norm() < self.tolerance);
                if let Some((stored, value)) = hit {
                    return Some((stored, value));
                }
            }
        }

        None
    }
}
