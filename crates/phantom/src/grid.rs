//! Module for the normalised cubic voxel grid

// crate modules
use crate::error::{Error, Result};

// external crates
use itertools::iproduct;
use nalgebra::Vector3;

/// A cubic lattice of `size`³ voxels spanning `[-1, 1]` on every axis
///
/// Voxel centres along each axis are placed at
///
/// ```text
/// axis[i] = (i - (n-1)/2) / ((n-1)/2)     for i in 0..n
/// ```
///
/// which is undefined for a single voxel. A grid of size 1 therefore places its
/// only voxel at the origin.
///
/// Voxels are indexed as `(i, j, k)` for the `(x, y, z)` axes, and flattened
/// with `x` varying fastest:
///
/// ```text
/// index = i + j*n + k*n*n
/// ```
///
/// ```rust
/// # use phantoms_phantom::Grid;
/// let grid = Grid::new(5).unwrap();
/// assert_eq!(grid.axis(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
/// assert_eq!(grid.index(1, 2, 3), 1 + 2 * 5 + 3 * 25);
/// assert_eq!(grid.ijk(66), (1, 3, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    axis: Vec<f64>,
}

impl Grid {
    /// Build the grid for `size` voxels along each axis
    ///
    /// Fails with [Error::InvalidGridSize] for a size of zero, or one where
    /// the `size`³ voxel count does not fit in a `usize`.
    pub fn new(size: usize) -> Result<Self> {
        let voxels = size
            .checked_mul(size)
            .and_then(|plane| plane.checked_mul(size));

        if size == 0 || voxels.is_none() {
            return Err(Error::InvalidGridSize(size));
        }

        Ok(Self {
            size,
            axis: normalised_axis(size),
        })
    }

    /// Number of voxels along each axis
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of voxels
    pub fn len(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Always false, a grid holds at least one voxel
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Shape of the grid as `[n, n, n]`
    pub fn shape(&self) -> [usize; 3] {
        [self.size; 3]
    }

    /// Normalised voxel centres along one axis
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// Normalised spacing between voxel centres
    ///
    /// The single voxel of a size 1 grid covers the full `[-1, 1]` range.
    pub fn spacing(&self) -> f64 {
        match self.size {
            1 => 2.0,
            n => 2.0 / (n - 1) as f64,
        }
    }

    /// Flat index for the voxel at `(i, j, k)`
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.size + k * self.size * self.size
    }

    /// Find the `(i, j, k)` indices for a flat voxel index
    pub fn ijk(&self, index: usize) -> (usize, usize, usize) {
        let plane = self.size * self.size;
        let k = index / plane;
        let j = (index - k * plane) / self.size;
        let i = index - k * plane - j * self.size;
        (i, j, k)
    }

    /// Normalised world coordinate of the voxel at `(i, j, k)`
    pub fn coordinate(&self, i: usize, j: usize, k: usize) -> Vector3<f64> {
        Vector3::new(self.axis[i], self.axis[j], self.axis[k])
    }

    /// Iterate over every voxel coordinate in flat index order
    ///
    /// This is the full Cartesian product of the axis with itself, generated
    /// on the fly rather than stored.
    pub fn coordinates(&self) -> impl Iterator<Item = Vector3<f64>> + '_ {
        let n = self.size;
        iproduct!(0..n, 0..n, 0..n).map(move |(k, j, i)| self.coordinate(i, j, k))
    }
}

/// Normalised voxel centres for `n` voxels along an axis
///
/// ```rust
/// # use phantoms_phantom::normalised_axis;
/// assert_eq!(normalised_axis(3), vec![-1.0, 0.0, 1.0]);
/// assert_eq!(normalised_axis(1), vec![0.0]);
/// assert!(normalised_axis(0).is_empty());
/// ```
pub fn normalised_axis(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }

    let half = (n as f64 - 1.0) / 2.0;
    (0..n).map(|i| (i as f64 - half) / half).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_rejected() {
        assert!(matches!(Grid::new(0), Err(Error::InvalidGridSize(0))));
    }

    #[test]
    fn overflowing_size_rejected() {
        let size = 1 << 22;
        assert!(matches!(Grid::new(size), Err(Error::InvalidGridSize(n)) if n == size));
        assert!(matches!(
            Grid::new(usize::MAX),
            Err(Error::InvalidGridSize(usize::MAX))
        ));
    }

    #[test]
    fn single_voxel_at_origin() {
        let grid = Grid::new(1).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.coordinate(0, 0, 0), Vector3::zeros());
        assert!(grid.axis().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn even_size_is_symmetric() {
        let axis = normalised_axis(4);
        assert_eq!(axis.len(), 4);
        assert_eq!(axis[0], -1.0);
        assert_eq!(axis[3], 1.0);
        assert!((axis[1] + axis[2]).abs() < 1e-15);
        assert!((axis[1] + 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn index_round_trip() {
        let grid = Grid::new(7).unwrap();
        for idx in [0, 1, 6, 7, 48, 49, 200, 342] {
            let (i, j, k) = grid.ijk(idx);
            assert_eq!(grid.index(i, j, k), idx);
        }
    }

    #[test]
    fn coordinates_follow_flat_order() {
        let grid = Grid::new(3).unwrap();
        let coords = grid.coordinates().collect::<Vec<_>>();
        assert_eq!(coords.len(), 27);
        assert_eq!(coords[0], Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(coords[1], Vector3::new(0.0, -1.0, -1.0));
        assert_eq!(coords[3], Vector3::new(-1.0, 0.0, -1.0));
        assert_eq!(coords[9], Vector3::new(-1.0, -1.0, 0.0));
        assert_eq!(coords[26], Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn spacing() {
        assert_eq!(Grid::new(1).unwrap().spacing(), 2.0);
        assert_eq!(Grid::new(5).unwrap().spacing(), 0.5);
    }
}
