//! Module for the dense voxel volume produced by the rasteriser

// crate modules
use crate::grid::Grid;

// phantoms modules
use phantoms_utils::{f, SliceExt, ValueExt};

// external crates
use nalgebra::Vector3;

/// Dense `n`×`n`×`n` array of voxel intensities
///
/// Values are stored flat in the [Grid] ordering, with `x` varying fastest.
/// Use [get()](Volume::get) for `(i, j, k)` access or
/// [values()](Volume::values) for the raw buffer.
///
/// ### Memory use
///
/// Exactly **8 bytes** per voxel, so a 256³ phantom is 128 MiB.
///
/// ```rust
/// # use phantoms_phantom::{rasterize, Ellipsoid};
/// let ball = Ellipsoid::new(2.0, [0.5, 0.5, 0.5], [0.0; 3], [0.0; 3]);
/// let phantom = rasterize(&[ball], 9).unwrap();
/// let volume = phantom.volume();
///
/// assert_eq!(volume.shape(), [9, 9, 9]);
/// assert_eq!(volume.get(4, 4, 4), Some(2.0));
/// assert_eq!(volume.get(0, 0, 0), Some(0.0));
/// assert_eq!(volume.get(9, 0, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    grid: Grid,
    values: Vec<f64>,
}

impl Volume {
    /// A volume of zeros on the given grid
    pub fn zeros(grid: Grid) -> Self {
        let values = vec![0.0; grid.len()];
        Self { grid, values }
    }

    pub(crate) fn from_parts(grid: Grid, values: Vec<f64>) -> Self {
        debug_assert_eq!(grid.len(), values.len());
        Self { grid, values }
    }

    /// The grid the volume is defined on
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of voxels along each axis
    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// Shape of the volume as `[n, n, n]`
    pub fn shape(&self) -> [usize; 3] {
        self.grid.shape()
    }

    /// Total number of voxels
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True only for a volume with no voxels, which a valid grid never has
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flat voxel values in `x`-fastest order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the volume for the flat voxel values
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Flat index for the voxel at `(i, j, k)`
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        self.grid.index(i, j, k)
    }

    /// Find the `(i, j, k)` indices for a flat voxel index
    pub fn ijk(&self, index: usize) -> (usize, usize, usize) {
        self.grid.ijk(index)
    }

    /// Value at `(i, j, k)`, or `None` if out of bounds
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        let n = self.grid.size();
        if i >= n || j >= n || k >= n {
            return None;
        }
        self.values.get(self.index(i, j, k)).copied()
    }

    /// Normalised coordinate of the voxel centre at `(i, j, k)`
    pub fn coordinates(&self, i: usize, j: usize, k: usize) -> Vector3<f64> {
        self.grid.coordinate(i, j, k)
    }

    /// The `n`×`n` plane of values at a fixed `z` index, `x` fastest
    ///
    /// Returns `None` if `k` is outside of the grid.
    pub fn slice_z(&self, k: usize) -> Option<&[f64]> {
        let plane = self.grid.size() * self.grid.size();
        self.values.get(k * plane..(k + 1) * plane)
    }

    /// Smallest voxel value
    pub fn minimum(&self) -> f64 {
        self.values.try_min().unwrap_or(f64::NAN)
    }

    /// Largest voxel value
    pub fn maximum(&self) -> f64 {
        self.values.try_max().unwrap_or(f64::NAN)
    }

    /// Number of voxels with a non-zero value
    pub fn count_nonzero(&self) -> usize {
        self.values.iter().filter(|v| **v != 0.0).count()
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let n = self.grid.size();
        let mut s = "Volume {\n".to_string();
        s += &f!("    voxels: {} ({n}x{n}x{n})\n", self.len());
        s += &f!("    non-zero: {}\n", self.count_nonzero());
        s += &f!("    minimum: {}\n", self.minimum().sci(5, 2));
        s += &f!("    maximum: {}\n", self.maximum().sci(5, 2));
        s += "}";
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Volume {
        let grid = Grid::new(n).unwrap();
        let values = (0..grid.len()).map(|v| v as f64).collect();
        Volume::from_parts(grid, values)
    }

    #[test]
    fn zeros() {
        let volume = Volume::zeros(Grid::new(3).unwrap());
        assert_eq!(volume.len(), 27);
        assert_eq!(volume.count_nonzero(), 0);
        assert_eq!(volume.maximum(), 0.0);
    }

    #[test]
    fn indexing() {
        let volume = ramp(4);
        assert_eq!(volume.get(1, 0, 0), Some(1.0));
        assert_eq!(volume.get(0, 1, 0), Some(4.0));
        assert_eq!(volume.get(0, 0, 1), Some(16.0));
        assert_eq!(volume.get(3, 3, 3), Some(63.0));
        assert_eq!(volume.get(0, 4, 0), None);
    }

    #[test]
    fn planes() {
        let volume = ramp(3);
        assert_eq!(volume.slice_z(1).unwrap()[0], 9.0);
        assert_eq!(volume.slice_z(2).unwrap().len(), 9);
        assert!(volume.slice_z(3).is_none());
    }

    #[test]
    fn extremes() {
        let volume = ramp(2);
        assert_eq!(volume.minimum(), 0.0);
        assert_eq!(volume.maximum(), 7.0);
        assert_eq!(volume.count_nonzero(), 7);
    }
}
