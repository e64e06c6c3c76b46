// crate modules
use crate::ellipsoid::{validate_model, Ellipsoid, Placement};
use crate::error::Result;
use crate::grid::Grid;
use crate::raster::RasterizerBuilder;
use crate::volume::Volume;

// phantoms modules
use phantoms_utils::f;

// external crates
use log::{debug, trace, warn};
use nalgebra::Vector3;
use rayon::prelude::*;

/// Generate a phantom using the default configuration
///
/// Every ellipsoid in `model` is applied in order, adding its amplitude to
/// each voxel of the `grid_size`³ normalised grid that it contains.
///
/// Fails before any accumulation if `grid_size` is zero or if any ellipsoid
/// has a non-positive semi-axis or non-finite field. An empty model is valid
/// and gives a volume of zeros.
///
/// ```rust
/// # use phantoms_phantom::{rasterize, Ellipsoid};
/// let model = [
///     Ellipsoid::new(1.0, [0.8, 0.8, 0.8], [0.0; 3], [0.0; 3]),
///     Ellipsoid::new(0.5, [0.3, 0.3, 0.3], [0.0; 3], [0.0; 3]),
/// ];
///
/// let phantom = rasterize(&model, 11).unwrap();
///
/// // overlapping contributions stack
/// assert_eq!(phantom.volume().get(5, 5, 5), Some(1.5));
/// // the model used is echoed back
/// assert_eq!(phantom.ellipsoids(), &model);
/// ```
pub fn rasterize(model: &[Ellipsoid], grid_size: usize) -> Result<Phantom> {
    Rasterizer::builder()
        .grid_size(grid_size)
        .build()
        .rasterize(model)
}

/// Configurable ellipsoid rasteriser
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented and recommended (see
/// [RasterizerBuilder]).
///
/// ### Evaluation order
///
/// Rotation matrices are prepared once per ellipsoid, and voxel coordinates
/// are derived from their indices rather than stored. Each voxel then sums the
/// amplitudes of every ellipsoid containing it, in model order. This gives the
/// same floating point result as applying the ellipsoids one full-grid pass at
/// a time, with peak memory of just the output volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Rasterizer {
    /// Number of voxels along each axis
    pub grid_size: usize,
    /// Process z-slices in parallel
    pub parallel: bool,
}

impl Rasterizer {
    /// Start with the default configuration
    pub fn new() -> Rasterizer {
        Default::default()
    }

    /// Get an instance of the [RasterizerBuilder]
    pub fn builder() -> RasterizerBuilder {
        RasterizerBuilder::default()
    }

    /// Rasterise an ordered set of ellipsoids
    pub fn rasterize(&self, model: &[Ellipsoid]) -> Result<Phantom> {
        let grid = Grid::new(self.grid_size)?;
        validate_model(model)?;

        if model.is_empty() {
            warn!("No ellipsoids in model, phantom will be all zeros");
        }

        debug!(
            "Rasterising {} ellipsoids onto {n}x{n}x{n} grid ({})",
            model.len(),
            if self.parallel { "parallel" } else { "serial" },
            n = grid.size(),
        );

        let placements = model.iter().map(Placement::from).collect::<Vec<_>>();
        let mut values = vec![0.0; grid.len()];

        if self.parallel {
            let plane = grid.size() * grid.size();
            values
                .par_chunks_mut(plane)
                .enumerate()
                .for_each(|(k, slice)| accumulate_slice(&grid, &placements, k, slice));
        } else {
            for (value, point) in values.iter_mut().zip(grid.coordinates()) {
                *value = accumulate(&placements, &point);
            }
        }

        Ok(Phantom {
            volume: Volume::from_parts(grid, values),
            ellipsoids: model.to_vec(),
        })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        RasterizerBuilder::default().build()
    }
}

/// Fill the z-plane `k` with the sum of every containing ellipsoid
fn accumulate_slice(grid: &Grid, placements: &[Placement], k: usize, slice: &mut [f64]) {
    let n = grid.size();
    for (offset, value) in slice.iter_mut().enumerate() {
        let point = grid.coordinate(offset % n, offset / n, k);
        *value = accumulate(placements, &point);
    }
    trace!("Finished z-plane {k}");
}

/// Sum of amplitudes for every ellipsoid containing `point`, in model order
fn accumulate(placements: &[Placement], point: &Vector3<f64>) -> f64 {
    placements
        .iter()
        .filter(|p| p.contains(point))
        .fold(0.0, |total, p| total + p.amplitude)
}

/// Rasterised phantom volume and the model that produced it
///
/// The ellipsoids are echoed back unchanged so that callers can log or store
/// the exact parameters alongside the voxel data.
#[derive(Debug, Clone, PartialEq)]
pub struct Phantom {
    volume: Volume,
    ellipsoids: Vec<Ellipsoid>,
}

impl Phantom {
    /// The rasterised voxel data
    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// Ellipsoids used to generate the volume, in order
    pub fn ellipsoids(&self) -> &[Ellipsoid] {
        &self.ellipsoids
    }

    /// Split into the volume and model
    pub fn into_parts(self) -> (Volume, Vec<Ellipsoid>) {
        (self.volume, self.ellipsoids)
    }
}

impl std::fmt::Display for Phantom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("{}\n", self.volume);
        s += &f!(
            "{:>5}{:>13}{:>13}{:>13}{:>13}{:>13}{:>13}{:>13}{:>13}{:>13}{:>13}\n",
            "#", "A", "a", "b", "c", "x0", "y0", "z0", "phi", "theta", "psi"
        );
        for (i, e) in self.ellipsoids.iter().enumerate() {
            s += &f!("{i:>5}{e}\n");
        }
        write!(f, "{}", s.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn ball(amplitude: f64, r: f64, center: [f64; 3]) -> Ellipsoid {
        Ellipsoid::new(amplitude, [r, r, r], center, [0.0; 3])
    }

    #[test]
    fn zero_grid_size() {
        let result = rasterize(&[ball(1.0, 0.5, [0.0; 3])], 0);
        assert!(matches!(result, Err(Error::InvalidGridSize(0))));
    }

    #[test]
    fn invalid_ellipsoid_gives_no_output() {
        let mut bad = ball(1.0, 0.5, [0.0; 3]);
        bad.semi_axes[0] = 0.0;
        let result = rasterize(&[ball(1.0, 0.5, [0.0; 3]), bad], 5);
        assert!(matches!(
            result,
            Err(Error::InvalidEllipsoidParameter { index: 1, .. })
        ));
    }

    #[test]
    fn empty_model_is_zeros() {
        let phantom = rasterize(&[], 4).unwrap();
        assert_eq!(phantom.volume().len(), 64);
        assert_eq!(phantom.volume().count_nonzero(), 0);
        assert!(phantom.ellipsoids().is_empty());
    }

    #[test]
    fn outside_voxels_keep_accumulation() {
        // a small ball inside a large one must not reset the large one's voxels
        let model = [ball(1.0, 1.0, [0.0; 3]), ball(3.0, 0.1, [0.5, 0.5, 0.5])];
        let phantom = rasterize(&model, 5).unwrap();
        let v = phantom.volume();
        assert_eq!(v.get(2, 2, 2), Some(1.0));
        assert_eq!(v.get(3, 3, 3), Some(4.0));
    }

    #[test]
    fn serial_matches_parallel() {
        let model = [
            Ellipsoid::new(1.0, [0.69, 0.92, 0.81], [0.0; 3], [0.0; 3]),
            Ellipsoid::new(-0.8, [0.6624, 0.874, 0.78], [0.0, -0.0184, 0.0], [0.0; 3]),
            Ellipsoid::new(-0.2, [0.11, 0.31, 0.22], [0.22, 0.0, 0.0], [-18.0, 0.0, 10.0]),
            Ellipsoid::new(0.1, [0.21, 0.25, 0.41], [0.0, 0.35, -0.15], [0.0, 33.0, 0.0]),
        ];

        let serial = Rasterizer::builder()
            .grid_size(17)
            .parallel(false)
            .build()
            .rasterize(&model)
            .unwrap();

        let parallel = Rasterizer::builder()
            .grid_size(17)
            .parallel(true)
            .build()
            .rasterize(&model)
            .unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn matches_single_point_test() {
        let e = Ellipsoid::new(1.0, [0.7, 0.3, 0.5], [0.1, 0.0, -0.2], [30.0, 45.0, 60.0]);
        let phantom = rasterize(&[e], 9).unwrap();
        let v = phantom.volume();

        for idx in 0..v.len() {
            let (i, j, k) = v.ijk(idx);
            let p = v.coordinates(i, j, k);
            let expected = if e.contains(&[p.x, p.y, p.z]) { 1.0 } else { 0.0 };
            assert_eq!(v.values()[idx], expected);
        }
    }

    #[test]
    fn default_configuration() {
        let r = Rasterizer::new();
        assert_eq!(r.grid_size, 128);
        assert!(r.parallel);
    }
}
