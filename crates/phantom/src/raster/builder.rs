// internal modules
use crate::raster::Rasterizer;

/// Builder implementation for [Rasterizer] configuration
///
/// The fields of [Rasterizer] are left public for direct use but the module
/// also implements a builder.
///
/// Any number of parameters can be set this way (including none), and
/// [build()](RasterizerBuilder::build) produces the final [Rasterizer].
///
/// ```rust
/// # use phantoms_phantom::{Rasterizer, Preset};
/// let rasterizer = Rasterizer::builder()
///     .grid_size(64)
///     .parallel(false)
///     .build();
///
/// let phantom = rasterizer.rasterize(&Preset::SheppLogan.ellipsoids()).unwrap();
/// assert_eq!(phantom.volume().grid_size(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct RasterizerBuilder {
    /// Number of voxels along each axis
    grid_size: usize,
    /// Split the volume across threads
    parallel: bool,
}

impl RasterizerBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [Rasterizer] type
    pub fn build(self) -> Rasterizer {
        Rasterizer {
            grid_size: self.grid_size,
            parallel: self.parallel,
        }
    }

    /// Number of voxels along each axis of the cubic grid
    ///
    /// Memory scales with the cube of this value at 8 bytes per voxel. A size
    /// of zero is accepted here but rejected at rasterisation time.
    pub fn grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Process z-slices of the volume in parallel
    ///
    /// Every voxel still sums ellipsoid contributions in model order, so the
    /// output is identical either way. Defaults to `true`.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for RasterizerBuilder {
    fn default() -> Self {
        Self {
            grid_size: 128,
            parallel: true,
        }
    }
}
