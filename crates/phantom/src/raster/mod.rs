//! Rasterisation of ellipsoid models onto the voxel grid
//!
//! The [Rasterizer] holds the configuration and does the work. For the common
//! case the free function [rasterize()] uses the default configuration with a
//! given grid size.
//!
//! ```rust
//! # use phantoms_phantom::{rasterize, Preset};
//! let phantom = rasterize(&Preset::ModifiedSheppLogan.ellipsoids(), 32).unwrap();
//! assert_eq!(phantom.volume().shape(), [32, 32, 32]);
//! ```

mod builder;
mod rasterizer;

#[doc(inline)]
pub use builder::RasterizerBuilder;

#[doc(inline)]
pub use rasterizer::{rasterize, Phantom, Rasterizer};
