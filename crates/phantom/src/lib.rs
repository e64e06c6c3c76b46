//! Rasterisation of 3D analytic ellipsoid phantoms
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod ellipsoid;
mod error;
mod grid;
mod io;
mod preset;
mod rotation;
mod volume;

pub mod raster;
pub mod vtk;

// inline important the phantom-related modules for a nice public API
#[doc(inline)]
pub use ellipsoid::{validate_model, Ellipsoid};

#[doc(inline)]
pub use grid::{normalised_axis, Grid};

#[doc(inline)]
pub use raster::{rasterize, Phantom, Rasterizer, RasterizerBuilder};

#[doc(inline)]
pub use rotation::{rotation_matrix, rotation_matrix_deg};

#[doc(inline)]
pub use volume::Volume;

#[doc(inline)]
pub use preset::Preset;

#[doc(inline)]
pub use io::{read_model, read_model_csv, read_model_json, write_model_json};

#[doc(inline)]
pub use error::{Error, Result};
