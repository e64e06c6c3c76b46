//! Conversion of phantom volumes to VTK formats for plotting
//!
//! The [PhantomToVtk] converter turns a [Volume](crate::Volume) into a VTK
//! rectilinear grid with a single cell data array of voxel intensities.
//!
//! ```rust, no_run
//! # use phantoms_phantom::{rasterize, Preset};
//! # use phantoms_phantom::vtk::{phantom_to_vtk, write_vtk, VtkFormat};
//! let phantom = rasterize(&Preset::YuYeWang.ellipsoids(), 64).unwrap();
//!
//! let vtk = phantom_to_vtk(phantom.volume());
//! write_vtk(vtk, "yu_ye_wang", VtkFormat::Xml).unwrap();
//! ```

mod builder;
mod convert;

#[doc(inline)]
pub use builder::PhantomToVtkBuilder;

#[doc(inline)]
pub use convert::PhantomToVtk;

// re-exported for configuring the converter without a direct vtkio dependency
pub use vtkio::model::ByteOrder;

// crate modules
use crate::error::Result;
use crate::volume::Volume;

// standard library
use std::path::Path;

// external crates
use log::info;
use vtkio::model::Vtk;

/// Output file formats supported by [write_vtk()]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VtkFormat {
    /// Legacy ASCII `.vtk`
    LegacyAscii,
    /// Legacy big-endian binary `.vtk`
    LegacyBinary,
    /// XML rectilinear grid `.vtr`
    #[default]
    Xml,
}

impl VtkFormat {
    /// File extension used for the format
    pub fn extension(&self) -> &str {
        match self {
            VtkFormat::LegacyAscii | VtkFormat::LegacyBinary => "vtk",
            VtkFormat::Xml => "vtr",
        }
    }
}

/// Convert a volume to a Vtk object using the default converter
///
/// See [PhantomToVtk] for configuration options.
pub fn phantom_to_vtk(volume: &Volume) -> Vtk {
    PhantomToVtk::default().convert(volume)
}

/// Write a Vtk object to a file in the chosen format
///
/// The extension is replaced to match the format, so `"phantom"` becomes
/// `phantom.vtr` for the XML format.
pub fn write_vtk<P: AsRef<Path>>(vtk: Vtk, path: P, format: VtkFormat) -> Result<()> {
    let path = path.as_ref().with_extension(format.extension());
    info!("Writing {}", path.display());

    match format {
        VtkFormat::LegacyAscii => vtk.export_ascii(&path)?,
        VtkFormat::LegacyBinary => vtk.export_be(&path)?,
        VtkFormat::Xml => vtk.export(&path)?,
    }

    Ok(())
}
