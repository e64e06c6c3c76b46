// standard library
use std::ops::RangeInclusive;

// internal modules
use crate::grid::Grid;
use crate::volume::Volume;
use crate::vtk::builder::PhantomToVtkBuilder;

// external crates
use log::debug;
use vtkio::model::{
    Attribute, Attributes, ByteOrder, Coordinates, DataArray, DataSet, ElementType, Extent,
    IOBuffer, RangeExtent, RectilinearGridPiece, Version, Vtk,
};

/// Convert phantom volumes to vtk formats for plotting
///
/// Volumes are written as a rectilinear grid where every voxel is a cell. Cell
/// boundaries sit halfway between voxel centres, so the outer cells extend
/// half a voxel beyond `[-1, 1]`.
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented and recommended.
///
/// ```rust
/// # use phantoms_phantom::vtk::PhantomToVtk;
/// # use phantoms_phantom::{rasterize, Preset};
/// let phantom = rasterize(&Preset::SheppLogan.ellipsoids(), 8).unwrap();
///
/// let vtk = PhantomToVtk::builder()
///     .title("Shepp-Logan")
///     .build()
///     .convert(phantom.volume());
///
/// assert_eq!(vtk.title, "Shepp-Logan");
/// ```
///
/// # Formatting
///
/// The byte ordering is important for binary file compatability with
/// plotting software. ParaView does not care, but Visit only likes big
/// endian. This is the default for convenience.
#[derive(Debug, Clone, PartialEq)]
pub struct PhantomToVtk {
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
    /// Title written to the file header
    pub title: String,
    /// Name of the cell data array
    pub array_name: String,
}

// Public API
impl PhantomToVtk {
    /// Start with the default configuration
    pub fn new() -> PhantomToVtk {
        Default::default()
    }

    /// Get an instance of the [PhantomToVtkBuilder]
    pub fn builder() -> PhantomToVtkBuilder {
        PhantomToVtkBuilder::default()
    }

    /// Convert a [Volume] to a Vtk object
    pub fn convert(&self, volume: &Volume) -> Vtk {
        debug!("Converting {} voxels to vtk", volume.len());
        Vtk {
            version: Version::Auto,
            title: self.title.clone(),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(RectilinearGridPiece {
                extent: Self::extent(volume.grid()),
                coords: Self::coordinates(volume.grid()),
                data: self.collect_attributes(volume),
            }),
        }
    }
}

impl Default for PhantomToVtk {
    fn default() -> Self {
        PhantomToVtkBuilder::default().build()
    }
}

impl PhantomToVtk {
    /// Number of cells in each extent of the rectilinear grid
    fn extent(grid: &Grid) -> Extent {
        let n = grid.size() as i32;
        let range_ext: RangeExtent = [
            RangeInclusive::new(0, n),
            RangeInclusive::new(0, n),
            RangeInclusive::new(0, n),
        ];
        Extent::Ranges(range_ext)
    }

    /// Cell boundaries are the same on every axis
    fn coordinates(grid: &Grid) -> Coordinates {
        let edges = cell_edges(grid);
        Coordinates {
            x: IOBuffer::F64(edges.clone()),
            y: IOBuffer::F64(edges.clone()),
            z: IOBuffer::F64(edges),
        }
    }

    /// Voxel values are already in the x-fastest order vtk expects
    fn collect_attributes(&self, volume: &Volume) -> Attributes {
        let cell_data = DataArray {
            name: self.array_name.clone(),
            elem: ElementType::Scalars {
                num_comp: 1,
                lookup_table: None,
            },
            data: IOBuffer::F64(volume.values().to_vec()),
        };

        let mut attributes = Attributes::new();
        attributes.cell.push(Attribute::DataArray(cell_data));
        attributes
    }
}

/// The `n + 1` cell boundaries around the voxel centres of an axis
fn cell_edges(grid: &Grid) -> Vec<f64> {
    let half = grid.spacing() / 2.0;
    let axis = grid.axis();
    axis.iter()
        .map(|c| c - half)
        .chain(axis.last().map(|c| c + half))
        .collect()
}
