// internal modules
use crate::vtk::convert::PhantomToVtk;
use crate::vtk::ByteOrder;

/// Builder implementation for PhantomToVtk configuration
///
/// The fields of [PhantomToVtk] are left public for direct use but the module
/// also implements a builder.
///
/// Chained setter calls can change any number of parameters (including none)
/// and [build()](PhantomToVtkBuilder::build) gives the final [PhantomToVtk].
///
/// ```rust
/// # use phantoms_phantom::vtk::{PhantomToVtk, ByteOrder};
/// let converter = PhantomToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .title("Yu-Ye-Wang 128^3")
///     .array_name("density")
///     .build();
///
/// assert_eq!(converter.array_name, "density");
/// ```
#[derive(Debug, Clone)]
pub struct PhantomToVtkBuilder {
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
    /// Title written to the file header
    title: String,
    /// Name of the cell data array
    array_name: String,
}

impl PhantomToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [PhantomToVtk] type
    pub fn build(self) -> PhantomToVtk {
        PhantomToVtk {
            byte_order: self.byte_order,
            title: self.title,
            array_name: self.array_name,
        }
    }

    /// Set the byte ordering
    ///
    /// Visit only reads big endian, even though most systems are little
    /// endian, so big endian is the default. ParaView does not care.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Title written to the file header
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Name of the cell data array holding voxel intensities
    pub fn array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = name.into();
        self
    }
}

impl Default for PhantomToVtkBuilder {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            title: "Ellipsoid phantom".to_string(),
            array_name: "intensity".to_string(),
        }
    }
}
