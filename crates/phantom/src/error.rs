//! Result and Error types for phantoms-phantom

/// Type alias for `Result<T, phantom::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `phantoms-phantom` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Failure writing VTK formats
    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    /// Failure to (de)serialise a JSON model
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Failure to read a CSV model
    #[error("failed to read csv record")]
    CsvError(#[from] csv::Error),

    /// Voxels per axis must be at least 1, with a total count that fits in memory
    #[error("invalid grid size {0}, expected at least 1 and an addressable n^3 volume")]
    InvalidGridSize(usize),

    /// Non-positive semi-axis or a non-finite ellipsoid field
    #[error("invalid {field} for ellipsoid {index} (found {value})")]
    InvalidEllipsoidParameter {
        index: usize,
        field: &'static str,
        value: f64,
    },

    /// Model file contained no ellipsoid records
    #[error("no ellipsoids found in model")]
    EmptyModel,

    /// Record of the wrong length or with unparsable values
    #[error("failed to parse ellipsoid record \"{0}\"")]
    ParseError(String),

    /// Name does not match any known preset table
    #[error("unknown phantom preset \"{0}\"")]
    UnknownPreset(String),

    /// Model files are only read from json or csv
    #[error("unsupported model file format \"{0}\"")]
    UnsupportedModelFormat(String),
}
