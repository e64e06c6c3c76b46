//! Reading and writing ellipsoid models
//!
//! Custom models can be stored as JSON or CSV, selected by file extension.
//!
//! ### JSON
//!
//! An array of ellipsoid objects.
//!
//! ```json
//! [
//!   {
//!     "amplitude": 1.0,
//!     "semi_axes": [0.69, 0.92, 0.81],
//!     "center": [0.0, 0.0, 0.0],
//!     "rotation": [0.0, 0.0, 0.0]
//!   }
//! ]
//! ```
//!
//! ### CSV
//!
//! One ellipsoid per row in the 10 value record order. A header row and `#`
//! comment lines are optional.
//!
//! ```text
//! # A, a, b, c, x0, y0, z0, phi, theta, psi
//! 1.0, 0.69, 0.92, 0.81, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0
//! -0.2, 0.11, 0.31, 0.22, 0.22, 0.0, 0.0, -18.0, 0.0, 10.0
//! ```

// crate modules
use crate::ellipsoid::{validate_model, Ellipsoid};
use crate::error::{Error, Result};

// phantoms modules
use phantoms_utils::f;

// standard library
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

// external crates
use itertools::Itertools;
use log::{debug, info};

/// Read an ellipsoid model from a `.json` or `.csv` file
///
/// Every ellipsoid is validated, and a file without any ellipsoids is an
/// [Error::EmptyModel].
///
/// ```rust, no_run
/// # use phantoms_phantom::{read_model, rasterize};
/// let model = read_model("./data/custom.csv").unwrap();
/// let phantom = rasterize(&model, 64).unwrap();
/// ```
pub fn read_model<P: AsRef<Path>>(path: P) -> Result<Vec<Ellipsoid>> {
    let path = path.as_ref();
    info!("Reading {:?}", path.file_name().unwrap_or(path.as_os_str()));

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let reader = BufReader::new(File::open(path)?);
    match extension.as_str() {
        "json" => read_model_json(reader),
        "csv" => read_model_csv(reader),
        _ => Err(Error::UnsupportedModelFormat(path.display().to_string())),
    }
}

/// Read a JSON array of ellipsoids from any reader
pub fn read_model_json<R: Read>(reader: R) -> Result<Vec<Ellipsoid>> {
    let model: Vec<Ellipsoid> = serde_json::from_reader(reader)?;
    checked(model)
}

/// Read 10 value ellipsoid records from any CSV reader
pub fn read_model_csv<R: Read>(reader: R) -> Result<Vec<Ellipsoid>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut model = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;

        // skip an optional header row
        if i == 0 && record.get(0).is_some_and(|v| v.parse::<f64>().is_err()) {
            debug!("Skipping csv header {:?}", record);
            continue;
        }

        model.push(Ellipsoid::from_row(parse_record(&record)?));
    }

    checked(model)
}

/// Write a model as pretty JSON
pub fn write_model_json<P: AsRef<Path>>(model: &[Ellipsoid], path: P) -> Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut f, model)?;
    f.write_all(b"\n")?;
    Ok(f.flush()?)
}

fn parse_record(record: &csv::StringRecord) -> Result<[f64; 10]> {
    let values = record
        .iter()
        .map(|v| v.parse::<f64>())
        .collect::<core::result::Result<Vec<f64>, _>>()
        .map_err(|_| Error::ParseError(record.iter().join(",")))?;

    values
        .try_into()
        .map_err(|v: Vec<f64>| Error::ParseError(f!("expected 10 values, found {}", v.len())))
}

fn checked(model: Vec<Ellipsoid>) -> Result<Vec<Ellipsoid>> {
    if model.is_empty() {
        return Err(Error::EmptyModel);
    }
    validate_model(&model)?;
    debug!("Loaded {} ellipsoids", model.len());
    Ok(model)
}
