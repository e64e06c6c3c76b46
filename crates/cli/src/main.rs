//! Command line wrapper for generating 3D ellipsoid phantoms

mod error;

// crate modules
use crate::error::Result;

// phantoms modules
use phantoms_phantom::vtk::{write_vtk, PhantomToVtk, VtkFormat};
use phantoms_phantom::{read_model, write_model_json, Ellipsoid, Preset, Rasterizer};

// standard library
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

// external crates
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, error, info};

/// Generate a 3D analytic phantom from a set of ellipsoids
///
/// Ellipsoids come from either a named preset or a custom model file. Every
/// ellipsoid adds its amplitude to the voxels it contains on a normalised
/// [-1, 1] cubic grid, and the result is written as a VTK rectilinear grid.
#[derive(Parser, Debug)]
#[command(name = "phantom3d", version, about)]
struct Cli {
    /// Named ellipsoid table (shepp-logan, modified-shepp-logan, yu-ye-wang)
    #[arg(short, long, value_name = "NAME", value_parser = parse_preset)]
    #[arg(conflicts_with = "model")]
    preset: Option<Preset>,

    /// Custom model file (.json or .csv)
    #[arg(short, long, value_name = "PATH")]
    model: Option<PathBuf>,

    /// Number of voxels along each axis
    #[arg(short = 'n', long, value_name = "N", default_value_t = 128)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Rasterise on a single thread
    #[arg(long)]
    serial: bool,

    /// Output file path, the extension is set by the format
    #[arg(short, long, value_name = "PATH", default_value = "phantom")]
    output: PathBuf,

    /// VTK output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Xml)]
    format: OutputFormat,

    /// Also write the ellipsoids used to a JSON file
    #[arg(long, value_name = "PATH")]
    save_model: Option<PathBuf>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,
}

/// VTK file formats available from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// XML rectilinear grid (.vtr)
    Xml,
    /// Legacy ASCII (.vtk)
    Ascii,
    /// Legacy big endian binary (.vtk)
    Binary,
}

impl From<OutputFormat> for VtkFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xml => VtkFormat::Xml,
            OutputFormat::Ascii => VtkFormat::LegacyAscii,
            OutputFormat::Binary => VtkFormat::LegacyBinary,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (title, model) = load_model(&cli)?;

    let rasterizer = Rasterizer::builder()
        .grid_size(cli.size as usize)
        .parallel(!cli.serial)
        .build();

    let start = Instant::now();
    let phantom = rasterizer.rasterize(&model)?;
    info!("Rasterised {title} in {:.2?}", start.elapsed());
    debug!("{phantom}");

    if let Some(path) = &cli.save_model {
        info!("Writing model to {}", path.display());
        write_model_json(phantom.ellipsoids(), path)?;
    }

    let vtk = PhantomToVtk::builder()
        .title(format!("{title} {n}x{n}x{n}", n = cli.size))
        .build()
        .convert(phantom.volume());

    write_vtk(vtk, &cli.output, cli.format.into())?;
    Ok(())
}

/// Ellipsoids from the model file if given, otherwise a preset
fn load_model(cli: &Cli) -> Result<(String, Vec<Ellipsoid>)> {
    if let Some(path) = &cli.model {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Custom model".to_string());
        return Ok((title, read_model(path)?));
    }

    let preset = cli.preset.unwrap_or_default();
    info!("Using {preset} preset");
    Ok((preset.to_string(), preset.ellipsoids()))
}

fn parse_preset(name: &str) -> core::result::Result<Preset, String> {
    name.parse::<Preset>().map_err(|e| e.to_string())
}

fn init_logging(cli: &Cli) -> Result<()> {
    stderrlog::new()
        .module(module_path!())
        .module("phantoms_phantom")
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .init()?;
    Ok(())
}
