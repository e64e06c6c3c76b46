//! Named ellipsoid tables for the classic 3D head phantoms

// crate modules
use crate::ellipsoid::Ellipsoid;
use crate::error::{Error, Result};

// standard library
use std::str::FromStr;

/// Geometry shared by both Shepp-Logan variants
///
/// Columns follow the usual record order `A a b c x0 y0 z0 phi theta psi`,
/// with the amplitude column filled in per variant.
#[rustfmt::skip]
const SHEPP_LOGAN_GEOMETRY: [[f64; 9]; 10] = [
    //  a       b      c      x0      y0      z0     phi   theta   psi
    [0.6900, 0.920, 0.810,  0.00,  0.0000,  0.00,   0.0,  0.0,  0.0],
    [0.6624, 0.874, 0.780,  0.00, -0.0184,  0.00,   0.0,  0.0,  0.0],
    [0.1100, 0.310, 0.220,  0.22,  0.0000,  0.00, -18.0,  0.0, 10.0],
    [0.1600, 0.410, 0.280, -0.22,  0.0000,  0.00,  18.0,  0.0, 10.0],
    [0.2100, 0.250, 0.410,  0.00,  0.3500, -0.15,   0.0,  0.0,  0.0],
    [0.0460, 0.046, 0.050,  0.00,  0.1000,  0.25,   0.0,  0.0,  0.0],
    [0.0460, 0.046, 0.050,  0.00, -0.1000,  0.25,   0.0,  0.0,  0.0],
    [0.0460, 0.023, 0.050, -0.08, -0.6050,  0.00,   0.0,  0.0,  0.0],
    [0.0230, 0.023, 0.020,  0.00, -0.6060,  0.00,   0.0,  0.0,  0.0],
    [0.0230, 0.046, 0.020,  0.06, -0.6050,  0.00,   0.0,  0.0,  0.0],
];

/// Original Shepp-Logan amplitudes, very low contrast between soft tissues
const SHEPP_LOGAN_AMPLITUDES: [f64; 10] =
    [1.0, -0.98, -0.02, -0.02, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01];

/// Toft's contrast-enhanced amplitudes
const MODIFIED_SHEPP_LOGAN_AMPLITUDES: [f64; 10] =
    [1.0, -0.8, -0.2, -0.2, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1];

/// Yu, Ye and Wang phantom for spiral cone-beam CT
#[rustfmt::skip]
const YU_YE_WANG: [[f64; 10]; 10] = [
    //  A     a       b      c      x0      y0      z0     phi  theta  psi
    [ 1.0, 0.6900, 0.920, 0.900,  0.00,  0.000,  0.000,   0.0, 0.0, 0.0],
    [-0.8, 0.6624, 0.874, 0.880,  0.00,  0.000,  0.000,   0.0, 0.0, 0.0],
    [-0.2, 0.4100, 0.160, 0.210, -0.22,  0.000, -0.250, 108.0, 0.0, 0.0],
    [-0.2, 0.3100, 0.110, 0.220,  0.22,  0.000, -0.250,  72.0, 0.0, 0.0],
    [ 0.2, 0.2100, 0.250, 0.500,  0.00,  0.350, -0.250,   0.0, 0.0, 0.0],
    [ 0.2, 0.0460, 0.046, 0.046,  0.00,  0.100, -0.250,   0.0, 0.0, 0.0],
    [ 0.1, 0.0460, 0.023, 0.020, -0.08, -0.650, -0.250,   0.0, 0.0, 0.0],
    [ 0.1, 0.0460, 0.023, 0.020,  0.06, -0.650, -0.250,  90.0, 0.0, 0.0],
    [ 0.2, 0.0560, 0.040, 0.100,  0.06, -0.105,  0.625,  90.0, 0.0, 0.0],
    [-0.2, 0.0560, 0.056, 0.100,  0.00,  0.100,  0.625,   0.0, 0.0, 0.0],
];

/// Predefined 3D head phantoms
///
/// These are fixed ellipsoid tables that can be used in place of a custom
/// model. The rasteriser does not care where a model comes from.
///
/// ```rust
/// # use phantoms_phantom::Preset;
/// let preset: Preset = "shepp-logan".parse().unwrap();
/// assert_eq!(preset, Preset::SheppLogan);
/// assert_eq!(preset.ellipsoids().len(), 10);
///
/// // The contrast enhanced variant is the default
/// assert_eq!(Preset::default(), Preset::ModifiedSheppLogan);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Original Shepp-Logan head phantom extended to 3D
    SheppLogan,
    /// Shepp-Logan geometry with higher contrast amplitudes (Toft)
    #[default]
    ModifiedSheppLogan,
    /// Yu-Ye-Wang phantom for variable radius spiral cone-beam CT
    YuYeWang,
}

impl Preset {
    /// Every available preset
    pub const ALL: [Preset; 3] = [
        Preset::SheppLogan,
        Preset::ModifiedSheppLogan,
        Preset::YuYeWang,
    ];

    /// Full name i.e. 'Shepp-Logan'
    pub fn long_name(&self) -> &str {
        match self {
            Preset::SheppLogan => "Shepp-Logan",
            Preset::ModifiedSheppLogan => "Modified Shepp-Logan",
            Preset::YuYeWang => "Yu-Ye-Wang",
        }
    }

    /// Name used for parsing i.e. 'shepp-logan'
    pub fn short_name(&self) -> &str {
        match self {
            Preset::SheppLogan => "shepp-logan",
            Preset::ModifiedSheppLogan => "modified-shepp-logan",
            Preset::YuYeWang => "yu-ye-wang",
        }
    }

    /// The ordered ellipsoid table for this phantom
    pub fn ellipsoids(&self) -> Vec<Ellipsoid> {
        match self {
            Preset::SheppLogan => shepp_logan_family(&SHEPP_LOGAN_AMPLITUDES),
            Preset::ModifiedSheppLogan => shepp_logan_family(&MODIFIED_SHEPP_LOGAN_AMPLITUDES),
            Preset::YuYeWang => YU_YE_WANG.iter().copied().map(Ellipsoid::from_row).collect(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    /// Case-insensitive, with '-', '_' or ' ' separators
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase().replace(['_', ' '], "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.short_name() == name)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

impl From<Preset> for Vec<Ellipsoid> {
    fn from(preset: Preset) -> Self {
        preset.ellipsoids()
    }
}

fn shepp_logan_family(amplitudes: &[f64; 10]) -> Vec<Ellipsoid> {
    amplitudes
        .iter()
        .zip(SHEPP_LOGAN_GEOMETRY.iter())
        .map(|(a, g)| {
            Ellipsoid::new(*a, [g[0], g[1], g[2]], [g[3], g[4], g[5]], [g[6], g[7], g[8]])
        })
        .collect()
}
