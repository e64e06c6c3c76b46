//! Module for ellipsoid parameters and containment tests

// crate modules
use crate::error::{Error, Result};
use crate::rotation::rotation_matrix_deg;

// phantoms modules
use phantoms_utils::{f, ValueExt};

// external crates
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Representation of a single ellipsoid in a phantom model
///
/// Every ellipsoid adds its `amplitude` to the voxels it contains. A model is
/// just an ordered list of these, and overlapping ellipsoids stack.
///
/// All coordinates are in the normalised grid space, where the phantom spans
/// `[-1, 1]` along each axis regardless of the number of voxels.
///
/// ### Record layout
///
/// Ellipsoid tables are commonly written as rows of 10 values, and
/// [from_row()](Ellipsoid::from_row) / [to_row()](Ellipsoid::to_row) convert
/// to and from this order:
///
/// | Column | Field        | Description                          |
/// | ------ | ------------ | ------------------------------------ |
/// | 0      | amplitude    | Additive intensity                   |
/// | 1-3    | semi_axes    | (a, b, c) radii before rotation      |
/// | 4-6    | center       | (x0, y0, z0)                         |
/// | 7-9    | rotation     | (phi, theta, psi) Euler angles (deg) |
///
/// ```rust
/// # use phantoms_phantom::Ellipsoid;
/// let skull = Ellipsoid::from_row([1.0, 0.69, 0.92, 0.81, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
///
/// assert_eq!(skull.amplitude, 1.0);
/// assert_eq!(skull.semi_axes, [0.69, 0.92, 0.81]);
/// assert!(skull.contains(&[0.0, 0.0, 0.0]));
/// assert!(!skull.contains(&[0.0, 0.0, 0.9]));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Additive intensity contribution
    pub amplitude: f64,
    /// Radii (a, b, c) along the local x/y/z axes
    pub semi_axes: [f64; 3],
    /// Centre (x0, y0, z0) in normalised coordinates
    pub center: [f64; 3],
    /// Euler angles (phi, theta, psi) in degrees
    pub rotation: [f64; 3],
}

impl Ellipsoid {
    /// Names of each field in the 10 value record order
    pub const FIELDS: [&'static str; 10] = [
        "amplitude",
        "semi-axis a",
        "semi-axis b",
        "semi-axis c",
        "center x0",
        "center y0",
        "center z0",
        "rotation phi",
        "rotation theta",
        "rotation psi",
    ];

    /// Create a new ellipsoid
    pub fn new(amplitude: f64, semi_axes: [f64; 3], center: [f64; 3], rotation: [f64; 3]) -> Self {
        Self {
            amplitude,
            semi_axes,
            center,
            rotation,
        }
    }

    /// Build from a 10 value record `[A, a, b, c, x0, y0, z0, phi, theta, psi]`
    pub fn from_row(row: [f64; 10]) -> Self {
        Self {
            amplitude: row[0],
            semi_axes: [row[1], row[2], row[3]],
            center: [row[4], row[5], row[6]],
            rotation: [row[7], row[8], row[9]],
        }
    }

    /// Flatten to a 10 value record `[A, a, b, c, x0, y0, z0, phi, theta, psi]`
    pub fn to_row(&self) -> [f64; 10] {
        let [a, b, c] = self.semi_axes;
        let [x0, y0, z0] = self.center;
        let [phi, theta, psi] = self.rotation;
        [self.amplitude, a, b, c, x0, y0, z0, phi, theta, psi]
    }

    /// Check that the ellipsoid parameters are usable
    ///
    /// Every field must be finite and every semi-axis strictly positive,
    /// otherwise the containment test would divide by zero or match on
    /// `NaN`/`Inf`. The `index` is only used to identify the ellipsoid in the
    /// returned error.
    ///
    /// ```rust
    /// # use phantoms_phantom::{Ellipsoid, Error};
    /// let flat = Ellipsoid::new(1.0, [0.5, 0.0, 0.5], [0.0; 3], [0.0; 3]);
    /// assert!(matches!(
    ///     flat.validate(3),
    ///     Err(Error::InvalidEllipsoidParameter { index: 3, field: "semi-axis b", .. })
    /// ));
    /// ```
    pub fn validate(&self, index: usize) -> Result<()> {
        let row = self.to_row();

        if let Some((field, value)) = Self::FIELDS
            .iter()
            .zip(row.iter())
            .find(|(_, v)| !v.is_finite())
        {
            return Err(Error::InvalidEllipsoidParameter {
                index,
                field: *field,
                value: *value,
            });
        }

        if let Some((field, value)) = Self::FIELDS[1..4]
            .iter()
            .zip(self.semi_axes.iter())
            .find(|(_, v)| **v <= 0.0)
        {
            return Err(Error::InvalidEllipsoidParameter {
                index,
                field: *field,
                value: *value,
            });
        }

        Ok(())
    }

    /// Rotation matrix from the stored Euler angles (degrees)
    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        let [phi, theta, psi] = self.rotation;
        rotation_matrix_deg(phi, theta, psi)
    }

    /// Test whether a single world coordinate lies inside the ellipsoid
    ///
    /// The boundary is closed, so points exactly on the surface are inside.
    /// Rebuilds the rotation on every call, which is fine for spot checks but
    /// the rasteriser prepares it once per ellipsoid instead.
    ///
    /// Parameters are not checked here, see [validate()](Ellipsoid::validate).
    /// A zero semi-axis contains no points at all, a negative one behaves like
    /// its magnitude, and a NaN centre, axis or angle contains nothing.
    pub fn contains(&self, point: &[f64; 3]) -> bool {
        Placement::from(self).contains(&Vector3::from(*point))
    }
}

impl std::fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self
            .to_row()
            .iter()
            .map(|v| f!("{:>13}", v.sci(5, 2)))
            .collect::<String>();
        write!(f, "{s}")
    }
}

/// An ellipsoid with its rotation already resolved
///
/// Avoids rebuilding the same rotation matrix for every voxel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Placement {
    pub amplitude: f64,
    rotation: Matrix3<f64>,
    center: Vector3<f64>,
    semi_axes_sq: Vector3<f64>,
}

impl Placement {
    /// Closed containment test `sum((R*p - c)^2 / axes^2) <= 1`
    pub fn contains(&self, world: &Vector3<f64>) -> bool {
        let local = self.rotation * world - self.center;
        let sum = local.x * local.x / self.semi_axes_sq.x
            + local.y * local.y / self.semi_axes_sq.y
            + local.z * local.z / self.semi_axes_sq.z;
        sum <= 1.0
    }
}

impl From<&Ellipsoid> for Placement {
    fn from(ellipsoid: &Ellipsoid) -> Self {
        let [a, b, c] = ellipsoid.semi_axes;
        Self {
            amplitude: ellipsoid.amplitude,
            rotation: ellipsoid.rotation_matrix(),
            center: Vector3::from(ellipsoid.center),
            semi_axes_sq: Vector3::new(a * a, b * b, c * c),
        }
    }
}

/// Validate every ellipsoid in a model, failing on the first bad one
pub fn validate_model(model: &[Ellipsoid]) -> Result<()> {
    model
        .iter()
        .enumerate()
        .try_for_each(|(i, e)| e.validate(i))
}
