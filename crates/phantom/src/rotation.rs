//! Rotation matrices for placing ellipsoids

// external crates
use nalgebra::Matrix3;

/// Build the rotation matrix for a set of Euler angles in radians
///
/// The resulting matrix maps a world coordinate into the local (unrotated)
/// frame of an ellipsoid, i.e. `local = R * world`.
///
/// This is the composite used by the classic 3D Shepp-Logan generators and is
/// not one of the textbook intrinsic/extrinsic forms. Elements are built
/// explicitly to reproduce existing preset outputs exactly.
///
/// ```text
/// R[0][0] =  cos(psi)cos(phi) - cos(theta)sin(phi)sin(psi)
/// R[0][1] =  cos(psi)sin(phi) + cos(theta)cos(phi)sin(psi)
/// R[0][2] =  sin(psi)sin(theta)
/// R[1][0] = -sin(psi)cos(phi) - cos(theta)sin(phi)cos(psi)
/// R[1][1] = -sin(psi)sin(phi) + cos(theta)cos(phi)cos(psi)
/// R[1][2] =  cos(psi)sin(theta)
/// R[2][0] =  sin(theta)sin(phi)
/// R[2][1] = -sin(theta)cos(phi)
/// R[2][2] =  cos(theta)
/// ```
///
/// ```rust
/// # use phantoms_phantom::rotation_matrix;
/// # use nalgebra::Matrix3;
/// assert_eq!(rotation_matrix(0.0, 0.0, 0.0), Matrix3::identity());
/// ```
pub fn rotation_matrix(phi: f64, theta: f64, psi: f64) -> Matrix3<f64> {
    let (cphi, sphi) = (phi.cos(), phi.sin());
    let (ctheta, stheta) = (theta.cos(), theta.sin());
    let (cpsi, spsi) = (psi.cos(), psi.sin());

    // nalgebra takes the elements in row-major order here
    Matrix3::new(
        cpsi * cphi - ctheta * sphi * spsi,
        cpsi * sphi + ctheta * cphi * spsi,
        spsi * stheta,
        -spsi * cphi - ctheta * sphi * cpsi,
        -spsi * sphi + ctheta * cphi * cpsi,
        cpsi * stheta,
        stheta * sphi,
        -stheta * cphi,
        ctheta,
    )
}

/// Same as [rotation_matrix()] but for angles given in degrees
pub fn rotation_matrix_deg(phi: f64, theta: f64, psi: f64) -> Matrix3<f64> {
    rotation_matrix(phi.to_radians(), theta.to_radians(), psi.to_radians())
}
