//! Integration tests for phantom rasterisation

use phantoms_phantom::{
    rasterize, read_model, rotation_matrix, write_model_json, Ellipsoid, Error, Preset,
    Rasterizer,
};

use nalgebra::Matrix3;
use rstest::{fixture, rstest};

const TOL: f64 = 1e-12;

#[fixture]
fn unit_ball() -> Ellipsoid {
    Ellipsoid::new(1.0, [1.0, 1.0, 1.0], [0.0; 3], [0.0; 3])
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(8)]
#[case(13)]
fn output_shape(unit_ball: Ellipsoid, #[case] n: usize) {
    let phantom = rasterize(&[unit_ball], n).unwrap();
    assert_eq!(phantom.volume().shape(), [n, n, n]);
    assert_eq!(phantom.volume().len(), n * n * n);
}

#[rstest]
fn golden_unit_ball_5(unit_ball: Ellipsoid) {
    // axis is [-1, -0.5, 0, 0.5, 1], squares are 1, 0.25, 0
    let phantom = rasterize(&[unit_ball], 5).unwrap();
    let volume = phantom.volume();

    let mut inside = 0;
    for k in 0..5 {
        for j in 0..5 {
            for i in 0..5 {
                // any +/-1 coordinate needs the other two at 0, otherwise all
                // combinations of {-0.5, 0, 0.5} are within the ball
                let offsets = [i, j, k].map(|v| (v as i32 - 2).abs());
                let expected = if offsets.contains(&2) {
                    offsets.iter().filter(|&&v| v == 0).count() == 2
                } else {
                    true
                };

                let value = volume.get(i, j, k).unwrap();
                assert_eq!(value, if expected { 1.0 } else { 0.0 }, "voxel ({i},{j},{k})");
                inside += expected as usize;
            }
        }
    }

    assert_eq!(inside, 33);
    assert_eq!(volume.count_nonzero(), 33);
    assert_eq!(volume.get(4, 4, 4), Some(0.0));
    assert_eq!(volume.get(4, 2, 2), Some(1.0));
}

#[rstest]
#[case(0.25)]
#[case(0.5)]
#[case(0.75)]
fn axis_aligned_radius(#[case] r: f64) {
    let ball = Ellipsoid::new(1.0, [r, r, r], [0.0; 3], [0.0; 3]);
    let phantom = rasterize(&[ball], 9).unwrap();
    let volume = phantom.volume();

    // centre voxel always inside
    assert_eq!(volume.get(4, 4, 4), Some(1.0));

    // anything further than r along a single axis is outside
    let axis = volume.grid().axis().to_vec();
    for (idx, x) in axis.iter().enumerate() {
        let expected = if x.abs() <= r { 1.0 } else { 0.0 };
        assert_eq!(volume.get(idx, 4, 4), Some(expected));
        assert_eq!(volume.get(4, idx, 4), Some(expected));
        assert_eq!(volume.get(4, 4, idx), Some(expected));
    }
}

#[rstest]
fn boundary_is_included() {
    // the voxel at x = 0.5 sits exactly on the surface
    let ellipsoid = Ellipsoid::new(1.0, [0.5, 1.0, 1.0], [0.0; 3], [0.0; 3]);
    let phantom = rasterize(&[ellipsoid], 5).unwrap();
    assert_eq!(phantom.volume().get(3, 2, 2), Some(1.0));
    assert_eq!(phantom.volume().get(1, 2, 2), Some(1.0));
    assert_eq!(phantom.volume().get(4, 2, 2), Some(0.0));
}

#[rstest]
#[case(1.0, 2.0)]
#[case(0.7, -0.2)]
#[case(-0.98, 1.0)]
fn overlaps_are_additive(#[case] a1: f64, #[case] a2: f64) {
    let model = [
        Ellipsoid::new(a1, [0.7, 0.7, 0.7], [-0.2, 0.0, 0.0], [0.0; 3]),
        Ellipsoid::new(a2, [0.7, 0.7, 0.7], [0.2, 0.0, 0.0], [0.0; 3]),
    ];
    let phantom = rasterize(&model, 11).unwrap();
    let volume = phantom.volume();

    // origin is in both, x = -0.8 only the first, x = 0.8 only the second
    assert_eq!(volume.get(5, 5, 5), Some(a1 + a2));
    assert_eq!(volume.get(1, 5, 5), Some(a1));
    assert_eq!(volume.get(9, 5, 5), Some(a2));
}

#[rstest]
fn single_voxel_grid() {
    let model = [
        Ellipsoid::new(1.0, [0.1, 0.1, 0.1], [0.0; 3], [0.0; 3]),
        Ellipsoid::new(0.5, [0.1, 0.1, 0.1], [0.5, 0.0, 0.0], [0.0; 3]),
    ];
    let phantom = rasterize(&model, 1).unwrap();
    let volume = phantom.volume();

    assert_eq!(volume.values(), &[1.0]);
    assert!(volume.values().iter().all(|v| !v.is_nan()));
}

#[rstest]
fn identity_rotation() {
    assert_eq!(rotation_matrix(0.0, 0.0, 0.0), Matrix3::identity());
}

#[rstest]
#[case([0.0, 1.0, 1.0])]
#[case([1.0, 0.0, 1.0])]
#[case([1.0, 1.0, 0.0])]
#[case([1.0, -0.1, 1.0])]
fn invalid_semi_axis(#[case] semi_axes: [f64; 3]) {
    let ellipsoid = Ellipsoid::new(1.0, semi_axes, [0.0; 3], [0.0; 3]);
    let result = rasterize(&[ellipsoid], 5);
    assert!(matches!(
        result,
        Err(Error::InvalidEllipsoidParameter { index: 0, .. })
    ));
}

#[rstest]
fn invalid_grid_size(unit_ball: Ellipsoid) {
    assert!(matches!(
        rasterize(&[unit_ball], 0),
        Err(Error::InvalidGridSize(0))
    ));
}

#[rstest]
fn grid_size_overflow() {
    assert!(matches!(
        rasterize(&[], 1 << 22),
        Err(Error::InvalidGridSize(4194304))
    ));
}

#[rstest]
fn rotated_theta_and_psi() {
    // theta = 90, psi = 90 sends local (x, y, z) to world (z, x, y), so the
    // 0.9 axis lies along world z, 0.5 along world x and 0.1 along world y
    let rotated = Ellipsoid::new(1.0, [0.9, 0.5, 0.1], [0.0; 3], [0.0, 90.0, 90.0]);
    let phantom = rasterize(&[rotated], 11).unwrap();
    let volume = phantom.volume();
    let axis = volume.grid().axis().to_vec();

    for k in 0..11 {
        for j in 0..11 {
            for i in 0..11 {
                let (x, y, z) = (axis[i], axis[j], axis[k]);
                let r = (x / 0.5).powi(2) + (y / 0.1).powi(2) + (z / 0.9).powi(2);
                let expected = if r <= 1.0 { 1.0 } else { 0.0 };
                assert_eq!(volume.get(i, j, k), Some(expected), "voxel ({i},{j},{k})");
            }
        }
    }

    // y = 0 plane only: 9 along x = 0, 9 each at x = +/-0.2, 5 each at x = +/-0.4
    assert_eq!(volume.count_nonzero(), 37);
    assert_eq!(volume.get(5, 5, 9), Some(1.0));
    assert_eq!(volume.get(9, 5, 5), Some(0.0));
    assert_eq!(volume.get(7, 5, 7), Some(1.0));
    assert_eq!(volume.get(7, 5, 8), Some(0.0));

    // the same shape without rotation needs the axes reordered to (x, y, z)
    let aligned = Ellipsoid::new(1.0, [0.5, 0.1, 0.9], [0.0; 3], [0.0; 3]);
    let reference = rasterize(&[aligned], 11).unwrap();
    assert_eq!(volume.values(), reference.volume().values());
}

#[rstest]
#[case(Preset::SheppLogan, 1.0 - 0.98)]
#[case(Preset::ModifiedSheppLogan, 1.0 - 0.8)]
#[case(Preset::YuYeWang, 1.0 - 0.8)]
fn preset_centre_values(#[case] preset: Preset, #[case] expected: f64) {
    let phantom = rasterize(&preset.ellipsoids(), 33).unwrap();
    let volume = phantom.volume();

    assert!((volume.get(16, 16, 16).unwrap() - expected).abs() < TOL);
    assert!((volume.maximum() - 1.0).abs() < TOL);
    assert_eq!(volume.get(0, 0, 0), Some(0.0));
    assert_eq!(phantom.ellipsoids(), &preset.ellipsoids()[..]);
}

#[rstest]
fn serial_and_parallel_agree() {
    let model = Preset::YuYeWang.ellipsoids();
    let serial = Rasterizer::builder()
        .grid_size(24)
        .parallel(false)
        .build()
        .rasterize(&model)
        .unwrap();
    let parallel = Rasterizer::builder()
        .grid_size(24)
        .parallel(true)
        .build()
        .rasterize(&model)
        .unwrap();

    assert_eq!(serial.volume().values(), parallel.volume().values());
}

#[rstest]
fn model_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    let model = Preset::ModifiedSheppLogan.ellipsoids();
    write_model_json(&model, &path).unwrap();
    let loaded = read_model(&path).unwrap();

    assert_eq!(loaded, model);
}

#[rstest]
fn unsupported_model_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.txt");
    std::fs::write(&path, "1,1,1,1,0,0,0,0,0,0\n").unwrap();

    assert!(matches!(
        read_model(&path),
        Err(Error::UnsupportedModelFormat(_))
    ));
}
