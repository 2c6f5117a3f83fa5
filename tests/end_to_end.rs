use float_eq::assert_float_eq;
use rstest::rstest;
#[allow(unused)] use pretty_assertions::{assert_eq, assert_ne};

use ellitomo::{reconstruct, Error, Reconstruction, ReconstructionGrid, Resolution, Shape};

fn resolution(num_theta: usize, num_t: usize, num_phi: usize, num_xy: usize) -> Resolution {
    Resolution::new(num_theta, num_t, num_phi, num_xy).unwrap()
}

fn all_values(image: &ReconstructionGrid) -> Vec<f64> {
    image.data.iter().copied().collect()
}

// A shape much smaller than the spacing of the sub-angle samples is never hit
// by any sampling curve, so it leaves no trace at all.
#[test]
fn near_point_ellipse_is_invisible() {
    let shape = Shape::circle((0.0, 0.0), 0.001).unwrap();
    let image = reconstruct(shape, resolution(16, 40, 40, 5)).unwrap();
    assert_eq!(image.dims(), (6, 6));
    assert!(all_values(&image).iter().all(|&v| v == 0.0));
}

#[test]
fn shape_outside_acquisition_region_is_invisible() {
    let shape = Shape::ellipse((10.0, 10.0), (0.5, 0.25)).unwrap();
    let image = reconstruct(shape, resolution(8, 20, 20, 4)).unwrap();
    assert!(all_values(&image).iter().all(|&v| v == 0.0));
}

#[test]
fn full_domain_rectangle() {
    let shape = Shape::rectangle((-0.5, 0.5), (-0.5, 0.5)).unwrap();
    let image = reconstruct(shape, resolution(8, 20, 20, 4)).unwrap();
    assert_eq!(image.dims(), (5, 5));
    assert_eq!(image.extent(), [-0.5, 0.5, -0.5, 0.5]);
    assert!(all_values(&image).iter().all(|v| v.is_finite()));
    assert!(image.max() > image.min());
}

// The corners come out brighter than the centre
#[rstest]
//     pixel   expected
#[case([0, 0], 169.52080411913477)]
#[case([0, 1], 162.96715449726503)]
#[case([0, 2],   5.507049786388808)]
#[case([0, 3], 166.3865567553826 )]
#[case([0, 4], 176.9292383897521 )]
#[case([2, 2], 141.88384509943882)]
#[case([1, 1], -46.24034323321009)]
#[case([4, 2],  -9.29735681524508)]
fn full_domain_rectangle_reference_values(#[case] pixel: [usize; 2], #[case] expected: f64) {
    let shape = Shape::rectangle((-0.5, 0.5), (-0.5, 0.5)).unwrap();
    let image = reconstruct(shape, resolution(8, 20, 20, 4)).unwrap();
    assert_float_eq!(image[pixel], expected, rmax <= 1e-6);
}

#[test]
fn centred_disc_is_mirror_symmetric() {
    let shape = Shape::circle((0.0, 0.0), 0.2).unwrap();
    let image = reconstruct(shape, resolution(32, 60, 120, 4)).unwrap();
    let (rows, cols) = image.dims();
    for r in 0..rows {
        for c in 0..cols {
            let here = image[[r, c]];
            assert_float_eq!(here, image[[r, cols - 1 - c]], abs <= 1e-6);
            assert_float_eq!(here, image[[rows - 1 - r, c]], abs <= 1e-6);
            assert_float_eq!(here, image[[c, r]]               , abs <= 1e-6);
        }
    }
}

#[rstest]
//     pixel   expected
#[case([2, 2], 107.72374961221874)]
#[case([0, 0], -24.483856794459058)]
#[case([1, 2],   6.563842040874666)]
#[case([0, 1], -10.122708003378502)]
fn centred_disc_reference_values(#[case] pixel: [usize; 2], #[case] expected: f64) {
    let shape = Shape::circle((0.0, 0.0), 0.2).unwrap();
    let image = reconstruct(shape, resolution(32, 60, 120, 4)).unwrap();
    assert_float_eq!(image[pixel], expected, rmax <= 1e-6);
}

#[test]
fn phases_run_separately_match_run() {
    let shape = Shape::ellipse((0.1, -0.05), (0.2, 0.1)).unwrap();
    let reco = Reconstruction::new(shape, resolution(12, 30, 30, 6));
    let grid = reco.sampling_grid().unwrap();
    let sinogram = reco.acquire(&grid);
    let stepwise = reco.back_project(&grid, &sinogram).unwrap();
    let direct = reco.run().unwrap();
    assert_eq!(all_values(&stepwise), all_values(&direct));
}

// The far corners of the image need radius labels up to 1 + sqrt(2), so too
// few radius labels leave them without a derivative to interpolate.
#[rstest]
//     num_t  theta                index  max_index
#[case(4,     0.0,                 2.0,   1)]
#[case(6,     5.497787143782138,   4.0,   3)]
fn too_few_radius_labels_fail_at_corner(
    #[case] num_t: usize,
    #[case] expected_theta: f64,
    #[case] expected_index: f64,
    #[case] expected_max: i64,
) {
    let shape = Shape::rectangle((-0.5, 0.5), (-0.5, 0.5)).unwrap();
    match reconstruct(shape, resolution(8, num_t, 20, 4)) {
        Err(Error::IndexOutOfRange { pixel, x, y, theta, index, max_index, .. }) => {
            assert_eq!(pixel, [0, 0]);
            assert_eq!((x, y), (-0.5, 0.5));
            assert_float_eq!(theta, expected_theta, abs <= 1e-12);
            assert_eq!((index, max_index), (expected_index, expected_max));
        }
        other => panic!("expected an indexing fault, got {other:?}"),
    }
}

#[test]
fn enough_radius_labels_cover_corners() {
    let shape = Shape::rectangle((-0.5, 0.5), (-0.5, 0.5)).unwrap();
    assert!(reconstruct(shape, resolution(8, 7, 20, 4)).is_ok());
}

#[test]
fn raw_output_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("reconstruction.raw");
    let shape = Shape::circle((0.0, 0.0), 0.2)?;
    let image = reconstruct(shape, resolution(16, 40, 40, 4))?;
    image.write_to_raw_file(&path)?;
    let read = ReconstructionGrid::from_raw_file(&path, 4)?;
    assert_eq!(all_values(&read), all_values(&image));
    Ok(())
}
