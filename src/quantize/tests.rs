use super::*;
use crate::clusterer::{lloyd, maximin, Cluster, Palette};
use crate::error::QuantizeError;
use crate::raster::{Image, Rgb};
use crate::testutil::{gray_row, random_image};

#[test]
fn test_map_uses_exact_palette_colors() {
    let image = random_image(20, 20, 21);
    let palette = lloyd(&image, 6, 20).unwrap().palette;
    let centers = palette.centers();

    let out = map_image(&image, &palette).unwrap();

    assert!(out.same_dimensions(&image));
    for pixel in out.pixels() {
        assert!(centers.contains(pixel));
    }
}

#[test]
fn test_map_keeps_fractional_channels() {
    let image = gray_row(&[0.0, 10.0, 250.0]);
    let palette = Palette::from(vec![
        Cluster::new(Rgb::new(3.25, 3.25, 3.25)),
        Cluster::new(Rgb::new(249.5, 250.5, 251.0)),
    ]);

    let out = map_image(&image, &palette).unwrap();
    assert_eq!(out.pixels()[1], Rgb::new(3.25, 3.25, 3.25));
    assert_eq!(out.pixels()[2], Rgb::new(249.5, 250.5, 251.0));
}

#[test]
fn test_assign_follows_nearest_center() {
    let image = gray_row(&[0.0, 100.0, 140.0, 255.0]);
    let palette = Palette::from(vec![
        Cluster::new(Rgb::new(0.0, 0.0, 0.0)),
        Cluster::new(Rgb::new(128.0, 128.0, 128.0)),
        Cluster::new(Rgb::new(255.0, 255.0, 255.0)),
    ]);

    assert_eq!(assign(&image, &palette), vec![0, 1, 1, 2]);
}

#[test]
fn test_map_rejects_empty_palette() {
    let image = gray_row(&[1.0]);
    assert!(map_image(&image, &Palette::default()).is_err());
}

#[test]
fn test_mse_of_identical_images_is_zero() {
    let image = random_image(9, 7, 22);
    assert_eq!(mse(&image, &image).unwrap(), 0.0);
}

#[test]
fn test_mse_is_symmetric() {
    let a = random_image(9, 7, 23);
    let b = random_image(9, 7, 24);
    assert_eq!(mse(&a, &b).unwrap(), mse(&b, &a).unwrap());
}

#[test]
fn test_mse_value() {
    let a = gray_row(&[0.0, 10.0]);
    let b = Image::new(2, 1, vec![Rgb::new(1.0, 2.0, 3.0), Rgb::new(10.0, 10.0, 10.0)]).unwrap();
    // (1 + 4 + 9 + 0) / 2
    assert_eq!(mse(&a, &b).unwrap(), 7.0);
}

#[test]
fn test_mse_rejects_dimension_mismatch() {
    let a = random_image(4, 2, 25);
    let b = random_image(2, 4, 25);
    assert!(matches!(
        mse(&a, &b),
        Err(QuantizeError::DimensionMismatch {
            left_width: 4,
            left_height: 2,
            ..
        })
    ));
}

#[test]
fn test_quantization_error_shrinks_with_palette_size() {
    let image = random_image(24, 24, 26);
    let small = map_image(&image, &maximin(&image, 2).unwrap()).unwrap();
    let large = map_image(&image, &lloyd(&image, 32, 20).unwrap().palette).unwrap();

    assert!(mse(&image, &large).unwrap() < mse(&image, &small).unwrap());
}

#[test]
fn test_mean_stdev_sample_statistics() {
    let summary = mean_stdev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_eq!(summary.mean, 5.0);
    assert!((summary.stdev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    assert_eq!(summary.count, 8);
}

#[test]
fn test_mean_stdev_single_value() {
    let summary = mean_stdev(&[42.5]).unwrap();
    assert_eq!(summary.mean, 42.5);
    assert_eq!(summary.stdev, 0.0);
}

#[test]
fn test_mean_stdev_empty_fails() {
    assert!(matches!(mean_stdev(&[]), Err(QuantizeError::EmptySample)));
}
