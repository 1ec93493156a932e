use super::*;
use crate::clusterer::{lloyd, macqueen};
use crate::config::{Algorithm, PresentationOrder, QuantizeConfig};
use crate::quantize::mse;
use crate::sequence::Sobol2d;
use crate::testutil::random_image;

fn pseudo_config(runs: u32, seed: u32) -> QuantizeConfig {
    QuantizeConfig::builder()
        .num_colors(8)
        .order(PresentationOrder::Pseudo)
        .num_runs(runs)
        .seed(seed)
        .build()
        .unwrap()
}

#[test]
fn test_lloyd_pipeline_matches_direct_call() {
    let image = random_image(16, 12, 31);
    let config = QuantizeConfig::builder()
        .num_colors(8)
        .algorithm(Algorithm::Lloyd)
        .max_iters(50)
        .build()
        .unwrap();

    let outcome = Quantizer::new(config).unwrap().run(&image).unwrap();
    let direct = lloyd(&image, 8, 50).unwrap();

    assert_eq!(outcome.palette, direct.palette);
    assert_eq!(outcome.iterations, Some(direct.iterations));
    assert_eq!(outcome.trace.len(), direct.iterations as usize);
    assert!(outcome.seed.is_none());

    let output = outcome.output.as_ref().unwrap();
    assert_eq!(outcome.mse.mean, mse(&image, output).unwrap());
    assert_eq!(outcome.mse.count, 1);
    assert_eq!(outcome.mse.stdev, 0.0);
}

#[test]
fn test_quasi_pipeline_matches_direct_call() {
    let image = random_image(10, 10, 32);
    let config = QuantizeConfig::builder()
        .num_colors(6)
        .learning_exponent(0.75)
        .sample_rate(0.5)
        .build()
        .unwrap();

    let outcome = Quantizer::new(config.clone()).unwrap().run(&image).unwrap();
    let direct = macqueen(&image, 6, &config.online_params(), &mut Sobol2d::new()).unwrap();

    assert_eq!(outcome.palette, direct);
    assert!(outcome.output.is_some());
    assert!(outcome.iterations.is_none());
    assert!(outcome.seed.is_none());
}

#[test]
fn test_pseudo_pipeline_is_reproducible() {
    let image = random_image(12, 9, 33);

    let first = Quantizer::new(pseudo_config(1, 77)).unwrap().run(&image).unwrap();
    let second = Quantizer::new(pseudo_config(1, 77)).unwrap().run(&image).unwrap();

    assert_eq!(first.palette, second.palette);
    assert_eq!(first.run_mse, second.run_mse);
    assert_eq!(first.seed, Some(77));
    assert!(first.output.is_some());
}

#[test]
fn test_multiple_runs_share_one_generator() {
    let image = random_image(12, 9, 34);

    let single = Quantizer::new(pseudo_config(1, 2024)).unwrap().run(&image).unwrap();
    let multi = Quantizer::new(pseudo_config(4, 2024)).unwrap().run(&image).unwrap();

    // the first run sees the same draws as a lone run
    assert_eq!(multi.run_mse[0], single.run_mse[0]);
    assert_eq!(multi.run_mse.len(), 4);
    assert_eq!(multi.mse.count, 4);
    assert!(multi.is_multi_run());
    assert!(multi.output.is_none());
}

#[test]
fn test_quantizer_keeps_validated_config() {
    let config = pseudo_config(2, 5);
    let quantizer = Quantizer::new(config.clone()).unwrap();
    assert_eq!(quantizer.config(), &config);
    assert!(quantizer.config().uses_prng());
}

#[test]
fn test_quantizer_rejects_invalid_config() {
    let config = QuantizeConfig {
        sample_rate: 0.0,
        ..QuantizeConfig::default()
    };
    assert!(Quantizer::new(config).is_err());
}

#[test]
fn test_palette_larger_than_image() {
    let image = random_image(2, 2, 35);
    let config = QuantizeConfig::builder()
        .num_colors(10)
        .algorithm(Algorithm::Lloyd)
        .build()
        .unwrap();

    let outcome = Quantizer::new(config).unwrap().run(&image).unwrap();
    assert_eq!(outcome.palette.len(), 10);
    assert_eq!(outcome.mse.mean, 0.0);
}

#[test]
fn test_report_round_trip() {
    let image = random_image(8, 8, 36);
    let config = pseudo_config(3, 9);
    let outcome = Quantizer::new(config.clone()).unwrap().run(&image).unwrap();

    let report = RunReport::new(
        &config,
        &outcome,
        image.width(),
        image.height(),
        Some("in.ppm".to_string()),
        None,
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    report.write_to_file(&path).unwrap();

    let loaded = RunReport::read_from_file(&path).unwrap();
    assert_eq!(loaded.config, config);
    assert_eq!(loaded.seed, Some(9));
    assert_eq!(loaded.run_mse.len(), 3);
    for (a, b) in loaded.run_mse.iter().zip(&outcome.run_mse) {
        assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0));
    }
    assert_eq!(loaded.palette.len(), 8);
    assert_eq!(loaded.input.as_deref(), Some("in.ppm"));
    assert!(loaded.output.is_none());
    assert!(loaded.generator.starts_with("kquant v"));
}
