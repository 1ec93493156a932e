use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use kquant::{
    read_ppm, write_ppm, Algorithm, PresentationOrder, QuantizeConfig, Quantizer, RunReport,
};

/// Reduce the colors of a binary PPM image with k-means clustering
#[derive(Parser, Debug)]
#[command(name = "kquant")]
#[command(version)]
#[command(about = "Color quantization with online (MacQueen) or batch (Lloyd) k-means")]
struct Cli {
    /// Input image (binary P6 PPM, 8-bit)
    #[arg(short, long)]
    input: PathBuf,

    /// Output image
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    /// Palette size (at least 2)
    #[arg(short = 'n', long = "colors", default_value_t = 256)]
    num_colors: usize,

    /// Clustering algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Macqueen)]
    algorithm: Algorithm,

    /// Pixel presentation order [macqueen only, default: quasi]
    #[arg(short = 'p', long, value_enum)]
    order: Option<PresentationOrder>,

    /// Learning rate exponent in [0.5, 1] [macqueen only, default: 0.5]
    #[arg(short, long)]
    exponent: Option<f64>,

    /// Fraction of pixels presented, in (0, 1] [macqueen only, default: 1]
    #[arg(short, long)]
    sample_rate: Option<f64>,

    /// Number of runs [macqueen with pseudo order only]
    #[arg(short, long)]
    runs: Option<u32>,

    /// Seed of the pseudo-random generator [default: current time]
    #[arg(short = 'd', long)]
    seed: Option<u32>,

    /// Iteration cap [lloyd only, default: unbounded]
    #[arg(short = 't', long)]
    max_iters: Option<u32>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn build_config(cli: &Cli) -> Result<QuantizeConfig> {
    let online_only = [
        ("--order", cli.order.is_some()),
        ("--exponent", cli.exponent.is_some()),
        ("--sample-rate", cli.sample_rate.is_some()),
        ("--runs", cli.runs.is_some()),
        ("--seed", cli.seed.is_some()),
    ];

    let mut builder = QuantizeConfig::builder()
        .num_colors(cli.num_colors)
        .algorithm(cli.algorithm);

    match cli.algorithm {
        Algorithm::Lloyd => {
            if let Some((flag, _)) = online_only.iter().find(|(_, given)| *given) {
                bail!("{} applies only to the macqueen algorithm", flag);
            }
            if let Some(max_iters) = cli.max_iters {
                builder = builder.max_iters(max_iters);
            }
        }
        Algorithm::Macqueen => {
            if cli.max_iters.is_some() {
                bail!("--max-iters applies only to the lloyd algorithm");
            }
            let order = cli.order.unwrap_or(PresentationOrder::Quasi);
            if order == PresentationOrder::Quasi && cli.seed.is_some() {
                bail!("--seed applies only to the pseudo presentation order");
            }

            builder = builder.order(order);
            if let Some(exponent) = cli.exponent {
                builder = builder.learning_exponent(exponent);
            }
            if let Some(rate) = cli.sample_rate {
                builder = builder.sample_rate(rate);
            }
            if let Some(runs) = cli.runs {
                builder = builder.num_runs(runs);
            }
            if let Some(seed) = cli.seed {
                builder = builder.seed(seed);
            }
        }
    }

    builder.build().context("Invalid quantization parameters")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;
    let start_time = Instant::now();

    // Step 1: Load input image
    let step1_start = Instant::now();
    println!("Step 1: Loading {}...", cli.input.display());
    let image = read_ppm(&cli.input)
        .context(format!("Failed to read input image: {}", cli.input.display()))?;
    println!(
        "✓ Loaded {}x{} image ({} pixels) [{:.2}s]\n",
        image.width(),
        image.height(),
        image.len(),
        step1_start.elapsed().as_secs_f64()
    );

    // Step 2: Cluster and map
    let quantizer = Quantizer::new(config)?;
    let config = quantizer.config();
    println!(
        "Step 2: Quantizing to {} colors with {:?}...",
        config.num_colors, config.algorithm
    );
    let outcome = quantizer.run(&image).context("Quantization failed")?;

    if config.uses_prng() {
        if let Some(seed) = outcome.seed {
            println!("  Seed: {}", seed);
        }
    }
    if let Some(iterations) = outcome.iterations {
        println!("  Iterations: {}", iterations);
    }
    println!(
        "  Initialization: {:.3}s, clustering: {:.3}s, mapping: {:.3}s",
        outcome.timings.init.as_secs_f64(),
        outcome.timings.cluster.as_secs_f64(),
        outcome.timings.map.as_secs_f64()
    );
    if outcome.is_multi_run() {
        println!(
            "✓ MSE over {} runs: mean = {:.4}, stdev = {:.4} [{:.2}s]\n",
            outcome.mse.count,
            outcome.mse.mean,
            outcome.mse.stdev,
            outcome.timings.total().as_secs_f64()
        );
    } else {
        println!(
            "✓ MSE = {:.4} [{:.2}s]\n",
            outcome.mse.mean,
            outcome.timings.total().as_secs_f64()
        );
    }

    // Step 3: Write output
    let written = match &outcome.output {
        Some(output) => {
            let step3_start = Instant::now();
            println!("Step 3: Writing {}...", cli.output.display());
            write_ppm(output, &cli.output).context(format!(
                "Failed to write output image: {}",
                cli.output.display()
            ))?;
            println!("✓ Written [{:.2}s]\n", step3_start.elapsed().as_secs_f64());
            Some(cli.output.display().to_string())
        }
        None => {
            println!("Step 3: Skipped, no image is written for multiple runs\n");
            None
        }
    };

    if let Some(report_path) = &cli.report {
        let report = RunReport::new(
            config,
            &outcome,
            image.width(),
            image.height(),
            Some(cli.input.display().to_string()),
            written,
        );
        report.write_to_file(report_path)?;
        println!("✓ Report written to {}\n", report_path.display());
    }

    println!("Total time: {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}
