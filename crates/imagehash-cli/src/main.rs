mod cli;
mod output;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use cli::{resolve_path, Cli, Commands};
use image::DynamicImage;
use imagehash_core::logging::{init_logger, log_comparison, log_fingerprint_error, LOG_ENV_VAR};
use imagehash_core::{distance_matrix, hamming_distance, Config, PerceptualHasher};
use log::{info, LevelFilter};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Set up configuration
    let mut config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };
    if let Some(level) = cli.log_level_override() {
        config.log_level = level;
    }

    init_logging(cli.log_dir.as_deref(), config.log_level.into())?;

    let base_dir = cli.base_dir.as_deref();

    match cli.command {
        Commands::Compare(args) => {
            let (first, second) = args.pair()?;
            let hasher = PerceptualHasher::new(config)?;

            let first_fp = hasher.fingerprint(&load_image(base_dir, &first)?)?;
            let second_fp = hasher.fingerprint(&load_image(base_dir, &second)?)?;
            let distance = hamming_distance(&first_fp, &second_fp);

            let first_label = first.display().to_string();
            let second_label = second.display().to_string();
            log_comparison(&first_label, &second_label, distance);

            println!(
                "{}",
                output::format_comparison(
                    &first_label,
                    &first_fp,
                    &second_label,
                    &second_fp,
                    distance
                )
            );
            Ok(())
        }

        Commands::Hash { images } => {
            let hasher = PerceptualHasher::new(config)?;
            let mut failures = 0;

            // Decode failures are reported but do not stop the rest
            let mut decoded = Vec::new();
            for path in &images {
                match load_image(base_dir, path) {
                    Ok(img) => decoded.push((path, img)),
                    Err(e) => {
                        eprintln!("{:#}", e);
                        failures += 1;
                    }
                }
            }

            let (paths, imgs): (Vec<&PathBuf>, Vec<DynamicImage>) = decoded.into_iter().unzip();
            for (path, result) in paths.iter().zip(hasher.fingerprint_all(&imgs)) {
                let label = path.display().to_string();
                match result {
                    Ok(fp) => println!("{}", output::format_hash(&label, &fp)),
                    Err(e) => {
                        log_fingerprint_error(&label, &e);
                        eprintln!("{}: {}", label, e);
                        failures += 1;
                    }
                }
            }

            if failures > 0 {
                bail!("{} of {} images failed", failures, images.len());
            }
            Ok(())
        }

        Commands::Matrix { images } => {
            let hasher = PerceptualHasher::new(config)?;

            let imgs = images
                .iter()
                .map(|path| load_image(base_dir, path))
                .collect::<Result<Vec<_>>>()?;

            let fingerprints = hasher
                .fingerprint_all(&imgs)
                .into_iter()
                .zip(&images)
                .map(|(result, path)| {
                    result.with_context(|| format!("Failed to fingerprint {}", path.display()))
                })
                .collect::<Result<Vec<_>>>()?;

            let labels: Vec<String> = images.iter().map(|p| p.display().to_string()).collect();
            let matrix = distance_matrix(&fingerprints);
            info!("Computed {}x{} distance matrix", matrix.len(), matrix.len());

            println!("{}", output::format_matrix(&labels, &matrix));
            Ok(())
        }

        Commands::GenerateConfig { path } => {
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}

/// File logging when a directory is given, otherwise env_logger on stderr
fn init_logging(log_dir: Option<&Path>, level: LevelFilter) -> Result<()> {
    match log_dir {
        Some(dir) => init_logger(dir, level)
            .map_err(|e| anyhow!("Failed to initialize logging: {}", e)),
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_env(LOG_ENV_VAR)
                .init();
            Ok(())
        }
    }
}

/// Decode an image, resolving relative paths against the base directory
fn load_image(base_dir: Option<&Path>, path: &Path) -> Result<DynamicImage> {
    let resolved = resolve_path(base_dir, path);
    image::open(&resolved).with_context(|| format!("Failed to decode image {}", resolved.display()))
}
