use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use imagehash_core::LogLevel;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "imagehash")]
#[command(about = "Compare images by DCT perceptual fingerprint")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory that relative image paths are resolved against
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to rotating files in this directory instead of stderr
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fingerprint two images and print their Hamming distance
    Compare(CompareArgs),

    /// Print the fingerprint of each image
    Hash {
        /// Images to fingerprint
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },

    /// Print the pairwise distance matrix of the images
    Matrix {
        /// Images to compare
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "imagehash.json")]
        path: PathBuf,
    },
}

/// The two images to compare, given either positionally or by flag
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First image to be processed
    pub first_image: Option<PathBuf>,

    /// Second image to be processed
    pub second_image: Option<PathBuf>,

    /// First image to be processed
    #[arg(short = 'a', long = "first", conflicts_with = "first_image")]
    pub first: Option<PathBuf>,

    /// Second image to be processed
    #[arg(short = 'b', long = "second", conflicts_with = "second_image")]
    pub second: Option<PathBuf>,
}

impl CompareArgs {
    /// Resolve the flag and positional forms into one pair of paths
    pub fn pair(&self) -> Result<(PathBuf, PathBuf)> {
        let first = self.first.as_ref().or(self.first_image.as_ref());
        let second = self.second.as_ref().or(self.second_image.as_ref());

        match (first, second) {
            (Some(a), Some(b)) => Ok((a.clone(), b.clone())),
            (None, _) => bail!("missing first image"),
            (_, None) => bail!("missing second image"),
        }
    }
}

impl Cli {
    /// Log level implied by the `-v` count, if any was given
    pub fn log_level_override(&self) -> Option<LogLevel> {
        match self.verbose {
            0 => None,
            1 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    }
}

/// Join relative paths onto the base directory; absolute paths pass through
pub fn resolve_path(base_dir: Option<&Path>, path: &Path) -> PathBuf {
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}
