//! Command line configuration for the `life` runner

use std::path::PathBuf;

use clap::Parser;

use crate::grid::MIN_SIZE;

/// Grid size used when none is given
pub const DEFAULT_SIZE: usize = 30;

#[derive(Debug, Clone, Parser)]
#[command(name = "life", about = "Two-colour Game of Life on a wrapping grid")]
pub struct LifeConfig {
    /// Number of rows (and columns) on the grid
    #[arg(value_name = "SIZE", default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    pub size: usize,

    /// Generations to advance before exiting
    #[arg(short, long, default_value_t = 10)]
    pub generations: u64,

    /// Fraction of cells alive after random seeding
    #[arg(short, long, default_value_t = 0.3, value_parser = parse_density)]
    pub density: f64,

    /// Seed for the random generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Text grid stamped at the top-left corner instead of random seeding
    #[arg(long, value_name = "FILE", conflicts_with = "snapshot")]
    pub pattern: Option<PathBuf>,

    /// JSON snapshot to start from
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Write the final grid to this JSON file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Log every generation
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_size(arg: &str) -> Result<usize, String> {
    let size: usize = arg
        .parse()
        .map_err(|e| format!("The size of the screen must be a number: {e}"))?;
    if size < MIN_SIZE {
        return Err(format!("The minimum row size should be {MIN_SIZE}."));
    }
    Ok(size)
}

fn parse_density(arg: &str) -> Result<f64, String> {
    let density: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    if !(0.0..=1.0).contains(&density) {
        return Err("density must be between 0.0 and 1.0".into());
    }
    Ok(density)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LifeConfig::try_parse_from(["life"]).unwrap();
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.generations, 10);
        assert!(config.pattern.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_size_argument() {
        let config = LifeConfig::try_parse_from(["life", "12", "--seed", "3"]).unwrap();
        assert_eq!(config.size, 12);
        assert_eq!(config.seed, Some(3));

        assert!(LifeConfig::try_parse_from(["life", "3"]).is_err());
        assert!(LifeConfig::try_parse_from(["life", "big"]).is_err());
    }

    #[test]
    fn test_parse_size_messages() {
        assert_eq!(parse_size("4"), Ok(4));
        assert_eq!(
            parse_size("2").unwrap_err(),
            "The minimum row size should be 4."
        );
        assert!(parse_size("x").unwrap_err().starts_with("The size of the screen must be a number"));
    }

    #[test]
    fn test_density_and_sources() {
        assert!(LifeConfig::try_parse_from(["life", "--density", "1.2"]).is_err());
        assert!(LifeConfig::try_parse_from(["life", "--pattern", "a.txt", "--snapshot", "b.json"]).is_err());
    }
}
