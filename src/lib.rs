use anyhow::Result;

use crate::config::Config;

pub mod config;
pub mod error;
pub mod resource;
pub mod trim;

pub use crate::error::Error;
pub use crate::trim::summary::TrimSummary;
pub use crate::trim::{trim, BoundingBox, TrimOutcome};

pub fn run(config: Config) -> Result<()> {
    // A logger may already be installed by the embedding process.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    match trim(&config.input_path, &config.output_path)? {
        TrimOutcome::Trimmed(summary) => {
            println!("{summary}");
            println!("\nLogo trimming complete.");
        }
        TrimOutcome::FullyTransparent => {
            log::info!("No output written to {}", config.output_path.display());
        }
    }

    Ok(())
}
