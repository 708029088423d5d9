use std::path::Path;

use anyhow::bail;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;

use crate::strings::utils as strings;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(long, default_value_t = false, help = strings::VERBOSE)]
    pub verbose:  bool,
    #[arg(long, default_value_t = false, help = strings::PROGRESS)]
    pub progress: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        let level = if self.verbose {
            LevelFilter::Debug
        }
        else {
            LevelFilter::Info
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .parse_default_env()
            .try_init()?;
        Ok(())
    }
}

pub(crate) fn validate_input(path: &Path) -> anyhow::Result<&Path> {
    if !path.exists() {
        bail!("Path {} does not exist.", path.display());
    }
    if !path.is_file() {
        bail!("Path {} is not a file.", path.display());
    }
    Ok(path)
}

pub(crate) fn validate_output(path: &Path) -> anyhow::Result<&Path> {
    if path.is_dir() {
        bail!("Output path {} is a directory.", path.display());
    }
    Ok(path)
}

/// Spinner counting processed variants. Hidden unless enabled.
pub(crate) fn init_progress(enabled: bool) -> anyhow::Result<ProgressBar> {
    if !enabled {
        return Ok(ProgressBar::hidden());
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos:>7.green} {msg}")?,
    );
    spinner.set_message("Processing...");
    Ok(spinner)
}
