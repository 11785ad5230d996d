//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::assets::LogoMode;
use crate::content::PageContent;
use crate::provider::{PartnerProvider, SampleProvider, TomlProvider};

/// Command line configuration for the partners page generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "parceiros", version, about, long_about = None)]
pub struct Config {
    /// Partner data file (TOML); built-in sample partners when omitted
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Page title, overriding the data file
    #[arg(long)]
    pub title: Option<String>,

    /// Institution name, overriding the data file
    #[arg(long)]
    pub site_name: Option<String>,

    /// Inline logos as data URIs instead of copying them
    #[arg(long)]
    pub embed_logos: bool,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the data file does not exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(data) = &self.data
            && !data.is_file()
        {
            bail!("Partner data file does not exist: {}", data.display());
        }

        Ok(())
    }

    /// Returns the data provider selected by the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the data file cannot be read or parsed.
    pub fn provider(&self) -> Result<Box<dyn PartnerProvider>> {
        match &self.data {
            Some(path) => {
                let provider = TomlProvider::from_path(path)
                    .with_context(|| format!("Cannot load partner data from {}", path.display()))?;
                Ok(Box::new(provider))
            }
            None => Ok(Box::new(SampleProvider)),
        }
    }

    /// Applies command line overrides on top of provider copy.
    pub fn apply_overrides(&self, content: &mut PageContent) {
        if let Some(title) = &self.title {
            content.title = title.clone();
        }
        if let Some(site_name) = &self.site_name {
            content.site_name = site_name.clone();
        }
    }

    pub fn logo_mode(&self) -> LogoMode {
        if self.embed_logos {
            LogoMode::Embed
        } else {
            LogoMode::Copy
        }
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
