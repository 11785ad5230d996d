//! Site generation pipeline.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::{LogoMode, publish_logos, write_css_assets};
use crate::content::PageContent;
use crate::pages::partners::PartnersPage;
use crate::partner::PartnerDirectory;
use crate::provider::PartnerProvider;

/// Summary of a generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    /// Path of the written page
    pub index_path: PathBuf,
    /// Number of partner cards on the page
    pub partner_count: usize,
    /// Number of distinct logos published
    pub logo_count: usize,
}

/// Generates the partners page into `output`.
///
/// Loads data from the provider, writes the stylesheet, publishes logos,
/// and renders `index.html`. Existing files are overwritten.
///
/// # Arguments
///
/// * `provider`: Source of partner collections and page copy
/// * `content_overrides`: Adjusts provider copy before rendering
/// * `output`: Output directory, created if missing
/// * `logo_mode`: Copy or embed logos
///
/// # Errors
///
/// Returns error if data loading, logo publishing, or any write fails.
pub fn generate_site(
    provider: &dyn PartnerProvider,
    content_overrides: impl FnOnce(&mut PageContent),
    output: &Path,
    logo_mode: LogoMode,
) -> Result<GeneratedSite> {
    let directory = provider.partners().context("Failed to load partners")?;
    let mut content = provider.content().context("Failed to load page content")?;
    content_overrides(&mut content);

    for (tier, collection) in directory.tiers() {
        debug!(tier = tier.key(), count = collection.len(), "Loaded partner tier");
    }

    render_site(&directory, &content, output, logo_mode)
}

/// Renders already loaded data into `output`.
///
/// # Errors
///
/// Returns error if logo publishing or any write fails.
pub fn render_site(
    directory: &PartnerDirectory,
    content: &PageContent,
    output: &Path,
    logo_mode: LogoMode,
) -> Result<GeneratedSite> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;

    write_css_assets(&assets_dir).context("Failed to write stylesheet")?;

    let logos = publish_logos(directory, &assets_dir, logo_mode).context("Failed to publish logos")?;
    info!(logos = logos.len(), mode = ?logo_mode, "Published logos");

    let html = PartnersPage::new(directory, content, &logos).document();

    let index_path = output.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write partners page to {}", index_path.display()))?;

    info!(path = %index_path.display(), partners = directory.total(), "Generated partners page");

    Ok(GeneratedSite {
        index_path,
        partner_count: directory.total(),
        logo_count: logos.len(),
    })
}
