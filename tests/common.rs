//! Shared test utilities for integration tests.
//!
//! Provides helpers for building partner data, writing logo fixtures, and
//! inspecting rendered page markup.

#![allow(dead_code)]

use anyhow::{Result, bail};
use parceiros::{
    Animator, ContextId, LogoMap, LogoRef, PageContent, PartnerCollection, PartnerDirectory,
    PartnerRecord, PartnersPage, Tier, Tween,
};
use std::path::Path;

/// Smallest byte sequence recognized as a PNG logo.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Builds a collection of placeholder-logo records from names.
///
/// Ids are assigned from 1 in order.
///
/// # Errors
///
/// Never fails for distinct generated ids; propagates collection errors.
pub fn collection(names: &[&str]) -> Result<PartnerCollection> {
    PartnerCollection::new(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| PartnerRecord::new(i as u32 + 1, *name, LogoRef::placeholder(*name)))
            .collect(),
    )
}

/// Renders the page body for a directory with empty logo hrefs.
pub fn render_body(directory: &PartnerDirectory) -> String {
    let content = PageContent::default();
    let logos = LogoMap::new();
    PartnersPage::new(directory, &content, &logos)
        .render()
        .into_string()
}

/// Returns the markup of a tier's section.
///
/// # Errors
///
/// Returns error if the section is missing from the markup.
pub fn section_html(html: &str, tier: Tier) -> Result<&str> {
    let marker = format!("data-tier=\"{}\"", tier.key());
    let Some(start) = html.find(&marker) else {
        bail!("Section {} not found", tier.key());
    };

    let end = html[start..]
        .find("</section>")
        .map(|offset| start + offset)
        .unwrap_or(html.len());

    Ok(&html[start..end])
}

/// Alt texts of the cards in a section, in document order.
pub fn card_alts(section: &str) -> Vec<String> {
    section
        .split("alt=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(String::from)
        .collect()
}

/// Number of partner cards in a block of markup.
pub fn card_count(html: &str) -> usize {
    html.matches("class=\"partner-card ").count()
}

/// Writes a minimal PNG logo, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_png(dir: &Path, path: &str) -> Result<()> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, PNG_SIGNATURE)?;
    Ok(())
}

/// Writes a text file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Animator that records lifecycle calls and flags calls after revert.
#[derive(Debug, Default)]
pub struct CountingAnimator {
    pub contexts: usize,
    pub tweens: Vec<&'static str>,
    pub reverts: usize,
    pub calls_after_revert: usize,
    reverted: Vec<ContextId>,
}

impl Animator for CountingAnimator {
    fn create_context(&mut self, _scope: &str) -> ContextId {
        self.contexts += 1;
        ContextId(self.contexts as u32)
    }

    fn from(&mut self, context: ContextId, tween: &Tween) {
        if self.reverted.contains(&context) {
            self.calls_after_revert += 1;
        }
        self.tweens.push(tween.selector);
    }

    fn revert(&mut self, context: ContextId) {
        if self.reverted.contains(&context) {
            self.calls_after_revert += 1;
        }
        self.reverted.push(context);
        self.reverts += 1;
    }
}
