//! Partner data providers
//!
//! The page never owns its data: a [`PartnerProvider`] supplies the three
//! collections and the page copy. [`SampleProvider`] carries the built-in
//! placeholder content; [`TomlProvider`] reads a data file so real partners
//! can be published without code changes.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{ContentOverrides, PageContent};
use crate::logo::LogoRef;
use crate::partner::{PartnerCollection, PartnerDirectory, PartnerRecord, Tier};

/// Source of the page's partner collections and copy.
pub trait PartnerProvider {
    /// Loads the three partner collections.
    ///
    /// # Errors
    ///
    /// Returns error if the data cannot be read or violates collection
    /// invariants.
    fn partners(&self) -> Result<PartnerDirectory>;

    /// Loads the page copy. Defaults to the built-in copy.
    fn content(&self) -> Result<PageContent> {
        Ok(PageContent::default())
    }
}

/// Built-in sample content with generated placeholder logos.
///
/// Six placeholder logos stand in for the institution's logo files; the
/// apoio tier reuses some of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

impl SampleProvider {
    fn collection(entries: &[(u32, &str, &str)]) -> Result<PartnerCollection> {
        PartnerCollection::new(
            entries
                .iter()
                .map(|&(id, name, logo)| PartnerRecord::new(id, name, LogoRef::placeholder(logo)))
                .collect(),
        )
    }
}

impl PartnerProvider for SampleProvider {
    fn partners(&self) -> Result<PartnerDirectory> {
        let mantenedores = Self::collection(&[(1, "Empresa 1", "logo-1"), (2, "Empresa 2", "logo-2")])?;

        let parceiros = Self::collection(&[
            (1, "Parceiro 1", "logo-1"),
            (2, "Parceiro 2", "logo-2"),
            (3, "Parceiro 3", "logo-3"),
            (4, "Parceiro 4", "logo-4"),
            (5, "Parceiro 5", "logo-5"),
            (6, "Parceiro 6", "logo-6"),
        ])?;

        let apoio = Self::collection(&[
            (6, "Apoio 6", "logo-6"),
            (7, "Apoio 7", "logo-1"),
            (8, "Apoio 8", "logo-2"),
            (9, "Apoio 9", "logo-3"),
        ])?;

        Ok(PartnerDirectory::new(mantenedores, parceiros, apoio))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordEntry {
    id: u32,
    name: String,
    logo: Option<PathBuf>,
    placeholder: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DataFile {
    #[serde(default)]
    page: ContentOverrides,
    #[serde(default)]
    mantenedor: Vec<RecordEntry>,
    #[serde(default)]
    parceiro: Vec<RecordEntry>,
    #[serde(default)]
    apoio: Vec<RecordEntry>,
}

impl DataFile {
    fn entries(&self, tier: Tier) -> &[RecordEntry] {
        match tier {
            Tier::Mantenedor => &self.mantenedor,
            Tier::Parceiro => &self.parceiro,
            Tier::Apoio => &self.apoio,
        }
    }
}

/// Partner data read from a TOML file.
///
/// Logo paths are relative to the data file's directory. See the crate
/// README for the file layout.
#[derive(Debug, Clone)]
pub struct TomlProvider {
    data: DataFile,
    base_dir: PathBuf,
}

impl TomlProvider {
    /// Reads and parses a data file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid data file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read partner data: {}", path.display()))?;

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self::from_source(&source, base_dir)
            .with_context(|| format!("Invalid partner data: {}", path.display()))
    }

    /// Parses data file source, resolving logos against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns error on TOML syntax errors or unknown keys.
    pub fn from_source(source: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let data: DataFile = toml::from_str(source).context("Failed to parse TOML")?;
        Ok(Self {
            data,
            base_dir: base_dir.into(),
        })
    }

    fn record(&self, tier: Tier, entry: &RecordEntry) -> Result<PartnerRecord> {
        let logo = match (&entry.logo, &entry.placeholder) {
            (Some(path), None) => LogoRef::asset(path.clone()).relative_to(&self.base_dir),
            (None, Some(key)) => LogoRef::placeholder(key.clone()),
            (Some(_), Some(_)) => bail!(
                "Partner '{}' in [[{}]] sets both logo and placeholder",
                entry.name,
                tier.key()
            ),
            (None, None) => bail!(
                "Partner '{}' in [[{}]] needs a logo or placeholder",
                entry.name,
                tier.key()
            ),
        };

        Ok(PartnerRecord::new(entry.id, entry.name.clone(), logo))
    }

    fn collection(&self, tier: Tier) -> Result<PartnerCollection> {
        let records = self
            .data
            .entries(tier)
            .iter()
            .map(|entry| self.record(tier, entry))
            .collect::<Result<Vec<_>>>()?;

        PartnerCollection::new(records).with_context(|| format!("Invalid [[{}]] collection", tier.key()))
    }
}

impl PartnerProvider for TomlProvider {
    fn partners(&self) -> Result<PartnerDirectory> {
        Ok(PartnerDirectory::new(
            self.collection(Tier::Mantenedor)?,
            self.collection(Tier::Parceiro)?,
            self.collection(Tier::Apoio)?,
        ))
    }

    fn content(&self) -> Result<PageContent> {
        let mut content = PageContent::default();
        content.apply(self.data.page.clone());
        Ok(content)
    }
}
