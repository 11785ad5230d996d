//! Stylesheet bundling and logo publishing

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashSet;
use std::{fs, path::Path};

use crate::image::{ImageFormat, detect_image_format};
use crate::logo::{LogoMap, LogoRef, generate_svg};
use crate::partner::PartnerDirectory;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const PARTNER_CARD: &str = include_str!("../assets/components/partner-card.css");
const CTA: &str = include_str!("../assets/components/cta.css");
const PARTNERS_PAGE: &str = include_str!("../assets/page-partners.css");

/// Directory under the assets directory holding published logos.
pub const LOGO_DIR: &str = "logos";

/// Writes the bundled page stylesheet to the assets directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "partners.css",
        &[BASE, LAYOUT, PARTNER_CARD, CTA, PARTNERS_PAGE],
    )
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

/// How logos reach the generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoMode {
    /// Copy each logo into `assets/logos/` and link it
    #[default]
    Copy,
    /// Inline each logo as a base64 data URI
    Embed,
}

/// Logo bytes ready to publish.
struct LoadedLogo {
    bytes: Vec<u8>,
    format: ImageFormat,
    stem: String,
}

/// Reads or generates a logo and checks it is a displayable image whose
/// extension agrees with its content.
fn load_logo(logo: &LogoRef) -> Result<LoadedLogo> {
    match logo {
        LogoRef::Asset(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read logo: {}", path.display()))?;

            let format = detect_image_format(&bytes, path)?;

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("logo")
                .to_string();

            Ok(LoadedLogo {
                bytes,
                format,
                stem,
            })
        }
        LogoRef::Placeholder(key) => Ok(LoadedLogo {
            bytes: generate_svg(key).into_bytes(),
            format: ImageFormat::Svg,
            stem: key.clone(),
        }),
    }
}

/// Makes a file name component safe for any filesystem and URL.
fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches('-');
    if trimmed.is_empty() {
        "logo".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Picks a file name not taken by an earlier logo.
fn unique_file_name(stem: &str, extension: &str, taken: &mut HashSet<String>) -> String {
    let base = sanitize_stem(stem);
    let mut candidate = format!("{}.{}", base, extension);
    let mut counter = 2;

    while !taken.insert(candidate.clone()) {
        candidate = format!("{}-{}.{}", base, counter, extension);
        counter += 1;
    }

    candidate
}

/// Publishes every logo the directory references.
///
/// Each distinct logo is published once even when several records share it.
/// Asset logos must exist and be recognized images; this is the only point
/// where logo references are validated.
///
/// # Arguments
///
/// * `directory`: Partner collections whose logos are published
/// * `assets_dir`: Output assets directory (used in copy mode)
/// * `mode`: Copy files or embed data URIs
///
/// # Returns
///
/// Page-relative URL of every logo
///
/// # Errors
///
/// Returns error naming the partner if a logo cannot be read, is not an
/// image, or cannot be written.
pub fn publish_logos(
    directory: &PartnerDirectory,
    assets_dir: &Path,
    mode: LogoMode,
) -> Result<LogoMap> {
    let mut map = LogoMap::new();
    let mut taken = HashSet::new();

    if mode == LogoMode::Copy {
        fs::create_dir_all(assets_dir.join(LOGO_DIR))
            .context("Failed to create logos directory")?;
    }

    for (tier, record) in directory.records() {
        if map.contains(record.logo()) {
            continue;
        }

        let loaded = load_logo(record.logo()).with_context(|| {
            format!(
                "Invalid logo for partner '{}' ({})",
                record.name(),
                tier.key()
            )
        })?;

        let href = match mode {
            LogoMode::Embed => format!(
                "data:{};base64,{}",
                loaded.format.mime_type(),
                STANDARD.encode(&loaded.bytes)
            ),
            LogoMode::Copy => {
                let file_name =
                    unique_file_name(&loaded.stem, loaded.format.extension(), &mut taken);
                let target = assets_dir.join(LOGO_DIR).join(&file_name);
                fs::write(&target, &loaded.bytes)
                    .with_context(|| format!("Failed to write logo {}", target.display()))?;
                format!("assets/{}/{}", LOGO_DIR, file_name)
            }
        };

        tracing::debug!(partner = record.name(), href = %truncate_href(&href), "Published logo");
        map.insert(record.logo().clone(), href);
    }

    Ok(map)
}

/// Shortens data URIs for log output.
fn truncate_href(href: &str) -> &str {
    match href.char_indices().nth(48) {
        Some((idx, _)) if href.starts_with("data:") => &href[..idx],
        _ => href,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partner::{PartnerCollection, PartnerRecord};
    use tempfile::TempDir;

    fn directory(records: Vec<PartnerRecord>) -> Result<PartnerDirectory> {
        Ok(PartnerDirectory::new(
            PartnerCollection::default(),
            PartnerCollection::new(records)?,
            PartnerCollection::default(),
        ))
    }

    #[test]
    fn test_sanitize_stem() {
        assert_eq!(sanitize_stem("Logo 1"), "logo-1");
        assert_eq!(sanitize_stem("logo_2"), "logo_2");
        assert_eq!(sanitize_stem("../etc"), "etc");
        assert_eq!(sanitize_stem("***"), "logo");
    }

    #[test]
    fn test_unique_file_name() {
        // Arrange
        let mut taken = HashSet::new();

        // Act
        let first = unique_file_name("logo", "png", &mut taken);
        let second = unique_file_name("logo", "png", &mut taken);
        let other = unique_file_name("logo", "svg", &mut taken);

        // Assert
        assert_eq!(first, "logo.png");
        assert_eq!(second, "logo-2.png");
        assert_eq!(other, "logo.svg");
    }

    #[test]
    fn test_write_css_assets() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;

        // Act
        write_css_assets(dir.path())?;

        // Assert
        let css = fs::read_to_string(dir.path().join("partners.css"))?;
        assert!(css.contains(".partner-card"));
        assert!(css.contains("grayscale"));
        Ok(())
    }

    #[test]
    fn test_publish_placeholders_deduplicated() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let directory = directory(vec![
            PartnerRecord::new(1, "A", LogoRef::placeholder("logo-1")),
            PartnerRecord::new(2, "B", LogoRef::placeholder("logo-1")),
        ])?;

        // Act
        let map = publish_logos(&directory, dir.path(), LogoMode::Copy)?;

        // Assert
        assert_eq!(map.len(), 1);
        assert_eq!(map.href(&LogoRef::placeholder("logo-1")), "assets/logos/logo-1.svg");
        assert!(dir.path().join("logos/logo-1.svg").exists());
        Ok(())
    }

    #[test]
    fn test_publish_embed_data_uri() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let png = dir.path().join("mark.png");
        fs::write(&png, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])?;
        let directory = directory(vec![PartnerRecord::new(1, "A", LogoRef::asset(&png))])?;

        // Act
        let map = publish_logos(&directory, dir.path(), LogoMode::Embed)?;

        // Assert
        let href = map.href(&LogoRef::asset(&png));
        assert_eq!(href, "data:image/png;base64,iVBORw0KGgo=");
        assert!(!dir.path().join(LOGO_DIR).exists(), "Embed mode writes no files");
        Ok(())
    }

    #[test]
    fn test_publish_missing_asset_names_partner() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let directory = directory(vec![PartnerRecord::new(
            1,
            "Parceiro 1",
            LogoRef::asset(dir.path().join("missing.jpg")),
        )])?;

        // Act
        let result = publish_logos(&directory, dir.path(), LogoMode::Copy);

        // Assert
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("Parceiro 1"), "got: {}", msg);
        assert!(msg.contains("Failed to read logo"), "got: {}", msg);
        Ok(())
    }

    #[test]
    fn test_publish_rejects_non_image() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let text = dir.path().join("notes.txt");
        fs::write(&text, "not a logo at all")?;
        let directory = directory(vec![PartnerRecord::new(1, "A", LogoRef::asset(&text))])?;

        // Act
        let result = publish_logos(&directory, dir.path(), LogoMode::Copy);

        // Assert
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("Unrecognized image format"), "got: {}", msg);
        Ok(())
    }

    #[test]
    fn test_publish_rejects_text_named_as_image() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let fake = dir.path().join("logo.jpg");
        fs::write(&fake, "not a logo at all")?;
        let directory = directory(vec![PartnerRecord::new(1, "Falso", LogoRef::asset(&fake))])?;

        // Act
        let result = publish_logos(&directory, dir.path(), LogoMode::Embed);

        // Assert
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("Falso"), "got: {}", msg);
        assert!(msg.contains("Unrecognized image format"), "got: {}", msg);
        Ok(())
    }

    #[test]
    fn test_publish_rejects_mismatched_extension() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let png = dir.path().join("logo.jpg");
        fs::write(&png, b"\x89PNG\r\n\x1a\n")?;
        let directory = directory(vec![PartnerRecord::new(1, "A", LogoRef::asset(&png))])?;

        // Act
        let result = publish_logos(&directory, dir.path(), LogoMode::Copy);

        // Assert
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("does not match its content"), "got: {}", msg);
        assert!(!dir.path().join(LOGO_DIR).join("logo.jpg").exists());
        Ok(())
    }
}
