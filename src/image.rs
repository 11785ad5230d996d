//! Logo image format detection.
//!
//! Logos end up either copied next to the page or inlined as data URIs, so
//! the MIME type has to come from what the file actually contains. The file
//! content decides the format; a file name that claims a different image
//! format is rejected rather than trusted.

use anyhow::{Result, bail};
use std::path::Path;

/// Image formats accepted as partner logos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Svg,
}

/// Leading bytes of each raster format. WebP is matched separately because
/// its tag sits after the RIFF chunk size.
const SIGNATURES: [(&[u8], ImageFormat); 2] = [
    (b"\x89PNG\r\n\x1a\n", ImageFormat::Png),
    (b"\xFF\xD8\xFF", ImageFormat::Jpeg),
];

/// How far into a file the SVG root element is searched for.
const SVG_SNIFF_LEN: usize = 1024;

impl ImageFormat {
    /// MIME type for data URLs
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Svg => "image/svg+xml",
        }
    }

    /// File extension without dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Svg => "svg",
        }
    }

    /// Format a file name claims through its extension, if any.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();

        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// Format of the content itself, if it is a supported image.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if let Some((_, format)) = SIGNATURES.iter().find(|(sig, _)| bytes.starts_with(sig)) {
            return Some(*format);
        }

        if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            return Some(Self::Webp);
        }

        has_svg_root(bytes).then_some(Self::Svg)
    }
}

/// Detects the image format of a logo file.
///
/// The content is authoritative. The path only takes part as a consistency
/// check: an image extension naming another format is an error, while an
/// unknown or missing extension is accepted.
///
/// # Arguments
///
/// * `bytes`: File content
/// * `path`: File path, used in messages and for the extension check
///
/// # Errors
///
/// Returns error if the content is not a supported image, or if the file
/// extension names a different image format than the content.
///
/// # Examples
///
/// ```
/// use parceiros::{ImageFormat, detect_image_format};
/// use std::path::Path;
///
/// let png = b"\x89PNG\r\n\x1a\n";
/// assert_eq!(detect_image_format(png, Path::new("logo")).ok(), Some(ImageFormat::Png));
/// assert!(detect_image_format(png, Path::new("logo.jpg")).is_err());
/// assert!(detect_image_format(b"hello", Path::new("logo.jpg")).is_err());
/// ```
pub fn detect_image_format(bytes: &[u8], path: &Path) -> Result<ImageFormat> {
    let Some(format) = ImageFormat::sniff(bytes) else {
        bail!("Unrecognized image format: {}", path.display());
    };

    if let Some(named) = ImageFormat::from_extension(path)
        && named != format
    {
        bail!(
            "Logo extension does not match its content: {} holds {} data",
            path.display(),
            format.extension()
        );
    }

    Ok(format)
}

/// True when `<svg` opens the document, after an optional XML prolog.
fn has_svg_root(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(SVG_SNIFF_LEN)];
    let Ok(text) = std::str::from_utf8(head) else {
        return false;
    };

    let mut rest = text.trim_start_matches('\u{feff}').trim_start();
    for (open, close) in [("<?xml", "?>"), ("<!--", "-->"), ("<!DOCTYPE", ">")] {
        if let Some(after) = rest.strip_prefix(open) {
            let Some(end) = after.find(close) else {
                return false;
            };
            rest = after[end + close.len()..].trim_start();
        }
    }

    rest.starts_with("<svg")
}
