//! Logo references and generated placeholder logos
//!
//! Placeholders are frosted-glass SVG tiles with the partner's initials,
//! derived deterministically from a key so sample data renders without any
//! image files on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reference to the image shown on a partner card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogoRef {
    /// Pre-built image file on disk
    Asset(PathBuf),
    /// Generated SVG keyed by a string
    Placeholder(String),
}

impl LogoRef {
    pub fn asset(path: impl Into<PathBuf>) -> Self {
        Self::Asset(path.into())
    }

    pub fn placeholder(key: impl Into<String>) -> Self {
        Self::Placeholder(key.into())
    }

    /// Resolves relative asset paths against a base directory.
    pub fn relative_to(self, base: &Path) -> Self {
        match self {
            Self::Asset(path) if path.is_relative() => Self::Asset(base.join(path)),
            other => other,
        }
    }
}

/// Published URL of every logo referenced by the page.
///
/// Filled by the asset publisher; a logo without an entry renders with an
/// empty `src`, which browsers show as a broken image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoMap {
    hrefs: HashMap<LogoRef, String>,
}

impl LogoMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, logo: LogoRef, href: impl Into<String>) {
        self.hrefs.insert(logo, href.into());
    }

    pub fn contains(&self, logo: &LogoRef) -> bool {
        self.hrefs.contains_key(logo)
    }

    /// URL for a logo, empty when it was never published
    pub fn href(&self, logo: &LogoRef) -> &str {
        self.hrefs.get(logo).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }
}

const COLORS: &[&str] = &[
    // Blues
    "#1e3a8a", "#1d4ed8", "#2563eb", "#0369a1", "#0e7490", "#155e75", "#1e40af", "#3730a3",
    // Oranges
    "#c2410c", "#ea580c", "#d97706", "#b45309", "#9a3412", "#f97316", "#fb923c", "#f59e0b",
    // Greens
    "#15803d", "#166534", "#047857", "#0f766e", "#65a30d", "#4d7c0f", "#059669", "#0d9488",
    // Purples
    "#6d28d9", "#7c3aed", "#9333ea", "#a21caf", "#be185d", "#db2777", "#4338ca", "#5b21b6",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Up to two uppercase initials from the words of a label.
fn initials(label: &str) -> String {
    let words: Vec<&str> = label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let picked: String = match words.as_slice() {
        [] => "?".to_string(),
        [only] => only.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };

    picked.to_uppercase()
}

/// Generate placeholder logo SVG from a key
///
/// Output is 16:9 to match the card aspect ratio.
pub fn generate_svg(key: &str) -> String {
    let h = hash(key);
    let id = format!("{:x}", h & 0xFFFF);

    let bg = COLORS[(h % COLORS.len() as u64) as usize];
    let accent = COLORS[((h >> 7) % COLORS.len() as u64) as usize];

    let cx = 40 + ((h >> 13) % 80) as i32;
    let cy = 10 + ((h >> 21) % 70) as i32;
    let r = 30 + ((h >> 29) % 30) as i32;
    let text = initials(key);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="180" viewBox="0 0 160 90"><defs><filter id="b{id}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="12"/></filter></defs><rect width="160" height="90" rx="8" fill="{bg}"/><circle cx="{cx}" cy="{cy}" r="{r}" fill="{accent}" opacity="0.7" filter="url(#b{id})"/><text x="80" y="56" text-anchor="middle" font-family="system-ui, sans-serif" font-size="30" font-weight="700" fill="white">{text}</text></svg>"##
    )
}
