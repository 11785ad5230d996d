//! Named vector icons

use maud::{Markup, html};

/// Icons used on the partners page, rendered from the Phosphor icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Handshake,
    Users,
    HeartHandshake,
    ArrowRight,
}

impl Icon {
    /// Phosphor class list for the icon
    pub fn class(self) -> &'static str {
        match self {
            Icon::Handshake => "ph ph-handshake",
            Icon::Users => "ph ph-users",
            Icon::HeartHandshake => "ph ph-hand-heart",
            Icon::ArrowRight => "ph ph-arrow-right",
        }
    }
}

/// Renders an icon at a pixel size
///
/// Icons are decorative and hidden from assistive technology; the text next
/// to them carries the meaning.
///
/// # Arguments
///
/// * `icon`: Icon to render
/// * `size`: Glyph size in pixels
/// * `extra_class`: Optional modifier class appended to the icon classes
pub fn icon(icon: Icon, size: u32, extra_class: Option<&str>) -> Markup {
    let class = match extra_class {
        Some(extra) => format!("{} {}", icon.class(), extra),
        None => icon.class().to_string(),
    };

    html! {
        i class=(class) style=(format!("font-size: {}px", size)) aria-hidden="true" {}
    }
}
