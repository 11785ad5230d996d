//! Tier section and intro components

use maud::{Markup, PreEscaped, html};

use super::icons::icon;
use super::partner_card::partner_card;
use crate::logo::LogoMap;
use crate::partner::{PartnerCollection, Tier};

/// Renders the intro block
///
/// # Arguments
///
/// * `intro_html`: Rendered HTML of the intro copy, block elements included
pub fn intro(intro_html: &str) -> Markup {
    html! {
        div class="partner-section partner-intro" {
            div class="partner-intro-text" { (PreEscaped(intro_html)) }
        }
    }
}

/// Column counts of a grid as CSS custom properties, smallest breakpoint first
fn grid_style(columns: [u8; 3]) -> String {
    let [base, small, large] = columns;
    format!("--cols: {}; --cols-sm: {}; --cols-lg: {}", base, small, large)
}

/// Renders one tier: heading with icon, then the responsive card grid
///
/// Heading text, icon size, and grid columns all come from the tier's
/// layout. An empty collection still renders the heading over an empty grid.
///
/// # Arguments
///
/// * `tier`: Tier being rendered
/// * `collection`: Records of the tier in display order
/// * `logos`: Published logo URLs
///
/// # Returns
///
/// Section markup
pub fn tier_section(tier: Tier, collection: &PartnerCollection, logos: &LogoMap) -> Markup {
    let layout = tier.layout();

    html! {
        section class="partner-section tier-section" data-tier=(tier.key()) {
            div class=(format!("tier-heading {}", layout.heading_class)) {
                (icon(layout.icon, layout.icon_size, None))
                h2 { (layout.heading) }
            }
            div class=(format!("partner-grid {}", layout.grid_class)) style=(grid_style(layout.columns)) {
                @for record in collection {
                    (partner_card(record.name(), logos.href(record.logo()), tier))
                }
            }
        }
    }
}
