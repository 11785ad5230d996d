//! Call-to-action banner

use maud::{Markup, PreEscaped, html};

use super::icons::{Icon, icon};

/// Renders the closing call-to-action banner
///
/// Heading and copy on the left, action button with a trailing arrow on the
/// right (stacked on narrow viewports). Without a link target the button is
/// rendered as a plain button element.
///
/// # Arguments
///
/// * `heading`: Banner heading text
/// * `body_html`: Rendered HTML of the banner copy, block elements included
/// * `label`: Button label
/// * `href`: Optional button link target
pub fn cta_banner(heading: &str, body_html: &str, label: &str, href: Option<&str>) -> Markup {
    html! {
        div class="partner-section cta-section" {
            div class="cta-banner" {
                div class="cta-glow" {}
                div class="cta-content" {
                    div class="cta-copy" {
                        h3 class="cta-heading" { (heading) }
                        div class="cta-body" { (PreEscaped(body_html)) }
                    }
                    @if let Some(link) = href {
                        a class="cta-button" href=(link) {
                            (label)
                            (icon(Icon::ArrowRight, 20, Some("cta-arrow")))
                        }
                    } @else {
                        button class="cta-button" type="button" {
                            (label)
                            (icon(Icon::ArrowRight, 20, Some("cta-arrow")))
                        }
                    }
                }
            }
        }
    }
}
