//! Partner logo card

use maud::{Markup, html};

use crate::partner::Tier;

/// Renders a partner logo card
///
/// Fixed 16:9 container holding the logo image. The image is grayscale
/// until the pointer hovers the card, when it returns to full color and
/// scales up. Hover state lives entirely in CSS (`partner-card:hover`).
///
/// # Arguments
///
/// * `name`: Partner display name, used for the image alt text
/// * `logo_href`: Resolved image URL (relative path or data URI)
/// * `tier`: Tier selecting the card's layout class
///
/// # Returns
///
/// Card markup
pub fn partner_card(name: &str, logo_href: &str, tier: Tier) -> Markup {
    let class = format!("partner-card {}", tier.layout().card_class);

    html! {
        div class=(class) {
            div class="partner-card-frame" {
                img class="partner-logo" src=(logo_href) alt=(format!("Logo {}", name)) loading="lazy";
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_alt_text() {
        // Arrange & Act
        let html = partner_card("Empresa 1", "assets/logos/logo-1.svg", Tier::Mantenedor).into_string();

        // Assert
        assert!(html.contains("alt=\"Logo Empresa 1\""));
        assert!(html.contains("src=\"assets/logos/logo-1.svg\""));
    }

    #[test]
    fn test_card_layout_class_follows_tier() {
        // Arrange & Act
        let mantenedor = partner_card("A", "a.png", Tier::Mantenedor).into_string();
        let apoio = partner_card("A", "a.png", Tier::Apoio).into_string();

        // Assert
        assert!(mantenedor.contains("class=\"partner-card partner-card--mantenedor\""));
        assert!(apoio.contains("class=\"partner-card partner-card--apoio\""));
    }

    #[test]
    fn test_card_escapes_name() {
        // Arrange & Act
        let html = partner_card("A & <B>", "a.png", Tier::Parceiro).into_string();

        // Assert
        assert!(html.contains("alt=\"Logo A &amp; &lt;B&gt;\""));
    }
}
