//! Site footer component

use maud::{Markup, html};

/// Renders the site footer with the institution name.
pub fn footer(site_name: &str) -> Markup {
    html! {
        footer class="site-footer" {
            div class="container" {
                p { (site_name) }
            }
        }
    }
}
