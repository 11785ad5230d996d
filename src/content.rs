//! Page copy.

use serde::Deserialize;

const DEFAULT_INTRO: &str = "A transformação social é um esforço coletivo. O **Instituto Casa do Pai** une forças com empresas e organizações visionárias que entendem seu papel na construção de uma comunidade mais justa e acolhedora. Juntos, criamos oportunidades e mudamos realidades.";

const DEFAULT_CTA_BODY: &str = "Associe sua marca a projetos de impacto social real. Junte-se à nossa rede de parceiros e faça parte dessa história.";

/// Text shown around the partner grids.
///
/// `intro` and `cta_body` are Markdown; the other fields are plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub site_name: String,
    pub intro: String,
    pub cta_heading: String,
    pub cta_body: String,
    pub cta_label: String,
    /// Link target of the CTA button; without one the button is inert
    pub cta_href: Option<String>,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "Parceiros e Empresas".to_string(),
            site_name: "Instituto Casa do Pai".to_string(),
            intro: DEFAULT_INTRO.to_string(),
            cta_heading: "Sua empresa pode ser um agente de transformação".to_string(),
            cta_body: DEFAULT_CTA_BODY.to_string(),
            cta_label: "Seja um Parceiro".to_string(),
            cta_href: None,
        }
    }
}

/// Partial page copy as written in a data file's `[page]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentOverrides {
    pub title: Option<String>,
    pub site_name: Option<String>,
    pub intro: Option<String>,
    pub cta_heading: Option<String>,
    pub cta_body: Option<String>,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
}

impl PageContent {
    /// Replaces every field the overrides set.
    pub fn apply(&mut self, overrides: ContentOverrides) {
        let ContentOverrides {
            title,
            site_name,
            intro,
            cta_heading,
            cta_body,
            cta_label,
            cta_href,
        } = overrides;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(site_name) = site_name {
            self.site_name = site_name;
        }
        if let Some(intro) = intro {
            self.intro = intro;
        }
        if let Some(cta_heading) = cta_heading {
            self.cta_heading = cta_heading;
        }
        if let Some(cta_body) = cta_body {
            self.cta_body = cta_body;
        }
        if let Some(cta_label) = cta_label {
            self.cta_label = cta_label;
        }
        if cta_href.is_some() {
            self.cta_href = cta_href;
        }
    }
}
