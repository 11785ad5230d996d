//! Markdown rendering for page copy.
//!
//! Intro and call-to-action copy are written in Markdown so editors can
//! emphasize names (the intro bolds the institute name) without touching
//! markup.

use comrak::Options;

/// Renders Markdown page copy to HTML.
///
/// Enables the GFM extensions that make sense for prose (strikethrough,
/// autolinks) and smart punctuation. Raw HTML in the source is escaped.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.autolink = true;

        options.parse.smart = true;

        options.render.escape = true;

        Self { options }
    }

    /// Renders markdown content to an HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML, wrapped in block elements as comrak produces them
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
