//! Page shell component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Document metadata and chrome shared by every generated page.
pub struct Shell<'a> {
    /// Page title, shown as the main heading and in the document title
    pub title: &'a str,
    /// Institution name, shown in the header and as the title suffix
    pub site_name: &'a str,
    /// CSS file paths to include
    pub stylesheets: &'a [&'a str],
    /// External script URLs loaded before the body content
    pub scripts: &'a [&'a str],
}

/// Wraps page content with the site shell
///
/// Provides DOCTYPE, head, site header with the page title, and footer.
/// Caller content lands inside `main`; `trailing` is placed at the end of
/// `body`, after layout-affecting markup, which is where inline scripts that
/// must observe committed layout belong.
///
/// # Arguments
///
/// * `shell`: Title, site name and resources
/// * `body`: Page-specific content
/// * `trailing`: Markup appended after the footer
///
/// # Returns
///
/// Complete HTML document
pub fn page_wrapper(shell: &Shell<'_>, body: Markup, trailing: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (shell.title) " - " (shell.site_name) }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for script in shell.scripts {
                    script src=(script) {}
                }
                @for stylesheet in shell.stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                header class="site-header" {
                    div class="container" {
                        span class="site-name" { (shell.site_name) }
                        h1 class="page-title" { (shell.title) }
                    }
                }
                main class="container" {
                    (body)
                }
                (footer(shell.site_name))
                (trailing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_title_and_resources() {
        // Arrange
        let shell = Shell {
            title: "Parceiros e Empresas",
            site_name: "Instituto Casa do Pai",
            stylesheets: &["assets/partners.css"],
            scripts: &["https://unpkg.com/gsap@3/dist/gsap.min.js"],
        };

        // Act
        let html = page_wrapper(&shell, html! { p { "body" } }, html! {}).into_string();

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Parceiros e Empresas - Instituto Casa do Pai</title>"));
        assert!(html.contains("<h1 class=\"page-title\">Parceiros e Empresas</h1>"));
        assert!(html.contains("href=\"assets/partners.css\""));
        assert!(html.contains("src=\"https://unpkg.com/gsap@3/dist/gsap.min.js\""));
        assert!(html.contains("<main class=\"container\"><p>body</p></main>"));
    }

    #[test]
    fn test_trailing_markup_is_last_in_body() {
        // Arrange
        let shell = Shell {
            title: "T",
            site_name: "S",
            stylesheets: &[],
            scripts: &[],
        };

        // Act
        let html = page_wrapper(&shell, html! {}, html! { script { "run()" } }).into_string();

        // Assert
        assert!(html.ends_with("<script>run()</script></body></html>"));
    }
}
