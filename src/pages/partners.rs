//! Partners page composition and lifecycle.

use maud::{Markup, html};

use crate::animation::{AnimationScope, Animator, GSAP_SRC, entrance_sequence};
use crate::components::cta::cta_banner;
use crate::components::layout::{Shell, page_wrapper};
use crate::components::section::{intro, tier_section};
use crate::content::PageContent;
use crate::logo::LogoMap;
use crate::markdown::MarkdownRenderer;
use crate::partner::{PartnerDirectory, Tier};

/// Id of the element every entrance animation is scoped to.
pub const ROOT_ID: &str = "partners-root";

/// Stylesheet path relative to the generated page.
pub const STYLESHEET: &str = "assets/partners.css";

/// The partners page: intro, three tier sections, and the CTA banner.
///
/// Rendering is pure; the same inputs always produce the same markup.
/// Animations are attached separately through [`PartnersPage::mount`].
pub struct PartnersPage<'a> {
    directory: &'a PartnerDirectory,
    content: &'a PageContent,
    logos: &'a LogoMap,
}

impl<'a> PartnersPage<'a> {
    pub fn new(directory: &'a PartnerDirectory, content: &'a PageContent, logos: &'a LogoMap) -> Self {
        Self {
            directory,
            content,
            logos,
        }
    }

    /// Selector of the page root
    pub fn root_selector() -> String {
        format!("#{}", ROOT_ID)
    }

    /// Renders the page body inside its animation root.
    ///
    /// Blocks appear in fixed order: intro, mantenedores, parceiros, apoio,
    /// call to action.
    pub fn render(&self) -> Markup {
        let renderer = MarkdownRenderer::new();
        let intro_html = renderer.render(&self.content.intro);
        let cta_html = renderer.render(&self.content.cta_body);

        html! {
            div id=(ROOT_ID) class="partners" {
                (intro(&intro_html))
                @for tier in Tier::ALL {
                    (tier_section(tier, self.directory.collection(tier), self.logos))
                }
                (cta_banner(
                    &self.content.cta_heading,
                    &cta_html,
                    &self.content.cta_label,
                    self.content.cta_href.as_deref(),
                ))
            }
        }
    }

    /// Starts the entrance sequence and keeps its context alive.
    ///
    /// The returned guard represents the mounted page; dropping it unmounts
    /// the page and reverts the animation context.
    pub fn mount<'s, A: Animator + ?Sized>(&'s self, animator: &'s mut A) -> MountedPage<'s, A> {
        let mut scope = AnimationScope::acquire(animator, &Self::root_selector());
        for tween in entrance_sequence() {
            scope.from(&tween);
        }
        MountedPage { page: self, scope }
    }

    /// Renders the complete document with the entrance script attached.
    ///
    /// The page is mounted into a [`ScriptAnimator`](crate::ScriptAnimator)
    /// and unmounted again, so the script carries both the entrance tweens
    /// and the teardown that disposes them when the browser leaves the page.
    pub fn document(&self) -> Markup {
        let mut animator = crate::animation::ScriptAnimator::new();
        self.mount(&mut animator).unmount();

        let shell = Shell {
            title: &self.content.title,
            site_name: &self.content.site_name,
            stylesheets: &[STYLESHEET],
            scripts: &[GSAP_SRC],
        };

        page_wrapper(&shell, self.render(), animator.markup())
    }
}

/// A page with a live entrance animation context.
pub struct MountedPage<'a, A: Animator + ?Sized> {
    page: &'a PartnersPage<'a>,
    scope: AnimationScope<'a, A>,
}

impl<'a, A: Animator + ?Sized> MountedPage<'a, A> {
    pub fn page(&self) -> &PartnersPage<'a> {
        self.page
    }

    pub fn context(&self) -> crate::animation::ContextId {
        self.scope.context()
    }

    /// Unmounts the page, reverting its animation context.
    pub fn unmount(self) {
        self.scope.revert();
    }
}
