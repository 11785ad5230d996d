//! Static generator for an institutional partners page.

pub mod animation;
mod assets;
pub mod components;
mod config;
mod content;
mod generator;
mod image;
pub mod logo;
mod markdown;
pub mod pages;
mod partner;
mod provider;

pub use animation::{
    AnimationScope, Animator, ContextId, Ease, FromState, ScriptAnimator, Tween, entrance_sequence,
};
pub use assets::{LogoMode, publish_logos, write_css_assets};
pub use config::Config;
pub use content::{ContentOverrides, PageContent};
pub use generator::{GeneratedSite, generate_site, render_site};
pub use image::{ImageFormat, detect_image_format};
pub use logo::{LogoMap, LogoRef};
pub use markdown::MarkdownRenderer;
pub use pages::partners::{MountedPage, PartnersPage};
pub use partner::{PartnerCollection, PartnerDirectory, PartnerRecord, Tier, TierLayout};
pub use provider::{PartnerProvider, SampleProvider, TomlProvider};
