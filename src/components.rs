//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions for the partners page:
//! the site shell, tier sections, partner cards, the call-to-action banner,
//! and icons. Each component owns one visual element and its class names,
//! which the bundled stylesheet targets.

pub mod cta;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod partner_card;
pub mod section;
