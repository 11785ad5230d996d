//! Page generation modules
//!
//! Each page module composes shared components from the components module
//! into a complete document.

pub mod partners;
