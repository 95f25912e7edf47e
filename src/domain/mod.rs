//! Core formatting domain logic.
//!
//! This module contains the three stages of the formatting pipeline:
//! normalization of raw input into a canonical digit sequence, first-match
//! descriptor selection over an ordered catalog, and template rendering.

pub mod matcher;
pub mod normalize;
pub mod render;

pub use matcher::find_format;
pub use normalize::normalize;
pub use render::render;

/// Marker character standing for one digit position in a display template.
pub const PLACEHOLDER: char = '#';
