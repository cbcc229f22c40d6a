//! Rendering kit - escaping, block renderers, clusters, and composition

pub mod blocks;
pub mod clusters;
pub mod compose;
pub mod html;
