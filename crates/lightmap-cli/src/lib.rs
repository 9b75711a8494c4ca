//! CLI library components for lightmap.

pub mod demo;
pub mod logging;
pub mod render;
pub mod run;
