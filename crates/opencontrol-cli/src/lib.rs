//! CLI library components for the OpenControl standards viewer.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod render;
