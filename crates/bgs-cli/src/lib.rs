//! CLI library components for the `bgs` tool.

pub mod logging;
pub mod report;
pub mod settings;
