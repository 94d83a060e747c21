//! CLI library components for the inventory reconciler.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
