//! CLI modules.

pub mod args;
pub mod commands;
