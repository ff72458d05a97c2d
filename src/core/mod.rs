//! Core resolution-and-request engine.

pub mod matcher;
pub mod orchestrator;
pub mod seasons;
pub mod summary;
