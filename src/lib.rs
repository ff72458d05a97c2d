//! Trendarr Library
//!
//! A library for resolving trending Netflix titles against Overseerr and
//! requesting each one exactly once.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;

pub use error::{Error, Result};
