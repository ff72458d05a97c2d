//! Output file generators.

pub mod collection;
