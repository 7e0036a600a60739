//! Error types

mod config;
mod field;
mod ingest;

pub use config::*;
pub use field::*;
pub use ingest::*;
