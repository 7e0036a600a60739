//! Record model

mod identity;
mod ingest;
mod record;
mod record_serde;
pub mod types;
mod value;

pub use identity::*;
pub use ingest::*;
pub use record::*;
pub use value::*;
