//! Value payload types

mod money;

pub use money::*;
