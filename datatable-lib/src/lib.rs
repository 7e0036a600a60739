//! Tabular data presentation engine
//!
//! Filters, sorts, and paginates dynamic records for display, and renders the
//! visible window through per-column formatting rules or caller-supplied
//! renderers.

pub mod error;
pub mod model;
pub mod table;

pub use table::Column;
pub use table::DerivedView;
pub use table::RenderedTable;
pub use table::Table;
pub use table::TableConfig;
pub use table::TableViewState;
