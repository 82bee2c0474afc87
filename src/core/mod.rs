//! Core types - pure abstractions shared across the codebase.

pub mod artifact;
mod record;
mod site;
mod status;
mod table;

pub use record::RedirectRecord;
pub use site::SitePathSet;
pub use status::StatusCode;
pub use table::RedirectTable;
