//! Directory snapshot and rendering.
//!
//! A listing pass collects the entries of one directory ([`entry`]), orders
//! them ([`order`]) and prints them in plain, long or size form ([`render`]),
//! optionally descending into subdirectories.

#[macro_use]
pub mod utils;

pub mod date;
pub mod entry;
pub mod error;
pub mod identity;
pub mod mode;
pub mod options;
pub mod order;
pub mod render;
pub mod size;

pub use entry::{DirectoryEntry, Listing};
pub use options::{ListOptions, OutputMode, SortOrder};
pub use render::Lister;
