//! Flat-file name database and its case-insensitive lookup.

mod lookup;
mod store;

pub use lookup::{EntryLookup, normalize_name};
pub use store::NameDatabase;
