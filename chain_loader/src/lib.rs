//! Chain Registry Loading
//!
//! This crate discovers registry entry files, extracts the `data = { ... }`
//! object literal each one carries, and decodes it into a [`ChainRecord`].
//! Malformed entries are reported and skipped; the rest of the registry
//! still loads.

pub mod entry;
pub mod error;
pub mod extra_rpcs;
pub mod literal;
pub mod loader;

// Re-export commonly used types at the crate root
pub use entry::{extract_record, RegistryEntry};
pub use error::{EntryError, LiteralError, LoadError};
pub use extra_rpcs::{ExtraRpcsSource, ExtraRpcsStatus};
pub use literal::parse_object_literal;
pub use loader::{sort_by_chain_id, LoadReport, RegistryLoader, SkippedEntry};

// Re-export chain_types for convenience
pub use chain_types;
pub use chain_types::ChainRecord;
