//! Chain Registry Types
//!
//! This crate contains the record types describing one blockchain network as
//! found in the chain registry. It provides pure data structures without any
//! file I/O or code generation logic.

pub mod types;

// Re-export commonly used types at the crate root
pub use types::*;
