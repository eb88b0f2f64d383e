pub mod catalog;
pub mod escape;
pub mod naming;

/* Re-export main public items */
pub use catalog::{Catalog, CatalogEntry};
pub use escape::{escape_string, quote};
pub use naming::{chain_id_const_name, identifier_label, sanitize};
