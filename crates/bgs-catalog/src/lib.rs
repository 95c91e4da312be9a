//! Background variation catalog.
//!
//! The catalog is static reference data: an ordered list of legacy
//! (Tailwind class) and enhanced (raw CSS) variations. A default catalog is
//! embedded; hosts can load their own from JSON.

pub mod catalog;
pub mod embedded;
pub mod error;
pub mod preview;

pub use catalog::{Catalog, CatalogStats};
pub use error::{CatalogError, Result};
pub use preview::{BackgroundPreview, background_preview, descriptor_for, shade_family};
