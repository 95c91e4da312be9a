//! Embedded catalog data.
//!
//! The default catalog is compiled in with `include_str!()` so the engine
//! works without any files on disk. Hosts that version their own catalog
//! load it with [`Catalog::load`](crate::Catalog::load) instead.

/// Default background catalog: legacy Tailwind variations followed by the
/// curated CSS backgrounds.
pub const BACKGROUNDS_JSON: &str = include_str!("../data/backgrounds.json");
