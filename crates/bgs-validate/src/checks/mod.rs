//! Sub-checks run by the engine, one per validation dimension.

pub mod accessibility;
pub mod brand;
pub mod performance;
