//! Background selector controller.
//!
//! An explicit state machine over the engine crates. The controller holds
//! the picker's mode, brand colors, selection, preview and a search cache,
//! and takes commands:
//!
//! - `SetMode` / `SetBrandColors`: invalidate the cache and schedule a
//!   debounced search (`Idle → SearchPending → OptionsReady`)
//! - `SelectVariation` / `Preview`: pick a candidate and validate it
//! - `Apply`: check the candidate and persist it through a
//!   [`BackgroundStore`], one apply at a time, within a timeout
//! - `Reset`: return to the generated safe default

pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod store;

pub use config::SelectorConfig;
pub use controller::{ApplyTicket, Command, Event, SelectorController};
pub use error::{ApplyError, Result, SelectorError};
pub use state::{SearchState, SelectionState};
pub use store::{BackgroundStore, MemoryStore, StoreError};
