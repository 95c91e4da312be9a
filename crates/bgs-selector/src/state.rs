//! Search and selection state machines.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// `Idle → SearchPending → OptionsReady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    /// A search was requested and waits for the mode's debounce to elapse.
    /// Further requests move `requested_at` forward.
    SearchPending { requested_at: Instant },
    OptionsReady,
}

impl SearchState {
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::SearchPending { .. })
    }
}

/// `NoSelection → Previewing → Selected → Applying → {Applied | Failed → Selected}`.
///
/// A failed apply is not a resting state: the controller records the error
/// and falls back to `Selected` (or `Previewing` when only a preview exists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SelectionState {
    NoSelection,
    Previewing,
    Selected,
    Applying,
    Applied { at: DateTime<Utc> },
}

impl SelectionState {
    #[inline]
    pub fn is_applying(&self) -> bool {
        matches!(self, Self::Applying)
    }
}
