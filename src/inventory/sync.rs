//! One-way latch between derived and hand-typed totals

use serde::{Deserialize, Serialize};

/// Whether the total available quantity still follows the case fields.
///
/// Starts `Auto` and latches to `Manual` the first time the total is edited
/// directly. Nothing moves it back; a fresh form starts over in `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuantitySync {
    #[default]
    Auto,
    Manual,
}

impl QuantitySync {
    /// Case quantity / received case edits recompute the total only in `Auto`.
    pub fn follows_cases(self) -> bool {
        matches!(self, QuantitySync::Auto)
    }

    /// State after the total was edited by hand.
    pub fn on_manual_edit(self) -> Self {
        QuantitySync::Manual
    }
}
