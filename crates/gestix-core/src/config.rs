//! Simulation configuration.
//!
//! Default intermediate sample counts for each gesture phase. Operations
//! take an explicit `callbacks_number` per call; when it is unset, the
//! values here apply. [`crate::simulate::UserEvent::setup`] uses the
//! defaults; [`crate::simulate::UserEvent::with_config`] overrides them for
//! one handle.

use serde::{Deserialize, Serialize};

/// Defaults applied when a gesture does not specify its own sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Intermediate samples emitted during the drag phase of `scroll_to`.
    pub drag_steps: u32,

    /// Intermediate samples emitted during a momentum phase.
    pub momentum_steps: u32,

    /// Intermediate samples emitted by `scroll_to_top`.
    pub scroll_to_top_steps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            drag_steps: 3,
            momentum_steps: 0,
            scroll_to_top_steps: 0,
        }
    }
}
