//! Completion events handed to finish callbacks

use serde::{Deserialize, Serialize};

/// Snapshot of a finished run of an animation, delivered to the
/// `on_finish` callback of every action that took part in it.
///
/// The event is read-only context for the callback; the driving engine
/// owns its construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinishEvent {
    /// Playback time in seconds at which the run completed.
    pub time: f32,
    /// 1-based index of the completed run within the owning animation.
    pub execution: i32,
}

impl FinishEvent {
    /// Create a finish event for the given time and run index
    #[inline]
    pub fn new(time: f32, execution: i32) -> Self {
        Self { time, execution }
    }
}
