use bevy::prelude::*;

/// Gates whether fixed-update ticks actually run a physics step.
///
/// Pausing does not stop the fixed schedule; it only makes each tick a
/// no-op, so simulated time simply stops advancing until resumed.
#[derive(Resource, Debug, Clone)]
pub struct SimControl {
    pub running: bool,
    pub steps_completed: u64,
}

impl Default for SimControl {
    fn default() -> Self {
        Self {
            running: true,
            steps_completed: 0,
        }
    }
}
