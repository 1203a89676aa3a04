use crate::components::BeadState;
use crate::resources::{PhaseHistory, SimControl};
use bevy::prelude::*;

/// Record a `(theta, theta_dot)` phase-space point after each physics step
pub fn record_history_system(
    query: Query<&BeadState>,
    mut history: ResMut<PhaseHistory>,
    control: Res<SimControl>,
) {
    if !control.running {
        return;
    }

    for state in query.iter() {
        history.push(state.theta, state.theta_dot);
    }
}
