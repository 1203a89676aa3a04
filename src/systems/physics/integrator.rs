use crate::components::{BeadState, RingParameters};
use crate::physics::{advance, Rk4Integrator};
use crate::resources::{PhysicsConfig, SimControl};
use bevy::prelude::*;

/// System to advance every bead by one fixed physics step.
///
/// Runs once per `FixedUpdate` tick. While paused it leaves the state
/// untouched; the tick itself still elapses, so resuming continues from the
/// same state at the normal fixed rate.
///
/// # Arguments
/// - `query`: entities carrying `RingParameters` and `BeadState`.
/// - `config`: physics configuration resource for the step size.
/// - `control`: pause gate and step counter.
pub fn bead_integrator_system(
    mut query: Query<(&RingParameters, &mut BeadState)>,
    config: Res<PhysicsConfig>,
    mut control: ResMut<SimControl>,
) {
    if !control.running {
        return;
    }

    let integrator = Rk4Integrator::new(config.time_step);

    for (params, mut state) in query.iter_mut() {
        advance(params, &mut state, &integrator);
    }

    control.steps_completed += 1;
}
