use crate::components::{BeadState, RingParameters};
use crate::resources::{PhaseHistory, PhysicsConfig, SimControl, SimulationConfig};
use bevy::prelude::*;

/// Pause or resume stepping. Paused ticks still elapse; the state simply
/// stops advancing until resumed.
#[derive(Event, Debug, Clone)]
pub struct SetPausedEvent {
    pub paused: bool,
}

/// Adjust the ring's driving rate live. Takes effect on the next step with
/// no discontinuity in `theta`/`theta_dot`.
#[derive(Event, Debug, Clone)]
pub struct SetDrivingRateEvent {
    pub rate: f64,
}

/// Reload parameters and reinitialize the bead state. Carries an optional
/// replacement configuration; with `None` the stored configuration is
/// reapplied. The phase-space history is cleared either way.
#[derive(Event, Debug, Clone, Default)]
pub struct ResetRequestEvent {
    pub config: Option<SimulationConfig>,
}

pub fn handle_pause_events(
    mut events: EventReader<SetPausedEvent>,
    mut control: ResMut<SimControl>,
) {
    for event in events.read() {
        control.running = !event.paused;
        info!(
            "Simulation {}",
            if event.paused { "paused" } else { "resumed" }
        );
    }
}

pub fn handle_driving_rate_events(
    mut events: EventReader<SetDrivingRateEvent>,
    mut query: Query<&mut RingParameters>,
) {
    for event in events.read() {
        if !event.rate.is_finite() {
            warn!("Ignoring non-finite driving rate {}", event.rate);
            continue;
        }

        for mut params in query.iter_mut() {
            params.driving_rate = event.rate;
        }
    }
}

pub fn handle_reset_events(
    mut events: EventReader<ResetRequestEvent>,
    mut stored: ResMut<SimulationConfig>,
    mut physics: ResMut<PhysicsConfig>,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut history: ResMut<PhaseHistory>,
    mut control: ResMut<SimControl>,
    mut query: Query<(&mut RingParameters, &mut BeadState)>,
) {
    for event in events.read() {
        if let Some(config) = &event.config {
            if let Err(err) = config.validate() {
                warn!("Ignoring reset with invalid configuration: {err}");
                continue;
            }

            *stored = config.clone();
            *physics = config.physics.clone();
            fixed_time.set_timestep_seconds(config.physics.time_step);
        }

        for (mut params, mut state) in query.iter_mut() {
            *params = RingParameters::from_config(&stored);
            *state = BeadState::new(stored.start.theta0, stored.start.theta_dot0);
        }

        history.clear();
        control.steps_completed = 0;
        info!("Simulation reset");
    }
}
