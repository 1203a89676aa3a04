use crate::components::{BeadState, RingParameters};
use crate::resources::{PhaseHistory, SimControl, SimulationConfig};
use crate::systems::{
    bead_integrator_system, handle_driving_rate_events, handle_pause_events, handle_reset_events,
    record_history_system, ResetRequestEvent, SetDrivingRateEvent, SetPausedEvent,
};
use bevy::prelude::*;

/// Physics simulation stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PhysicsSet {
    Commands,
    Integration,
    Observation,
}

pub struct PhysicsPlugin {
    pub config: SimulationConfig,
}

impl Default for PhysicsPlugin {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
}

impl PhysicsPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        // Configure fixed timestep
        app.insert_resource(Time::<Fixed>::from_seconds(self.config.physics.time_step));

        // Add resources
        app.insert_resource(self.config.clone())
            .insert_resource(self.config.physics.clone())
            .init_resource::<SimControl>()
            .init_resource::<PhaseHistory>();

        // Register UI-facing command events
        app.add_event::<SetPausedEvent>()
            .add_event::<SetDrivingRateEvent>()
            .add_event::<ResetRequestEvent>();

        // Add systems in the correct order
        app.configure_sets(
            FixedUpdate,
            (
                PhysicsSet::Commands,
                PhysicsSet::Integration,
                PhysicsSet::Observation,
            )
                .chain(),
        );

        app.add_systems(Startup, spawn_bead);
        app.add_systems(
            FixedUpdate,
            (
                (
                    handle_pause_events,
                    handle_driving_rate_events,
                    handle_reset_events,
                )
                    .chain()
                    .in_set(PhysicsSet::Commands),
                bead_integrator_system.in_set(PhysicsSet::Integration),
                record_history_system.in_set(PhysicsSet::Observation),
            ),
        );
    }
}

fn spawn_bead(mut commands: Commands, config: Res<SimulationConfig>) {
    if let Err(err) = config.validate() {
        error!("Not spawning bead, invalid configuration: {err}");
        return;
    }

    commands.spawn((
        RingParameters::from_config(&config),
        BeadState::new(config.start.theta0, config.start.theta_dot0),
    ));
}
