use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::time::Duration;

use whirl::components::BeadState;
use whirl::plugins::PhysicsPlugin;
use whirl::resources::{SimControl, SimulationConfig};
use whirl::systems::SetDrivingRateEvent;

const SPIN_UP_STEP: u64 = 150;
const FINAL_STEP: u64 = 300;

fn main() {
    let config = SimulationConfig::default();

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(PhysicsPlugin::with_config(config))
        .add_systems(Update, (report_state, spin_up, stop_after_window))
        .run();
}

/// Log a state snapshot roughly once per simulated second
fn report_state(query: Query<&BeadState>, control: Res<SimControl>, mut last_report: Local<u64>) {
    if control.steps_completed < *last_report + 100 {
        return;
    }
    *last_report = control.steps_completed;

    for state in &query {
        info!(
            "step {:4} theta={:+.4} theta_dot={:+.4} phi={:8.4}",
            control.steps_completed, state.theta, state.theta_dot, state.phi
        );
    }
}

/// Exercise the live driving-rate command partway through the run
fn spin_up(
    control: Res<SimControl>,
    mut events: EventWriter<SetDrivingRateEvent>,
    mut sent: Local<bool>,
) {
    if !*sent && control.steps_completed >= SPIN_UP_STEP {
        events.send(SetDrivingRateEvent { rate: 2.5 });
        *sent = true;
        info!("Driving rate raised to 2.5 rad/s");
    }
}

fn stop_after_window(control: Res<SimControl>, mut exit: EventWriter<AppExit>) {
    if control.steps_completed >= FINAL_STEP {
        info!("Simulated window complete, exiting");
        exit.send(AppExit::Success);
    }
}
