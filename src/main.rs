use whirl::physics::RingModel;
use whirl::rendering::{BeadView, PoseRecorder};
use whirl::resources::{SimulationConfig, StepClock};

fn main() {
    let config = SimulationConfig::default();
    let mut model = RingModel::new(&config).unwrap();
    let mut clock = StepClock::new(config.physics.time_step, config.physics.max_substeps);

    let mut view = PoseRecorder::new(config.ring.radius);
    view.add_to_scene();

    // Feed the accumulator synthetic 60 Hz frames so a run covers ten
    // simulated seconds without waiting on wall time.
    let frame_time = 1.0 / 60.0;
    for frame in 0..600 {
        clock.accumulate(frame_time);
        for _ in 0..clock.drain() {
            model.step();
        }

        let state = model.state();
        view.rotate(state.phi, state.theta);

        if frame % 60 == 0 {
            println!(
                "t={:5.2}s theta={:+.4} theta_dot={:+.4} phi={:8.4} energy={:+.4}",
                frame as f64 * frame_time,
                state.theta,
                state.theta_dot,
                state.phi,
                model.energy()
            );
        }
    }

    if let Some(pose) = view.last_pose() {
        println!(
            "final bead position: [{:.3}, {:.3}, {:.3}]",
            pose.position.x, pose.position.y, pose.position.z
        );
    }
}
