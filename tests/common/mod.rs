use bevy::prelude::*;
use whirl::components::{BeadState, RingParameters};
use whirl::plugins::PhysicsPlugin;
use whirl::resources::SimulationConfig;

/// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(PhysicsPlugin::with_config(self.config));

        // Run an initial update to spawn the bead; no fixed steps elapse on
        // the first frame.
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Run the fixed-update schedule directly for a deterministic number of
    /// physics ticks, independent of wall time.
    pub fn run_fixed_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn send_event<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    pub fn bead_state(&mut self) -> BeadState {
        let world = self.app.world_mut();
        let mut query = world.query::<&BeadState>();
        query.single(world).clone()
    }

    pub fn ring_params(&mut self) -> RingParameters {
        let world = self.app.world_mut();
        let mut query = world.query::<&RingParameters>();
        query.single(world).clone()
    }

    pub fn resource<R: Resource + Clone>(&self) -> R {
        self.app.world().resource::<R>().clone()
    }
}

/// Assert that a bead state contains no non-finite values
#[track_caller]
pub fn assert_bead_state_valid(state: &BeadState) {
    assert!(state.theta.is_finite(), "theta is not finite");
    assert!(state.theta_dot.is_finite(), "theta_dot is not finite");
    assert!(state.phi.is_finite(), "phi is not finite");
}
