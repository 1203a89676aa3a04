use crate::components::{BeadState, RingParameters};
use crate::physics::{PhysicsError, Rk4Integrator};
use crate::resources::SimulationConfig;

/// Advance a bead state by one fixed step.
///
/// `theta`/`theta_dot` go through the integrator; `phi` is advanced by the
/// plain product `driving_rate * dt`. The ring phase has a constant
/// derivative, so the Euler update is already exact and does not go through
/// the Runge-Kutta stages.
pub fn advance(params: &RingParameters, state: &mut BeadState, integrator: &Rk4Integrator) {
    let (theta, theta_dot) = integrator.integrate(state.theta, state.theta_dot, |x, v| {
        params.angular_acceleration(x, v)
    });

    state.theta = theta;
    state.theta_dot = theta_dot;
    state.phi += params.driving_rate * integrator.dt();
}

/// The physics model of a bead on a driven rotating ring.
///
/// Owns the parameter set, the bead state and the fixed-step integrator, and
/// is the only mutator of the state. A driving loop calls [`RingModel::step`]
/// once per elapsed fixed interval; a view collaborator reads the state
/// snapshot afterwards.
#[derive(Debug, Clone)]
pub struct RingModel {
    params: RingParameters,
    state: BeadState,
    integrator: Rk4Integrator,
}

impl RingModel {
    /// Build a model from a configuration, rejecting out-of-domain
    /// parameters before any stepping can occur.
    pub fn new(config: &SimulationConfig) -> Result<Self, PhysicsError> {
        config.validate()?;

        Ok(Self {
            params: RingParameters::from_config(config),
            state: BeadState::new(config.start.theta0, config.start.theta_dot0),
            integrator: Rk4Integrator::new(config.physics.time_step),
        })
    }

    /// Angular acceleration at an arbitrary `(theta, theta_dot)` pair.
    ///
    /// Does not touch the stored state; the integrator samples this at the
    /// fractional stage points of each step.
    pub fn acceleration(&self, theta: f64, theta_dot: f64) -> f64 {
        self.params.angular_acceleration(theta, theta_dot)
    }

    /// Advance the state by one fixed interval `dt`
    pub fn step(&mut self) {
        advance(&self.params, &mut self.state, &self.integrator);
    }

    /// Reinitialize parameters and state from a configuration.
    ///
    /// All-or-nothing: if validation fails the existing model is untouched.
    pub fn reset(&mut self, config: &SimulationConfig) -> Result<(), PhysicsError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Adjust the ring's driving rate; takes effect on the next step without
    /// any discontinuity in `theta`/`theta_dot`.
    pub fn set_driving_rate(&mut self, rate: f64) {
        self.params.driving_rate = rate;
    }

    pub fn state(&self) -> &BeadState {
        &self.state
    }

    pub fn params(&self) -> &RingParameters {
        &self.params
    }

    pub fn dt(&self) -> f64 {
        self.integrator.dt()
    }

    /// Mechanical energy of the current state in the co-rotating frame
    pub fn energy(&self) -> f64 {
        self.params
            .mechanical_energy(self.state.theta, self.state.theta_dot)
    }
}
