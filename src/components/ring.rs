use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::SimulationConfig;

/// Component for the physical parameters of a driven ring and its bead.
///
/// The parameter set is fixed for a run and only replaced wholesale on an
/// explicit reset; the one exception is `driving_rate`, which commands may
/// adjust live between steps.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingParameters {
    /// Ring radius [m]
    pub radius: f64,

    /// Bead mass [kg]
    pub mass: f64,

    /// Gravitational acceleration, positive downward [m/s^2]
    pub gravity: f64,

    /// Forced rotation rate of the ring about the vertical axis [rad/s]
    pub driving_rate: f64,

    /// Linear damping coefficient acting on the bead's velocity [N m s]
    pub damping: f64,
}

impl RingParameters {
    /// Assemble the parameter set from a validated simulation configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            radius: config.ring.radius,
            mass: config.ring.mass,
            gravity: config.physics.gravity,
            driving_rate: config.ring.driving_rate,
            damping: config.ring.damping,
        }
    }

    /// Angular acceleration of the bead from the equation of motion.
    ///
    /// For a bead of mass m on a ring of radius R spun at rate omega, with
    /// theta measured from the ring's lowest point and a linear damping
    /// torque of coefficient gamma:
    ///
    /// ```text
    /// a(theta, theta_dot) = sin(theta) * (omega^2 * cos(theta) - g / R)
    ///                       - (gamma / m) * theta_dot
    /// ```
    ///
    /// Pure function of its inputs and the stored parameters; callers pass
    /// the evaluation point explicitly so the integrator can sample it at
    /// fractional-step states.
    pub fn angular_acceleration(&self, theta: f64, theta_dot: f64) -> f64 {
        let omega2 = self.driving_rate * self.driving_rate;

        theta.sin() * (omega2 * theta.cos() - self.gravity / self.radius)
            - self.damping / self.mass * theta_dot
    }

    /// Mechanical energy of the bead in the frame co-rotating with the ring.
    ///
    /// This is the conserved quantity of the undamped system:
    /// kinetic energy along the ring minus the centrifugal potential minus
    /// the gravitational potential (zero at the ring's center height).
    pub fn mechanical_energy(&self, theta: f64, theta_dot: f64) -> f64 {
        let r2 = self.radius * self.radius;
        let omega2 = self.driving_rate * self.driving_rate;

        0.5 * self.mass * r2 * theta_dot * theta_dot
            - 0.5 * self.mass * omega2 * r2 * theta.sin() * theta.sin()
            - self.mass * self.gravity * self.radius * theta.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> RingParameters {
        RingParameters {
            radius: 5.0,
            mass: 1.0,
            gravity: 9.8,
            driving_rate: 0.0,
            damping: 0.0,
        }
    }

    #[test]
    fn test_acceleration_restores_toward_bottom() {
        // Without rotation the ring is a plain pendulum: a displaced bead
        // is pulled back toward theta = 0.
        let p = params();
        assert!(p.angular_acceleration(0.1, 0.0) < 0.0);
        assert!(p.angular_acceleration(-0.1, 0.0) > 0.0);
        assert_eq!(p.angular_acceleration(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_damping_opposes_motion() {
        let p = RingParameters {
            damping: 2.0,
            ..params()
        };
        assert_relative_eq!(p.angular_acceleration(0.0, 1.5), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centrifugal_term_destabilizes_bottom() {
        // With omega^2 * R > g the bottom becomes unstable and small
        // displacements are pushed outward.
        let p = RingParameters {
            driving_rate: 2.0,
            ..params()
        };
        assert!(p.angular_acceleration(0.1, 0.0) > 0.0);
    }

    #[test]
    fn test_energy_at_rest_at_bottom() {
        let p = params();
        assert_relative_eq!(
            p.mechanical_energy(0.0, 0.0),
            -p.mass * p.gravity * p.radius,
            epsilon = 1e-12
        );
    }
}
