use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Component for storing the dynamic state of a bead on the ring
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeadState {
    /// Angular position on the ring, measured from the lowest point [rad]
    pub theta: f64,

    /// Angular velocity along the ring [rad/s]
    pub theta_dot: f64,

    /// Accumulated rotation phase of the ring about the vertical axis [rad].
    /// Grows without bound; never wrapped to [0, 2pi).
    pub phi: f64,
}

impl Default for BeadState {
    fn default() -> Self {
        Self {
            theta: 0.0,
            theta_dot: 0.0,
            phi: 0.0,
        }
    }
}

impl BeadState {
    /// Create a new bead state from initial conditions, with zero ring phase
    pub fn new(theta0: f64, theta_dot0: f64) -> Self {
        Self {
            theta: theta0,
            theta_dot: theta_dot0,
            phi: 0.0,
        }
    }

    /// True when every state variable is a normal floating point value
    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.theta_dot.is_finite() && self.phi.is_finite()
    }
}
