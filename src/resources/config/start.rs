use serde::{Deserialize, Serialize};

/// Initial conditions for the bead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartConfig {
    pub theta0: f64,
    pub theta_dot0: f64,
}
