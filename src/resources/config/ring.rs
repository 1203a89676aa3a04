use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    pub radius: f64,
    pub mass: f64,
    pub damping: f64,
    pub driving_rate: f64,
}
