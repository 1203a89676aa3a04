use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    pub time_step: f64,
    pub max_substeps: u32,
    pub gravity: f64,
}
