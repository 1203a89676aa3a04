mod physics;

pub use physics::{PhysicsPlugin, PhysicsSet};
