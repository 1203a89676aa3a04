pub mod physics;
pub mod ring;
pub mod simulation;
pub mod start;

pub use physics::PhysicsConfig;
pub use ring::RingConfig;
pub use simulation::SimulationConfig;
pub use start::StartConfig;
