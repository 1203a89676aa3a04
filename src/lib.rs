pub mod components;
pub mod physics;
pub mod plugins;
pub mod rendering;
pub mod resources;
pub mod systems;

pub use components::{BeadState, RingParameters};
pub use physics::{PhysicsError, RingModel, Rk4Integrator};
pub use plugins::PhysicsPlugin;
pub use rendering::{BeadPose, BeadView, PoseRecorder};
pub use resources::{ConfigError, PhaseHistory, SimControl, SimulationConfig, StepClock};
