mod error;
mod integrator;
mod model;

pub use error::PhysicsError;
pub use integrator::Rk4Integrator;
pub use model::{advance, RingModel};
