pub mod bead;
pub mod ring;

pub use bead::BeadState;
pub use ring::RingParameters;
