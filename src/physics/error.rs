use crate::resources::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
