use super::{physics::PhysicsConfig, ring::RingConfig, start::StartConfig};
use crate::resources::ConfigError;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub ring: RingConfig,
    pub start: StartConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig {
                time_step: 0.01,
                max_substeps: 4,
                gravity: 9.8,
            },
            ring: RingConfig {
                radius: 5.0,
                mass: 1.0,
                damping: 0.1,
                driving_rate: 1.0,
            },
            start: StartConfig {
                theta0: 0.1,
                theta_dot0: 0.0,
            },
        }
    }
}

impl SimulationConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Reject out-of-domain parameters before they can reach the integrator
    /// and surface as silent NaN production.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.require("physics.time_step", self.physics.time_step, |v| v > 0.0)?;
        self.require("physics.gravity", self.physics.gravity, |_| true)?;
        self.require("ring.radius", self.ring.radius, |v| v > 0.0)?;
        self.require("ring.mass", self.ring.mass, |v| v > 0.0)?;
        self.require("ring.damping", self.ring.damping, |v| v >= 0.0)?;
        self.require("ring.driving_rate", self.ring.driving_rate, |_| true)?;
        self.require("start.theta0", self.start.theta0, |_| true)?;
        self.require("start.theta_dot0", self.start.theta_dot0, |_| true)?;

        if self.physics.max_substeps == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "physics.max_substeps".to_string(),
                value: 0.0,
            });
        }

        Ok(())
    }

    fn require(
        &self,
        name: &str,
        value: f64,
        in_domain: impl Fn(f64) -> bool,
    ) -> Result<(), ConfigError> {
        if value.is_finite() && in_domain(value) {
            Ok(())
        } else {
            Err(ConfigError::InvalidParameter {
                name: name.to_string(),
                value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.physics.time_step, 0.01);
        assert_eq!(config.ring.radius, 5.0);
        assert_eq!(config.start.theta0, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() -> Result<(), ConfigError> {
        let config = SimulationConfig::default();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        // Test saving
        config.save(path)?;

        // Test loading
        let loaded_config = SimulationConfig::load(path)?;
        assert_eq!(loaded_config, config);

        Ok(())
    }

    #[test]
    fn test_invalid_config_load() {
        let result = SimulationConfig::load("nonexistent_file.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_out_of_domain_values() {
        let mut config = SimulationConfig::default();
        config.ring.radius = 0.0;

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        config.save(path).unwrap();

        assert!(SimulationConfig::load(path).is_err());
    }

    #[test]
    fn test_validation_failures() {
        let base = SimulationConfig::default();

        let mut config = base.clone();
        config.ring.mass = -1.0;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.ring.damping = -0.1;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.physics.time_step = 0.0;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.physics.max_substeps = 0;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.start.theta0 = f64::NAN;
        assert!(config.validate().is_err());
    }
}
