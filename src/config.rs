//! Runtime configuration.
//!
//! Settings come from the environment. Logging verbosity is not part of [`SystemConfig`]: it
//! is read from `RUST_LOG` by [`setup_tracing`](resource_actor::tracing::setup_tracing).

use thiserror::Error;

/// Environment variable overriding [`SystemConfig::channel_capacity`].
pub const CHANNEL_CAPACITY_VAR: &str = "GRUBDASH_CHANNEL_CAPACITY";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidChannelCapacity { var: &'static str, value: String },
}

/// Settings for [`GrubDashSystem`](crate::lifecycle::GrubDashSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of each actor's request channel. Senders wait while it is full.
    pub channel_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
        }
    }
}

impl SystemConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from `lookup`, falling back to the defaults for anything it
    /// does not provide.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidChannelCapacity {
                        var: CHANNEL_CAPACITY_VAR,
                        value,
                    })
                }
            };
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(|_| None), Ok(SystemConfig::default()));
        assert_eq!(SystemConfig::default().channel_capacity, 32);
    }

    #[test]
    fn test_capacity_override() {
        let config = SystemConfig::from_lookup(|var| {
            (var == CHANNEL_CAPACITY_VAR).then(|| " 128 ".to_string())
        })
        .unwrap();
        assert_eq!(config.channel_capacity, 128);
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        for value in ["0", "-4", "lots", ""] {
            let result = SystemConfig::from_lookup(|_| Some(value.to_string()));
            assert_eq!(
                result,
                Err(ConfigError::InvalidChannelCapacity {
                    var: CHANNEL_CAPACITY_VAR,
                    value: value.to_string(),
                })
            );
        }
    }
}
