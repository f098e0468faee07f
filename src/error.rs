//! Configuration errors
//!
//! Everything that can go wrong happens while building a session. Once a
//! session exists, per-frame operations are total.

use thiserror::Error;

/// Startup-time misconfiguration. Reported once; the session is not built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The spawner has nothing to spawn
    #[error("archetype set is empty; at least one archetype is required")]
    EmptyArchetypes,

    /// A min/max pair is not finite or is reversed
    #[error("invalid range for {name}: [{min}, {max}]")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    /// A quantity that must be strictly positive is not
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    /// A required collaborator was never supplied to the session builder
    #[error("missing required collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
