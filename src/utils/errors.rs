use std::io;
use thiserror::Error;

use crate::physics::PhysicsError;
use crate::resources::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Physics error: {0}")]
    PhysicsError(#[from] PhysicsError),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Step called on a terminated episode, reset required")]
    EpisodeTerminated,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
