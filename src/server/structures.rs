use serde::{Deserialize, Serialize};

use crate::components::Observation;

/// Commands a client sends, one JSON object per line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Build the environment from a configuration
    Initialize { config: serde_json::Value },
    /// Advance one tick with raw rotor levels `[left, right]`
    Step { action: Vec<i64> },
    /// Start a new episode, optionally reseeding
    Reset { seed: Option<u64> },
    /// End the session
    Close,
}

/// Reply to `Reset` and `Step`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub obs: Observation,
    pub reward: f64,
    pub terminated: bool,
    pub truncated: bool,
    pub info: serde_json::Value,
}
