use serde_json::{json, Value};
use tracing::{error, info, warn};

use super::{ActionSpace, Command, ObservationSpace, Response};
use crate::environment::{Environment, StepResult};
use crate::resources::SimulationConfig;
use crate::utils::Result;

/// What to send back for one command
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub body: Value,
    /// The connection should be closed after sending `body`
    pub close: bool,
}

impl Reply {
    fn message(body: Value) -> Self {
        Self { body, close: false }
    }

    fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        error!("{}", message);
        Self::message(json!({ "error": message }))
    }
}

/// Transport-free command handling for one client
#[derive(Default)]
pub struct Session {
    env: Option<Environment>,
    action_space: ActionSpace,
    observation_space: ObservationSpace,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.env.is_some()
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.env.as_ref()
    }

    /// Parse and handle one line of input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match serde_json::from_str::<Command>(line.trim()) {
            Ok(command) => self.handle(command),
            Err(e) => Reply::error(format!("Invalid command format: {}", e)),
        }
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Initialize { config } => self.initialize(&config),
            Command::Reset { seed } => {
                info!("Reset command received with seed: {:?}", seed);
                let Some(env) = self.env.as_mut() else {
                    return Reply::error("Environment not initialized");
                };
                let obs = match seed {
                    Some(seed) => env.reset_with_seed(seed),
                    None => env.reset(),
                };
                let response = Response {
                    obs,
                    reward: 0.0,
                    terminated: false,
                    truncated: false,
                    info: episode_info(env),
                };
                to_reply(&response)
            }
            Command::Step { action } => {
                let Some(env) = self.env.as_mut() else {
                    return Reply::error("Environment not initialized");
                };
                match step(env, &self.action_space, &action) {
                    Ok(result) => {
                        let mut info = episode_info(env);
                        info["outcome"] = json!(result.outcome);
                        to_reply(&Response {
                            obs: result.observation,
                            reward: result.reward,
                            terminated: result.terminated,
                            truncated: result.truncated,
                            info,
                        })
                    }
                    Err(e) => Reply::error(format!("Step failed: {}", e)),
                }
            }
            Command::Close => {
                info!("Close command received");
                Reply {
                    body: json!({ "status": "closed" }),
                    close: true,
                }
            }
        }
    }

    fn initialize(&mut self, config: &Value) -> Reply {
        if self.env.is_some() {
            warn!("Server already initialized, ignoring Initialize command");
            return Reply::error("Server already initialized");
        }

        let env = match SimulationConfig::from_json(config).and_then(Environment::headless) {
            Ok(env) => env,
            Err(e) => return Reply::error(format!("Failed to build environment: {}", e)),
        };
        info!("Environment initialized with seed {}", env.master_seed());
        self.env = Some(env);

        Reply::message(json!({
            "status": "ready",
            "action_space": self.action_space,
            "observation_space": self.observation_space,
        }))
    }
}

fn step(env: &mut Environment, space: &ActionSpace, raw: &[i64]) -> Result<StepResult> {
    let action = space.to_action(raw)?;
    env.step(action)
}

fn episode_info(env: &Environment) -> Value {
    let episode = env.episode();
    json!({
        "episode": episode.episode_count,
        "step": episode.step_count,
        "episode_return": episode.episode_return,
        "in_contact": env.in_contact(),
        "contact_count": env.contact_count(),
        "named_obs": env.collect_observations().to_map(),
        "wind": {
            "direction": [env.wind().direction.x, env.wind().direction.y],
            "speed": env.wind().speed,
        },
        "target": [env.target().position.x, env.target().position.y],
    })
}

fn to_reply(response: &Response) -> Reply {
    match serde_json::to_value(response) {
        Ok(body) => Reply::message(body),
        Err(e) => Reply::error(format!("Failed to serialize response: {}", e)),
    }
}
