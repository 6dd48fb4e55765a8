use rayon::prelude::*;
use tracing::debug;

use super::{Environment, StepResult};
use crate::components::{Action, Observation};
use crate::resources::SimulationConfig;
use crate::utils::{Result, SimError};

/// Batch of independent environments stepped in parallel.
///
/// A finished environment is reset immediately; its `StepResult` keeps the
/// terminal reward and flags but carries the first observation of the next
/// episode.
pub struct VecEnvironment {
    envs: Vec<Environment>,
}

impl VecEnvironment {
    pub fn new(envs: Vec<Environment>) -> Self {
        Self { envs }
    }

    /// `count` headless environments; seeds are `base + index` when a seed is set
    pub fn headless(config: &SimulationConfig, count: usize) -> Result<Self> {
        let envs = (0..count)
            .map(|index| {
                let mut config = config.clone();
                config.seed = config.seed.map(|seed| seed.wrapping_add(index as u64));
                Environment::headless(config)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(envs))
    }

    pub fn len(&self) -> usize {
        self.envs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    pub fn envs(&self) -> &[Environment] {
        &self.envs
    }

    pub fn reset(&mut self) -> Vec<Observation> {
        self.envs.par_iter_mut().map(Environment::reset).collect()
    }

    pub fn step(&mut self, actions: &[Action]) -> Result<Vec<StepResult>> {
        if actions.len() != self.envs.len() {
            return Err(SimError::InvalidAction(format!(
                "expected {} actions, got {}",
                self.envs.len(),
                actions.len()
            )));
        }

        self.envs
            .par_iter_mut()
            .zip(actions.par_iter())
            .enumerate()
            .map(|(index, (env, action))| {
                let mut result = env.step(*action)?;
                if result.done() {
                    debug!("Auto-resetting environment {}", index);
                    result.observation = env.reset();
                }
                Ok(result)
            })
            .collect()
    }
}
