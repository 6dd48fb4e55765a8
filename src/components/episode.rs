use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodePhase {
    Active,
    Terminated,
}

/// Why an episode stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    OutOfBounds,
    Landed,
    Truncated,
}

/// Per-process and per-episode bookkeeping for the environment loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeState {
    pub phase: EpisodePhase,
    /// Episodes started since construction
    pub episode_count: u64,
    /// Steps taken in the current episode
    pub step_count: u32,
    /// Foot-midpoint distance to target at the end of the previous step
    pub previous_distance_to_target: f64,
    /// Sum of rewards given in the current episode
    pub episode_return: f64,
    pub outcome: Option<EpisodeOutcome>,
}

impl Default for EpisodeState {
    fn default() -> Self {
        Self {
            phase: EpisodePhase::Terminated,
            episode_count: 0,
            step_count: 0,
            previous_distance_to_target: 0.0,
            episode_return: 0.0,
            outcome: None,
        }
    }
}

impl EpisodeState {
    /// Start a new episode. The episode counter persists across calls.
    pub fn begin(&mut self, distance_to_target: f64) {
        self.phase = EpisodePhase::Active;
        self.episode_count += 1;
        self.step_count = 0;
        self.previous_distance_to_target = distance_to_target;
        self.episode_return = 0.0;
        self.outcome = None;
    }

    pub fn finish(&mut self, outcome: EpisodeOutcome) {
        self.phase = EpisodePhase::Terminated;
        self.outcome = Some(outcome);
    }

    pub fn is_active(&self) -> bool {
        self.phase == EpisodePhase::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_resets_per_episode_fields_only() {
        let mut episode = EpisodeState::default();
        assert!(!episode.is_active());

        episode.begin(3.0);
        episode.step_count = 12;
        episode.episode_return = 4.5;
        episode.finish(EpisodeOutcome::Landed);
        assert!(!episode.is_active());

        episode.begin(2.0);
        assert_eq!(episode.episode_count, 2);
        assert_eq!(episode.step_count, 0);
        assert_eq!(episode.episode_return, 0.0);
        assert_eq!(episode.previous_distance_to_target, 2.0);
        assert_eq!(episode.outcome, None);
    }
}
