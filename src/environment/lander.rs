use nalgebra::Vector2;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::components::{
    Action, CollisionComponent, ContactEvent, DroneState, EpisodeOutcome, EpisodeState,
    FootGeometry, Observation, RotorSide, TargetState, WindState,
};
use crate::physics::{ForceCategory, ForceSystem, PhysicsWorld};
use crate::resources::SimulationConfig;
use crate::systems::agent::{
    check_termination, collect_observations, distance_to_target, landing_reward,
    out_of_bounds_reward, shaping_reward, spawn_state, target_x, Termination,
};
use crate::systems::{
    CollisionSource, DisplaySink, FlightController, GroundContactDetector, NullDisplay, WindModel,
};
use crate::utils::{Result, RngManager, SimError};

/// Everything a trainer needs back from one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f64,
    pub terminated: bool,
    pub truncated: bool,
    pub outcome: Option<EpisodeOutcome>,
}

impl StepResult {
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Named random streams, one per randomised quantity
struct EpisodeRngs {
    spawn: ChaCha8Rng,
    wind: ChaCha8Rng,
    target: ChaCha8Rng,
}

impl EpisodeRngs {
    fn from_manager(manager: &RngManager) -> Self {
        Self {
            spawn: manager.get_rng("spawn"),
            wind: manager.get_rng("wind"),
            target: manager.get_rng("target"),
        }
    }
}

/// Single twin-rotor landing environment.
///
/// Owns the drone state, the episode bookkeeping and both collaborators.
/// Each call to [`Environment::step`] runs one full tick in a fixed order:
/// rotor forces, wind, gravity, integration, contact, reward, termination.
pub struct Environment {
    config: SimulationConfig,
    physics: PhysicsWorld,
    flight: FlightController,
    wind_model: WindModel,
    feet: FootGeometry,

    rng_manager: RngManager,
    rngs: EpisodeRngs,

    state: DroneState,
    wind: WindState,
    target: TargetState,
    collision: CollisionComponent,
    episode: EpisodeState,
    forces: ForceSystem,

    display: Box<dyn DisplaySink>,
    collision_source: Option<Box<dyn CollisionSource>>,
}

impl Environment {
    /// Build an environment in the `Terminated` phase; call `reset` before stepping.
    pub fn new(
        config: SimulationConfig,
        display: Box<dyn DisplaySink>,
        collision_source: Option<Box<dyn CollisionSource>>,
    ) -> Result<Self> {
        config.validate()?;

        let physics = PhysicsWorld::new(config.physics.clone())?;
        let flight = FlightController::new(&config.flight);
        let wind_model = WindModel::new(config.wind.clone());
        let feet = FootGeometry::new(config.flight.left_foot, config.flight.right_foot);
        let rng_manager = RngManager::from_optional_seed(config.seed);
        let rngs = EpisodeRngs::from_manager(&rng_manager);

        let origin = config.environment.area_origin;
        let target = TargetState::new(Vector2::new(origin.x, config.environment.target_height()));

        debug!(
            "Environment created with master seed {}",
            rng_manager.master_seed()
        );

        Ok(Self {
            physics,
            flight,
            wind_model,
            feet,
            rng_manager,
            rngs,
            state: DroneState::at_position(origin),
            wind: WindState::calm(),
            target,
            collision: CollisionComponent::new(),
            episode: EpisodeState::default(),
            forces: ForceSystem::new(),
            display,
            collision_source,
            config,
        })
    }

    /// No display, flat-ground contact at the platform height
    pub fn headless(config: SimulationConfig) -> Result<Self> {
        let ground = GroundContactDetector::new(config.environment.target_height());
        Self::new(config, Box::new(NullDisplay), Some(Box::new(ground)))
    }

    /// Start a new episode from the current random streams
    pub fn reset(&mut self) -> Observation {
        let state = spawn_state(&self.config.environment, &mut self.rngs.spawn);
        self.begin_episode(state)
    }

    /// Start a new episode with the drone placed at `state`.
    ///
    /// Wind, target and contact are reset as in [`Environment::reset`]; only
    /// the spawn draw is replaced.
    pub fn reset_to(&mut self, state: DroneState) -> Observation {
        self.begin_episode(state)
    }

    /// Reseed every random stream, then reset
    pub fn reset_with_seed(&mut self, seed: u64) -> Observation {
        self.rng_manager = RngManager::new(seed);
        self.rngs = EpisodeRngs::from_manager(&self.rng_manager);
        self.reset()
    }

    fn begin_episode(&mut self, state: DroneState) -> Observation {
        self.state = state;
        self.wind = self.wind_model.generate(&mut self.rngs.wind);
        self.display.report_wind(&self.wind);

        // Stale contact from the previous episode must not leak into this one
        self.collision.reset();
        if let Some(source) = self.collision_source.as_mut() {
            source.reset();
        }
        self.target
            .move_to_x(target_x(&self.config.environment, &mut self.rngs.target));

        // Shaping is relative to the distance at the fresh state
        self.episode.begin(self.distance_to_target());

        info!(
            "Episode {} reset: position=({:.2}, {:.2}) rotation={:.1} target_x={:.2} wind_speed={:.3}",
            self.episode.episode_count,
            self.state.position.x,
            self.state.position.y,
            self.state.rotation,
            self.target.position.x,
            self.wind.speed
        );

        self.collect_observations()
    }

    /// Advance one tick.
    ///
    /// Fails with [`SimError::EpisodeTerminated`] if the episode already ended,
    /// or with a physics error if integration fails; nothing is modified in
    /// either case.
    pub fn step(&mut self, action: Action) -> Result<StepResult> {
        if !self.episode.is_active() {
            return Err(SimError::EpisodeTerminated);
        }

        // Rotors first, then wind, then gravity
        self.forces.clear();
        for side in [RotorSide::Left, RotorSide::Right] {
            self.flight.apply_rotor(&mut self.forces, &self.state, side, action.thrust(side));
        }
        self.flight.apply_wind(&mut self.forces, &self.wind);
        self.flight.apply_gravity(&mut self.forces);
        trace!(
            "Forces propulsive={:?} wind={:?} gravity={:?}",
            self.forces.force_by_category(ForceCategory::Propulsive),
            self.forces.force_by_category(ForceCategory::Wind),
            self.forces.force_by_category(ForceCategory::Gravitational)
        );

        // Integrate before committing anything, so a failed step leaves no trace
        let next = self.physics.step(&self.state, &self.forces)?;
        for side in [RotorSide::Left, RotorSide::Right] {
            self.display.report_thrust(side, action.thrust(side));
        }
        self.episode.step_count += 1;
        self.state = next;

        // Contact is read from the integrated state
        let in_contact = self.update_contact();
        let distance = self.distance_to_target();
        let rewards = &self.config.reward;

        let (reward, outcome) = match check_termination(
            &self.state,
            in_contact,
            self.episode.step_count,
            &self.config.environment,
        ) {
            Termination::OutOfBounds => (
                out_of_bounds_reward(rewards),
                Some(EpisodeOutcome::OutOfBounds),
            ),
            Termination::Landed => (
                landing_reward(
                    rewards,
                    distance,
                    self.state.rotation,
                    self.state.speed(),
                    self.state.angular_velocity,
                ),
                Some(EpisodeOutcome::Landed),
            ),
            Termination::Continue => {
                let reward = shaping_reward(
                    rewards,
                    self.episode.previous_distance_to_target,
                    distance,
                    self.state.rotation,
                );
                self.episode.previous_distance_to_target = distance;
                // Truncation only when neither terminal case fired
                let truncated = self
                    .config
                    .environment
                    .max_episode_steps
                    .is_some_and(|max| self.episode.step_count >= max);
                (reward, truncated.then_some(EpisodeOutcome::Truncated))
            }
        };

        self.episode.episode_return += reward;
        if let Some(outcome) = outcome {
            self.episode.finish(outcome);
            info!(
                "Episode {} finished: {:?} after {} steps, reward={:.3} return={:.3}",
                self.episode.episode_count,
                outcome,
                self.episode.step_count,
                reward,
                self.episode.episode_return
            );
        }

        Ok(StepResult {
            observation: self.collect_observations(),
            reward,
            terminated: matches!(
                outcome,
                Some(EpisodeOutcome::OutOfBounds | EpisodeOutcome::Landed)
            ),
            truncated: outcome == Some(EpisodeOutcome::Truncated),
            outcome,
        })
    }

    /// Observation of the current state; never mutates anything
    pub fn collect_observations(&self) -> Observation {
        collect_observations(
            &self.state,
            &self.feet,
            &self.target.position,
            &self.config.environment.area_origin,
        )
    }

    /// Queue a contact event from an external collision source.
    /// Applied during the next step, after integration.
    pub fn notify_contact(&mut self, event: ContactEvent) {
        self.collision.push(event);
    }

    fn update_contact(&mut self) -> bool {
        if let Some(source) = self.collision_source.as_mut() {
            for event in source.poll(&self.state, &self.feet) {
                self.collision.apply(event);
            }
        }
        self.collision.drain()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &DroneState {
        &self.state
    }

    pub fn episode(&self) -> &EpisodeState {
        &self.episode
    }

    pub fn wind(&self) -> &WindState {
        &self.wind
    }

    pub fn target(&self) -> &TargetState {
        &self.target
    }

    pub fn feet(&self) -> &FootGeometry {
        &self.feet
    }

    pub fn in_contact(&self) -> bool {
        self.collision.in_contact
    }

    /// Contact enters seen this episode
    pub fn contact_count(&self) -> u32 {
        self.collision.collision_count
    }

    pub fn master_seed(&self) -> u64 {
        self.rng_manager.master_seed()
    }

    /// Distance from the foot midpoint to the target for the current state
    pub fn distance_to_target(&self) -> f64 {
        distance_to_target(&self.state, &self.feet, &self.target.position)
    }
}
