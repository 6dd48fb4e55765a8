mod action;
mod collision;
mod episode;
mod observation;
mod rotor;
mod spatial;
mod target;
mod wind;

pub use action::Action;
pub use collision::{CollisionComponent, ContactEvent};
pub use episode::{EpisodeOutcome, EpisodePhase, EpisodeState};
pub use observation::{Observation, OBSERVATION_NAMES};
pub use rotor::{FootGeometry, RotorGeometry, RotorSide};
pub use spatial::DroneState;
pub use target::TargetState;
pub use wind::WindState;
