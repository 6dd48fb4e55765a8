mod observation;
mod reset;
mod reward;
mod termination;

pub use observation::collect_observations;
pub use reset::{spawn_state, target_x};
pub use reward::{distance_to_target, landing_reward, out_of_bounds_reward, shaping_reward};
pub use termination::{check_termination, is_out_of_bounds, Termination};
