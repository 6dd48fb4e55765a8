use std::{
    env,
    io::{self, BufRead, Write},
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use lander::{
    components::Action,
    environment::Environment,
    resources::SimulationConfig,
    systems::{GroundContactDetector, KeyState, LogDisplay},
    utils::{constants::ACTION_LEVELS, init_logging},
};

/// Headless rollout with a uniformly random policy, or a manual driver.
///
/// Usage: `lander [--manual] [episodes] [seed] [config.yaml]`
///
/// With `--manual` each stdin line is one tick; the keys held are given as
/// letters: `q`/`a` raise/lower the left rotor, `e`/`d` the right one.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("info");

    let mut args = env::args().skip(1).peekable();
    let manual = args.next_if(|a| a == "--manual").is_some();
    let episodes: u32 = args.next().map(|a| a.parse()).transpose()?.unwrap_or(5);
    let seed: u64 = args.next().map(|a| a.parse()).transpose()?.unwrap_or(0);
    let config = match args.next() {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    }
    .with_seed(seed);

    let max_steps = config.environment.max_episode_steps.unwrap_or(2_000);
    let ground = GroundContactDetector::new(config.environment.target_height());
    let mut env = Environment::new(config, Box::new(LogDisplay::new()), Some(Box::new(ground)))?;

    if manual {
        return drive_manually(&mut env, episodes);
    }

    let mut policy = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
    let mut total = 0.0;
    for _ in 0..episodes {
        env.reset();
        for _ in 0..max_steps {
            let action = Action::from_raw(
                policy.gen_range(0..ACTION_LEVELS),
                policy.gen_range(0..ACTION_LEVELS),
            );
            if env.step(action)?.done() {
                break;
            }
        }
        total += log_episode(&env);
    }

    info!(
        "Mean return over {} episodes: {:.3}",
        episodes,
        total / f64::from(episodes.max(1))
    );
    Ok(())
}

/// One tick per stdin line; prints observation and reward after each tick
fn drive_manually(env: &mut Environment, episodes: u32) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut finished = 0;

    env.reset();
    for line in io::stdin().lock().lines() {
        let action = KeyState::from_keys(&line?).to_action();
        let result = env.step(action)?;
        writeln!(out, "{}", serde_json::to_string(&result)?)?;

        if result.done() {
            log_episode(env);
            finished += 1;
            if finished >= episodes {
                break;
            }
            env.reset();
        }
    }
    Ok(())
}

fn log_episode(env: &Environment) -> f64 {
    let episode = env.episode();
    info!(
        "Episode {}: {:?} in {} steps, return {:.3}",
        episode.episode_count, episode.outcome, episode.step_count, episode.episode_return
    );
    episode.episode_return
}
