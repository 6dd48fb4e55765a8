use lander::resources::{EnvironmentConfig, Interval, SimulationConfig, WindConfig};

pub const TEST_SEED: u64 = 7;

/// Default configuration with a fixed seed
pub fn seeded_config() -> SimulationConfig {
    SimulationConfig::default().with_seed(TEST_SEED)
}

/// Fixed seed and no wind
pub fn calm_config() -> SimulationConfig {
    SimulationConfig {
        wind: WindConfig::calm(),
        ..seeded_config()
    }
}

/// Calm, and spawning close above the platform so episodes end by landing
pub fn drop_config() -> SimulationConfig {
    SimulationConfig {
        environment: EnvironmentConfig {
            spawn_x: Interval::symmetric(1.0),
            spawn_rotation: Interval::symmetric(2.0),
            spawn_velocity_x: Interval::symmetric(0.1),
            target_x: Interval::symmetric(1.0),
            ..Default::default()
        },
        ..calm_config()
    }
}
