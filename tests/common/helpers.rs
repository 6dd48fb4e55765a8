use std::sync::{Arc, Mutex};

use lander::{
    components::{RotorSide, WindState},
    environment::Environment,
    resources::SimulationConfig,
    systems::DisplaySink,
};

/// One call received by [`RecordingDisplay`]
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Thrust(RotorSide, i8),
    Wind(WindState),
}

/// Display sink that records every call into a shared log
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl RecordingDisplay {
    pub fn calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl DisplaySink for RecordingDisplay {
    fn report_thrust(&mut self, side: RotorSide, thrust: i8) {
        self.calls
            .lock()
            .unwrap()
            .push(DisplayCall::Thrust(side, thrust));
    }

    fn report_wind(&mut self, wind: &WindState) {
        self.calls.lock().unwrap().push(DisplayCall::Wind(*wind));
    }
}

/// Environment with a recording display and no collision source
pub fn create_recorded_env(config: SimulationConfig) -> (Environment, RecordingDisplay) {
    let display = RecordingDisplay::default();
    let env = Environment::new(config, Box::new(display.clone()), None)
        .expect("valid test configuration");
    (env, display)
}

/// Environment with no display and no collision source
pub fn create_test_env(config: SimulationConfig) -> Environment {
    create_recorded_env(config).0
}
