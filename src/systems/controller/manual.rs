use crate::components::Action;

/// Held keys for manual play: Q/A raise/lower the left rotor, E/D the right
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub q: bool,
    pub a: bool,
    pub e: bool,
    pub d: bool,
}

impl KeyState {
    /// Keys held in a line of text, e.g. `"qd"`; other characters are ignored
    pub fn from_keys(keys: &str) -> Self {
        let mut state = Self::default();
        for key in keys.chars().map(|c| c.to_ascii_lowercase()) {
            match key {
                'q' => state.q = true,
                'a' => state.a = true,
                'e' => state.e = true,
                'd' => state.d = true,
                _ => {}
            }
        }
        state
    }

    pub fn to_action(&self) -> Action {
        Action::from_raw(level(self.q, self.a), level(self.e, self.d))
    }
}

fn level(up: bool, down: bool) -> i64 {
    match (up, down) {
        (true, false) => 2,
        (false, true) => 0,
        _ => 1,
    }
}
