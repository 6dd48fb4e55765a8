mod manual;

pub use manual::KeyState;
