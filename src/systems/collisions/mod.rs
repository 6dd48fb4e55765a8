mod detection;

pub use detection::{CollisionSource, GroundContactDetector};
