pub mod agent;
pub mod collisions;
pub mod controller;
pub mod flight;
pub mod render;
pub mod wind;

pub use collisions::{CollisionSource, GroundContactDetector};
pub use controller::KeyState;
pub use flight::FlightController;
pub use render::{DisplaySink, LogDisplay, NullDisplay};
pub use wind::WindModel;
