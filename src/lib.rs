pub mod components;
pub mod environment;
pub mod physics;
pub mod resources;
pub mod server;
pub mod systems;
pub mod utils;
