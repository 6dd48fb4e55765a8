pub mod error;
pub mod forces;
pub mod world;

pub use error::PhysicsError;
pub use forces::{Force, ForceCategory, ForceSystem};
pub use world::PhysicsWorld;
