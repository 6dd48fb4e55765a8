mod act;
mod obs;
mod session;
mod structures;

pub use act::ActionSpace;
pub use obs::ObservationSpace;
pub use session::{Reply, Session};
pub use structures::{Command, Response};
