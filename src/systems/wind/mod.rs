mod model;

pub use model::{wind_from_sample, WindModel};
