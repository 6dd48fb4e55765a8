mod controller;

pub use controller::FlightController;
