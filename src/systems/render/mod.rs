mod display;

pub use display::{wind_indicator_heading, DisplaySink, LogDisplay, NullDisplay, ThrustArrow};
