pub mod controller;
pub mod projection;

pub use controller::{DataController, EngineEvent};
pub use projection::{Projection, project};
