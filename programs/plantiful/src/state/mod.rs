pub mod plant;
pub mod plant_state;
pub mod registry;
pub mod watering_log;

pub use plant::*;
pub use plant_state::*;
pub use registry::*;
pub use watering_log::*;
