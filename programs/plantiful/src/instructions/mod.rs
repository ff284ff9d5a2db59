pub mod initialize_registry;
pub mod mint_plant;
pub mod transfer_plant;
pub mod water_plant;
pub mod describe_plant;
pub mod emit_watering_times;
pub mod describe_owner_plants;

pub use initialize_registry::*;
pub use mint_plant::*;
pub use transfer_plant::*;
pub use water_plant::*;
pub use describe_plant::*;
pub use emit_watering_times::*;
pub use describe_owner_plants::*;
