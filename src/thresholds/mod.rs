//! Static threshold tables.
//!
//! Every numeric limit the engine applies lives here, keyed by enumerated
//! tags rather than spread through branching code, so each row can be
//! audited and tested on its own. Tables are immutable and shared freely
//! between threads.

pub mod category;
pub mod compartment;
pub mod density;
pub mod equipment;
pub mod evacuation;
pub mod smoke;

pub use category::{category_limits, CategoryLimits};
pub use compartment::{compartment_limit, CompartmentProfile};
pub use density::{occupancy_density, OccupancyDensity};
pub use evacuation::{distance_limit, DistanceLimit, DISTANCE_LIMITS};
