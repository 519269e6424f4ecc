mod provider;
mod service;
mod slot;

pub use provider::{CertificationTier, Coordinates, Neighborhood, Provider};
pub use service::Service;
pub use slot::{SlotTime, TimeSlot};
