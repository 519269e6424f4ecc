pub mod generator;
pub mod models;
pub mod source;
pub mod tables;

pub use generator::CatalogGenerator;
pub use models::{CertificationTier, Coordinates, Provider, Service, SlotTime, TimeSlot};
pub use source::{CatalogSource, MockCatalogSource};
pub use tables::{CatalogTables, ServiceCategory};

use common::Result;

/// Number of providers a default catalog is generated with.
pub const DEFAULT_PROVIDER_COUNT: usize = 50;

/// Generates the default catalog: 50 providers over the built-in tables,
/// expanded to one service per slot and sorted by start time.
pub async fn fetch_reiki_healers() -> Result<Vec<Service>> {
    MockCatalogSource::new(CatalogTables::default(), DEFAULT_PROVIDER_COUNT, None)?
        .fetch_services()
        .await
}
