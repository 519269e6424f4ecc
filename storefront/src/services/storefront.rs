use crate::filters::{FilterCriteria, FilterOptions, apply_filters};
use crate::profile::{ProviderProfile, ReviewSort, provider_services, sample_reviews};
use catalog::{CatalogSource, CatalogTables, Service};
use common::Result;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Map pin for one service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
}

impl From<&Service> for MapMarker {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            lat: service.coordinates.lat,
            lng: service.coordinates.lng,
            title: service.title.clone(),
        }
    }
}

/// Holds the current catalog snapshot and answers listing queries against it.
///
/// A snapshot is never modified; `reload` swaps in a new one.
pub struct StorefrontService {
    source: Arc<dyn CatalogSource>,
    tables: CatalogTables,
    catalog: RwLock<Arc<Vec<Service>>>,
}

impl StorefrontService {
    /// `tables` should be the ones `source` generates from, so filter options
    /// and review avatars agree with the catalog.
    pub async fn new(source: Arc<dyn CatalogSource>, tables: CatalogTables) -> Result<Self> {
        let services = source.fetch_services().await?;
        info!(services = services.len(), "Storefront catalog loaded");

        Ok(Self {
            source,
            tables,
            catalog: RwLock::new(Arc::new(services)),
        })
    }

    pub async fn catalog(&self) -> Arc<Vec<Service>> {
        Arc::clone(&*self.catalog.read().await)
    }

    /// Fetches a fresh catalog and makes it current. Returns its size.
    pub async fn reload(&self) -> Result<usize> {
        let services = self.source.fetch_services().await?;
        let count = services.len();

        *self.catalog.write().await = Arc::new(services);
        info!(services = count, "Storefront catalog reloaded");

        Ok(count)
    }

    pub async fn query(&self, criteria: &FilterCriteria) -> Vec<Service> {
        let catalog = self.catalog().await;
        apply_filters(&catalog, criteria)
    }

    pub async fn markers(&self, criteria: &FilterCriteria) -> Vec<MapMarker> {
        self.query(criteria).await.iter().map(MapMarker::from).collect()
    }

    pub async fn provider_profile(&self, key: &str, sort: ReviewSort) -> Option<ProviderProfile> {
        let catalog = self.catalog().await;
        let services = provider_services(&catalog, key);
        ProviderProfile::new(services, sample_reviews(&self.tables.avatar_base_url), sort)
    }

    pub fn filter_options(&self, current_hour: u32) -> FilterOptions {
        FilterOptions::new(&self.tables, current_hour)
    }
}
