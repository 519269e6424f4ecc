use crate::generator::CatalogGenerator;
use crate::models::Service;
use crate::tables::CatalogTables;
use async_trait::async_trait;
use common::Result;
use common::config::CatalogConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// Where the storefront gets its full service list from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Resolves once with the complete catalog, sorted by start time.
    async fn fetch_services(&self) -> Result<Vec<Service>>;
}

/// In-memory source that fabricates a fresh catalog on every fetch.
pub struct MockCatalogSource {
    generator: CatalogGenerator,
    provider_count: usize,
    seed: Option<u64>,
}

impl MockCatalogSource {
    pub fn new(tables: CatalogTables, provider_count: usize, seed: Option<u64>) -> Result<Self> {
        Ok(Self {
            generator: CatalogGenerator::new(tables)?,
            provider_count,
            seed,
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let tables = CatalogTables::default().with_avatar_base_url(&config.avatar_base_url);
        Self::new(tables, config.provider_count, config.seed)
    }

    /// Tables the catalog is generated from.
    pub fn tables(&self) -> &CatalogTables {
        self.generator.tables()
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_services(&self) -> Result<Vec<Service>> {
        let mut rng = self.rng();
        let services = self.generator.generate_catalog(&mut rng, self.provider_count);

        info!(
            providers = self.provider_count,
            services = services.len(),
            seeded = self.seed.is_some(),
            "Catalog generated"
        );

        Ok(services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_source_is_reproducible() {
        let source = MockCatalogSource::new(CatalogTables::default(), 10, Some(5)).unwrap();
        let first = source.fetch_services().await.unwrap();
        let second = source.fetch_services().await.unwrap();
        assert_eq!(first, second);
        assert!(first.len() >= 20 && first.len() <= 40);
    }

    #[tokio::test]
    async fn test_from_config_applies_avatar_base_url() {
        let config = CatalogConfig {
            provider_count: 3,
            seed: Some(1),
            avatar_base_url: "https://avatars.test/".to_string(),
        };
        let source = MockCatalogSource::from_config(&config).unwrap();
        let services = source.fetch_services().await.unwrap();

        assert!(!services.is_empty());
        assert!(
            services
                .iter()
                .all(|s| s.provider_image_ref.starts_with("https://avatars.test/provider"))
        );
        assert_eq!(source.tables().avatar_base_url, "https://avatars.test/");
        assert_eq!(source.tables().categories.len(), 6);
    }

    #[tokio::test]
    async fn test_works_behind_trait_object() {
        let source: Box<dyn CatalogSource> =
            Box::new(MockCatalogSource::new(CatalogTables::default(), 0, None).unwrap());
        assert!(source.fetch_services().await.unwrap().is_empty());
    }
}
