use crate::models::{Provider, Service, SlotTime, TimeSlot};
use crate::tables::CatalogTables;
use common::Result;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Produces synthetic providers and the flat service list derived from them.
///
/// Randomness is always supplied by the caller, so a seeded `StdRng` yields a
/// reproducible catalog.
#[derive(Debug, Clone)]
pub struct CatalogGenerator {
    tables: CatalogTables,
}

impl CatalogGenerator {
    pub fn new(tables: CatalogTables) -> Result<Self> {
        tables.validate()?;
        Ok(Self { tables })
    }

    pub fn tables(&self) -> &CatalogTables {
        &self.tables
    }

    pub fn generate_providers<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Provider> {
        let tables = &self.tables;

        (0..count)
            .map(|i| {
                let neighborhood = pick(rng, &tables.neighborhoods);
                let tier = *pick(rng, &tables.tiers);
                let base_price = rng.random_range(tables.base_price.clone());
                let rating = round_tenth(rng.random_range(4.0..=5.0));

                Provider {
                    id: format!("provider-{}", i + 1),
                    business_name: self.business_name(rng),
                    provider_name: self.provider_name(rng),
                    provider_image_ref: format!("{}provider{}", tables.avatar_base_url, i),
                    rating,
                    base_price,
                    location: neighborhood.name.clone(),
                    coordinates: neighborhood.coordinates,
                    certification_tier: tier,
                    time_slots: self.generate_time_slots(rng),
                }
            })
            .collect()
    }

    /// Draws unique `HH:00`/`HH:30` start times until the target count is met,
    /// returned in ascending time order.
    pub fn generate_time_slots<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<TimeSlot> {
        let tables = &self.tables;
        let target = rng.random_range(tables.slots_per_provider.clone());

        let mut used = HashSet::with_capacity(target);
        let mut slots = Vec::with_capacity(target);
        while slots.len() < target {
            let hour = rng.random_range(tables.slot_hours.clone());
            let minute = if rng.random_bool(0.5) { 0 } else { 30 };
            let time = SlotTime::from_checked_parts(hour, minute);

            if used.insert(time) {
                slots.push(TimeSlot {
                    time,
                    duration_minutes: *pick(rng, &tables.slot_durations),
                });
            }
        }

        slots.sort_by_key(|slot| slot.time);
        slots
    }

    pub fn provider_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let first = pick(rng, &self.tables.first_names);
        let last = pick(rng, &self.tables.last_names);
        format!("{} {}", first, last)
    }

    pub fn business_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let prefix = pick(rng, &self.tables.business_prefixes);
        let suffix = pick(rng, &self.tables.business_suffixes);
        format!("{} {}", prefix, suffix)
    }

    /// One service per provider slot, sorted by start time.
    pub fn expand_services<R: Rng + ?Sized>(&self, rng: &mut R, providers: &[Provider]) -> Vec<Service> {
        let mut services = Vec::with_capacity(providers.iter().map(|p| p.time_slots.len()).sum());

        for provider in providers {
            for slot in &provider.time_slots {
                let category = pick(rng, &self.tables.categories);
                let title = pick(rng, &category.titles);
                let distance = round_tenth(rng.random_range(0.5..=5.5));

                services.push(Service::for_slot(
                    provider,
                    slot,
                    &category.service_type,
                    title,
                    distance,
                ));
            }
        }

        services.sort_by_key(|service| service.start_time);
        services
    }

    pub fn generate_catalog<R: Rng + ?Sized>(&self, rng: &mut R, provider_count: usize) -> Vec<Service> {
        let providers = self.generate_providers(rng, provider_count);
        let services = self.expand_services(rng, &providers);

        debug!(
            providers = providers.len(),
            services = services.len(),
            "Generated catalog"
        );

        services
    }
}

// Tables are validated non-empty in `CatalogGenerator::new`.
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, list: &'a [T]) -> &'a T {
    &list[rng.random_range(0..list.len())]
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
