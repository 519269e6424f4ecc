mod buckets;
mod options;

pub use buckets::{PriceBucket, TimeBucket, default_time_filter};
pub use options::{FilterOption, FilterOptions};

use catalog::Service;
use serde::{Deserialize, Serialize};

/// Value of `service_type` that disables the service type filter.
pub const ALL_SERVICES: &str = "all-services";

/// Listing filter state. Every field is optional; set fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Hyphenated lower-case service type, e.g. `energy-healing`.
    pub service_type: Option<String>,
    /// Named time bucket; ignored whenever `time_range` is set.
    pub time: Option<String>,
    /// Inclusive start-hour range.
    pub time_range: Option<(u8, u8)>,
    pub price_range: Option<String>,
    pub min_rating: Option<f64>,
    pub max_distance: Option<f64>,
    /// Free-text search over titles, names and locations.
    pub query: Option<String>,
}

enum TimeWindow {
    Any,
    Hours(u8, u8),
    Bucket(TimeBucket),
}

/// Criteria resolved once per filter pass.
struct Predicate<'a> {
    service_type: Option<&'a str>,
    time: TimeWindow,
    price: Option<PriceBucket>,
    min_rating: Option<f64>,
    max_distance: Option<f64>,
    query: Option<String>,
}

impl<'a> Predicate<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        let time = match (criteria.time_range, criteria.time.as_deref()) {
            (Some((min, max)), _) => TimeWindow::Hours(min, max),
            (None, Some(value)) => TimeBucket::parse(value).map_or(TimeWindow::Any, TimeWindow::Bucket),
            (None, None) => TimeWindow::Any,
        };

        Self {
            service_type: criteria
                .service_type
                .as_deref()
                .filter(|value| *value != ALL_SERVICES),
            time,
            price: criteria.price_range.as_deref().and_then(PriceBucket::parse),
            min_rating: criteria.min_rating,
            max_distance: criteria.max_distance,
            query: criteria
                .query
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_lowercase),
        }
    }

    fn matches(&self, service: &Service) -> bool {
        if let Some(service_type) = self.service_type {
            if service.service_type_slug() != service_type {
                return false;
            }
        }

        let hour = service.start_time.hour();
        let in_time = match &self.time {
            TimeWindow::Any => true,
            TimeWindow::Hours(min, max) => *min <= hour && hour <= *max,
            TimeWindow::Bucket(bucket) => bucket.contains_hour(hour),
        };
        if !in_time {
            return false;
        }

        if let Some(bucket) = self.price {
            if !bucket.contains(service.price) {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if service.rating < min_rating {
                return false;
            }
        }

        if let Some(max_distance) = self.max_distance {
            if service.distance > max_distance {
                return false;
            }
        }

        match &self.query {
            Some(query) => [
                &service.title,
                &service.provider_name,
                &service.business_name,
                &service.location,
                &service.service_type,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(query.as_str())),
            None => true,
        }
    }
}

/// Returns the services passing every set criterion, in input order.
///
/// Unrecognized bucket values filter nothing.
pub fn apply_filters(services: &[Service], criteria: &FilterCriteria) -> Vec<Service> {
    let predicate = Predicate::new(criteria);
    services
        .iter()
        .filter(|service| predicate.matches(service))
        .cloned()
        .collect()
}
