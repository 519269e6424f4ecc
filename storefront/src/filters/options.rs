use super::{ALL_SERVICES, PriceBucket, TimeBucket, default_time_filter};
use catalog::CatalogTables;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Select options for the filter bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub service_types: Vec<FilterOption>,
    pub times: Vec<FilterOption>,
    pub prices: Vec<FilterOption>,
    pub default_time: String,
}

impl FilterOptions {
    pub fn new(tables: &CatalogTables, current_hour: u32) -> Self {
        let service_types = std::iter::once(FilterOption::new("All Services", ALL_SERVICES))
            .chain(tables.categories.iter().map(|category| {
                FilterOption::new(
                    &category.service_type,
                    &category.service_type.to_lowercase().replace(' ', "-"),
                )
            }))
            .collect();

        let times = std::iter::once(FilterOption::new("Any Time", "any"))
            .chain(
                TimeBucket::ALL
                    .iter()
                    .map(|bucket| FilterOption::new(bucket.label(), bucket.as_str())),
            )
            .collect();

        let prices = std::iter::once(FilterOption::new("Any Price", "any"))
            .chain(
                PriceBucket::ALL
                    .iter()
                    .map(|bucket| FilterOption::new(bucket.label(), bucket.as_str())),
            )
            .collect();

        Self {
            service_types,
            times,
            prices,
            default_time: default_time_filter(current_hour).to_string(),
        }
    }
}
