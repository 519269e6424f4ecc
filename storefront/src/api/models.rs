use crate::filters::FilterCriteria;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 100;
pub const MAX_LIMIT: usize = 1000;

// Request models
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceQueryParams {
    pub service_type: Option<String>,
    pub time: Option<String>,
    pub time_min: Option<u8>,
    pub time_max: Option<u8>,
    pub price_range: Option<String>,
    pub min_rating: Option<f64>,
    pub max_distance: Option<f64>,
    pub q: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ServiceQueryParams {
    /// A lone `timeMin` or `timeMax` is completed with 0 or 23.
    pub fn criteria(&self) -> FilterCriteria {
        let time_range = match (self.time_min, self.time_max) {
            (None, None) => None,
            (min, max) => Some((min.unwrap_or(0), max.unwrap_or(23))),
        };

        FilterCriteria {
            service_type: self.service_type.clone(),
            time: self.time.clone(),
            time_range,
            price_range: self.price_range.clone(),
            min_rating: self.min_rating,
            max_distance: self.max_distance,
            query: self.q.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileQueryParams {
    pub sort: Option<String>,
}

// Response models
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: T,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
pub struct ReloadSummary {
    pub services: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_bounds_complete_each_other() {
        let params = ServiceQueryParams {
            time_min: Some(15),
            ..Default::default()
        };
        assert_eq!(params.criteria().time_range, Some((15, 23)));

        let params = ServiceQueryParams {
            time_max: Some(9),
            ..Default::default()
        };
        assert_eq!(params.criteria().time_range, Some((0, 9)));

        assert_eq!(ServiceQueryParams::default().criteria(), FilterCriteria::default());
    }

    #[test]
    fn test_search_maps_to_query() {
        let params = ServiceQueryParams {
            q: Some("crystal".to_string()),
            price_range: Some("51-100".to_string()),
            ..Default::default()
        };
        let criteria = params.criteria();
        assert_eq!(criteria.query.as_deref(), Some("crystal"));
        assert_eq!(criteria.price_range.as_deref(), Some("51-100"));
    }
}
