use axum::{
    routing::{get, post},
    Router,
    extract::{State, Query, Path},
    Json
};
use catalog::Service;
use chrono::Timelike;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::filters::FilterOptions;
use crate::profile::{ProviderProfile, ReviewSort};
use crate::services::storefront::{MapMarker, StorefrontService};
use crate::services::AppError;
use super::models::{
    ApiResponse, PaginatedResponse, Pagination, ProfileQueryParams, ReloadSummary,
    ServiceQueryParams, DEFAULT_LIMIT, MAX_LIMIT,
};

pub async fn list_services(
    Query(params): Query<ServiceQueryParams>,
    State(service): State<Arc<StorefrontService>>,
) -> Result<Json<ApiResponse<PaginatedResponse<Vec<Service>>>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    if limit == 0 {
        return Err(AppError::bad_request("limit must be at least 1".into()));
    }
    let offset = params.offset.unwrap_or(0);

    let matching = service.query(&params.criteria()).await;
    let total = matching.len();
    let page: Vec<Service> = matching.into_iter().skip(offset).take(limit).collect();

    Ok(Json(ApiResponse::success(PaginatedResponse {
        data: page,
        pagination: Pagination {
            offset,
            limit,
            total,
            has_more: offset.saturating_add(limit) < total,
        },
    })))
}

pub async fn list_markers(
    Query(params): Query<ServiceQueryParams>,
    State(service): State<Arc<StorefrontService>>,
) -> Json<ApiResponse<Vec<MapMarker>>> {
    Json(ApiResponse::success(service.markers(&params.criteria()).await))
}

pub async fn filter_options(
    State(service): State<Arc<StorefrontService>>,
) -> Json<ApiResponse<FilterOptions>> {
    let hour = chrono::Local::now().hour();
    Json(ApiResponse::success(service.filter_options(hour)))
}

pub async fn provider_profile(
    Path(key): Path<String>,
    Query(params): Query<ProfileQueryParams>,
    State(service): State<Arc<StorefrontService>>,
) -> Result<Json<ApiResponse<ProviderProfile>>, AppError> {
    let sort = params.sort.as_deref().map(ReviewSort::parse).unwrap_or_default();

    service
        .provider_profile(&key, sort)
        .await
        .map(|profile| Json(ApiResponse::success(profile)))
        .ok_or_else(|| AppError::not_found(format!("provider '{}'", key)))
}

pub async fn reload_catalog(
    State(service): State<Arc<StorefrontService>>,
) -> Result<Json<ApiResponse<ReloadSummary>>, AppError> {
    let services = service.reload().await?;
    Ok(Json(ApiResponse::success(ReloadSummary { services })))
}

// Define all API routes
pub fn routes(service: Arc<StorefrontService>) -> Router {
    Router::new()
        .route("/api/services", get(list_services))
        .route("/api/services/markers", get(list_markers))
        .route("/api/filters", get(filter_options))
        .route("/api/providers/{key}", get(provider_profile))
        .route("/api/catalog/reload", post(reload_catalog))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode};
    use catalog::{CatalogTables, MockCatalogSource};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn app() -> Router {
        let source = MockCatalogSource::new(CatalogTables::default(), 30, Some(17)).unwrap();
        let tables = source.tables().clone();
        let service = StorefrontService::new(Arc::new(source), tables).await.unwrap();
        routes(Arc::new(service))
    }

    async fn call(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_services_paginates() {
        let (status, body) = call(app().await, Method::GET, "/api/services?limit=5&offset=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["data"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"]["pagination"]["offset"], 2);
        assert_eq!(body["data"]["pagination"]["limit"], 5);
        assert_eq!(body["data"]["pagination"]["hasMore"], true);
    }

    #[tokio::test]
    async fn test_offset_past_end_returns_empty_page() {
        let (status, body) = call(app().await, Method::GET, "/api/services?offset=100000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"]["data"].as_array().unwrap().is_empty());
        assert_eq!(body["data"]["pagination"]["offset"], 100000);
        assert_eq!(body["data"]["pagination"]["hasMore"], false);
        let total = body["data"]["pagination"]["total"].as_u64().unwrap();
        assert!((60..=120).contains(&total));
    }

    #[tokio::test]
    async fn test_list_services_applies_filters() {
        let (status, body) = call(
            app().await,
            Method::GET,
            "/api/services?timeMin=10&timeMax=10&serviceType=meditation&limit=1000",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        for service in body["data"]["data"].as_array().unwrap() {
            assert!(service["startTime"].as_str().unwrap().starts_with("10:"));
            assert_eq!(service["serviceType"], "Meditation");
        }
    }

    #[tokio::test]
    async fn test_zero_limit_is_bad_request() {
        let (status, body) = call(app().await, Method::GET, "/api/services?limit=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("limit"));
    }

    #[tokio::test]
    async fn test_markers_and_filter_options() {
        let (status, body) = call(app().await, Method::GET, "/api/services/markers").await;
        assert_eq!(status, StatusCode::OK);
        let first = &body["data"][0];
        assert!(first["lat"].is_number());
        assert!(first["title"].is_string());

        let (status, body) = call(app().await, Method::GET, "/api/filters").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["serviceTypes"][0]["value"], "all-services");
        assert!(body["data"]["defaultTime"].is_string());
    }

    #[tokio::test]
    async fn test_provider_profile_found_and_missing() {
        let (status, body) = call(app().await, Method::GET, "/api/providers/provider-1?sort=lowest").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], "provider-1");
        assert_eq!(body["data"]["reviews"][0]["rating"], 4);
        assert_eq!(body["data"]["reviewStats"]["total"], 3);

        let (status, body) = call(app().await, Method::GET, "/api/providers/provider-404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_reload_catalog() {
        let (status, body) = call(app().await, Method::POST, "/api/catalog/reload").await;
        assert_eq!(status, StatusCode::OK);
        let count = body["data"]["services"].as_u64().unwrap();
        assert!((60..=120).contains(&count));
    }
}
