use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::features::{Feature, Plan, FEATURES, PLANS};
use super::pages::SitePage;
use super::showcase::{
    industries_in, Industry, SuccessStory, Testimonial, INDUSTRY_FILTERS, SUCCESS_STORIES,
    TESTIMONIALS,
};

pub fn site_router() -> Router {
    Router::new()
        .route("/api/v1/site/pages", get(page_handler))
        .route("/api/v1/industries", get(industries_handler))
        .route("/api/v1/testimonials", get(testimonials_handler))
        .route("/api/v1/features", get(features_handler))
        .route("/api/v1/plans", get(plans_handler))
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageQuery {
    #[serde(default)]
    path: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PageResponse {
    path: String,
    page: SitePage,
    title: &'static str,
}

pub(crate) async fn page_handler(Query(query): Query<PageQuery>) -> Json<PageResponse> {
    let page = SitePage::resolve(&query.path);
    Json(PageResponse {
        path: query.path,
        page,
        title: page.title(),
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct IndustryQuery {
    #[serde(default)]
    category: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct IndustriesResponse {
    filters: &'static [&'static str],
    industries: Vec<&'static Industry>,
    success_stories: &'static [SuccessStory],
}

pub(crate) async fn industries_handler(
    Query(query): Query<IndustryQuery>,
) -> Json<IndustriesResponse> {
    Json(IndustriesResponse {
        filters: INDUSTRY_FILTERS,
        industries: industries_in(&query.category),
        success_stories: SUCCESS_STORIES,
    })
}

pub(crate) async fn testimonials_handler() -> Json<&'static [Testimonial]> {
    Json(TESTIMONIALS)
}

pub(crate) async fn features_handler() -> Json<&'static [Feature]> {
    Json(FEATURES)
}

pub(crate) async fn plans_handler() -> Json<&'static [Plan]> {
    Json(PLANS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> Value {
        let response = site_router()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn unknown_paths_resolve_to_not_found() {
        let body = get_json("/api/v1/site/pages?path=/careers").await;
        assert_eq!(body["page"], "not_found");
        assert_eq!(body["title"], "Page Not Found");
    }

    #[tokio::test]
    async fn industries_filter_by_category() {
        let body = get_json("/api/v1/industries?category=Healthcare").await;
        assert_eq!(body["industries"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["industries"][0]["id"], "healthcare");
        assert_eq!(body["filters"][0], "All");
        assert_eq!(body["success_stories"][3]["company"], "Food Distributor");
    }

    #[tokio::test]
    async fn testimonials_are_listed() {
        let body = get_json("/api/v1/testimonials").await;
        assert_eq!(body.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn features_page_content_is_served() {
        let features = get_json("/api/v1/features").await;
        assert_eq!(features.as_array().map(Vec::len), Some(4));
        assert_eq!(features[0]["id"], "forecasting");
        assert_eq!(features[2]["metrics"][0], "10,000+ suppliers");

        let plans = get_json("/api/v1/plans").await;
        assert_eq!(plans.as_array().map(Vec::len), Some(3));
        assert_eq!(plans[1]["name"], "Pro");
        assert_eq!(plans[1]["popular"], true);
        assert_eq!(plans[2]["price"], "Custom");
    }
}
