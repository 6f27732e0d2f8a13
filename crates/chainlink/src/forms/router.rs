use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::contact::ContactForm;
use super::forgot_password::ForgotPasswordForm;
use super::login::LoginForm;
use super::service::{FormService, FormServiceError, SessionId, SessionView};
use super::signup::{AdminDetails, CompanyDetails};
use super::submission::SubmissionSink;
use super::{FormKind, FormOptions};
use crate::error::AppError;

/// Router builder exposing form sessions over HTTP.
pub fn form_router<S>(service: Arc<FormService<S>>) -> Router
where
    S: SubmissionSink + ?Sized + 'static,
{
    Router::new()
        .route("/api/v1/forms/:kind/sessions", post(mount_handler::<S>))
        .route("/api/v1/forms/:kind/options", get(options_handler))
        .route(
            "/api/v1/forms/sessions/:session_id",
            get(status_handler::<S>).delete(unmount_handler::<S>),
        )
        .route(
            "/api/v1/forms/sessions/:session_id/login",
            post(login_handler::<S>),
        )
        .route(
            "/api/v1/forms/sessions/:session_id/forgot-password",
            post(forgot_password_handler::<S>),
        )
        .route(
            "/api/v1/forms/sessions/:session_id/contact",
            post(contact_handler::<S>),
        )
        .route(
            "/api/v1/forms/sessions/:session_id/signup/next",
            post(signup_next_handler::<S>),
        )
        .route(
            "/api/v1/forms/sessions/:session_id/signup/back",
            post(signup_back_handler::<S>),
        )
        .route(
            "/api/v1/forms/sessions/:session_id/signup",
            post(signup_handler::<S>),
        )
        .with_state(service)
}

fn respond(result: Result<SessionView, FormServiceError>, success: StatusCode) -> Response {
    match result {
        Ok(view) => (success, Json(view)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn mount_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Path(kind): Path<FormKind>,
) -> Response
where
    S: SubmissionSink + ?Sized + 'static,
{
    let view = service.mount(kind);
    (StatusCode::CREATED, Json(view)).into_response()
}

pub(crate) async fn options_handler(Path(kind): Path<FormKind>) -> Json<FormOptions> {
    Json(kind.options())
}

pub(crate) async fn status_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SubmissionSink + ?Sized + 'static,
{
    respond(service.status(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn unmount_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SubmissionSink + ?Sized + 'static,
{
    respond(service.unmount(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn login_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Path(session_id): Path<String>,
    Json(form): Json<LoginForm>,
) -> Response
where
    S: SubmissionSink + ?Sized + 'static,
{
    respond(
        service.submit_login(&SessionId(session_id), form),
        StatusCode::ACCEPTED,
    )
}

pub(crate) async fn forgot_password_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Path(session_id): Path<String>,
    Json(form): Json<ForgotPasswordForm>,
) -> Response
where
    S: SubmissionSink + ?Sized + 'static,
{
    respond(
        service.submit_forgot_password(&SessionId(session_id), form),
        StatusCode::ACCEPTED,
    )
}

pub(crate) async fn contact_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Path(session_id): Path<String>,
    Json(form): Json<ContactForm>,
) -> Response
where
    S: SubmissionSink + ?Sized + 'static,
{
    respond(
        service.submit_contact(&SessionId(session_id), form),
        StatusCode::ACCEPTED,
    )
}

pub(crate) async fn signup_next_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Path(session_id): Path<String>,
    Json(company): Json<CompanyDetails>,
) -> Response
where
    S: SubmissionSink + ?Sized + 'static,
{
    respond(
        service.signup_next(&SessionId(session_id), company),
        StatusCode::OK,
    )
}

pub(crate) async fn signup_back_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SubmissionSink + ?Sized + 'static,
{
    respond(service.signup_back(&SessionId(session_id)), StatusCode::OK)
}

pub(crate) async fn signup_handler<S>(
    State(service): State<Arc<FormService<S>>>,
    Path(session_id): Path<String>,
    Json(admin): Json<AdminDetails>,
) -> Response
where
    S: SubmissionSink + ?Sized + 'static,
{
    respond(
        service.submit_signup(&SessionId(session_id), admin),
        StatusCode::ACCEPTED,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubmissionConfig;
    use crate::forms::submission::SubmissionRecord;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct Collecting {
        records: Mutex<Vec<SubmissionRecord>>,
    }

    impl SubmissionSink for Collecting {
        fn deliver(&self, record: SubmissionRecord) {
            self.records.lock().expect("sink mutex poisoned").push(record);
        }
    }

    fn router() -> Router {
        let service = Arc::new(FormService::new(
            Arc::new(Collecting::default()),
            SubmissionConfig::default(),
        ));
        form_router(service)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("serializable")))
            .expect("request builds")
    }

    #[tokio::test]
    async fn mount_returns_created_session() {
        let response = router()
            .oneshot(json_request("POST", "/api/v1/forms/modal_signup/sessions", json!({})))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["kind"], "modal_signup");
        assert_eq!(body["status"], "idle");
        assert_eq!(body["signup_step"], "company");
    }

    #[tokio::test]
    async fn unknown_form_kind_is_rejected() {
        let response = router()
            .oneshot(json_request("POST", "/api/v1/forms/newsletter/sessions", json!({})))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_login_returns_field_errors() {
        let app = router();
        let mounted = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/forms/login/sessions", json!({})))
            .await
            .expect("router responds");
        let session_id = body_json(mounted).await["session_id"]
            .as_str()
            .expect("session id")
            .to_string();

        let response = app
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/forms/sessions/{session_id}/login"),
                json!({ "email": "not-an-email", "password": "secret" }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(
            body["errors"]["email"],
            "Please enter a valid email address"
        );
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/forms/sessions/form-missing")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn options_list_select_choices_per_form() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/forms/contact/options")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["industries"][0], "Retail & E-commerce");
        assert_eq!(body["company_sizes"][4], "Enterprise (1000+ employees)");
        assert_eq!(body["business_types"], json!([]));

        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/forms/signup/options")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let body = body_json(response).await;
        assert_eq!(body["business_types"][2], "Wholesaler");
        assert_eq!(body["company_sizes"][0], "1-10 employees");
    }
}
