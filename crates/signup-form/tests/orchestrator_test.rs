//! End-to-end submit flow through `SignUpOrchestrator` with a stubbed API.

mod common;

use std::sync::Arc;

use common::{StubAuthApi, SUCCESS_BODY};
use signup_core::{Field, JsonResponseParser, StatusKind, SubmissionStatus};
use signup_form::{PipelineConfig, SignUpOrchestrator, ValidationPipeline};

fn orchestrator(api: &Arc<StubAuthApi>) -> SignUpOrchestrator {
    let pipeline = ValidationPipeline::new(api.clone(), PipelineConfig::default()).unwrap();
    SignUpOrchestrator::new(api.clone(), Arc::new(JsonResponseParser), pipeline)
}

async fn fill_and_settle(o: &SignUpOrchestrator) {
    let p = o.pipeline();
    p.set_username("alice");
    p.set_email("alice@example.com");
    p.set_password("secret12");
    p.set_confirm_password("secret12");
    p.settled().await;
}

/// Username, email and confirmation are cleared; the password error is hidden.
fn assert_fields_reset(o: &SignUpOrchestrator) {
    let p = o.pipeline();
    assert_eq!(p.username_error(), "Username is missing");
    assert_eq!(p.email_error(), "Email is missing");
    assert_eq!(p.confirm_password_error(), "Confirm Password is missing");
    assert_eq!(p.password_error(), "");
    assert_eq!(p.value(Field::Username), "");
    assert_eq!(p.value(Field::Email), "");
    assert_eq!(p.value(Field::ConfirmPassword), "");
    assert!(!p.can_submit());
}

#[tokio::test(start_paused = true)]
async fn status_starts_neutral() {
    let api = Arc::new(StubAuthApi::new());
    let o = orchestrator(&api);

    let status = o.status();
    assert_eq!(status, SubmissionStatus::neutral());
    assert_eq!(status.message, "");
    assert_eq!(status.kind, StatusKind::Neutral);
}

#[tokio::test(start_paused = true)]
async fn successful_submit_reports_success_and_resets_fields() {
    let api = Arc::new(StubAuthApi::new().with_sign_up_response(200, SUCCESS_BODY));
    let o = orchestrator(&api);
    fill_and_settle(&o).await;
    assert!(o.pipeline().can_submit());

    o.submit("alice", "alice@example.com", "secret12").await;

    let status = o.status();
    assert_eq!(status.message, "Sign Up is successfully");
    assert_eq!(status.kind, StatusKind::Success);

    assert_fields_reset(&o);

    assert_eq!(
        api.sign_up_calls(),
        vec![(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "secret12".to_string()
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn rejection_reports_failure() {
    let body = r#"{"validation_errors":{"email":["The email has already been taken."]}}"#;
    let api = Arc::new(StubAuthApi::new().with_sign_up_response(422, body));
    let o = orchestrator(&api);

    o.submit("alice", "alice@example.com", "secret12").await;

    assert_eq!(o.status(), SubmissionStatus::failure());
    assert_eq!(o.status().message, "Sign Up failed");
    assert_fields_reset(&o);
}

#[tokio::test(start_paused = true)]
async fn unparseable_success_body_reports_failure() {
    let api = Arc::new(StubAuthApi::new().with_sign_up_response(200, "not json"));
    let o = orchestrator(&api);

    o.submit("alice", "alice@example.com", "secret12").await;

    assert_eq!(o.status().kind, StatusKind::Failure);
    assert_fields_reset(&o);
}

#[tokio::test(start_paused = true)]
async fn transport_error_reports_failure() {
    let api = Arc::new(StubAuthApi::new().with_sign_up_transport_error("connection refused"));
    let o = orchestrator(&api);

    o.submit("alice", "alice@example.com", "secret12").await;

    assert_eq!(o.status().kind, StatusKind::Failure);
    assert_eq!(api.sign_up_calls().len(), 1);
    assert_fields_reset(&o);
}

#[tokio::test(start_paused = true)]
async fn submit_current_sends_pipeline_values() {
    let api = Arc::new(StubAuthApi::new());
    let o = orchestrator(&api);
    fill_and_settle(&o).await;

    o.submit_current().await;

    assert_eq!(o.status().kind, StatusKind::Success);
    let calls = api.sign_up_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "alice");
    assert_eq!(calls[0].1, "alice@example.com");
    assert_eq!(calls[0].2, "secret12");
}

#[tokio::test(start_paused = true)]
async fn status_subscribers_see_each_outcome() {
    let api = Arc::new(StubAuthApi::new());
    let o = orchestrator(&api);
    let mut rx = o.subscribe_status();
    assert_eq!(rx.borrow_and_update().kind, StatusKind::Neutral);

    o.submit("alice", "alice@example.com", "secret12").await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().kind, StatusKind::Success);
}
