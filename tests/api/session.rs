use crate::helpers::{generated_content, valid_form, TestApp};
use content_pilot::error::SubmitError;
use content_pilot::request::GenerationForm;
use std::time::Duration;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_successful_submission_stores_the_result() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(generated_content()))
        .expect(1)
        .mount(&app.generation_server)
        .await;

    // Act
    let outcome = app.session.submit(&app.client, &valid_form()).await;

    // Assert
    assert!(outcome.is_ok());
    let state = app.session.snapshot();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(
        state.result.map(|result| result.topics),
        Some(vec![
            "Eco-Friendly Travel".to_string(),
            "Sustainable Tourism".to_string()
        ])
    );
}

#[tokio::test]
async fn a_failed_submission_stores_the_message() {
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({"detail": "bad topic"})),
        )
        .expect(1)
        .mount(&app.generation_server)
        .await;

    let _ = app.session.submit(&app.client, &valid_form()).await;

    let state = app.session.snapshot();
    assert!(!state.loading);
    assert!(state.result.is_none());
    assert_eq!(state.error.as_deref(), Some("bad topic"));
}

#[tokio::test]
async fn a_new_submission_clears_the_previous_error() {
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(generated_content()))
        .expect(1)
        .mount(&app.generation_server)
        .await;

    let invalid = GenerationForm {
        timeline: "".into(),
        ..valid_form()
    };
    let _ = app.session.submit(&app.client, &invalid).await;
    assert_eq!(
        app.session.snapshot().error.as_deref(),
        Some("Timeline cannot be empty.")
    );

    let _ = app.session.submit(&app.client, &valid_form()).await;

    let state = app.session.snapshot();
    assert!(state.error.is_none());
    assert!(state.result.is_some());
}

#[tokio::test]
async fn a_second_submission_is_refused_while_one_is_in_flight() {
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(generated_content())
                .set_delay(Duration::from_millis(500)),
        )
        // Only the first submission reaches the service
        .expect(1)
        .mount(&app.generation_server)
        .await;

    let form = valid_form();
    let (first, second) = tokio::join!(
        app.session.submit(&app.client, &form),
        app.session.submit(&app.client, &form)
    );

    assert!(first.is_ok());
    assert!(matches!(second, Err(SubmitError::SubmissionInFlight)));
    assert!(!app.session.is_in_flight());
}

#[tokio::test]
async fn a_cancelled_submission_does_not_leave_the_session_loading() {
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(generated_content())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&app.generation_server)
        .await;

    // The caller gives up long before the service answers
    let outcome = tokio::time::timeout(
        Duration::from_millis(100),
        app.session.submit(&app.client, &valid_form()),
    )
    .await;

    assert!(outcome.is_err());
    let state = app.session.snapshot();
    assert!(!state.loading);
    assert!(state.result.is_none());
    assert!(state.error.is_none());
    assert!(!app.session.is_in_flight());
}
