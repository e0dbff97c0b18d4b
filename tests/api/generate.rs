use crate::helpers::{generated_content, valid_form, TestApp};
use content_pilot::domain::EmailIndicator;
use content_pilot::error::SubmitError;
use content_pilot::request::GenerationForm;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn stale_email_values_are_not_sent_when_email_is_off() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(path("/api/v1/content/generate"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generated_content()))
        .expect(1)
        .mount(&app.generation_server)
        .await;
    let form = GenerationForm {
        content_topics: "a, b ,, c".into(),
        send_email: false,
        recipient_email: "left-over@example.com".into(),
        email_subject: "Left over".into(),
        ..valid_form()
    };

    // Act
    let result = app.submit(&form).await.expect("Generation should succeed");

    // Assert
    let body = &app.received_bodies().await[0];
    assert_eq!(body["content_topics"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(body["send_email"], serde_json::json!(false));
    assert!(body.get("recipient_email").is_none());
    assert!(body.get("email_subject").is_none());
    assert!(body.get("additional_notes").is_none());
    assert_eq!(result.email_indicator(), None);
}

#[tokio::test]
async fn recipient_is_sent_without_subject_when_subject_is_empty() {
    let app = TestApp::spawn().await;
    Mock::given(path("/api/v1/content/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "## Post",
            "email_sent": true,
            "email_status": "Content successfully sent to client@example.com"
        })))
        .expect(1)
        .mount(&app.generation_server)
        .await;
    let form = GenerationForm {
        send_email: true,
        recipient_email: " Client@Example.com ".into(),
        email_subject: "".into(),
        ..valid_form()
    };

    let result = app.submit(&form).await.expect("Generation should succeed");

    let body = &app.received_bodies().await[0];
    assert_eq!(body["recipient_email"], serde_json::json!("client@example.com"));
    assert!(body.get("email_subject").is_none());
    assert_eq!(result.email_indicator(), Some(EmailIndicator::Sent));
}

#[tokio::test]
async fn failed_email_is_reported_alongside_the_content() {
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "## Post",
            "email_sent": false,
            "email_status": "Gmail API error: quota exceeded"
        })))
        .expect(1)
        .mount(&app.generation_server)
        .await;
    let form = GenerationForm {
        send_email: true,
        recipient_email: "client@example.com".into(),
        email_subject: "Weekly content".into(),
        ..valid_form()
    };

    let result = app.submit(&form).await.expect("Generation should succeed");

    assert_eq!(result.content, "## Post");
    assert_eq!(
        result.email_notice().as_deref(),
        Some("✗ Email Failed\nGmail API error: quota exceeded")
    );
}

#[tokio::test]
async fn server_validation_errors_are_joined_into_one_message() {
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "detail": [
                {"loc": ["body", "business_goals"], "msg": "x", "type": "value_error"},
                {"loc": ["body", "timeline"], "msg": "y", "type": "value_error"}
            ]
        })))
        .expect(1)
        .mount(&app.generation_server)
        .await;

    let error = app.submit(&valid_form()).await.unwrap_err();

    assert!(matches!(error, SubmitError::RequestError(_)));
    assert_eq!(error.message(), "x, y");
}

#[tokio::test]
async fn generation_failure_detail_is_surfaced() {
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "Content generation failed: search quota exhausted"
        })))
        .expect(1)
        .mount(&app.generation_server)
        .await;

    let error = app.submit(&valid_form()).await.unwrap_err();

    assert_eq!(
        error.message(),
        "Content generation failed: search quota exhausted"
    );
}

#[tokio::test]
async fn invalid_briefs_never_reach_the_service() {
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // We assert that no request is fired at the service!
        .expect(0)
        .mount(&app.generation_server)
        .await;

    let test_cases = vec![
        (
            GenerationForm {
                content_topics: ",,".into(),
                ..valid_form()
            },
            "no topics",
        ),
        (
            GenerationForm {
                brand_voice: "   ".into(),
                ..valid_form()
            },
            "blank brand voice",
        ),
        (
            GenerationForm {
                send_email: true,
                recipient_email: "not-an-email".into(),
                ..valid_form()
            },
            "malformed recipient",
        ),
    ];

    for (form, description) in test_cases {
        let outcome = app.submit(&form).await;
        assert!(
            matches!(outcome, Err(SubmitError::ValidationError(_))),
            "The client did not reject the brief when the payload had {}.",
            description
        );
    }
}
