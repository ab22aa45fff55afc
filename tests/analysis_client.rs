use httpmock::prelude::*;
use incident_console::analysis::{
    AnalysisClient, AnalysisError, TranscriptAnalyzer, TranscriptSubmission,
};
use incident_console::config::AnalysisConfig;
use incident_console::upload::UploadPolicy;
use serde_json::json;

fn analysis_payload() -> serde_json::Value {
    json!({
        "report": {
            "date_time_of_incident": "2025-03-01T14:30:00",
            "service_user_name": "Margaret Hill",
            "location_of_incident": "Lounge",
            "type_of_incident": "Fall",
            "description_of_incident": "Slipped near the window.",
            "immediate_actions_taken": "Checked for injuries.",
            "first_aid_administered": true,
            "emergency_services_contacted": false,
            "who_was_notified": "Duty manager",
            "witnesses": null,
            "agreed_next_steps": null,
            "risk_assessment_needed": true,
            "risk_assessment_type": "Falls"
        },
        "emails": [
            {"to": "duty@example.org", "subject": "Fall in lounge", "body": "Details **here**."},
            {"to": "family@example.org", "cc": "gp@example.org", "subject": "Update", "body": "All well."}
        ],
        "policy_ids": ["12", "14"],
        "reasoning": ["Policy 12 applies."],
        "full_policy_texts": ["## Falls", "## Notifications"]
    })
}

#[tokio::test]
async fn test_analyze_posts_multipart_and_decodes_result() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/transcript")
                .body_contains(r#"name="text""#)
                .body_contains("Resident fell in the lounge.")
                .body_contains(r#"filename="notes.md""#)
                .body_contains("text/markdown");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(analysis_payload());
        })
        .await;

    let file = UploadPolicy::default()
        .validate("notes.md", None, "# Notes\n\nShe slipped.")
        .unwrap();
    let client = AnalysisClient::new(server.base_url()).unwrap();
    let result = client
        .analyze(&TranscriptSubmission::new(
            "Resident fell in the lounge.",
            Some(file),
        ))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.report.service_user_name, "Margaret Hill");
    assert_eq!(result.emails.len(), 2);
    assert_eq!(result.emails[1].cc.as_deref(), Some("gp@example.org"));
    assert_eq!(result.full_policy_texts.len(), 2);
}

#[tokio::test]
async fn test_analyze_without_file_sends_text_only() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/transcript")
                .body_contains("typed transcript");
            then.status(200).json_body(analysis_payload());
        })
        .await;

    let client = AnalysisClient::new(server.base_url()).unwrap();
    client
        .analyze(&TranscriptSubmission::new("typed transcript", None))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_detail_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/transcript");
            then.status(500)
                .json_body(json!({"detail": "Error processing transcript: model unavailable"}));
        })
        .await;

    let client = AnalysisClient::new(server.base_url()).unwrap();
    let err = client
        .analyze(&TranscriptSubmission::new("fell", None))
        .await
        .unwrap_err();

    match err {
        AnalysisError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Error processing transcript: model unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_detail_list_is_kept_as_json() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/transcript");
            then.status(422)
                .json_body(json!({"detail": [{"loc": ["body", "text"], "msg": "field required"}]}));
        })
        .await;

    let client = AnalysisClient::new(server.base_url()).unwrap();
    let err = client
        .analyze(&TranscriptSubmission::new("fell", None))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Api { status: 422, .. }));
    assert!(err.to_string().contains("field required"));
}

#[tokio::test]
async fn test_health_and_configured_paths() {
    let server = MockServer::start_async().await;
    let health = server
        .mock_async(|when, then| {
            when.method(GET).path("/svc/status");
            then.status(200).json_body(json!({"status": "healthy"}));
        })
        .await;

    let config = AnalysisConfig {
        base_url: server.url("/svc"),
        transcript_path: "/v2/transcript".into(),
        health_path: "/status".into(),
        timeout_secs: 5,
    };
    let client = AnalysisClient::from_config(&config).unwrap();
    let status = client.health().await.unwrap();

    health.assert_async().await;
    assert!(status.is_healthy());
}
