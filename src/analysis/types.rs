//! Wire types exchanged with the analysis service.

use serde::{Deserialize, Serialize};

use crate::upload::TranscriptFile;

/// Structured incident report filled in by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentReport {
    /// When the incident happened (ISO 8601 when known).
    #[serde(default)]
    pub date_time_of_incident: Option<String>,
    pub service_user_name: String,
    #[serde(default)]
    pub location_of_incident: Option<String>,
    /// Category, e.g. "Fall" or "Medical Emergency".
    pub type_of_incident: String,
    pub description_of_incident: String,
    #[serde(default)]
    pub immediate_actions_taken: Option<String>,
    pub first_aid_administered: bool,
    pub emergency_services_contacted: bool,
    #[serde(default)]
    pub who_was_notified: Option<String>,
    #[serde(default)]
    pub witnesses: Option<String>,
    #[serde(default)]
    pub agreed_next_steps: Option<String>,
    pub risk_assessment_needed: bool,
    #[serde(default)]
    pub risk_assessment_type: Option<String>,
}

/// Draft notification email. The body is Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Comma separated recipients.
    pub to: String,
    #[serde(default)]
    pub cc: Option<String>,
    #[serde(default)]
    pub bcc: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Full response of the transcript endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub report: IncidentReport,
    #[serde(default)]
    pub emails: Vec<Email>,
    /// Ids of the policy situations the model relied on.
    #[serde(default)]
    pub policy_ids: Vec<String>,
    /// Markdown explanations tying the transcript to policy text.
    #[serde(default)]
    pub reasoning: Vec<String>,
    /// Markdown policy excerpts, one per referenced policy.
    #[serde(default)]
    pub full_policy_texts: Vec<String>,
}

/// Body of the service's health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
}

impl ServiceHealth {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// What the user submitted: typed text, an optional file, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptSubmission {
    pub text: String,
    pub file: Option<TranscriptFile>,
}

impl TranscriptSubmission {
    #[must_use]
    pub fn new(text: impl Into<String>, file: Option<TranscriptFile>) -> Self {
        Self {
            text: text.into(),
            file,
        }
    }

    /// True when there is neither non-blank text nor a file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.file.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::UploadPolicy;
    use serde_json::json;

    #[test]
    fn test_deserialize_service_payload() {
        let payload = json!({
            "emails": [{
                "to": "Duty Manager <duty@example.org>",
                "cc": null,
                "subject": "Fall in lounge",
                "body": "**Summary**: resident fell."
            }],
            "report": {
                "date_time_of_incident": "2025-03-01T14:30:00",
                "service_user_name": "Margaret Hill",
                "location_of_incident": null,
                "type_of_incident": "Fall",
                "description_of_incident": "Slipped near the window.",
                "first_aid_administered": true,
                "emergency_services_contacted": false,
                "risk_assessment_needed": true,
                "risk_assessment_type": "Moving and Handling"
            },
            "policy_ids": ["12"],
            "reasoning": ["Policy 12 requires notifying the duty manager."],
            "full_policy_texts": ["## Falls\n\nNotify the duty manager."]
        });

        let result: AnalysisResult = serde_json::from_value(payload).unwrap();
        assert_eq!(result.emails.len(), 1);
        assert_eq!(result.emails[0].bcc, None);
        assert_eq!(result.report.service_user_name, "Margaret Hill");
        assert_eq!(result.report.location_of_incident, None);
        assert_eq!(result.report.witnesses, None);
        assert!(result.report.first_aid_administered);
        assert_eq!(result.policy_ids, vec!["12".to_string()]);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let payload = json!({
            "report": {
                "service_user_name": "A",
                "type_of_incident": "Other",
                "description_of_incident": "",
                "first_aid_administered": false,
                "emergency_services_contacted": false,
                "risk_assessment_needed": false
            }
        });
        let result: AnalysisResult = serde_json::from_value(payload).unwrap();
        assert!(result.emails.is_empty());
        assert!(result.reasoning.is_empty());
        assert!(result.full_policy_texts.is_empty());
    }

    #[test]
    fn test_submission_is_empty() {
        assert!(TranscriptSubmission::new("   \n", None).is_empty());
        assert!(!TranscriptSubmission::new("fell", None).is_empty());

        let file = UploadPolicy::default()
            .validate("t.txt", None, "fell")
            .unwrap();
        assert!(!TranscriptSubmission::new("", Some(file)).is_empty());
    }

    #[test]
    fn test_health_status() {
        let health = ServiceHealth {
            status: "healthy".into(),
        };
        assert!(health.is_healthy());
    }
}
