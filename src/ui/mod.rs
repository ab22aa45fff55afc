//! UI components and layouts.
//!
//! Leptos components rendered to HTML strings on the server. The full page is
//! served once; every later interaction swaps in one of the fragments below
//! through HTMX.
//!
//! # Structure
//!
//! - [`app`]: Page shell
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`incident`]: Workspace form and result cards

pub mod app;
pub mod components;
pub mod incident;

use leptos::prelude::*;

use crate::analysis::AnalysisResult;
use crate::pager::Pager;
use crate::upload::TranscriptFile;
use app::IncidentPage;
use incident::{EmailCarousel, FileStatus, Notice, ResultsPanel, WorkspacePanel};

/// Render a view to an HTML string inside a fresh reactive owner.
pub fn render<V: IntoView>(view: impl FnOnce() -> V) -> String {
    Owner::new().with(|| view().to_html())
}

/// Complete page for a new workspace.
#[must_use]
pub fn render_page(workspace_id: &str) -> String {
    let workspace_id = workspace_id.to_string();
    render(move || view! { <IncidentPage workspace_id=workspace_id /> })
}

/// Fresh `#workspace` panel, used after Clear.
#[must_use]
pub fn render_workspace(workspace_id: &str) -> String {
    let workspace_id = workspace_id.to_string();
    render(move || view! { <WorkspacePanel workspace_id=workspace_id /> })
}

/// Contents of `#results` for a successful analysis.
#[must_use]
pub fn render_results(workspace_id: &str, result: &AnalysisResult) -> String {
    let workspace_id = workspace_id.to_string();
    let result = result.clone();
    render(move || view! { <ResultsPanel workspace_id=workspace_id result=result /> })
}

/// The `#emails` card positioned at `index` (clamped).
#[must_use]
pub fn render_emails(workspace_id: &str, result: &AnalysisResult, index: usize) -> String {
    let workspace_id = workspace_id.to_string();
    let pager = Pager::at(index, result.emails.len());
    let email = result.emails.get(pager.index()).cloned();
    render(move || view! { <EmailCarousel workspace_id=workspace_id email=email pager=pager /> })
}

/// Contents of `#file-status` after a file was picked.
#[must_use]
pub fn render_file_status(workspace_id: &str, outcome: Result<TranscriptFile, String>) -> String {
    let workspace_id = workspace_id.to_string();
    render(move || view! { <FileStatus workspace_id=workspace_id outcome=outcome /> })
}

/// A short alert rendered into `#results`.
#[must_use]
pub fn render_notice(message: impl Into<String>) -> String {
    let message = message.into();
    render(move || view! { <Notice message=message /> })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Email, IncidentReport};
    use crate::upload::UploadPolicy;

    fn email(subject: &str) -> Email {
        Email {
            to: "duty@example.org".into(),
            cc: Some(String::new()),
            bcc: Some("records@example.org".into()),
            subject: subject.into(),
            body: "Please **review**.".into(),
        }
    }

    fn result(emails: Vec<Email>) -> AnalysisResult {
        AnalysisResult {
            report: IncidentReport {
                date_time_of_incident: Some("2025-03-01T14:30:00".into()),
                service_user_name: "Margaret Hill".into(),
                location_of_incident: None,
                type_of_incident: "Fall".into(),
                description_of_incident: "Slipped near the window.".into(),
                immediate_actions_taken: None,
                first_aid_administered: true,
                emergency_services_contacted: false,
                who_was_notified: None,
                witnesses: None,
                agreed_next_steps: None,
                risk_assessment_needed: true,
                risk_assessment_type: None,
            },
            emails,
            policy_ids: vec!["12".into()],
            reasoning: vec!["Policy 12 *applies*.".into(), "Second step.".into()],
            full_policy_texts: vec!["## Falls\n\nNotify the manager.".into()],
        }
    }

    #[test]
    fn test_page_contains_form_and_empty_results() {
        let html = render_page("ws-1");
        assert!(html.contains("Incident Response Analysis"));
        assert!(html.contains("AI-powered incident processing and policy analysis"));
        assert!(html.contains(r#"hx-post="/transcript""#));
        assert!(html.contains(r#"name="workspace_id""#));
        assert!(html.contains(r#"value="ws-1""#));
        assert!(html.contains("Paste or type the incident transcript here..."));
        assert!(html.contains("Analyze Incident"));
        assert!(html.contains("Processing transcript..."));
        assert!(html.contains(r#"id="results""#));
        assert!(!html.contains("Generated Emails"));
    }

    #[test]
    fn test_submission_clears_previous_results() {
        for html in [render_page("ws-1"), render_workspace("ws-1")] {
            assert!(html.contains("x-on:htmx:before-request="));
            assert!(html.contains("$event.detail.elt === $el"));
            assert!(html.contains("innerHTML = "));
            assert!(html.contains("hasResult = false"));
        }
    }

    #[test]
    fn test_clear_hidden_for_whitespace_text() {
        let html = render_workspace("ws-1");
        assert!(html.contains(r#"x-show="text.trim() || hasFile || hasResult""#));
        assert!(!html.contains(r#"x-show="text || "#));
    }

    #[test]
    fn test_results_render_all_cards() {
        let html = render_results("ws-1", &result(vec![email("First"), email("Second")]));
        assert!(html.contains("Incident Report"));
        assert!(html.contains("Margaret Hill"));
        assert!(html.contains("Not specified"));
        assert!(html.contains("Generated Emails (1/2)"));
        assert!(html.contains("First"));
        assert!(!html.contains("Second</span>"));
        assert!(html.contains("Policies Referenced"));
        assert!(html.contains("<h2>Falls</h2>"));
        assert!(html.contains("Analysis Reasoning"));
        assert!(html.contains("<em>applies</em>"));
        assert!(html.contains("hasResult = true"));
    }

    #[test]
    fn test_email_card_hides_empty_cc() {
        let html = render_emails("ws-1", &result(vec![email("Only")]), 0);
        assert!(!html.contains(">CC:<"));
        assert!(html.contains(">BCC:<"));
        assert!(html.contains("<strong>review</strong>"));
        // A single email has no navigation.
        assert!(!html.contains("Next email"));
    }

    #[test]
    fn test_email_card_navigation_targets_neighbours() {
        let emails = vec![email("A"), email("B"), email("C")];
        let html = render_emails("ws-1", &result(emails), 1);
        assert!(html.contains("Generated Emails (2/3)"));
        assert!(html.contains("/workspaces/ws-1/emails/0"));
        assert!(html.contains("/workspaces/ws-1/emails/2"));

        let last = render_emails("ws-1", &result(vec![email("A"), email("B")]), 9);
        assert!(last.contains("Generated Emails (2/2)"));
    }

    #[test]
    fn test_no_emails_message() {
        let html = render_emails("ws-1", &result(vec![]), 0);
        assert!(html.contains("No emails were generated for this incident."));
    }

    #[test]
    fn test_file_status() {
        let file = UploadPolicy::default()
            .validate("notes.txt", None, "resident fell")
            .unwrap();
        let html = render_file_status("ws-1", Ok(file));
        assert!(html.contains("Selected: "));
        assert!(html.contains("notes.txt"));
        assert!(!html.contains("hx-swap-oob"));

        let html = render_file_status("ws-1", Err("Only .txt or .md files are allowed.".into()));
        assert!(html.contains("Only .txt or .md files are allowed."));
        assert!(html.contains("hx-swap-oob"));
        assert!(html.contains("hasFile = false"));
    }

    #[test]
    fn test_notice_escapes_message() {
        let html = render_notice("<b>bad</b>");
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }
}
