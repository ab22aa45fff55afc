//! Results region contents.

use leptos::prelude::*;

use super::{EmailCarousel, IncidentReportCard, PoliciesCard, ReasoningCard};
use crate::analysis::AnalysisResult;
use crate::pager::Pager;

/// Everything rendered after a successful analysis.
///
/// Setting `hasResult` lets the Clear button show up once results exist.
#[component]
pub fn ResultsPanel(workspace_id: String, result: AnalysisResult) -> impl IntoView {
    let AnalysisResult {
        report,
        emails,
        reasoning,
        full_policy_texts,
        ..
    } = result;
    let pager = Pager::new(emails.len());
    let first_email = emails.into_iter().next();

    view! {
        <div class="space-y-8" x-init="hasResult = true">
            <IncidentReportCard report=report />
            <EmailCarousel workspace_id=workspace_id email=first_email pager=pager />
            <PoliciesCard policies=full_policy_texts />
            <ReasoningCard reasoning=reasoning />
        </div>
    }
}

/// Short inline message, e.g. a rejected file at submit time.
#[component]
pub fn Notice(message: String) -> impl IntoView {
    view! {
        <div role="alert" class="text-sm text-danger bg-danger/10 px-4 py-2 rounded-lg border border-danger/30">
            {message}
        </div>
    }
}
