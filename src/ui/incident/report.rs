//! Incident report card.

use leptos::prelude::*;

use crate::analysis::IncidentReport;
use crate::ui::components::{Badge, BadgeVariant, Card, CardContent, CardHeader};

const LABEL_CLASSES: &str = "text-sm font-semibold text-textMuted uppercase tracking-wide";

/// Renders the structured incident report.
///
/// Missing optional fields fall back to `Not specified`, `None`, or `N/A`.
#[component]
pub fn IncidentReportCard(report: IncidentReport) -> impl IntoView {
    let IncidentReport {
        date_time_of_incident,
        service_user_name,
        location_of_incident,
        type_of_incident,
        description_of_incident,
        immediate_actions_taken,
        first_aid_administered,
        emergency_services_contacted,
        who_was_notified,
        witnesses,
        agreed_next_steps,
        risk_assessment_needed,
        risk_assessment_type,
    } = report;

    view! {
        <Card id="incident-report">
            <CardHeader>
                <h2 class="text-2xl font-bold text-primary">"Incident Report"</h2>
            </CardHeader>
            <CardContent class="grid grid-cols-1 gap-5">
                <ReportField label="Date/Time" value=or_default(date_time_of_incident, "Not specified") />
                <ReportField label="Service User" value=service_user_name />
                <ReportField label="Location" value=or_default(location_of_incident, "Not specified") />
                <ReportField label="Type of Incident" value=type_of_incident />
                <ReportField label="Description" value=description_of_incident />
                <ReportField label="Immediate Actions" value=or_default(immediate_actions_taken, "None") />
                <div class="grid grid-cols-2 gap-4 pb-4 border-b border-panelBorder">
                    <FlagField label="First Aid" value=first_aid_administered />
                    <FlagField label="Emergency Services" value=emergency_services_contacted />
                </div>
                <ReportField label="Who Was Notified" value=or_default(who_was_notified, "Not specified") />
                <ReportField label="Witnesses" value=or_default(witnesses, "None") />
                <ReportField label="Agreed Next Steps" value=or_default(agreed_next_steps, "None") />
                <div class="grid grid-cols-2 gap-4">
                    <FlagField label="Risk Assessment Needed" value=risk_assessment_needed />
                    <div>
                        <span class=format!("{LABEL_CLASSES} block")>"Type"</span>
                        <p class="mt-1 text-textPrimary">{or_default(risk_assessment_type, "N/A")}</p>
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}

/// Value of an optional text field, or the fallback when absent or blank.
fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[component]
fn ReportField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="pb-4 border-b border-panelBorder">
            <span class=LABEL_CLASSES>{label}</span>
            <p class="mt-1 text-textPrimary">{value}</p>
        </div>
    }
}

#[component]
fn FlagField(label: &'static str, value: bool) -> impl IntoView {
    view! {
        <div>
            <span class=format!("{LABEL_CLASSES} block")>{label}</span>
            <Badge variant=BadgeVariant::for_flag(value)>{if value { "Yes" } else { "No" }}</Badge>
        </div>
    }
}
