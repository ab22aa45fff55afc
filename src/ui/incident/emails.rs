//! Generated emails carousel.

use leptos::prelude::*;

use crate::analysis::Email;
use crate::markdown::render_markdown;
use crate::pager::Pager;
use crate::ui::components::{
    ButtonSize, ButtonVariant, Card, CardContent, CardHeader, ChevronLeftIcon, ChevronRightIcon,
    button_classes,
};

/// One email at a time, with previous/next navigation.
///
/// The whole card is the swap target (`#emails`); each nav button fetches the
/// card for its neighbouring index.
#[component]
pub fn EmailCarousel(
    /// Workspace that owns the emails.
    workspace_id: String,
    /// Email at the pager position, if any.
    email: Option<Email>,
    /// Current position.
    pager: Pager,
) -> impl IntoView {
    let title = match pager.position_label() {
        label if label.is_empty() => "Generated Emails".to_string(),
        label => format!("Generated Emails {label}"),
    };

    let nav = pager.has_multiple().then(|| {
        let url = |p: Pager| format!("/workspaces/{workspace_id}/emails/{}", p.index());
        let classes = button_classes(ButtonVariant::Ghost, ButtonSize::Icon, "rounded-lg");
        view! {
            <div class="flex gap-2">
                <button
                    type="button"
                    class=classes.clone()
                    aria-label="Previous email"
                    disabled=pager.is_first()
                    hx-get=url(pager.previous())
                    hx-target="#emails"
                    hx-swap="outerHTML"
                >
                    <ChevronLeftIcon />
                </button>
                <button
                    type="button"
                    class=classes
                    aria-label="Next email"
                    disabled=pager.is_last()
                    hx-get=url(pager.next())
                    hx-target="#emails"
                    hx-swap="outerHTML"
                >
                    <ChevronRightIcon />
                </button>
            </div>
        }
    });

    view! {
        <Card id="emails">
            <CardHeader>
                <h2 class="text-2xl font-bold text-primary">{title}</h2>
                {nav}
            </CardHeader>
            <CardContent>
                {match email {
                    Some(email) => view! { <EmailView email=email /> }.into_any(),
                    None => view! {
                        <p class="text-textMuted">"No emails were generated for this incident."</p>
                    }.into_any(),
                }}
            </CardContent>
        </Card>
    }
}

#[component]
fn EmailView(email: Email) -> impl IntoView {
    let Email {
        to,
        cc,
        bcc,
        subject,
        body,
    } = email;
    let cc = cc.filter(|v| !v.is_empty());
    let bcc = bcc.filter(|v| !v.is_empty());

    view! {
        <div class="border border-panelBorder rounded-xl p-6 bg-panelMuted">
            <div class="mb-4 space-y-2">
                <AddressLine label="To:" value=to />
                {cc.map(|cc| view! { <AddressLine label="CC:" value=cc /> })}
                {bcc.map(|bcc| view! { <AddressLine label="BCC:" value=bcc /> })}
                <AddressLine label="Subject:" value=subject />
            </div>
            <div class="prose prose-sm max-w-none bg-panel p-4 rounded-lg" inner_html=render_markdown(&body)></div>
        </div>
    }
}

#[component]
fn AddressLine(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <span class="text-sm font-semibold text-textMuted w-16">{label}</span>
            <span class="text-textPrimary">{value}</span>
        </div>
    }
}
