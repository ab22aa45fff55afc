//! Full page shell.

use leptos::prelude::*;

use crate::ui::incident::WorkspacePanel;

/// The single page: header plus one workspace.
#[component]
pub fn IncidentPage(workspace_id: String) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Incident transcript analysis"/>

                <title>"Incident Response Analysis"</title>

                // Local scripts only (no CDN)
                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <script defer src="/static/vendor/alpine.min.js"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                <div id="app-shell" class="flex flex-col min-h-screen">
                    <Header/>
                    <main id="app" class="flex-1 container mx-auto px-4 py-8 max-w-5xl">
                        <WorkspacePanel workspace_id=workspace_id />
                    </main>
                </div>
            </body>
        </html>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="w-full border-b border-panelBorder bg-panel">
            <div class="container mx-auto px-4 py-6 max-w-5xl">
                <h1 class="text-3xl font-bold text-primary">"Incident Response Analysis"</h1>
                <p class="text-textMuted mt-1">"AI-powered incident processing and policy analysis"</p>
            </div>
        </header>
    }
}
