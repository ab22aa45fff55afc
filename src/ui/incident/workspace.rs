//! Transcript input form and results region.

use leptos::prelude::*;

use super::FileDrop;
use crate::ui::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, LoaderIcon, SparklesIcon,
    button_classes,
};

/// Alpine state shared by the form controls.
const ALPINE_STATE: &str = "{ text: '', hasFile: false, hasResult: false }";

/// Empties the previous results when this form starts a submission. Requests
/// from the file input bubble through the form too, so they are skipped.
const RESET_RESULTS: &str = "if ($event.detail.elt === $el) { document.getElementById('results').innerHTML = ''; hasResult = false }";

/// Input form, loading indicator, and an empty `#results` region.
///
/// Clearing swaps this whole panel for a fresh one, which resets the text,
/// the file input, and the results in one go.
#[component]
pub fn WorkspacePanel(workspace_id: String) -> impl IntoView {
    let clear_url = format!("/workspaces/{workspace_id}/clear");

    view! {
        <div id="workspace" class="space-y-8" x-data=ALPINE_STATE>
            <Card>
                <CardContent class="pt-8 space-y-6">
                    <form
                        id="transcript-form"
                        hx-post="/transcript"
                        hx-encoding="multipart/form-data"
                        hx-target="#results"
                        hx-swap="innerHTML show:#results:top"
                        hx-indicator="#loading"
                        hx-disabled-elt="#analyze-button, #clear-button"
                        hx-sync="this:drop"
                        hx-disinherit="*"
                        x-on:htmx:before-request=RESET_RESULTS
                        class="space-y-6"
                    >
                        <input type="hidden" name="workspace_id" value=workspace_id.clone() />

                        <div class="space-y-2">
                            <label for="transcript-text" class="block text-sm font-semibold text-textPrimary">
                                "Incident Transcript"
                            </label>
                            <textarea
                                id="transcript-text"
                                name="text"
                                rows="10"
                                x-model="text"
                                placeholder="Paste or type the incident transcript here..."
                                class="w-full rounded-xl border border-panelBorder bg-panelMuted p-4 text-textPrimary focus:outline-none focus:ring-2 focus:ring-primary"
                            ></textarea>
                        </div>

                        <div class="space-y-2">
                            <span class="block text-sm font-semibold text-textPrimary">"Or Upload File"</span>
                            <FileDrop workspace_id=workspace_id.clone() />
                            <div id="file-status" aria-live="polite"></div>
                        </div>

                        <div class="flex gap-4">
                            <Button
                                id="analyze-button"
                                button_type="submit"
                                size=ButtonSize::Lg
                                class="flex-1 gap-2"
                                disabled_when="!text.trim() && !hasFile"
                            >
                                <SparklesIcon class="h-5 w-5" />
                                "Analyze Incident"
                            </Button>
                            <button
                                type="button"
                                id="clear-button"
                                class=button_classes(ButtonVariant::Outline, ButtonSize::Lg, "")
                                x-show="text.trim() || hasFile || hasResult"
                                hx-post=clear_url
                                hx-target="#workspace"
                                hx-swap="outerHTML"
                            >
                                "Clear"
                            </button>
                        </div>
                    </form>
                </CardContent>
            </Card>

            <div id="loading" class="htmx-indicator flex items-center justify-center gap-3 py-8 text-textMuted">
                <LoaderIcon class="h-6 w-6 text-primary" />
                <span>"Processing transcript..."</span>
            </div>

            <div id="results" class="space-y-8" aria-live="polite"></div>
        </div>
    }
}
