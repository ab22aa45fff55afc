//! Drag-and-drop transcript file picker.

use leptos::prelude::*;

use crate::ui::components::UploadIcon;
use crate::upload::TranscriptFile;

/// Accepted by the file input; the server re-checks every upload.
const ACCEPT: &str = ".txt,.md,text/plain,text/markdown";

/// Drop zone wrapping a transparent file input.
///
/// Picking a file posts it to `/upload/check`, which answers with a
/// [`FileStatus`] for `#file-status`. With `oob` set the zone is rendered as an
/// out-of-band swap that replaces the live one, which is how a rejected file
/// gets cleared from the input.
#[component]
pub fn FileDrop(
    /// Workspace the selection belongs to.
    workspace_id: String,
    /// Render with `hx-swap-oob`.
    #[prop(default = false)]
    oob: bool,
) -> impl IntoView {
    view! {
        <div
            id="file-drop"
            hx-swap-oob=oob.then_some("true")
            x-init=oob.then_some("hasFile = false")
            class="relative border-2 border-dashed border-panelBorder rounded-xl p-8 text-center transition-colors hover:border-primary hover:bg-primary/5"
        >
            <input
                type="file"
                name="file"
                accept=ACCEPT
                class="absolute inset-0 w-full h-full opacity-0 cursor-pointer"
                hx-post="/upload/check"
                hx-trigger="change"
                hx-target="#file-status"
                hx-encoding="multipart/form-data"
                hx-vals=format!(r#"{{"workspace_id": "{workspace_id}"}}"#)
                x-on:change="hasFile = $el.files.length > 0"
            />
            <div class="flex flex-col items-center gap-2 pointer-events-none">
                <UploadIcon class="h-8 w-8 text-textMuted" />
                <p class="text-textPrimary font-medium">"Drag & drop a .txt or .md file"</p>
                <p class="text-sm text-textMuted">"or click to browse"</p>
            </div>
        </div>
    }
}

/// Outcome of checking a picked file.
#[component]
pub fn FileStatus(
    /// Workspace the selection belongs to.
    workspace_id: String,
    /// Accepted file, or the reason it was rejected.
    outcome: Result<TranscriptFile, String>,
) -> impl IntoView {
    match outcome {
        Ok(file) => view! {
            <div class="text-sm text-textPrimary">
                <span class="font-semibold">"Selected: "</span>
                {file.name.clone()}
                <span class="block text-xs text-textMuted">{file.describe()}</span>
            </div>
        }
        .into_any(),
        Err(message) => view! {
            <div role="alert" class="text-sm text-danger">{message}</div>
            <FileDrop workspace_id=workspace_id oob=true />
        }
        .into_any(),
    }
}
