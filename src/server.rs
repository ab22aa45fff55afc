use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{debug, error, info, warn};

use crate::AppState;
use crate::analysis::{AnalysisClient, TranscriptAnalyzer, TranscriptSubmission};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::ui;
use crate::workspace::{WorkspaceError, WorkspaceStore};

/// Room for the text field and multipart framing on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 256 * 1024;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let client = AnalysisClient::from_config(&config.analysis)?;
    info!(
        name: "analysis.config.loaded",
        base_url = %client.base_url(),
        transcript_path = %config.analysis.transcript_path,
        timeout_secs = config.analysis.timeout_secs,
        "Analysis service configured"
    );

    let analyzer: Arc<dyn TranscriptAnalyzer> = Arc::new(client);
    tokio::spawn(probe_health(Arc::clone(&analyzer)));

    let state = AppState::new(Arc::clone(&config), analyzer);
    tokio::spawn(cleanup_workspaces(
        state.workspaces.clone(),
        config.workspace.idle_timeout(),
        config.workspace.cleanup_interval(),
    ));

    let app = build_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router with all layers applied.
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let timeout_duration = config.server.request_timeout();
    let body_limit = state.upload_policy.max_bytes() + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(index_handler))
        .route("/transcript", post(transcript_handler))
        .route("/upload/check", post(upload_check_handler))
        .route("/workspaces/{id}/emails/{index}", get(emails_handler))
        .route("/workspaces/{id}/clear", post(clear_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
        // A disabled timeout is a very large one, which keeps the layer types fixed.
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ))
        .with_state(state)
}

/// Log the analysis service's health once at startup. The server runs either way.
async fn probe_health(analyzer: Arc<dyn TranscriptAnalyzer>) {
    match analyzer.health().await {
        Ok(health) if health.is_healthy() => {
            info!(name: "analysis.health.ok", status = %health.status, "Analysis service is healthy");
        }
        Ok(health) => {
            warn!(name: "analysis.health.degraded", status = %health.status, "Analysis service reports a degraded status");
        }
        Err(e) => {
            warn!(name: "analysis.health.unreachable", error = %e, "Analysis service is unreachable");
        }
    }
}

/// Periodically drop idle workspaces.
async fn cleanup_workspaces(store: WorkspaceStore, idle_timeout: Duration, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    loop {
        ticker.tick().await;
        let removed = store.cleanup_expired(idle_timeout);
        if removed > 0 {
            debug!(
                name: "workspace.cleanup",
                removed,
                remaining = store.len(),
                "Expired workspaces removed"
            );
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Form parsing
// ─────────────────────────────────────────────────────────────────────────────

/// File part exactly as the browser sent it.
#[derive(Debug)]
struct RawFile {
    name: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// Fields posted by the workspace form and the file input.
#[derive(Debug, Default)]
struct TranscriptForm {
    workspace_id: Option<String>,
    text: String,
    file: Option<RawFile>,
}

impl TranscriptForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(ToString::to_string);
            match field_name.as_deref() {
                Some("workspace_id") => form.workspace_id = Some(field.text().await?),
                Some("text") => form.text = field.text().await?,
                // Only the first file counts.
                Some("file") if form.file.is_none() => {
                    let name = field.file_name().unwrap_or_default().to_string();
                    let content_type = field.content_type().map(ToString::to_string);
                    let bytes = field.bytes().await?;
                    // An empty file input still posts a nameless, empty part.
                    if !(name.is_empty() && bytes.is_empty()) {
                        form.file = Some(RawFile {
                            name,
                            content_type,
                            bytes,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    fn workspace_id(&self) -> Result<&str, AppError> {
        self.workspace_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(AppError::MissingField("workspace_id"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Full page with a fresh workspace.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let workspace = state.workspaces.create();
    debug!(workspace_id = %workspace.id(), "Workspace created");
    Html(ui::render_page(workspace.id()))
}

/// POST /transcript - Submit a transcript and render the results region.
async fn transcript_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = TranscriptForm::read(multipart).await?;
    let workspace_id = form.workspace_id()?.to_string();

    let Some(workspace) = state.workspaces.get(&workspace_id) else {
        return Ok(Html(ui::render_notice(
            "This page has expired. Reload it to start again.",
        ))
        .into_response());
    };

    let file = match form.file {
        Some(raw) => match state.upload_policy.validate(
            &raw.name,
            raw.content_type.as_deref(),
            raw.bytes,
        ) {
            Ok(file) => Some(file),
            Err(e) => {
                debug!(workspace_id = %workspace.id(), error = %e, "Submitted file rejected");
                return Ok(Html(ui::render_notice(e.to_string())).into_response());
            }
        },
        None => None,
    };

    let submission = TranscriptSubmission::new(form.text, file);
    if submission.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let guard = workspace.begin_submission(&submission)?;

    info!(
        name: "transcript.submitted",
        workspace_id = %workspace.id(),
        text_length = submission.text.len(),
        file = ?submission.file.as_ref().map(|f| &f.name),
        "Transcript submitted"
    );

    match state.analyzer.analyze(&submission).await {
        Ok(result) => {
            let result = guard.complete(result);
            Ok(Html(ui::render_results(workspace.id(), &result)).into_response())
        }
        Err(e) => {
            // Dropping the guard ends loading; the results region stays empty.
            drop(guard);
            error!(
                name: "transcript.failed",
                workspace_id = %workspace.id(),
                error = %e,
                "Transcript processing failed"
            );
            Ok(Html(String::new()).into_response())
        }
    }
}

/// POST /upload/check - Validate a picked file and report it under the drop zone.
async fn upload_check_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let form = TranscriptForm::read(multipart).await?;
    let workspace_id = form.workspace_id()?.to_string();
    let workspace = state.workspaces.get(&workspace_id);

    let Some(raw) = form.file else {
        if let Some(ws) = &workspace {
            ws.select_file(None);
        }
        return Ok(Html(String::new()));
    };

    let outcome = state
        .upload_policy
        .validate(&raw.name, raw.content_type.as_deref(), raw.bytes);

    if let Some(ws) = &workspace {
        ws.select_file(outcome.as_ref().ok().cloned());
    }
    if let Err(e) = &outcome {
        debug!(workspace_id = %workspace_id, file = %raw.name, error = %e, "File rejected");
    }

    Ok(Html(ui::render_file_status(
        &workspace_id,
        outcome.map_err(|e| e.to_string()),
    )))
}

/// GET /workspaces/:id/emails/:index - Email card at the given position.
async fn emails_handler(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Response, AppError> {
    let workspace = state.workspaces.require(&id)?;
    let Some(result) = workspace.result() else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };
    Ok(Html(ui::render_emails(workspace.id(), &result, index)).into_response())
}

/// POST /workspaces/:id/clear - Reset the workspace and render a fresh panel.
async fn clear_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let workspace = match state.workspaces.require(&id) {
        Ok(ws) => {
            ws.clear()?;
            ws
        }
        // Expired while the page sat open; hand out a new one.
        Err(WorkspaceError::NotFound(_)) => state.workspaces.create(),
        Err(e) => return Err(e.into()),
    };
    debug!(workspace_id = %workspace.id(), "Workspace cleared");
    Ok(Html(ui::render_workspace(workspace.id())))
}

/// GET /health - Liveness probe.
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}
