//! Incident Response Console
//!
//! A single-page web client for an incident transcript analysis service. The
//! user submits a transcript (typed text or an uploaded `.txt`/`.md` file);
//! the server forwards it to the service and renders the incident report,
//! draft notification emails, referenced policies, and the model's reasoning.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server answering HTMX requests with HTML fragments
//! - **Analysis client**: `reqwest` multipart client for the remote service
//! - **Workspaces**: per-page state (text, file, loading flag, last result)
//! - **UI**: Leptos SSR + HTMX + Alpine.js
//!
//! # Modules
//!
//! - [`analysis`]: Service client, wire types, and the [`analysis::TranscriptAnalyzer`] seam
//! - [`workspace`]: Per-page state and its store
//! - [`upload`]: Transcript file validation
//! - [`pager`]: Email carousel position
//! - [`markdown`]: Markdown rendering for model-authored text
//! - [`ui`]: Leptos components and fragment renderers
//! - [`telemetry`]: Logging setup

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod markdown;
pub mod pager;
pub mod server;
pub mod telemetry;
pub mod ui;
pub mod upload;
pub mod workspace;

use std::sync::Arc;

use crate::analysis::TranscriptAnalyzer;
use crate::config::AppConfig;
use crate::upload::UploadPolicy;
use crate::workspace::WorkspaceStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Transcript analysis backend.
    pub analyzer: Arc<dyn TranscriptAnalyzer>,
    /// Live workspaces, one per open page.
    pub workspaces: WorkspaceStore,
    /// File acceptance rules.
    pub upload_policy: UploadPolicy,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AppConfig>, analyzer: Arc<dyn TranscriptAnalyzer>) -> Self {
        let upload_policy = UploadPolicy::new(config.upload.max_bytes);
        Self {
            config,
            analyzer,
            workspaces: WorkspaceStore::new(),
            upload_policy,
        }
    }
}
