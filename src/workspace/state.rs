//! Workspace state and storage.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::analysis::{AnalysisResult, TranscriptSubmission};
use crate::upload::TranscriptFile;

/// Errors from workspace operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkspaceError {
    /// A submission is already in flight.
    #[error("Workspace {0} is already processing a transcript")]
    Busy(String),

    /// No workspace with this id.
    #[error("Workspace {0} not found")]
    NotFound(String),
}

/// Point-in-time copy of a workspace's state.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceSnapshot {
    /// Text of the last submission.
    pub text: String,
    /// File currently selected or last submitted.
    pub file: Option<TranscriptFile>,
    /// Whether a submission is in flight.
    pub loading: bool,
    /// Result of the last successful submission.
    pub result: Option<Arc<AnalysisResult>>,
}

/// State behind a single page.
///
/// Cloning is cheap; clones share the same state.
#[derive(Debug, Clone)]
pub struct Workspace {
    inner: Arc<WorkspaceInner>,
}

#[derive(Debug)]
struct WorkspaceInner {
    id: String,
    state: RwLock<WorkspaceSnapshot>,
    last_activity: RwLock<DateTime<Utc>>,
}

impl Workspace {
    fn new(id: String) -> Self {
        Self {
            inner: Arc::new(WorkspaceInner {
                id,
                state: RwLock::new(WorkspaceSnapshot::default()),
                last_activity: RwLock::new(Utc::now()),
            }),
        }
    }

    /// Get the workspace ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        self.read(Clone::clone)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read(|s| s.loading)
    }

    /// Result of the last successful submission, if any.
    #[must_use]
    pub fn result(&self) -> Option<Arc<AnalysisResult>> {
        self.read(|s| s.result.clone())
    }

    /// Record the file picked in the drop zone (or clear it with `None`).
    pub fn select_file(&self, file: Option<TranscriptFile>) {
        self.write(|s| s.file = file);
    }

    /// Mark a submission as in flight.
    ///
    /// Stores the submitted text and file and drops the previous result. The
    /// returned guard clears the loading flag when dropped, whether or not a
    /// result was recorded.
    pub fn begin_submission(
        &self,
        submission: &TranscriptSubmission,
    ) -> Result<SubmissionGuard, WorkspaceError> {
        self.write(|s| {
            if s.loading {
                return Err(WorkspaceError::Busy(self.id().to_string()));
            }
            s.loading = true;
            s.text.clone_from(&submission.text);
            s.file.clone_from(&submission.file);
            s.result = None;
            Ok(())
        })?;

        Ok(SubmissionGuard {
            workspace: self.clone(),
        })
    }

    /// Reset text, file, and result together.
    pub fn clear(&self) -> Result<(), WorkspaceError> {
        self.write(|s| {
            if s.loading {
                return Err(WorkspaceError::Busy(self.id().to_string()));
            }
            *s = WorkspaceSnapshot::default();
            Ok(())
        })
    }

    /// Check if the workspace has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self
            .inner
            .last_activity
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match (Utc::now() - last).to_std() {
            Ok(idle) => idle > timeout,
            // Clock skew: "last" is in the future.
            Err(_) => false,
        }
    }

    fn read<T>(&self, f: impl FnOnce(&WorkspaceSnapshot) -> T) -> T {
        let guard = self
            .inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut WorkspaceSnapshot) -> T) -> T {
        let out = {
            let mut guard = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            f(&mut guard)
        };
        self.touch();
        out
    }

    fn touch(&self) {
        let mut guard = self
            .inner
            .last_activity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Utc::now();
    }
}

/// Loading flag for one in-flight submission.
#[derive(Debug)]
pub struct SubmissionGuard {
    workspace: Workspace,
}

impl SubmissionGuard {
    /// Store the result; the loading flag clears as the guard is consumed.
    pub fn complete(self, result: AnalysisResult) -> Arc<AnalysisResult> {
        let result = Arc::new(result);
        self.workspace
            .write(|s| s.result = Some(Arc::clone(&result)));
        result
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.workspace.write(|s| s.loading = false);
    }
}

/// Thread-safe store for workspaces.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceStore {
    inner: Arc<RwLock<HashMap<String, Workspace>>>,
}

impl WorkspaceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace with a fresh UUID.
    #[must_use]
    pub fn create(&self) -> Workspace {
        let workspace = Workspace::new(Uuid::new_v4().to_string());
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(workspace.id().to_string(), workspace.clone());
        workspace
    }

    /// Get a workspace by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Workspace> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Get a workspace by ID or fail with [`WorkspaceError::NotFound`].
    pub fn require(&self, id: &str) -> Result<Workspace, WorkspaceError> {
        self.get(id)
            .ok_or_else(|| WorkspaceError::NotFound(id.to_string()))
    }

    /// Remove a workspace by ID.
    pub fn remove(&self, id: &str) -> Option<Workspace> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Number of live workspaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove workspaces idle longer than `timeout`.
    ///
    /// Workspaces with a submission in flight are kept. Returns the number
    /// removed.
    pub fn cleanup_expired(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|_, ws| ws.is_loading() || !ws.is_expired_with_timeout(timeout));
        before - guard.len()
    }
}
