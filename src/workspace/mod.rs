//! Per-page UI state.
//!
//! Every rendered page owns one workspace: the text last submitted, the file
//! currently selected, the loading flag, and the last analysis result. They
//! live together so that clearing the page resets all of them at once.
//!
//! # Architecture
//!
//! - [`Workspace`]: state behind one page
//! - [`SubmissionGuard`]: holds the loading flag for one in-flight request
//! - [`WorkspaceStore`]: thread-safe store for all live workspaces
//!
//! # Example
//!
//! ```rust
//! use incident_console::analysis::TranscriptSubmission;
//! use incident_console::workspace::WorkspaceStore;
//!
//! let store = WorkspaceStore::new();
//! let workspace = store.create();
//!
//! let guard = workspace
//!     .begin_submission(&TranscriptSubmission::new("Resident fell", None))
//!     .unwrap();
//! assert!(workspace.is_loading());
//! drop(guard);
//! assert!(!workspace.is_loading());
//! ```

mod state;

pub use state::{SubmissionGuard, Workspace, WorkspaceError, WorkspaceSnapshot, WorkspaceStore};
