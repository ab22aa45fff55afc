//! Client for the remote transcript analysis service.
//!
//! The service accepts a transcript (free text, an uploaded file, or both) and
//! returns an incident report, draft notification emails, the policy excerpts
//! it relied on, and its reasoning.
//!
//! # Architecture
//!
//! - [`TranscriptAnalyzer`]: the seam handlers call through
//! - [`AnalysisClient`]: `reqwest` implementation against the HTTP API
//! - [`types`]: wire types owned by the service

mod client;
mod error;
pub mod types;

use async_trait::async_trait;

pub use client::{AnalysisClient, DEFAULT_HEALTH_PATH, DEFAULT_TRANSCRIPT_PATH};
pub use error::AnalysisError;
pub use types::{AnalysisResult, Email, IncidentReport, ServiceHealth, TranscriptSubmission};

/// Something that can turn a transcript into an analysis.
#[async_trait]
pub trait TranscriptAnalyzer: Send + Sync + std::fmt::Debug {
    /// Submit a transcript and wait for the full analysis.
    async fn analyze(
        &self,
        submission: &TranscriptSubmission,
    ) -> Result<AnalysisResult, AnalysisError>;

    /// Probe the service's health endpoint.
    async fn health(&self) -> Result<ServiceHealth, AnalysisError>;
}
