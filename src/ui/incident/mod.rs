//! Incident analysis layout components.

mod emails;
mod file_drop;
mod policies;
mod reasoning;
mod report;
mod results;
mod workspace;

pub use emails::EmailCarousel;
pub use file_drop::{FileDrop, FileStatus};
pub use policies::PoliciesCard;
pub use reasoning::ReasoningCard;
pub use report::IncidentReportCard;
pub use results::{Notice, ResultsPanel};
pub use workspace::WorkspacePanel;
