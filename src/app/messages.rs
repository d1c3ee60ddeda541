//! AppMessage enum for async communication within the application.

use super::SectionId;

/// Messages posted back to the UI loop by background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A section's simulated fetch reached its deadline.
    LoadingFinished { section: SectionId, ticket: u64 },
}
