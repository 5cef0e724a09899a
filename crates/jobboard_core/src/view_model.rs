use crate::{FilterState, Job, JobId};

/// Snapshot consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub filters: FilterState,
    pub jobs: Vec<Job>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub can_prev: bool,
    pub can_next: bool,
    pub loading: bool,
    /// Persistent notice for the last failed refresh.
    pub error: Option<String>,
    pub editing: Option<JobId>,
    pub dirty: bool,
}
