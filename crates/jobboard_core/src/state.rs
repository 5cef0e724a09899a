use jobboard_logging::{board_debug, board_warn};

use crate::view_model::AppViewModel;
use crate::{
    build, total_pages, FilterState, GatewayFailure, Job, JobId, PageSize, PaginationState,
    QueryDescriptor,
};

/// Sequence number attached to each list request.
pub type RequestSeq = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListMeta {
    pub total: u64,
}

/// One page of results as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    /// The form creates new jobs.
    #[default]
    Idle,
    /// The form edits this snapshot.
    Editing(Job),
}

impl EditSession {
    pub fn editing_id(&self) -> Option<JobId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(job) => Some(job.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Failure,
}

/// One-shot message reporting the outcome of a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub(crate) fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub(crate) fn failure(prefix: &str, failure: &GatewayFailure) -> Self {
        Self {
            level: NoticeLevel::Failure,
            text: format!("{prefix}: {failure}"),
        }
    }
}

/// All client state: filter bar, pager, job list, edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    filters: FilterState,
    pagination: PaginationState,
    jobs: Vec<Job>,
    meta: ListMeta,
    in_flight: usize,
    last_error: Option<GatewayFailure>,
    edit: EditSession,
    next_seq: RequestSeq,
    last_applied_seq: RequestSeq,
    notices: Vec<Notice>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_page_size(PageSize::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: PageSize) -> Self {
        let mut pagination = PaginationState::default();
        pagination.set_page_size(page_size);
        Self {
            filters: FilterState::default(),
            pagination,
            jobs: Vec::new(),
            meta: ListMeta::default(),
            in_flight: 0,
            last_error: None,
            edit: EditSession::Idle,
            next_seq: 1,
            last_applied_seq: 0,
            notices: Vec::new(),
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let total_pages = total_pages(self.meta.total, self.pagination.page_size());
        let page = self.pagination.page();
        AppViewModel {
            filters: self.filters.clone(),
            jobs: self.jobs.clone(),
            total: self.meta.total,
            page,
            page_size: self.pagination.page_size().get(),
            total_pages,
            can_prev: page > 1,
            can_next: u64::from(page) < total_pages,
            loading: self.loading(),
            error: self.last_error.as_ref().map(ToString::to_string),
            editing: self.edit.editing_id(),
            dirty: self.dirty,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn meta(&self) -> ListMeta {
        self.meta
    }

    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn last_error(&self) -> Option<&GatewayFailure> {
        self.last_error.as_ref()
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    /// Descriptor for the current filters and page.
    pub fn query(&self) -> QueryDescriptor {
        build(&self.filters, self.pagination)
    }

    /// Returns whether the state changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Drains write notices in the order they were produced.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.pagination.set_page(1);
        self.mark_dirty();
    }

    /// Returns false when `page` is already current.
    pub(crate) fn set_page(&mut self, page: u32) -> bool {
        if self.pagination.page() == page {
            return false;
        }
        self.pagination.set_page(page);
        self.mark_dirty();
        true
    }

    /// Returns false when `page_size` is already current.
    pub(crate) fn set_page_size(&mut self, page_size: PageSize) -> bool {
        if self.pagination.page_size() == page_size {
            return false;
        }
        self.pagination.set_page_size(page_size);
        self.mark_dirty();
        true
    }

    /// Opens a list request and returns its sequence number.
    pub(crate) fn begin_refresh(&mut self) -> RequestSeq {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;
        self.last_error = None;
        self.mark_dirty();
        seq
    }

    pub(crate) fn begin_write(&mut self) {
        self.in_flight += 1;
        self.mark_dirty();
    }

    fn finish_request(&mut self) {
        if self.in_flight == 0 {
            board_warn!("Completion received with no request in flight");
        }
        self.in_flight = self.in_flight.saturating_sub(1);
        self.mark_dirty();
    }

    pub(crate) fn apply_jobs_loaded(
        &mut self,
        seq: RequestSeq,
        result: Result<crate::JobPage, GatewayFailure>,
    ) {
        self.finish_request();
        if seq < self.last_applied_seq {
            board_debug!(
                "Discarding stale list response seq={} (last applied {})",
                seq,
                self.last_applied_seq
            );
            return;
        }
        self.last_applied_seq = seq;
        match result {
            Ok(page) => {
                self.jobs = page.jobs;
                self.meta = ListMeta { total: page.total };
                self.last_error = None;
            }
            Err(failure) => {
                board_warn!("List request seq={} failed: {}", seq, failure);
                self.last_error = Some(failure);
            }
        }
    }

    pub(crate) fn apply_created(&mut self, result: Result<Job, GatewayFailure>) {
        self.finish_request();
        match result {
            Ok(job) => {
                self.jobs.insert(0, job);
                self.notices.push(Notice::success("Job added successfully."));
            }
            Err(failure) => {
                board_warn!("Create failed: {}", failure);
                self.notices
                    .push(Notice::failure("Failed to add job", &failure));
            }
        }
    }

    /// Returns whether the update was applied.
    pub(crate) fn apply_updated(&mut self, id: JobId, result: Result<Job, GatewayFailure>) -> bool {
        self.finish_request();
        match result {
            Ok(job) => {
                if let Some(slot) = self.jobs.iter_mut().find(|existing| existing.id == id) {
                    *slot = job;
                } else {
                    board_debug!("Updated job {} is not on the current page", id);
                }
                self.notices.push(Notice::success("Job updated."));
                true
            }
            Err(failure) => {
                board_warn!("Update of job {} failed: {}", id, failure);
                self.notices.push(Notice::failure("Update failed", &failure));
                false
            }
        }
    }

    pub(crate) fn apply_deleted(&mut self, id: JobId, result: Result<(), GatewayFailure>) {
        self.finish_request();
        match result {
            Ok(()) => {
                self.jobs.retain(|job| job.id != id);
                self.notices.push(Notice::success("Job deleted."));
            }
            Err(failure) => {
                board_warn!("Delete of job {} failed: {}", id, failure);
                self.notices.push(Notice::failure("Delete failed", &failure));
            }
        }
    }

    pub(crate) fn start_edit(&mut self, job: Job) {
        self.edit = EditSession::Editing(job);
        self.mark_dirty();
    }

    pub(crate) fn end_edit(&mut self) {
        if self.edit != EditSession::Idle {
            self.edit = EditSession::Idle;
            self.mark_dirty();
        }
    }
}
