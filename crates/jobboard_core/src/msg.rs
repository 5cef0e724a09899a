#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Reload the current query (start-up, manual refresh).
    RefreshRequested,
    /// User applied the filter bar; always resets to page 1.
    FiltersApplied(crate::FilterState),
    /// User clicked Reset on the filter bar.
    FiltersReset,
    /// User navigated to a page. Clamping is the caller's job.
    PageRequested(u32),
    /// User picked a new page size; resets to page 1.
    PageSizeChanged(crate::PageSize),
    /// Gateway answer for a list request.
    JobsLoaded {
        seq: crate::RequestSeq,
        result: Result<crate::JobPage, crate::GatewayFailure>,
    },
    /// User opened a job in the form.
    EditStarted(crate::Job),
    /// User left edit mode without saving.
    EditCancelled,
    /// User submitted the form: create in idle mode, update while editing.
    FormSubmitted(crate::JobInput),
    /// User confirmed deletion of a job.
    DeleteConfirmed(crate::JobId),
    /// Gateway answer for a create request.
    JobCreated {
        result: Result<crate::Job, crate::GatewayFailure>,
    },
    /// Gateway answer for an update request.
    JobUpdated {
        id: crate::JobId,
        result: Result<crate::Job, crate::GatewayFailure>,
    },
    /// Gateway answer for a delete request.
    JobDeleted {
        id: crate::JobId,
        result: Result<(), crate::GatewayFailure>,
    },
}
