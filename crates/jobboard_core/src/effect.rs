use crate::{JobId, JobInput, QueryDescriptor, RequestSeq};

/// Gateway work requested by `update`. Every effect is answered by exactly
/// one completion message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Answered by `Msg::JobsLoaded` carrying the same `seq`.
    FetchJobs { seq: RequestSeq, query: QueryDescriptor },
    /// Answered by `Msg::JobCreated`.
    CreateJob { input: JobInput },
    /// Answered by `Msg::JobUpdated`.
    UpdateJob { id: JobId, input: JobInput },
    /// Answered by `Msg::JobDeleted`.
    DeleteJob { id: JobId },
}
