//! Job board core: pure state machine for filters, pagination, list
//! synchronization and edit sessions.
mod effect;
mod error;
mod filters;
mod job;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{ErrorKind, GatewayFailure};
pub use filters::{total_pages, FilterState, JobTypeFilter, PageSize, PaginationState, SortOrder};
pub use job::{Job, JobId, JobInput};
pub use msg::Msg;
pub use query::{build, QueryDescriptor};
pub use state::{AppState, EditSession, JobPage, ListMeta, Notice, NoticeLevel, RequestSeq};
pub use update::update;
pub use view_model::AppViewModel;
