//! JSON shapes of the `/jobs` REST API.

use jobboard_core::{Job, JobId, JobInput, JobPage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct JobRecord {
    id: JobId,
    title: String,
    company: String,
    location: String,
    #[serde(default)]
    posting_date: Option<String>,
    #[serde(default)]
    job_type: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<JobRecord> for Job {
    fn from(record: JobRecord) -> Self {
        Job {
            id: record.id,
            title: record.title,
            company: record.company,
            location: record.location,
            posting_date: non_empty(record.posting_date),
            job_type: record.job_type,
            tags: record.tags,
            source_url: non_empty(record.source_url),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Cleared optionals come back as `""`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    #[serde(default)]
    jobs: Vec<JobRecord>,
    #[serde(default)]
    total: u64,
}

impl From<ListResponse> for JobPage {
    fn from(response: ListResponse) -> Self {
        JobPage {
            jobs: response.jobs.into_iter().map(Job::from).collect(),
            total: response.total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobEnvelope {
    pub(crate) job: JobRecord,
}

/// Request body for create and update. The API only touches keys that are
/// present, so absent optionals go out as `""` to clear them.
#[derive(Debug, Serialize)]
pub(crate) struct JobPayload<'a> {
    title: &'a str,
    company: &'a str,
    location: &'a str,
    posting_date: &'a str,
    job_type: &'a str,
    tags: &'a [String],
    source_url: &'a str,
}

impl<'a> From<&'a JobInput> for JobPayload<'a> {
    fn from(input: &'a JobInput) -> Self {
        Self {
            title: &input.title,
            company: &input.company,
            location: &input.location,
            posting_date: input.posting_date.as_deref().unwrap_or_default(),
            job_type: &input.job_type,
            tags: &input.tags,
            source_url: input.source_url.as_deref().unwrap_or_default(),
        }
    }
}

/// Error body; Flask-style APIs use `error` or `description`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.error
            .or(self.description)
            .filter(|message| !message.trim().is_empty())
    }
}
