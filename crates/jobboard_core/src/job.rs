/// Server-assigned job identifier.
pub type JobId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    /// ISO `YYYY-MM-DD` as sent by the server.
    pub posting_date: Option<String>,
    pub job_type: Option<String>,
    pub tags: Vec<String>,
    pub source_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Payload for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInput {
    pub title: String,
    pub company: String,
    pub location: String,
    pub posting_date: Option<String>,
    pub job_type: String,
    pub tags: Vec<String>,
    pub source_url: Option<String>,
}

impl JobInput {
    pub const DEFAULT_JOB_TYPE: &'static str = "Full-time";

    /// Prefills an edit form from a job snapshot.
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            posting_date: job.posting_date.clone(),
            job_type: job
                .job_type
                .clone()
                .unwrap_or_else(|| Self::DEFAULT_JOB_TYPE.to_string()),
            tags: job.tags.clone(),
            source_url: job.source_url.clone(),
        }
    }
}

impl Default for JobInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            posting_date: None,
            job_type: Self::DEFAULT_JOB_TYPE.to_string(),
            tags: Vec::new(),
            source_url: None,
        }
    }
}
