use crate::{FilterState, PaginationState, SortOrder};

/// Canonical, transmittable form of the current filter and pagination
/// intent. Equal descriptors produce identical list requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub q: Option<String>,
    pub job_type: Option<&'static str>,
    pub location: Option<String>,
    pub tag: Option<String>,
    pub sort: SortOrder,
    pub page: u32,
    pub page_size: u32,
}

impl QueryDescriptor {
    /// Query parameters in their fixed transmission order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(7);
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(job_type) = self.job_type {
            pairs.push(("job_type", job_type.to_string()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("page_size", self.page_size.to_string()));
        pairs
    }
}

/// Builds the descriptor for a list request. Empty strings and the `All`
/// job type are dropped; other values are passed through untouched.
pub fn build(filters: &FilterState, pagination: PaginationState) -> QueryDescriptor {
    QueryDescriptor {
        q: non_empty(&filters.query),
        job_type: filters.job_type.query_value(),
        location: non_empty(&filters.location),
        tag: non_empty(&filters.tag),
        sort: filters.sort,
        page: pagination.page(),
        page_size: pagination.page_size().get(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
