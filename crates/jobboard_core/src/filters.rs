use std::fmt;

/// Job type constraint selected in the filter bar. `All` is the sentinel for
/// "no constraint" and is never sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobTypeFilter {
    #[default]
    All,
    FullTime,
    PartTime,
    Remote,
    Internship,
}

impl JobTypeFilter {
    pub const ALL: [JobTypeFilter; 5] = [
        JobTypeFilter::All,
        JobTypeFilter::FullTime,
        JobTypeFilter::PartTime,
        JobTypeFilter::Remote,
        JobTypeFilter::Internship,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JobTypeFilter::All => "All",
            JobTypeFilter::FullTime => "Full-time",
            JobTypeFilter::PartTime => "Part-time",
            JobTypeFilter::Remote => "Remote",
            JobTypeFilter::Internship => "Internship",
        }
    }

    /// Value transmitted as `job_type`, or `None` for the sentinel.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            JobTypeFilter::All => None,
            other => Some(other.label()),
        }
    }

    /// Accepts the label (`Full-time`) or a compact form (`fulltime`,
    /// `full_time`), case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.label().replace('-', "").eq_ignore_ascii_case(&key))
    }
}

impl fmt::Display for JobTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    PostingDateDesc,
    PostingDateAsc,
    TitleAsc,
    CompanyAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::PostingDateDesc,
        SortOrder::PostingDateAsc,
        SortOrder::TitleAsc,
        SortOrder::CompanyAsc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::PostingDateDesc => "posting_date_desc",
            SortOrder::PostingDateAsc => "posting_date_asc",
            SortOrder::TitleAsc => "title_asc",
            SortOrder::CompanyAsc => "company_asc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::PostingDateDesc => "Newest first",
            SortOrder::PostingDateAsc => "Oldest first",
            SortOrder::TitleAsc => "Title A-Z",
            SortOrder::CompanyAsc => "Company A-Z",
        }
    }

    /// Accepts the wire value (`title_asc`) or a short alias
    /// (`newest`, `oldest`, `title`, `company`).
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_ascii_lowercase();
        match key.as_str() {
            "newest" => return Some(SortOrder::PostingDateDesc),
            "oldest" => return Some(SortOrder::PostingDateAsc),
            "title" => return Some(SortOrder::TitleAsc),
            "company" => return Some(SortOrder::CompanyAsc),
            _ => {}
        }
        Self::ALL.into_iter().find(|order| order.as_str() == key)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-editable filter bar contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub job_type: JobTypeFilter,
    pub location: String,
    pub tag: String,
    pub sort: SortOrder,
}

/// Page size restricted to the values offered by the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    pub const ALLOWED: [u32; 4] = [10, 20, 30, 50];

    pub fn new(size: u32) -> Option<Self> {
        Self::ALLOWED.contains(&size).then_some(Self(size))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page: u32,
    page_size: PageSize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl PaginationState {
    /// Returns `None` when `page` is zero.
    pub fn new(page: u32, page_size: PageSize) -> Option<Self> {
        (page >= 1).then_some(Self { page, page_size })
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn page_size(self) -> PageSize {
        self.page_size
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        debug_assert!(page >= 1);
        self.page = page;
    }

    pub(crate) fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: u64, page_size: PageSize) -> u64 {
    total.div_ceil(u64::from(page_size.get())).max(1)
}
