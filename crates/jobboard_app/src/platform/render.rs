use std::fmt::Write as _;

use jobboard_core::{AppViewModel, FilterState, Job, JobTypeFilter, Notice, NoticeLevel};

pub(crate) fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", format_filters(&view.filters));
    if let Some(id) = view.editing {
        let _ = writeln!(out, "Editing job #{id} (save ... / cancel)");
    }
    if view.loading {
        let _ = writeln!(out, "Loading...");
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "Error: {error}");
    }

    if view.jobs.is_empty() {
        let _ = writeln!(out, "No jobs found.");
    } else {
        for job in &view.jobs {
            let _ = writeln!(out, "{}", format_job_row(job));
        }
    }

    let _ = write!(
        out,
        "{} Page {} of {} | Total {} | Size {} {}",
        if view.can_prev { "<" } else { " " },
        view.page,
        view.total_pages,
        view.total,
        view.page_size,
        if view.can_next { ">" } else { " " },
    );
    out
}

pub(crate) fn render_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => notice.text.clone(),
        NoticeLevel::Failure => format!("! {}", notice.text),
    }
}

fn format_filters(filters: &FilterState) -> String {
    let mut parts = Vec::new();
    if !filters.query.is_empty() {
        parts.push(format!("q=\"{}\"", filters.query));
    }
    if filters.job_type != JobTypeFilter::All {
        parts.push(format!("type={}", filters.job_type));
    }
    if !filters.location.is_empty() {
        parts.push(format!("location=\"{}\"", filters.location));
    }
    if !filters.tag.is_empty() {
        parts.push(format!("tag=\"{}\"", filters.tag));
    }
    parts.push(format!("sort={}", filters.sort.label()));
    format!("Filters: {}", parts.join(" "))
}

fn format_job_row(job: &Job) -> String {
    let mut row = format!(
        "[#{id}] {title} | {company} | {location} | {job_type}",
        id = job.id,
        title = job.title,
        company = job.company,
        location = job.location,
        job_type = job.job_type.as_deref().unwrap_or("N/A"),
    );
    if let Some(date) = &job.posting_date {
        let _ = write!(row, " | Posted: {date}");
    }
    if !job.tags.is_empty() {
        let _ = write!(row, " | {}", job.tags.join(", "));
    }
    if let Some(url) = &job.source_url {
        let _ = write!(row, " | {url}");
    }
    row
}
