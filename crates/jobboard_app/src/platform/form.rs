//! Filter bar and job form handling: applying typed fields and the
//! client-side checks run before anything is sent.

use std::fmt;

use chrono::NaiveDate;
use jobboard_core::{FilterState, JobInput, JobTypeFilter, SortOrder};

use super::commands::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Merges `fields` into `filters`. Unlisted fields keep their value.
pub(crate) fn apply_filter_fields(
    mut filters: FilterState,
    fields: &[Field],
) -> Result<FilterState, String> {
    for (key, value) in fields {
        match key.as_str() {
            "q" | "query" => filters.query = value.clone(),
            "location" => filters.location = value.clone(),
            "tag" => filters.tag = value.clone(),
            "type" | "job_type" => {
                filters.job_type = if value.is_empty() {
                    JobTypeFilter::All
                } else {
                    JobTypeFilter::parse(value).ok_or_else(|| {
                        format!(
                            "Unknown job type '{value}'. Choose one of: {}",
                            labels(JobTypeFilter::ALL.iter().map(|t| t.label()))
                        )
                    })?
                };
            }
            "sort" => {
                filters.sort = SortOrder::parse(value).ok_or_else(|| {
                    format!(
                        "Unknown sort '{value}'. Choose one of: {}",
                        labels(SortOrder::ALL.iter().map(|s| s.as_str()))
                    )
                })?;
            }
            other => return Err(format!("Unknown filter field '{other}'")),
        }
    }
    Ok(filters)
}

/// Merges `fields` into `input`. Empty values clear optional fields.
pub(crate) fn apply_job_fields(mut input: JobInput, fields: &[Field]) -> Result<JobInput, String> {
    for (key, value) in fields {
        match key.as_str() {
            "title" => input.title = value.clone(),
            "company" => input.company = value.clone(),
            "location" => input.location = value.clone(),
            "date" | "posting_date" => input.posting_date = optional(value),
            "type" | "job_type" => {
                input.job_type = if value.trim().is_empty() {
                    JobInput::DEFAULT_JOB_TYPE.to_string()
                } else {
                    value.clone()
                };
            }
            "tags" => input.tags = parse_tags(value),
            "url" | "source_url" => input.source_url = optional(value),
            other => return Err(format!("Unknown job field '{other}'")),
        }
    }
    Ok(input)
}

/// Comma-separated tag text to a list; blanks are dropped.
pub(crate) fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Checks required fields, the date format and the source URL scheme.
pub(crate) fn validate(input: &JobInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if input.title.trim().is_empty() {
        errors.push(FieldError {
            field: "title",
            message: "Title is required",
        });
    }
    if input.company.trim().is_empty() {
        errors.push(FieldError {
            field: "company",
            message: "Company is required",
        });
    }
    if input.location.trim().is_empty() {
        errors.push(FieldError {
            field: "location",
            message: "Location is required",
        });
    }
    if let Some(date) = &input.posting_date {
        if !is_iso_date(date) {
            errors.push(FieldError {
                field: "date",
                message: "Use YYYY-MM-DD",
            });
        }
    }
    if let Some(source_url) = &input.source_url {
        if !is_http_url(source_url) {
            errors.push(FieldError {
                field: "url",
                message: "Must start with http(s)://",
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn is_iso_date(value: &str) -> bool {
    let shape_ok = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    shape_ok && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn is_http_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://"))
        && url::Url::parse(value).is_ok()
}

fn labels<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(key: &str, value: &str) -> Field {
        (key.to_string(), value.to_string())
    }

    fn valid_input() -> JobInput {
        JobInput {
            title: "Pricing Actuary".to_string(),
            company: "Aviva".to_string(),
            location: "London".to_string(),
            ..JobInput::default()
        }
    }

    #[test]
    fn filter_fields_merge_into_current_filters() {
        let current = FilterState {
            location: "London".to_string(),
            ..FilterState::default()
        };
        let next = apply_filter_fields(
            current,
            &[field("q", "actuary"), field("type", "part-time"), field("sort", "title")],
        )
        .unwrap();

        assert_eq!(next.query, "actuary");
        assert_eq!(next.location, "London");
        assert_eq!(next.job_type, JobTypeFilter::PartTime);
        assert_eq!(next.sort, SortOrder::TitleAsc);
    }

    #[test]
    fn filter_type_can_be_cleared() {
        let current = FilterState {
            job_type: JobTypeFilter::Remote,
            ..FilterState::default()
        };
        let next = apply_filter_fields(current, &[field("type", "")]).unwrap();
        assert_eq!(next.job_type, JobTypeFilter::All);
    }

    #[test]
    fn filter_rejects_unknown_values() {
        assert!(apply_filter_fields(FilterState::default(), &[field("type", "Contract")]).is_err());
        assert!(apply_filter_fields(FilterState::default(), &[field("sort", "salary")]).is_err());
        assert!(apply_filter_fields(FilterState::default(), &[field("salary", "1")]).is_err());
    }

    #[test]
    fn job_fields_parse_tags_and_optionals() {
        let input = apply_job_fields(
            valid_input(),
            &[
                field("tags", " Life, ,Pricing ,"),
                field("date", "2025-10-02"),
                field("url", "  "),
                field("type", "Contract"),
            ],
        )
        .unwrap();

        assert_eq!(input.tags, vec!["Life".to_string(), "Pricing".to_string()]);
        assert_eq!(input.posting_date.as_deref(), Some("2025-10-02"));
        assert_eq!(input.source_url, None);
        assert_eq!(input.job_type, "Contract");
        assert_eq!(validate(&input), Ok(()));
    }

    #[test]
    fn validation_reports_every_problem() {
        let input = JobInput {
            title: "  ".to_string(),
            posting_date: Some("2025-13-01".to_string()),
            source_url: Some("ftp://example.com".to_string()),
            ..JobInput::default()
        };
        let fields: Vec<_> = validate(&input)
            .unwrap_err()
            .into_iter()
            .map(|err| err.field)
            .collect();
        assert_eq!(fields, vec!["title", "company", "location", "date", "url"]);
    }

    #[test]
    fn date_must_be_zero_padded() {
        let input = JobInput {
            posting_date: Some("2025-1-02".to_string()),
            ..valid_input()
        };
        assert!(validate(&input).is_err());
    }

    #[test]
    fn url_scheme_is_case_insensitive() {
        let input = JobInput {
            source_url: Some("HTTPS://example.com/jobs/1".to_string()),
            ..valid_input()
        };
        assert_eq!(validate(&input), Ok(()));
    }
}
