use jobboard_core::{
    build, FilterState, JobTypeFilter, PageSize, PaginationState, QueryDescriptor, SortOrder,
};
use pretty_assertions::assert_eq;

fn pagination(page: u32, size: u32) -> PaginationState {
    PaginationState::new(page, PageSize::new(size).unwrap()).unwrap()
}

#[test]
fn actuary_in_london_scenario() {
    let filters = FilterState {
        query: "actuary".to_string(),
        job_type: JobTypeFilter::All,
        location: "London".to_string(),
        tag: String::new(),
        sort: SortOrder::PostingDateDesc,
    };

    let descriptor = build(&filters, pagination(2, 20));

    assert_eq!(
        descriptor,
        QueryDescriptor {
            q: Some("actuary".to_string()),
            job_type: None,
            location: Some("London".to_string()),
            tag: None,
            sort: SortOrder::PostingDateDesc,
            page: 2,
            page_size: 20,
        }
    );
    assert_eq!(
        descriptor.to_query_pairs(),
        vec![
            ("q", "actuary".to_string()),
            ("location", "London".to_string()),
            ("sort", "posting_date_desc".to_string()),
            ("page", "2".to_string()),
            ("page_size", "20".to_string()),
        ]
    );
}

#[test]
fn all_job_type_is_never_transmitted() {
    for sort in SortOrder::ALL {
        for query in ["", "pricing", "  "] {
            let filters = FilterState {
                query: query.to_string(),
                job_type: JobTypeFilter::All,
                sort,
                ..FilterState::default()
            };
            let descriptor = build(&filters, PaginationState::default());
            assert_eq!(descriptor.job_type, None);
            assert!(descriptor
                .to_query_pairs()
                .iter()
                .all(|(key, _)| *key != "job_type"));
        }
    }
}

#[test]
fn concrete_job_types_use_their_labels() {
    let expected = [
        (JobTypeFilter::FullTime, "Full-time"),
        (JobTypeFilter::PartTime, "Part-time"),
        (JobTypeFilter::Remote, "Remote"),
        (JobTypeFilter::Internship, "Internship"),
    ];
    for (job_type, label) in expected {
        let filters = FilterState {
            job_type,
            ..FilterState::default()
        };
        let descriptor = build(&filters, PaginationState::default());
        assert_eq!(descriptor.job_type, Some(label));
    }
}

#[test]
fn defaults_send_only_sort_and_paging() {
    let descriptor = build(&FilterState::default(), PaginationState::default());
    assert_eq!(
        descriptor.to_query_pairs(),
        vec![
            ("sort", "posting_date_desc".to_string()),
            ("page", "1".to_string()),
            ("page_size", "10".to_string()),
        ]
    );
}

#[test]
fn whitespace_values_pass_through_untouched() {
    let filters = FilterState {
        query: "  ".to_string(),
        tag: " Life ".to_string(),
        sort: SortOrder::TitleAsc,
        ..FilterState::default()
    };
    let descriptor = build(&filters, pagination(1, 50));

    assert_eq!(descriptor.q.as_deref(), Some("  "));
    assert_eq!(descriptor.tag.as_deref(), Some(" Life "));
    assert_eq!(descriptor.location, None);
    assert_eq!(descriptor.sort, SortOrder::TitleAsc);
    assert_eq!(descriptor.page_size, 50);
}

#[test]
fn equal_filters_build_identical_requests() {
    let a = FilterState {
        query: "risk".to_string(),
        location: "Leeds".to_string(),
        ..FilterState::default()
    };
    let b = a.clone();
    assert_eq!(
        build(&a, pagination(3, 30)).to_query_pairs(),
        build(&b, pagination(3, 30)).to_query_pairs()
    );
}
