use std::sync::Once;

use jobboard_core::{
    total_pages, update, AppState, Effect, FilterState, JobPage, JobTypeFilter, Msg, PageSize,
    SortOrder,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobboard_logging::initialize_for_tests);
}

fn size(n: u32) -> PageSize {
    PageSize::new(n).unwrap()
}

fn fetched_pages(effects: &[Effect]) -> Vec<u32> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchJobs { query, .. } => Some(query.page),
            _ => None,
        })
        .collect()
}

fn with_total(state: AppState, total: u64) -> AppState {
    let (state, effects) = update(state, Msg::RefreshRequested);
    let seq = match &effects[0] {
        Effect::FetchJobs { seq, .. } => *seq,
        other => panic!("unexpected effect {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            seq,
            result: Ok(JobPage {
                jobs: Vec::new(),
                total,
            }),
        },
    );
    state
}

#[test]
fn total_pages_examples() {
    assert_eq!(total_pages(0, size(10)), 1);
    assert_eq!(total_pages(25, size(10)), 3);
    assert_eq!(total_pages(20, size(10)), 2);
    assert_eq!(total_pages(1, size(50)), 1);
}

#[test]
fn page_size_only_accepts_offered_values() {
    assert!(PageSize::new(10).is_some());
    assert!(PageSize::new(50).is_some());
    assert!(PageSize::new(0).is_none());
    assert!(PageSize::new(25).is_none());
    assert_eq!(PageSize::default().get(), 10);
}

#[test]
fn set_filters_resets_page_and_refetches_once() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PageRequested(4));
    assert_eq!(state.pagination().page(), 4);

    let filters = FilterState {
        query: "pricing".to_string(),
        job_type: JobTypeFilter::Remote,
        ..FilterState::default()
    };
    let (state, effects) = update(state, Msg::FiltersApplied(filters.clone()));

    assert_eq!(state.pagination().page(), 1);
    assert_eq!(state.filters(), &filters);
    assert_eq!(fetched_pages(&effects), vec![1]);
    match &effects[0] {
        Effect::FetchJobs { query, .. } => {
            assert_eq!(query.q.as_deref(), Some("pricing"));
            assert_eq!(query.job_type, Some("Remote"));
        }
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn identical_filters_still_reset_page() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PageRequested(3));
    let same = state.filters().clone();

    let (state, effects) = update(state, Msg::FiltersApplied(same));

    assert_eq!(state.pagination().page(), 1);
    assert_eq!(effects.len(), 1);
}

#[test]
fn reset_restores_defaults() {
    init_logging();
    let filters = FilterState {
        query: "x".to_string(),
        location: "Paris".to_string(),
        tag: "Health".to_string(),
        job_type: JobTypeFilter::Internship,
        sort: SortOrder::CompanyAsc,
    };
    let (state, _) = update(AppState::new(), Msg::FiltersApplied(filters));
    let (state, _) = update(state, Msg::PageRequested(2));

    let (state, effects) = update(state, Msg::FiltersReset);

    assert_eq!(state.filters(), &FilterState::default());
    assert_eq!(state.pagination().page(), 1);
    assert_eq!(fetched_pages(&effects), vec![1]);
}

#[test]
fn set_page_is_not_clamped_by_the_controller() {
    init_logging();
    let state = with_total(AppState::new(), 5);
    assert_eq!(state.view().total_pages, 1);

    let (state, effects) = update(state, Msg::PageRequested(9));

    assert_eq!(state.pagination().page(), 9);
    assert_eq!(fetched_pages(&effects), vec![9]);
}

#[test]
fn page_zero_and_same_page_do_not_refetch() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::PageRequested(0));
    assert_eq!(state.pagination().page(), 1);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::PageRequested(1));
    assert_eq!(state.pagination().page(), 1);
    assert!(effects.is_empty());
}

#[test]
fn page_size_change_resets_page_with_single_refresh() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PageRequested(3));

    let (state, effects) = update(state, Msg::PageSizeChanged(size(20)));

    assert_eq!(state.pagination().page(), 1);
    assert_eq!(state.pagination().page_size(), size(20));
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::FetchJobs { query, .. } => {
            assert_eq!(query.page, 1);
            assert_eq!(query.page_size, 20);
        }
        other => panic!("unexpected effect {other:?}"),
    }

    let (_state, effects) = update(state, Msg::PageSizeChanged(size(20)));
    assert!(effects.is_empty());
}

#[test]
fn view_reports_pager_bounds() {
    init_logging();
    let state = with_total(AppState::new(), 25);
    let view = state.view();
    assert_eq!(view.total_pages, 3);
    assert!(!view.can_prev);
    assert!(view.can_next);

    let (state, _) = update(state, Msg::PageRequested(3));
    let view = state.view();
    assert!(view.can_prev);
    assert!(!view.can_next);
}

#[test]
fn job_type_and_sort_parse_from_user_text() {
    assert_eq!(JobTypeFilter::parse("full-time"), Some(JobTypeFilter::FullTime));
    assert_eq!(JobTypeFilter::parse("PartTime"), Some(JobTypeFilter::PartTime));
    assert_eq!(JobTypeFilter::parse("all"), Some(JobTypeFilter::All));
    assert_eq!(JobTypeFilter::parse("contract"), None);

    assert_eq!(SortOrder::parse("title_asc"), Some(SortOrder::TitleAsc));
    assert_eq!(SortOrder::parse("oldest"), Some(SortOrder::PostingDateAsc));
    assert_eq!(SortOrder::parse("random"), None);
}
