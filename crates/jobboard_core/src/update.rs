use jobboard_logging::board_warn;

use crate::{AppState, EditSession, Effect, FilterState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshRequested => vec![refresh(&mut state)],
        Msg::FiltersApplied(filters) => {
            // Unconditional: identical filters still go back to page 1 and refetch.
            state.set_filters(filters);
            vec![refresh(&mut state)]
        }
        Msg::FiltersReset => {
            state.set_filters(FilterState::default());
            vec![refresh(&mut state)]
        }
        Msg::PageRequested(page) => {
            if page == 0 {
                board_warn!("Ignoring request for page 0");
                Vec::new()
            } else if state.set_page(page) {
                vec![refresh(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::PageSizeChanged(page_size) => {
            if state.set_page_size(page_size) {
                vec![refresh(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::JobsLoaded { seq, result } => {
            state.apply_jobs_loaded(seq, result);
            Vec::new()
        }
        Msg::EditStarted(job) => {
            state.start_edit(job);
            Vec::new()
        }
        Msg::EditCancelled => {
            state.end_edit();
            Vec::new()
        }
        Msg::FormSubmitted(input) => {
            state.begin_write();
            match state.edit_session() {
                EditSession::Idle => vec![Effect::CreateJob { input }],
                EditSession::Editing(job) => vec![Effect::UpdateJob { id: job.id, input }],
            }
        }
        Msg::DeleteConfirmed(id) => {
            state.begin_write();
            vec![Effect::DeleteJob { id }]
        }
        Msg::JobCreated { result } => {
            // Creates are only submitted while idle, so any edit session open
            // now was started after the submit and is kept.
            state.apply_created(result);
            Vec::new()
        }
        Msg::JobUpdated { id, result } => {
            let applied = state.apply_updated(id, result);
            if applied && state.edit_session().editing_id() == Some(id) {
                state.end_edit();
            }
            Vec::new()
        }
        Msg::JobDeleted { id, result } => {
            state.apply_deleted(id, result);
            Vec::new()
        }
    };

    (state, effects)
}

fn refresh(state: &mut AppState) -> Effect {
    let seq = state.begin_refresh();
    Effect::FetchJobs {
        seq,
        query: state.query(),
    }
}
