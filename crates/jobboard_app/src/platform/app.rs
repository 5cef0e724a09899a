use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use jobboard_core::{update, AppState, EditSession, JobInput, Msg, PageSize};
use jobboard_engine::ReqwestGateway;
use jobboard_logging::{board_error, board_info, board_warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::commands::{self, Command};
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::{form, logging, render};

/// Everything the main loop reacts to.
pub(crate) enum AppEvent {
    Command(Command),
    Msg(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let mut config = AppConfig::load(config_path.as_deref())?;
    config.apply_env(|key| std::env::var(key).ok());
    logging::initialize(config.log_destination, &config.log_level);
    board_info!("Starting job board client against {}", config.api_base);

    let gateway = ReqwestGateway::new(config.gateway_settings())
        .context("failed to build HTTP client")?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(Arc::new(gateway), event_tx.clone())
        .context("failed to start request engine")?;

    spawn_input_reader(event_tx);

    println!("Job board at {} (type 'help')", config.api_base);
    let mut session = Session {
        state: AppState::with_page_size(config.page_size()),
        runner,
    };
    session.dispatch(Msg::RefreshRequested);

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => session.dispatch(msg),
            AppEvent::Command(Command::Quit) | AppEvent::InputClosed => break,
            AppEvent::Command(command) => session.handle_command(command),
        }
    }

    board_info!("Job board client exiting");
    Ok(())
}

const PROMPT: &str = "jobs> ";
const CONFIRM_DELETE_PROMPT: &str = "Delete this job? [y/N] ";

/// Reads commands on a background thread. Delete confirmation happens here,
/// so the core only ever sees confirmed deletions.
fn spawn_input_reader(events: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        if let Err(err) = read_commands(&events) {
            board_error!("Input reader stopped: {}", err);
        }
        let _ = events.send(AppEvent::InputClosed);
    });
}

fn read_commands(events: &mpsc::Sender<AppEvent>) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("Use 'quit' to exit");
                continue;
            }
            Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line.as_str());

        let command = match commands::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        if let Command::Delete(_) = command {
            match delete_answer(editor.readline(CONFIRM_DELETE_PROMPT))? {
                Some(true) => {}
                Some(false) => {
                    println!("Delete cancelled.");
                    continue;
                }
                None => return Ok(()),
            }
        }

        if events.send(AppEvent::Command(command)).is_err() {
            return Ok(());
        }
    }
}

/// `Some(confirmed)` for an answer, `None` once input is closed. Ctrl-C
/// declines.
fn delete_answer(answer: rustyline::Result<String>) -> rustyline::Result<Option<bool>> {
    match answer {
        Ok(text) => Ok(Some(commands::is_confirmation(&text))),
        Err(ReadlineError::Interrupted) => Ok(Some(false)),
        Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err),
    }
}

struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        let completion = matches!(
            msg,
            Msg::JobsLoaded { .. }
                | Msg::JobCreated { .. }
                | Msg::JobUpdated { .. }
                | Msg::JobDeleted { .. }
        );
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);

        for notice in state.take_notices() {
            println!("{}", render::render_notice(&notice));
        }
        let was_dirty = state.consume_dirty();
        if was_dirty && completion && !state.loading() {
            println!("{}", render::render(&state.view()));
        }

        self.state = state;
        self.runner.run(effects);
    }

    fn handle_command(&mut self, command: Command) {
        let view = self.state.view();
        match command {
            Command::List => println!("{}", render::render(&view)),
            Command::Help => println!("{}", commands::HELP),
            Command::Refresh => self.dispatch(Msg::RefreshRequested),
            Command::Reset => self.dispatch(Msg::FiltersReset),
            Command::Filter(fields) => {
                match form::apply_filter_fields(self.state.filters().clone(), &fields) {
                    Ok(filters) => self.dispatch(Msg::FiltersApplied(filters)),
                    Err(message) => println!("{message}"),
                }
            }
            Command::Page(page) => {
                let clamped = u64::from(page).clamp(1, view.total_pages);
                self.request_page(clamped);
            }
            Command::Next => self.request_page((u64::from(view.page) + 1).min(view.total_pages)),
            Command::Prev => self.request_page(u64::from(view.page).saturating_sub(1).max(1)),
            Command::Size(size) => match PageSize::new(size) {
                Some(page_size) => self.dispatch(Msg::PageSizeChanged(page_size)),
                None => println!("Page size must be one of {:?}", PageSize::ALLOWED),
            },
            Command::Add(fields) => {
                if self.state.edit_session() != &EditSession::Idle {
                    println!("Finish or cancel the current edit first.");
                    return;
                }
                self.submit_form(JobInput::default(), &fields);
            }
            Command::Save(fields) => match self.state.edit_session() {
                EditSession::Editing(job) => {
                    let base = JobInput::from_job(job);
                    self.submit_form(base, &fields);
                }
                EditSession::Idle => println!("Not editing a job; use 'add' to create one."),
            },
            Command::Edit(id) => match self.state.job(id) {
                Some(job) => {
                    let job = job.clone();
                    println!("Editing #{}: {} at {}", job.id, job.title, job.company);
                    self.dispatch(Msg::EditStarted(job));
                }
                None => println!("No job #{id} on this page."),
            },
            Command::Cancel => self.dispatch(Msg::EditCancelled),
            Command::Delete(id) => self.dispatch(Msg::DeleteConfirmed(id)),
            Command::Quit => {}
        }
    }

    /// Presentation-side clamp; the core accepts any page >= 1.
    fn request_page(&mut self, page: u64) {
        match u32::try_from(page) {
            Ok(page) => self.dispatch(Msg::PageRequested(page)),
            Err(_) => board_warn!("Page {} out of range", page),
        }
    }

    fn submit_form(&mut self, base: JobInput, fields: &[commands::Field]) {
        let input = match form::apply_job_fields(base, fields) {
            Ok(input) => input,
            Err(message) => {
                println!("{message}");
                return;
            }
        };
        if let Err(errors) = form::validate(&input) {
            for error in errors {
                println!("{error}");
            }
            return;
        }
        self.dispatch(Msg::FormSubmitted(input));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_needs_an_explicit_yes() {
        assert_eq!(delete_answer(Ok("y".to_string())).unwrap(), Some(true));
        assert_eq!(delete_answer(Ok("YES".to_string())).unwrap(), Some(true));
        assert_eq!(delete_answer(Ok(String::new())).unwrap(), Some(false));
        assert_eq!(delete_answer(Ok("n".to_string())).unwrap(), Some(false));
    }

    #[test]
    fn interrupt_declines_and_eof_closes_input() {
        assert_eq!(
            delete_answer(Err(ReadlineError::Interrupted)).unwrap(),
            Some(false)
        );
        assert_eq!(delete_answer(Err(ReadlineError::Eof)).unwrap(), None);
    }
}
