use std::sync::{mpsc, Arc};

use jobboard_core::{Effect, ErrorKind, GatewayFailure, Msg};
use jobboard_engine::{
    EngineCommand, EngineEvent, EngineHandle, EngineStopped, EventSink, FailureKind,
    GatewayError, JobGateway,
};
use jobboard_logging::{board_error, board_info};

use super::app::AppEvent;

/// Executes core effects through the engine and feeds completions back as
/// messages on the app's event channel.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    events: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub(crate) fn new(
        gateway: Arc<dyn JobGateway>,
        events: mpsc::Sender<AppEvent>,
    ) -> std::io::Result<Self> {
        let sink = Arc::new(MsgSink {
            tx: events.clone(),
        });
        let engine = EngineHandle::new(gateway, sink)?;
        Ok(Self { engine, events })
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            let command = to_command(effect);
            board_info!("Submitting {}", describe(&command));
            if let Err(EngineStopped(command)) = self.engine.submit(command) {
                board_error!("Engine unavailable; failing {}", describe(&command));
                let event = command.failed(GatewayError::new(
                    FailureKind::Network,
                    "request engine stopped",
                ));
                let _ = self.events.send(AppEvent::Msg(to_msg(event)));
            }
        }
    }
}

struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Msg(to_msg(event)));
    }
}

fn to_command(effect: Effect) -> EngineCommand {
    match effect {
        Effect::FetchJobs { seq, query } => EngineCommand::List { seq, query },
        Effect::CreateJob { input } => EngineCommand::Create { input },
        Effect::UpdateJob { id, input } => EngineCommand::Update { id, input },
        Effect::DeleteJob { id } => EngineCommand::Delete { id },
    }
}

fn describe(command: &EngineCommand) -> String {
    match command {
        EngineCommand::List { seq, query } => {
            format!("list seq={} page={} size={}", seq, query.page, query.page_size)
        }
        EngineCommand::Create { input } => format!("create title_len={}", input.title.len()),
        EngineCommand::Update { id, .. } => format!("update id={id}"),
        EngineCommand::Delete { id } => format!("delete id={id}"),
    }
}

pub(crate) fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Listed { seq, result } => Msg::JobsLoaded {
            seq,
            result: result.map_err(|err| map_failure(err, false)),
        },
        EngineEvent::Created { result } => Msg::JobCreated {
            result: result.map_err(|err| map_failure(err, true)),
        },
        EngineEvent::Updated { id, result } => Msg::JobUpdated {
            id,
            result: result.map_err(|err| map_failure(err, true)),
        },
        EngineEvent::Deleted { id, result } => Msg::JobDeleted {
            id,
            result: result.map_err(|err| map_failure(err, true)),
        },
    }
}

/// Client errors on writes are validation failures; other HTTP failures
/// and unreadable bodies are server errors; everything else is network.
fn map_failure(err: GatewayError, is_write: bool) -> GatewayFailure {
    let kind = match err.kind {
        FailureKind::HttpStatus(_) if is_write && err.is_client_error() => ErrorKind::Validation,
        FailureKind::InvalidPayload => ErrorKind::Validation,
        FailureKind::HttpStatus(_) | FailureKind::MalformedResponse => ErrorKind::Server,
        FailureKind::Network | FailureKind::Timeout | FailureKind::InvalidUrl => {
            ErrorKind::Network
        }
    };
    let message = if err.message.is_empty() {
        err.kind.to_string()
    } else {
        err.message
    };
    GatewayFailure::new(kind, message)
}
