use std::panic::AssertUnwindSafe;
use std::sync::{mpsc, Arc};
use std::thread;

use futures_util::FutureExt;
use jobboard_core::{JobId, JobInput, QueryDescriptor, RequestSeq};
use jobboard_logging::{board_debug, board_error};
use thiserror::Error;

use crate::{EngineEvent, FailureKind, GatewayError, JobGateway};

/// One gateway call to run in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    List { seq: RequestSeq, query: QueryDescriptor },
    Create { input: JobInput },
    Update { id: JobId, input: JobInput },
    Delete { id: JobId },
}

impl EngineCommand {
    /// The completion reported when the command never reached the gateway.
    pub fn failed(self, error: GatewayError) -> EngineEvent {
        match self {
            EngineCommand::List { seq, .. } => EngineEvent::Listed {
                seq,
                result: Err(error),
            },
            EngineCommand::Create { .. } => EngineEvent::Created { result: Err(error) },
            EngineCommand::Update { id, .. } => EngineEvent::Updated {
                id,
                result: Err(error),
            },
            EngineCommand::Delete { id } => EngineEvent::Deleted {
                id,
                result: Err(error),
            },
        }
    }
}

/// Returned by `EngineHandle::submit` once the background thread is gone.
#[derive(Debug, Error)]
#[error("engine stopped")]
pub struct EngineStopped(pub EngineCommand);

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs gateway calls on a background tokio runtime. Commands are not
/// serialized: each one runs as its own task and reports through the sink
/// exactly once.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(gateway: Arc<dyn JobGateway>, sink: Arc<dyn EventSink>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("jobboard-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let gateway = gateway.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        let event = run_command(gateway.as_ref(), command).await;
                        sink.emit(event);
                    });
                }
                board_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn submit(&self, command: EngineCommand) -> Result<(), EngineStopped> {
        self.cmd_tx
            .send(command)
            .map_err(|mpsc::SendError(command)| EngineStopped(command))
    }
}

async fn run_command(gateway: &dyn JobGateway, command: EngineCommand) -> EngineEvent {
    let fallback = command.clone();
    let outcome = AssertUnwindSafe(execute(gateway, command))
        .catch_unwind()
        .await;
    match outcome {
        Ok(event) => event,
        Err(_) => {
            board_error!("Gateway call panicked: {:?}", fallback);
            fallback.failed(GatewayError::new(FailureKind::Network, "gateway call panicked"))
        }
    }
}

async fn execute(gateway: &dyn JobGateway, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::List { seq, query } => EngineEvent::Listed {
            seq,
            result: gateway.list_jobs(&query).await,
        },
        EngineCommand::Create { input } => EngineEvent::Created {
            result: gateway.create_job(&input).await,
        },
        EngineCommand::Update { id, input } => EngineEvent::Updated {
            id,
            result: gateway.update_job(id, &input).await,
        },
        EngineCommand::Delete { id } => EngineEvent::Deleted {
            id,
            result: gateway.delete_job(id).await,
        },
    }
}
