//! Job board engine: remote job gateway and background effect execution.
mod engine;
mod gateway;
mod types;
mod wire;

pub use engine::{ChannelEventSink, EngineCommand, EngineHandle, EngineStopped, EventSink};
pub use gateway::{GatewaySettings, JobGateway, ReqwestGateway};
pub use types::{EngineEvent, FailureKind, GatewayError};
