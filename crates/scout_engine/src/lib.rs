//! Repo scout engine: search transport, debounce timer and effect execution.
mod debounce;
mod dto;
mod engine;
mod fetch;
mod types;

pub use debounce::Debouncer;
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{FetchSettings, ReqwestSearchClient, SearchClient};
pub use types::{outcome_from, EngineEvent, FailureKind, FetchError};
