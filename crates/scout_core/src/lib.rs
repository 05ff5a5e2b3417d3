//! Repo scout core: pure search coordination state machine and view-model helpers.
mod accumulator;
mod config;
mod effect;
mod filter;
mod msg;
mod query;
mod repository;
mod state;
mod update;
mod view_model;
mod vocabulary;

pub use accumulator::ResultAccumulator;
pub use config::SearchConfig;
pub use effect::Effect;
pub use filter::{FilterState, SortOrder};
pub use msg::Msg;
pub use query::{build_request, SearchRequest};
pub use repository::{Generation, Repository, RepositoryId, RequestOutcome};
pub use state::{AppState, FetchStatus};
pub use update::update;
pub use view_model::{AppViewModel, RepoCardView, SortOptionView};
pub use vocabulary::TopicVocabulary;
