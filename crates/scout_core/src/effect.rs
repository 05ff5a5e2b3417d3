use std::time::Duration;

use crate::{Generation, SearchRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Msg::DebounceElapsed { generation }` after `delay`, replacing
    /// any trigger still pending.
    ScheduleFetch { generation: Generation, delay: Duration },
    /// Issue `request` now and report back with `Msg::FetchCompleted`.
    Fetch {
        generation: Generation,
        page: u32,
        request: SearchRequest,
    },
}
