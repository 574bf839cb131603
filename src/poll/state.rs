use chrono::{DateTime, Utc};

/// What a consumer sees of a [crate::poll::Poller]
/// - [PollState::data]       the last successful snapshot, kept through errors
/// - [PollState::loading]    a fetch is in flight
/// - [PollState::error]      the failure of the latest cycle, if it failed
/// - [PollState::updated_at] when [PollState::data] was fetched
#[derive(Debug, Clone, PartialEq)]
pub struct PollState<T>
{
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>
}

impl<T> PollState<T>
{
    pub fn new() -> PollState<T>
    {
        PollState
        {
            data: None,
            loading: false,
            error: None,
            updated_at: None
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.data.is_none()
    }
}
