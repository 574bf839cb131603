//! Fixed interval polling of a [Fetch] with disposal guarantees
//!
//! A [Poller] fetches a snapshot on start, then every interval, and reports
//! each transition as a [PollState] to its consumer until disposed.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use lookout::fetch::FnFetcher;
//! use lookout::poll::{FetchError, Poller};
//!
//! async fn count_users() -> Result<usize, FetchError> { Ok(3) }
//!
//! #[tokio::main]
//! async fn main()
//! {
//!     let poller = Poller::start
//!     (
//!         FnFetcher::new(count_users),
//!         Duration::from_millis(5000),
//!         |state| println!("{:?}", state)
//!     ).unwrap();
//!
//!     poller.dispose();
//! }
//! ```

use core::fmt;
use std::{any::Any, time::Duration};

use axum::async_trait;

pub mod state;
pub mod poller;
pub mod pool;

pub use state::PollState;
pub use poller::{start_watch, Poller};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Shown when a failure carries no message of its own
pub const FALLBACK_MESSAGE: &str = "Failed to fetch data";

/// The single failure kind of a fetch cycle
///  - network, status and decoding failures all end up here
///  - [FetchError::message] is what consumers display
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError
{
    pub why: Option<String>
}

impl FetchError
{
    pub fn new(why: &str) -> FetchError
    {
        FetchError { why: Some(why.to_string()) }
    }

    /// A failure with nothing to say about itself
    pub fn opaque() -> FetchError
    {
        FetchError { why: None }
    }

    /// The message verbatim, or [FALLBACK_MESSAGE] if there is none
    pub fn message(&self) -> String
    {
        match &self.why
        {
            Some(why) if !why.trim().is_empty() => why.clone(),
            _ => FALLBACK_MESSAGE.to_string()
        }
    }

    /// Recover a message from a panic payload, as thrown by a fetcher
    pub fn from_panic(payload: Box<dyn Any + Send>) -> FetchError
    {
        if let Some(s) = payload.downcast_ref::<&str>()
        {
            FetchError::new(s)
        }
        else if let Some(s) = payload.downcast_ref::<String>()
        {
            FetchError::new(s)
        }
        else
        {
            FetchError::opaque()
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError
{
    fn from(e: reqwest::Error) -> FetchError
    {
        FetchError { why: Some(e.to_string()) }
    }
}

impl From<serde_json::Error> for FetchError
{
    fn from(e: serde_json::Error) -> FetchError
    {
        FetchError { why: Some(e.to_string()) }
    }
}

impl From<String> for FetchError
{
    fn from(why: String) -> FetchError
    {
        FetchError { why: Some(why) }
    }
}

impl From<&str> for FetchError
{
    fn from(why: &str) -> FetchError
    {
        FetchError::new(why)
    }
}

/// The result of one fetch cycle with the failure already normalised
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T>
{
    Ok(T),
    Error(String)
}

impl<T> From<Result<T, FetchError>> for Outcome<T>
{
    fn from(result: Result<T, FetchError>) -> Outcome<T>
    {
        match result
        {
            Ok(snapshot) => Outcome::Ok(snapshot),
            Err(e) => Outcome::Error(e.message())
        }
    }
}

/// A source of snapshots for a [Poller]
///  - e.g. [crate::fetch::http::HttpFetcher] or [crate::fetch::FnFetcher]
#[async_trait]
pub trait Fetch: Send + Sync
{
    type Snapshot: Send + 'static;

    async fn fetch(&self) -> Result<Self::Snapshot, FetchError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum StartError
{
    ZeroInterval,
    NoRuntime
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self
        {
            StartError::ZeroInterval => write!(f, "polling interval must be positive"),
            StartError::NoRuntime => write!(f, "polling must be started within a tokio runtime")
        }
    }
}

impl std::error::Error for StartError {}
