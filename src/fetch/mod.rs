//! [Fetch] implementations to poll

use std::future::Future;

use axum::async_trait;

use crate::poll::{Fetch, FetchError};

pub mod http;

/// Adapts an async closure (or async fn) into a [Fetch]
pub struct FnFetcher<F>
{
    f: F
}

impl<F> FnFetcher<F>
{
    pub fn new(f: F) -> FnFetcher<F>
    {
        FnFetcher { f }
    }
}

#[async_trait]
impl<F, Fut, T> Fetch for FnFetcher<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    T: Send + 'static
{
    type Snapshot = T;

    async fn fetch(&self) -> Result<T, FetchError>
    {
        (self.f)().await
    }
}
