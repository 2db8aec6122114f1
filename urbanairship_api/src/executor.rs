//! The transport seam between [`Client`](crate::Client) and the network.

use async_trait::async_trait;
use reqwest::Response;
use tokio_util::sync::CancellationToken;

use crate::{types::Push, Error};

/// Sends requests to UrbanAirship.
///
/// [`UrbanAirship`](crate::UrbanAirship) is the real implementation. Tests
/// substitute a scripted one so no HTTP traffic happens.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Sends `body` to the push endpoint and returns the raw response.
    ///
    /// Implementations must stop waiting once `cancel` fires and report that
    /// as [`Error::Transport`].
    async fn do_push_request(
        &self,
        cancel: &CancellationToken,
        body: &Push,
    ) -> Result<Response, Error>;
}
