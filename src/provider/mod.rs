//! Odds provider boundary.
//!
//! Defines the trait the quote store fetches through, plus the client for
//! The Odds API.

mod odds_api;

pub use odds_api::OddsApiClient;

use async_trait::async_trait;

use crate::domain::Event;
use crate::error::ProviderError;

/// One read operation against an external odds data provider.
///
/// Provider errors surface as a single engine-level fetch failure; the
/// engine performs no retry or backoff itself.
#[async_trait]
pub trait OddsProvider: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<Event>, ProviderError>;
}
