//! Client for The Odds API v4.
//!
//! Fetches head-to-head odds for one sport key and maps the payload into
//! domain events. Markets containing any outcome priced at or below 1.0 are
//! dropped whole at this boundary, which both enforces the price invariant
//! and preserves outcome positions for the matchers downstream.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::ProviderConfig;
use crate::domain::{BookmakerQuote, Event, Market, Outcome};
use crate::error::ProviderError;

use super::OddsProvider;

pub struct OddsApiClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    sport_key: String,
    regions: String,
}

impl OddsApiClient {
    pub fn new(config: &ProviderConfig, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key,
            sport_key: config.sport_key.clone(),
            regions: config.regions.clone(),
        }
    }

    fn events_url(&self) -> Result<Url, ProviderError> {
        let endpoint = format!(
            "{}/v4/sports/{}/odds",
            self.api_url.trim_end_matches('/'),
            self.sport_key
        );
        Ok(Url::parse_with_params(
            &endpoint,
            &[
                ("apiKey", self.api_key.as_str()),
                ("regions", self.regions.as_str()),
                ("markets", "h2h"),
                ("oddsFormat", "decimal"),
            ],
        )?)
    }
}

#[async_trait]
impl OddsProvider for OddsApiClient {
    async fn fetch_events(&self) -> Result<Vec<Event>, ProviderError> {
        let url = self.events_url()?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let payload: Vec<EventDto> = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        debug!(events = payload.len(), sport = %self.sport_key, "fetched odds");
        Ok(payload.into_iter().map(EventDto::into_event).collect())
    }
}

#[derive(Debug, Deserialize)]
struct EventDto {
    sport_key: String,
    commence_time: DateTime<Utc>,
    home_team: String,
    away_team: String,
    #[serde(default)]
    bookmakers: Vec<BookmakerDto>,
}

#[derive(Debug, Deserialize)]
struct BookmakerDto {
    key: String,
    #[serde(default)]
    markets: Vec<MarketDto>,
}

#[derive(Debug, Deserialize)]
struct MarketDto {
    key: String,
    #[serde(default)]
    outcomes: Vec<OutcomeDto>,
}

#[derive(Debug, Deserialize)]
struct OutcomeDto {
    price: Decimal,
}

impl EventDto {
    fn into_event(self) -> Event {
        let quotes = self
            .bookmakers
            .into_iter()
            .map(|bookmaker| {
                let markets = bookmaker
                    .markets
                    .into_iter()
                    .filter_map(|market| {
                        if market.outcomes.iter().any(|o| o.price <= Decimal::ONE) {
                            debug!(
                                bookmaker = %bookmaker.key,
                                market = %market.key,
                                "dropping market with price at or below 1.0"
                            );
                            return None;
                        }
                        Some(Market::new(
                            market.key,
                            market
                                .outcomes
                                .into_iter()
                                .map(|o| Outcome::new(o.price))
                                .collect(),
                        ))
                    })
                    .collect();
                BookmakerQuote::new(bookmaker.key.clone(), markets)
            })
            .collect();

        Event {
            home_team: self.home_team,
            away_team: self.away_team,
            commence_time: self.commence_time,
            league: self.sport_key,
            quotes,
        }
    }
}
