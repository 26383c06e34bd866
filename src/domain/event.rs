//! Events and the quotes bookmakers attach to them.
//!
//! An [`Event`] is one fixture ("Arsenal vs Chelsea" at some kickoff time)
//! together with every bookmaker's markets for it, exactly as the provider
//! returned them. Nothing here is ever mutated in place; a fetch replaces the
//! whole snapshot wholesale.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Market key for head-to-head (match winner) markets. The engine only
/// processes this key.
pub const H2H_MARKET_KEY: &str = "h2h";

/// A single priced outcome. The label is implicit in the outcome's position
/// within its market; outcome order must be preserved exactly as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Decimal odds. Always > 1.0; quotes violating this are dropped at the
    /// provider boundary.
    pub price: Decimal,
}

impl Outcome {
    pub fn new(price: Decimal) -> Self {
        Self { price }
    }
}

/// One market offered by one bookmaker, with positionally ordered outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Market {
    pub key: String,
    pub outcomes: Vec<Outcome>,
}

impl Market {
    pub fn new(key: impl Into<String>, outcomes: Vec<Outcome>) -> Self {
        Self {
            key: key.into(),
            outcomes,
        }
    }

    pub fn is_h2h(&self) -> bool {
        self.key == H2H_MARKET_KEY
    }
}

/// All markets one bookmaker offers for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmakerQuote {
    pub bookmaker: String,
    pub markets: Vec<Market>,
}

impl BookmakerQuote {
    pub fn new(bookmaker: impl Into<String>, markets: Vec<Market>) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            markets,
        }
    }

    /// The bookmaker's head-to-head market, if it offers one.
    pub fn h2h(&self) -> Option<&Market> {
        self.markets.iter().find(|m| m.is_h2h())
    }
}

/// Identity of an event: the (home, away, kickoff) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EventId {
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home_team, self.away_team)
    }
}

/// One fixture with every bookmaker's quotes, immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
    /// Sport/league key as supplied by the provider (e.g. `soccer_epl`).
    pub league: String,
    pub quotes: Vec<BookmakerQuote>,
}

impl Event {
    pub fn id(&self) -> EventId {
        EventId {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            commence_time: self.commence_time,
        }
    }

    /// Display name used for text search: `"{home} vs {away}"`.
    pub fn fixture(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }

    /// Look up a bookmaker's quote by name.
    pub fn quote(&self, bookmaker: &str) -> Option<&BookmakerQuote> {
        self.quotes.iter().find(|q| q.bookmaker == bookmaker)
    }
}
