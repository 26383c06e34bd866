//! Shared fixture helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use layline::domain::{BookmakerQuote, Event, Market, Outcome, H2H_MARKET_KEY};
use rust_decimal::Decimal;

pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

pub fn h2h_quote(bookmaker: &str, prices: &[Decimal]) -> BookmakerQuote {
    BookmakerQuote::new(
        bookmaker,
        vec![Market::new(
            H2H_MARKET_KEY,
            prices.iter().copied().map(Outcome::new).collect(),
        )],
    )
}

pub fn event(
    home: &str,
    away: &str,
    commence_time: DateTime<Utc>,
    quotes: Vec<BookmakerQuote>,
) -> Event {
    Event {
        home_team: home.into(),
        away_team: away.into(),
        commence_time,
        league: "soccer_epl".into(),
        quotes,
    }
}

pub fn all_bookmakers(events: &[Event]) -> BTreeSet<String> {
    events
        .iter()
        .flat_map(|e| e.quotes.iter())
        .map(|q| q.bookmaker.clone())
        .collect()
}
