//! Two-way matcher: expands an event's quotes into rated back/lay candidates
//! against the designated reference (exchange) bookmaker.
//!
//! Outcome matching is purely positional: index `p` in a bookmaker's outcome
//! list is compared against index `p` in the reference's list, with no
//! semantic label matching. Order is preserved exactly as received from the
//! provider.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::event::{BookmakerQuote, Event, EventId};
use super::rating::single_outcome_rating;

/// A rated (bookmaker, outcome slot) candidate against the reference price.
/// Ephemeral: recomputed on every pipeline pass, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedCandidate {
    pub event: EventId,
    /// Positional outcome slot within the head-to-head market.
    pub slot: usize,
    pub bookmaker: String,
    /// The bookmaker's back price at this slot.
    pub price: Decimal,
    /// The reference bookmaker's (lay) price at this slot.
    pub reference_price: Decimal,
    pub rating: Decimal,
}

/// Expand one event into rated candidates.
///
/// Events without a reference head-to-head market contribute zero candidates;
/// so do bookmakers whose h2h outcome count differs from the reference's.
/// Both are silent exclusions, logged at debug only.
pub fn match_event(event: &Event, reference: &str) -> Vec<RatedCandidate> {
    let Some(reference_market) = event.quote(reference).and_then(BookmakerQuote::h2h) else {
        debug!(
            fixture = %event.fixture(),
            reference,
            "no reference h2h market, skipping event"
        );
        return Vec::new();
    };

    if !matches!(reference_market.outcomes.len(), 2 | 3) {
        debug!(
            fixture = %event.fixture(),
            outcomes = reference_market.outcomes.len(),
            "malformed reference market, skipping event"
        );
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for quote in &event.quotes {
        if quote.bookmaker == reference {
            continue;
        }
        let Some(market) = quote.h2h() else {
            continue;
        };
        if market.outcomes.len() != reference_market.outcomes.len() {
            debug!(
                fixture = %event.fixture(),
                bookmaker = %quote.bookmaker,
                outcomes = market.outcomes.len(),
                "outcome count differs from reference, skipping bookmaker"
            );
            continue;
        }

        for (slot, (outcome, reference_outcome)) in market
            .outcomes
            .iter()
            .zip(&reference_market.outcomes)
            .enumerate()
        {
            candidates.push(RatedCandidate {
                event: event.id(),
                slot,
                bookmaker: quote.bookmaker.clone(),
                price: outcome.price,
                reference_price: reference_outcome.price,
                rating: single_outcome_rating(outcome.price, reference_outcome.price),
            });
        }
    }
    candidates
}

/// Flat, unordered candidate list across all events.
pub fn match_all(events: &[Event], reference: &str) -> Vec<RatedCandidate> {
    events
        .iter()
        .flat_map(|event| match_event(event, reference))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::{Market, Outcome, H2H_MARKET_KEY};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn quote(bookmaker: &str, prices: &[Decimal]) -> BookmakerQuote {
        BookmakerQuote::new(
            bookmaker,
            vec![Market::new(
                H2H_MARKET_KEY,
                prices.iter().copied().map(Outcome::new).collect(),
            )],
        )
    }

    fn event(quotes: Vec<BookmakerQuote>) -> Event {
        Event {
            home_team: "Lyon".into(),
            away_team: "Lille".into(),
            commence_time: Utc::now(),
            league: "soccer_france_ligue_one".into(),
            quotes,
        }
    }

    #[test]
    fn emits_one_candidate_per_bookmaker_per_slot() {
        let event = event(vec![
            quote("exchange", &[dec!(1.90), dec!(3.40), dec!(4.20)]),
            quote("bet365", &[dec!(2.00), dec!(3.30), dec!(4.00)]),
            quote("unibet", &[dec!(1.95), dec!(3.50), dec!(4.10)]),
        ]);

        let candidates = match_event(&event, "exchange");
        assert_eq!(candidates.len(), 6);

        let first = &candidates[0];
        assert_eq!(first.bookmaker, "bet365");
        assert_eq!(first.slot, 0);
        assert_eq!(first.price, dec!(2.00));
        assert_eq!(first.reference_price, dec!(1.90));
        assert_eq!(first.rating, single_outcome_rating(dec!(2.00), dec!(1.90)));
    }

    #[test]
    fn missing_reference_contributes_zero_candidates() {
        let event = event(vec![
            quote("bet365", &[dec!(2.00), dec!(3.30)]),
            quote("unibet", &[dec!(1.95), dec!(3.50)]),
        ]);
        assert!(match_event(&event, "exchange").is_empty());
    }

    #[test]
    fn mismatched_outcome_count_skips_bookmaker_only() {
        let event = event(vec![
            quote("exchange", &[dec!(1.90), dec!(3.40)]),
            quote("bet365", &[dec!(2.00), dec!(3.30), dec!(4.00)]),
            quote("unibet", &[dec!(1.95), dec!(3.50)]),
        ]);

        let candidates = match_event(&event, "exchange");
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.bookmaker == "unibet"));
    }

    #[test]
    fn reference_never_matched_against_itself() {
        let event = event(vec![quote("exchange", &[dec!(1.90), dec!(3.40)])]);
        assert!(match_event(&event, "exchange").is_empty());
    }

    #[test]
    fn matching_is_positional_not_semantic() {
        let event = event(vec![
            quote("exchange", &[dec!(1.90), dec!(3.40)]),
            quote("bet365", &[dec!(3.30), dec!(2.00)]),
        ]);

        let candidates = match_event(&event, "exchange");
        // Slot 0 pairs bet365's 3.30 with the exchange's 1.90, whatever the
        // outcomes are actually called.
        assert_eq!(candidates[0].price, dec!(3.30));
        assert_eq!(candidates[0].reference_price, dec!(1.90));
    }
}
