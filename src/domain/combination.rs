//! Three-way combination search: exhaustive dutching over bookmaker triples.
//!
//! Only events whose head-to-head market carries exactly three outcomes
//! qualify. For each unordered triple of bookmakers the search takes the
//! slot-wise maximum price across the three and dutches it with a fixed base
//! stake. Note the slot-wise maximum does not assign one bookmaker per slot;
//! the recorded bookmaker names are the triple considered, not a
//! slot-to-bookmaker mapping.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::event::{Event, EventId};
use super::rating::{dutch_three, DutchPricing};

/// The best dutching combination found for one event. Ephemeral, like
/// [`RatedCandidate`](super::matcher::RatedCandidate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestCombination {
    pub event: EventId,
    /// Slot-wise best prices across the winning triple.
    pub best_prices: [Decimal; 3],
    /// The three bookmakers considered (not a per-slot assignment).
    pub bookmakers: [String; 3],
    pub total_stake: Decimal,
    pub profit: Decimal,
    pub rating: Decimal,
}

/// Per-bookmaker three-outcome price triples for an event. Markets with any
/// other outcome count are excluded as malformed.
fn eligible_triples(event: &Event) -> Vec<(&str, [Decimal; 3])> {
    event
        .quotes
        .iter()
        .filter_map(|quote| {
            let market = quote.h2h()?;
            match market.outcomes.as_slice() {
                [a, b, c] => Some((quote.bookmaker.as_str(), [a.price, b.price, c.price])),
                _ => None,
            }
        })
        .collect()
}

/// Exhaustive O(n³) search over all unordered bookmaker triples.
///
/// Returns `None` when fewer than three bookmakers offer a three-outcome
/// head-to-head market (silent exclusion). Ties on rating keep the first
/// triple found in enumeration order.
pub fn best_combination(event: &Event) -> Option<BestCombination> {
    let entries = eligible_triples(event);
    if entries.len() < 3 {
        debug!(
            fixture = %event.fixture(),
            eligible = entries.len(),
            "fewer than three eligible bookmakers, skipping event"
        );
        return None;
    }

    let mut best: Option<(DutchPricing, [Decimal; 3], [usize; 3])> = None;
    for i in 0..entries.len() {
        for j in i + 1..entries.len() {
            for k in j + 1..entries.len() {
                let best_prices = [
                    entries[i].1[0].max(entries[j].1[0]).max(entries[k].1[0]),
                    entries[i].1[1].max(entries[j].1[1]).max(entries[k].1[1]),
                    entries[i].1[2].max(entries[j].1[2]).max(entries[k].1[2]),
                ];
                let pricing = dutch_three(best_prices[0], best_prices[1], best_prices[2]);
                let improves = best
                    .as_ref()
                    .map_or(true, |(current, _, _)| pricing.rating > current.rating);
                if improves {
                    best = Some((pricing, best_prices, [i, j, k]));
                }
            }
        }
    }

    best.map(|(pricing, best_prices, [i, j, k])| BestCombination {
        event: event.id(),
        best_prices,
        bookmakers: [
            entries[i].0.to_string(),
            entries[j].0.to_string(),
            entries[k].0.to_string(),
        ],
        total_stake: pricing.total_stake,
        profit: pricing.profit,
        rating: pricing.rating,
    })
}

/// At most one combination per qualifying event.
pub fn best_combinations(events: &[Event]) -> Vec<BestCombination> {
    events.iter().filter_map(best_combination).collect()
}
