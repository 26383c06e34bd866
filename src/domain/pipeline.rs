//! Filter, rank, and paginate candidates into bounded result pages.
//!
//! Stages run in a fixed order: search, date window, bookmaker restriction,
//! expansion (two-way matcher or three-way search), rating window, odds
//! window, stable sort by rating descending, pagination. Pure and
//! deterministic; re-run in full on every filter change.

use serde::Serialize;
use tracing::debug;

use super::combination::{best_combinations, BestCombination};
use super::event::Event;
use super::filter::FilterState;
use super::matcher::{match_all, RatedCandidate};

/// Fixed page size.
pub const PAGE_SIZE: usize = 10;

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, clamped to `[1, max(1, page_count)]`.
    pub page_index: usize,
    pub page_count: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Event-level stages shared by both modes: search, date window, bookmaker
/// restriction. Returns surviving events with only the selected bookmakers'
/// quotes retained.
fn eligible_events(events: &[Event], filters: &FilterState) -> Vec<Event> {
    if filters.selected_bookmakers.is_empty() {
        // Restriction to nothing, not a no-op.
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| filters.matches_search(&event.fixture()))
        .filter(|event| filters.date_range.contains(event.commence_time))
        .filter_map(|event| {
            let quotes: Vec<_> = event
                .quotes
                .iter()
                .filter(|quote| filters.selected_bookmakers.contains(&quote.bookmaker))
                .cloned()
                .collect();
            if quotes.is_empty() {
                None
            } else {
                let mut event = event.clone();
                event.quotes = quotes;
                Some(event)
            }
        })
        .collect()
}

fn paginate<T>(mut items: Vec<T>, page: usize) -> Page<T> {
    let total_count = items.len();
    let page_count = total_count.div_ceil(PAGE_SIZE);
    let page_index = page.clamp(1, page_count.max(1));

    let start = (page_index - 1) * PAGE_SIZE;
    let items: Vec<T> = if start >= total_count {
        Vec::new()
    } else {
        items.drain(start..total_count.min(start + PAGE_SIZE)).collect()
    };

    Page {
        items,
        page_index,
        page_count,
        total_count,
    }
}

/// Run the two-way (back/lay) pipeline against a snapshot.
pub fn apply_two_way(
    events: &[Event],
    reference: &str,
    filters: &FilterState,
    page: usize,
) -> Page<RatedCandidate> {
    let events = eligible_events(events, filters);
    let mut items: Vec<_> = match_all(&events, reference)
        .into_iter()
        .filter(|c| filters.rating_range.contains(c.rating))
        .filter(|c| filters.odds_range.contains(c.price))
        .collect();

    // Stable: ties keep relative input order.
    items.sort_by(|a, b| b.rating.cmp(&a.rating));

    debug!(
        events = events.len(),
        candidates = items.len(),
        "two-way pipeline run"
    );
    paginate(items, page)
}

/// Run the three-way (dutching) pipeline against a snapshot.
///
/// The odds window keeps a combination when at least one of its three best
/// slot prices falls inside the window.
pub fn apply_three_way(
    events: &[Event],
    filters: &FilterState,
    page: usize,
) -> Page<BestCombination> {
    let events = eligible_events(events, filters);
    let mut items: Vec<_> = best_combinations(&events)
        .into_iter()
        .filter(|c| filters.rating_range.contains(c.rating))
        .filter(|c| c.best_prices.iter().any(|p| filters.odds_range.contains(*p)))
        .collect();

    items.sort_by(|a, b| b.rating.cmp(&a.rating));

    debug!(
        events = events.len(),
        combinations = items.len(),
        "three-way pipeline run"
    );
    paginate(items, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_clamps_page_index() {
        let items: Vec<u32> = (0..25).collect();

        let page = paginate(items.clone(), 0);
        assert_eq!(page.page_index, 1);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.items.len(), PAGE_SIZE);

        let page = paginate(items.clone(), 99);
        assert_eq!(page.page_index, 3);
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);

        let page = paginate(items, 2);
        assert_eq!(page.items[0], 10);
    }

    #[test]
    fn paginate_empty_input_is_well_formed() {
        let page = paginate(Vec::<u32>::new(), 5);
        assert_eq!(page.page_index, 1);
        assert_eq!(page.page_count, 0);
        assert_eq!(page.total_count, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn empty_bookmaker_selection_yields_no_events() {
        let filters = FilterState::default();
        assert!(eligible_events(&[], &filters).is_empty());
    }
}
