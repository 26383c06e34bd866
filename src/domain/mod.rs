//! Provider-agnostic engine logic.

mod combination;
mod event;
mod filter;
mod matcher;
mod pipeline;
mod rating;
mod recalc;

// Core quote types
pub use event::{BookmakerQuote, Event, EventId, Market, Outcome, H2H_MARKET_KEY};

// Rating calculator
pub use rating::{
    dutch_three, price_lay_arbitrage, single_outcome_rating, DutchPricing, LayPricing,
    BREAK_EVEN_RATING, DEFAULT_COMMISSION, DEFAULT_STAKE,
};

// Matchers
pub use combination::{best_combination, best_combinations, BestCombination};
pub use matcher::{match_all, match_event, RatedCandidate};

// Pipeline
pub use filter::{DateRange, FilterState, OddsRange, RatingRange};
pub use pipeline::{apply_three_way, apply_two_way, Page, PAGE_SIZE};

// Live recalculation
pub use recalc::{DutchSlip, LaySlip};
