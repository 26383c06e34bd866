//! Layline - odds arbitrage matching and rating for sports betting markets.
//!
//! Given head-to-head price quotes from multiple bookmakers for the same
//! event, layline computes whether combining bets across bookmakers (or
//! between a bookmaker and a betting exchange) yields a risk-reduced or
//! guaranteed return, ranks opportunities by a normalized rating (100 =
//! break-even), and reprices a selected opportunity with user-supplied
//! stake, commission, and odds.
//!
//! # Architecture
//!
//! Data flows one direction: quote store → matchers → pipeline →
//! presentation. Live recalculation branches off one selected item and never
//! touches cached data.
//!
//! - [`store`] - snapshot cache with single-flight, cancellable refresh
//! - [`domain`] - the engine: rating calculator, two-way matcher, three-way
//!   combination search, filter/rank/paginate pipeline, recalculation slips
//! - [`provider`] - the odds provider boundary and The Odds API client
//! - [`config`] - TOML configuration with logging setup
//! - [`error`] - error types for the crate
//! - [`cli`] - command-line interface
//!
//! # Example
//!
//! ```
//! use layline::domain::{price_lay_arbitrage, single_outcome_rating};
//! use rust_decimal_macros::dec;
//!
//! let pricing = price_lay_arbitrage(dec!(100), dec!(0.05), dec!(2.00), dec!(1.90));
//! assert_eq!(pricing.rating, dec!(102.70));
//! assert_eq!(single_outcome_rating(dec!(2.00), dec!(1.90)), pricing.rating);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod provider;
pub mod store;
