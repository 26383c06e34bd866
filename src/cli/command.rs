//! Command-line interface definitions.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::{DateRange, FilterState, OddsRange, RatingRange};

/// Odds arbitrage matching and rating engine
#[derive(Parser, Debug)]
#[command(name = "layline")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "layline.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch quotes and rank two-way (back/lay) candidates
    Scan(FilterArgs),

    /// Fetch quotes and rank three-way dutching combinations
    Combos(FilterArgs),

    /// Price a single back/lay pair with explicit inputs
    Lay(LayArgs),

    /// Price a three-outcome dutching allocation
    Dutch(DutchArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Filter flags shared by `scan` and `combos`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive fixture search ("{home} vs {away}")
    #[arg(long)]
    pub search: Option<String>,

    /// Earliest kickoff date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest kickoff date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Comma-separated bookmaker keys; defaults to every bookmaker in the
    /// snapshot
    #[arg(long, value_delimiter = ',')]
    pub bookmakers: Vec<String>,

    #[arg(long)]
    pub min_rating: Option<Decimal>,

    #[arg(long)]
    pub max_rating: Option<Decimal>,

    #[arg(long)]
    pub min_odds: Option<Decimal>,

    #[arg(long)]
    pub max_odds: Option<Decimal>,

    /// 1-based result page
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl FilterArgs {
    /// Build the pipeline's filter state, falling back to `all_bookmakers`
    /// when no restriction flag was given.
    pub fn to_filter_state(&self, all_bookmakers: BTreeSet<String>) -> FilterState {
        let defaults_rating = RatingRange::default();
        let defaults_odds = OddsRange::default();

        FilterState {
            search_term: self.search.clone().unwrap_or_default(),
            date_range: DateRange {
                start: self.from,
                end: self.to,
            },
            rating_range: RatingRange {
                min: self.min_rating.unwrap_or(defaults_rating.min),
                max: self.max_rating.unwrap_or(defaults_rating.max),
            },
            odds_range: OddsRange {
                min: self.min_odds.unwrap_or(defaults_odds.min),
                max: self.max_odds.unwrap_or(defaults_odds.max),
            },
            selected_bookmakers: if self.bookmakers.is_empty() {
                all_bookmakers
            } else {
                self.bookmakers.iter().cloned().collect()
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct LayArgs {
    /// Back stake; defaults to engine.default_stake
    #[arg(long)]
    pub stake: Option<Decimal>,

    /// Exchange commission; defaults to engine.default_commission
    #[arg(long)]
    pub commission: Option<Decimal>,

    /// Bookmaker back price
    #[arg(long)]
    pub back: Decimal,

    /// Exchange lay price
    #[arg(long)]
    pub lay: Decimal,
}

#[derive(Args, Debug)]
pub struct DutchArgs {
    /// Best price for outcome slot 0
    pub price0: Decimal,

    /// Best price for outcome slot 1
    pub price1: Decimal,

    /// Best price for outcome slot 2
    pub price2: Decimal,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate the configuration file
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_args_default_to_contract_windows() {
        let state = FilterArgs::default().to_filter_state(BTreeSet::new());
        assert_eq!(state.rating_range, RatingRange::default());
        assert_eq!(state.odds_range, OddsRange::default());
        assert!(state.selected_bookmakers.is_empty());
    }

    #[test]
    fn explicit_bookmakers_override_snapshot_set() {
        let args = FilterArgs {
            bookmakers: vec!["bet365".into()],
            ..FilterArgs::default()
        };
        let all: BTreeSet<String> = ["bet365".to_string(), "unibet".to_string()].into();
        let state = args.to_filter_state(all);
        assert_eq!(state.selected_bookmakers.len(), 1);
        assert!(state.selected_bookmakers.contains("bet365"));
    }

    #[test]
    fn partial_window_flags_keep_other_bound_default() {
        let args = FilterArgs {
            min_rating: Some(dec!(101)),
            ..FilterArgs::default()
        };
        let state = args.to_filter_state(BTreeSet::new());
        assert_eq!(state.rating_range.min, dec!(101));
        assert_eq!(state.rating_range.max, dec!(200));
    }
}
