//! Arbitrage economics: lay pricing, dutching, and the normalized rating.
//!
//! Everything here is a pure function over `Decimal` inputs. A rating of 100
//! is break-even; above 100 the evaluated combination locks in a profit at
//! the evaluated stake, below 100 a loss.
//!
//! Commission is subtracted as a flat value from the lay price rather than
//! applied as a percentage of net winnings. This is not the standard exchange
//! commission model; ratings are only comparable under this exact formula.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

/// Stake used when normalizing ratings across outcomes and bookmakers.
pub const DEFAULT_STAKE: Decimal = dec!(100);

/// Exchange commission used when normalizing ratings.
pub const DEFAULT_COMMISSION: Decimal = dec!(0.05);

/// Rating at which a combination neither wins nor loses.
pub const BREAK_EVEN_RATING: Decimal = dec!(100);

const HUNDRED: Decimal = dec!(100);

/// Round to 2 decimal places, half away from zero, for display and
/// comparison stability.
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Result of pricing a back bet at a bookmaker against a lay bet at the
/// exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayPricing {
    /// Stake to place on the lay side so both legs pay out equally.
    pub lay_stake: Decimal,
    /// Amount at risk on the exchange if the back bet wins.
    pub liability: Decimal,
    /// Guaranteed profit (or loss, if negative) across both legs.
    pub profit: Decimal,
    /// Normalized score: 100 + profit per unit staked, in percent.
    pub rating: Decimal,
}

/// Price a bookmaker back bet hedged by an exchange lay bet.
///
/// Inputs are assumed valid (`back_price > 1`, `lay_price > commission_rate`,
/// `stake > 0`); the live recalculation boundary validates user-typed values
/// before calling in. All outputs are rounded to 2 decimal places.
pub fn price_lay_arbitrage(
    stake: Decimal,
    commission_rate: Decimal,
    back_price: Decimal,
    lay_price: Decimal,
) -> LayPricing {
    let effective_lay = lay_price - commission_rate;
    let lay_stake = stake * back_price / effective_lay;
    let liability = lay_stake * lay_price - lay_stake;
    let profit = (back_price - Decimal::ONE) * stake - (lay_price - Decimal::ONE) * lay_stake;
    let rating = BREAK_EVEN_RATING + profit / stake * HUNDRED;

    LayPricing {
        lay_stake: round2(lay_stake),
        liability: round2(liability),
        profit: round2(profit),
        rating: round2(rating),
    }
}

/// Normalized rating for a single (bookmaker, outcome) price against the
/// reference exchange price, using fixed defaults so scores are comparable
/// regardless of the stake a user eventually chooses.
pub fn single_outcome_rating(back_price: Decimal, reference_price: Decimal) -> Decimal {
    price_lay_arbitrage(DEFAULT_STAKE, DEFAULT_COMMISSION, back_price, reference_price).rating
}

/// Result of a three-outcome dutching allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DutchPricing {
    /// Stake per slot: a fixed base of 100 on slot 0, the other two scaled
    /// to equalize payout.
    pub stakes: [Decimal; 3],
    pub total_stake: Decimal,
    /// Payout minus total stake, identical whichever outcome occurs.
    pub profit: Decimal,
    pub rating: Decimal,
}

/// Dutch a three-outcome market with a fixed base stake of 100 on slot 0.
///
/// Inputs are assumed > 1; outputs rounded to 2 decimal places.
pub fn dutch_three(price0: Decimal, price1: Decimal, price2: Decimal) -> DutchPricing {
    let base = DEFAULT_STAKE;
    let stake1 = base * price0 / price1;
    let stake2 = base * price0 / price2;
    let total_stake = base + stake1 + stake2;
    let profit = price0 * base - total_stake;
    let rating = BREAK_EVEN_RATING + profit / total_stake * HUNDRED;

    DutchPricing {
        stakes: [base, round2(stake1), round2(stake2)],
        total_stake: round2(total_stake),
        profit: round2(profit),
        rating: round2(rating),
    }
}
