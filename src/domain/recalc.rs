//! Live recalculation over a single selected candidate or combination.
//!
//! A slip holds the already-fetched prices plus user-editable inputs; every
//! change re-runs the rating calculator synchronously against the held
//! values. No re-fetch, no dependency on the quote store, never writes back
//! into cached data. This is the only place user-typed numbers enter the
//! engine, so inputs are validated here.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::DomainError;

use super::combination::BestCombination;
use super::matcher::RatedCandidate;
use super::rating::{dutch_three, price_lay_arbitrage, DutchPricing, LayPricing};

fn validate_price(price: Decimal) -> Result<(), DomainError> {
    if price <= Decimal::ONE {
        return Err(DomainError::InvalidPrice { price });
    }
    Ok(())
}

/// Editable inputs for a two-way (back/lay) recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaySlip {
    pub stake: Decimal,
    pub commission_rate: Decimal,
    pub back_price: Decimal,
    pub lay_price: Decimal,
}

impl LaySlip {
    pub fn new(
        stake: Decimal,
        commission_rate: Decimal,
        back_price: Decimal,
        lay_price: Decimal,
    ) -> Self {
        Self {
            stake,
            commission_rate,
            back_price,
            lay_price,
        }
    }

    /// Seed a slip from a pipeline candidate and the caller's defaults.
    pub fn from_candidate(
        candidate: &RatedCandidate,
        stake: Decimal,
        commission_rate: Decimal,
    ) -> Self {
        Self::new(
            stake,
            commission_rate,
            candidate.price,
            candidate.reference_price,
        )
    }

    /// Validate the current inputs and price them.
    pub fn price(&self) -> Result<LayPricing, DomainError> {
        if self.stake <= Decimal::ZERO {
            return Err(DomainError::InvalidStake { stake: self.stake });
        }
        validate_price(self.back_price)?;
        validate_price(self.lay_price)?;
        if self.lay_price <= self.commission_rate {
            return Err(DomainError::CommissionTooHigh {
                commission: self.commission_rate,
                lay_price: self.lay_price,
            });
        }
        Ok(price_lay_arbitrage(
            self.stake,
            self.commission_rate,
            self.back_price,
            self.lay_price,
        ))
    }

    pub fn set_stake(&mut self, stake: Decimal) -> Result<LayPricing, DomainError> {
        self.stake = stake;
        self.price()
    }

    pub fn set_commission(&mut self, commission_rate: Decimal) -> Result<LayPricing, DomainError> {
        self.commission_rate = commission_rate;
        self.price()
    }

    pub fn set_back_price(&mut self, back_price: Decimal) -> Result<LayPricing, DomainError> {
        self.back_price = back_price;
        self.price()
    }

    pub fn set_lay_price(&mut self, lay_price: Decimal) -> Result<LayPricing, DomainError> {
        self.lay_price = lay_price;
        self.price()
    }
}

/// Editable inputs for a three-way dutching recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DutchSlip {
    pub prices: [Decimal; 3],
}

impl DutchSlip {
    pub fn new(prices: [Decimal; 3]) -> Self {
        Self { prices }
    }

    /// Seed a slip from a pipeline combination's best slot prices.
    pub fn from_combination(combination: &BestCombination) -> Self {
        Self::new(combination.best_prices)
    }

    pub fn price(&self) -> Result<DutchPricing, DomainError> {
        for price in self.prices {
            validate_price(price)?;
        }
        Ok(dutch_three(self.prices[0], self.prices[1], self.prices[2]))
    }

    pub fn set_price(&mut self, slot: usize, price: Decimal) -> Result<DutchPricing, DomainError> {
        let current = self
            .prices
            .get_mut(slot)
            .ok_or(DomainError::InvalidSlot { slot })?;
        *current = price;
        self.price()
    }
}
