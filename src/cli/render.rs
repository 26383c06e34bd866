//! Terminal rendering for pipeline pages and priced slips.

use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::domain::{
    BestCombination, DutchPricing, DutchSlip, LayPricing, LaySlip, Page, RatedCandidate,
    BREAK_EVEN_RATING,
};
use crate::error::Result;

fn colored_rating(rating: Decimal) -> String {
    if rating >= BREAK_EVEN_RATING {
        rating.green().to_string()
    } else {
        rating.red().to_string()
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_page_footer<T>(page: &Page<T>) {
    if page.is_empty() {
        println!("no results");
    } else {
        println!(
            "page {}/{} ({} results)",
            page.page_index, page.page_count, page.total_count
        );
    }
}

#[derive(Tabled)]
struct TwoWayRow {
    #[tabled(rename = "Fixture")]
    fixture: String,
    #[tabled(rename = "Kickoff")]
    kickoff: String,
    #[tabled(rename = "Slot")]
    slot: usize,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Back")]
    back: Decimal,
    #[tabled(rename = "Lay")]
    lay: Decimal,
    #[tabled(rename = "Rating")]
    rating: String,
}

pub fn two_way_page(page: &Page<RatedCandidate>, json: bool) -> Result<()> {
    if json {
        return print_json(page);
    }

    let rows: Vec<TwoWayRow> = page
        .items
        .iter()
        .map(|c| TwoWayRow {
            fixture: c.event.to_string(),
            kickoff: c.event.commence_time.format("%Y-%m-%d %H:%M").to_string(),
            slot: c.slot,
            bookmaker: c.bookmaker.clone(),
            back: c.price,
            lay: c.reference_price,
            rating: colored_rating(c.rating),
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }
    print_page_footer(page);
    Ok(())
}

#[derive(Tabled)]
struct ThreeWayRow {
    #[tabled(rename = "Fixture")]
    fixture: String,
    #[tabled(rename = "Kickoff")]
    kickoff: String,
    #[tabled(rename = "Bookmakers")]
    bookmakers: String,
    #[tabled(rename = "Best prices")]
    best_prices: String,
    #[tabled(rename = "Total stake")]
    total_stake: Decimal,
    #[tabled(rename = "Profit")]
    profit: Decimal,
    #[tabled(rename = "Rating")]
    rating: String,
}

pub fn three_way_page(page: &Page<BestCombination>, json: bool) -> Result<()> {
    if json {
        return print_json(page);
    }

    let rows: Vec<ThreeWayRow> = page
        .items
        .iter()
        .map(|c| ThreeWayRow {
            fixture: c.event.to_string(),
            kickoff: c.event.commence_time.format("%Y-%m-%d %H:%M").to_string(),
            bookmakers: c.bookmakers.join(", "),
            best_prices: format!(
                "{} / {} / {}",
                c.best_prices[0], c.best_prices[1], c.best_prices[2]
            ),
            total_stake: c.total_stake,
            profit: c.profit,
            rating: colored_rating(c.rating),
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }
    print_page_footer(page);
    Ok(())
}

#[derive(Serialize)]
struct LayReport<'a> {
    slip: &'a LaySlip,
    pricing: &'a LayPricing,
}

pub fn lay_pricing(slip: &LaySlip, pricing: &LayPricing, json: bool) -> Result<()> {
    if json {
        return print_json(&LayReport { slip, pricing });
    }

    println!(
        "back {} @ {}  /  lay @ {} (commission {})",
        slip.stake, slip.back_price, slip.lay_price, slip.commission_rate
    );
    println!("lay stake  {}", pricing.lay_stake);
    println!("liability  {}", pricing.liability);
    println!("profit     {}", pricing.profit);
    println!("rating     {}", colored_rating(pricing.rating));
    Ok(())
}

#[derive(Serialize)]
struct DutchReport<'a> {
    slip: &'a DutchSlip,
    pricing: &'a DutchPricing,
}

pub fn dutch_pricing(slip: &DutchSlip, pricing: &DutchPricing, json: bool) -> Result<()> {
    if json {
        return print_json(&DutchReport { slip, pricing });
    }

    for (slot, (price, stake)) in slip.prices.iter().zip(pricing.stakes.iter()).enumerate() {
        println!("slot {slot}: {stake} @ {price}");
    }
    println!("total stake  {}", pricing.total_stake);
    println!("profit       {}", pricing.profit);
    println!("rating       {}", colored_rating(pricing.rating));
    Ok(())
}
