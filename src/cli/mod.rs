//! CLI entry points: argument parsing, command dispatch, rendering.

mod command;
mod render;

pub use command::{Cli, Commands, ConfigCommand, DutchArgs, FilterArgs, LayArgs};

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::{self, DutchSlip, LaySlip};
use crate::error::{Error, Result};
use crate::provider::OddsApiClient;
use crate::store::QuoteStore;

/// Dispatch a parsed CLI invocation.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    config.init_logging();

    match cli.command {
        Commands::Scan(args) => scan(&config, &args, cli.json).await,
        Commands::Combos(args) => combos(&config, &args, cli.json).await,
        Commands::Lay(args) => lay(&config, &args, cli.json),
        Commands::Dutch(args) => dutch(&args, cli.json),
        Commands::Config(cmd) => config_command(&config, &cmd, cli.json),
    }
}

fn build_store(config: &Config) -> Result<QuoteStore> {
    let api_key = config.api_key()?;
    let client = OddsApiClient::new(&config.provider, api_key);
    Ok(QuoteStore::new(Arc::new(client)))
}

fn bookmaker_keys(events: &[domain::Event]) -> BTreeSet<String> {
    events
        .iter()
        .flat_map(|e| e.quotes.iter())
        .map(|q| q.bookmaker.clone())
        .collect()
}

async fn scan(config: &Config, args: &FilterArgs, json: bool) -> Result<()> {
    let store = build_store(config)?;
    let snapshot = store.refresh().await.map_err(Error::Provider)?;

    let filters = args.to_filter_state(bookmaker_keys(&snapshot));
    let page = domain::apply_two_way(
        &snapshot,
        &config.engine.reference_bookmaker,
        &filters,
        args.page,
    );
    render::two_way_page(&page, json)
}

async fn combos(config: &Config, args: &FilterArgs, json: bool) -> Result<()> {
    let store = build_store(config)?;
    let snapshot = store.refresh().await.map_err(Error::Provider)?;

    let filters = args.to_filter_state(bookmaker_keys(&snapshot));
    let page = domain::apply_three_way(&snapshot, &filters, args.page);
    render::three_way_page(&page, json)
}

fn lay(config: &Config, args: &LayArgs, json: bool) -> Result<()> {
    let slip = LaySlip::new(
        args.stake.unwrap_or(config.engine.default_stake),
        args.commission.unwrap_or(config.engine.default_commission),
        args.back,
        args.lay,
    );
    let pricing = slip.price()?;
    render::lay_pricing(&slip, &pricing, json)
}

fn dutch(args: &DutchArgs, json: bool) -> Result<()> {
    let slip = DutchSlip::new([args.price0, args.price1, args.price2]);
    let pricing = slip.price()?;
    render::dutch_pricing(&slip, &pricing, json)
}

fn config_command(config: &Config, cmd: &ConfigCommand, json: bool) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                let rendered = toml::to_string_pretty(config)
                    .map_err(crate::error::ConfigError::Serialize)?;
                print!("{rendered}");
            }
            Ok(())
        }
        ConfigCommand::Validate => {
            // Load already validated; reaching here means the file is fine.
            println!("configuration OK");
            Ok(())
        }
    }
}
