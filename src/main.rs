use clap::Parser;
use layline::cli::{self, Cli};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let code = tokio::select! {
        result = cli::run(cli) => match result {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("error: {e}");
                1
            }
        },
        _ = signal::ctrl_c() => {
            info!("shutdown signal received");
            130
        }
    };

    std::process::exit(code);
}
