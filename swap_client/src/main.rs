//! Swap Client — a terminal front-end for the currency swap form. It fetches the
//! price feed once at start-up, collapses duplicate quotes, and then either performs
//! a single conversion given on the command line or reads form edits from stdin.
//!
//! Usage example (CLI):
//! ```bash
//! swap_client --from ETH --to USDC --amount 1.5
//! swap_client --feed-url http://localhost:8000/prices.json
//! ```
//!
//! In interactive mode type `help` for the list of commands.
#![warn(missing_docs)]
mod args;
mod command;
mod view;

use crate::args::Args;
use crate::command::{Command, USAGE};
use clap::Parser;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use swap_common::{
    FeedConfig, FeedStatus, HttpPriceFeed, PriceFeed, PriceSession, Result, SwapError, SwapForm,
};

/// Exit status when a one-shot conversion fails.
const EXIT_CONVERSION_FAILED: u8 = 1;
/// Exit status when the price feed could not be loaded.
const EXIT_FEED_FAILED: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, SwapError> {
    init_logger();
    let args = Args::parse();

    let feed = HttpPriceFeed::new(FeedConfig {
        url: args.feed_url.trim().to_string(),
    });
    let mut session = PriceSession::new(args.dedup);

    println!("{}", view::render_status(&FeedStatus::Loading));
    session.refresh(&feed).await;
    if let Some(code) = load_failure(&session) {
        eprintln!("{}", view::render_status(session.status()));
        return Ok(ExitCode::from(code));
    }
    info!("{} currencies available", session.prices().len());

    let mut form = SwapForm::new();
    if args.is_one_shot() {
        form.set_from_symbol(args.from.as_deref().unwrap_or_default());
        form.set_to_symbol(args.to.as_deref().unwrap_or_default());
        form.set_from_amount_text(args.amount.as_deref().unwrap_or_default());
        let converted = form.submit(session.prices());
        println!("{}", view::render_form(&form));
        return Ok(match converted {
            Some(_) => ExitCode::SUCCESS,
            None => ExitCode::from(EXIT_CONVERSION_FAILED),
        });
    }

    run_interactive(&feed, &mut session, &mut form).await?;
    Ok(ExitCode::SUCCESS)
}

/// Exit status to stop with if the price feed could not be loaded.
fn load_failure(session: &PriceSession) -> Option<u8> {
    session.error().map(|_| EXIT_FEED_FAILED)
}

/// Reads one command per stdin line until `quit` or end of input.
async fn run_interactive(
    feed: &dyn PriceFeed,
    session: &mut PriceSession,
    form: &mut SwapForm,
) -> Result<(), SwapError> {
    println!("{}", USAGE);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        debug!("Command: {:?}", command);

        match command {
            Command::Set(side, symbol) => form.set_symbol(side, &symbol),
            Command::Pick(side, symbol) => form.pick_symbol(side, &symbol),
            Command::Amount(text) => form.set_from_amount_text(&text),
            Command::Submit => {
                form.submit(session.prices());
                println!("{}", view::render_form(form));
            }
            Command::List => println!("{}", view::render_prices(session.prices())),
            Command::Refresh => {
                let status = session.refresh(feed).await;
                println!("{}", view::render_status(status));
            }
            Command::Show => println!("{}", view::render_form(form)),
            Command::Help => println!("{}", USAGE),
            Command::Quit => break,
        }
    }
    info!("Client stopping...");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use swap_common::{DedupPolicy, Quote};

    #[test]
    fn failed_initial_load_exits_non_zero() {
        let mut session = PriceSession::new(DedupPolicy::default());
        let ticket = session.begin_fetch();
        session.complete_fetch(ticket, Err(SwapError::Io(io::Error::other("feed down"))));

        assert_eq!(load_failure(&session), Some(EXIT_FEED_FAILED));
    }

    #[test]
    fn loaded_session_continues() {
        let mut session = PriceSession::new(DedupPolicy::default());
        let ticket = session.begin_fetch();
        session.complete_fetch(ticket, Ok(vec![Quote::new("ETH", 1600.0)]));

        assert_eq!(load_failure(&session), None);
    }
}
