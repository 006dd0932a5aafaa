use std::io::{self, BufRead, Write};
use std::sync::Arc;

use hindsight_core::{
    apply, AlphaVantageSource, Direction, GameSession, GuessError, GuessResult, Verdict,
};

use crate::chart::TerminalChart;
use crate::cli::Cli;
use crate::error::CliError;

pub async fn run(cli: Cli) -> Result<(), CliError> {
    let api_key = cli
        .api_key
        .or_else(|| std::env::var("ALPHAVANTAGE_API_KEY").ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or(CliError::MissingApiKey)?;

    let mut session = GameSession::new(Arc::new(AlphaVantageSource::default()));
    if let Some(seed) = cli.seed {
        session = session.with_rng(fastrand::Rng::with_seed(seed));
    }
    let mut chart = TerminalChart::new(cli.chart_height);

    start_game(&mut session, &mut chart, &cli.symbol, &api_key).await?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("[u]p  [d]own  [e]nd  [n]ew SYMBOL  [q]uit > ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "u" | "up" => handle_guess(&mut session, &mut chart, Direction::Up),
            "d" | "down" => handle_guess(&mut session, &mut chart, Direction::Down),
            "e" | "end" => {
                session.end();
                println!("Game ended. Final score: {}", session.score());
            }
            "q" | "quit" | "exit" => break,
            "" => {}
            _ => {
                if let Some(symbol) = input
                    .strip_prefix("n ")
                    .or_else(|| input.strip_prefix("new "))
                {
                    apply(&mut chart, &session.reset());
                    if let Err(error) =
                        start_game(&mut session, &mut chart, symbol.trim(), &api_key).await
                    {
                        eprintln!("error: {error}");
                    }
                } else {
                    println!("unrecognized input '{input}'");
                }
            }
        }
    }

    Ok(())
}

async fn start_game(
    session: &mut GameSession,
    chart: &mut TerminalChart,
    symbol: &str,
    api_key: &str,
) -> Result<(), CliError> {
    let outcome = session.start(symbol, api_key).await?;
    apply(chart, &outcome.chart);
    println!(
        "Playing {}. Current day: {}. Score: 0",
        outcome.symbol, outcome.display_day
    );
    println!("Will the next day's close go up or down?");
    Ok(())
}

fn handle_guess(session: &mut GameSession, chart: &mut TerminalChart, direction: Direction) {
    match session.guess(direction) {
        Err(GuessError::NotActive) => {
            println!("No game is active; start one with 'n SYMBOL'.");
        }
        Ok(GuessResult::Exhausted) => {
            println!(
                "No more data to continue. The game has ended. Final score: {}",
                session.score()
            );
        }
        Ok(GuessResult::Revealed {
            outcome,
            chart: command,
        }) => {
            apply(chart, &command);
            let verdict = match outcome.verdict {
                Verdict::Correct => "Correct!",
                Verdict::Incorrect => "Incorrect.",
                Verdict::Unchanged => "Unchanged.",
            };
            let sign = if outcome.delta >= 0.0 { "+" } else { "" };
            println!(
                "{verdict} {}: {:.2} (Δ {sign}{:.2})  score: {}",
                outcome.day,
                outcome.close,
                outcome.delta,
                session.score()
            );
        }
    }
}
