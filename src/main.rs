use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use basmalotto::config::{LotteryConfig, RandomizerKind};
use basmalotto::logging::init_tracing;
use basmalotto::lottery::{LotteryEngine, PurchaseOutcome};
use basmalotto::randomizer::{randomizer_for, LocalRandomizer, Randomizer};

/// Play a number-matching lottery from the command line.
#[derive(Debug, Parser)]
#[command(name = "basmalotto", version)]
struct Cli {
    /// Config file (default: <config dir>/basmalotto/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ticket numbers, comma-separated. Repeat for more tickets.
    #[arg(short, long = "ticket", value_name = "N,N,...", value_parser = parse_numbers)]
    tickets: Vec<TicketNumbers>,

    /// Number of purchases to run.
    #[arg(short, long, default_value_t = 1)]
    draws: u32,

    /// Seed the local randomizer for a reproducible session. Rejected for `external`.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured randomizer.
    #[arg(long, value_enum)]
    randomizer: Option<RandomizerKind>,

    /// Print outcomes as JSON lines.
    #[arg(long)]
    json: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => LotteryConfig::load_from(path)?,
        None => LotteryConfig::load()?,
    };
    if let Some(kind) = cli.randomizer {
        config.randomizer = kind;
    }

    let randomizer = build_randomizer(cli.seed, config.randomizer)?;
    let mut engine = LotteryEngine::with_randomizer(config, randomizer)?;

    if !cli.json {
        engine.subscribe(|key, value| println!("  {} = {}", key, value));
    }

    for TicketNumbers(numbers) in &cli.tickets {
        engine
            .add_ticket(numbers)
            .with_context(|| format!("Ticket {:?} rejected", numbers))?;
    }

    for draw in 1..=cli.draws {
        let outcome = engine
            .buy_tickets()
            .with_context(|| format!("Purchase {} failed", draw))?;

        if cli.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            print_outcome(draw, &outcome);
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string(&engine.snapshot())?);
    } else {
        println!("Final balance: {}", engine.balance());
    }

    Ok(())
}

/// Pick the randomizer, honouring `--seed` for the local one.
fn build_randomizer(seed: Option<u64>, kind: RandomizerKind) -> Result<Box<dyn Randomizer>> {
    match (seed, kind) {
        (Some(seed), RandomizerKind::Local) => Ok(Box::new(LocalRandomizer::seeded(seed))),
        (Some(_), RandomizerKind::External) => {
            bail!("--seed only applies to the local randomizer")
        }
        (None, kind) => Ok(randomizer_for(kind)),
    }
}

fn print_outcome(draw: u32, outcome: &PurchaseOutcome) {
    println!(
        "Draw {}: winning numbers {:?}, cost {}",
        draw, outcome.winning_numbers, outcome.cost
    );
    for result in &outcome.results {
        println!(
            "  ticket {:?}: {} match(es), payout {}",
            result.ticket.numbers(),
            result.match_count,
            result.payout
        );
    }
}

/// One `--ticket` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TicketNumbers(Vec<u32>);

fn parse_numbers(raw: &str) -> Result<TicketNumbers, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|e| format!("'{}' is not a ticket number: {}", part, e))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(TicketNumbers)
}
