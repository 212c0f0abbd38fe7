mod input;
mod play;
mod session;

use std::io;

use clap::{Args, Parser, Subcommand};
use reelspin_core::{
    config::{DEFAULT_MAX_BET, DEFAULT_MAX_LINES, DEFAULT_MIN_BET},
    derive_hash_hex, simulate, verify_grid, BetConfig, Grid, MachineConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::session::SpinRng;

#[derive(Parser)]
#[command(name = "reelspin", about = "Three-reel line slot machine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Most lines a player may bet on
    #[arg(long, global = true, env = "REELSPIN_MAX_LINES", default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,
    /// Smallest bet per line
    #[arg(long, global = true, env = "REELSPIN_MIN_BET", default_value_t = DEFAULT_MIN_BET)]
    min_bet: u64,
    /// Largest bet per line
    #[arg(long, global = true, env = "REELSPIN_MAX_BET", default_value_t = DEFAULT_MAX_BET)]
    max_bet: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (the default)
    Play {
        #[command(flatten)]
        seeds: SeedArgs,
    },
    /// Run many spins with one bet and report payout statistics
    Simulate {
        #[arg(long, default_value_t = 10_000)]
        spins: u64,
        #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
        lines: usize,
        #[arg(long, default_value_t = DEFAULT_MIN_BET)]
        bet: u64,
        #[command(flatten)]
        seeds: SeedArgs,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a grid (e.g. ABC,ADB,ACD, one group per column) against its seeds
    Verify {
        #[arg(long)]
        server_seed: String,
        #[arg(long)]
        client_seed: String,
        #[arg(long)]
        nonce: u64,
        #[arg(long)]
        grid: Grid,
    },
}

#[derive(Args, Default)]
struct SeedArgs {
    /// Secret seed for replayable spins
    #[arg(long, requires = "client_seed")]
    server_seed: Option<String>,
    /// Player seed mixed into every spin
    #[arg(long, requires = "server_seed")]
    client_seed: Option<String>,
}

impl SeedArgs {
    fn into_rng(self) -> SpinRng {
        match (self.server_seed, self.client_seed) {
            (Some(server), Some(client)) => SpinRng::seeded(server, client),
            _ => SpinRng::entropy(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MachineConfig {
        max_lines: cli.max_lines,
        min_bet: cli.min_bet,
        max_bet: cli.max_bet,
        ..MachineConfig::default()
    };
    config.validate()?;

    match cli.command.unwrap_or(Commands::Play {
        seeds: SeedArgs::default(),
    }) {
        Commands::Play { seeds } => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            play::run(&mut stdin.lock(), &mut stdout.lock(), &config, seeds.into_rng())?;
        }
        Commands::Simulate {
            spins,
            lines,
            bet,
            seeds,
            json,
        } => {
            let mut rng = seeds.into_rng();
            let report = simulate(&mut rng, &config, BetConfig::new(lines, bet), spins)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("spins:        {}", report.spins);
                println!("total staked: ${}", report.total_staked);
                println!("total won:    ${}", report.total_won);
                println!("rtp:          {:.4}", report.rtp);
                println!("hit rate:     {:.4}", report.hit_rate);
                for (line, hits) in &report.line_hits {
                    println!("line {line} hits:  {hits}");
                }
                for (symbol, count) in &report.symbol_counts {
                    println!("symbol {symbol}:     {count}");
                }
            }
        }
        Commands::Verify {
            server_seed,
            client_seed,
            nonce,
            grid,
        } => {
            println!(
                "server seed hash: {}",
                derive_hash_hex(server_seed.as_bytes())
            );
            if verify_grid(&server_seed, &client_seed, nonce, &config, &grid)? {
                info!(nonce, "grid verified");
                println!("grid matches seeds at nonce {nonce}");
            } else {
                anyhow::bail!("grid does not match seeds at nonce {nonce}");
            }
        }
    }

    Ok(())
}
