use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    config::{BetConfig, MachineConfig},
    error::{EngineError, EngineResult},
    grid::Grid,
    paytable::{check_winnings, PayoutResult},
    rng::ProvablyFairRng,
    symbols::{Symbol, SymbolCatalog},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpinOutcome {
    pub grid: Grid,
    pub bet: BetConfig,
    pub stake: u64,
    pub payout: PayoutResult,
}

impl SpinOutcome {
    pub fn winnings(&self) -> u64 {
        self.payout.winnings
    }

    pub fn winning_lines(&self) -> &[usize] {
        &self.payout.winning_lines
    }

    /// Winnings minus stake.
    pub fn net(&self) -> i128 {
        i128::from(self.payout.winnings) - i128::from(self.stake)
    }
}

/// Draws a `rows x cols` grid.
///
/// Every column starts from a fresh copy of the weighted pool. A draw picks a
/// pool slot uniformly and then removes every copy of that symbol, so a column
/// never repeats a symbol while heavier symbols still land more often.
pub fn spin_grid<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    catalog: &SymbolCatalog,
) -> EngineResult<Grid> {
    if rows == 0 || cols == 0 {
        return Err(EngineError::InvalidDimensions { rows, cols });
    }
    catalog.validate()?;
    if rows > catalog.len() {
        return Err(EngineError::DrawExceedsPool {
            requested: rows,
            available: catalog.len(),
        });
    }

    let pool = catalog.pool();
    let mut columns = Vec::with_capacity(cols);
    for col in 0..cols {
        let mut remaining = pool.clone();
        let mut column: Vec<Symbol> = Vec::with_capacity(rows);
        for _ in 0..rows {
            if remaining.is_empty() {
                return Err(EngineError::Sampling(format!(
                    "pool exhausted in column {col}"
                )));
            }
            let picked = remaining[rng.random_range(0..remaining.len())];
            remaining.retain(|s| *s != picked);
            column.push(picked);
        }
        trace!(col, ?column, "drew column");
        columns.push(column);
    }
    Grid::from_columns(columns)
}

pub fn spin_once<R: Rng>(
    rng: &mut R,
    config: &MachineConfig,
    bet: BetConfig,
) -> EngineResult<SpinOutcome> {
    config.check_bet(&bet)?;
    let stake = bet.stake()?;
    let grid = spin_grid(rng, config.rows, config.cols, &config.catalog)?;
    let payout = check_winnings(&grid, bet.lines, bet.bet_per_line, &config.catalog)?;
    debug!(
        lines = bet.lines,
        bet_per_line = bet.bet_per_line,
        stake,
        winnings = payout.winnings,
        "spin complete"
    );
    Ok(SpinOutcome {
        grid,
        bet,
        stake,
        payout,
    })
}

/// Convenience: perform a spin creating the RNG from seeds.
pub fn spin_with_seeds(
    server_seed: &str,
    client_seed: &str,
    nonce: u64,
    config: &MachineConfig,
    bet: BetConfig,
) -> EngineResult<SpinOutcome> {
    let mut rng = ProvablyFairRng::new(server_seed, client_seed, nonce);
    spin_once(&mut rng, config, bet)
}

/// Verify that a given grid matches what the RNG would produce for the seeds.
pub fn verify_grid(
    server_seed: &str,
    client_seed: &str,
    nonce: u64,
    config: &MachineConfig,
    expected: &Grid,
) -> EngineResult<bool> {
    let mut rng = ProvablyFairRng::new(server_seed, client_seed, nonce);
    let actual = spin_grid(&mut rng, config.rows, config.cols, &config.catalog)?;
    Ok(&actual == expected)
}
