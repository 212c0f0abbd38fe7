use serde::{Deserialize, Serialize};

use crate::{
    error::{EngineError, EngineResult},
    symbols::SymbolCatalog,
};

pub const DEFAULT_ROWS: usize = 3;
pub const DEFAULT_COLS: usize = 3;
pub const DEFAULT_MAX_LINES: usize = 3;
pub const DEFAULT_MIN_BET: u64 = 10;
pub const DEFAULT_MAX_BET: u64 = 200;

/// Lines played and the amount staked on each of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetConfig {
    pub lines: usize,
    pub bet_per_line: u64,
}

impl BetConfig {
    pub fn new(lines: usize, bet_per_line: u64) -> Self {
        Self {
            lines,
            bet_per_line,
        }
    }

    /// Total wagered on one spin.
    pub fn stake(&self) -> EngineResult<u64> {
        u64::try_from(self.lines)
            .ok()
            .and_then(|lines| lines.checked_mul(self.bet_per_line))
            .ok_or_else(|| EngineError::InvalidBet("stake overflows".into()))
    }
}

/// Everything a machine needs to spin and pay: grid size, bet bounds and symbols.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MachineConfig {
    pub rows: usize,
    pub cols: usize,
    pub max_lines: usize,
    pub min_bet: u64,
    pub max_bet: u64,
    pub catalog: SymbolCatalog,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            max_lines: DEFAULT_MAX_LINES,
            min_bet: DEFAULT_MIN_BET,
            max_bet: DEFAULT_MAX_BET,
            catalog: SymbolCatalog::standard(),
        }
    }
}

impl MachineConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.max_lines == 0 || self.max_lines > self.rows {
            return Err(EngineError::InvalidConfig(format!(
                "max_lines must be within 1..={}, got {}",
                self.rows, self.max_lines
            )));
        }
        if self.min_bet == 0 || self.min_bet > self.max_bet {
            return Err(EngineError::InvalidConfig(format!(
                "bet range {}..={} is empty or starts at zero",
                self.min_bet, self.max_bet
            )));
        }
        self.catalog.validate()?;
        if self.rows > self.catalog.len() {
            return Err(EngineError::DrawExceedsPool {
                requested: self.rows,
                available: self.catalog.len(),
            });
        }
        Ok(())
    }

    pub fn check_bet(&self, bet: &BetConfig) -> EngineResult<()> {
        if bet.lines == 0 || bet.lines > self.max_lines {
            return Err(EngineError::InvalidBet(format!(
                "lines must be within 1..={}, got {}",
                self.max_lines, bet.lines
            )));
        }
        if bet.bet_per_line < self.min_bet || bet.bet_per_line > self.max_bet {
            return Err(EngineError::InvalidBet(format!(
                "bet per line must be within {}..={}, got {}",
                self.min_bet, self.max_bet, bet.bet_per_line
            )));
        }
        bet.stake().map(|_| ())
    }
}
