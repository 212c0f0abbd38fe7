use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::{BetConfig, MachineConfig},
    engine::spin_once,
    error::{EngineError, EngineResult},
    symbols::Symbol,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimulationReport {
    pub spins: u64,
    pub total_staked: u64,
    pub total_won: u64,
    /// Return to player: total won / total staked.
    pub rtp: f64,
    /// Share of spins with at least one winning line.
    pub hit_rate: f64,
    /// Wins per 1-based line number.
    pub line_hits: BTreeMap<usize, u64>,
    /// How many grid cells showed each symbol.
    pub symbol_counts: BTreeMap<Symbol, u64>,
}

/// Plays `spins` rounds with the same bet and aggregates the results.
pub fn simulate<R: Rng>(
    rng: &mut R,
    config: &MachineConfig,
    bet: BetConfig,
    spins: u64,
) -> EngineResult<SimulationReport> {
    config.validate()?;
    let mut report = SimulationReport {
        spins,
        ..Default::default()
    };
    let mut hits = 0u64;

    for _ in 0..spins {
        let outcome = spin_once(rng, config, bet)?;
        report.total_staked = report
            .total_staked
            .checked_add(outcome.stake)
            .ok_or(EngineError::PayoutOverflow)?;
        report.total_won = report
            .total_won
            .checked_add(outcome.winnings())
            .ok_or(EngineError::PayoutOverflow)?;
        if outcome.payout.is_win() {
            hits += 1;
        }
        for line in outcome.winning_lines() {
            *report.line_hits.entry(*line).or_default() += 1;
        }
        for column in outcome.grid.columns() {
            for symbol in column {
                *report.symbol_counts.entry(*symbol).or_default() += 1;
            }
        }
    }

    if report.total_staked > 0 {
        report.rtp = report.total_won as f64 / report.total_staked as f64;
    }
    if spins > 0 {
        report.hit_rate = hits as f64 / spins as f64;
    }
    info!(
        spins,
        rtp = report.rtp,
        hit_rate = report.hit_rate,
        "simulation finished"
    );
    Ok(report)
}
