use rand::{rngs::ThreadRng, RngCore};
use reelspin_core::{spin_once, BetConfig, EngineError, MachineConfig, ProvablyFairRng, SpinOutcome};
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("Insufficient balance! Your current balance is ${balance}.")]
    InsufficientBalance { balance: u64, stake: u64 },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Randomness behind a session: fresh OS entropy, or a replayable seeded stream.
pub enum SpinRng {
    Entropy(ThreadRng),
    Seeded(ProvablyFairRng),
}

impl SpinRng {
    pub fn entropy() -> Self {
        SpinRng::Entropy(rand::rng())
    }

    pub fn seeded(server_seed: impl Into<String>, client_seed: impl Into<String>) -> Self {
        SpinRng::Seeded(ProvablyFairRng::new(server_seed, client_seed, 1))
    }

    /// Nonce of the next spin, for seeded streams.
    pub fn nonce(&self) -> Option<u64> {
        match self {
            SpinRng::Entropy(_) => None,
            SpinRng::Seeded(rng) => Some(rng.nonce()),
        }
    }

    pub fn server_seed_hash_hex(&self) -> Option<String> {
        match self {
            SpinRng::Entropy(_) => None,
            SpinRng::Seeded(rng) => Some(rng.server_seed_hash_hex()),
        }
    }

    fn advance(&mut self) {
        if let SpinRng::Seeded(rng) = self {
            rng.next_nonce();
        }
    }
}

impl RngCore for SpinRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            SpinRng::Entropy(rng) => rng.next_u32(),
            SpinRng::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            SpinRng::Entropy(rng) => rng.next_u64(),
            SpinRng::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            SpinRng::Entropy(rng) => rng.fill_bytes(dst),
            SpinRng::Seeded(rng) => rng.fill_bytes(dst),
        }
    }
}

/// A player's balance across rounds. The engine itself never sees money, only
/// bets that this type has already checked against the balance.
pub struct Session {
    balance: u64,
    config: MachineConfig,
    rng: SpinRng,
    rounds: u64,
}

impl Session {
    pub fn new(deposit: u64, config: MachineConfig, rng: SpinRng) -> Self {
        Self {
            balance: deposit,
            config,
            rng,
            rounds: 0,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn rng(&self) -> &SpinRng {
        &self.rng
    }

    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn can_afford_minimum(&self) -> bool {
        self.balance >= self.config.min_bet
    }

    /// Returns the stake for `bet` if the balance covers it.
    pub fn check_stake(&self, bet: &BetConfig) -> Result<u64, SessionError> {
        let stake = bet.stake()?;
        if stake > self.balance {
            return Err(SessionError::InsufficientBalance {
                balance: self.balance,
                stake,
            });
        }
        Ok(stake)
    }

    /// Spins once and applies `winnings - stake` to the balance.
    pub fn play_round(&mut self, bet: BetConfig) -> Result<SpinOutcome, SessionError> {
        let stake = self.check_stake(&bet)?;
        let outcome = spin_once(&mut self.rng, &self.config, bet)?;
        self.balance = (self.balance - stake)
            .checked_add(outcome.winnings())
            .ok_or(EngineError::PayoutOverflow)?;
        self.rounds += 1;
        self.rng.advance();
        debug!(
            round = self.rounds,
            net = %outcome.net(),
            balance = self.balance,
            "round settled"
        );
        Ok(outcome)
    }
}
