pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod paytable;
pub mod rng;
pub mod simulate;
pub mod symbols;

pub use crate::config::{BetConfig, MachineConfig};
pub use crate::engine::{spin_grid, spin_once, spin_with_seeds, verify_grid, SpinOutcome};
pub use crate::error::{EngineError, EngineResult};
pub use crate::grid::Grid;
pub use crate::paytable::{check_winnings, PayoutResult};
pub use crate::rng::{derive_hash_hex, ProvablyFairRng};
pub use crate::simulate::{simulate, SimulationReport};
pub use crate::symbols::{Symbol, SymbolCatalog, SymbolEntry};
