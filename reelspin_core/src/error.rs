use crate::symbols::Symbol;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("line count {lines} exceeds the {rows} rows of the grid")]
    InvalidLineIndex { lines: usize, rows: usize },
    #[error("cannot draw {requested} distinct symbols from a pool of {available}")]
    DrawExceedsPool { requested: usize, available: usize },
    #[error("grid dimensions must be positive (rows={rows}, cols={cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
    #[error("symbol {0} is not in the catalog")]
    UnknownSymbol(Symbol),
    #[error("invalid symbol catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid machine config: {0}")]
    InvalidConfig(String),
    #[error("invalid bet: {0}")]
    InvalidBet(String),
    #[error("payout overflowed")]
    PayoutOverflow,
    #[error("weighted draw failed: {0}")]
    Sampling(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
