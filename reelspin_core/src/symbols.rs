use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    A,
    B,
    C,
    D,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol::A, Symbol::B, Symbol::C, Symbol::D];

    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    pub fn to_index(self) -> u8 {
        match self {
            Symbol::A => 0,
            Symbol::B => 1,
            Symbol::C => 2,
            Symbol::D => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::C => 'C',
            Symbol::D => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Symbol::A),
            'B' => Some(Symbol::B),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Symbol {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::from_char(c)
                .ok_or_else(|| EngineError::InvalidGrid(format!("unknown symbol '{c}'"))),
            _ => Err(EngineError::InvalidGrid(format!("unknown symbol '{s}'"))),
        }
    }
}

/// One catalog row: how often a symbol lands (`weight`) and what it pays (`value`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolEntry {
    pub symbol: Symbol,
    pub weight: u32,
    pub value: u64,
}

impl SymbolEntry {
    pub const fn new(symbol: Symbol, weight: u32, value: u64) -> Self {
        Self {
            symbol,
            weight,
            value,
        }
    }
}

/// The fixed symbol set of a machine with its draw weights and payout values.
///
/// Weight and value are independent: the standard catalog makes rare symbols
/// pay more, but nothing here requires that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolCatalog {
    entries: Vec<SymbolEntry>,
}

impl SymbolCatalog {
    pub fn new(entries: Vec<SymbolEntry>) -> EngineResult<Self> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn standard() -> Self {
        Self {
            entries: vec![
                SymbolEntry::new(Symbol::A, 2, 5),
                SymbolEntry::new(Symbol::B, 4, 4),
                SymbolEntry::new(Symbol::C, 6, 3),
                SymbolEntry::new(Symbol::D, 8, 2),
            ],
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.entries.is_empty() {
            return Err(EngineError::InvalidCatalog("no symbols".into()));
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.symbol == entry.symbol) {
                return Err(EngineError::InvalidCatalog(format!(
                    "symbol {} listed twice",
                    entry.symbol
                )));
            }
            if entry.weight == 0 {
                return Err(EngineError::InvalidCatalog(format!(
                    "symbol {} has zero weight",
                    entry.symbol
                )));
            }
            if entry.value == 0 {
                return Err(EngineError::InvalidCatalog(format!(
                    "symbol {} has zero value",
                    entry.symbol
                )));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.iter().map(|e| e.symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.entries.iter().any(|e| e.symbol == symbol)
    }

    fn entry(&self, symbol: Symbol) -> EngineResult<&SymbolEntry> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .ok_or(EngineError::UnknownSymbol(symbol))
    }

    pub fn weight_of(&self, symbol: Symbol) -> EngineResult<u32> {
        self.entry(symbol).map(|e| e.weight)
    }

    pub fn value_of(&self, symbol: Symbol) -> EngineResult<u64> {
        self.entry(symbol).map(|e| e.value)
    }

    /// Sum of all weights, i.e. the size of the draw pool.
    pub fn pool_size(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.weight)).sum()
    }

    /// The draw pool as a multiset: every symbol repeated `weight` times.
    pub fn pool(&self) -> Vec<Symbol> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat(e.symbol).take(e.weight as usize))
            .collect()
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
