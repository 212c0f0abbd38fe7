use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::symbols::Symbol;

/// A spin result stored column-major: `columns[col][row]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<Vec<Symbol>>", into = "Vec<Vec<Symbol>>")]
pub struct Grid {
    columns: Vec<Vec<Symbol>>,
}

impl Grid {
    /// Builds a grid from reel columns; rejects empty or ragged input.
    pub fn from_columns(columns: Vec<Vec<Symbol>>) -> EngineResult<Self> {
        let rows = match columns.first() {
            Some(first) if !first.is_empty() => first.len(),
            Some(_) => return Err(EngineError::InvalidGrid("columns have no rows".into())),
            None => return Err(EngineError::InvalidGrid("no columns".into())),
        };
        if let Some((i, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != rows) {
            return Err(EngineError::InvalidGrid(format!(
                "column {} has {} rows, expected {}",
                i,
                col.len(),
                rows
            )));
        }
        Ok(Self { columns })
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Vec<Symbol>] {
        &self.columns
    }

    pub fn column(&self, col: usize) -> Option<&[Symbol]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    pub fn symbol_at(&self, col: usize, row: usize) -> Option<Symbol> {
        self.columns.get(col)?.get(row).copied()
    }

    /// Symbols of one horizontal line, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Symbol> + '_ {
        self.columns.iter().filter_map(move |c| c.get(row).copied())
    }

    pub fn into_columns(self) -> Vec<Vec<Symbol>> {
        self.columns
    }
}

impl TryFrom<Vec<Vec<Symbol>>> for Grid {
    type Error = EngineError;

    fn try_from(columns: Vec<Vec<Symbol>>) -> Result<Self, Self::Error> {
        Self::from_columns(columns)
    }
}

impl From<Grid> for Vec<Vec<Symbol>> {
    fn from(grid: Grid) -> Self {
        grid.columns
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            let line: Vec<String> = self.row(row).map(|s| s.to_string()).collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}

/// Parses `"ABC,ADB,ACD"`: comma-separated columns, each listed top to bottom.
impl FromStr for Grid {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let columns = s
            .split(',')
            .map(|col| {
                col.trim()
                    .chars()
                    .map(|c| {
                        Symbol::from_char(c)
                            .ok_or_else(|| EngineError::InvalidGrid(format!("unknown symbol '{c}'")))
                    })
                    .collect::<EngineResult<Vec<_>>>()
            })
            .collect::<EngineResult<Vec<_>>>()?;
        Self::from_columns(columns)
    }
}
