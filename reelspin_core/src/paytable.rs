use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{EngineError, EngineResult},
    grid::Grid,
    symbols::SymbolCatalog,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutResult {
    pub winnings: u64,
    /// 1-based line numbers, ascending.
    pub winning_lines: Vec<usize>,
}

impl PayoutResult {
    pub fn is_win(&self) -> bool {
        !self.winning_lines.is_empty()
    }
}

/// Pays each of the first `lines` rows whose symbol is identical in every column.
///
/// A winning row pays `value(symbol) * bet`; rows beyond `lines` are never looked at.
pub fn check_winnings(
    grid: &Grid,
    lines: usize,
    bet: u64,
    catalog: &SymbolCatalog,
) -> EngineResult<PayoutResult> {
    let rows = grid.rows();
    if lines > rows {
        return Err(EngineError::InvalidLineIndex { lines, rows });
    }

    let mut result = PayoutResult::default();
    for line in 0..lines {
        let mut symbols = grid.row(line);
        let Some(first) = symbols.next() else {
            continue;
        };
        if symbols.all(|s| s == first) {
            let pay = catalog
                .value_of(first)?
                .checked_mul(bet)
                .ok_or(EngineError::PayoutOverflow)?;
            result.winnings = result
                .winnings
                .checked_add(pay)
                .ok_or(EngineError::PayoutOverflow)?;
            result.winning_lines.push(line + 1);
        }
    }
    debug!(
        lines,
        bet,
        winnings = result.winnings,
        winning_lines = ?result.winning_lines,
        "evaluated grid"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{Symbol::*, SymbolEntry};

    fn grid(cols: Vec<Vec<crate::symbols::Symbol>>) -> Grid {
        Grid::from_columns(cols).unwrap()
    }

    #[test]
    fn reference_round() {
        let g = grid(vec![vec![A, B, C], vec![A, D, B], vec![A, C, D]]);
        let res = check_winnings(&g, 3, 10, &SymbolCatalog::standard()).unwrap();
        assert_eq!(res.winnings, 50);
        assert_eq!(res.winning_lines, vec![1]);
    }

    #[test]
    fn zero_lines_pays_nothing() {
        let g = grid(vec![vec![A, A, A], vec![A, A, A], vec![A, A, A]]);
        let res = check_winnings(&g, 0, 10, &SymbolCatalog::standard()).unwrap();
        assert_eq!(res, PayoutResult::default());
        assert!(!res.is_win());
    }

    #[test]
    fn only_bet_lines_are_paid() {
        let g = grid(vec![vec![B, C, D], vec![B, C, D], vec![B, C, D]]);
        let catalog = SymbolCatalog::standard();
        let one = check_winnings(&g, 1, 10, &catalog).unwrap();
        assert_eq!(one.winnings, 40);
        assert_eq!(one.winning_lines, vec![1]);
        let all = check_winnings(&g, 3, 10, &catalog).unwrap();
        assert_eq!(all.winnings, 40 + 30 + 20);
        assert_eq!(all.winning_lines, vec![1, 2, 3]);
    }

    #[test]
    fn partial_match_is_not_a_win() {
        let g = grid(vec![vec![A, B, C], vec![A, B, C], vec![B, C, A]]);
        let res = check_winnings(&g, 3, 10, &SymbolCatalog::standard()).unwrap();
        assert_eq!(res.winnings, 0);
        assert!(res.winning_lines.is_empty());
    }

    #[test]
    fn too_many_lines_is_an_error() {
        let g = grid(vec![vec![A, B], vec![A, B]]);
        assert_eq!(
            check_winnings(&g, 3, 10, &SymbolCatalog::standard()),
            Err(EngineError::InvalidLineIndex { lines: 3, rows: 2 })
        );
    }

    #[test]
    fn winning_symbol_missing_from_catalog() {
        let catalog = SymbolCatalog::new(vec![SymbolEntry::new(B, 1, 1)]).unwrap();
        let g = grid(vec![vec![A], vec![A]]);
        assert_eq!(
            check_winnings(&g, 1, 10, &catalog),
            Err(EngineError::UnknownSymbol(A))
        );
    }

    #[test]
    fn overflow_is_reported() {
        let g = grid(vec![vec![A], vec![A]]);
        assert_eq!(
            check_winnings(&g, 1, u64::MAX, &SymbolCatalog::standard()),
            Err(EngineError::PayoutOverflow)
        );
    }

    #[test]
    fn single_column_always_matches() {
        let g = grid(vec![vec![D, C]]);
        let res = check_winnings(&g, 2, 1, &SymbolCatalog::standard()).unwrap();
        assert_eq!(res.winnings, 5);
        assert_eq!(res.winning_lines, vec![1, 2]);
    }
}
