//! Queen placements and their serialized form.

use serde_json::Value;

use super::BOARD_SIZE;
use crate::solver::SolverError;

/// Column of the queen in each row, `None` for an empty row.
///
/// Serialized as a JSON array of columns with `-1` for an empty row, e.g.
/// `[0,4,7,5,2,6,1,3]`. That string is the canonical key used to
/// deduplicate solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QueensBoard {
    cols: [Option<usize>; BOARD_SIZE],
}

impl QueensBoard {
    /// Board with a queen in every row, `cols[row]` giving its column.
    pub fn from_columns(cols: [usize; BOARD_SIZE]) -> Self {
        Self {
            cols: cols.map(Some),
        }
    }

    /// Column of the queen in `row`.
    pub fn get(&self, row: usize) -> Option<usize> {
        self.cols.get(row).copied().flatten()
    }

    /// Number of rows holding a queen.
    pub fn queen_count(&self) -> usize {
        self.cols.iter().flatten().count()
    }

    /// Canonical JSON form.
    pub fn serialize(&self) -> String {
        let values: Vec<i64> = self
            .cols
            .iter()
            .map(|c| c.map_or(-1, |c| c as i64))
            .collect();
        Value::from(values).to_string()
    }

    /// Parse the JSON form produced by [`serialize`](Self::serialize).
    ///
    /// Requires exactly one entry per row, each `-1` or a column in range.
    pub fn parse(serialized: &str) -> Result<Self, SolverError> {
        let values: Vec<i64> = serde_json::from_str(serialized)
            .map_err(|e| SolverError::MalformedBoard(e.to_string()))?;
        if values.len() != BOARD_SIZE {
            return Err(SolverError::MalformedBoard(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                values.len()
            )));
        }

        let mut cols = [None; BOARD_SIZE];
        for (row, &value) in values.iter().enumerate() {
            cols[row] = match value {
                -1 => None,
                v if (0..BOARD_SIZE as i64).contains(&v) => Some(v as usize),
                v => {
                    return Err(SolverError::MalformedBoard(format!(
                        "row {} has column {}",
                        row, v
                    )))
                }
            };
        }
        Ok(Self { cols })
    }

    /// Whether every row holds a queen and no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        let mut placed = [0usize; BOARD_SIZE];
        for (row, col) in self.cols.iter().enumerate() {
            match col {
                Some(c) if is_safe(&placed[..row], *c) => placed[row] = *c,
                _ => return false,
            }
        }
        true
    }
}

/// Whether a queen in row `placed.len()` at `col` is safe from the queens
/// already placed in the rows above (`placed[r]` is the column in row `r`).
pub fn is_safe(placed: &[usize], col: usize) -> bool {
    let row = placed.len();
    placed
        .iter()
        .enumerate()
        .all(|(r, &c)| c != col && row - r != c.abs_diff(col))
}

/// Check a serialized player board.
///
/// True only for a parseable board with a queen in every row, distinct
/// columns and no shared diagonals.
pub fn is_valid_solution(serialized: &str) -> bool {
    QueensBoard::parse(serialized).is_ok_and(|board| board.is_solution())
}
