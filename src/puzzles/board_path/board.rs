//! Snakes & Ladders boards: layout, validation and random generation.

use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::solver::SolverError;

/// Smallest supported board dimension.
pub const MIN_BOARD_SIZE: u32 = 4;

/// Forward shortcut from `start` up to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ladder {
    /// Foot of the ladder.
    pub start: u32,
    /// Top of the ladder.
    pub end: u32,
}

/// Setback from `head` down to `tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snake {
    /// Square where the snake bites.
    pub head: u32,
    /// Square the player slides to.
    pub tail: u32,
}

/// Landing-square overrides built from ladders and snakes.
///
/// Positions are plain integers `1..=total`; only the squares with a
/// ladder foot or snake head are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeleportMap {
    jumps: FxHashMap<u32, u32>,
}

impl TeleportMap {
    /// Build the map. A snake on the same square as a ladder wins.
    pub fn new(ladders: &[Ladder], snakes: &[Snake]) -> Self {
        let mut jumps = FxHashMap::default();
        for l in ladders {
            jumps.insert(l.start, l.end);
        }
        for s in snakes {
            jumps.insert(s.head, s.tail);
        }
        Self { jumps }
    }

    /// Effective square after landing on `pos`.
    pub fn resolve(&self, pos: u32) -> u32 {
        self.jumps.get(&pos).copied().unwrap_or(pos)
    }

    /// Number of overridden squares.
    pub fn len(&self) -> usize {
        self.jumps.len()
    }

    /// Whether no square is overridden.
    pub fn is_empty(&self) -> bool {
        self.jumps.is_empty()
    }
}

/// An `N x N` board with its ladders and snakes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Side length `N`.
    pub size: u32,
    /// Number of squares, `N * N`.
    pub total: u32,
    /// Ladders in placement order.
    pub ladders: Vec<Ladder>,
    /// Snakes in placement order.
    pub snakes: Vec<Snake>,
}

impl Board {
    /// Build a board from hand-placed ladders and snakes.
    ///
    /// See [`check_layout`] for the rules the layout must follow.
    pub fn new(size: u32, ladders: Vec<Ladder>, snakes: Vec<Snake>) -> Result<Self, SolverError> {
        let total = size
            .checked_mul(size)
            .ok_or(SolverError::InvalidBoardSize(size))?;
        check_layout(total, &ladders, &snakes)?;

        Ok(Self {
            size,
            total,
            ladders,
            snakes,
        })
    }

    /// Generate a random board by rejection sampling.
    ///
    /// Tries to place `N - 2` ladders and then `N - 2` snakes. Ladders start
    /// on `2..=total-9` and rise 5 to 19 squares; snakes bite on
    /// `10..=total-1` and drop 5 to 19 squares. A candidate is redrawn while
    /// it leaves the board or reuses a square; after `max_attempts` draws the
    /// piece is skipped, so fewer than `N - 2` of each may be placed.
    pub fn generate<R: Rng>(size: u32, max_attempts: usize, rng: &mut R) -> Result<Self, SolverError> {
        if size < MIN_BOARD_SIZE {
            return Err(SolverError::InvalidBoardSize(size));
        }
        let total = size
            .checked_mul(size)
            .ok_or(SolverError::InvalidBoardSize(size))?;
        let wanted = (size - 2) as usize;
        let mut used: FxHashSet<u32> = [1, total].into_iter().collect();

        let mut ladders = Vec::with_capacity(wanted);
        for _ in 0..wanted {
            let placed = sample(max_attempts, || {
                let start = rng.gen_range(2..=total - 9);
                let end = start + rng.gen_range(5..=19);
                (end < total && !used.contains(&start) && !used.contains(&end))
                    .then_some((start, end))
            });
            if let Some((start, end)) = placed {
                used.insert(start);
                used.insert(end);
                ladders.push(Ladder { start, end });
            }
        }

        let mut snakes = Vec::with_capacity(wanted);
        for _ in 0..wanted {
            let placed = sample(max_attempts, || {
                let head = rng.gen_range(10..=total - 1);
                let tail = head as i64 - rng.gen_range(5..=19) as i64;
                (tail > 1 && !used.contains(&head) && !used.contains(&(tail as u32)))
                    .then(|| (head, tail as u32))
            });
            if let Some((head, tail)) = placed {
                used.insert(head);
                used.insert(tail);
                snakes.push(Snake { head, tail });
            }
        }

        if ladders.len() < wanted || snakes.len() < wanted {
            log::warn!(
                "board {}x{}: placed {}/{} ladders and {}/{} snakes within {} attempts",
                size,
                size,
                ladders.len(),
                wanted,
                snakes.len(),
                wanted,
                max_attempts
            );
        }

        Ok(Self {
            size,
            total,
            ladders,
            snakes,
        })
    }

    /// Landing-square overrides for this board.
    pub fn teleports(&self) -> TeleportMap {
        TeleportMap::new(&self.ladders, &self.snakes)
    }

    /// Number of ladders plus snakes the generator aimed for but skipped.
    pub fn shortfall(&self) -> usize {
        let wanted = self.size.saturating_sub(2) as usize;
        wanted.saturating_sub(self.ladders.len()) + wanted.saturating_sub(self.snakes.len())
    }
}

/// Check a ladder/snake layout on a board of `total` squares.
///
/// Every endpoint must lie strictly between square 1 and the last square,
/// ladders must go up, snakes must go down, and no square may be used by two
/// endpoints.
pub fn check_layout(total: u32, ladders: &[Ladder], snakes: &[Snake]) -> Result<(), SolverError> {
    if total < 2 {
        return Err(SolverError::InvalidBoardSize(total));
    }

    let mut used = FxHashSet::default();
    let mut claim = |square: u32| -> Result<(), SolverError> {
        if square <= 1 || square >= total {
            return Err(SolverError::MalformedBoard(format!(
                "square {} is outside 2..{}",
                square, total
            )));
        }
        if !used.insert(square) {
            return Err(SolverError::MalformedBoard(format!(
                "square {} is used twice",
                square
            )));
        }
        Ok(())
    };

    for l in ladders {
        if l.start >= l.end {
            return Err(SolverError::MalformedBoard(format!(
                "ladder {} -> {} does not go up",
                l.start, l.end
            )));
        }
        claim(l.start)?;
        claim(l.end)?;
    }
    for s in snakes {
        if s.head <= s.tail {
            return Err(SolverError::MalformedBoard(format!(
                "snake {} -> {} does not go down",
                s.head, s.tail
            )));
        }
        claim(s.head)?;
        claim(s.tail)?;
    }
    Ok(())
}

fn sample<T, F: FnMut() -> Option<T>>(max_attempts: usize, mut draw: F) -> Option<T> {
    (0..max_attempts).find_map(|_| draw())
}

/// Screen position of square `pos` on an `n x n` board.
///
/// Square 1 is bottom-left and rows alternate direction. Returns
/// `(row, col)` with row 0 at the top, or `None` if `pos` is off the board.
pub fn square_coords(pos: u32, n: u32) -> Option<(u32, u32)> {
    if pos == 0 || pos > n.saturating_mul(n) {
        return None;
    }
    let row = (pos - 1) / n;
    let mut col = (pos - 1) % n;
    if row % 2 == 1 {
        col = n - 1 - col;
    }
    Some((n - 1 - row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_teleport_map_resolves_overrides() {
        let map = TeleportMap::new(&[Ladder { start: 2, end: 15 }], &[Snake { head: 17, tail: 4 }]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.resolve(2), 15);
        assert_eq!(map.resolve(17), 4);
        assert_eq!(map.resolve(3), 3);
    }

    #[test]
    fn test_new_rejects_malformed_boards() {
        assert!(Board::new(5, vec![Ladder { start: 3, end: 12 }], vec![Snake { head: 20, tail: 7 }]).is_ok());

        let cases = vec![
            (vec![Ladder { start: 12, end: 3 }], vec![]),
            (vec![], vec![Snake { head: 7, tail: 20 }]),
            (vec![Ladder { start: 1, end: 12 }], vec![]),
            (vec![Ladder { start: 3, end: 25 }], vec![]),
            (vec![Ladder { start: 3, end: 12 }], vec![Snake { head: 12, tail: 4 }]),
        ];
        for (ladders, snakes) in cases {
            let result = Board::new(5, ladders.clone(), snakes.clone());
            assert!(
                matches!(result, Err(SolverError::MalformedBoard(_))),
                "{:?} {:?} should be rejected",
                ladders,
                snakes
            );
        }
        assert_eq!(Board::new(1, vec![], vec![]), Err(SolverError::InvalidBoardSize(1)));
    }

    #[test]
    fn test_generate_respects_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        for size in [4, 6, 8, 10, 12] {
            let board = Board::generate(size, 100, &mut rng).unwrap();
            assert_eq!(board.total, size * size);
            assert!(board.ladders.len() <= (size - 2) as usize);
            assert!(board.snakes.len() <= (size - 2) as usize);

            // Generated boards pass the hand-built validation
            let rebuilt = Board::new(size, board.ladders.clone(), board.snakes.clone()).unwrap();
            assert_eq!(rebuilt, board);
        }
    }

    #[test]
    fn test_generate_ten_by_ten_fills() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::generate(10, 100, &mut rng).unwrap();
        assert_eq!(board.total, 100);
        assert_eq!(board.shortfall(), 0);
        assert_eq!(board.ladders.len(), 8);
        assert_eq!(board.snakes.len(), 8);
    }

    #[test]
    fn test_generate_rejects_tiny_boards() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Board::generate(3, 100, &mut rng), Err(SolverError::InvalidBoardSize(3)));
    }

    #[test]
    fn test_generate_rejects_oversized_boards() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Board::generate(70_000, 100, &mut rng),
            Err(SolverError::InvalidBoardSize(70_000))
        );
        assert_eq!(
            Board::generate(u32::MAX, 100, &mut rng),
            Err(SolverError::InvalidBoardSize(u32::MAX))
        );
    }

    #[test]
    fn test_generate_stops_when_attempts_run_out() {
        let mut rng = StdRng::seed_from_u64(0);
        let board = Board::generate(4, 0, &mut rng).unwrap();
        assert!(board.ladders.is_empty());
        assert!(board.snakes.is_empty());
        assert_eq!(board.shortfall(), 4);

        // One draw per piece on a 4x4 board misses often
        let mut short = 0;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::generate(4, 1, &mut rng).unwrap();
            assert_eq!(board.shortfall(), 4 - board.ladders.len() - board.snakes.len());
            let rebuilt = Board::new(4, board.ladders.clone(), board.snakes.clone()).unwrap();
            assert_eq!(rebuilt, board);
            if board.shortfall() > 0 {
                short += 1;
            }
        }
        assert!(short > 0);
    }

    #[test]
    fn test_square_coords_snake_order() {
        assert_eq!(square_coords(1, 10), Some((9, 0)));
        assert_eq!(square_coords(10, 10), Some((9, 9)));
        assert_eq!(square_coords(11, 10), Some((8, 9)));
        assert_eq!(square_coords(20, 10), Some((8, 0)));
        assert_eq!(square_coords(100, 10), Some((0, 0)));
        assert_eq!(square_coords(0, 10), None);
        assert_eq!(square_coords(101, 10), None);
    }
}
