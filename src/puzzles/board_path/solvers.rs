//! Minimum dice throws from square 1 to the last square.
//!
//! Both solvers walk the implicit graph `pos -> pos + d` for `d` in `1..=6`
//! and replace the landing square with its teleport destination before
//! recording it, so a ladder or snake never costs an extra throw.

use std::collections::VecDeque;

use super::TeleportMap;

/// Faces on the die.
pub const DIE_FACES: u32 = 6;

fn landings(pos: u32, total: u32, teleports: &TeleportMap) -> impl Iterator<Item = u32> + '_ {
    (1..=DIE_FACES)
        .map(move |d| pos + d)
        .take_while(move |&next| next <= total)
        .map(move |next| teleports.resolve(next))
}

/// Breadth-first search over board positions.
///
/// Returns `None` when the last square cannot be reached.
pub fn min_throws_bfs(total: u32, teleports: &TeleportMap) -> Option<u32> {
    if total <= 1 {
        return Some(0);
    }

    let mut visited = vec![false; total as usize + 1];
    let mut queue = VecDeque::new();
    visited[1] = true;
    queue.push_back((1u32, 0u32));

    while let Some((pos, throws)) = queue.pop_front() {
        for next in landings(pos, total, teleports) {
            if next == total {
                return Some(throws + 1);
            }
            if !visited[next as usize] {
                visited[next as usize] = true;
                queue.push_back((next, throws + 1));
            }
        }
    }
    None
}

/// Relaxation to a fixed point.
///
/// Every pass scans squares `1..total` and lowers `dp[next]` to
/// `dp[pos] + 1` where that improves it; snakes can move squares backwards,
/// so passes repeat until one changes nothing.
pub fn min_throws_dp(total: u32, teleports: &TeleportMap) -> Option<u32> {
    if total <= 1 {
        return Some(0);
    }

    let mut dp = vec![u32::MAX; total as usize + 1];
    dp[1] = 0;

    let mut changed = true;
    while changed {
        changed = false;
        for pos in 1..total {
            let here = dp[pos as usize];
            if here == u32::MAX {
                continue;
            }
            for next in landings(pos, total, teleports) {
                if here + 1 < dp[next as usize] {
                    dp[next as usize] = here + 1;
                    changed = true;
                }
            }
        }
    }

    match dp[total as usize] {
        u32::MAX => None,
        throws => Some(throws),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::board_path::{Board, Ladder, Snake};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_ladder() {
        let map = TeleportMap::new(&[Ladder { start: 2, end: 15 }], &[]);
        assert_eq!(min_throws_bfs(20, &map), Some(2));
        assert_eq!(min_throws_dp(20, &map), Some(2));
    }

    #[test]
    fn test_plain_board() {
        let map = TeleportMap::default();
        // 99 squares to cover, 6 per throw
        assert_eq!(min_throws_bfs(100, &map), Some(17));
        assert_eq!(min_throws_dp(100, &map), Some(17));
        assert_eq!(min_throws_bfs(7, &map), Some(1));
        assert_eq!(min_throws_bfs(1, &map), Some(0));
    }

    #[test]
    fn test_snake_wall_is_unreachable() {
        // Squares 8..=13 all slide back to 2..=7
        let snakes: Vec<Snake> = (8..=13).map(|head| Snake { head, tail: head - 6 }).collect();
        let map = TeleportMap::new(&[], &snakes);

        assert_eq!(min_throws_bfs(20, &map), None);
        assert_eq!(min_throws_dp(20, &map), None);
    }

    #[test]
    fn test_snake_blocks_shortest_route() {
        // Without the snake, 1 -> 7 -> 13 takes two throws
        let map = TeleportMap::new(&[], &[Snake { head: 7, tail: 2 }]);
        assert_eq!(min_throws_bfs(13, &map), Some(3));
        assert_eq!(min_throws_dp(13, &map), Some(3));
        assert_eq!(min_throws_bfs(13, &TeleportMap::default()), Some(2));
    }

    #[test]
    fn test_bfs_and_dp_agree_on_generated_boards() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            for size in [4, 6, 8, 10] {
                let board = Board::generate(size, 100, &mut rng).unwrap();
                let teleports = board.teleports();
                assert_eq!(
                    min_throws_bfs(board.total, &teleports),
                    min_throws_dp(board.total, &teleports),
                    "disagreement on {:?}",
                    board
                );
            }
        }
    }
}
