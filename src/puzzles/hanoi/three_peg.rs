//! Optimal 3-peg move generation, recursive and iterative.

use super::towers::Towers;
use super::{check_disks, Move};
use crate::solver::SolverError;

/// Optimal 3-peg move count, `2^n - 1`, saturating at `u64::MAX`.
pub fn three_peg_count(disks: u32) -> u64 {
    1u64.checked_shl(disks).map_or(u64::MAX, |p| p - 1)
}

/// Generate the optimal 3-peg solution by divide and conquer.
///
/// Moves `n - 1` disks to `aux`, the largest disk to `dest`, then the
/// `n - 1` disks on top of it. Produces exactly `2^n - 1` moves. Fails with
/// [`SolverError::TooManyDisks`] above [`MAX_DISKS`](super::MAX_DISKS).
pub fn solve_recursive(
    disks: u32,
    source: char,
    dest: char,
    aux: char,
) -> Result<Vec<Move>, SolverError> {
    check_disks(disks)?;
    let mut moves = Vec::with_capacity(three_peg_count(disks) as usize);
    recurse(disks, source, dest, aux, &mut moves);
    Ok(moves)
}

fn recurse(n: u32, source: char, dest: char, aux: char, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    recurse(n - 1, source, aux, dest, moves);
    moves.push(Move {
        disk: n,
        from: source,
        to: dest,
    });
    recurse(n - 1, aux, dest, source, moves);
}

/// Generate the same optimal sequence without recursion.
///
/// Step `i` moves the smaller exposed disk between a fixed pair of pegs
/// chosen by `i mod 3`. With an even disk count the roles of `dest` and
/// `aux` in the pairs are swapped so the tower still ends on `dest`.
///
/// Rejects more than [`MAX_DISKS`](super::MAX_DISKS) disks and repeated
/// peg labels.
pub fn solve_iterative(
    disks: u32,
    source: char,
    dest: char,
    aux: char,
) -> Result<Vec<Move>, SolverError> {
    check_disks(disks)?;
    let mut towers = Towers::new(&[source, dest, aux], source, disks)?;
    let total = three_peg_count(disks);
    let mut moves = Vec::with_capacity(total as usize);

    let (s, mut d, mut a) = (source, dest, aux);
    if disks % 2 == 0 {
        std::mem::swap(&mut d, &mut a);
    }

    for i in 1..=total {
        let (p, q) = match i % 3 {
            1 => (s, d),
            2 => (s, a),
            _ => (a, d),
        };
        match towers.shift_between(p, q) {
            Some(mv) => moves.push(mv),
            None => break,
        }
    }

    Ok(moves)
}
