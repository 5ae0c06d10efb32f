//! Peg state for Tower of Hanoi.
//!
//! [`Towers`] keeps one stack of disk sizes per labelled peg (largest at the
//! bottom) and refuses any move that would put a disk on a smaller one.

use super::Move;
use crate::solver::SolverError;

/// A rejected move while replaying a sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move names a peg that does not exist.
    #[error("move {index}: unknown peg {peg}")]
    UnknownPeg {
        /// Position of the move in the sequence.
        index: usize,
        /// The unknown label.
        peg: char,
    },
    /// The source peg holds no disk.
    #[error("move {index}: peg {peg} is empty")]
    EmptyPeg {
        /// Position of the move in the sequence.
        index: usize,
        /// The empty peg.
        peg: char,
    },
    /// The move claims a disk that is not on top of the source peg.
    #[error("move {index}: top of peg is disk {actual}, not disk {claimed}")]
    WrongDisk {
        /// Position of the move in the sequence.
        index: usize,
        /// Disk named by the move.
        claimed: u32,
        /// Disk actually on top.
        actual: u32,
    },
    /// The disk would land on a smaller disk.
    #[error("move {index}: disk {disk} cannot go on top of disk {onto}")]
    LargerOnSmaller {
        /// Position of the move in the sequence.
        index: usize,
        /// Disk being moved.
        disk: u32,
        /// Smaller disk already on the destination.
        onto: u32,
    },
    /// Every move was legal but the tower did not end up on the destination.
    #[error("sequence ends before all disks reach peg {dest}")]
    Incomplete {
        /// Destination peg.
        dest: char,
    },
}

/// Disk stacks keyed by peg label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    labels: Vec<char>,
    stacks: Vec<Vec<u32>>,
}

impl Towers {
    /// Create pegs with `disks` disks stacked on `source`.
    ///
    /// Fails if fewer than three labels are given, a label repeats, or
    /// `source` is not one of them.
    pub fn new(labels: &[char], source: char, disks: u32) -> Result<Self, SolverError> {
        if labels.len() < 3 {
            return Err(SolverError::InvalidPegCount(labels.len()));
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(SolverError::InvalidPegLabel(*label));
            }
        }

        let source_idx = labels
            .iter()
            .position(|&l| l == source)
            .ok_or(SolverError::InvalidPegLabel(source))?;

        let mut stacks = vec![Vec::new(); labels.len()];
        stacks[source_idx] = (1..=disks).rev().collect();

        Ok(Self {
            labels: labels.to_vec(),
            stacks,
        })
    }

    /// Disks on `peg`, bottom first.
    pub fn stack(&self, peg: char) -> Option<&[u32]> {
        self.index_of(peg).map(|i| self.stacks[i].as_slice())
    }

    /// Smallest disk on `peg`, if any.
    pub fn top(&self, peg: char) -> Option<u32> {
        self.stack(peg).and_then(|s| s.last().copied())
    }

    /// Apply one move, checking every rule.
    ///
    /// `index` is only used to label errors.
    pub fn apply(&mut self, index: usize, mv: &Move) -> Result<(), MoveError> {
        let from = self
            .index_of(mv.from)
            .ok_or(MoveError::UnknownPeg { index, peg: mv.from })?;
        let to = self
            .index_of(mv.to)
            .ok_or(MoveError::UnknownPeg { index, peg: mv.to })?;

        let disk = *self.stacks[from]
            .last()
            .ok_or(MoveError::EmptyPeg { index, peg: mv.from })?;
        if disk != mv.disk {
            return Err(MoveError::WrongDisk {
                index,
                claimed: mv.disk,
                actual: disk,
            });
        }
        if let Some(&onto) = self.stacks[to].last() {
            if onto < disk {
                return Err(MoveError::LargerOnSmaller { index, disk, onto });
            }
        }

        self.stacks[from].pop();
        self.stacks[to].push(disk);
        Ok(())
    }

    /// Move the smaller exposed disk between `a` and `b` onto the other peg.
    ///
    /// An empty peg counts as holding an infinitely large disk. Returns
    /// `None` only when both pegs are empty or a label is unknown.
    pub fn shift_between(&mut self, a: char, b: char) -> Option<Move> {
        let (ia, ib) = (self.index_of(a)?, self.index_of(b)?);
        let top_a = self.stacks[ia].last().copied().unwrap_or(u32::MAX);
        let top_b = self.stacks[ib].last().copied().unwrap_or(u32::MAX);

        let (from, to) = if top_a < top_b { (ia, ib) } else { (ib, ia) };
        let disk = self.stacks[from].pop()?;
        self.stacks[to].push(disk);

        Some(Move {
            disk,
            from: self.labels[from],
            to: self.labels[to],
        })
    }

    /// Whether all `disks` disks sit on `peg`.
    pub fn is_complete(&self, peg: char, disks: u32) -> bool {
        self.stack(peg).map_or(false, |s| s.len() == disks as usize)
    }

    fn index_of(&self, peg: char) -> Option<usize> {
        self.labels.iter().position(|&l| l == peg)
    }
}

/// Replay `moves` from a full tower on `source` and confirm it ends on `dest`.
pub fn verify_sequence(
    disks: u32,
    labels: &[char],
    source: char,
    dest: char,
    moves: &[Move],
) -> Result<Result<(), MoveError>, SolverError> {
    if !labels.contains(&dest) {
        return Err(SolverError::InvalidPegLabel(dest));
    }
    let mut towers = Towers::new(labels, source, disks)?;

    for (i, mv) in moves.iter().enumerate() {
        if let Err(e) = towers.apply(i, mv) {
            return Ok(Err(e));
        }
    }

    if towers.is_complete(dest, disks) {
        Ok(Ok(()))
    } else {
        Ok(Err(MoveError::Incomplete { dest }))
    }
}
