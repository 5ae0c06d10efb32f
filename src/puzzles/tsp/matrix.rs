//! Distance matrices and city labels.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::solver::{SolverError, ValueRange};

/// Letter for a city index: `0 -> 'A'`, `1 -> 'B'`, ...
pub fn city_label(index: usize) -> char {
    char::from_u32(65 + index as u32).unwrap_or('?')
}

/// City index for a letter: `'A' -> 0`, `'B' -> 1`, ...
///
/// Returns `None` for anything before `'A'`.
pub fn city_index(label: char) -> Option<usize> {
    (label as u32).checked_sub(65).map(|i| i as usize)
}

/// A validated square matrix of non-negative, finite distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Validate and wrap `rows`.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, SolverError> {
        if rows.is_empty() {
            return Err(SolverError::EmptyMatrix);
        }
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SolverError::NonSquareMatrix {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            if let Some(j) = row.iter().position(|d| !d.is_finite() || *d < 0.0) {
                return Err(SolverError::InvalidDistance { row: i, col: j });
            }
        }
        Ok(Self { rows })
    }

    /// Random symmetric matrix with a zero diagonal.
    ///
    /// Off-diagonal distances are whole numbers drawn from `range`.
    pub fn random<R: Rng>(cities: usize, range: ValueRange, rng: &mut R) -> Self {
        let mut rows = vec![vec![0.0; cities]; cities];
        for i in 0..cities {
            for j in (i + 1)..cities {
                let d = rng.gen_range(range.min..=range.max) as f64;
                rows[i][j] = d;
                rows[j][i] = d;
            }
        }
        Self { rows }
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    /// Whether `m[i][j] == m[j][i]` everywhere and the diagonal is zero.
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| self.rows[i][i] == 0.0 && (0..i).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// Total length of a path of city indices, or `None` if an index is
    /// out of range or the path has fewer than two stops.
    pub fn path_distance(&self, path: &[usize]) -> Option<f64> {
        if path.len() < 2 {
            return None;
        }
        let n = self.size();
        path.windows(2).try_fold(0.0, |acc, leg| {
            if leg[0] >= n || leg[1] >= n {
                None
            } else {
                Some(acc + self.rows[leg[0]][leg[1]])
            }
        })
    }

    /// Borrow the raw rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = SolverError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(m: DistanceMatrix) -> Self {
        m.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_city_label_bijection() {
        assert_eq!(city_label(0), 'A');
        assert_eq!(city_label(9), 'J');
        for i in 0..26 {
            assert_eq!(city_index(city_label(i)), Some(i));
        }
        assert_eq!(city_index('0'), None);
    }

    #[test]
    fn test_new_rejects_bad_matrices() {
        assert_eq!(DistanceMatrix::new(vec![]), Err(SolverError::EmptyMatrix));
        assert_eq!(
            DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]),
            Err(SolverError::NonSquareMatrix { row: 1, len: 1, expected: 2 })
        );
        assert_eq!(
            DistanceMatrix::new(vec![vec![0.0, -1.0], vec![1.0, 0.0]]),
            Err(SolverError::InvalidDistance { row: 0, col: 1 })
        );
        assert_eq!(
            DistanceMatrix::new(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]),
            Err(SolverError::InvalidDistance { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_random_matrix_is_symmetric_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = DistanceMatrix::random(10, ValueRange::new(50, 100), &mut rng);

        assert_eq!(m.size(), 10);
        assert!(m.is_symmetric());
        for i in 0..10 {
            for j in 0..10 {
                if i != j {
                    let d = m.get(i, j);
                    assert!((50.0..=100.0).contains(&d));
                }
            }
        }
    }

    #[test]
    fn test_path_distance() {
        let m = DistanceMatrix::new(vec![
            vec![0.0, 60.0, 70.0],
            vec![60.0, 0.0, 50.0],
            vec![70.0, 50.0, 0.0],
        ])
        .unwrap();

        assert_eq!(m.path_distance(&[0, 1, 2, 0]), Some(180.0));
        assert_eq!(m.path_distance(&[0]), None);
        assert_eq!(m.path_distance(&[0, 5]), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: DistanceMatrix = serde_json::from_str("[[0,1],[1,0]]").unwrap();
        assert_eq!(ok.size(), 2);
        assert!(serde_json::from_str::<DistanceMatrix>("[[0,1],[1]]").is_err());
    }
}
