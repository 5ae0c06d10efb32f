//! Checking a player's tour against the computed optimum.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{city_index, DistanceMatrix};

/// Distances closer than this count as equal.
pub const DISTANCE_TOLERANCE: f64 = 0.01;

/// Why a submitted tour was rejected before its length was compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathViolation {
    /// The path has no cities.
    Empty,
    /// The first or last city is not home.
    WrongEndpoints,
    /// A label does not name a city in the matrix.
    UnknownCity(char),
    /// A city appears more than once between the endpoints.
    Duplicate(char),
    /// A required target is never visited.
    MissingCity(char),
    /// A city that is not a target appears between the endpoints.
    UnexpectedCity(char),
}

/// Verdict on a submitted tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathValidation {
    /// Valid tour whose length matches the optimum.
    pub is_correct: bool,
    /// Length of the submitted tour, if it was a valid tour.
    pub user_distance: Option<f64>,
    /// Structural problem, if the tour was rejected outright.
    pub violation: Option<PathViolation>,
    /// Message for the player.
    pub message: String,
}

impl PathValidation {
    fn rejected(violation: PathViolation) -> Self {
        let message = match &violation {
            PathViolation::Empty => "No path provided".to_string(),
            PathViolation::WrongEndpoints => "Path must start and end at home city".to_string(),
            PathViolation::UnknownCity(c) => format!("Unknown city: {}", c),
            PathViolation::Duplicate(_) => {
                "Cities must be visited exactly once (no duplicates)".to_string()
            }
            PathViolation::MissingCity(c) => format!("Missing city: {}", c),
            PathViolation::UnexpectedCity(c) => format!("City {} is not a target", c),
        };
        Self {
            is_correct: false,
            user_distance: None,
            violation: Some(violation),
            message,
        }
    }
}

/// Check a player's tour.
///
/// The tour must start and end at `home`, visit every target exactly once
/// and nothing else, and its length must be within [`DISTANCE_TOLERANCE`]
/// of `optimal_distance`.
pub fn validate_path(
    user_path: &[char],
    home: char,
    targets: &[char],
    matrix: &DistanceMatrix,
    optimal_distance: f64,
) -> PathValidation {
    let (first, last) = match (user_path.first(), user_path.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return PathValidation::rejected(PathViolation::Empty),
    };
    if user_path.len() < 2 || first != home || last != home {
        return PathValidation::rejected(PathViolation::WrongEndpoints);
    }

    let mut indices = Vec::with_capacity(user_path.len());
    for &city in user_path {
        match city_index(city).filter(|&i| i < matrix.size()) {
            Some(i) => indices.push(i),
            None => return PathValidation::rejected(PathViolation::UnknownCity(city)),
        }
    }

    let middle = &user_path[1..user_path.len() - 1];
    let mut seen = FxHashSet::default();
    for &city in middle {
        if !seen.insert(city) {
            return PathValidation::rejected(PathViolation::Duplicate(city));
        }
    }
    if let Some(&missing) = targets.iter().find(|c| !seen.contains(*c)) {
        return PathValidation::rejected(PathViolation::MissingCity(missing));
    }
    if let Some(&extra) = middle.iter().find(|c| !targets.contains(*c)) {
        return PathValidation::rejected(PathViolation::UnexpectedCity(extra));
    }

    let user_distance = matrix.path_distance(&indices).unwrap_or(f64::INFINITY);
    let is_correct = (user_distance - optimal_distance).abs() < DISTANCE_TOLERANCE;
    let message = if is_correct {
        "Correct! You found the shortest path!".to_string()
    } else {
        format!(
            "Your distance: {:.2} km, Optimal: {:.2} km",
            user_distance, optimal_distance
        )
    };

    PathValidation {
        is_correct,
        user_distance: Some(user_distance),
        violation: None,
        message,
    }
}
