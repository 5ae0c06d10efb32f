//! The three round-trip search strategies.
//!
//! All of them work on city indices and return `(tour, distance)` where the
//! tour starts and ends at `home`. Input validation happens in the caller.

use super::DistanceMatrix;

/// Largest target count [`held_karp`] will tabulate.
///
/// The memo holds `2^k * k` entries, about 16 MiB of state at this size.
pub const HELD_KARP_MAX_TARGETS: usize = 16;

/// Try every ordering of `targets` and keep the shortest tour.
///
/// Orderings are enumerated depth first, picking the remaining targets in
/// their given order, so ties keep the first ordering found. With no
/// targets the tour is `[home, home]` with length zero.
pub fn brute_force(matrix: &DistanceMatrix, home: usize, targets: &[usize]) -> (Vec<usize>, f64) {
    let mut search = Permutations {
        matrix,
        home,
        targets,
        used: vec![false; targets.len()],
        current: Vec::with_capacity(targets.len()),
        best: Vec::new(),
        best_distance: f64::INFINITY,
    };
    search.extend(home, 0.0);

    if search.best_distance.is_infinite() {
        return (vec![home, home], 0.0);
    }

    let mut tour = Vec::with_capacity(targets.len() + 2);
    tour.push(home);
    tour.extend_from_slice(&search.best);
    tour.push(home);
    (tour, search.best_distance)
}

struct Permutations<'a> {
    matrix: &'a DistanceMatrix,
    home: usize,
    targets: &'a [usize],
    used: Vec<bool>,
    current: Vec<usize>,
    best: Vec<usize>,
    best_distance: f64,
}

impl Permutations<'_> {
    fn extend(&mut self, last: usize, so_far: f64) {
        if self.current.len() == self.targets.len() {
            if self.current.is_empty() {
                return;
            }
            let total = so_far + self.matrix.get(last, self.home);
            if total < self.best_distance {
                self.best_distance = total;
                self.best.clone_from(&self.current);
            }
            return;
        }

        for i in 0..self.targets.len() {
            if self.used[i] {
                continue;
            }
            let city = self.targets[i];
            self.used[i] = true;
            self.current.push(city);
            self.extend(city, so_far + self.matrix.get(last, city));
            self.current.pop();
            self.used[i] = false;
        }
    }
}

/// Greedy tour: always travel to the closest unvisited target.
///
/// Ties go to the target listed first.
pub fn nearest_neighbor(
    matrix: &DistanceMatrix,
    home: usize,
    targets: &[usize],
) -> (Vec<usize>, f64) {
    let mut tour = Vec::with_capacity(targets.len() + 2);
    tour.push(home);
    let mut unvisited = targets.to_vec();
    let mut current = home;
    let mut distance = 0.0;

    while !unvisited.is_empty() {
        let mut nearest = 0;
        let mut nearest_distance = f64::INFINITY;
        for (i, &city) in unvisited.iter().enumerate() {
            let d = matrix.get(current, city);
            if d < nearest_distance {
                nearest_distance = d;
                nearest = i;
            }
        }

        let city = unvisited.remove(nearest);
        distance += nearest_distance;
        tour.push(city);
        current = city;
    }

    distance += matrix.get(current, home);
    tour.push(home);
    (tour, distance)
}

/// Held–Karp bitmask dynamic programming.
///
/// `dp[mask][j]` is the cheapest way to leave `home`, visit exactly the
/// targets in `mask`, and stop at target `j`. The tour is rebuilt from
/// parent pointers. Memory is `O(2^k * k)` for `k` targets; above
/// [`HELD_KARP_MAX_TARGETS`] the tour comes from [`nearest_neighbor`].
pub fn held_karp(matrix: &DistanceMatrix, home: usize, targets: &[usize]) -> (Vec<usize>, f64) {
    let k = targets.len();
    if k == 0 {
        return (vec![home, home], 0.0);
    }
    if k > HELD_KARP_MAX_TARGETS {
        return nearest_neighbor(matrix, home, targets);
    }

    let states = 1usize << k;
    let idx = |mask: usize, last: usize| mask * k + last;
    let mut dp = vec![f64::INFINITY; states * k];
    let mut parent = vec![usize::MAX; states * k];

    for (j, &city) in targets.iter().enumerate() {
        dp[idx(1 << j, j)] = matrix.get(home, city);
    }

    for mask in 1..states {
        for last in 0..k {
            if mask & (1 << last) == 0 {
                continue;
            }
            let cost = dp[idx(mask, last)];
            if cost.is_infinite() {
                continue;
            }
            for next in 0..k {
                if mask & (1 << next) != 0 {
                    continue;
                }
                let next_mask = mask | (1 << next);
                let candidate = cost + matrix.get(targets[last], targets[next]);
                if candidate < dp[idx(next_mask, next)] {
                    dp[idx(next_mask, next)] = candidate;
                    parent[idx(next_mask, next)] = last;
                }
            }
        }
    }

    let full = states - 1;
    let mut best_last = 0;
    let mut best_cost = f64::INFINITY;
    for last in 0..k {
        let total = dp[idx(full, last)] + matrix.get(targets[last], home);
        if total < best_cost {
            best_cost = total;
            best_last = last;
        }
    }

    // Walk parent pointers back to the first target
    let mut order = Vec::with_capacity(k);
    let mut mask = full;
    let mut last = best_last;
    loop {
        order.push(targets[last]);
        let prev = parent[idx(mask, last)];
        mask &= !(1 << last);
        if prev == usize::MAX {
            break;
        }
        last = prev;
    }

    let mut tour = Vec::with_capacity(k + 2);
    tour.push(home);
    tour.extend(order.into_iter().rev());
    tour.push(home);
    (tour, best_cost)
}
