//! The fixed road network of the traffic round.

use rand::Rng;

use super::FlowEdge;
use crate::solver::ValueRange;

/// Node where traffic enters.
pub const TRAFFIC_SOURCE: &str = "A";

/// Node where traffic leaves.
pub const TRAFFIC_SINK: &str = "T";

/// Roads of the traffic round, `from -> to`.
pub const TRAFFIC_ROADS: [(&str, &str); 13] = [
    ("A", "B"),
    ("A", "C"),
    ("A", "D"),
    ("B", "E"),
    ("B", "F"),
    ("C", "E"),
    ("C", "F"),
    ("D", "F"),
    ("E", "G"),
    ("E", "H"),
    ("F", "H"),
    ("G", "T"),
    ("H", "T"),
];

/// Every road with a capacity drawn from `range`.
pub fn random_traffic_network<R: Rng>(range: ValueRange, rng: &mut R) -> Vec<FlowEdge> {
    TRAFFIC_ROADS
        .iter()
        .map(|&(from, to)| FlowEdge::new(from, to, u64::from(rng.gen_range(range.min..=range.max))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_network_uses_fixed_roads() {
        let mut rng = StdRng::seed_from_u64(4);
        let range = ValueRange::new(5, 15);
        let edges = random_traffic_network(range, &mut rng);

        assert_eq!(edges.len(), TRAFFIC_ROADS.len());
        for (edge, (from, to)) in edges.iter().zip(TRAFFIC_ROADS) {
            assert_eq!((edge.from.as_str(), edge.to.as_str()), (from, to));
            assert!(range.contains(edge.capacity as u32));
        }
    }
}
