//! Benchmarks for the puzzle solvers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use puzzle_solvers::puzzles::board_path::{min_throws_bfs, min_throws_dp, Board};
use puzzle_solvers::puzzles::hanoi::{solve_iterative, solve_recursive, FrameStewart};
use puzzle_solvers::puzzles::max_flow::{self, FlowStrategy, MaxFlowSolver};
use puzzle_solvers::puzzles::queens;
use puzzle_solvers::puzzles::tsp::{DistanceMatrix, TspSolver, TspStrategy};
use puzzle_solvers::SolverConfig;

fn hanoi_benchmark(c: &mut Criterion) {
    c.bench_function("hanoi_recursive_16", |b| {
        b.iter(|| solve_recursive(black_box(16), 'A', 'C', 'B').map(|m| m.len()))
    });
    c.bench_function("hanoi_iterative_16", |b| {
        b.iter(|| solve_iterative(black_box(16), 'A', 'C', 'B').map(|m| m.len()))
    });
    c.bench_function("frame_stewart_64", |b| {
        b.iter(|| FrameStewart::new().moves(black_box(64), 4))
    });
}

fn tsp_benchmark(c: &mut Criterion) {
    let config = SolverConfig::seeded(42);
    let mut rng = config.rng();
    let matrix = DistanceMatrix::random(10, config.distance_range, &mut rng);
    let targets: Vec<usize> = (1..9).collect();
    let solver = TspSolver::from_config(&config);

    for strategy in TspStrategy::ALL {
        let name = format!("tsp_8_targets_{:?}", strategy);
        c.bench_function(&name, |b| {
            b.iter(|| solver.solve(&matrix, 0, black_box(&targets), strategy))
        });
    }
}

fn board_path_benchmark(c: &mut Criterion) {
    let config = SolverConfig::seeded(42);
    let mut rng = config.rng();
    let board = Board::generate(10, config.board_attempts, &mut rng).expect("10x10 board");
    let teleports = board.teleports();

    c.bench_function("board_bfs_10x10", |b| {
        b.iter(|| min_throws_bfs(black_box(board.total), &teleports))
    });
    c.bench_function("board_dp_10x10", |b| {
        b.iter(|| min_throws_dp(black_box(board.total), &teleports))
    });
}

fn queens_benchmark(c: &mut Criterion) {
    c.bench_function("queens_sequential", |b| b.iter(queens::solve_sequential));
    c.bench_function("queens_parallel_8", |b| {
        b.iter(|| queens::solve_parallel(black_box(8)))
    });
}

fn max_flow_benchmark(c: &mut Criterion) {
    let config = SolverConfig::seeded(42);
    let mut rng = config.rng();
    let edges = max_flow::random_traffic_network(config.capacity_range, &mut rng);
    let solver = MaxFlowSolver::from_config(&config);

    for strategy in FlowStrategy::ALL {
        let name = format!("traffic_{:?}", strategy);
        c.bench_function(&name, |b| {
            b.iter(|| solver.solve(black_box(&edges), "A", "T", strategy))
        });
    }
}

criterion_group!(
    benches,
    hanoi_benchmark,
    tsp_benchmark,
    board_path_benchmark,
    queens_benchmark,
    max_flow_benchmark
);
criterion_main!(benches);
