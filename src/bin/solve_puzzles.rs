//! Runs one round of every puzzle on generated inputs.
//!
//! Usage:
//!   cargo run --release --bin solve_puzzles -- [OPTIONS]
//!
//! Options:
//!   --config <FILE>      Configuration JSON file (optional)
//!   --seed <N>           Random seed (optional, overrides the config)
//!   --disks <N>          Hanoi disk count (default: 8)
//!   --json <FILE>        Save the full report as JSON
//!
//! Set `RUST_LOG=debug` to see per-solve timings.

use std::env;
use std::fs;
use std::process;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use puzzle_solvers::puzzles::board_path::{self, Board, ThrowsComparison};
use puzzle_solvers::puzzles::hanoi::{self, AlgorithmRun};
use puzzle_solvers::puzzles::max_flow::{self, FlowComparison, FlowEdge, MaxFlowSolver};
use puzzle_solvers::puzzles::queens::{self, QueensRun};
use puzzle_solvers::puzzles::tsp::{city_label, DistanceMatrix, TspSolution, TspSolver};
use puzzle_solvers::{Algorithm, SolverConfig, SolverError};

const TSP_CITIES: usize = 10;
const BOARD_SIZE: u32 = 10;

#[derive(Debug, Serialize)]
struct RoundReport {
    seed: Option<u64>,
    hanoi_disks: u32,
    hanoi_three_peg: Vec<AlgorithmRun>,
    hanoi_four_peg: Vec<AlgorithmRun>,
    tsp_matrix: DistanceMatrix,
    tsp_home: char,
    tsp_targets: Vec<char>,
    tsp: Vec<TspSolution>,
    board: Board,
    board_throws: ThrowsComparison,
    queens_sequential: QueensRun,
    queens_parallel: QueensRun,
    traffic_edges: Vec<FlowEdge>,
    traffic_flow: FlowComparison,
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut config_file: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut disks: u32 = 8;
    let mut json_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--disks" | "-d" => {
                i += 1;
                if i < args.len() {
                    disks = args[i].parse().unwrap_or(disks);
                }
            }
            "--json" | "-o" => {
                i += 1;
                if i < args.len() {
                    json_file = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(2);
            }
        }
        i += 1;
    }

    println!("=================================================");
    println!("  Puzzle Solvers");
    println!("=================================================");
    println!();

    let mut config = match &config_file {
        Some(path) => {
            println!("Loading configuration from: {}", path);
            match SolverConfig::from_json_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error loading config: {}", e);
                    process::exit(1);
                }
            }
        }
        None => SolverConfig::default(),
    };
    if let Some(s) = seed {
        config = config.with_seed(s);
    }

    let start = Instant::now();
    let report = match run_round(&config, disks) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Round failed: {}", e);
            process::exit(1);
        }
    };

    print_summary(&report);
    println!();
    println!("Total time: {:.2}s", start.elapsed().as_secs_f64());

    if let Some(path) = json_file {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => match fs::write(&path, json) {
                Ok(()) => println!("Report saved to: {}", path),
                Err(e) => eprintln!("Could not write {}: {}", path, e),
            },
            Err(e) => eprintln!("Could not serialize report: {}", e),
        }
    }
}

fn run_round(config: &SolverConfig, disks: u32) -> Result<RoundReport, SolverError> {
    let mut rng = config.rng();

    let pb = ProgressBar::new(5);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .map(|s| s.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    pb.set_message("hanoi");
    let hanoi_three_peg = hanoi::compare_solvers(disks, 'A', 'C', &['B'])?;
    let hanoi_four_peg = hanoi::compare_solvers(disks, 'A', 'D', &['B', 'C'])?;
    pb.inc(1);

    pb.set_message("tsp");
    let tsp_matrix = DistanceMatrix::random(TSP_CITIES, config.distance_range, &mut rng);
    let mut cities: Vec<usize> = (0..TSP_CITIES).collect();
    cities.shuffle(&mut rng);
    let target_count = rng.gen_range(3..=6);
    let (home, targets) = (cities[0], &cities[1..=target_count]);
    let tsp = TspSolver::from_config(config).solve_all(&tsp_matrix, home, targets)?;
    pb.inc(1);

    pb.set_message("snakes & ladders");
    let board = Board::generate(BOARD_SIZE, config.board_attempts, &mut rng)?;
    let board_throws = board_path::cross_check(&board)?;
    pb.inc(1);

    pb.set_message("eight queens");
    let queens_sequential = queens::solve_sequential();
    let queens_parallel = queens::solve_parallel(config.queens_worker_count())?;
    pb.inc(1);

    pb.set_message("traffic");
    let traffic_edges = max_flow::random_traffic_network(config.capacity_range, &mut rng);
    let traffic_flow = MaxFlowSolver::from_config(config).cross_check(
        &traffic_edges,
        max_flow::TRAFFIC_SOURCE,
        max_flow::TRAFFIC_SINK,
    )?;
    pb.inc(1);
    pb.finish_with_message("done");

    Ok(RoundReport {
        seed: config.seed,
        hanoi_disks: disks,
        hanoi_three_peg,
        hanoi_four_peg,
        tsp_matrix,
        tsp_home: city_label(home),
        tsp_targets: targets.iter().map(|&t| city_label(t)).collect(),
        tsp,
        board,
        board_throws,
        queens_sequential,
        queens_parallel,
        traffic_edges,
        traffic_flow,
    })
}

fn print_summary(report: &RoundReport) {
    println!();
    println!("=== Tower of Hanoi ({} disks) ===", report.hanoi_disks);
    for run in report.hanoi_three_peg.iter().chain(&report.hanoi_four_peg) {
        println!(
            "  {:<22} {:>8} moves  {:>9.3}ms",
            run.algorithm.name(),
            run.moves,
            run.time_taken_ms
        );
    }

    println!();
    println!(
        "=== Traveling Salesman (home {}, targets {:?}) ===",
        report.tsp_home, report.tsp_targets
    );
    for s in &report.tsp {
        let path: String = s.path.iter().collect();
        println!(
            "  {:<22} {:>8.0} km  {:>9.3}ms  {}  {}",
            s.algorithm.name(),
            s.distance,
            s.time_taken_ms,
            path,
            s.complexity
        );
    }

    println!();
    println!(
        "=== Snakes & Ladders ({}x{}, {} ladders, {} snakes) ===",
        report.board.size,
        report.board.size,
        report.board.ladders.len(),
        report.board.snakes.len()
    );
    for r in [&report.board_throws.bfs, &report.board_throws.dp] {
        let throws = r.throws.map_or("unreachable".to_string(), |t| t.to_string());
        println!(
            "  {:<22} {:>8} throws {:>9.3}ms",
            r.algorithm.name(),
            throws,
            r.time_taken_ms
        );
    }

    println!();
    println!("=== Eight Queens ===");
    for run in [&report.queens_sequential, &report.queens_parallel] {
        println!(
            "  {:<22} {:>8} boards {:>9.3}ms  ({} workers)",
            run.mode.name(),
            run.count,
            run.time_taken_ms,
            run.workers
        );
    }

    println!();
    println!("=== Traffic Max-Flow ===");
    for r in [&report.traffic_flow.ford_fulkerson, &report.traffic_flow.edmonds_karp] {
        println!(
            "  {:<22} {:>8} cars   {:>9.3}ms  ({} paths)",
            r.algorithm.name(),
            r.max_flow,
            r.time_taken_ms,
            r.augmentations
        );
    }
    if !report.traffic_flow.agree || !report.board_throws.agree {
        println!();
        println!("WARNING: strategies disagreed, see log output");
    }
}

fn print_help() {
    println!("Puzzle Solvers");
    println!();
    println!("Usage: solve_puzzles [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>      Configuration JSON file");
    println!("  -s, --seed <N>           Random seed");
    println!("  -d, --disks <N>          Hanoi disk count (default: 8)");
    println!("  -o, --json <FILE>        Save the full report as JSON");
    println!("  -h, --help               Print this help");
}
