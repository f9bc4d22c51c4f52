#![doc = include_str!("../README.md")]

use std::fmt::Write;
use std::io::{self, Read};
use anyhow::{bail, Context};
use cpu_time::ProcessTime;
use log::info;
use npuzzle::board::Board;
use npuzzle::solver::Solver;
use npuzzle::stats::SearchAllStats;

/// Parses board given as its dimension followed by dimension² tiles in row-major order,
/// all separated by whitespace.
fn parse_board(input: &str) -> anyhow::Result<Board> {
    let mut tokens = input.split_whitespace();
    let dimension: usize = tokens.next()
        .context("missing board dimension")?
        .parse()
        .context("board dimension is not a non-negative integer")?;
    let cells = dimension.checked_mul(dimension).context("board dimension is too large")?;
    let tiles = tokens.by_ref().take(cells).enumerate()
        .map(|(cell, token)| token.parse::<u16>()
            .with_context(|| format!("tile #{} ({:?}) is not a tile number", cell + 1, token)))
        .collect::<anyhow::Result<Vec<u16>>>()?;
    if let Some(token) = tokens.next() {
        bail!("unexpected {:?} after {} tiles", token, cells);
    }
    Ok(Board::new(dimension, tiles)?)
}

/// Returns the text printed for the solved puzzle.
fn render(solver: &Solver) -> String {
    let Some(solution) = solver.solution() else {
        return "No solutions possible.\n".to_owned();
    };
    let mut result = format!("Minimum number of moves needed: {}\n", solver.moves());
    for board in solution {
        // writing to String cannot fail
        let _ = writeln!(result, "{}", board);
    }
    result
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("cannot read the puzzle from standard input")?;
    let initial = parse_board(&input).context("malformed puzzle")?;
    info!("solving {}x{} board, Manhattan heuristic {}, Hamming heuristic {}",
          initial.dimension(), initial.dimension(), initial.manhattan(), initial.hamming());

    let mut stats = SearchAllStats::default();
    let start_moment = ProcessTime::try_now().ok();
    let solver = Solver::with_stats(initial, &mut stats)?;
    if let Some(seconds) = start_moment.and_then(|s| s.try_elapsed().ok()).map(|d| d.as_secs_f64()) {
        info!("search took {:.3} sec of CPU time", seconds);
    }
    info!("{} nodes expanded, {} enqueued, {} pruned", stats.expanded, stats.enqueued, stats.pruned);

    print!("{}", render(&solver));
    Ok(())
}
