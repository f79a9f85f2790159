//! trundler — route a cost grid under run constraints from the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use trundle_core::{CostGrid, Point};
use trundle_paths::{RunLimits, SearchRange};

#[derive(Parser)]
#[command(name = "trundler")]
#[command(author, version, about)]
#[command(long_about = "Find the cheapest route across a weighted grid under a \
    movement-run constraint.\n\n\
    The grid file holds one cost digit per cell, one row per line. After every \
    turn the route must continue straight for at least --min-run cells and at \
    most --max-run cells, and may never reverse.\n\n\
    Examples:\n  \
    trundler city.txt                        Route corner to corner, runs 0..=3\n  \
    trundler city.txt --min-run 4 --max-run 10\n  \
    trundler city.txt --start 0,2 --target 9,9")]
struct Cli {
    /// Digit-grid file, one cost digit per cell
    grid: PathBuf,

    /// Minimum straight run after a turn
    #[arg(long, default_value_t = 0)]
    min_run: i32,

    /// Maximum straight run before a turn is forced
    #[arg(long, default_value_t = 3)]
    max_run: i32,

    /// Start cell as "x,y" (default: top-left)
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Target cell as "x,y" (default: bottom-right)
    #[arg(long, value_parser = parse_point)]
    target: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{s}\""))?;
    let x = x.trim().parse().map_err(|e| format!("bad x coordinate: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y coordinate: {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.grid)
        .with_context(|| format!("reading {}", cli.grid.display()))?;
    let grid =
        CostGrid::parse(&text).with_context(|| format!("parsing {}", cli.grid.display()))?;
    if grid.width() == 0 || grid.height() == 0 {
        bail!("{} holds an empty grid", cli.grid.display());
    }

    let limits = RunLimits::new(cli.min_run, cli.max_run)?;
    let start = cli.start.unwrap_or(Point::ZERO);
    let target = cli.target.unwrap_or(grid.size() - Point::new(1, 1));

    let mut search = SearchRange::new(grid.bounds());
    let cost = search.route_cost(&grid, start, target, limits).with_context(|| {
        format!(
            "routing {start} -> {target} with runs {}..={}",
            cli.min_run, cli.max_run
        )
    })?;

    println!("{cost}");
    Ok(())
}
