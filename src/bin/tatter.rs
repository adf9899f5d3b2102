//! Headless host for the cloth: runs a scripted drag/cut scenario and logs
//! how the cloth tears.

use std::path::PathBuf;

use clap::Parser;
use ftlog::{appender::FileAppender, LevelFilter, LoggerGuard};

use tatter::{Cloth, GridConfig, Interaction, LogObserver, SolverConfig, Vec2};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of ticks to simulate.
    #[arg(short('n'), long, default_value_t = 600)]
    ticks: u64,

    /// Grid columns.
    #[arg(long, default_value_t = tatter::config::GRID_COLS)]
    cols: usize,

    /// Grid rows.
    #[arg(long, default_value_t = tatter::config::GRID_ROWS)]
    rows: usize,

    /// Viewport width used to place the cloth.
    #[arg(long, default_value_t = 1600.0)]
    width: f64,

    /// Hold a drag at `X,Y` for the first half of the run.
    #[arg(long, value_parser = parse_point)]
    drag: Option<Vec2>,

    /// Sweep a cut across the viewport at this height during the second half.
    #[arg(long)]
    cut_y: Option<f64>,

    /// Write logs to this file instead of stderr.
    #[arg(short('l'), long)]
    log_file: Option<PathBuf>,

    /// Log every individual break.
    #[arg(short('v'), long)]
    verbose: bool,
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Vec2::new(x, y))
}

/// Configures the logger.
///
/// # Errors
///
/// - If the logger could not be initialized.
fn configure_logger(log_file: Option<&PathBuf>, verbose: bool) -> Result<LoggerGuard, String> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let builder = ftlog::Builder::new().max_log_level(level);
    let builder = match log_file {
        Some(path) => builder.root(FileAppender::new(path)),
        // no root appender writes to stderr
        None => builder,
    };
    builder.try_init().map_err(|e| e.to_string())
}

/// Input for tick `t` of `total`.
fn scripted_input(args: &Args, t: u64, total: u64) -> Interaction {
    let half = total / 2;
    if t < half {
        if let Some(cursor) = args.drag {
            return Interaction::drag_at(cursor);
        }
    } else if let Some(y) = args.cut_y {
        let progress = (t - half) as f64 / (total - half).max(1) as f64;
        return Interaction::cut_at(Vec2::new(progress * args.width, y));
    }
    Interaction::idle()
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let _guard = configure_logger(args.log_file.as_ref(), args.verbose)?;

    let mut grid = GridConfig::for_viewport(args.width);
    grid.cols = args.cols;
    grid.rows = args.rows;

    let mut cloth = Cloth::new(grid, SolverConfig::default()).map_err(|e| e.to_string())?;
    ftlog::info!(
        "Built {}x{} cloth: {} particles, {} constraints",
        cloth.cols(),
        cloth.rows(),
        cloth.particle_count(),
        cloth.constraint_count(),
    );

    let mut observer = LogObserver::new();
    for t in 0..args.ticks {
        let input = scripted_input(&args, t, args.ticks);
        cloth.tick_observed(input, &mut observer);
    }

    ftlog::info!(
        "Finished {} ticks: {} active constraints, {} overstretched, {} cut",
        cloth.ticks(),
        cloth.active_constraint_count(),
        observer.overstretched(),
        observer.cut(),
    );
    Ok(())
}
