use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use elastic_dtw::{BasicDtw, CostMatrix, TimeSeries, WarpPath};

#[derive(Parser)]
#[command(name = "elastic")]
#[command(about = "Dynamic Time Warping distance and alignment between two series")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// The two series to compare.
#[derive(Args, Debug, Clone)]
struct SeriesArgs {
    /// First series, comma-separated (e.g. 1,2.5,3)
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true, allow_negative_numbers = true)]
    first: Vec<f64>,

    /// Second series, comma-separated
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true, allow_negative_numbers = true)]
    second: Vec<f64>,
}

impl SeriesArgs {
    fn into_series(self) -> Result<(TimeSeries, TimeSeries)> {
        let first = TimeSeries::new(self.first).context("invalid --first series")?;
        let second = TimeSeries::new(self.second).context("invalid --second series")?;
        Ok((first, second))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Compute the DTW distance, optionally abandoning above a cutoff
    Distance {
        #[command(flatten)]
        series: SeriesArgs,

        /// Abandon once the distance is certain to exceed this value
        #[arg(long, allow_negative_numbers = true)]
        cutoff: Option<f64>,

        /// Ignore --cutoff and always fill the whole cost matrix
        #[arg(long, default_value_t = false)]
        no_early_abandon: bool,
    },

    /// Compute the DTW distance and the minimum-cost warp path
    Align {
        #[command(flatten)]
        series: SeriesArgs,

        /// Include the full cumulative cost matrix in the output
        #[arg(long, default_value_t = false)]
        matrix: bool,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct DistanceOutput {
    n: usize,
    m: usize,
    early_abandon: bool,
    cutoff: Option<f64>,
    feasible: bool,
    distance: Option<f64>,
}

#[derive(Serialize)]
struct StepOutput {
    a: usize,
    b: usize,
    cost: f64,
}

#[derive(Serialize)]
struct AlignOutput {
    n: usize,
    m: usize,
    distance: f64,
    path: Vec<StepOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost_matrix: Option<Vec<Vec<f64>>>,
}

fn path_output(path: &WarpPath) -> Vec<StepOutput> {
    path.iter()
        .map(|s| StepOutput {
            a: s.a,
            b: s.b,
            cost: s.cost,
        })
        .collect()
}

fn matrix_output(matrix: &CostMatrix) -> Vec<Vec<f64>> {
    (0..matrix.rows()).map(|i| matrix.row(i).to_vec()).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Distance {
            series,
            cutoff,
            no_early_abandon,
        } => {
            let (first, second) = series.into_series()?;
            let mut dtw = BasicDtw::with_early_abandon(!no_early_abandon);

            let dist = match cutoff {
                Some(c) => dtw.distance_with_cutoff(first.as_view(), second.as_view(), c),
                None => dtw.distance(first.as_view(), second.as_view()),
            };
            info!(distance = %dist, state = %dtw.state(), "distance computed");

            let output = DistanceOutput {
                n: first.len(),
                m: second.len(),
                early_abandon: dtw.early_abandon(),
                cutoff,
                feasible: dist.is_feasible(),
                distance: dist.is_feasible().then(|| dist.value()),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Align { series, matrix } => {
            let (first, second) = series.into_series()?;
            let mut dtw = BasicDtw::new();

            let (dist, path) = dtw
                .distance_and_path(first.as_view(), second.as_view())
                .context("alignment failed")?;
            info!(distance = %dist, path_len = path.len(), "alignment computed");

            let output = AlignOutput {
                n: first.len(),
                m: second.len(),
                distance: dist.value(),
                path: path_output(&path),
                cost_matrix: matrix.then(|| matrix_output(dtw.cost_matrix())),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
