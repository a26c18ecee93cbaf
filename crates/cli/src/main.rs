use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quickhull::cfg::{
    DEFAULT_OUTPUT_FILE, DEFAULT_POINT_COUNT, DEFAULT_SEED, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_MARGIN, DEFAULT_WINDOW_WIDTH,
};
use quickhull::{HullCfg, Point, QuickHull, RandomPointsCfg, ReferencePoint, WindowCfg};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Stepwise QuickHull runner")]
struct Cmd {
    /// Log computation start and finish
    #[arg(long, global = true)]
    verbose: bool,
    /// Log every traversal step
    #[arg(long, global = true)]
    trace_steps: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a hull step by step and write `<x>,<y>` lines to the output file
    Run(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct RunArgs {
    /// CSV file with `x` and `y` columns; random points are used when absent
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Number of random points
    #[arg(long)]
    random: Option<usize>,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: i64,
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: i64,
    #[arg(long, default_value_t = DEFAULT_WINDOW_MARGIN)]
    margin: i64,
    /// Reference x for the angular sort (default: window midpoint)
    #[arg(long)]
    center_x: Option<i64>,
    /// Reference y for the angular sort (default: window midpoint)
    #[arg(long)]
    center_y: Option<i64>,
    /// Sort around the mean of the hull points instead of a fixed center
    #[arg(long, conflicts_with_all = ["center_x", "center_y"])]
    hull_mean: bool,
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    out: PathBuf,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    source: String,
    points: usize,
    steps: usize,
    nodes: usize,
    hull: Vec<[i64; 2]>,
    written: bool,
    /// Sidecar path, when it was written.
    #[serde(skip)]
    provenance: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.trace_steps {
        Level::TRACE
    } else if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Run(args) => {
            let summary = run(&args)?;
            for [x, y] in &summary.hull {
                println!("{x},{y}");
            }
            Ok(())
        }
        Action::Report => report(),
    }
}

impl RunArgs {
    fn window(&self) -> WindowCfg {
        WindowCfg {
            width: self.width,
            height: self.height,
            margin: self.margin,
        }
    }

    fn hull_cfg(&self) -> HullCfg {
        if self.hull_mean {
            return HullCfg::with_reference(ReferencePoint::HullMean);
        }
        let c = self.window().center();
        HullCfg::with_reference(ReferencePoint::Fixed(Point::new(
            self.center_x.unwrap_or(c.x),
            self.center_y.unwrap_or(c.y),
        )))
    }
}

fn run(args: &RunArgs) -> Result<RunSummary> {
    tracing::info!(input = ?args.input, random = ?args.random, seed = args.seed, out = %args.out.display(), "run");
    let (mut qh, source) = match &args.input {
        Some(path) => {
            let pts = points::load_points_csv(path)?;
            let qh = QuickHull::new(&pts, args.hull_cfg())
                .with_context(|| format!("starting hull over {}", path.display()))?;
            (qh, path.display().to_string())
        }
        None => {
            let cfg = RandomPointsCfg {
                count: args.random.unwrap_or(DEFAULT_POINT_COUNT),
                window: args.window(),
            };
            let qh = QuickHull::from_random(cfg, args.seed, args.hull_cfg())
                .context("starting hull over random points")?;
            (qh, format!("random(count={}, seed={})", cfg.count, args.seed))
        }
    };

    let steps = qh.run();
    let hull = qh.finalize();
    tracing::info!(
        points = qh.input_points().len(),
        steps,
        hull_points = hull.len(),
        "hull complete"
    );

    // A failed write leaves the computed hull intact; it is still reported.
    let written = match hull.write_file(&args.out) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(%err, out = %args.out.display(), "unable to create output file; is the folder write-protected?");
            false
        }
    };

    let mut summary = RunSummary {
        source,
        points: qh.input_points().len(),
        steps,
        nodes: qh.tree().created_count(),
        hull: hull.points().iter().map(|p| [p.x, p.y]).collect(),
        written,
        provenance: None,
    };
    if written {
        // Same as the output file: a missing sidecar does not fail the run.
        match write_provenance(args, &summary) {
            Ok(path) => {
                tracing::info!(provenance = %path.display(), "wrote");
                summary.provenance = Some(path);
            }
            Err(err) => {
                tracing::error!(err = %format!("{err:#}"), out = %args.out.display(), "unable to write provenance sidecar");
            }
        }
    }
    Ok(summary)
}

fn write_provenance(args: &RunArgs, summary: &RunSummary) -> Result<PathBuf> {
    let params = serde_json::json!({
        "input": args.input.as_ref().map(|p| p.display().to_string()),
        "random": args.random,
        "seed": args.seed,
        "window": [args.width, args.height, args.margin],
        "reference": format!("{:?}", args.hull_cfg().reference),
    });
    provenance::write_sidecar(&args.out, params, serde_json::to_value(summary)?)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::git_rev(),
        "quickhull_version": quickhull::VERSION,
        "defaults": {
            "window": [DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_MARGIN],
            "points": DEFAULT_POINT_COUNT,
            "seed": DEFAULT_SEED,
            "out": DEFAULT_OUTPUT_FILE,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> RunArgs {
        let mut full = vec!["cli", "run"];
        full.extend_from_slice(args);
        match Cmd::parse_from(full).action {
            Action::Run(a) => a,
            Action::Report => panic!("expected run"),
        }
    }

    #[test]
    fn csv_square_writes_four_lines() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        let out = dir.path().join("points.txt");
        fs::write(&input, "x,y\n0,0\n10,0\n10,10\n0,10\n5,5\n").unwrap();
        let args = parse(&[
            "--input",
            input.to_str().unwrap(),
            "--center-x",
            "5",
            "--center-y",
            "5",
            "--out",
            out.to_str().unwrap(),
        ]);
        let summary = run(&args).unwrap();
        assert!(summary.written);
        assert_eq!(summary.hull.len(), 4);
        assert!(!summary.hull.contains(&[5, 5]));
        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with('\n'));
        let sidecar = dir.path().join("points.provenance.json");
        assert!(sidecar.exists());
        assert_eq!(summary.provenance.as_deref(), Some(sidecar.as_path()));
    }

    #[test]
    fn random_run_is_reproducible() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("a.txt");
        let args = parse(&["--random", "300", "--seed", "9", "--out", out.to_str().unwrap()]);
        let a = run(&args).unwrap();
        let b = run(&args).unwrap();
        assert_eq!(a.hull, b.hull);
        assert_eq!(a.points, 300);
    }

    #[test]
    fn unwritable_output_is_not_fatal() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("missing").join("points.txt");
        let args = parse(&["--random", "50", "--out", out.to_str().unwrap()]);
        let summary = run(&args).unwrap();
        assert!(!summary.written);
        assert!(summary.hull.len() >= 3);
    }

    #[test]
    fn sidecar_failure_still_returns_hull() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("points.txt");
        // a directory where the sidecar file should go
        fs::create_dir(dir.path().join("points.provenance.json")).unwrap();
        let args = parse(&["--random", "40", "--out", out.to_str().unwrap()]);
        let summary = run(&args).unwrap();
        assert!(summary.written);
        assert_eq!(summary.provenance, None);
        assert_eq!(
            fs::read_to_string(&out).unwrap().lines().count(),
            summary.hull.len()
        );
    }

    #[test]
    fn hull_mean_conflicts_with_center() {
        let res = Cmd::try_parse_from(["cli", "run", "--hull-mean", "--center-x", "3"]);
        assert!(res.is_err());
    }
}
