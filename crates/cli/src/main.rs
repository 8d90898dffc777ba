use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graham::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Graham-scan convex hull runner")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (.csv, .parquet or .json)
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Fail instead of writing a segment when all points are collinear
        #[arg(long)]
        strict: bool,
    },
    /// Write a replayable random point cloud (disk) as CSV
    Sample {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        /// Snap coordinates to this grid step
        #[arg(long)]
        grid: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Result file written by `run`.
#[derive(Debug, Serialize)]
struct HullReport {
    pivot: (f64, f64),
    hull: Vec<(f64, f64)>,
    input_points: usize,
    distinct_points: usize,
    degenerate: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { input, out, strict } => run(&input, &out, strict, cmd.tag).map(|_| ()),
        Action::Sample {
            count,
            seed,
            index,
            radius,
            grid,
            out,
        } => sample(count, seed, index, radius, grid, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run(input: &Path, out: &Path, strict: bool, tag: Option<String>) -> Result<HullReport> {
    tracing::info!(input = %input.display(), out = %out.display(), strict, tag = ?tag, "run");
    let points = input::read_points(input)?;
    let set = PointSet::from_coords(&points)
        .with_context(|| format!("building point set from {}", input.display()))?;
    let hull = if strict {
        set.polygon()
            .with_context(|| format!("hull of {}", input.display()))?
    } else {
        set.hull()
    };
    let report = HullReport {
        pivot: set.pivot().to_tuple(),
        hull: hull.iter().map(|p| p.to_tuple()).collect(),
        input_points: points.len(),
        distinct_points: set.len(),
        degenerate: hull.len() < 3,
    };
    tracing::info!(
        distinct = report.distinct_points,
        hull = report.hull.len(),
        degenerate = report.degenerate,
        "hull"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(json!({
        "command": "run",
        "input": input.to_string_lossy(),
        "strict": strict,
        "input_points": report.input_points,
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(report)
}

fn sample(
    count: usize,
    seed: u64,
    index: u64,
    radius: f64,
    grid: Option<f64>,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(count, seed, index, radius, grid = ?grid, out = %out.display(), "sample");
    let cfg = CloudCfg {
        count: PointCount::Fixed(count),
        region: Region::Disk { radius },
        grid_step: grid,
    };
    let points: Vec<(f64, f64)> = draw_point_cloud(cfg, ReplayToken::new(seed, index))
        .into_iter()
        .map(Point::to_tuple)
        .collect();
    input::write_points_csv(out, &points)?;
    let payload = provenance::Payload::new(json!({
        "command": "sample",
        "count": count,
        "seed": seed,
        "index": index,
        "radius": radius,
        "grid": grid,
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = provenance::Payload::new(json!({})).with_tag(tag);
    let doc = provenance::document(&payload, &[], std::panic::Location::caller());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
