use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::geom2::vector::{bounding_box, center, distance};
use planar::scalar::radians;
use planar::{Ray, V2};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod input;
mod ops;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Command-line front end for the planar geometry kernel")]
struct Cmd {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Project a point onto a ray given by origin and angle
    Ray {
        #[arg(long, value_parser = input::parse_pair, allow_hyphen_values = true)]
        origin: V2,
        #[arg(long, allow_hyphen_values = true)]
        angle_deg: f64,
        #[arg(long, value_parser = input::parse_pair, allow_hyphen_values = true)]
        point: V2,
    },
    /// Axis-aligned bounding box of a point set
    Bbox {
        #[command(flatten)]
        points: PointsArgs,
    },
    /// Arithmetic mean of a point set
    Center {
        #[command(flatten)]
        points: PointsArgs,
    },
    /// Apply a JSON pipeline of transforms (first step applied first)
    Transform {
        #[command(flatten)]
        points: PointsArgs,
        #[arg(long)]
        ops: String,
    },
}

#[derive(clap::Args)]
struct PointsArgs {
    /// JSON array of [x, y] pairs
    #[arg(long, conflicts_with = "input")]
    points: Option<String>,
    /// File containing a JSON array of [x, y] pairs
    #[arg(long)]
    input: Option<PathBuf>,
}

impl PointsArgs {
    fn load(&self) -> Result<Vec<V2>> {
        input::load_points(self.points.as_deref(), self.input.as_deref())
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    let out = match cmd.action {
        Action::Ray {
            origin,
            angle_deg,
            point,
        } => ray(origin, angle_deg, point),
        Action::Bbox { points } => bbox(&points.load()?),
        Action::Center { points } => centroid(&points.load()?),
        Action::Transform { points, ops } => apply(&points.load()?, &ops),
    }?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn pair(v: V2) -> [f64; 2] {
    [v.x, v.y]
}

fn ray(origin: V2, angle_deg: f64, point: V2) -> Result<Value> {
    tracing::info!(?origin, angle_deg, ?point, "ray");
    let r = Ray::from_angle(origin, radians(angle_deg));
    let t = r.t_parameter(point);
    let foot = r.point_at(t);
    tracing::debug!(t, ?foot, "projected");
    Ok(json!({
        "t": t,
        "foot": pair(foot),
        "offset": distance(point, foot),
    }))
}

fn bbox(points: &[V2]) -> Result<Value> {
    tracing::info!(n = points.len(), "bbox");
    let b = bounding_box(points)?;
    Ok(json!({
        "min": pair(b.min),
        "max": pair(b.max),
    }))
}

fn centroid(points: &[V2]) -> Result<Value> {
    tracing::info!(n = points.len(), "center");
    let c = center(points)?;
    Ok(json!({ "center": pair(c) }))
}

fn apply(points: &[V2], ops_json: &str) -> Result<Value> {
    let steps = ops::parse_ops(ops_json)?;
    tracing::info!(n = points.len(), steps = steps.len(), "transform");
    let t = ops::pipeline(&steps);
    tracing::debug!(matrix = ?t.row_major(), "combined");
    let out: Vec<[f64; 2]> = points.iter().map(|p| pair(t.apply(*p))).collect();
    Ok(json!({
        "matrix": t.row_major(),
        "determinant": t.determinant(),
        "points": out,
    }))
}
