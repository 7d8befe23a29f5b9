use anyhow::{bail, Context, Result};
use planar::V2;
use std::fs;
use std::path::Path;

/// Parse a JSON array of `[x, y]` pairs.
pub fn parse_points(json: &str) -> Result<Vec<V2>> {
    let raw: Vec<[f64; 2]> =
        serde_json::from_str(json).context("points must be a JSON array of [x, y] pairs")?;
    Ok(raw.into_iter().map(|[x, y]| V2::new(x, y)).collect())
}

/// Read a points file (same JSON shape as `--points`).
pub fn read_points(path: &Path) -> Result<Vec<V2>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Points from exactly one of `--points` / `--input`.
pub fn load_points(points: Option<&str>, input: Option<&Path>) -> Result<Vec<V2>> {
    match (points, input) {
        (Some(json), None) => parse_points(json),
        (None, Some(path)) => read_points(path),
        (Some(_), Some(_)) => bail!("pass either --points or --input, not both"),
        (None, None) => bail!("one of --points or --input is required"),
    }
}

/// Parse `X,Y` into a vector.
pub fn parse_pair(s: &str) -> Result<V2> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected X,Y, got {s:?}"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok(V2::new(x, y))
}
