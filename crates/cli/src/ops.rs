//! JSON transform pipelines for the `transform` subcommand.
//!
//! A pipeline is a JSON array of tagged steps, applied first to last:
//! `[{"op": "translate", "x": -2, "y": -2}, {"op": "rotate", "deg": 90}]`.
//! Angles are degrees here; the library takes radians.

use anyhow::{Context, Result};
use planar::geom2::affine::{combining, mirroring, rotation, scaling, skewing, translating};
use planar::scalar::radians;
use planar::{V2Transform, V2};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OpSpec {
    Translate {
        x: f64,
        y: f64,
    },
    Rotate {
        deg: f64,
    },
    /// `y` defaults to `x` (uniform).
    Scale {
        x: f64,
        #[serde(default)]
        y: Option<f64>,
    },
    /// `y_deg` defaults to `x_deg` (symmetric).
    Skew {
        x_deg: f64,
        #[serde(default)]
        y_deg: Option<f64>,
    },
    Mirror {
        #[serde(default = "mirror_x_default")]
        x: bool,
        #[serde(default)]
        y: bool,
    },
}

fn mirror_x_default() -> bool {
    true
}

impl OpSpec {
    pub fn to_transform(&self) -> V2Transform {
        match *self {
            OpSpec::Translate { x, y } => translating(V2::new(x, y)),
            OpSpec::Rotate { deg } => rotation(radians(deg)),
            OpSpec::Scale { x, y } => scaling(x, y),
            OpSpec::Skew { x_deg, y_deg } => skewing(radians(x_deg), y_deg.map(radians)),
            OpSpec::Mirror { x, y } => mirroring(x, y),
        }
    }
}

pub fn parse_ops(json: &str) -> Result<Vec<OpSpec>> {
    serde_json::from_str(json).context("ops must be a JSON array of {\"op\": ...} objects")
}

/// Single transform for the whole pipeline, first step applied first.
pub fn pipeline(ops: &[OpSpec]) -> V2Transform {
    let ts: Vec<V2Transform> = ops.iter().map(OpSpec::to_transform).collect();
    combining(&ts)
}
