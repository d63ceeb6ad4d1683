//! Scene definitions
//!
//! Obstacle layouts supplied at startup, either as literal structs or parsed
//! from a JSON string. There is no on-disk format of record; JSON is a
//! convenience for callers that keep scenes as data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::colors;

/// A box obstacle definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxDef {
    pub pos: Vec2,
    pub dim: Vec2,
    #[serde(default = "default_color")]
    pub color: [f32; 4],
}

/// A chain obstacle definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainDef {
    pub points: Vec<Vec2>,
    #[serde(default = "default_color")]
    pub color: [f32; 4],
    #[serde(default)]
    pub clockwise: bool,
    #[serde(default)]
    pub concave: bool,
}

fn default_color() -> [f32; 4] {
    colors::OBSTACLE
}

/// Complete obstacle layout for a world
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDef {
    #[serde(default)]
    pub boxes: Vec<BoxDef>,
    #[serde(default)]
    pub chains: Vec<ChainDef>,
}

impl SceneDef {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The built-in sandbox layout: four border walls, two convex ledges and a
/// concave ten-pointed star. The ledges each carry a near-duplicate point,
/// which keeps degenerate boundary handling exercised end to end.
pub fn demo_scene(width: f32, height: f32) -> SceneDef {
    let v = Vec2::new;

    SceneDef {
        boxes: vec![
            BoxDef {
                pos: v(10.0, height / 2.0),
                dim: v(20.0, height - 40.0),
                color: colors::OBSTACLE,
            },
            BoxDef {
                pos: v(width - 10.0, height / 2.0),
                dim: v(20.0, height - 40.0),
                color: colors::OBSTACLE,
            },
            BoxDef {
                pos: v(width / 2.0, 10.0),
                dim: v(width, 20.0),
                color: colors::OBSTACLE,
            },
            BoxDef {
                pos: v(width / 2.0, height - 10.0),
                dim: v(width, 20.0),
                color: colors::OBSTACLE,
            },
        ],
        chains: vec![
            ChainDef {
                points: vec![
                    v(700.0, 300.0),
                    v(700.0, 301.0),
                    v(700.0, 350.0),
                    v(400.0, 350.0),
                    v(500.0, 300.0),
                ],
                color: colors::OBSTACLE,
                clockwise: false,
                concave: false,
            },
            ChainDef {
                points: vec![
                    v(100.0, 350.0),
                    v(99.0, 350.0),
                    v(20.0, 350.0),
                    v(20.0, 300.0),
                    v(50.0, 300.0),
                ],
                color: colors::OBSTACLE,
                clockwise: false,
                concave: false,
            },
            ChainDef {
                points: vec![
                    v(550.0, 80.0),
                    v(550.0, 80.0),
                    v(570.0, 160.0),
                    v(650.0, 160.0),
                    v(590.0, 210.0),
                    v(610.0, 290.0),
                    v(550.0, 240.0),
                    v(490.0, 290.0),
                    v(510.0, 210.0),
                    v(450.0, 160.0),
                    v(530.0, 160.0),
                ],
                color: colors::OBSTACLE,
                clockwise: false,
                concave: true,
            },
        ],
    }
}
