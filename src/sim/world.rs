//! Static level geometry
//!
//! A `World` is the yard boundary plus an ordered list of wall rects,
//! fixed at load time. The sim only ever reads it; there is no mutation
//! API during play. Level geometry arrives as a literal tuple list from
//! whatever loads the level.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{YARD_HEIGHT, YARD_WIDTH};

/// Rejected level geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// The yard boundary has a negative or non-finite dimension.
    BadBounds,
    /// Wall at this index (load order) has a negative or non-finite dimension.
    BadWall(usize),
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::BadBounds => write!(f, "yard bounds have a degenerate dimension"),
            GeomError::BadWall(i) => write!(f, "wall #{i} has a degenerate dimension"),
        }
    }
}

impl std::error::Error for GeomError {}

fn well_formed(r: &Rect) -> bool {
    r.x.is_finite()
        && r.y.is_finite()
        && r.w.is_finite()
        && r.h.is_finite()
        && r.w >= 0.0
        && r.h >= 0.0
}

/// The immutable play field: outer bounds plus wall obstacles.
///
/// Deserialization funnels through [`World::new`], so a hand-edited save
/// can't smuggle degenerate geometry past the load-time checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "WorldRepr")]
pub struct World {
    bounds: Rect,
    walls: Vec<Rect>,
}

/// Raw serialized form of a `World`, validated on the way in.
#[derive(Deserialize)]
struct WorldRepr {
    bounds: Rect,
    walls: Vec<Rect>,
}

impl TryFrom<WorldRepr> for World {
    type Error = GeomError;

    fn try_from(repr: WorldRepr) -> Result<Self, GeomError> {
        World::new(repr.bounds, repr.walls)
    }
}

impl World {
    /// Build a world, rejecting degenerate geometry up front so the rest
    /// of the sim never has to.
    pub fn new(bounds: Rect, walls: Vec<Rect>) -> Result<Self, GeomError> {
        if !well_formed(&bounds) {
            return Err(GeomError::BadBounds);
        }
        for (i, wall) in walls.iter().enumerate() {
            if !well_formed(wall) {
                return Err(GeomError::BadWall(i));
            }
        }
        Ok(Self { bounds, walls })
    }

    /// Build from the literal `(x, y, w, h)` integer tuples a level file
    /// supplies, with the default yard bounds.
    pub fn from_tuples(walls: &[(i32, i32, i32, i32)]) -> Result<Self, GeomError> {
        let walls = walls
            .iter()
            .map(|&(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
            .collect();
        Self::new(Rect::new(0.0, 0.0, YARD_WIDTH, YARD_HEIGHT), walls)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Walls in load order.
    pub fn walls(&self) -> impl Iterator<Item = &Rect> {
        self.walls.iter()
    }

    pub fn wall_slice(&self) -> &[Rect] {
        &self.walls
    }

    /// True iff `rect` overlaps any wall.
    pub fn hits_wall(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|w| rect.overlaps(w))
    }

    /// The built-in demo level: an 800x600 yard with a few planter walls.
    pub fn demo_yard() -> Self {
        Self::from_tuples(&[
            (150, 120, 40, 360),
            (610, 120, 40, 360),
            (300, 60, 200, 40),
            (300, 500, 200, 40),
        ])
        .expect("demo level geometry is well-formed")
    }
}
