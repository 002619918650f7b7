//! Axis-aligned rectangle geometry
//!
//! Everything in the yard is an axis-aligned rect in screen pixels:
//! walls, the player, wasps, seeds, the grub. Collision is a pure overlap
//! query; there is no rotation and no sub-rect geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, origin at top-left, in screen pixels.
///
/// Width and height are non-negative; `World` and the spawn paths enforce
/// this at construction so queries never have to re-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True iff the two rects share positive-area intersection.
    ///
    /// Edge-touching rects (zero-width overlap) do NOT collide; the strict
    /// comparisons here are what lets actors sit flush against walls.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The rect translated by `delta`, size unchanged.
    #[inline]
    pub fn translated(&self, delta: Vec2) -> Rect {
        Rect::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }

    /// The rect translated minimally so it lies fully inside `bounds`.
    ///
    /// If the rect is wider/taller than `bounds` it is pinned to the
    /// bounds origin on that axis.
    pub fn clamp_within(&self, bounds: &Rect) -> Rect {
        let max_x = (bounds.right() - self.w).max(bounds.x);
        let max_y = (bounds.bottom() - self.h).max(bounds.y);
        Rect::new(
            self.x.clamp(bounds.x, max_x),
            self.y.clamp(bounds.y, max_y),
            self.w,
            self.h,
        )
    }

    /// The rect grown by `margin` on every side (used for spawn clearance).
    pub fn inflated(&self, margin: f32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            (self.w + 2.0 * margin).max(0.0),
            (self.h + 2.0 * margin).max(0.0),
        )
    }

    /// True iff `other` lies fully inside this rect.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
