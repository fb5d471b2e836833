//! Axis-aligned rectangle geometry
//!
//! Screen space: x grows right, y grows down. Edge setters move the rectangle,
//! they never resize it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A float rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
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

    /// Rectangle of the given size whose bottom-center sits at `anchor`
    pub fn from_midbottom(anchor: Vec2, w: f32, h: f32) -> Self {
        Self::new(anchor.x - w / 2.0, anchor.y - h, w, h)
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.bottom())
    }

    pub fn set_midbottom(&mut self, anchor: Vec2) {
        self.x = anchor.x - self.w / 2.0;
        self.y = anchor.y - self.h;
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True when the horizontal extents intersect or touch
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        !(other.right() < self.left() || other.left() > self.right())
    }

    /// True when the vertical extents intersect or touch
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top() <= other.bottom() && self.bottom() >= other.top()
    }
}
