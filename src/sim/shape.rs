//! Integer shape geometry
//!
//! Every shape is described relative to a center point. Two queries are
//! supported: the axis-aligned box a shape covers, and whether a single pixel
//! belongs to it. Both are pure.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::OUTLINE_THICKNESS;

/// Positions and velocities are integer pixel pairs
pub type Vec2 = IVec2;

/// Axis-aligned box with inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Region {
    pub top_left: Vec2,
    pub bot_right: Vec2,
}

impl Region {
    pub fn new(top_left: Vec2, bot_right: Vec2) -> Self {
        debug_assert!(top_left.x <= bot_right.x && top_left.y <= bot_right.y);
        Self {
            top_left,
            bot_right,
        }
    }

    /// Box spanning `center ± half_size`
    #[inline]
    pub fn around(center: Vec2, half_size: Vec2) -> Self {
        Self::new(center - half_size, center + half_size)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bot_right.x - self.top_left.x + 1
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bot_right.y - self.top_left.y + 1
    }

    /// Center point, rounded toward the top-left
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.top_left + self.bot_right) / 2
    }

    /// Number of pixels covered
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.top_left).all() && p.cmple(self.bot_right).all()
    }

    /// True if `other` lies entirely inside this region
    pub fn encloses(&self, other: &Region) -> bool {
        self.contains(other.top_left) && self.contains(other.bot_right)
    }

    /// Shrink every edge by `amount`; `None` once the box collapses
    pub fn inset(&self, amount: i32) -> Option<Region> {
        let top_left = self.top_left + Vec2::splat(amount);
        let bot_right = self.bot_right - Vec2::splat(amount);
        (top_left.cmple(bot_right).all()).then(|| Region::new(top_left, bot_right))
    }

    /// Overlap of two regions, if any
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let top_left = self.top_left.max(other.top_left);
        let bot_right = self.bot_right.min(other.bot_right);
        (top_left.cmple(bot_right).all()).then(|| Region::new(top_left, bot_right))
    }

    /// Pixel coordinates in row-major order (top-to-bottom, left-to-right)
    pub fn pixels(self) -> impl Iterator<Item = Vec2> {
        let Region {
            top_left,
            bot_right,
        } = self;
        (top_left.y..=bot_right.y)
            .flat_map(move |y| (top_left.x..=bot_right.x).map(move |x| Vec2::new(x, y)))
    }
}

/// Drawable shape geometry, immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// Solid rectangle
    FilledRect { half_size: Vec2 },
    /// Hollow rectangle; only a thin band along the border is hit
    RectOutline { half_size: Vec2 },
    /// Solid disc
    Circle { radius: i32 },
}

impl Shape {
    pub fn filled_rect(half_width: i32, half_height: i32) -> Self {
        Shape::FilledRect {
            half_size: Vec2::new(half_width, half_height),
        }
    }

    pub fn rect_outline(half_width: i32, half_height: i32) -> Self {
        Shape::RectOutline {
            half_size: Vec2::new(half_width, half_height),
        }
    }

    pub fn circle(radius: i32) -> Self {
        Shape::Circle { radius }
    }

    /// Bounding box of the shape when centered at `center`
    pub fn bounds(&self, center: Vec2) -> Region {
        match *self {
            Shape::FilledRect { half_size } | Shape::RectOutline { half_size } => {
                Region::around(center, half_size)
            }
            Shape::Circle { radius } => Region::around(center, Vec2::splat(radius)),
        }
    }

    /// Whether `point` is a pixel of the shape centered at `center`
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        match *self {
            Shape::FilledRect { .. } => self.bounds(center).contains(point),
            Shape::RectOutline { .. } => {
                let outer = self.bounds(center);
                if !outer.contains(point) {
                    return false;
                }
                match outer.inset(OUTLINE_THICKNESS) {
                    Some(inner) => !inner.contains(point),
                    None => true,
                }
            }
            Shape::Circle { radius } => (point - center).length_squared() <= radius * radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_bounds() {
        let rect = Shape::filled_rect(15, 5);
        let b = rect.bounds(Vec2::new(64, 15));
        assert_eq!(b.top_left, Vec2::new(49, 10));
        assert_eq!(b.bot_right, Vec2::new(79, 20));
        assert_eq!(b.width(), 31);
        assert_eq!(b.height(), 11);
    }

    #[test]
    fn test_circle_bounds() {
        let ball = Shape::circle(4);
        let b = ball.bounds(Vec2::new(64, 80));
        assert_eq!(b, Region::new(Vec2::new(60, 76), Vec2::new(68, 84)));
    }

    #[test]
    fn test_filled_rect_contains_edges() {
        let rect = Shape::filled_rect(2, 1);
        let c = Vec2::new(10, 10);
        assert!(rect.contains(c, Vec2::new(8, 9)));
        assert!(rect.contains(c, Vec2::new(12, 11)));
        assert!(!rect.contains(c, Vec2::new(13, 10)));
        assert!(!rect.contains(c, Vec2::new(10, 12)));
    }

    #[test]
    fn test_outline_is_hollow() {
        let frame = Shape::rect_outline(54, 70);
        let c = Vec2::new(64, 80);
        // Border pixels
        assert!(frame.contains(c, Vec2::new(10, 10)));
        assert!(frame.contains(c, Vec2::new(118, 80)));
        assert!(frame.contains(c, Vec2::new(64, 150)));
        // Interior is empty
        assert!(!frame.contains(c, Vec2::new(11, 11)));
        assert!(!frame.contains(c, c));
        // Outside
        assert!(!frame.contains(c, Vec2::new(9, 80)));
    }

    #[test]
    fn test_tiny_outline_is_solid() {
        let frame = Shape::rect_outline(0, 3);
        let c = Vec2::new(5, 5);
        assert!(frame.contains(c, Vec2::new(5, 5)));
    }

    #[test]
    fn test_circle_contains() {
        let ball = Shape::circle(4);
        let c = Vec2::new(0, 0);
        assert!(ball.contains(c, Vec2::new(4, 0)));
        assert!(ball.contains(c, Vec2::new(0, -4)));
        assert!(ball.contains(c, Vec2::new(2, 3)));
        // Box corner lies outside the disc
        assert!(!ball.contains(c, Vec2::new(4, 4)));
        assert!(!ball.contains(c, Vec2::new(3, 3)));
    }

    #[test]
    fn test_region_intersect() {
        let a = Region::new(Vec2::new(0, 0), Vec2::new(10, 10));
        let b = Region::new(Vec2::new(5, -3), Vec2::new(20, 4));
        assert_eq!(
            a.intersect(&b),
            Some(Region::new(Vec2::new(5, 0), Vec2::new(10, 4)))
        );
        let c = Region::new(Vec2::new(11, 0), Vec2::new(12, 1));
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_region_pixels_row_major() {
        let r = Region::new(Vec2::new(1, 1), Vec2::new(2, 2));
        let pixels: Vec<_> = r.pixels().collect();
        assert_eq!(
            pixels,
            vec![
                Vec2::new(1, 1),
                Vec2::new(2, 1),
                Vec2::new(1, 2),
                Vec2::new(2, 2)
            ]
        );
        assert_eq!(r.area(), 4);
    }
}
