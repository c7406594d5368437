//=========================================================================
// Tile-Space Geometry
//=========================================================================
//
// Integer vectors and rectangles in tile units.
//
// Coordinate system: x grows right, y grows DOWN. Actor positions refer
// to the bottom-left tile of the actor, so world-space boxes are anchored
// at their bottom edge.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::IVec2;

//=== Vector ==============================================================

/// Position or offset in tile units.
pub type Vector = IVec2;

//=== Extents =============================================================

/// Width and height of a rectangle in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extents {
    pub width: i32,
    pub height: i32,
}

impl Extents {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle, `top_left` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub top_left: Vector,
    pub size: Extents,
}

impl Rect {
    pub const fn new(top_left: Vector, size: Extents) -> Self {
        Self { top_left, size }
    }

    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    pub fn right(&self) -> i32 {
        self.top_left.x + self.size.width - 1
    }

    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    pub fn bottom(&self) -> i32 {
        self.top_left.y + self.size.height - 1
    }

    /// Returns `true` if both rectangles share at least one tile.
    pub fn intersects(&self, other: &Rect) -> bool {
        let is_empty = |r: &Rect| r.size.width <= 0 || r.size.height <= 0;
        if is_empty(self) || is_empty(other) {
            return false;
        }

        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Converts a local-space box into world space for an actor at
    /// `position`, aligning the box's bottom edge with the position.
    pub fn to_world_space(&self, position: Vector) -> Rect {
        let offset = Vector::new(position.x, position.y - (self.size.height - 1));
        Rect::new(self.top_left + offset, self.size)
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(Vector::new(x, y), Extents::new(w, h))
    }

    #[test]
    fn overlapping_rects_intersect() {
        assert!(rect(0, 0, 3, 3).intersects(&rect(2, 2, 3, 3)));
        assert!(rect(2, 2, 3, 3).intersects(&rect(0, 0, 3, 3)));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        // Right edge of the first box is x = 2, second box starts at x = 3
        assert!(!rect(0, 0, 3, 3).intersects(&rect(3, 0, 3, 3)));
        assert!(!rect(0, 0, 3, 3).intersects(&rect(0, 3, 3, 3)));
    }

    #[test]
    fn empty_rect_never_intersects() {
        assert!(!rect(0, 0, 0, 3).intersects(&rect(0, 0, 3, 3)));
    }

    #[test]
    fn world_space_box_is_bottom_anchored() {
        let local = rect(0, 0, 2, 3);
        let world = local.to_world_space(Vector::new(10, 20));

        assert_eq!(world.top_left, Vector::new(10, 18));
        assert_eq!(world.bottom(), 20);
    }

    #[test]
    fn world_space_keeps_local_offset() {
        let local = rect(1, -1, 1, 1);
        let world = local.to_world_space(Vector::new(4, 4));
        assert_eq!(world.top_left, Vector::new(5, 3));
    }
}
