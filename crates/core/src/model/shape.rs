use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Identifier of a side within one shape. Stable, dense, starts at 0.
pub type SideId = u8;

/// One labeled, clickable side of a challenge shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Side {
    pub id: SideId,
    pub from: Point,
    pub to: Point,
}

/// Drawing coordinate space of a shape, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

/// A shape puzzle: labeled sides plus the author-defined set of parallel
/// side pairs that count as correct answers. Pairs are unordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDefinition {
    pub name: String,
    pub instruction: String,
    pub view_box: ViewBox,
    pub sides: Vec<Side>,
    pub parallel_pairs: Vec<(SideId, SideId)>,
}

impl ShapeDefinition {
    #[must_use]
    pub fn side(&self, id: SideId) -> Option<&Side> {
        self.sides.iter().find(|side| side.id == id)
    }

    /// Whether `{a, b}` matches a ground-truth parallel pair, in either order.
    #[must_use]
    pub fn is_parallel_pair(&self, a: SideId, b: SideId) -> bool {
        self.parallel_pairs
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}
