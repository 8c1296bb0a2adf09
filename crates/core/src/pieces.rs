//! Pieces module - the static shape catalog
//!
//! Every shape is four explicit `(col, row)` offsets with the top row at 0,
//! plus the color its cells carry once locked. Shapes never rotate, so one
//! table entry per kind is the whole catalog.

use crate::types::{Color, ShapeKind};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub offsets: PieceShape,
    pub color: Color,
}

/// The catalog, indexed by [`ShapeKind::index`]
pub const CATALOG: [ShapeDef; ShapeKind::COUNT] = [
    // I: ####
    ShapeDef {
        offsets: [(0, 0), (1, 0), (2, 0), (3, 0)],
        color: Color::Red,
    },
    // J: vertical bar with the foot on the left
    ShapeDef {
        offsets: [(2, 0), (2, 1), (2, 2), (1, 2)],
        color: Color::Green,
    },
    // L: vertical bar with the foot on the right
    ShapeDef {
        offsets: [(1, 0), (1, 1), (1, 2), (2, 2)],
        color: Color::Blue,
    },
    // Stair: vertical step down to the right
    ShapeDef {
        offsets: [(1, 0), (1, 1), (2, 1), (2, 2)],
        color: Color::Yellow,
    },
    // S
    ShapeDef {
        offsets: [(3, 0), (2, 0), (2, 1), (1, 1)],
        color: Color::Cyan,
    },
    // T
    ShapeDef {
        offsets: [(2, 0), (2, 1), (3, 1), (1, 1)],
        color: Color::Magenta,
    },
    // Z
    ShapeDef {
        offsets: [(1, 0), (2, 0), (2, 1), (3, 1)],
        color: Color::Gray,
    },
];

/// Get the catalog entry for a shape kind
#[inline]
pub fn shape_def(kind: ShapeKind) -> &'static ShapeDef {
    &CATALOG[kind.index()]
}

/// Get the cell offsets for a shape kind
pub fn get_shape(kind: ShapeKind) -> PieceShape {
    shape_def(kind).offsets
}

/// Get the color for a shape kind
pub fn shape_color(kind: ShapeKind) -> Color {
    shape_def(kind).color
}
