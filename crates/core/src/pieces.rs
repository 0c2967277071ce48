//! Pieces module - shape catalog and pivot rotation
//!
//! Each template is four relative `(x, y)` offsets with `y >= 0`. A template is only
//! used when a piece spawns; afterwards a piece is four absolute board coordinates
//! and the first one is its pivot.
//!
//! Rotation is a plain 90° turn around the pivot. There are no wall kicks: a
//! rotation either fits where it lands or is rejected.

use crate::types::{Coord, ShapeKind};

const SHAPE_I: [Coord; 4] = [(0, 0), (1, 0), (2, 0), (3, 0)];
const SHAPE_O: [Coord; 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const SHAPE_T: [Coord; 4] = [(1, 0), (0, 1), (1, 1), (2, 1)];
const SHAPE_S: [Coord; 4] = [(1, 0), (2, 0), (0, 1), (1, 1)];
const SHAPE_Z: [Coord; 4] = [(0, 0), (1, 0), (1, 1), (2, 1)];
const SHAPE_J: [Coord; 4] = [(0, 0), (0, 1), (1, 1), (2, 1)];
const SHAPE_L: [Coord; 4] = [(2, 0), (0, 1), (1, 1), (2, 1)];

/// Get the relative template for a shape kind
pub fn get_shape(kind: ShapeKind) -> [Coord; 4] {
    match kind {
        ShapeKind::I => SHAPE_I,
        ShapeKind::O => SHAPE_O,
        ShapeKind::T => SHAPE_T,
        ShapeKind::S => SHAPE_S,
        ShapeKind::Z => SHAPE_Z,
        ShapeKind::J => SHAPE_J,
        ShapeKind::L => SHAPE_L,
    }
}

/// Smallest and largest x of a set of cells
pub fn x_extent(cells: &[Coord; 4]) -> (i16, i16) {
    let mut min_x = cells[0].0;
    let mut max_x = cells[0].0;
    for &(x, _) in &cells[1..] {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    (min_x, max_x)
}

/// Horizontal offsets that keep `kind` inside `columns`, as an inclusive range.
///
/// The range is inverted (`lo > hi`) when the template is wider than the board.
pub fn spawn_offset_range(kind: ShapeKind, columns: u16) -> (i16, i16) {
    let (min_x, max_x) = x_extent(&get_shape(kind));
    (-min_x, columns as i16 - 1 - max_x)
}

/// Shift every cell by `(dx, dy)`
pub fn translate(cells: &[Coord; 4], dx: i16, dy: i16) -> [Coord; 4] {
    cells.map(|(x, y)| (x + dx, y + dy))
}

/// Rotate 90° counter-clockwise around the first cell
pub fn rotate_ccw(cells: &[Coord; 4]) -> [Coord; 4] {
    let (px, py) = cells[0];
    cells.map(|(x, y)| (px - (y - py), py + (x - px)))
}

/// Rotate 90° clockwise around the first cell
pub fn rotate_cw(cells: &[Coord; 4]) -> [Coord; 4] {
    let (px, py) = cells[0];
    cells.map(|(x, y)| (px + (y - py), py - (x - px)))
}

/// The horizontal I-piece a new game starts with, centered on row 0
pub fn initial_cells(columns: u16) -> [Coord; 4] {
    let mid = (columns / 2) as i16;
    [(mid - 2, 0), (mid - 1, 0), (mid, 0), (mid + 1, 0)]
}

/// Recognize cells as a catalog template translated horizontally.
///
/// Returns the matching kind and its x offset. Only spawn positions match: a piece
/// that has fallen or rotated is not recognized.
pub fn identify(cells: &[Coord; 4]) -> Option<(ShapeKind, i16)> {
    ShapeKind::ALL.into_iter().find_map(|kind| {
        let template = get_shape(kind);
        let offset = cells[0].0 - template[0].0;
        (translate(&template, offset, 0) == *cells).then_some((kind, offset))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_four_distinct_cells_on_top_rows() {
        for kind in ShapeKind::ALL {
            let shape = get_shape(kind);
            for (i, a) in shape.iter().enumerate() {
                assert!(a.1 >= 0, "{:?} has a negative row", kind);
                for b in &shape[i + 1..] {
                    assert_ne!(a, b, "{:?} repeats a cell", kind);
                }
            }
            let (min_x, _) = x_extent(&shape);
            assert_eq!(min_x, 0, "{:?} should start at column 0", kind);
        }
    }

    #[test]
    fn offset_range_spans_the_board() {
        assert_eq!(spawn_offset_range(ShapeKind::I, 20), (0, 16));
        assert_eq!(spawn_offset_range(ShapeKind::O, 20), (0, 18));
        assert_eq!(spawn_offset_range(ShapeKind::T, 20), (0, 17));
        // Wider than the board: inverted.
        assert_eq!(spawn_offset_range(ShapeKind::I, 3), (0, -1));
    }

    #[test]
    fn four_turns_return_to_start() {
        let start = translate(&get_shape(ShapeKind::L), 5, 5);
        let mut cw = start;
        let mut ccw = start;
        for _ in 0..4 {
            cw = rotate_cw(&cw);
            ccw = rotate_ccw(&ccw);
        }
        assert_eq!(cw, start);
        assert_eq!(ccw, start);
        assert_eq!(rotate_ccw(&rotate_cw(&start)), start);
    }

    #[test]
    fn rotation_keeps_pivot_fixed() {
        let cells = [(5, 5), (6, 5), (7, 5), (8, 5)];
        assert_eq!(rotate_ccw(&cells), [(5, 5), (5, 6), (5, 7), (5, 8)]);
        assert_eq!(rotate_cw(&cells), [(5, 5), (5, 4), (5, 3), (5, 2)]);
    }

    #[test]
    fn identify_recognizes_translated_templates() {
        for kind in ShapeKind::ALL {
            let cells = translate(&get_shape(kind), 7, 0);
            assert_eq!(identify(&cells), Some((kind, 7)));
        }
        assert_eq!(identify(&translate(&SHAPE_T, 7, 1)), None);
    }

    #[test]
    fn initial_piece_is_centered() {
        assert_eq!(initial_cells(20), [(8, 0), (9, 0), (10, 0), (11, 0)]);
        assert_eq!(identify(&initial_cells(20)), Some((ShapeKind::I, 8)));
    }
}
