//! Pieces tests - template catalog, rotation and spawn placement

use mehrstein_tetris::core::{get_shape, identify, Piece};
use mehrstein_tetris::types::{Color, ShapeKind};

#[test]
fn test_catalog_templates() {
    assert_eq!(get_shape(ShapeKind::I), [(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(get_shape(ShapeKind::O), [(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(get_shape(ShapeKind::T), [(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(get_shape(ShapeKind::S), [(1, 0), (2, 0), (0, 1), (1, 1)]);
    assert_eq!(get_shape(ShapeKind::Z), [(0, 0), (1, 0), (1, 1), (2, 1)]);
    assert_eq!(get_shape(ShapeKind::J), [(0, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(get_shape(ShapeKind::L), [(2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_templates_are_distinct() {
    for (i, a) in ShapeKind::ALL.iter().enumerate() {
        for b in &ShapeKind::ALL[i + 1..] {
            assert_ne!(get_shape(*a), get_shape(*b), "{:?} and {:?} share cells", a, b);
        }
    }
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in ShapeKind::ALL {
        let start = Piece::new(get_shape(kind), Color::Red).translated(6, 6);

        let mut ccw = start;
        let mut cw = start;
        for _ in 0..4 {
            ccw = ccw.rotated_ccw();
            cw = cw.rotated_cw();
            assert_eq!(ccw.pivot(), start.pivot());
            assert_eq!(cw.pivot(), start.pivot());
        }
        assert_eq!(ccw, start, "{:?} ccw", kind);
        assert_eq!(cw, start, "{:?} cw", kind);
    }
}

#[test]
fn test_cw_undoes_ccw() {
    for kind in ShapeKind::ALL {
        let start = Piece::new(get_shape(kind), Color::Blue).translated(5, 5);
        assert_eq!(start.rotated_ccw().rotated_cw(), start);
    }
}

#[test]
fn test_ccw_quarter_turn_of_horizontal_i() {
    let piece = Piece::new(get_shape(ShapeKind::I), Color::Cyan).translated(3, 4);
    let turned = piece.rotated_ccw();
    assert_eq!(turned.cells(), &[(3, 4), (3, 5), (3, 6), (3, 7)]);
    assert_eq!(turned.color(), Color::Cyan);
}

#[test]
fn test_translation_keeps_shape() {
    let piece = Piece::new(get_shape(ShapeKind::Z), Color::Green);
    let moved = piece.translated(4, 2);
    assert_eq!(moved.cells(), &[(4, 2), (5, 2), (5, 3), (6, 3)]);
    assert_eq!(identify(piece.translated(4, 0).cells()), Some((ShapeKind::Z, 4)));
    assert_eq!(identify(moved.cells()), None);
}
