//! Piece catalog and rotation tests.

use gridfall::core::Shape;
use gridfall::types::PieceKind;

#[test]
fn catalog_has_seven_distinct_shapes() {
    for (i, a) in PieceKind::ALL.iter().enumerate() {
        for b in &PieceKind::ALL[i + 1..] {
            assert_ne!(
                Shape::canonical(*a),
                Shape::canonical(*b),
                "{:?} vs {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn rotation_is_a_cyclic_group_of_order_four() {
    for kind in PieceKind::ALL {
        let base = Shape::canonical(kind);
        let mut shape = base.clone();
        for _ in 0..4 {
            shape = shape.rotated();
        }
        assert_eq!(shape, base, "{:?} after four rotations", kind);
    }
}

#[test]
fn rotation_preserves_cell_count_and_kind() {
    for kind in PieceKind::ALL {
        let rotated = Shape::canonical(kind).rotated();
        assert_eq!(rotated.occupied().count(), 4);
        assert!(rotated.occupied().all(|(_, _, k)| k == kind));
    }
}

#[test]
fn i_piece_alternates_between_row_and_column() {
    let horizontal = Shape::canonical(PieceKind::I);
    assert_eq!((horizontal.width(), horizontal.height()), (4, 1));

    let vertical = horizontal.rotated();
    assert_eq!((vertical.width(), vertical.height()), (1, 4));

    let back = vertical.rotated();
    assert_eq!((back.width(), back.height()), (4, 1));
}

#[test]
fn s_rotation_matches_hand_computed_matrix() {
    // S is [[0,1,1],[1,1,0]]; transpose is [[0,1],[1,1],[1,0]],
    // reversed rows give [[1,0],[1,1],[0,1]].
    let rotated = Shape::canonical(PieceKind::S).rotated();
    let filled: Vec<(i8, i8)> = rotated.occupied().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(filled, vec![(0, 0), (0, 1), (1, 1), (1, 2)]);
}
