//! Pieces tests - catalog shapes and rotation tables

use blockfall::core::pieces::{base_shape, J_TURNS, L_TURNS, T_TURNS};
use blockfall::core::{next_rotation, Piece};
use blockfall::types::{PieceKind, Shape};

fn spin(kind: PieceKind, times: usize) -> Vec<(Shape, u8)> {
    let mut states = Vec::new();
    let mut shape = base_shape(kind);
    let mut rotation = 0;
    for _ in 0..times {
        let next = next_rotation(kind, &shape, rotation);
        shape = next.0;
        rotation = next.1;
        states.push(next);
    }
    states
}

// ============== Catalog ==============

#[test]
fn test_catalog_shapes() {
    assert_eq!(base_shape(PieceKind::T), [(2, 1), (0, 1), (1, 1), (1, 2)]);
    assert_eq!(base_shape(PieceKind::O), [(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(base_shape(PieceKind::J), [(2, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(base_shape(PieceKind::L), [(2, 2), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(base_shape(PieceKind::I), [(3, 1), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(base_shape(PieceKind::S), [(1, 0), (1, 1), (0, 1), (0, 2)]);
    assert_eq!(base_shape(PieceKind::Z), [(1, 0), (1, 1), (2, 1), (2, 2)]);
}

#[test]
fn test_spawn_anchor() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!((piece.row, piece.col, piece.rotation), (0, 4, 0));
        assert_eq!(piece.shape, base_shape(kind));
    }
}

// ============== Rotation ==============

#[test]
fn test_o_never_rotates() {
    for (shape, rotation) in spin(PieceKind::O, 5) {
        assert_eq!(shape, base_shape(PieceKind::O));
        assert_eq!(rotation, 0);
    }
}

#[test]
fn test_t_four_turns_return_to_start() {
    let states = spin(PieceKind::T, 4);
    let indices: Vec<u8> = states.iter().map(|s| s.1).collect();
    assert_eq!(indices, vec![1, 2, 3, 0]);
    assert_eq!(states[1].0, T_TURNS[0]);
    assert_eq!(states[2].0, T_TURNS[1]);
    assert_eq!(states[3].0, base_shape(PieceKind::T));
}

#[test]
fn test_l_and_j_step_through_tables() {
    for (kind, turns) in [(PieceKind::L, L_TURNS), (PieceKind::J, J_TURNS)] {
        let states = spin(kind, 4);
        assert_eq!(states[0], (turns[0], 1));
        assert_eq!(states[1], (turns[1], 2));
        assert_eq!(states[2], (turns[2], 3));
        assert_eq!(states[3], (base_shape(kind), 0));
    }
}

#[test]
fn test_s_and_z_toggle_between_two_shapes() {
    for kind in [PieceKind::S, PieceKind::Z] {
        let states = spin(kind, 4);
        assert_ne!(states[0].0, base_shape(kind));
        assert_eq!(states[0].1, 1);
        assert_eq!(states[1], (base_shape(kind), 0));
        assert_eq!(states[2], states[0]);
        assert_eq!(states[3], states[1]);
    }
}

#[test]
fn test_z_turn_is_vertical() {
    let (shape, rotation) = next_rotation(PieceKind::Z, &base_shape(PieceKind::Z), 0);
    assert_eq!(shape, [(0, 1), (1, 1), (1, 0), (2, 0)]);
    assert_eq!(rotation, 1);
}

#[test]
fn test_i_toggles_between_vertical_and_horizontal() {
    let states = spin(PieceKind::I, 2);
    assert!(states[0].0.iter().all(|&(dr, _)| dr == 1));
    assert_eq!(states[0].1, 1);
    assert_eq!(states[1], (base_shape(PieceKind::I), 0));
}
