//! Rotation engine - steps a piece through its literal rotation tables
//!
//! Rotation is a finite-state table keyed by (kind, rotation index):
//!
//! | Kind  | States | Cycle |
//! |-------|--------|-------|
//! | O     | 1      | always rotation 0, base shape |
//! | T     | 4      | flip(current) → T_TURNS[0] → T_TURNS[1] → base |
//! | L, J  | 4      | TURNS[0] → TURNS[1] → TURNS[2] → base |
//! | S, Z  | 2      | other kind's base with axes swapped ↔ own base |
//! | I     | 2      | flip(current) ↔ flip(flip(current)) |
//!
//! Nothing here looks at the board. Callers validate the result before
//! committing it.

use crate::pieces::{base_shape, flip, swap_axes, J_TURNS, L_TURNS, T_TURNS};
use crate::types::{PieceKind, Shape};

/// Compute the next (shape, rotation index) for a piece.
///
/// `current` is the piece's present shape; only T (from rotation 0) and I
/// derive their next shape from it.
///
/// # Panics
///
/// Panics if `rotation` is outside `0..=3` for T, L or J. Rotation indices
/// are only ever produced by this function, so that is a programming error.
pub fn next_rotation(kind: PieceKind, current: &Shape, rotation: u8) -> (Shape, u8) {
    match kind {
        PieceKind::O => (base_shape(PieceKind::O), 0),
        PieceKind::T => match rotation {
            0 => (flip(current), 1),
            1 => (T_TURNS[0], 2),
            2 => (T_TURNS[1], 3),
            3 => (base_shape(PieceKind::T), 0),
            _ => unreachable!("T rotation index out of range: {rotation}"),
        },
        PieceKind::L => turn(&L_TURNS, PieceKind::L, rotation),
        PieceKind::J => turn(&J_TURNS, PieceKind::J, rotation),
        PieceKind::S => toggle(PieceKind::S, PieceKind::Z, rotation),
        PieceKind::Z => toggle(PieceKind::Z, PieceKind::S, rotation),
        PieceKind::I => (flip(current), if rotation == 0 { 1 } else { 0 }),
    }
}

fn turn(turns: &[Shape; 3], kind: PieceKind, rotation: u8) -> (Shape, u8) {
    match rotation {
        0..=2 => (turns[rotation as usize], rotation + 1),
        3 => (base_shape(kind), 0),
        _ => unreachable!("{kind:?} rotation index out of range: {rotation}"),
    }
}

fn toggle(kind: PieceKind, mirror: PieceKind, rotation: u8) -> (Shape, u8) {
    if rotation == 0 {
        (swap_axes(&base_shape(mirror)), 1)
    } else {
        (base_shape(kind), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spin(kind: PieceKind, times: usize) -> (Shape, u8) {
        let mut shape = base_shape(kind);
        let mut rotation = 0;
        for _ in 0..times {
            (shape, rotation) = next_rotation(kind, &shape, rotation);
        }
        (shape, rotation)
    }

    #[test]
    fn test_t_first_turn_flips_base() {
        let (shape, rotation) = spin(PieceKind::T, 1);
        assert_eq!(shape, [(2, 1), (1, 1), (1, 0), (1, 2)]);
        assert_eq!(rotation, 1);
    }

    #[test]
    fn test_s_first_turn_uses_swapped_z() {
        let (shape, rotation) = spin(PieceKind::S, 1);
        assert_eq!(shape, [(0, 1), (1, 1), (1, 2), (2, 2)]);
        assert_eq!(rotation, 1);
    }

    #[test]
    fn test_i_turns_horizontal_then_back_to_vertical_column() {
        let (horizontal, rotation) = spin(PieceKind::I, 1);
        assert_eq!(horizontal, [(1, 2), (1, 1), (1, 0), (1, 3)]);
        assert_eq!(rotation, 1);

        let (vertical, rotation) = spin(PieceKind::I, 2);
        assert_eq!(vertical, base_shape(PieceKind::I));
        assert_eq!(rotation, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_bad_rotation_index_fails_fast() {
        next_rotation(PieceKind::L, &base_shape(PieceKind::L), 7);
    }
}
