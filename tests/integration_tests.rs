//! Integration tests for the game loop: gravity, locking, clears, lifecycle

use blockfall::core::{GameEvent, GameState, LockedCells, Piece, PieceFactory};
use blockfall::types::{Cell, GameAction, PieceKind, BOARD_WIDTH, GRAVITY_INTERVAL_MS};

/// First seed whose opening piece is `kind`.
fn seed_opening_with(kind: PieceKind) -> u64 {
    (0u64..)
        .find(|&seed| GameState::new(seed).active().kind == kind)
        .unwrap()
}

/// Game with `kind` active and the factory's exclusion seed set to `kind`.
fn scripted(kind: PieceKind, locked: LockedCells) -> GameState {
    let mut factory = PieceFactory::new(2024);
    while factory.next_kind() != kind {}
    GameState::from_parts(factory, locked, Piece::spawn(kind), GRAVITY_INTERVAL_MS)
}

#[test]
fn test_i_piece_falls_and_locks_on_floor() {
    let mut state = GameState::new(seed_opening_with(PieceKind::I));
    assert_eq!(state.last_spawned_kind(), Some(PieceKind::I));

    let mut moves = 0;
    while state.tick() {
        moves += 1;
    }
    assert_eq!(moves, 16);

    // Anchor column 4; the vertical I body sits at offset column 1.
    let locked: Vec<Cell> = state.locked().iter().collect();
    assert_eq!(
        locked,
        vec![
            Cell::new(16, 5),
            Cell::new(17, 5),
            Cell::new(18, 5),
            Cell::new(19, 5)
        ]
    );

    let next = state.active();
    assert_ne!(next.kind, PieceKind::I);
    assert_eq!((next.row, next.col, next.rotation), (0, 4, 0));
}

#[test]
fn test_gravity_drives_ticks() {
    let mut state = GameState::new(8);
    assert_eq!(state.advance(GRAVITY_INTERVAL_MS - 1), 0);
    assert_eq!(state.active().row, 0);
    assert_eq!(state.advance(1), 1);
    assert_eq!(state.active().row, 1);
    assert_eq!(state.advance(GRAVITY_INTERVAL_MS * 3), 3);
    assert_eq!(state.active().row, 4);
}

#[test]
fn test_line_clear_through_gameplay() {
    let locked: LockedCells = (0..BOARD_WIDTH)
        .filter(|&c| c != 5)
        .map(|c| Cell::new(19, c))
        .collect();
    let mut state = scripted(PieceKind::I, locked);

    while state.tick() {}

    assert_eq!(state.lines_cleared(), 1);
    assert_eq!(
        state.locked().iter().collect::<Vec<_>>(),
        vec![Cell::new(17, 5), Cell::new(18, 5), Cell::new(19, 5)]
    );
    assert!(state.take_events().contains(&GameEvent::Locked {
        kind: PieceKind::I,
        lines_cleared: 1
    }));
    assert_ne!(state.active().kind, PieceKind::I);
}

#[test]
fn test_two_simultaneous_clears_shift_by_two() {
    // Rows 18 and 19 full except column 5, plus a marker cell at row 10.
    let mut locked: LockedCells = [18u8, 19]
        .iter()
        .flat_map(|&r| (0..BOARD_WIDTH).filter(|&c| c != 5).map(move |c| Cell::new(r, c)))
        .collect();
    locked.insert(Cell::new(10, 0));
    let mut state = scripted(PieceKind::I, locked);

    while state.tick() {}

    assert_eq!(state.lines_cleared(), 2);
    assert_eq!(
        state.locked().iter().collect::<Vec<_>>(),
        vec![Cell::new(12, 0), Cell::new(18, 5), Cell::new(19, 5)]
    );
}

#[test]
fn test_occupied_cells_is_union() {
    let locked: LockedCells = [Cell::new(19, 0), Cell::new(19, 9)].into_iter().collect();
    let state = scripted(PieceKind::O, locked);

    assert_eq!(
        state.occupied_cells(),
        vec![
            Cell::new(0, 4),
            Cell::new(0, 5),
            Cell::new(1, 4),
            Cell::new(1, 5),
            Cell::new(19, 0),
            Cell::new(19, 9),
        ]
    );
}

#[test]
fn test_game_actions() {
    let mut state = scripted(PieceKind::T, LockedCells::new());

    assert!(state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active().col, 3);
    assert!(state.apply_action(GameAction::MoveRight));
    assert_eq!(state.active().col, 4);
    assert!(state.apply_action(GameAction::Rotate));
    assert_eq!(state.active().rotation, 1);

    state.apply_action(GameAction::Pause);
    assert!(state.is_paused());
    assert_eq!(state.advance(10 * GRAVITY_INTERVAL_MS), 0);

    state.apply_action(GameAction::Resume);
    state.apply_action(GameAction::Resume);
    assert_eq!(state.advance(GRAVITY_INTERVAL_MS), 1);
}

#[test]
fn test_rotation_blocked_by_wall_keeps_state() {
    let mut state = scripted(PieceKind::J, LockedCells::new());
    // Spawn J spans offset columns 0..=1; push it against the right wall.
    while state.move_right() {}
    assert_eq!(state.active().col, 8);

    // First J turn spans offset columns 0..=2, i.e. column 10.
    let before = state.active();
    assert!(!state.rotate());
    assert_eq!(state.active(), before);
}

#[test]
fn test_reset_keeps_board_reference_and_avoids_repeat() {
    let mut state = GameState::new(77);
    for _ in 0..40 {
        state.tick();
    }
    let last = state.active().kind;

    state.reset();

    assert!(state.locked().is_empty());
    assert!(state.is_paused());
    assert_ne!(state.active().kind, last);
    assert_eq!(state.episode_id(), 1);
}

#[test]
fn test_stacking_pieces_ends_in_game_over_and_reset() {
    let mut state = GameState::new(4242);
    let mut saw_game_over = false;

    for _ in 0..5_000 {
        state.tick();
        if state.take_events().contains(&GameEvent::GameOver) {
            saw_game_over = true;
            break;
        }
    }

    assert!(saw_game_over);
    assert!(state.locked().is_empty());
    assert!(state.is_paused());
    assert_eq!(state.advance(GRAVITY_INTERVAL_MS * 5), 0);
}
