use super::*;

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_pawn_single_and_double_push() {
    let pos = Position::default();
    let moves = pos.legal_moves_from(sq("e2"));

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "e2", "e3"));
    assert!(has_move(&moves, "e2", "e4"));
}

#[test]
fn test_pawn_cannot_capture_forward() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", white(Type::King));
    place_piece(&mut pos, "e8", black(Type::King));
    place_piece(&mut pos, "d4", white(Type::Pawn));
    place_piece(&mut pos, "d5", black(Type::Pawn));

    assert!(pos.legal_moves_from(sq("d4")).is_empty());
    assert!(!pos.try_move_algebraic("d4", "d5", None));
}

#[test]
fn test_pawn_diagonal_needs_a_victim() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", white(Type::King));
    place_piece(&mut pos, "e8", black(Type::King));
    place_piece(&mut pos, "d4", white(Type::Pawn));
    place_piece(&mut pos, "c5", black(Type::Knight));

    let moves = pos.legal_moves_from(sq("d4"));
    assert!(has_move(&moves, "d4", "c5"));
    assert!(!has_move(&moves, "d4", "e5"), "empty diagonal is not a move");
    assert_eq!(moves.len(), 2);

    assert!(pos.try_move_algebraic("d4", "c5", None));
    assert_eq!(pos.piece_at(sq("c5")), Some(white(Type::Pawn)));
    assert_eq!(pos.bitboards().get(black(Type::Knight)), 0);
}

#[test]
fn test_double_push_blocked_by_piece_in_between() {
    let mut pos = Position::default();
    play(&mut pos, &[("g1", "f3"), ("e7", "e5")]);

    // knight on f3 blocks both pushes of the f-pawn
    assert!(pos.legal_moves_from(sq("f2")).is_empty());
    assert!(!pos.try_move_algebraic("f2", "f4", None));
}

#[test]
fn test_black_pawn_moves() {
    let mut pos = Position::default();
    play(&mut pos, &[("e2", "e4")]);

    let moves = pos.legal_moves_from(sq("d7"));
    assert!(has_move(&moves, "d7", "d6"));
    assert!(has_move(&moves, "d7", "d5"));
    assert!(!pos.try_move_algebraic("d7", "d8", None));
    assert!(pos.try_move_algebraic("d7", "d5", None));
    assert!(pos.try_move_algebraic("e4", "d5", None));
    assert_eq!(pos.piece_at(sq("d5")), Some(white(Type::Pawn)));
}
