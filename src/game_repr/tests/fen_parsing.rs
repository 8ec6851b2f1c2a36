use super::*;

// ==================== FEN PARSING TESTS ====================

#[test]
fn test_fen_round_trip() {
    let fens = [
        STARTING_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
        "4k3/8/8/8/8/8/8/4K3 b - - 99 120",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.to_fen(), fen);
    }
}

#[test]
fn test_fen_fields_land_in_state() {
    let pos = Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR B Kq e6 3 7").unwrap();

    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.state().en_passant, sq("e6"));
    assert_eq!(pos.state().halfmove_clock, 3);
    assert_eq!(pos.state().fullmove_number, 7);
    assert!(pos.state().castling.white_kingside);
    assert!(pos.state().castling.black_queenside);
    assert!(!pos.state().castling.white_queenside);
    assert_eq!(pos.piece_at(sq("e5")), Some(black(Type::Pawn)));
    assert_eq!(pos.piece_at(sq("d1")), Some(white(Type::Queen)));
}

#[test]
fn test_fen_errors() {
    let cases: [(&str, FenError); 11] = [
        ("8/8/8/8/8/8/8/8 w - - 0", FenError::FieldCount(5)),
        ("8/8/8/8/8/8/8/8 w - - 0 1 extra", FenError::FieldCount(7)),
        ("8/8/8/8/8/8/8 w - - 0 1", FenError::RankCount(7)),
        ("9/8/8/8/8/8/8/8 w - - 0 1", FenError::UnknownPiece('9')),
        ("8/8/8/8/8/8/8/7 w - - 0 1", FenError::RankWidth { rank: 1, columns: 7 }),
        ("ppppppppp/8/8/8/8/8/8/8 w - - 0 1", FenError::RankWidth { rank: 8, columns: 9 }),
        ("8/8/8/8/3x4/8/8/8 w - - 0 1", FenError::UnknownPiece('x')),
        ("8/8/8/8/8/8/8/8 x - - 0 1", FenError::SideToMove("x".into())),
        ("8/8/8/8/8/8/8/8 w KQKq - 0 1", FenError::DuplicateCastling('K')),
        ("8/8/8/8/8/8/8/8 w - e4 0 1", FenError::EnPassant("e4".into())),
        ("8/8/8/8/8/8/8/8 w - - 0 0", FenError::FullmoveNumber("0".into())),
    ];
    for (fen, expected) in cases {
        assert_eq!(Position::from_fen(fen), Err(expected), "{fen}");
    }

    assert!(matches!(
        Position::from_fen("8/8/8/8/8/8/8/8 w - - -1 1"),
        Err(FenError::HalfmoveClock(_))
    ));
    assert!(matches!(
        Position::from_fen("8/8/8/8/8/8/8/8 w Kx - 0 1"),
        Err(FenError::Castling(_))
    ));
}

#[test]
fn test_counters_must_be_plain_digits() {
    for (fen, field) in [
        ("8/8/8/8/8/8/8/8 w - - +5 1", "+5"),
        ("8/8/8/8/8/8/8/8 w - - 0x1 1", "0x1"),
    ] {
        assert_eq!(Position::from_fen(fen), Err(FenError::HalfmoveClock(field.into())));
    }
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 +1"),
        Err(FenError::FullmoveNumber("+1".into()))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 4294967296"),
        Err(FenError::FullmoveNumber("4294967296".into()))
    );
}

#[test]
fn test_fen_error_messages() {
    let err = Position::from_fen("8/8/8/8/8/8/8/7 w - - 0 1").unwrap_err();
    assert_eq!(err.to_string(), "rank 1 covers 7 columns instead of 8");
}

#[test]
fn test_board_diagram() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    let diagram = pos.bitboards().to_string();
    let lines: Vec<&str> = diagram.lines().collect();

    assert_eq!(lines[0], "8  . . . . k . . .");
    assert_eq!(lines[7], "1  . . . . K . . R");
    assert_eq!(lines[8], "   a b c d e f g h");
}
