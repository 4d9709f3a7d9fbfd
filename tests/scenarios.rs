use fenboard::{
    fen::{FenWarning, START},
    CaptureRule, Color, IllegalMove, Move, Piece, Position, Role, Square,
};

fn snapshot(pos: &Position) -> (Vec<Piece>, bool) {
    let mut pieces = pos.all_pieces().to_vec();
    pieces.sort_by_key(|p| (p.square, u8::from(p.role), p.color.is_white()));
    (pieces, pos.white_to_move())
}

#[test]
fn test_start_position_pieces() {
    let pos = Position::from_fen(START);
    let pieces = pos.all_pieces();
    assert_eq!(pieces.len(), 32);

    for color in Color::ALL {
        let count = |role| {
            pieces
                .iter()
                .filter(|p| p.color == color && p.role == role)
                .count()
        };
        assert_eq!(pieces.iter().filter(|p| p.color == color).count(), 16);
        assert_eq!(count(Role::Pawn), 8);
        assert_eq!(count(Role::Knight), 2);
        assert_eq!(count(Role::Bishop), 2);
        assert_eq!(count(Role::Rook), 2);
        assert_eq!(count(Role::Queen), 1);
        assert_eq!(count(Role::King), 1);
    }

    let layout = [
        "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
        "RNBQKBNR",
    ];
    for piece in &pieces {
        let index = piece.square.index().expect("valid square");
        let row = layout[usize::from(index / 8)].as_bytes();
        assert_eq!(char::from(row[usize::from(index % 8)]), piece.char(), "{piece}");
    }
}

#[test]
fn test_turn_alternation() {
    let mut pos = Position::from_fen(START);
    assert!(pos.white_to_move());
    assert!(!pos.black_to_move());

    assert!(pos.make_move(Move::new(Square::G1, Square::F3)));
    assert!(pos.black_to_move());

    assert!(pos.make_move(Move::new(Square::G8, Square::F6)));
    assert!(pos.white_to_move());
}

#[test]
fn test_failed_move_does_not_flip_turn() {
    let mut pos = Position::new();
    assert!(!pos.make_move(Move::new(Square::E7, Square::E5)));
    assert!(pos.white_to_move());
}

#[test]
fn test_rejected_move_atomicity() {
    let mut pos = Position::from_fen("r3k2r/8/8/3p4/4P3/8/8/R3K2R b - - 0 1");
    let before = snapshot(&pos);

    for from in Square::ALL {
        for to in Square::ALL {
            let m = Move::new(from, to);
            if !pos.is_legal_move(m) {
                assert!(!pos.make_move(m), "{m}");
                assert_eq!(snapshot(&pos), before, "{m}");
            }
        }
    }
}

#[test]
fn test_occupied_destination() {
    let pos = Position::new();
    // Own piece.
    assert!(!pos.is_legal_move(Move::new(Square::E1, Square::E2)));
    // Enemy piece.
    assert!(!pos.is_legal_move(Move::new(Square::A1, Square::A7)));
}

#[test]
fn test_empty_or_enemy_start() {
    let pos = Position::new();
    assert!(!pos.is_legal_move(Move::new(Square::E4, Square::E5)));
    assert!(!pos.is_legal_move(Move::new(Square::E7, Square::E5)));
    assert_eq!(
        pos.check_move(Move::new(Square::E7, Square::E5)),
        Err(IllegalMove::NoPieceToMove)
    );
}

#[test]
fn test_pawn_step() {
    let mut pos = Position::from_fen(START);

    let e2 = Square::from_index(4 + 6 * 8);
    let e4 = Square::from_index(4 + 4 * 8);
    assert_eq!((e2, e4), (Square::E2, Square::E4));

    let m = Move::new(e2, e4);
    assert!(pos.is_legal_move(m));
    assert!(pos.make_move(m));

    assert_eq!(pos.piece_kind_at(e2), None);
    assert_eq!(pos.piece_kind_at(e4), Some(Role::Pawn));
    assert_eq!(
        pos.piece_at(e4),
        Some(Piece::new(Role::Pawn, e4, Color::White))
    );
    assert!(pos.black_to_move());
}

#[test]
fn test_enemy_destination_is_rejected() {
    let fen = "4k3/8/8/8/8/8/3p4/3QK3 w - - 0 1";
    let mut pos = Position::from_fen(fen);
    let before = snapshot(&pos);

    let m = Move::new(Square::D1, Square::D2);
    assert_eq!(pos.check_move(m), Err(IllegalMove::DestinationOccupied));
    assert!(!pos.make_move(m));
    assert_eq!(snapshot(&pos), before);
}

#[test]
fn test_enemy_capture_clears_one_kind() {
    let fen = "4k3/8/8/8/8/8/3p4/3QK3 w - - 0 1";
    let mut pos = Position::from_fen(fen).with_capture_rule(CaptureRule::Enemy);

    let captured = pos.play(Move::new(Square::D1, Square::D2));
    assert_eq!(
        captured,
        Ok(Some(Piece::new(Role::Pawn, Square::D2, Color::Black)))
    );
    assert_eq!(pos.all_pieces().len(), 3);
    assert_eq!(pos.board().by_piece(Color::Black, Role::Pawn).count(), 0);
    assert_eq!(pos.piece_kind_at(Square::D2), Some(Role::Queen));
    assert!(pos.board().conflicts().is_empty());
    assert!(pos.black_to_move());
}

#[test]
fn test_invalid_squares_fail_safe() {
    let pos = Position::new();
    assert_eq!(pos.piece_at(Square::from_axes(9, 9)), None);
    assert_eq!(pos.piece_kind_at(Square::from_index(-5)), None);
    assert!(!pos.is_active_square(Square::INVALID));
    assert!(!pos.is_legal_move(Move::new(Square::E2, Square::from_axes(4, -1))));
}

#[test]
fn test_fen_warnings_are_reported() {
    let (pos, warnings) = Position::from_fen_with_warnings("4k3/8/8/8/8/8/8/4K2Z y");
    assert_eq!(
        warnings,
        [
            FenWarning::UnknownPiece { ch: 'Z', index: 63 },
            FenWarning::InvalidTurn { ch: 'y' },
        ]
    );
    assert_eq!(pos.all_pieces().len(), 2);
    assert!(pos.white_to_move());
}

#[test]
fn test_fen_roundtrip_after_moves() {
    let mut pos = Position::new();
    assert!(pos.make_move(Move::new(Square::E2, Square::E4)));
    assert!(pos.make_move(Move::new(Square::C7, Square::C5)));
    let fen = pos.to_fen().to_string();
    assert_eq!(
        fen,
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w - - 0 1"
    );
    assert_eq!(Position::from_fen(&fen), pos);
}

#[test]
fn test_uci_game() {
    use fenboard::uci::UciMove;

    let mut pos = Position::new();
    for uci in ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"] {
        let m = uci.parse::<UciMove>().expect("valid uci").to_move();
        assert!(pos.make_move(m), "{uci}");
    }
    assert!(pos.black_to_move());
    assert_eq!(pos.piece_kind_at(Square::B5), Some(Role::Bishop));
    assert_eq!(pos.piece_kind_at(Square::C6), Some(Role::Knight));
}
