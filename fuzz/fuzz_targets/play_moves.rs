#![no_main]

use arbitrary::Arbitrary;
use fenboard::{CaptureRule, Move, Position};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data<'a> {
    fen: &'a [u8],
    captures: bool,
    moves: Vec<Move>,
}

fuzz_target!(|data: Data<'_>| {
    let (fen, _) = fenboard::fen::Fen::from_ascii_lossy(data.fen);
    let mut pos = Position::from(fen).with_capture_rule(if data.captures {
        CaptureRule::Enemy
    } else {
        CaptureRule::Forbidden
    });

    for m in data.moves {
        let before = pos.clone();
        let legal = pos.is_legal_move(m);
        assert_eq!(pos.make_move(m), legal);
        if legal {
            assert_eq!(pos.turn(), !before.turn());
            assert!(pos.piece_kind_at(m.from).is_none());
            assert!(pos.all_pieces().len() <= before.all_pieces().len());
        } else {
            assert_eq!(pos, before);
        }
        assert!(pos.board().conflicts().is_empty());
    }
});
