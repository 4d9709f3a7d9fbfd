#![no_main]

use fenboard::fen::Fen;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (lossy, _) = Fen::from_ascii_lossy(data);
    assert!(lossy.board.conflicts().is_empty());

    let Ok(fen) = Fen::from_ascii(data) else {
        return;
    };
    assert_eq!(fen.board, lossy.board);
    let roundtripped = Fen::from_ascii_lossy(fen.to_string().as_bytes()).0;
    assert_eq!(fen.board, roundtripped.board);
    assert_eq!(fen.turn, roundtripped.turn);
});
