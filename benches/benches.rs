use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fenboard::{fen::Fen, CaptureRule, Move, Position, Square};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_parse_fen(c: &mut Criterion) {
    c.bench_function("parse fen", |b| {
        b.iter(|| Fen::from_ascii_lossy(black_box(KIWIPETE.as_bytes())))
    });
}

fn bench_all_pieces(c: &mut Criterion) {
    let pos = Position::from_fen(KIWIPETE);
    c.bench_function("all pieces", |b| {
        b.iter(|| {
            let pieces = black_box(&pos).all_pieces();
            assert_eq!(pieces.len(), 32);
            pieces
        })
    });
}

fn bench_is_legal_move(c: &mut Criterion) {
    let pos = Position::from_fen(KIWIPETE);
    c.bench_function("is legal move", |b| {
        b.iter(|| {
            let mut legals = 0;
            for from in Square::ALL {
                for to in Square::ALL {
                    if black_box(&pos).is_legal_move(Move::new(from, to)) {
                        legals += 1;
                    }
                }
            }
            legals
        })
    });
}

fn bench_make_move(c: &mut Criterion) {
    let pos = Position::from_fen(KIWIPETE).with_capture_rule(CaptureRule::Enemy);
    let m = Move::new(Square::E5, Square::F7);
    c.bench_function("make move", |b| {
        b.iter(|| {
            let mut pos = black_box(pos.clone());
            assert!(pos.make_move(m));
            pos
        })
    });
}

criterion_group!(
    benches,
    bench_parse_fen,
    bench_all_pieces,
    bench_is_legal_move,
    bench_make_move
);
criterion_main!(benches);
