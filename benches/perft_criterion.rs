use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::game_state::board::Board;
use chess_rules::game_state::castle_rights::CastleRights;
use chess_rules::game_state::chess_types::{Color, Piece};
use chess_rules::game_state::game_state::ChessGame;
use chess_rules::game_state::square::{File, Rank, Square};
use chess_rules::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    to_move: Color,
    castle_rights: CastleRights,
    expected_nodes: &'static [u64],
}

const STARTPOS_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        placement: STARTPOS_PLACEMENT,
        to_move: Color::White,
        castle_rights: CastleRights::all(),
        expected_nodes: &[20, 400],
    },
    BenchCase {
        name: "position_3",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        to_move: Color::White,
        castle_rights: CastleRights::none(),
        expected_nodes: &[14, 191],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        placement: STARTPOS_PLACEMENT,
        to_move: Color::White,
        castle_rights: CastleRights::all(),
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        placement: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        to_move: Color::White,
        castle_rights: CastleRights::all(),
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        to_move: Color::White,
        castle_rights: CastleRights::none(),
        expected_nodes: &[14, 191, 2812],
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("CHESS_RULES_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn board_from_placement(placement: &str) -> Board {
    let mut board = Board::empty();
    for (row, rank_text) in placement.split('/').enumerate() {
        let rank = Rank::from_index(7 - row as i8).expect("placement has eight ranks");
        let mut file = 0i8;
        for ch in rank_text.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as i8;
                continue;
            }
            let piece = Piece::from_char(ch).expect("placement piece should parse");
            let file_value = File::from_index(file).expect("placement has eight files");
            board.set_piece(Square::new(file_value, rank), piece);
            file += 1;
        }
    }
    board
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("CHESS_RULES_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in selected_cases() {
        let game = ChessGame::from_board(
            board_from_placement(case.placement),
            case.to_move,
            case.castle_rights,
        )
        .expect("benchmark position should be valid");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup_game = game.clone();
            let warmup = perft(&mut warmup_game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut bench_game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
