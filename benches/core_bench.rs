use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use pcb_layout_editor::core::{find_template, find_violations};
use pcb_layout_editor::{Board, NetId};
use std::hint::black_box;

const PAD_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
const TRACE_COLOR: [f32; 4] = [0.0, 0.8, 0.0, 1.0];

/// Raster aus Widerständen, je Spalte ein Netz als Kette über alle Bauteile
fn build_synthetic_board(columns: usize, rows: usize) -> (Board, Vec<NetId>) {
    let mut board = Board::new();
    let Some(template) = find_template("R-7.62") else {
        return (board, Vec::new());
    };

    let mut nets = Vec::with_capacity(columns);
    for column in 0..columns {
        let net = board.add_net(format!("N{column}"));
        nets.push(net);

        let mut previous = None;
        for row in 0..rows {
            let center = Vec2::new(column as f32 * 5.08, row as f32 * 12.7);
            let part = board.place_part(&template, center, PAD_COLOR);
            let pads: Vec<_> = board
                .part(part)
                .map(|part| part.footprint.pads().to_vec())
                .unwrap_or_default();
            if let [first, second] = pads[..] {
                board.add_segment(net, first, second, 0.254, TRACE_COLOR);
                if let Some(previous) = previous {
                    board.add_segment(net, previous, first, 0.254, TRACE_COLOR);
                }
                previous = Some(second);
            }
        }
    }

    (board, nets)
}

fn bench_design_rule_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("design_rule_check");

    for &columns in &[4usize, 16usize] {
        let (board, _) = build_synthetic_board(columns, 8);

        group.bench_with_input(
            BenchmarkId::new("find_violations", columns * 8),
            &board,
            |b, board| b.iter(|| black_box(find_violations(board, black_box(0.254)).len())),
        );
    }

    group.finish();
}

fn bench_net_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("net_translate");

    for &rows in &[16usize, 128usize] {
        let (mut board, nets) = build_synthetic_board(1, rows);
        let Some(&net) = nets.first() else {
            continue;
        };

        group.bench_function(BenchmarkId::new("translate_back_and_forth", rows), |b| {
            b.iter(|| {
                let moved = board.translate_net(net, black_box(Vec2::new(0.254, 0.0)));
                board.translate_net(net, Vec2::new(-0.254, 0.0));
                black_box(moved)
            })
        });
    }

    group.finish();
}

criterion_group!(core_benches, bench_design_rule_check, bench_net_translate);
criterion_main!(core_benches);
