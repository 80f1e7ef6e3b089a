use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sokoban_search::config::SolverConfig;
use sokoban_search::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_two_boxes(c: &mut Criterion) {
    bench_level(c, "levels/03-two-boxes.txt", true, 50);
}

#[allow(unused)]
fn bench_two_boxes_no_dead_squares(c: &mut Criterion) {
    bench_level(c, "levels/03-two-boxes.txt", false, 50);
}

#[allow(unused)]
fn bench_room(c: &mut Criterion) {
    bench_level(c, "levels/05-room.txt", true, 50);
}

fn bench_level(c: &mut Criterion, level_path: &str, dead_squares: bool, samples: usize) {
    let level = level_path.load_level().unwrap();
    let config = SolverConfig::new(dead_squares);

    let mut group = c.benchmark_group(if dead_squares {
        "dead-squares"
    } else {
        "no-dead-squares"
    });
    group.sample_size(samples);
    group.bench_function(level_path, |b| {
        b.iter(|| black_box(level.solve(black_box(config))))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_two_boxes,
    bench_two_boxes_no_dead_squares,
    bench_room,
);
criterion_main!(benches);
