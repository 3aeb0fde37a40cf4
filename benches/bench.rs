use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aoc::{Inputs, PUZZLES};

pub fn criterion_benchmark(c: &mut Criterion) {
    let inputs = Inputs::from_env();
    for puzzle in PUZZLES {
        // Days without a local input file are skipped.
        let s = match puzzle.input(&inputs) {
            Ok(s) => s,
            Err(_) => continue,
        };
        for part in [1, 2] {
            c.bench_function(&format!("{}::part{}", puzzle.name(), part), |b| {
                b.iter(|| black_box(puzzle.solve(part, black_box(&s))))
            });
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
