use ai_utility::{Action, Evaluator, Roster};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[derive(Default)]
struct World {
    counters: Vec<u32>,
}

struct Weighted {
    slot: usize,
    weight: f32,
}

impl Action<World> for Weighted {
    fn score(&self, world: &World) -> f32 {
        self.weight - world.counters[self.slot] as f32
    }

    fn apply(&self, world: &mut World) {
        world.counters[self.slot] += 1;
    }
}

fn bench_run(c: &mut Criterion) {
    for size in [4usize, 32, 256] {
        let mut roster = Roster::new();
        for slot in 0..size {
            roster.push(Weighted {
                slot,
                weight: (slot % 7) as f32,
            });
        }
        let evaluator = Evaluator::new(roster);
        let mut world = World {
            counters: vec![0; size],
        };

        c.bench_function(&format!("ai-utility/run(actions={size})"), |b| {
            b.iter(|| {
                black_box(evaluator.run(&mut world));
            })
        });
    }
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
