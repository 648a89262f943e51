use std::any::Any;
use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

use criterion::{criterion_group, criterion_main, Criterion};

use animation_template::{ObjectBinder, TargetHandle};

struct Sprite {
    opacity: Rc<Cell<f32>>,
}

impl Sprite {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            opacity: Rc::new(Cell::new(0.0)),
        })
    }

    fn opacity_target(&self) -> TargetHandle<f32> {
        self.opacity.clone()
    }
}

fn bench_build_many(c: &mut Criterion) {
    let objects: Vec<Rc<dyn Any>> = (0..256)
        .map(|_| {
            let candidate: Rc<dyn Any> = Sprite::new();
            candidate
        })
        .collect();

    let builder = ObjectBinder::<Sprite>::named("sprites")
        .target_with(|s: &Sprite| s.opacity_target())
        .end_value_with(|s: &Sprite| s.opacity.get() + 1.0)
        .executions(3);

    c.bench_function("build_many_256", |b| {
        b.iter(|| {
            let actions: Vec<_> = builder
                .build_many_with(|_: &[String]| objects.clone())
                .collect::<Result<Vec<_>, _>>()
                .unwrap();
            black_box(actions.len())
        })
    });
}

fn bench_counter_queries(c: &mut Criterion) {
    let sprite = Sprite::new();
    let mut builder = ObjectBinder::<Sprite>::named("sprite")
        .target_with(|s: &Sprite| s.opacity_target())
        .executions(1_000_000);
    let mut action = builder
        .build_with(|_: &[String]| {
            let candidate = Rc::clone(&sprite) as Rc<dyn Any>;
            Some(candidate)
        })
        .unwrap();

    c.bench_function("add_execution_and_query", |b| {
        b.iter(|| {
            action.add_execution(1);
            black_box(action.should_execute())
        })
    });
}

criterion_group!(benches, bench_build_many, bench_counter_queries);
criterion_main!(benches);
