use criterion::{Criterion, criterion_group, criterion_main};
use exprtree::{Environment, Error, Evaluator, Tree, add, deftree, mul};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const N_TERMS: usize = 512;
const N_QUERIES: usize = 512;

fn sample_range(range: (f64, f64), rng: &mut StdRng) -> f64 {
    range.0 + rng.random::<f64>() * (range.1 - range.0)
}

/// Sum of many random terms of the form c * (x - a) * (y - b) / (z + d).
fn random_rational_sum() -> Tree {
    let mut rng = StdRng::seed_from_u64(42);
    let mut make_term = || -> Result<Tree, Error> {
        deftree!(/ (* (* (const sample_range((0.5, 2.), &mut rng))
                          (- x (const sample_range((-10., 10.), &mut rng))))
                       (- y (const sample_range((-10., 10.), &mut rng))))
                 (+ z (const sample_range((20., 30.), &mut rng))))
    };
    let mut tree = make_term();
    for _ in 1..N_TERMS {
        tree = add(tree, make_term());
    }
    tree.unwrap()
}

fn random_queries() -> Vec<Environment> {
    let mut rng = StdRng::seed_from_u64(234);
    (0..N_QUERIES)
        .map(|_| {
            [
                ("x", sample_range((-10., 10.), &mut rng)),
                ("y", sample_range((-10., 10.), &mut rng)),
                ("z", sample_range((-10., 10.), &mut rng)),
            ]
            .into_iter()
            .collect()
        })
        .collect()
}

fn b_evaluator_reuse(c: &mut Criterion) {
    let tree = random_rational_sum();
    let queries = random_queries();
    let mut eval = Evaluator::new(&tree);
    c.bench_function("rational-sum-evaluator-reuse", |b| {
        b.iter(|| {
            for env in &queries {
                black_box(eval.run(env).unwrap());
            }
        })
    });
}

fn b_one_shot_eval(c: &mut Criterion) {
    let tree = random_rational_sum();
    let queries = random_queries();
    c.bench_function("rational-sum-one-shot-eval", |b| {
        b.iter(|| {
            for env in &queries {
                black_box(tree.eval(env).unwrap());
            }
        })
    });
}

fn b_deep_product(c: &mut Criterion) {
    let mut tree = deftree!(x);
    for _ in 0..10_000 {
        tree = mul(tree, deftree!(+ 1 (/ x 1000)));
    }
    let tree = tree.unwrap();
    let mut env = Environment::new();
    env.set("x", 0.01);
    let mut eval = Evaluator::new(&tree);
    c.bench_function("deep-product-eval", |b| {
        b.iter(|| black_box(eval.run(&env).unwrap()))
    });
}

criterion_group!(bench, b_evaluator_reuse, b_one_shot_eval, b_deep_product);
criterion_main!(bench);
