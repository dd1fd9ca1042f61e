use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use worldline_kinematics::{evaluate, find_tau, sample_worldline, KinematicSolver, SymbolicVector4};

fn bench_solve(c: &mut Criterion) {
    let solver = KinematicSolver::new();
    let acc = SymbolicVector4::from(["sinh(tau)", "cosh(tau)", "0", "0"]);
    c.bench_function("solve_from_acceleration", |b| {
        b.iter(|| black_box(solver.from_acceleration(&acc, &[1.0, 0.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0])))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let solver = KinematicSolver::new();
    let x = SymbolicVector4::from(["sqrt(2)*tau", "cos(tau)", "sin(tau)", "0"]);
    let mut rng = rand::thread_rng();
    c.bench_function("evaluate_1e3", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for _ in 0..1_000 {
                let tau = rng.gen_range(-10.0..10.0);
                acc += evaluate(solver.adapter(), &x, tau)[0];
            }
            black_box(acc);
        })
    });

    let mut group = c.benchmark_group("sample_worldline");
    for &n in &[100usize, 1_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(sample_worldline(solver.adapter(), &x, -10.0, 10.0, n)));
        });
    }
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let solver = KinematicSolver::new();
    let x = SymbolicVector4::from(["sinh(tau)", "cosh(tau)", "0", "0"]);
    let mut rng = rand::thread_rng();
    c.bench_function("find_tau", |b| {
        b.iter(|| black_box(find_tau(solver.adapter(), &x, rng.gen_range(-100.0..100.0))))
    });
}

criterion_group!(benches, bench_solve, bench_evaluate, bench_locate);
criterion_main!(benches);
