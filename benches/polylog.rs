use criterion::{black_box, criterion_group, criterion_main, BenchmarkGroup, Criterion};
use num_complex::{Complex, Complex64};
use polylogarithm::*;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;
const RNG_DENOM: f64 = (1u64 << 53) as f64;

fn uniform_f64(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    ((*state >> 11) as f64) / RNG_DENOM
}

/// Points spread over `|Re z|, |Im z| < 4`, covering every region.
fn gen_points(count: usize, seed: u64) -> Vec<Complex64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            let re = -4.0 + 8.0 * uniform_f64(&mut state);
            let im = -4.0 + 8.0 * uniform_f64(&mut state);
            Complex64::new(re, im)
        })
        .collect()
}

fn bench_complex<T: PolylogFloat>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    inputs: &[Complex<T>],
    f: fn(Complex<T>) -> Complex<T>,
) {
    group.bench_function(name, |b| {
        b.iter(|| {
            for &z in inputs {
                black_box(f(black_box(z)));
            }
        })
    });
}

fn bench_polylog(c: &mut Criterion) {
    let points = gen_points(256, 0x5eed);
    let points_dd: Vec<Complex<DoubleDouble>> = points
        .iter()
        .map(|z| Complex::new(DoubleDouble::from_f64(z.re), DoubleDouble::from_f64(z.im)))
        .collect();

    let mut group = c.benchmark_group("complex/f64");
    bench_complex(&mut group, "li2", &points, li2);
    bench_complex(&mut group, "li3", &points, li3);
    bench_complex(&mut group, "li4", &points, li4);
    bench_complex(&mut group, "li5", &points, li5);
    bench_complex(&mut group, "li6", &points, li6);
    group.finish();

    let mut group = c.benchmark_group("complex/double-double");
    bench_complex(&mut group, "li2", &points_dd, li2);
    bench_complex(&mut group, "li3", &points_dd, li3);
    bench_complex(&mut group, "li6", &points_dd, li6);
    group.finish();

    let reals: Vec<f64> = points.iter().map(|z| 2.0 * z.re).collect();
    let mut group = c.benchmark_group("real/f64");
    group.bench_function("li2_real", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &reals {
                acc += li2_real(black_box(x));
            }
            black_box(acc)
        })
    });
    group.bench_function("cl2", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &reals {
                acc += cl2(black_box(x));
            }
            black_box(acc)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_polylog);
criterion_main!(benches);
