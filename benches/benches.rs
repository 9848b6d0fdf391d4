use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mycomplex::{read_complex, write_complex, Complex};
use num_complex::{Complex64, ComplexDistribution};
use rand_distr::{Distribution, StandardNormal};

fn sample(n: usize) -> Vec<Complex> {
    let dist = ComplexDistribution::new(StandardNormal, StandardNormal);
    let mut rng = rand::thread_rng();
    dist.sample_iter(&mut rng)
        .take(n)
        .map(|z: Complex64| Complex::from(z))
        .collect()
}

pub fn arithmetic(c: &mut Criterion) {
    let data = sample(1024);

    c.bench_function("mul", |b| {
        b.iter(|| black_box(&data).iter().product::<Complex>());
    });
    c.bench_function("div", |b| {
        b.iter(|| {
            black_box(&data)
                .windows(2)
                .map(|w| w[0] / w[1])
                .sum::<Complex>()
        });
    });
    c.bench_function("mul_assign_scalar", |b| {
        b.iter(|| {
            let mut acc = Complex::ONE;
            for z in black_box(&data) {
                acc *= z.re();
            }
            acc
        });
    });
    c.bench_function("abs", |b| {
        b.iter(|| black_box(&data).iter().map(|z| z.abs()).sum::<f64>());
    });
}

pub fn text(c: &mut Criterion) {
    let data = sample(256);
    let mut buf = Vec::new();
    for &z in &data {
        write_complex(&mut buf, z).unwrap();
    }
    let display: Vec<String> = data.iter().map(|z| z.to_string()).collect();

    c.bench_function("read_complex", |b| {
        b.iter(|| {
            let mut input = black_box(buf.as_slice());
            for _ in 0..data.len() {
                read_complex(&mut input).unwrap();
            }
        });
    });
    c.bench_function("from_str", |b| {
        b.iter(|| {
            for s in black_box(&display) {
                s.parse::<Complex>().unwrap();
            }
        });
    });
}

criterion_group!(benches, arithmetic, text);
criterion_main!(benches);
