use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meimath::{Mat4, Vec2f, Vec4};

fn points(n: usize) -> Vec<Vec2f> {
    (0..n).map(|i| Vec2f::new(i as f32 * 0.5, 100.0 - i as f32)).collect()
}

fn bench_point_transform(c: &mut Criterion) {
    let m = Mat4::ortho(-2.0, 2.0, -1.5, 1.5, -1.0, 1.0)
        * Mat4::translate(0.25, -0.5)
        * Mat4::rotate_z(0.3);
    let pts = points(1024);

    c.bench_function("mat4_mul_vec2_1024", |b| {
        b.iter(|| pts.iter().map(|&p| black_box(m) * p).collect::<Vec<_>>())
    });

    c.bench_function("mat4_mul_vec4_1024", |b| {
        b.iter(|| {
            pts.iter()
                .map(|&p| (black_box(m) * Vec4::point(p)).perspective_divide())
                .collect::<Vec<_>>()
        })
    });
}

fn bench_matrix(c: &mut Criterion) {
    let a = Mat4::perspective(1.0, 16.0 / 9.0, 0.1, 100.0);
    let b = Mat4::translate3(1.0, 2.0, -5.0) * Mat4::rotate_z(0.7);

    c.bench_function("mat4_mul_mat4", |bench| bench.iter(|| black_box(a) * black_box(b)));
    c.bench_function("mat4_inverse", |bench| bench.iter(|| black_box(a * b).inverse()));
}

criterion_group!(benches, bench_point_transform, bench_matrix);
criterion_main!(benches);
