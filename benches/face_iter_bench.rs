use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use face_lattice::algs::f_vector::{f_vector, f_vector_by_branches};
use face_lattice::algs::face_iter::{Duality, FaceIterator};
use face_lattice::algs::face_lattice::FaceLattice;
use face_lattice::topology::generators;

fn bench_face_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("face_iter");

    for &d in &[6i32, 8i32] {
        let cube = generators::cube(d).expect("cube");

        for (label, duality) in [("primal", Duality::Primal), ("dual", Duality::Dual)] {
            group.bench_with_input(BenchmarkId::new(format!("cube_{label}"), d), &d, |b, _| {
                b.iter(|| {
                    let mut it = FaceIterator::with_duality(&cube, duality);
                    let mut n = 0usize;
                    while it.advance().is_some() {
                        n += 1;
                    }
                    black_box(n);
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("cube_owned_faces", d), &d, |b, _| {
            b.iter(|| {
                let n = FaceIterator::with_duality(&cube, Duality::Primal).count();
                black_box(n);
            });
        });
    }

    group.finish();
}

fn bench_f_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("f_vector");

    for &(d, n) in &[(4i32, 20usize), (6i32, 14usize)] {
        let cyclic = generators::cyclic(d, n).expect("cyclic polytope");
        let id = format!("C({n},{d})");

        group.bench_function(BenchmarkId::new("single_walk", &id), |b| {
            b.iter(|| black_box(f_vector(&cyclic, Duality::Auto)));
        });
        group.bench_function(BenchmarkId::new("branches", &id), |b| {
            b.iter(|| black_box(f_vector_by_branches(&cyclic, Duality::Auto)));
        });
        #[cfg(feature = "rayon")]
        group.bench_function(BenchmarkId::new("parallel", &id), |b| {
            b.iter(|| {
                black_box(face_lattice::algs::f_vector::f_vector_parallel(
                    &cyclic,
                    Duality::Auto,
                ))
            });
        });
    }

    group.finish();
}

fn bench_lattice_build(c: &mut Criterion) {
    let cross = generators::cross_polytope(7).expect("cross-polytope");
    c.bench_function("lattice_build_cross_7", |b| {
        b.iter(|| black_box(FaceLattice::build(&cross, true).expect("lattice").f_vector()));
    });
}

criterion_group!(benches, bench_face_iter, bench_f_vector, bench_lattice_build);
criterion_main!(benches);
