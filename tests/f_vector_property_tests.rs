use face_lattice::algs::f_vector::{f_vector, f_vector_by_branches};
use face_lattice::algs::face_iter::Duality;
use face_lattice::polyhedron::CombinatorialPolyhedron;
use face_lattice::topology::generators;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

mod util;
use util::*;

#[test]
fn zoo_f_vectors() {
    for (name, inc, f) in zoo() {
        for duality in [Duality::Primal, Duality::Dual, Duality::Auto] {
            assert_eq!(f_vector(&inc, duality).as_slice(), f.as_slice(), "{name}");
            assert_eq!(
                f_vector_by_branches(&inc, duality).as_slice(),
                f.as_slice(),
                "{name}"
            );
        }
    }
}

#[test]
fn transposed_incidence_reverses_f_vector() {
    for (name, inc, _) in zoo() {
        let f = f_vector(&inc, Duality::Primal);
        assert_eq!(f_vector(&inc.dual(), Duality::Primal), f.reversed(), "{name}");
    }
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_counts_match() {
    use face_lattice::algs::f_vector::f_vector_parallel;
    for (name, inc, f) in zoo() {
        assert_eq!(f_vector_parallel(&inc, Duality::Auto).as_slice(), f.as_slice(), "{name}");
    }
}

#[test]
fn facade_caches_f_vector() {
    let p = CombinatorialPolyhedron::new(generators::cube(5).unwrap());
    let first = p.f_vector();
    assert_eq!(first.as_slice(), &[1, 32, 80, 80, 40, 10, 1]);
    assert!(std::ptr::eq(first, p.f_vector()));
}

proptest! {
    #[test]
    fn prop_relabelling_keeps_f_vector(
        d in 2i32..6,
        extra in 1usize..4,
        seed in any::<u64>(),
    ) {
        let inc = generators::cyclic(d, d as usize + extra).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let atoms = permutation(inc.n_atoms(), &mut rng);
        let coatoms = permutation(inc.n_coatoms(), &mut rng);
        let shuffled = relabel(&inc, &atoms, &coatoms);

        let want = f_vector(&inc, Duality::Primal);
        prop_assert_eq!(f_vector(&shuffled, Duality::Primal), want.clone());
        prop_assert_eq!(f_vector(&shuffled, Duality::Dual), want.clone());
        prop_assert_eq!(f_vector_by_branches(&shuffled, Duality::Auto), want);
    }

    #[test]
    fn prop_prism_and_pyramid_counts(d in 1i32..5) {
        // f-vectors of prisms and pyramids follow from the base
        let base = generators::simplex(d).unwrap();
        let fb = f_vector(&base, Duality::Primal);
        let fp = f_vector(&generators::pyramid(&base).unwrap(), Duality::Auto);
        let fq = f_vector(&generators::prism(&base).unwrap(), Duality::Auto);
        for k in 0..=d {
            let b = |j: i32| fb.get(j).unwrap_or(0);
            // pyramid: a k-face is a k-face of the base or a cone over a (k-1)-face
            prop_assert_eq!(fp.get(k).unwrap(), b(k) + b(k - 1));
            // prism: two copies of the k-faces plus a (k-1)-face times the segment
            let copies = if k < d { 2 * b(k) } else { 2 };
            let sides = if k >= 1 { b(k - 1) } else { 0 };
            prop_assert_eq!(fq.get(k).unwrap(), copies + sides);
        }
    }
}
