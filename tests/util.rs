#![allow(dead_code)]
use face_lattice::{
    algs::face_iter::{Duality, FaceIterator},
    topology::{generators, incidence::Incidence},
};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Every face as (dimension, sorted atom list), in iteration order.
pub fn faces_of(inc: &Incidence, duality: Duality) -> Vec<(i32, Vec<usize>)> {
    FaceIterator::with_duality(inc, duality)
        .map(|f| (f.dimension(), f.atom_indices().to_vec()))
        .collect()
}

/// Same faces, sorted, so two traversals can be compared as sets.
pub fn sorted_faces(inc: &Incidence, duality: Duality) -> Vec<(i32, Vec<usize>)> {
    let mut v = faces_of(inc, duality);
    v.sort_unstable();
    v
}

/// Face counts for dimensions -1..dimension-1.
pub fn counts(faces: &[(i32, Vec<usize>)], dimension: i32) -> Vec<usize> {
    let mut c = vec![0usize; (dimension + 1).max(0) as usize];
    for (d, _) in faces {
        c[(d + 1) as usize] += 1;
    }
    c
}

/// Incidence with atom `a` renamed `atom_perm[a]` and coatom `j` moved to
/// position `coatom_perm[j]`.
pub fn relabel(inc: &Incidence, atom_perm: &[usize], coatom_perm: &[usize]) -> Incidence {
    let mut facets = vec![Vec::new(); inc.n_coatoms()];
    for (j, &to) in coatom_perm.iter().enumerate() {
        facets[to] = inc
            .coatoms()
            .row_bits(j)
            .into_iter()
            .map(|a| atom_perm[a])
            .collect();
    }
    Incidence::from_facets(inc.dimension(), inc.n_atoms(), &facets).unwrap()
}

pub fn permutation(n: usize, rng: &mut SmallRng) -> Vec<usize> {
    let mut p: Vec<usize> = (0..n).collect();
    p.shuffle(rng);
    p
}

/// A spread of small polytopes with known f-vectors.
pub fn zoo() -> Vec<(&'static str, Incidence, Vec<usize>)> {
    let tri = generators::simplex(2).unwrap();
    let sq = generators::cube(2).unwrap();
    vec![
        ("point", generators::simplex(0).unwrap(), vec![1, 1]),
        ("segment", generators::simplex(1).unwrap(), vec![1, 2, 1]),
        ("triangle", tri.clone(), vec![1, 3, 3, 1]),
        ("tetrahedron", generators::simplex(3).unwrap(), vec![1, 4, 6, 4, 1]),
        ("cube", generators::cube(3).unwrap(), vec![1, 8, 12, 6, 1]),
        ("octahedron", generators::cross_polytope(3).unwrap(), vec![1, 6, 12, 8, 1]),
        ("triangular prism", generators::prism(&tri).unwrap(), vec![1, 6, 9, 5, 1]),
        ("square pyramid", generators::pyramid(&sq).unwrap(), vec![1, 5, 8, 5, 1]),
        ("tesseract", generators::cube(4).unwrap(), vec![1, 16, 32, 24, 8, 1]),
        ("C(7,4)", generators::cyclic(4, 7).unwrap(), vec![1, 7, 21, 28, 14, 1]),
    ]
}
