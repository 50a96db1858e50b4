//! Incidence structures of standard polytopes.
//!
//! Purely combinatorial: each generator produces the vertex/facet incidence
//! directly, without coordinates. Atom and coatom numbering is documented per
//! function so callers can check individual faces.

use itertools::Itertools;

use crate::face_error::FaceError;
use crate::topology::incidence::Incidence;

fn check_dimension(dimension: i32, min: i32) -> Result<usize, FaceError> {
    if dimension < min {
        return Err(FaceError::InvalidDimension(dimension));
    }
    Ok(dimension as usize)
}

/// `d`-simplex: atoms `0..=d`, coatom `i` is every atom except `i`.
///
/// The 0-simplex is a point whose single coatom is the empty face.
pub fn simplex(dimension: i32) -> Result<Incidence, FaceError> {
    let d = check_dimension(dimension, 0)?;
    let facets: Vec<Vec<usize>> = (0..=d)
        .map(|i| (0..=d).filter(|&a| a != i).collect())
        .collect();
    Incidence::from_facets(dimension, d + 1, &facets)
}

/// `d`-cube: atom `v` is the vertex whose `i`-th coordinate is bit `i` of `v`;
/// coatom `2i + s` holds the vertices with bit `i` equal to `s`.
pub fn cube(dimension: i32) -> Result<Incidence, FaceError> {
    let d = check_dimension(dimension, 1)?;
    let n = 1usize << d;
    let facets: Vec<Vec<usize>> = (0..d)
        .flat_map(|i| (0..2).map(move |s| (i, s)))
        .map(|(i, s)| (0..n).filter(|v| (v >> i) & 1 == s).collect())
        .collect();
    Incidence::from_facets(dimension, n, &facets)
}

/// `d`-cross-polytope: atom `2i` is `+e_i`, atom `2i + 1` is `-e_i`; coatom `m`
/// takes `-e_i` exactly when bit `i` of `m` is set.
pub fn cross_polytope(dimension: i32) -> Result<Incidence, FaceError> {
    let d = check_dimension(dimension, 1)?;
    let facets: Vec<Vec<usize>> = (0..1usize << d)
        .map(|m| (0..d).map(|i| 2 * i + ((m >> i) & 1)).collect())
        .collect();
    Incidence::from_facets(dimension, 2 * d, &facets)
}

/// Cyclic polytope `C(n, d)` with facets from Gale's evenness condition.
///
/// A `d`-subset `S` of `0..n` is a facet iff every pair of non-members
/// `i < j` has an even number of members of `S` between them.
pub fn cyclic(dimension: i32, n_atoms: usize) -> Result<Incidence, FaceError> {
    let d = check_dimension(dimension, 2)?;
    if n_atoms < d + 1 {
        return Err(FaceError::TooFewAtoms {
            dimension,
            n_atoms,
            min: d + 1,
        });
    }
    let facets: Vec<Vec<usize>> = (0..n_atoms)
        .combinations(d)
        .filter(|s| gale_evenness(s, n_atoms))
        .collect();
    Incidence::from_facets(dimension, n_atoms, &facets)
}

fn gale_evenness(subset: &[usize], n: usize) -> bool {
    let outside: Vec<usize> = (0..n).filter(|i| subset.binary_search(i).is_err()).collect();
    outside.iter().tuple_windows().all(|(&i, &j)| {
        let between = subset.iter().filter(|&&s| i < s && s < j).count();
        between % 2 == 0
    })
}

/// Prism over `base`: atoms `0..n` are the bottom copy, `n..2n` the top copy.
/// Coatom 0 is the bottom, coatom 1 the top, coatom `2 + j` the side over
/// coatom `j` of `base`.
pub fn prism(base: &Incidence) -> Result<Incidence, FaceError> {
    let n = base.n_atoms();
    let mut facets: Vec<Vec<usize>> = vec![(0..n).collect(), (n..2 * n).collect()];
    for j in 0..base.n_coatoms() {
        let bottom = base.coatoms().row_bits(j);
        let top: Vec<usize> = bottom.iter().map(|a| a + n).collect();
        facets.push(bottom.into_iter().chain(top).collect());
    }
    Incidence::from_facets(base.dimension() + 1, 2 * n, &facets)
}

/// Pyramid over `base`: atom `n` is the apex. Coatom 0 is the base, coatom
/// `1 + j` the cone over coatom `j` of `base`.
pub fn pyramid(base: &Incidence) -> Result<Incidence, FaceError> {
    let n = base.n_atoms();
    let mut facets: Vec<Vec<usize>> = vec![(0..n).collect()];
    for j in 0..base.n_coatoms() {
        let mut f = base.coatoms().row_bits(j);
        f.push(n);
        facets.push(f);
    }
    Incidence::from_facets(base.dimension() + 1, n + 1, &facets)
}
