//! Vertex and facet graphs.
//!
//! Both are read off a filtered traversal, so only the lattice levels down to
//! the requested dimension are walked: edges come from a primal walk to the
//! 1-faces, ridges from a dual walk to the `(d - 2)`-faces.

use itertools::Itertools;

use crate::algs::face_iter::{Duality, FaceIterator, IterOpts};
use crate::face_error::FaceError;
use crate::topology::face::Face;
use crate::topology::incidence::Incidence;

/// Pairs of atoms spanning a 1-face, sorted.
///
/// A 1-dimensional polyhedron is itself an edge, so its two atoms form the
/// only pair.
pub fn edges(incidence: &Incidence) -> Result<Vec<(usize, usize)>, FaceError> {
    match incidence.dimension() {
        d if d < 1 => Ok(Vec::new()),
        1 => Ok((0..incidence.n_atoms()).tuple_combinations().collect()),
        _ => pairs_of(incidence, 1, Duality::Primal, |f| f.atom_indices().to_vec()),
    }
}

/// Pairs of coatoms meeting in a `(d - 2)`-face, sorted.
pub fn ridges(incidence: &Incidence) -> Result<Vec<(usize, usize)>, FaceError> {
    let d = incidence.dimension();
    if d < 1 {
        return Ok(Vec::new());
    }
    // a (d - 2)-face is reported as d - (d - 2) - 1 in dual mode
    pairs_of(incidence, 1, Duality::Dual, |f| f.coatom_indices().to_vec())
}

fn pairs_of<F>(
    incidence: &Incidence,
    reported: i32,
    duality: Duality,
    members: F,
) -> Result<Vec<(usize, usize)>, FaceError>
where
    F: Fn(&Face<'_>) -> Vec<usize>,
{
    let opts = IterOpts {
        duality,
        dimension: Some(reported),
    };
    let mut it = FaceIterator::new(incidence, opts)?;
    let mut out = Vec::new();
    while it.advance().is_some() {
        let face = it.current_face()?;
        match members(&face).as_slice() {
            &[a, b] => out.push((a, b)),
            other => log::debug!(
                "{}-face {} has {} members, not a pair; skipped",
                face.dimension(),
                face.id(),
                other.len()
            ),
        }
    }
    out.sort_unstable();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::generators;

    #[test]
    fn cube_graph() {
        let c = generators::cube(3).unwrap();
        let e = edges(&c).unwrap();
        assert_eq!(e.len(), 12);
        // cube edges join vertices differing in one bit
        assert!(e.iter().all(|&(a, b)| (a ^ b).count_ones() == 1 && a < b));
        let r = ridges(&c).unwrap();
        assert_eq!(r.len(), 12);
        // opposite facets never meet
        assert!(!r.contains(&(0, 1)));
    }

    #[test]
    fn simplex_graph_is_complete() {
        let t = generators::simplex(4).unwrap();
        assert_eq!(edges(&t).unwrap().len(), 10);
        assert_eq!(ridges(&t).unwrap().len(), 10);
    }

    #[test]
    fn low_dimensions() {
        let seg = generators::simplex(1).unwrap();
        assert_eq!(edges(&seg).unwrap(), vec![(0, 1)]);
        // both endpoints contain the empty face
        assert_eq!(ridges(&seg).unwrap(), vec![(0, 1)]);
        let pt = generators::simplex(0).unwrap();
        assert!(edges(&pt).unwrap().is_empty());
        assert!(ridges(&pt).unwrap().is_empty());
    }
}
