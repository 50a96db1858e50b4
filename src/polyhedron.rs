//! [`CombinatorialPolyhedron`]: an owned incidence with cached face counts.

use once_cell::sync::OnceCell;

use crate::algs::f_vector::{FVector, f_vector};
use crate::algs::face_iter::{Duality, FaceIterator, IterOpts};
use crate::algs::face_lattice::FaceLattice;
use crate::algs::graph;
use crate::face_error::FaceError;
use crate::topology::incidence::Incidence;

/// Entry point tying the incidence to its traversals.
///
/// The f-vector is computed on first request and reused.
#[derive(Debug)]
pub struct CombinatorialPolyhedron {
    incidence: Incidence,
    f_vector: OnceCell<FVector>,
}

impl CombinatorialPolyhedron {
    pub fn new(incidence: Incidence) -> Self {
        Self {
            incidence,
            f_vector: OnceCell::new(),
        }
    }

    /// Shorthand for [`Incidence::from_facets`] followed by [`Self::new`].
    pub fn from_facets<R: AsRef<[usize]>>(
        dimension: i32,
        n_atoms: usize,
        facets: &[R],
    ) -> Result<Self, FaceError> {
        Ok(Self::new(Incidence::from_facets(dimension, n_atoms, facets)?))
    }

    pub fn incidence(&self) -> &Incidence {
        &self.incidence
    }

    pub fn dimension(&self) -> i32 {
        self.incidence.dimension()
    }

    pub fn n_vertices(&self) -> usize {
        self.incidence.n_atoms()
    }

    pub fn n_facets(&self) -> usize {
        self.incidence.n_coatoms()
    }

    /// Face counts, computed once in whichever mode walks fewer coatoms.
    pub fn f_vector(&self) -> &FVector {
        self.f_vector
            .get_or_init(|| f_vector(&self.incidence, Duality::Auto))
    }

    pub fn face_iter(&self, opts: IterOpts) -> Result<FaceIterator<'_>, FaceError> {
        FaceIterator::new(&self.incidence, opts)
    }

    pub fn face_lattice(&self, dual: bool) -> Result<FaceLattice<'_>, FaceError> {
        FaceLattice::build(&self.incidence, dual)
    }

    /// See [`graph::edges`].
    pub fn edges(&self) -> Result<Vec<(usize, usize)>, FaceError> {
        graph::edges(&self.incidence)
    }

    /// See [`graph::ridges`].
    pub fn ridges(&self) -> Result<Vec<(usize, usize)>, FaceError> {
        graph::ridges(&self.incidence)
    }

    /// The dual polyhedron. A cached f-vector carries over reversed.
    pub fn dual(&self) -> Self {
        let f_vector = OnceCell::new();
        if let Some(f) = self.f_vector.get() {
            let _ = f_vector.set(f.reversed());
        }
        Self {
            incidence: self.incidence.dual(),
            f_vector,
        }
    }
}

impl From<Incidence> for CombinatorialPolyhedron {
    fn from(incidence: Incidence) -> Self {
        Self::new(incidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::generators;

    #[test]
    fn cached_f_vector_and_dual() {
        let p = CombinatorialPolyhedron::new(generators::prism(&generators::simplex(2).unwrap()).unwrap());
        assert_eq!(p.f_vector().as_slice(), &[1, 6, 9, 5, 1]);
        let d = p.dual();
        assert_eq!(d.f_vector().as_slice(), &[1, 5, 9, 6, 1]);
        // recomputing the dual from scratch agrees with the carried-over value
        let fresh = CombinatorialPolyhedron::new(p.incidence().dual());
        assert_eq!(fresh.f_vector(), d.f_vector());
    }

    #[test]
    fn facade_graph_queries() {
        let p: CombinatorialPolyhedron = generators::pyramid(&generators::cube(2).unwrap())
            .unwrap()
            .into();
        assert_eq!((p.n_vertices(), p.n_facets()), (5, 5));
        assert_eq!(p.edges().unwrap().len(), 8);
        assert_eq!(p.ridges().unwrap().len(), 8);
        let lat = p.face_lattice(false).unwrap();
        assert_eq!(&lat.f_vector(), p.f_vector());
    }
}
