//! Precomputed face lattice with random access.
//!
//! [`FaceLattice::build`] runs the streaming traversal once and keeps every
//! face, grouped by dimension in discovery order. Faces are then addressed by
//! `(dimension, index)` in O(1), looked up by atom set through a hash index,
//! and the covering relation between consecutive dimensions can be listed.
//!
//! Lattice ids number the faces globally: in primal mode dimension by
//! dimension from the empty face up, in dual mode from the facets down.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::algs::f_vector::FVector;
use crate::algs::traversal::Traversal;
use crate::bits::face_list::FaceList;
use crate::bits::ops::{
    atom_list_to_bit_rep, bit_rep_to_coatom_rep, coatom_rep_to_bit_rep, is_subset,
};
use crate::debug_invariants::DebugInvariants;
use crate::face_error::FaceError;
use crate::topology::face::Face;
use crate::topology::incidence::Incidence;

/// Every face of a polyhedron, stored per dimension.
#[derive(Clone, Debug)]
pub struct FaceLattice<'a> {
    incidence: &'a Incidence,
    dual: bool,
    /// `faces[k + 1]` holds the `k`-faces.
    faces: Vec<FaceList>,
    /// Bits to index, per dimension.
    index: Vec<HashMap<Vec<u64>, usize>>,
    /// Lattice id of the first face of each dimension.
    offsets: Vec<usize>,
}

impl<'a> FaceLattice<'a> {
    /// Enumerate and store every face of `incidence`.
    ///
    /// # Errors
    /// [`FaceError::InvariantViolation`] if the traversal reports a face twice,
    /// which only happens for inputs that are not the incidence of a polyhedron.
    pub fn build(incidence: &'a Incidence, dual: bool) -> Result<Self, FaceError> {
        let d = incidence.dimension();
        let table = incidence.primary(dual);
        let n_dims = (d + 1).max(0) as usize;
        let mut faces = vec![FaceList::new(table.face_length()); n_dims];
        let mut index = vec![HashMap::new(); n_dims];

        let mut t = Traversal::new(table, d, dual, None);
        while let Some(level) = t.next_level() {
            let k = t.true_dimension(level);
            let slot = (k + 1) as usize;
            let bits = t.face_bits().ok_or_else(|| {
                FaceError::InvariantViolation("traversal yielded a level without a face".into())
            })?;
            let i = faces[slot].len();
            if index[slot].insert(bits.to_vec(), i).is_some() {
                return Err(FaceError::InvariantViolation(format!(
                    "{k}-face {i} enumerated twice"
                )));
            }
            faces[slot].push(bits);
        }

        let counts: Vec<usize> = faces.iter().map(FaceList::len).collect();
        let offsets = lattice_offsets(&counts, dual);
        let lattice = Self {
            incidence,
            dual,
            faces,
            index,
            offsets,
        };
        log::debug!(
            "face lattice built (dual={dual}): f-vector {}",
            lattice.f_vector()
        );
        crate::debug_invariants!(lattice.validate_invariants(), "FaceLattice::build");
        Ok(lattice)
    }

    pub fn incidence(&self) -> &'a Incidence {
        self.incidence
    }

    pub fn is_dual(&self) -> bool {
        self.dual
    }

    pub fn dimension(&self) -> i32 {
        self.incidence.dimension()
    }

    fn slot(&self, dimension: i32) -> Result<usize, FaceError> {
        let max = self.dimension() - 1;
        if dimension < -1 || dimension > max {
            return Err(FaceError::DimensionOutOfRange {
                dimension,
                min: -1,
                max,
            });
        }
        Ok((dimension + 1) as usize)
    }

    /// Number of faces of `dimension`.
    pub fn n_faces(&self, dimension: i32) -> Result<usize, FaceError> {
        Ok(self.faces[self.slot(dimension)?].len())
    }

    /// Face counts, including the polyhedron itself.
    pub fn f_vector(&self) -> FVector {
        FVector::from_proper_counts(self.faces.iter().map(FaceList::len).collect())
    }

    /// The `index`-th face of `dimension` in discovery order.
    ///
    /// # Errors
    /// * [`FaceError::DimensionOutOfRange`] outside `[-1, dimension - 1]`.
    /// * [`FaceError::IndexOutOfRange`] if `index >= n_faces(dimension)`.
    pub fn face_by_index(&self, dimension: i32, index: usize) -> Result<Face<'_>, FaceError> {
        let slot = self.slot(dimension)?;
        let list = &self.faces[slot];
        if index >= list.len() {
            return Err(FaceError::IndexOutOfRange {
                dimension,
                index,
                len: list.len(),
            });
        }
        Ok(self.face_at(slot, index))
    }

    fn face_at(&self, slot: usize, index: usize) -> Face<'_> {
        Face::new(
            self.incidence,
            Cow::Borrowed(self.faces[slot].get(index)),
            slot as i32 - 1,
            self.dual,
            self.offsets[slot] + index,
        )
    }

    /// All faces of `dimension` in index order.
    pub fn faces(
        &self,
        dimension: i32,
    ) -> Result<impl ExactSizeIterator<Item = Face<'_>> + '_, FaceError> {
        let slot = self.slot(dimension)?;
        Ok((0..self.faces[slot].len()).map(move |i| self.face_at(slot, i)))
    }

    /// Index of the face of `dimension` whose atom set is exactly `atoms`.
    ///
    /// `atoms` may be in any order. Returns `Ok(None)` if no such face exists.
    ///
    /// # Errors
    /// * [`FaceError::DimensionOutOfRange`] as for [`Self::face_by_index`].
    /// * [`FaceError::AtomOutOfRange`] for an atom index `>= n_atoms`.
    pub fn find_face(&self, dimension: i32, atoms: &[usize]) -> Result<Option<usize>, FaceError> {
        let slot = self.slot(dimension)?;
        let n_atoms = self.incidence.n_atoms();
        if let Some(&atom) = atoms.iter().find(|&&a| a >= n_atoms) {
            return Err(FaceError::AtomOutOfRange {
                coatom: None,
                atom,
                n_atoms,
            });
        }
        let table = self.incidence.primary(self.dual);
        let mut key = vec![0u64; table.face_length()];
        if self.dual {
            // coatoms containing every listed atom
            coatom_rep_to_bit_rep(atoms, self.incidence.atoms(), &mut key)?;
        } else {
            atom_list_to_bit_rep(atoms, &mut key)?;
        }
        let Some(&i) = self.index[slot].get(&key) else {
            return Ok(None);
        };
        if self.dual {
            let mut wanted = atoms.to_vec();
            wanted.sort_unstable();
            wanted.dedup();
            if self.face_at(slot, i).atom_indices() != wanted.as_slice() {
                return Ok(None);
            }
        }
        Ok(Some(i))
    }

    /// Covering pairs `(i, j)`: the `i`-th face of `dimension` is a facet of
    /// the `j`-th face of `dimension + 1`.
    ///
    /// # Errors
    /// [`FaceError::DimensionOutOfRange`] unless
    /// `-1 <= dimension <= self.dimension() - 2`.
    pub fn incidences(&self, dimension: i32) -> Result<Vec<(usize, usize)>, FaceError> {
        let max = self.dimension() - 2;
        if dimension < -1 || dimension > max {
            return Err(FaceError::DimensionOutOfRange {
                dimension,
                min: -1,
                max,
            });
        }
        let lower = &self.faces[(dimension + 1) as usize];
        let upper = &self.faces[(dimension + 2) as usize];
        let mut pairs = Vec::new();
        for (i, f) in lower.iter().enumerate() {
            for (j, g) in upper.iter().enumerate() {
                // in dual mode a larger face has fewer coatoms
                let covered = if self.dual { is_subset(g, f) } else { is_subset(f, g) };
                if covered {
                    pairs.push((i, j));
                }
            }
        }
        Ok(pairs)
    }

    /// Every covering pair of the proper part of the lattice as lattice ids,
    /// lower face first.
    pub fn hasse_edges(&self) -> Vec<(usize, usize)> {
        let d = self.dimension();
        let mut edges = Vec::new();
        for k in -1..=d - 2 {
            let lo = self.offsets[(k + 1) as usize];
            let hi = self.offsets[(k + 2) as usize];
            if let Ok(pairs) = self.incidences(k) {
                edges.extend(pairs.into_iter().map(|(i, j)| (lo + i, hi + j)));
            }
        }
        edges
    }
}

/// First lattice id of each dimension slot.
fn lattice_offsets(counts: &[usize], dual: bool) -> Vec<usize> {
    let mut offsets = vec![0; counts.len()];
    let mut acc = 0;
    if dual {
        for (o, &c) in offsets.iter_mut().zip(counts).rev() {
            *o = acc;
            acc += c;
        }
    } else {
        for (o, &c) in offsets.iter_mut().zip(counts) {
            *o = acc;
            acc += c;
        }
    }
    offsets
}

impl DebugInvariants for FaceLattice<'_> {
    fn validate_invariants(&self) -> Result<(), FaceError> {
        let table = self.incidence.primary(self.dual);
        let mut containing = vec![0usize; table.n_rows()];
        let mut closure = vec![0u64; table.face_length()];
        for (slot, list) in self.faces.iter().enumerate() {
            if self.index[slot].len() != list.len() {
                return Err(FaceError::InvariantViolation(format!(
                    "duplicate faces in dimension {}",
                    slot as i32 - 1
                )));
            }
            if slot == 0 {
                continue;
            }
            for (i, face) in list.iter().enumerate() {
                let n = bit_rep_to_coatom_rep(face, table, &mut containing)?;
                coatom_rep_to_bit_rep(&containing[..n], table, &mut closure)?;
                if closure != face {
                    return Err(FaceError::InvariantViolation(format!(
                        "{}-face {i} is not the intersection of its coatoms",
                        slot as i32 - 1
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::generators;

    #[test]
    fn square_lattice_by_index() {
        let sq = generators::cube(2).unwrap();
        let lat = FaceLattice::build(&sq, false).unwrap();
        assert_eq!(lat.f_vector().as_slice(), &[1, 4, 4, 1]);
        let e = lat.face_by_index(1, 3).unwrap();
        assert_eq!(e.dimension(), 1);
        assert_eq!(e.n_atoms(), 2);
        // primal ids: empty face 0, vertices 1..=4, edges 5..=8
        assert_eq!(e.id(), 8);
        assert_eq!(lat.face_by_index(-1, 0).unwrap().id(), 0);
    }

    #[test]
    fn dual_ids_count_from_the_top() {
        let sq = generators::cube(2).unwrap();
        let lat = FaceLattice::build(&sq, true).unwrap();
        assert_eq!(lat.face_by_index(1, 0).unwrap().id(), 0);
        assert_eq!(lat.face_by_index(0, 0).unwrap().id(), 4);
        assert_eq!(lat.face_by_index(-1, 0).unwrap().id(), 8);
    }

    #[test]
    fn index_errors() {
        let sq = generators::cube(2).unwrap();
        let lat = FaceLattice::build(&sq, false).unwrap();
        assert_eq!(
            lat.face_by_index(2, 0).unwrap_err(),
            FaceError::DimensionOutOfRange {
                dimension: 2,
                min: -1,
                max: 1
            }
        );
        assert_eq!(
            lat.face_by_index(0, 4).unwrap_err(),
            FaceError::IndexOutOfRange {
                dimension: 0,
                index: 4,
                len: 4
            }
        );
    }

    #[test]
    fn find_face_in_both_modes() {
        let c = generators::cube(3).unwrap();
        for dual in [false, true] {
            let lat = FaceLattice::build(&c, dual).unwrap();
            // bottom facet x2 = 0
            let i = lat.find_face(2, &[3, 0, 1, 2]).unwrap().unwrap();
            assert_eq!(lat.face_by_index(2, i).unwrap().atom_indices(), &[0, 1, 2, 3]);
            // two vertices of that facet that do not span an edge
            assert_eq!(lat.find_face(2, &[0, 3]).unwrap(), None);
            assert_eq!(lat.find_face(1, &[0, 3]).unwrap(), None);
            assert!(lat.find_face(1, &[0, 1]).unwrap().is_some());
            assert!(lat.find_face(-1, &[]).unwrap().is_some());
            assert!(matches!(
                lat.find_face(0, &[8]),
                Err(FaceError::AtomOutOfRange { atom: 8, .. })
            ));
        }
    }

    #[test]
    fn incidences_of_square() {
        let sq = generators::cube(2).unwrap();
        let lat = FaceLattice::build(&sq, false).unwrap();
        // every vertex lies on two edges
        assert_eq!(lat.incidences(0).unwrap().len(), 8);
        assert_eq!(lat.incidences(-1).unwrap().len(), 4);
        assert!(lat.incidences(1).is_err());
        assert_eq!(lat.hasse_edges().len(), 12);
    }

    #[test]
    fn lattice_invariants_hold() {
        let x = generators::cross_polytope(3).unwrap();
        for dual in [false, true] {
            let lat = FaceLattice::build(&x, dual).unwrap();
            assert!(lat.validate_invariants().is_ok());
            assert_eq!(lat.f_vector().as_slice(), &[1, 6, 12, 8, 1]);
        }
    }
}
