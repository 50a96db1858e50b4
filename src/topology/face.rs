//! Face handles returned by traversals and lattices.
//!
//! A [`Face`] is a read-only view: the face's dimension, the bit vector in
//! the traversal's internal representation (atoms in primal mode, coatoms in
//! dual mode), and a back reference to the [`Incidence`] for deriving the
//! other representation and resolving names.
//!
//! Handles handed out by [`FaceIterator::current_face`](crate::algs::face_iter::FaceIterator::current_face)
//! borrow the iterator's scratch buffer; the borrow ends before the iterator
//! can advance, so a stale handle cannot be observed. Owned copies come from
//! the iterator's `Iterator` impl or `current_face_owned`.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::unsync::OnceCell;

use crate::bits::ops::{count_atoms, is_subset, iter_ones};
use crate::bits::table::BitTable;
use crate::topology::incidence::Incidence;

/// View of one face of a polyhedron.
pub struct Face<'a> {
    incidence: &'a Incidence,
    bits: Cow<'a, [u64]>,
    dimension: i32,
    dual: bool,
    id: usize,
    atoms: OnceCell<Vec<usize>>,
    coatoms: OnceCell<Vec<usize>>,
}

impl<'a> Face<'a> {
    pub(crate) fn new(
        incidence: &'a Incidence,
        bits: Cow<'a, [u64]>,
        dimension: i32,
        dual: bool,
        id: usize,
    ) -> Self {
        Self {
            incidence,
            bits,
            dimension,
            dual,
            id,
            atoms: OnceCell::new(),
            coatoms: OnceCell::new(),
        }
    }

    /// Dimension of the face in the polyhedron, `-1` for the empty face.
    #[inline]
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    /// Whether the bit vector is over coatoms (dual traversal) instead of atoms.
    #[inline]
    pub fn is_dual(&self) -> bool {
        self.dual
    }

    /// Identity within the traversal or lattice that produced the face.
    ///
    /// Not comparable across runs or between primal and dual mode.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Raw bit vector in the producing traversal's representation.
    #[inline]
    pub fn bits(&self) -> &[u64] {
        &self.bits
    }

    pub fn incidence(&self) -> &'a Incidence {
        self.incidence
    }

    /// Atoms (vertices) of the face, ascending. Computed once per handle.
    pub fn atom_indices(&self) -> &[usize] {
        self.atoms.get_or_init(|| {
            if self.dual {
                containing_rows(&self.bits, self.incidence.atoms())
            } else {
                iter_ones(&self.bits).collect()
            }
        })
    }

    /// Coatoms (facets) containing the face, ascending. Computed once per handle.
    pub fn coatom_indices(&self) -> &[usize] {
        self.coatoms.get_or_init(|| {
            if self.dual {
                iter_ones(&self.bits).collect()
            } else {
                containing_rows(&self.bits, self.incidence.coatoms())
            }
        })
    }

    /// Number of atoms of the face.
    pub fn n_atoms(&self) -> usize {
        if self.dual {
            self.atom_indices().len()
        } else {
            count_atoms(&self.bits)
        }
    }

    /// Number of coatoms containing the face.
    pub fn n_coatoms(&self) -> usize {
        if self.dual {
            count_atoms(&self.bits)
        } else {
            self.coatom_indices().len()
        }
    }

    /// Atom labels of the face, if the incidence carries atom names.
    pub fn atom_names(&self) -> Option<Vec<&'a str>> {
        let names = self.incidence.atom_names()?;
        Some(
            self.atom_indices()
                .iter()
                .map(|&i| names[i].as_str())
                .collect(),
        )
    }

    /// Coatom labels of the face followed by every equality label, if the
    /// incidence carries coatom names.
    pub fn coatom_names(&self) -> Option<Vec<&'a str>> {
        let names = self.incidence.coatom_names()?;
        let equalities = self.incidence.equalities();
        Some(
            self.coatom_indices()
                .iter()
                .map(|&j| names[j].as_str())
                .chain(equalities.iter().map(String::as_str))
                .collect(),
        )
    }

    /// Same face with its bit vector copied into the handle.
    pub fn into_owned(self) -> Face<'a> {
        Face {
            bits: Cow::Owned(self.bits.into_owned()),
            ..self
        }
    }
}

/// Indices of the rows of `table` that contain `face`.
fn containing_rows(face: &[u64], table: &BitTable) -> Vec<usize> {
    table
        .rows()
        .enumerate()
        .filter(|(_, row)| is_subset(face, row))
        .map(|(j, _)| j)
        .collect()
}

impl Clone for Face<'_> {
    fn clone(&self) -> Self {
        Self {
            incidence: self.incidence,
            bits: self.bits.clone(),
            dimension: self.dimension,
            dual: self.dual,
            id: self.id,
            atoms: self.atoms.clone(),
            coatoms: self.coatoms.clone(),
        }
    }
}

impl fmt::Debug for Face<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Face")
            .field("dimension", &self.dimension)
            .field("id", &self.id)
            .field("dual", &self.dual)
            .field("atoms", &self.atom_indices())
            .finish()
    }
}

impl fmt::Display for Face<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-face {:?}", self.dimension, self.atom_indices())
    }
}

impl PartialEq for Face<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.dimension == other.dimension
            && self.dual == other.dual
            && self.bits == other.bits
    }
}

impl Eq for Face<'_> {}

impl Hash for Face<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.dimension.hash(state);
    }
}

impl PartialOrd for Face<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Face<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then(self.dimension.cmp(&other.dimension))
            .then(self.dual.cmp(&other.dual))
            .then_with(|| self.bits.cmp(&other.bits))
    }
}
