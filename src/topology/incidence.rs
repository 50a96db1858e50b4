//! Atom/coatom incidence of a polyhedron.
//!
//! [`Incidence`] is the read-only input every traversal runs against. It holds
//! the coatom table (one row per coatom, flagging its atoms) together with
//! its transpose (one row per atom, flagging the coatoms containing it), the
//! ambient dimension, and optional display labels.
//!
//! Tables are built once and never mutated. Iterators and lattices borrow an
//! `Incidence`; any number of them may read it concurrently.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;

use crate::bits::table::BitTable;
use crate::debug_invariants::DebugInvariants;
use crate::face_error::FaceError;

/// Incidence structure of a polyhedron plus optional labels.
#[derive(Clone, Debug)]
pub struct Incidence {
    dimension: i32,
    coatoms: BitTable,
    atoms: BitTable,
    atom_names: Option<Arc<[String]>>,
    coatom_names: Option<Arc<[String]>>,
    equalities: Arc<[String]>,
}

assert_impl_all!(Incidence: Send, Sync);
assert_impl_all!(BitTable: Send, Sync);

impl Incidence {
    /// Build from the atom list of each coatom.
    ///
    /// # Errors
    /// * [`FaceError::InvalidDimension`] if `dimension < -1` or `dimension >= n_atoms`.
    /// * [`FaceError::AtomOutOfRange`] if a coatom lists an atom `>= n_atoms`.
    pub fn from_facets<R: AsRef<[usize]>>(
        dimension: i32,
        n_atoms: usize,
        facets: &[R],
    ) -> Result<Self, FaceError> {
        Self::from_table(dimension, BitTable::from_rows(n_atoms, facets)?)
    }

    /// Build from a boolean matrix with one row per coatom and one column per atom.
    ///
    /// # Errors
    /// * [`FaceError::InvalidDimension`] if `dimension < -1` or `dimension >= n_atoms`.
    /// * [`FaceError::RaggedMatrix`] if rows differ in length.
    pub fn from_matrix<R: AsRef<[bool]>>(dimension: i32, matrix: &[R]) -> Result<Self, FaceError> {
        Self::from_table(dimension, BitTable::from_matrix(matrix)?)
    }

    /// Build from an existing coatom table.
    ///
    /// A `d`-polyhedron has at least `d + 1` atoms, so `dimension` must lie in
    /// `[-1, n_atoms - 1]`.
    pub fn from_table(dimension: i32, coatoms: BitTable) -> Result<Self, FaceError> {
        if dimension < -1 || i64::from(dimension) >= coatoms.n_bits() as i64 {
            return Err(FaceError::InvalidDimension(dimension));
        }
        let atoms = coatoms.transpose();
        if dimension >= 1 {
            let lonely: Vec<usize> = (0..atoms.n_rows())
                .filter(|&a| atoms.row(a).iter().all(|&w| w == 0))
                .collect();
            if !lonely.is_empty() {
                log::warn!(
                    "{} atom(s) lie on no coatom and will never appear as vertices: {:?}",
                    lonely.len(),
                    &lonely[..lonely.len().min(8)]
                );
            }
        }
        log::debug!(
            "incidence: dimension={dimension} atoms={} coatoms={} face_length={}",
            coatoms.n_bits(),
            coatoms.n_rows(),
            coatoms.face_length()
        );
        let inc = Self {
            dimension,
            coatoms,
            atoms,
            atom_names: None,
            coatom_names: None,
            equalities: Arc::from([]),
        };
        crate::debug_invariants!(inc.validate_invariants(), "Incidence::from_table");
        Ok(inc)
    }

    /// Attach display names for the atoms.
    ///
    /// # Errors
    /// [`FaceError::NameCountMismatch`] if the count differs from `n_atoms`.
    pub fn with_atom_names<I, S>(mut self, names: I) -> Result<Self, FaceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.atom_names = Some(collect_names("atom", self.n_atoms(), names)?);
        Ok(self)
    }

    /// Attach display names for the coatoms.
    ///
    /// # Errors
    /// [`FaceError::NameCountMismatch`] if the count differs from `n_coatoms`.
    pub fn with_coatom_names<I, S>(mut self, names: I) -> Result<Self, FaceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.coatom_names = Some(collect_names("coatom", self.n_coatoms(), names)?);
        Ok(self)
    }

    /// Labels of equations holding on the whole polyhedron. They contain every
    /// face, so they are appended verbatim to each face's coatom names.
    pub fn with_equalities<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equalities = labels.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    #[inline]
    pub fn n_atoms(&self) -> usize {
        self.coatoms.n_bits()
    }

    #[inline]
    pub fn n_coatoms(&self) -> usize {
        self.coatoms.n_rows()
    }

    /// One row per coatom, bits over atoms.
    #[inline]
    pub fn coatoms(&self) -> &BitTable {
        &self.coatoms
    }

    /// One row per atom, bits over coatoms.
    #[inline]
    pub fn atoms(&self) -> &BitTable {
        &self.atoms
    }

    /// Table whose rows act as coatoms for a traversal in the given mode.
    #[inline]
    pub(crate) fn primary(&self, dual: bool) -> &BitTable {
        if dual { &self.atoms } else { &self.coatoms }
    }

    pub fn atom_names(&self) -> Option<&[String]> {
        self.atom_names.as_deref()
    }

    pub fn coatom_names(&self) -> Option<&[String]> {
        self.coatom_names.as_deref()
    }

    pub fn equalities(&self) -> &[String] {
        &self.equalities
    }

    /// Incidence of the dual polyhedron: atoms and coatoms swap roles.
    ///
    /// Names swap with them. Equality labels do not carry over.
    pub fn dual(&self) -> Self {
        Self {
            dimension: self.dimension,
            coatoms: self.atoms.clone(),
            atoms: self.coatoms.clone(),
            atom_names: self.coatom_names.clone(),
            coatom_names: self.atom_names.clone(),
            equalities: Arc::from([]),
        }
    }

    /// Plain-data description suitable for serialization.
    pub fn to_data(&self) -> IncidenceData {
        IncidenceData {
            dimension: self.dimension,
            n_atoms: self.n_atoms(),
            coatoms: (0..self.n_coatoms())
                .map(|j| self.coatoms.row_bits(j))
                .collect(),
            atom_names: self.atom_names.as_ref().map(|n| n.to_vec()),
            coatom_names: self.coatom_names.as_ref().map(|n| n.to_vec()),
            equalities: self.equalities.to_vec(),
        }
    }
}

fn collect_names<I, S>(kind: &'static str, expected: usize, names: I) -> Result<Arc<[String]>, FaceError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    if names.len() != expected {
        return Err(FaceError::NameCountMismatch {
            kind,
            expected,
            found: names.len(),
        });
    }
    Ok(names.into())
}

impl DebugInvariants for Incidence {
    fn validate_invariants(&self) -> Result<(), FaceError> {
        if self.dimension < -1 || i64::from(self.dimension) >= self.n_atoms() as i64 {
            return Err(FaceError::InvalidDimension(self.dimension));
        }
        if !self.coatoms.tail_bits_clear() || !self.atoms.tail_bits_clear() {
            return Err(FaceError::InvariantViolation(
                "bits set past the end of a table row".into(),
            ));
        }
        if self.coatoms.transpose() != self.atoms {
            return Err(FaceError::InvariantViolation(
                "atom table is not the transpose of the coatom table".into(),
            ));
        }
        if let Some(names) = &self.atom_names {
            if names.len() != self.n_atoms() {
                return Err(FaceError::NameCountMismatch {
                    kind: "atom",
                    expected: self.n_atoms(),
                    found: names.len(),
                });
            }
        }
        if let Some(names) = &self.coatom_names {
            if names.len() != self.n_coatoms() {
                return Err(FaceError::NameCountMismatch {
                    kind: "coatom",
                    expected: self.n_coatoms(),
                    found: names.len(),
                });
            }
        }
        Ok(())
    }
}

/// Serializable description of an [`Incidence`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceData {
    pub dimension: i32,
    pub n_atoms: usize,
    /// Atom indices of each coatom.
    pub coatoms: Vec<Vec<usize>>,
    #[serde(default)]
    pub atom_names: Option<Vec<String>>,
    #[serde(default)]
    pub coatom_names: Option<Vec<String>>,
    #[serde(default)]
    pub equalities: Vec<String>,
}

impl TryFrom<IncidenceData> for Incidence {
    type Error = FaceError;

    fn try_from(data: IncidenceData) -> Result<Self, FaceError> {
        let mut inc = Incidence::from_facets(data.dimension, data.n_atoms, &data.coatoms)?
            .with_equalities(data.equalities);
        if let Some(names) = data.atom_names {
            inc = inc.with_atom_names(names)?;
        }
        if let Some(names) = data.coatom_names {
            inc = inc.with_coatom_names(names)?;
        }
        Ok(inc)
    }
}
