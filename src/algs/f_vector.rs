//! Face counting.
//!
//! [`f_vector`] counts faces by dimension with one streaming traversal and no
//! face handles. [`f_vector_by_branches`] splits the same walk into one
//! independent job per coatom; with the `rayon` feature,
//! [`f_vector_parallel`] runs those jobs on the rayon pool.

use std::fmt;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algs::face_iter::Duality;
use crate::algs::traversal::Traversal;
use crate::bits::table::BitTable;
use crate::topology::incidence::Incidence;

/// Number of faces per dimension, from the empty face up to the polyhedron.
///
/// Entry `k + 1` counts the `k`-faces, so a `d`-polyhedron has `d + 2` entries
/// and the first and last are both 1.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FVector(Vec<usize>);

impl FVector {
    /// From counts of dimensions `-1..dimension`, appending the polyhedron.
    pub(crate) fn from_proper_counts(mut counts: Vec<usize>) -> Self {
        counts.push(1);
        Self(counts)
    }

    /// Dimension of the counted polyhedron.
    pub fn dimension(&self) -> i32 {
        self.0.len() as i32 - 2
    }

    /// Number of faces of dimension `k`, `None` outside `[-1, dimension]`.
    pub fn get(&self, k: i32) -> Option<usize> {
        usize::try_from(k + 1).ok().and_then(|i| self.0.get(i).copied())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Total number of faces including the empty face and the polyhedron.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Alternating sum `f_0 - f_1 + f_2 - ...` over the proper nonempty faces.
    ///
    /// Equals `1 - (-1)^d` for every `d`-polytope.
    pub fn euler_characteristic(&self) -> i64 {
        let d = self.dimension();
        (0..d)
            .map(|k| {
                let f = self.get(k).unwrap_or(0) as i64;
                if k % 2 == 0 { f } else { -f }
            })
            .sum()
    }

    /// f-vector of the dual polyhedron.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }
}

impl fmt::Display for FVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str(")")
    }
}

impl From<FVector> for Vec<usize> {
    fn from(f: FVector) -> Self {
        f.0
    }
}

/// Count every face of `incidence` with a single traversal.
pub fn f_vector(incidence: &Incidence, duality: Duality) -> FVector {
    let d = incidence.dimension();
    let dual = duality.is_dual(incidence);
    let mut counts = vec![0usize; (d + 1) as usize];
    let mut t = Traversal::new(incidence.primary(dual), d, dual, None);
    while let Some(level) = t.next_level() {
        counts[(t.true_dimension(level) + 1) as usize] += 1;
    }
    let f = FVector::from_proper_counts(counts);
    log::debug!("f-vector (dual={dual}): {f}");
    f
}

/// Same counts as [`f_vector`], computed as one traversal per coatom.
///
/// Branch `j` walks the faces whose processing falls to coatom `j` in the
/// full traversal, so the branches are disjoint and independent.
pub fn f_vector_by_branches(incidence: &Incidence, duality: Duality) -> FVector {
    let d = incidence.dimension();
    if d < 1 {
        return f_vector(incidence, duality);
    }
    let dual = duality.is_dual(incidence);
    let table = incidence.primary(dual);
    let mut counts = outer_counts(table, d, dual);
    for j in 0..table.n_rows() {
        add_branch(table, d, dual, j, &mut counts);
    }
    FVector::from_proper_counts(counts)
}

/// [`f_vector_by_branches`] with the branches spread over the rayon pool.
#[cfg(feature = "rayon")]
pub fn f_vector_parallel(incidence: &Incidence, duality: Duality) -> FVector {
    let d = incidence.dimension();
    if d < 1 {
        return f_vector(incidence, duality);
    }
    let dual = duality.is_dual(incidence);
    let table = incidence.primary(dual);
    let len = (d + 1) as usize;
    let inner = (0..table.n_rows())
        .into_par_iter()
        .map(|j| {
            let mut counts = vec![0usize; len];
            add_branch(table, d, dual, j, &mut counts);
            log::trace!("branch {j}: {counts:?}");
            counts
        })
        .reduce(
            || vec![0usize; len],
            |mut a, b| {
                a.iter_mut().zip(b).for_each(|(x, y)| *x += y);
                a
            },
        );
    let mut counts = outer_counts(table, d, dual);
    counts.iter_mut().zip(inner).for_each(|(x, y)| *x += y);
    FVector::from_proper_counts(counts)
}

/// Faces no branch reports: the coatoms themselves and the empty face.
fn outer_counts(table: &BitTable, d: i32, dual: bool) -> Vec<usize> {
    let mut counts = vec![0usize; (d + 1) as usize];
    counts[0] = 1;
    let top = if dual { 0 } else { d - 1 };
    counts[(top + 1) as usize] += table.n_rows();
    counts
}

fn add_branch(table: &BitTable, d: i32, dual: bool, j: usize, counts: &mut [usize]) {
    let mut t = Traversal::branch(table, d, dual, j);
    while let Some(level) = t.next_level() {
        counts[(t.true_dimension(level) + 1) as usize] += 1;
    }
}
