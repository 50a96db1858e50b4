#![cfg_attr(docsrs, feature(doc_cfg))]
//! # face-lattice
//!
//! face-lattice enumerates the faces of a polyhedron from its combinatorial
//! data alone: which vertices (atoms) lie on which facets (coatoms). Faces are
//! bit vectors over that incidence; a depth-first traversal produces every face
//! exactly once, grouped by dimension, without holding the whole lattice in
//! memory.
//!
//! ## Features
//! - Streaming [`FaceIterator`] in primal or dual orientation, with a dimension
//!   filter and subface pruning
//! - [`FaceLattice`] precomputation with O(1) access by dimension and index
//! - f-vectors, vertex edges and facet ridges
//! - Combinatorial generators for simplices, cubes, cross-polytopes, prisms,
//!   pyramids and cyclic polytopes
//!
//! ```toml
//! [dependencies]
//! face-lattice = "0.1"
//! # Optional features:
//! # features = ["rayon"]
//! ```
//!
//! ## Orientation
//!
//! A primal traversal intersects facets and stores faces as vertex sets; a
//! dual traversal intersects vertices and stores faces as facet sets. Both
//! visit the same faces. A dual iterator reports a `k`-face as
//! `dimension - k - 1`, while the face handle keeps the true `k`.
//! [`Duality::Auto`] picks the orientation that starts from fewer rows.
//!
//! ## Invariant checking
//!
//! [`DebugInvariants`] checks run on construction in debug builds, or in
//! release builds with the `strict-invariants` or `check-invariants` feature.
//!
//! [`FaceIterator`]: algs::face_iter::FaceIterator
//! [`FaceLattice`]: algs::face_lattice::FaceLattice
//! [`Duality::Auto`]: algs::face_iter::Duality::Auto

pub mod algs;
pub mod bits;
pub mod debug_invariants;
pub mod face_error;
pub mod polyhedron;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use face_error::FaceError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    #[cfg(feature = "rayon")]
    pub use crate::algs::f_vector::f_vector_parallel;
    pub use crate::algs::f_vector::{FVector, f_vector};
    pub use crate::algs::face_iter::{Duality, FaceIterator, IterOpts, IterState};
    pub use crate::algs::face_lattice::FaceLattice;
    pub use crate::bits::{BitTable, FaceList};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::face_error::FaceError;
    pub use crate::polyhedron::CombinatorialPolyhedron;
    pub use crate::topology::face::Face;
    pub use crate::topology::incidence::{Incidence, IncidenceData};
}
