//! Traversals and the queries built on them.

mod traversal;

pub mod f_vector;
pub mod face_iter;
pub mod face_lattice;
pub mod graph;

pub use f_vector::{FVector, f_vector};
pub use face_iter::{Duality, FaceIterator, IterOpts};
pub use face_lattice::FaceLattice;
