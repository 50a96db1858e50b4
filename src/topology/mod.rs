//! Polyhedron incidence structure and face handles.
//!
//! - [`incidence`]: [`Incidence`], the atom/coatom tables every traversal reads.
//! - [`face`]: [`Face`], the read-only handle traversals hand out.
//! - [`generators`]: incidences of standard polytopes.

pub mod face;
pub mod generators;
pub mod incidence;

pub use face::Face;
pub use incidence::{Incidence, IncidenceData};
