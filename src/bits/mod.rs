//! Bit-level storage for faces.
//!
//! - [`ops`]: stateless functions on raw `&[u64]` buffers (popcount, subset,
//!   conversions between atom lists, atom bit-reps and coatom reps).
//! - [`table`]: [`BitTable`], the immutable incidence storage.
//! - [`face_list`]: [`FaceList`], reusable scratch lists used by traversals.

pub mod face_list;
pub mod ops;
pub mod table;

pub use face_list::FaceList;
pub use table::BitTable;
