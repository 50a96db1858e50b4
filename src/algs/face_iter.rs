//! Streaming face iterator.
//!
//! [`FaceIterator`] walks every face of a polyhedron once, grouped by
//! dimension from the coatoms downwards and ending with the empty face. The
//! full polyhedron itself is never yielded.
//!
//! In dual mode faces are walked as coatom sets, from the vertices up, and
//! [`FaceIterator::advance`] reports a `k`-face as `dimension - k - 1`: the
//! vertices come out as `dimension - 1` and the empty face as `dimension`.
//! The face handles always carry the true dimension `k`.
//!
//! Two ways to consume it:
//! - Explicit stepping with [`FaceIterator::advance`] and
//!   [`FaceIterator::current_face`]. The face borrows the iterator's scratch
//!   buffer, so no copy is made; it must be dropped before advancing again.
//!   This is the mode that supports [`FaceIterator::ignore_subfaces`].
//! - The `Iterator` impl, which yields owned copies.
//!
//! ```
//! use face_lattice::algs::face_iter::{FaceIterator, IterOpts};
//! use face_lattice::topology::generators;
//!
//! let cube = generators::cube(3).unwrap();
//! let mut it = FaceIterator::new(&cube, IterOpts::default()).unwrap();
//! let mut edges = 0;
//! while let Some(dim) = it.advance() {
//!     if dim == 1 {
//!         edges += 1;
//!     }
//! }
//! assert_eq!(edges, 12);
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::algs::traversal::Traversal;
use crate::face_error::FaceError;
use crate::topology::face::Face;
use crate::topology::incidence::Incidence;

/// Which table drives the traversal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duality {
    /// Faces as atom sets, intersecting coatoms.
    #[default]
    Primal,
    /// Faces as coatom sets, intersecting atoms.
    Dual,
    /// Dual when there are more coatoms than atoms.
    Auto,
}

impl Duality {
    /// Resolve to a concrete mode for `incidence`.
    pub fn is_dual(self, incidence: &Incidence) -> bool {
        match self {
            Duality::Primal => false,
            Duality::Dual => true,
            Duality::Auto => incidence.n_coatoms() > incidence.n_atoms(),
        }
    }
}

/// Construction options for a [`FaceIterator`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IterOpts {
    pub duality: Duality,
    /// Only yield faces of this reported dimension, as returned by
    /// [`FaceIterator::advance`].
    pub dimension: Option<i32>,
}

impl IterOpts {
    pub fn dual() -> Self {
        Self {
            duality: Duality::Dual,
            dimension: None,
        }
    }

    pub fn with_dimension(mut self, dimension: i32) -> Self {
        self.dimension = Some(dimension);
        self
    }
}

/// Position of a [`FaceIterator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IterState {
    BeforeStart,
    AtFace,
    Exhausted,
}

/// Dimension-ordered iterator over the faces of a polyhedron.
#[derive(Clone, Debug)]
pub struct FaceIterator<'a> {
    incidence: &'a Incidence,
    engine: Traversal<'a>,
    state: IterState,
    yielded: usize,
    /// Reported dimension of the current face.
    current_dimension: i32,
    output_dimension: Option<i32>,
}

impl<'a> FaceIterator<'a> {
    /// # Errors
    /// [`FaceError::DimensionOutOfRange`] if `opts.dimension` is not a
    /// reported dimension: outside `[-1, dimension - 1]` in primal mode, or
    /// outside `[0, dimension]` in dual mode.
    pub fn new(incidence: &'a Incidence, opts: IterOpts) -> Result<Self, FaceError> {
        let d = incidence.dimension();
        let dual = opts.duality.is_dual(incidence);
        if let Some(k) = opts.dimension {
            let (min, max) = if dual { (0, d) } else { (-1, d - 1) };
            if k < min || k > max {
                return Err(FaceError::DimensionOutOfRange {
                    dimension: k,
                    min,
                    max,
                });
            }
        }
        Ok(Self::build(incidence, dual, opts.dimension))
    }

    /// Unfiltered iterator in the given orientation.
    pub fn with_duality(incidence: &'a Incidence, duality: Duality) -> Self {
        Self::build(incidence, duality.is_dual(incidence), None)
    }

    fn build(incidence: &'a Incidence, dual: bool, filter: Option<i32>) -> Self {
        let d = incidence.dimension();
        let true_filter = filter.map(|k| if dual { d - 1 - k } else { k });
        Self {
            incidence,
            engine: Traversal::new(incidence.primary(dual), d, dual, true_filter),
            state: IterState::BeforeStart,
            yielded: 0,
            current_dimension: d,
            output_dimension: filter,
        }
    }

    /// Move to the next face and return its reported dimension, or `None`
    /// once every face has been produced. Further calls keep returning `None`.
    ///
    /// A `k`-face is reported as `k` in primal mode and as `dimension - k - 1`
    /// in dual mode; [`Face::dimension`] of the current face is `k` either way.
    pub fn advance(&mut self) -> Option<i32> {
        if self.state == IterState::Exhausted {
            return None;
        }
        match self.engine.next_level() {
            Some(level) => {
                self.state = IterState::AtFace;
                self.yielded += 1;
                // the engine's internal level is exactly the reported dimension
                self.current_dimension = level;
                Some(level)
            }
            None => {
                self.state = IterState::Exhausted;
                None
            }
        }
    }

    /// The face the iterator is positioned at, borrowing the scratch buffer.
    ///
    /// # Errors
    /// [`FaceError::NoCurrentFace`] before the first [`Self::advance`],
    /// [`FaceError::Exhausted`] after the last.
    pub fn current_face(&self) -> Result<Face<'_>, FaceError> {
        let (bits, dimension) = self.current_parts()?;
        Ok(Face::new(
            self.incidence,
            Cow::Borrowed(bits),
            dimension,
            self.engine.is_dual(),
            self.yielded - 1,
        ))
    }

    /// Like [`Self::current_face`], but the handle owns a copy of the bits and
    /// stays valid after the iterator moves on.
    pub fn current_face_owned(&self) -> Result<Face<'a>, FaceError> {
        let (bits, dimension) = self.current_parts()?;
        Ok(Face::new(
            self.incidence,
            Cow::Owned(bits.to_vec()),
            dimension,
            self.engine.is_dual(),
            self.yielded - 1,
        ))
    }

    /// Reported dimension of the current face, as last returned by
    /// [`Self::advance`].
    pub fn current_dimension(&self) -> Result<i32, FaceError> {
        self.check_at_face()?;
        Ok(self.current_dimension)
    }

    fn current_parts(&self) -> Result<(&[u64], i32), FaceError> {
        self.check_at_face()?;
        let bits = self.engine.face_bits().ok_or_else(|| {
            FaceError::InvariantViolation("iterator at a face without face bits".into())
        })?;
        Ok((bits, self.engine.true_dimension(self.current_dimension)))
    }

    fn check_at_face(&self) -> Result<(), FaceError> {
        match self.state {
            IterState::BeforeStart => Err(FaceError::NoCurrentFace),
            IterState::Exhausted => Err(FaceError::Exhausted),
            IterState::AtFace => Ok(()),
        }
    }

    /// Do not visit any proper subface of the current face.
    ///
    /// Faces already produced are unaffected. Only meaningful in primal mode;
    /// in dual mode the traversal prunes superfaces instead, see
    /// [`Self::ignore_supfaces`].
    ///
    /// # Errors
    /// [`FaceError::WrongOrientation`] in dual mode, plus the state errors of
    /// [`Self::current_face`].
    pub fn ignore_subfaces(&mut self) -> Result<(), FaceError> {
        if self.engine.is_dual() {
            return Err(FaceError::WrongOrientation(
                "ignore_subfaces needs a primal iterator; use ignore_supfaces",
            ));
        }
        self.skip_current()
    }

    /// Do not visit any proper superface of the current face (dual mode).
    ///
    /// # Errors
    /// [`FaceError::WrongOrientation`] in primal mode, plus the state errors of
    /// [`Self::current_face`].
    pub fn ignore_supfaces(&mut self) -> Result<(), FaceError> {
        if !self.engine.is_dual() {
            return Err(FaceError::WrongOrientation(
                "ignore_supfaces needs a dual iterator; use ignore_subfaces",
            ));
        }
        self.skip_current()
    }

    fn skip_current(&mut self) -> Result<(), FaceError> {
        self.check_at_face()?;
        if !self.engine.skip_below_current() {
            return Err(FaceError::InvariantViolation(
                "iterator at a face the engine does not hold".into(),
            ));
        }
        Ok(())
    }

    /// Restart from before the first face.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.state = IterState::BeforeStart;
        self.yielded = 0;
    }

    pub fn state(&self) -> IterState {
        self.state
    }

    pub fn is_dual(&self) -> bool {
        self.engine.is_dual()
    }

    pub fn dimension(&self) -> i32 {
        self.engine.dimension()
    }

    /// The reported dimension the iterator is restricted to, if any.
    pub fn output_dimension(&self) -> Option<i32> {
        self.output_dimension
    }

    pub fn incidence(&self) -> &'a Incidence {
        self.incidence
    }

    /// Number of faces produced since construction or the last reset.
    pub fn faces_yielded(&self) -> usize {
        self.yielded
    }
}

impl<'a> Iterator for FaceIterator<'a> {
    type Item = Face<'a>;

    fn next(&mut self) -> Option<Face<'a>> {
        self.advance()?;
        face_or_stop(self.current_face_owned())
    }
}

/// End iteration on a face that cannot be read, after logging it.
fn face_or_stop(face: Result<Face<'_>, FaceError>) -> Option<Face<'_>> {
    if let Err(e) = &face {
        log::error!("face iterator stopped early: {e}");
    }
    crate::debug_invariants!(&face, "FaceIterator::next");
    face.ok()
}
