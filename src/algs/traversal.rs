//! Dimension-ordered depth-first traversal of a face lattice.
//!
//! One engine serves primal and dual enumeration: it runs over whichever
//! table acts as the coatom table (the facets for primal mode, the vertices
//! for dual mode). Only the map from internal level to face dimension
//! differs: the identity in primal mode, `dimension - 1 - level` in dual mode.
//!
//! # Algorithm
//! Level `k` holds candidate faces of internal dimension `k`, starting with
//! the coatoms at level `dimension - 1`. On entering a level every face on it
//! is yielded, last to first. Faces are then processed from the back: the last
//! face `f` is intersected with each face still on the level, and the
//! intersections that are nonempty, inclusion-maximal among them (the first of
//! equal ones wins) and not inside any *visited* face form the next level.
//!
//! Each level's visited list starts as its parent's. When the next face of a
//! level is processed, the previous one (whose subtree is finished) joins the
//! level's visited list. A level with one face left is done: all subfaces of
//! that face lie in some already processed sibling. The lattice is graded, so
//! the stack never holds more than `dimension` levels and every face appears
//! exactly once.
//!
//! The empty face is not reached by intersection; it is yielded once after
//! the walk (as the full coatom set in dual mode).

use crate::bits::face_list::FaceList;
use crate::bits::ops::{intersection, is_empty, is_subset, set_first_bits};
use crate::bits::table::BitTable;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Walk,
    Bottom,
    Done,
}

/// Traversal engine over one coatom table.
#[derive(Clone, Debug)]
pub(crate) struct Traversal<'a> {
    coatoms: &'a BitTable,
    dimension: i32,
    dual: bool,
    /// Filter on the true face dimension.
    filter: Option<i32>,
    branch: Option<usize>,

    levels: Vec<FaceList>,
    pending: Vec<Vec<u64>>,
    has_pending: Vec<bool>,
    visited: FaceList,
    visited_len: Vec<usize>,
    scratch: FaceList,
    bottom: Vec<u64>,

    phase: Phase,
    current: i32,
    lowest: i32,
    output_level: Option<i32>,
    yet_to_visit: usize,
    face: Option<usize>,
    bottom_suppressed: bool,
}

impl<'a> Traversal<'a> {
    /// Full traversal, optionally restricted to faces of one true dimension.
    ///
    /// `filter` must already be validated against `[-1, dimension - 1]`.
    pub(crate) fn new(coatoms: &'a BitTable, dimension: i32, dual: bool, filter: Option<i32>) -> Self {
        let n_levels = dimension.max(0) as usize;
        let face_length = coatoms.face_length();
        let mut bottom = vec![0u64; face_length];
        if dual {
            set_first_bits(&mut bottom, coatoms.n_bits());
        }
        let mut t = Self {
            coatoms,
            dimension,
            dual,
            filter,
            branch: None,
            levels: (0..n_levels)
                .map(|_| FaceList::with_capacity(face_length, coatoms.n_rows()))
                .collect(),
            pending: vec![vec![0u64; face_length]; n_levels],
            has_pending: vec![false; n_levels],
            visited: FaceList::new(face_length),
            visited_len: vec![0; n_levels],
            scratch: FaceList::with_capacity(face_length, coatoms.n_rows()),
            bottom,
            phase: Phase::Done,
            current: dimension,
            lowest: 0,
            output_level: None,
            yet_to_visit: 0,
            face: None,
            bottom_suppressed: false,
        };
        t.reset();
        t
    }

    /// Traversal of the subtree below coatom `j` only, without yielding any
    /// coatom or the empty face.
    ///
    /// Summing over all `j` visits every face of dimension `<= dimension - 2`
    /// exactly once, the same faces the full traversal finds below coatom `j`.
    pub(crate) fn branch(coatoms: &'a BitTable, dimension: i32, dual: bool, j: usize) -> Self {
        let mut t = Self::new(coatoms, dimension, dual, None);
        t.branch = Some(j);
        t.reset();
        t
    }

    /// Back to the state before the first face.
    pub(crate) fn reset(&mut self) {
        for level in &mut self.levels {
            level.clear();
        }
        self.has_pending.fill(false);
        self.visited.clear();
        self.visited_len.fill(0);
        self.face = None;
        self.yet_to_visit = 0;
        self.bottom_suppressed = false;

        let top = self.dimension - 1;
        self.output_level = self.filter.filter(|&k| k >= 0).map(|k| self.level_of(k));
        self.lowest = self.output_level.unwrap_or(0);

        let walk = top >= 0 && self.filter != Some(-1);
        if !walk {
            self.current = self.dimension;
            self.phase = if self.emits_bottom() {
                Phase::Bottom
            } else {
                Phase::Done
            };
            return;
        }

        self.phase = Phase::Walk;
        self.current = top;
        let t = top as usize;
        match self.branch {
            None => {
                for row in self.coatoms.rows() {
                    self.levels[t].push(row);
                }
                self.yet_to_visit = self.levels[t].len();
            }
            Some(j) => {
                let n = self.coatoms.n_rows();
                if j >= n {
                    return;
                }
                for i in 0..=j {
                    self.levels[t].push(self.coatoms.row(i));
                }
                for i in j + 1..n {
                    self.visited.push(self.coatoms.row(i));
                }
                self.visited_len[t] = self.visited.len();
            }
        }
    }

    fn emits_bottom(&self) -> bool {
        self.branch.is_none()
            && self.dimension >= 0
            && matches!(self.filter, None | Some(-1))
            && !self.bottom_suppressed
    }

    /// Internal level of a face of true dimension `k`.
    #[inline]
    fn level_of(&self, k: i32) -> i32 {
        if self.dual { self.dimension - 1 - k } else { k }
    }

    /// True dimension of a face at internal level `level`.
    #[inline]
    pub(crate) fn true_dimension(&self, level: i32) -> i32 {
        if self.dual { self.dimension - 1 - level } else { level }
    }

    #[inline]
    pub(crate) fn is_dual(&self) -> bool {
        self.dual
    }

    #[inline]
    pub(crate) fn dimension(&self) -> i32 {
        self.dimension
    }

    /// Bits of the face most recently yielded, if any.
    pub(crate) fn face_bits(&self) -> Option<&[u64]> {
        match self.phase {
            Phase::Walk => self
                .face
                .map(|i| self.levels[self.current as usize].get(i)),
            Phase::Bottom => self.face.map(|_| self.bottom.as_slice()),
            Phase::Done => None,
        }
    }

    /// Advance to the next face and return its internal level.
    pub(crate) fn next_level(&mut self) -> Option<i32> {
        loop {
            match self.phase {
                Phase::Done => {
                    self.face = None;
                    return None;
                }
                Phase::Bottom => {
                    if self.face.is_some() {
                        self.face = None;
                        self.phase = Phase::Done;
                        continue;
                    }
                    if !self.emits_bottom() {
                        self.phase = Phase::Done;
                        continue;
                    }
                    self.face = Some(0);
                    return Some(if self.dual { self.dimension } else { -1 });
                }
                Phase::Walk => {
                    if let Some(level) = self.step() {
                        return Some(level);
                    }
                }
            }
        }
    }

    /// One state transition of the walk. Returns a level when a face is yielded.
    fn step(&mut self) -> Option<i32> {
        if self.current >= self.dimension {
            self.face = None;
            self.phase = Phase::Bottom;
            return None;
        }
        let lvl = self.current as usize;

        if self.yet_to_visit > 0 {
            if self.output_level.is_some_and(|o| o != self.current) {
                self.yet_to_visit = 0;
            } else {
                self.yet_to_visit -= 1;
                self.face = Some(self.yet_to_visit);
                return Some(self.current);
            }
        }
        self.face = None;

        if self.current <= self.lowest {
            self.levels[lvl].clear();
        }
        if self.levels[lvl].len() <= 1 {
            self.levels[lvl].clear();
            self.has_pending[lvl] = false;
            self.current += 1;
            return None;
        }

        if self.has_pending[lvl] {
            self.visited.truncate(self.visited_len[lvl]);
            self.visited.push(&self.pending[lvl]);
            self.visited_len[lvl] += 1;
        }
        self.levels[lvl].pop_into(&mut self.pending[lvl]);
        self.has_pending[lvl] = true;

        let (lower, upper) = self.levels.split_at_mut(lvl);
        let child = &mut lower[lvl - 1];
        maximal_subfaces(
            &self.pending[lvl],
            &upper[0],
            &self.visited,
            self.visited_len[lvl],
            &mut self.scratch,
            child,
        );
        if self.branch.is_some() && self.current == self.dimension - 1 {
            upper[0].clear();
        }

        if !child.is_empty() {
            self.yet_to_visit = child.len();
            self.current -= 1;
            let c = lvl - 1;
            self.has_pending[c] = false;
            self.visited_len[c] = self.visited_len[lvl];
        }
        None
    }

    /// Exclude every proper subface (in the internal representation) of the
    /// face just yielded from the rest of the walk.
    ///
    /// Returns `false` if no face is current.
    pub(crate) fn skip_below_current(&mut self) -> bool {
        let Some(i) = self.face else {
            return false;
        };
        if self.phase != Phase::Walk {
            return true;
        }
        let lvl = self.current as usize;
        let face = self.levels[lvl].get(i);
        if is_subset(&self.bottom, face) {
            self.bottom_suppressed = true;
        }
        self.visited.truncate(self.visited_len[lvl]);
        self.visited.push(face);
        self.visited_len[lvl] += 1;
        true
    }
}

/// Writes into `out` the maximal nonempty intersections of `face` with the
/// entries of `siblings` that lie in none of the first `n_visited` entries of
/// `visited`.
fn maximal_subfaces(
    face: &[u64],
    siblings: &FaceList,
    visited: &FaceList,
    n_visited: usize,
    scratch: &mut FaceList,
    out: &mut FaceList,
) {
    out.clear();
    scratch.clear();
    for sibling in siblings.iter() {
        intersection(scratch.push_zeroed(), face, sibling);
    }
    for j in 0..scratch.len() {
        let candidate = scratch.get(j);
        if is_empty(candidate)
            || !is_maximal(scratch, j)
            || visited.any_contains(n_visited, candidate)
        {
            continue;
        }
        out.push(candidate);
    }
}

/// `true` unless entry `j` is strictly inside another entry or equal to an
/// earlier one.
fn is_maximal(list: &FaceList, j: usize) -> bool {
    let candidate = list.get(j);
    (0..list.len()).all(|k| {
        if k == j {
            return true;
        }
        let other = list.get(k);
        !(is_subset(candidate, other) && (k < j || !is_subset(other, candidate)))
    })
}
