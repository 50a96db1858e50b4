//! Growable list of equal-width bit vectors in one flat buffer.
//!
//! The face iterator keeps one of these per level. Buffers are reused across
//! the whole traversal, so after warm-up no step allocates.

use crate::bits::ops::is_subset;
use crate::bits::table::BitTable;

/// Flat list of faces, each `face_length` words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceList {
    face_length: usize,
    len: usize,
    words: Vec<u64>,
}

impl FaceList {
    pub fn new(face_length: usize) -> Self {
        Self {
            face_length,
            len: 0,
            words: Vec::new(),
        }
    }

    pub fn with_capacity(face_length: usize, faces: usize) -> Self {
        Self {
            face_length,
            len: 0,
            words: Vec::with_capacity(face_length * faces),
        }
    }

    /// Copy of every row of `table`.
    pub fn from_table(table: &BitTable) -> Self {
        let mut list = Self::with_capacity(table.face_length(), table.n_rows());
        for row in table.rows() {
            list.push(row);
        }
        list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn face_length(&self) -> usize {
        self.face_length
    }

    #[inline]
    pub fn get(&self, i: usize) -> &[u64] {
        debug_assert!(i < self.len);
        &self.words[i * self.face_length..(i + 1) * self.face_length]
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut [u64] {
        debug_assert!(i < self.len);
        &mut self.words[i * self.face_length..(i + 1) * self.face_length]
    }

    pub fn push(&mut self, face: &[u64]) {
        debug_assert_eq!(face.len(), self.face_length);
        self.words.extend_from_slice(face);
        self.len += 1;
    }

    /// Appends a zeroed face and returns it for writing.
    pub fn push_zeroed(&mut self) -> &mut [u64] {
        self.words.resize(self.words.len() + self.face_length, 0);
        self.len += 1;
        let i = self.len - 1;
        self.get_mut(i)
    }

    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.words.truncate(len * self.face_length);
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Copies the last face into `dst` and removes it.
    pub fn pop_into(&mut self, dst: &mut [u64]) -> bool {
        if self.len == 0 {
            return false;
        }
        dst.copy_from_slice(self.get(self.len - 1));
        self.truncate(self.len - 1);
        true
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u64]> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    /// `true` if `face` is a subset of some entry among the first `prefix`.
    pub fn any_contains(&self, prefix: usize, face: &[u64]) -> bool {
        (0..prefix.min(self.len)).any(|i| is_subset(face, self.get(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_truncate() {
        let mut l = FaceList::new(2);
        l.push(&[1, 0]);
        l.push_zeroed()[1] = 5;
        assert_eq!(l.len(), 2);
        assert_eq!(l.get(1), &[0, 5]);

        let mut dst = [0u64; 2];
        assert!(l.pop_into(&mut dst));
        assert_eq!(dst, [0, 5]);
        assert_eq!(l.len(), 1);
        l.clear();
        assert!(l.is_empty());
        assert!(!l.pop_into(&mut dst));
    }

    #[test]
    fn containment_respects_prefix() {
        let mut l = FaceList::new(1);
        l.push(&[0b0011]);
        l.push(&[0b1100]);
        assert!(l.any_contains(2, &[0b0100]));
        assert!(!l.any_contains(1, &[0b0100]));
        assert!(!l.any_contains(5, &[0b0101]));
    }

    #[test]
    fn zero_width_faces_still_count() {
        let mut l = FaceList::new(0);
        l.push(&[]);
        l.push(&[]);
        assert_eq!(l.len(), 2);
        assert_eq!(l.iter().count(), 2);
    }
}
