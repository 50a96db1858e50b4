//! Immutable bit-set tables.
//!
//! A [`BitTable`] stores `n_rows` fixed-width bit vectors back to back in one
//! shared word buffer. The coatom table of a polyhedron has one row per coatom
//! flagging its atoms; its transpose has one row per atom flagging the
//! coatoms that contain it. Rows are never resized or mutated after
//! construction, so a table can be cloned cheaply and read from many threads.

use std::sync::Arc;

use crate::bits::ops::{WORD_BITS, iter_ones, words_for};
use crate::face_error::FaceError;

/// Row-major table of `n_rows` bit vectors of `n_bits` bits each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitTable {
    n_rows: usize,
    n_bits: usize,
    face_length: usize,
    words: Arc<[u64]>,
}

impl Default for BitTable {
    fn default() -> Self {
        Self {
            n_rows: 0,
            n_bits: 0,
            face_length: 0,
            words: Arc::from([]),
        }
    }
}

impl BitTable {
    /// Build from one list of set bits per row.
    ///
    /// # Errors
    /// [`FaceError::AtomOutOfRange`] if any listed bit is `>= n_bits`.
    pub fn from_rows<R: AsRef<[usize]>>(n_bits: usize, rows: &[R]) -> Result<Self, FaceError> {
        let face_length = words_for(n_bits);
        let mut words = vec![0u64; rows.len() * face_length];
        for (i, row) in rows.iter().enumerate() {
            let dst = &mut words[i * face_length..(i + 1) * face_length];
            for &bit in row.as_ref() {
                if bit >= n_bits {
                    return Err(FaceError::AtomOutOfRange {
                        coatom: Some(i),
                        atom: bit,
                        n_atoms: n_bits,
                    });
                }
                dst[bit / WORD_BITS] |= 1u64 << (bit % WORD_BITS);
            }
        }
        Ok(Self {
            n_rows: rows.len(),
            n_bits,
            face_length,
            words: words.into(),
        })
    }

    /// Build from a dense boolean matrix (`rows[i][j]` = bit `j` of row `i`).
    ///
    /// # Errors
    /// [`FaceError::RaggedMatrix`] if the rows differ in length.
    pub fn from_matrix<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, FaceError> {
        let n_bits = rows.first().map_or(0, |r| r.as_ref().len());
        let mut lists = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_bits {
                return Err(FaceError::RaggedMatrix {
                    row: i,
                    expected: n_bits,
                    found: row.len(),
                });
            }
            lists.push(
                row.iter()
                    .enumerate()
                    .filter_map(|(j, &b)| b.then_some(j))
                    .collect::<Vec<_>>(),
            );
        }
        Self::from_rows(n_bits, &lists)
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Logical width of each row in bits.
    #[inline]
    pub fn n_bits(&self) -> usize {
        self.n_bits
    }

    /// Width of each row in words.
    #[inline]
    pub fn face_length(&self) -> usize {
        self.face_length
    }

    /// Row `i`.
    ///
    /// # Panics
    /// If `i >= n_rows`. Use [`Self::try_row`] for untrusted indices.
    #[inline]
    pub fn row(&self, i: usize) -> &[u64] {
        &self.words[i * self.face_length..(i + 1) * self.face_length]
    }

    /// Row `i`, or [`FaceError::RowOutOfRange`].
    pub fn try_row(&self, i: usize) -> Result<&[u64], FaceError> {
        if i >= self.n_rows {
            return Err(FaceError::RowOutOfRange {
                index: i,
                len: self.n_rows,
            });
        }
        Ok(self.row(i))
    }

    /// All rows in index order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u64]> + '_ {
        (0..self.n_rows).map(move |i| self.row(i))
    }

    /// Whether bit `j` of row `i` is set.
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        j < self.n_bits && self.row(i)[j / WORD_BITS] >> (j % WORD_BITS) & 1 == 1
    }

    /// Set bits of row `i` in ascending order.
    pub fn row_bits(&self, i: usize) -> Vec<usize> {
        iter_ones(self.row(i)).collect()
    }

    /// Transposed table: `n_bits` rows of `n_rows` bits.
    pub fn transpose(&self) -> Self {
        let face_length = words_for(self.n_rows);
        let mut words = vec![0u64; self.n_bits * face_length];
        for i in 0..self.n_rows {
            for j in iter_ones(self.row(i)) {
                words[j * face_length + i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
            }
        }
        Self {
            n_rows: self.n_bits,
            n_bits: self.n_rows,
            face_length,
            words: words.into(),
        }
    }

    /// `true` if no bit beyond `n_bits` is set in any row.
    pub(crate) fn tail_bits_clear(&self) -> bool {
        let rest = self.n_bits % WORD_BITS;
        if rest == 0 {
            return true;
        }
        let mask = !((1u64 << rest) - 1);
        self.rows()
            .all(|row| row.last().is_none_or(|&last| last & mask == 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_and_lookup() {
        let t = BitTable::from_rows(5, &[vec![0, 4], vec![2]]).unwrap();
        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.face_length(), 1);
        assert!(t.contains(0, 4));
        assert!(!t.contains(1, 4));
        assert!(!t.contains(1, 99));
        assert_eq!(t.row_bits(0), vec![0, 4]);
        assert!(t.tail_bits_clear());
    }

    #[test]
    fn from_rows_rejects_out_of_range_bit() {
        let err = BitTable::from_rows(3, &[vec![0], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            FaceError::AtomOutOfRange {
                coatom: Some(1),
                atom: 3,
                n_atoms: 3
            }
        );
    }

    #[test]
    fn ragged_matrix_rejected() {
        let err = BitTable::from_matrix(&[vec![true, false], vec![true]]).unwrap_err();
        assert!(matches!(err, FaceError::RaggedMatrix { row: 1, .. }));
    }

    #[test]
    fn transpose_is_involution() {
        let rows: Vec<Vec<usize>> = (0..70).map(|i| vec![i % 3, (i * 7) % 100]).collect();
        let t = BitTable::from_rows(100, &rows).unwrap();
        let tt = t.transpose();
        assert_eq!(tt.n_rows(), 100);
        assert_eq!(tt.n_bits(), 70);
        assert!(tt.contains(0, 0));
        assert!(tt.contains(7, 1));
        assert!(tt.tail_bits_clear());
        assert_eq!(tt.transpose(), t);
    }

    #[test]
    fn try_row_out_of_range() {
        let t = BitTable::from_rows(2, &[vec![1]]).unwrap();
        assert!(t.try_row(0).is_ok());
        assert_eq!(
            t.try_row(1),
            Err(FaceError::RowOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn zero_width_rows() {
        let t = BitTable::from_rows(0, &[Vec::<usize>::new(), Vec::new()]).unwrap();
        assert_eq!(t.rows().count(), 2);
        assert!(t.row(1).is_empty());
        assert_eq!(t.transpose().n_rows(), 0);
    }
}
