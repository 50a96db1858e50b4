//! Free functions on raw bit-vector buffers.
//!
//! A face is a slice of `u64` words; bit `i` of the slice (word `i / 64`, bit
//! `i % 64`) flags atom `i`. Every slice handled here has the same
//! `face_length` (word count) as the table it came from. None of these
//! functions allocate: output buffers are sized by the caller.
//!
//! Bits past the logical length of a vector are always zero. Tables and face
//! lists maintain this, so popcounts and equality tests can work word-wise.

use crate::bits::table::BitTable;
use crate::face_error::FaceError;

/// Bits per storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Number of words needed to hold `n_bits` bits.
#[inline]
pub const fn words_for(n_bits: usize) -> usize {
    n_bits.div_ceil(WORD_BITS)
}

/// Population count of `face`.
#[inline]
pub fn count_atoms(face: &[u64]) -> usize {
    face.iter().map(|w| w.count_ones() as usize).sum()
}

/// `true` if no bit of `face` is set.
#[inline]
pub fn is_empty(face: &[u64]) -> bool {
    face.iter().all(|&w| w == 0)
}

/// `true` if every bit set in `a` is also set in `b`.
///
/// Both slices must have the same length.
#[inline]
pub fn is_subset(a: &[u64], b: &[u64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(&x, &y)| x & !y == 0)
}

/// Writes `a & b` into `dst`.
#[inline]
pub fn intersection(dst: &mut [u64], a: &[u64], b: &[u64]) {
    debug_assert!(dst.len() == a.len() && a.len() == b.len());
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = x & y;
    }
}

/// Sets bits `0..n_bits` of `dst` and clears the rest.
pub fn set_first_bits(dst: &mut [u64], n_bits: usize) {
    let full = n_bits / WORD_BITS;
    let rest = n_bits % WORD_BITS;
    for (i, w) in dst.iter_mut().enumerate() {
        *w = if i < full {
            u64::MAX
        } else if i == full && rest != 0 {
            (1u64 << rest) - 1
        } else {
            0
        };
    }
}

/// Ascending iterator over the set bits of `face`.
pub fn iter_ones(face: &[u64]) -> impl Iterator<Item = usize> + '_ {
    face.iter().enumerate().flat_map(|(i, &word)| {
        let mut w = word;
        std::iter::from_fn(move || {
            if w == 0 {
                return None;
            }
            let bit = w.trailing_zeros() as usize;
            w &= w - 1;
            Some(i * WORD_BITS + bit)
        })
    })
}

/// Writes the set bits of `face` into `out` in ascending order and returns
/// how many were written.
///
/// # Errors
/// [`FaceError::BufferTooSmall`] if `out` is shorter than [`count_atoms`]`(face)`.
/// Nothing meaningful is left in `out` in that case.
pub fn bit_rep_to_atom_list(face: &[u64], out: &mut [usize]) -> Result<usize, FaceError> {
    let needed = count_atoms(face);
    if out.len() < needed {
        return Err(FaceError::BufferTooSmall {
            needed,
            len: out.len(),
        });
    }
    let mut n = 0;
    for atom in iter_ones(face) {
        out[n] = atom;
        n += 1;
    }
    Ok(n)
}

/// Indices of the coatoms of `coatoms` that contain `face`, written to `out`
/// in ascending order. Returns the number of matches.
///
/// `face ⊆ coatom` is the same as "the coatom contains the face", so this is
/// the bridge from atom representation to coatom representation.
/// Cost is `O(n_coatoms · face_length)`.
///
/// # Errors
/// * [`FaceError::LengthMismatch`] if `face` is not `coatoms.face_length()` words.
/// * [`FaceError::BufferTooSmall`] if `out` cannot hold every match.
pub fn bit_rep_to_coatom_rep(
    face: &[u64],
    coatoms: &BitTable,
    out: &mut [usize],
) -> Result<usize, FaceError> {
    check_len(face, coatoms.face_length())?;
    let mut n = 0;
    for (j, row) in coatoms.rows().enumerate() {
        if !is_subset(face, row) {
            continue;
        }
        if n == out.len() {
            let needed = coatoms.rows().filter(|r| is_subset(face, r)).count();
            return Err(FaceError::BufferTooSmall {
                needed,
                len: out.len(),
            });
        }
        out[n] = j;
        n += 1;
    }
    Ok(n)
}

/// Sets the bits listed in `atoms` in `out`, clearing everything else.
///
/// # Errors
/// [`FaceError::AtomOutOfRange`] if an index does not fit in `out`.
pub fn atom_list_to_bit_rep(atoms: &[usize], out: &mut [u64]) -> Result<(), FaceError> {
    out.fill(0);
    let capacity = out.len() * WORD_BITS;
    for &a in atoms {
        if a >= capacity {
            return Err(FaceError::AtomOutOfRange {
                coatom: None,
                atom: a,
                n_atoms: capacity,
            });
        }
        out[a / WORD_BITS] |= 1u64 << (a % WORD_BITS);
    }
    Ok(())
}

/// Intersection of the listed coatoms of `coatoms`, written to `out`.
///
/// The empty list is the full atom set: no coatom constrains the face, so it
/// is the whole polyhedron.
///
/// # Errors
/// * [`FaceError::LengthMismatch`] if `out` is not `coatoms.face_length()` words.
/// * [`FaceError::RowOutOfRange`] for a coatom index past the table.
pub fn coatom_rep_to_bit_rep(
    coatom_indices: &[usize],
    coatoms: &BitTable,
    out: &mut [u64],
) -> Result<(), FaceError> {
    check_len(out, coatoms.face_length())?;
    set_first_bits(out, coatoms.n_bits());
    for &j in coatom_indices {
        let row = coatoms.try_row(j)?;
        for (o, &w) in out.iter_mut().zip(row) {
            *o &= w;
        }
    }
    Ok(())
}

#[inline]
fn check_len(face: &[u64], expected: usize) -> Result<(), FaceError> {
    if face.len() != expected {
        return Err(FaceError::LengthMismatch {
            expected,
            found: face.len(),
        });
    }
    Ok(())
}
