//! Longest-common-subsequence alignment.
//!
//! The alignment reports through the [`DiffHook`] protocol from `similar`, so
//! the same walk can feed a [`Capture`] directly (line level) or through
//! [`Replace`] to fold adjacent deletions and insertions into replacements
//! (word level).
//!
//! * time: `O(NM)` after trimming the common prefix and suffix
//! * space: `O(NM)`

use similar::algorithms::{Capture, DiffHook, Replace};
use similar::DiffOp;

/// Align `old` against `new` and report every step to `d`.
///
/// When the current heads are equal they are matched. Otherwise a deletion
/// from `old` wins over an insertion from `new` as long as both keep the
/// longest common subsequence, so ties resolve toward the earliest match in
/// `new`.
pub fn diff_slices<T, D>(d: &mut D, old: &[T], new: &[T]) -> Result<(), D::Error>
where
    T: PartialEq,
    D: DiffHook,
{
    if new.is_empty() {
        if !old.is_empty() {
            d.delete(0, old.len(), 0)?;
        }
        return d.finish();
    } else if old.is_empty() {
        d.insert(0, 0, new.len())?;
        return d.finish();
    }

    let prefix_len = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    let suffix_len = old[prefix_len..]
        .iter()
        .rev()
        .zip(new[prefix_len..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let old_mid = &old[prefix_len..old.len() - suffix_len];
    let new_mid = &new[prefix_len..new.len() - suffix_len];

    if prefix_len > 0 {
        d.equal(0, 0, prefix_len)?;
    }

    let table = LcsTable::build(old_mid, new_mid);
    let mut old_idx = 0;
    let mut new_idx = 0;

    while old_idx < old_mid.len() && new_idx < new_mid.len() {
        let old_orig = prefix_len + old_idx;
        let new_orig = prefix_len + new_idx;

        if old_mid[old_idx] == new_mid[new_idx] {
            d.equal(old_orig, new_orig, 1)?;
            old_idx += 1;
            new_idx += 1;
        } else if table.get(old_idx + 1, new_idx) >= table.get(old_idx, new_idx + 1) {
            d.delete(old_orig, 1, new_orig)?;
            old_idx += 1;
        } else {
            d.insert(old_orig, new_orig, 1)?;
            new_idx += 1;
        }
    }

    if old_idx < old_mid.len() {
        d.delete(
            prefix_len + old_idx,
            old_mid.len() - old_idx,
            prefix_len + new_idx,
        )?;
    }

    if new_idx < new_mid.len() {
        d.insert(
            prefix_len + old_mid.len(),
            prefix_len + new_idx,
            new_mid.len() - new_idx,
        )?;
    }

    if suffix_len > 0 {
        d.equal(
            prefix_len + old_mid.len(),
            prefix_len + new_mid.len(),
            suffix_len,
        )?;
    }

    d.finish()
}

/// Capture the raw alignment: only `Equal`, `Delete` and `Insert` ops.
pub fn capture_ops<T: PartialEq>(old: &[T], new: &[T]) -> Vec<DiffOp> {
    let mut d = Capture::new();
    match diff_slices(&mut d, old, new) {
        Ok(()) => d.into_ops(),
        Err(never) => match never {},
    }
}

/// Capture the alignment with adjacent deletions and insertions merged into
/// `Replace` ops.
pub fn capture_grouped_ops<T: PartialEq>(old: &[T], new: &[T]) -> Vec<DiffOp> {
    let mut d = Replace::new(Capture::new());
    match diff_slices(&mut d, old, new) {
        Ok(()) => d.into_inner().into_ops(),
        Err(never) => match never {},
    }
}

/// Number of elements matched by a captured alignment.
pub fn matched_len(ops: &[DiffOp]) -> usize {
    ops.iter()
        .map(|op| match *op {
            DiffOp::Equal { len, .. } => len,
            _ => 0,
        })
        .sum()
}

/// Suffix LCS lengths: `get(i, j)` is the LCS of `old[i..]` and `new[j..]`.
struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let width = new.len() + 1;
        let mut cells = vec![0u32; (old.len() + 1) * width];

        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                cells[i * width + j] = if old[i] == new[j] {
                    cells[(i + 1) * width + j + 1] + 1
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }

        Self { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}
