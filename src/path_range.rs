use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path_index::PathIndex;

/// A contiguous run of sibling atoms in a math list.
///
/// Like an ordinary (position, length) range, except the starting position is
/// a full [`PathIndex`], so the run can live inside a nested branch. The run
/// covers the half-open span `[start, start + length)` within the innermost
/// list that `start` addresses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct PathRange {
    start: PathIndex,
    length: usize,
}

impl PathRange {
    /// A range of `length` atoms starting at `start`.
    pub fn of(start: PathIndex, length: usize) -> Self {
        Self { start, length }
    }

    /// A range of `count` atoms in the top-level list.
    pub fn of_plain_range(position: usize, count: usize) -> Self {
        Self::of(PathIndex::level0(position), count)
    }

    /// A range covering only the atom `start` points at.
    pub fn single(start: PathIndex) -> Self {
        Self::of(start, 1)
    }

    /// A range covering only the atom at `position` in the top-level list.
    pub fn single_at(position: usize) -> Self {
        Self::of(PathIndex::level0(position), 1)
    }

    pub fn start(&self) -> &PathIndex {
        &self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// The same range one level further down, for recursing into the branch
    /// that `start` descends into. `None` if `start` is already terminal.
    pub fn sub_index_range(&self) -> Option<PathRange> {
        self.start
            .sub_index()
            .map(|sub_index| Self::of(sub_index.clone(), self.length))
    }

    /// The smallest contiguous range containing both `self` and `other`.
    /// Atoms between the two ranges are included as well.
    ///
    /// Panics if the ranges live in different branches, since merging those
    /// has no meaningful result.
    pub fn union(&self, other: &PathRange) -> PathRange {
        let comparable = self.start.level() == other.start.level()
            && self.start.with_final_position(0) == other.start.with_final_position(0);
        if !comparable {
            log::error!(
                "cannot union ranges in different branches: {} and {}",
                self,
                other
            );
            panic!("cannot union ranges in different branches");
        }
        let start = self
            .start
            .final_position()
            .min(other.start.final_position());
        let end = (self.start.final_position() + self.length)
            .max(other.start.final_position() + other.length);
        Self::of(self.start.with_final_position(start), end - start)
    }

    /// Folds [`union`](Self::union) over the ranges, left to right.
    /// `None` for an empty slice.
    pub fn union_all(ranges: &[PathRange]) -> Option<PathRange> {
        let (first, rest) = ranges.split_first()?;
        Some(
            rest.iter()
                .fold(first.clone(), |union, range| union.union(range)),
        )
    }
}

impl fmt::Display for PathRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.length)
    }
}
