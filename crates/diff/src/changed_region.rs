use std::ops::Range;

/// The span of lines that differ between two line sequences, found by
/// stripping their shared leading and trailing lines.
///
/// Lines before `new.start` / `old.start` and from `new.end` / `old.end`
/// onwards are identical on both sides. The prefix length is the same on
/// both sides, and so is the suffix length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedRegion {
    /// The differing lines in the previous sequence (exclusive end)
    pub old: Range<usize>,

    /// The differing lines in the updated sequence (exclusive end)
    pub new: Range<usize>,
}

impl ChangedRegion {
    /// Find the changed region between `old_lines` and `new_lines`.
    ///
    /// The suffix scan stops where the prefix scan ended, so a line is
    /// never counted in both.
    pub fn between<T: PartialEq>(old_lines: &[T], new_lines: &[T]) -> Self {
        let (mut old_start, mut new_start) = (0, 0);
        let (mut old_end, mut new_end) = (old_lines.len(), new_lines.len());

        while new_start < new_end
            && old_start < old_end
            && new_lines[new_start] == old_lines[old_start]
        {
            new_start += 1;
            old_start += 1;
        }

        while new_end > new_start
            && old_end > old_start
            && new_lines[new_end - 1] == old_lines[old_end - 1]
        {
            new_end -= 1;
            old_end -= 1;
        }

        Self {
            old: old_start..old_end,
            new: new_start..new_end,
        }
    }

    /// Number of leading lines shared by both sequences
    pub fn prefix_len(&self) -> usize {
        self.new.start
    }

    /// Number of previous lines inside the region
    pub fn old_len(&self) -> usize {
        self.old.end - self.old.start
    }

    /// Number of updated lines inside the region
    pub fn new_len(&self) -> usize {
        self.new.end - self.new.start
    }

    /// True when the sequences are line-for-line identical
    pub fn is_empty(&self) -> bool {
        self.old.is_empty() && self.new.is_empty()
    }
}
