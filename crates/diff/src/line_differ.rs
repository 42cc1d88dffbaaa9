use log::trace;

use crate::changed_region::ChangedRegion;
use crate::diff_result::DiffResult;
use crate::line_change::LineChange;

/// Options controlling what a [`LineDiffer`] records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Fill `old_content` on changed and removed lines
    pub include_old_content: bool,
}

impl DiffOptions {
    pub fn include_old_content(mut self, include: bool) -> Self {
        self.include_old_content = include;
        self
    }
}

/// Computes line changes between two versions of an editor buffer.
///
/// The differ assumes the two versions are one edit apart (a keystroke,
/// a paste, a deleted block). It strips the shared leading and trailing
/// lines and reports everything in between as a single changed block.
/// Several unrelated edits therefore come back as one block spanning from
/// the first difference to the last, not as separate minimal hunks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDiffer {
    options: DiffOptions,
}

impl LineDiffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DiffOptions {
        self.options
    }

    /// Diff `previous` against `updated`, splitting both on `'\n'`.
    ///
    /// Inside the changed region the two cursors advance together while
    /// both sides have lines left, producing changed lines. Once the updated
    /// side runs out the remaining previous lines are removed at the
    /// current position. Once the previous side runs out the remaining
    /// updated lines are added.
    pub fn diff(&self, previous: &str, updated: &str) -> DiffResult {
        if previous == updated {
            return DiffResult::empty();
        }

        let old_lines: Vec<&str> = previous.split('\n').collect();
        let new_lines: Vec<&str> = updated.split('\n').collect();

        let region = ChangedRegion::between(&old_lines, &new_lines);
        let (mut old_pos, mut new_pos) = (region.old.start, region.new.start);
        let mut changes = Vec::with_capacity(region.old_len().max(region.new_len()));

        while new_pos < region.new.end || old_pos < region.old.end {
            if new_pos == region.new.end {
                let mut change = LineChange::removed(new_pos, old_pos);
                if self.options.include_old_content {
                    change = change.with_old_content(old_lines[old_pos]);
                }
                changes.push(change);
                old_pos += 1;
            } else if old_pos == region.old.end {
                changes.push(LineChange::added(new_pos, new_lines[new_pos]));
                new_pos += 1;
            } else {
                let mut change = LineChange::changed(new_pos, new_lines[new_pos]);
                if self.options.include_old_content {
                    change = change.with_old_content(old_lines[old_pos]);
                }
                changes.push(change);
                new_pos += 1;
                old_pos += 1;
            }
        }

        trace!(
            "diffed {} -> {} lines: region old {:?} new {:?}, {} changes",
            old_lines.len(),
            new_lines.len(),
            region.old,
            region.new,
            changes.len()
        );

        DiffResult::from_changes(changes)
    }
}

/// Diff two versions of a buffer with default options.
///
/// Identical inputs return an empty result without being split into lines.
pub fn diff_lines(previous: &str, updated: &str) -> DiffResult {
    LineDiffer::default().diff(previous, updated)
}
