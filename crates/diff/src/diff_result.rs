#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line_change::{ChangeKind, LineChange};

/// The ordered line changes between a previous and an updated text.
///
/// Changes are ordered by where they occur while scanning the updated text,
/// with removals placed at the point where the removed lines used to be.
/// An empty result means the two texts were identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffResult {
    changes: Vec<LineChange>,
}

impl DiffResult {
    /// A result with no changes
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap changes that are already in order
    pub fn from_changes(changes: Vec<LineChange>) -> Self {
        Self { changes }
    }

    /// Get the changes
    pub fn changes(&self) -> &[LineChange] {
        &self.changes
    }

    /// Take the changes out of the result
    pub fn into_changes(self) -> Vec<LineChange> {
        self.changes
    }

    /// Iterate over the changes in order
    pub fn iter(&self) -> std::slice::Iter<'_, LineChange> {
        self.changes.iter()
    }

    /// Get the number of changes
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Check if the texts were identical
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Get the number of added lines
    pub fn added_lines(&self) -> usize {
        self.count(ChangeKind::Added)
    }

    /// Get the number of removed lines
    pub fn removed_lines(&self) -> usize {
        self.count(ChangeKind::Removed)
    }

    /// Get the number of changed lines
    pub fn changed_lines(&self) -> usize {
        self.count(ChangeKind::Changed)
    }

    fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }

    /// Replay the changes against the previous text, producing the updated text
    pub fn apply(&self, previous: &str) -> String {
        let lines: Vec<&str> = previous.split('\n').collect();
        self.apply_to_lines(&lines).join("\n")
    }

    /// Replay the changes, in order, against the previous text's lines.
    ///
    /// Every change is applied at its `new_line` anchor: additions insert
    /// there, changes overwrite the line there, and removals delete the line
    /// there (which is previous line `old_line` once the earlier changes
    /// have been applied). Anchors past the end of the working lines are
    /// appended or ignored rather than panicking.
    pub fn apply_to_lines<S: AsRef<str>>(&self, previous: &[S]) -> Vec<String> {
        let mut lines: Vec<String> = previous.iter().map(|l| l.as_ref().to_owned()).collect();

        for change in &self.changes {
            let at = change.new_line;
            match change.kind {
                ChangeKind::Added => {
                    lines.insert(at.min(lines.len()), change.content.clone());
                }
                ChangeKind::Changed => match lines.get_mut(at) {
                    Some(line) => *line = change.content.clone(),
                    None => lines.push(change.content.clone()),
                },
                ChangeKind::Removed => {
                    if at < lines.len() {
                        lines.remove(at);
                    }
                }
            }
        }

        lines
    }
}

impl From<Vec<LineChange>> for DiffResult {
    fn from(changes: Vec<LineChange>) -> Self {
        Self::from_changes(changes)
    }
}

impl IntoIterator for DiffResult {
    type Item = LineChange;
    type IntoIter = std::vec::IntoIter<LineChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a LineChange;
    type IntoIter = std::slice::Iter<'a, LineChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}
