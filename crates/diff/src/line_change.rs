use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The kind of a single line-level change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChangeKind {
    /// The line only exists in the updated text
    #[display(fmt = "Added")]
    Added,

    /// The line only existed in the previous text
    #[display(fmt = "Removed")]
    Removed,

    /// The line sits inside the changed region on both sides
    #[display(fmt = "Changed")]
    Changed,
}

/// One line-level difference between a previous and an updated text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineChange {
    /// What happened to the line
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ChangeKind,

    /// The 0-based line in the updated text this change is anchored at.
    ///
    /// For removals this is the position the removed line used to occupy,
    /// not a line that exists in the updated text.
    #[cfg_attr(feature = "serde", serde(rename = "lineNum"))]
    pub new_line: usize,

    /// The 0-based line in the previous text, only known for removals
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "oldLine",
            serialize_with = "serialize_old_line",
            deserialize_with = "deserialize_old_line"
        )
    )]
    pub old_line: Option<usize>,

    /// Text of the new line (empty for removals)
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,

    /// Text of the previous line, when the differ was asked to keep it
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "oldContent",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub old_content: Option<String>,
}

impl LineChange {
    /// A line inserted at `new_line`
    pub fn added(new_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Added,
            new_line,
            old_line: None,
            content: content.into(),
            old_content: None,
        }
    }

    /// Previous line `old_line` dropped at position `new_line`
    pub fn removed(new_line: usize, old_line: usize) -> Self {
        Self {
            kind: ChangeKind::Removed,
            new_line,
            old_line: Some(old_line),
            content: String::new(),
            old_content: None,
        }
    }

    /// The line at `new_line` now reads `content`
    pub fn changed(new_line: usize, content: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Changed,
            new_line,
            old_line: None,
            content: content.into(),
            old_content: None,
        }
    }

    /// Attach the previous text of the line
    pub fn with_old_content(mut self, old_content: impl Into<String>) -> Self {
        self.old_content = Some(old_content.into());
        self
    }

    pub fn is_added(&self) -> bool {
        self.kind == ChangeKind::Added
    }

    pub fn is_removed(&self) -> bool {
        self.kind == ChangeKind::Removed
    }

    pub fn is_changed(&self) -> bool {
        self.kind == ChangeKind::Changed
    }
}

// `oldLine` is -1 on the wire when there is no previous line.
#[cfg(feature = "serde")]
fn serialize_old_line<S: Serializer>(
    old_line: &Option<usize>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match old_line {
        Some(line) => serializer.serialize_u64(*line as u64),
        None => serializer.serialize_i64(-1),
    }
}

#[cfg(feature = "serde")]
fn deserialize_old_line<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<usize>, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(usize::try_from(raw).ok())
}
