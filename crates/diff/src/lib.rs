// Line diff library for editor buffers
// This crate computes the line changes caused by a single edit

mod changed_region;
mod diff_result;
mod line_change;
mod line_differ;

pub use changed_region::ChangedRegion;
pub use diff_result::DiffResult;
pub use line_change::{ChangeKind, LineChange};
pub use line_differ::{diff_lines, DiffOptions, LineDiffer};
