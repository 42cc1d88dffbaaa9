use anyhow::{bail, Result};
use line_diff::DiffOptions;

pub const USAGE: &str = "Usage: diff-bridge [--old-content]
Reads one JSON request per line from stdin, {\"previous\": ..., \"updated\": ...},
and writes one JSON response per line to stdout.

  --old-content  include the previous text of changed and removed lines
  -h, --help     print this message

Logging goes to stderr and is configured with RUST_LOG.";

/// Parse command line arguments (without the program name).
///
/// Returns `None` when help was requested.
pub fn parse_args<I>(args: I) -> Result<Option<DiffOptions>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut options = DiffOptions::default();

    for arg in args {
        match arg.as_ref() {
            "--old-content" => options = options.include_old_content(true),
            "-h" | "--help" => return Ok(None),
            other => bail!("Unknown argument: {}\n\n{}", other, USAGE),
        }
    }

    Ok(Some(options))
}
