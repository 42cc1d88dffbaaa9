//! Line-delimited JSON host loop
//!
//! Each input line is one request, `{"previous": "...", "updated": "..."}`,
//! and each request gets exactly one response line: the diff result, or
//! `{"error": "..."}` when the request could not be handled.

use anyhow::{Context, Result};
use line_diff::LineDiffer;
use log::{debug, warn};
use serde::Deserialize;
use std::io::{BufRead, Write};

use crate::call::{encode, BridgeResponse};

/// One diff request from the host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiffRequest {
    pub previous: String,
    pub updated: String,
}

/// Handle a single request line, always producing a response line
pub fn handle_request_line(line: &str, differ: &LineDiffer) -> String {
    let response = match serde_json::from_str::<DiffRequest>(line) {
        Ok(request) => {
            let result = differ.diff(&request.previous, &request.updated);
            debug!("Request produced {} changes", result.len());
            encode(&result)
        }
        Err(e) => {
            warn!("Rejecting malformed request: {}", e);
            BridgeResponse::Error(format!("Invalid request: {}", e))
        }
    };

    response.into_json()
}

/// Serve requests from `reader` until it is exhausted.
///
/// Blank lines are skipped. A line that is not valid UTF-8 is answered with
/// an error like any other malformed request; only I/O failures stop the
/// loop. Returns the number of requests answered.
pub fn serve<R: BufRead, W: Write>(mut reader: R, mut writer: W, differ: &LineDiffer) -> Result<usize> {
    let mut handled = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).context("Failed to read request")?;
        if read == 0 {
            break;
        }
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
                handle_request_line(line, differ)
            }
            Err(e) => {
                warn!("Rejecting request that is not UTF-8: {}", e);
                BridgeResponse::Error(format!("Invalid request: {}", e)).into_json()
            }
        };
        writeln!(writer, "{}", response).context("Failed to write response")?;
        writer.flush().context("Failed to flush response")?;
        handled += 1;
    }

    Ok(handled)
}
