// Host bridge for the line differ
// This crate exposes the differ to a calling environment as JSON

mod args;
mod call;
mod host;

pub use args::{parse_args, USAGE};
pub use call::{call, encode, BridgeResponse, ARGUMENT_ERROR};
pub use host::{handle_request_line, serve, DiffRequest};
