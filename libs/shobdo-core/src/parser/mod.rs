//! Parsers for the hand-authored content files.
//!
//! The text parsers never fail: malformed lines and blocks are logged and
//! skipped, so a partially broken file still yields every usable entry.

pub mod grammar;
pub mod passages;
pub mod words;
