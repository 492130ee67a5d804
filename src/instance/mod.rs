//! CARP instance files.
//!
//! Loads the plain-text instance format: a header block of
//! `KEY : value` lines followed by one `from to cost demand` line per
//! required street.

mod parser;

pub use parser::{Instance, CONDITION_NUM_NODES};
