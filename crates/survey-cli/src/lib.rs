//! Library components of the survey command-line tools.

pub mod logging;
pub mod redact;
pub mod winners;
