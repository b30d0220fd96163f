//! Library components of the `wdpa-qa` command-line tool.

pub mod export;
pub mod logging;
