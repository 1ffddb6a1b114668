/// Defines the data structures for log records.
pub mod logrecord;
/// Implements a local logger with support for TTY and file output.
pub mod loggerlocal;

pub use loggerlocal::{parse_level, LoggerLocal, LoggerLocalOptions, ALL_LEVELS};
pub use logrecord::Logrecord;
