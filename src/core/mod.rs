//! Core conversion support
//!
//! Error types, the somatic status table, numeric rules shared by both
//! directions, conversion options and input handling.

mod error;
pub mod io;
pub mod numeric;
mod options;
mod status;

pub use error::{RecordError, RecordResult, Result, VarscanVcfError};
pub use io::{CompressionFormat, InputReader, LineIterator, DEFAULT_BUFFER_SIZE};
pub use numeric::{format_float, parse_count, parse_percent, Genotype, SomaticScore};
pub use options::{CompatMode, ConvertOptions, ErrorPolicy, VcfLayout};
pub use status::SomaticStatus;
