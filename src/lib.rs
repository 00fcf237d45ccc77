//! Streaming FASTQ to CSV converter.
//!
//! - Plain and `.gz` input (auto-detect).
//! - Streaming, block-by-block (no full-file buffering).
//! - Strict: the first malformed block aborts the conversion.
//! - One quoted CSV row per 4-line FASTQ block, after a fixed header.
//! - `zlib` feature for system-zlib parity.

pub mod convert;
pub mod error;
pub mod grouper;
pub mod record;

pub use crate::convert::{convert, convert_path, csv_output_path};
pub use crate::error::{ConvertError, FormatError, InputContext};
pub use crate::grouper::{BLOCK_LINES, Blocks};
pub use crate::record::FastqRecord;
