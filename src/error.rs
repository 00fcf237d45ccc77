use std::io;
use thiserror::Error;

/// Position in the input where an error was raised. `line_num` counts
/// real input lines consumed so far; `record_num` counts 4-line blocks,
/// starting at 1 for the first block.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    pub record_num: u64,
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("input ended in the middle of a 4-line record")]
    TruncatedBlock,
    #[error("header line has no whitespace after the read id")]
    MissingDescription,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: InputContext,
    },
    #[error("format error at {ctx:?}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: InputContext,
    },
}

impl ConvertError {
    pub(crate) fn io_err(source: io::Error, ctx: InputContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: InputContext) -> Self {
        Self::Format { source, ctx }
    }
}
