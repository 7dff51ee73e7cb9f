use thiserror::Error;

/// Errors produced by the wire codec.
///
/// Any decode error aborts the message being decoded; the caller drops the
/// datagram. `CountMismatch` is a caller contract violation on the encode
/// side, not a wire-format error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("input ended at offset {0} before the field was complete")]
    TruncatedInput(usize),

    #[error("label is {0} bytes, limit is 63")]
    LabelTooLong(usize),

    #[error("label at offset {0} is not valid UTF-8")]
    InvalidLabel(usize),

    #[error("reserved length byte {byte:#04x} at offset {offset}")]
    InvalidLabelLength { byte: u8, offset: usize },

    #[error("compression pointer loop detected at offset {0}")]
    CompressionLoop(usize),

    #[error("header declares {declared} records but {supplied} were supplied")]
    CountMismatch { declared: u16, supplied: usize },
}
