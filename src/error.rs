use crate::mnemonic::Category;

/// Word-level decode outcome. Leaf decoders signal these; the driver decides
/// what survives according to its policy flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The bit pattern falls in an architecturally unallocated hole.
    #[error("undefined encoding {word:#010x}: {reason}")]
    Undefined { word: u32, reason: &'static str },
    /// A well-defined encoding family this decoder does not cover.
    #[error("unimplemented {kind} encoding {word:#010x}")]
    Unimplemented { word: u32, kind: Category },
}

/// Buffer-level driver error, carrying the byte offset of the failing word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("input length {len} is not a multiple of 4")]
    UnalignedInput { len: usize },
    #[error("undefined encoding {word:#010x} at offset {offset:#x}: {reason}")]
    Undefined {
        word: u32,
        offset: usize,
        reason: &'static str,
    },
    #[error("unimplemented {kind} encoding {word:#010x} at offset {offset:#x}")]
    Unimplemented {
        word: u32,
        offset: usize,
        kind: Category,
    },
}

impl Error {
    pub(crate) fn at(err: DecodeError, offset: usize) -> Self {
        match err {
            DecodeError::Undefined { word, reason } => Error::Undefined { word, offset, reason },
            DecodeError::Unimplemented { word, kind } => Error::Unimplemented { word, offset, kind },
        }
    }
}
