//! Byte-buffer decode drivers.
//!
//! Both drivers walk a little-endian instruction buffer in 4-byte steps,
//! decode each word, stamp the virtual address, and apply the policy flags.

use bitflags::bitflags;

use crate::alias;
use crate::decoder::{Decoder, Instruction};
use crate::error::{DecodeError, Error};
use crate::isa::a64::A64Decoder;

bitflags! {
    /// Policy switches for the buffer drivers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DecodeFlags: u32 {
        /// Rewrite decoded records to their canonical alias forms.
        const REMAP_ALIASES = 1 << 0;
        /// Substitute INVALID records for undefined encodings instead of
        /// failing.
        const CONTINUE_ON_ERROR = 1 << 1;
        /// Surface unimplemented encoding families instead of returning
        /// inert records.
        const THROW_ON_UNIMPLEMENTED = 1 << 2;
    }
}

impl Default for DecodeFlags {
    fn default() -> Self {
        DecodeFlags::REMAP_ALIASES | DecodeFlags::THROW_ON_UNIMPLEMENTED
    }
}

fn decode_word(
    decoder: &A64Decoder,
    word: u32,
    offset: usize,
    base: u64,
    flags: DecodeFlags,
) -> Result<Instruction, Error> {
    let mut insn = match decoder.decode(word) {
        Ok(insn) => insn,
        Err(err @ DecodeError::Undefined { reason, .. }) => {
            if !flags.contains(DecodeFlags::CONTINUE_ON_ERROR) {
                return Err(Error::at(err, offset));
            }
            tracing::debug!(word, offset, reason, "substituting invalid record");
            Instruction::invalid()
        }
        Err(err @ DecodeError::Unimplemented { kind, .. }) => {
            if flags.contains(DecodeFlags::THROW_ON_UNIMPLEMENTED) {
                return Err(Error::at(err, offset));
            }
            Instruction::unimplemented(kind)
        }
    };
    insn.address = base + offset as u64;
    if flags.contains(DecodeFlags::REMAP_ALIASES) {
        alias::remap(&mut insn);
    }
    Ok(insn)
}

fn word_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Decode an entire buffer eagerly.
///
/// The buffer length must be a multiple of 4; each record's address is
/// `base + 4 * i`.
pub fn decode_all(bytes: &[u8], base: u64, flags: DecodeFlags) -> Result<Vec<Instruction>, Error> {
    if bytes.len() % 4 != 0 {
        return Err(Error::UnalignedInput { len: bytes.len() });
    }
    let decoder = A64Decoder::new();
    let mut out = Vec::with_capacity(bytes.len() / 4);
    for offset in (0..bytes.len()).step_by(4) {
        out.push(decode_word(
            &decoder,
            word_at(bytes, offset),
            offset,
            base,
            flags,
        )?);
    }
    Ok(out)
}

/// Pull-based variant of [`decode_all`]: one word is decoded per step, and
/// dropping the iterator stops all work.
pub fn decode_iter(bytes: &[u8], base: u64, flags: DecodeFlags) -> Result<InstrIter<'_>, Error> {
    if bytes.len() % 4 != 0 {
        return Err(Error::UnalignedInput { len: bytes.len() });
    }
    Ok(InstrIter {
        decoder: A64Decoder::new(),
        bytes,
        offset: 0,
        base,
        flags,
    })
}

/// Lazy instruction stream over a byte buffer.
pub struct InstrIter<'a> {
    decoder: A64Decoder,
    bytes: &'a [u8],
    offset: usize,
    base: u64,
    flags: DecodeFlags,
}

impl Iterator for InstrIter<'_> {
    type Item = Result<Instruction, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset + 4 > self.bytes.len() {
            return None;
        }
        let item = decode_word(
            &self.decoder,
            word_at(self.bytes, self.offset),
            self.offset,
            self.base,
            self.flags,
        );
        self.offset += 4;
        Some(item)
    }
}
