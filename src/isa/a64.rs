//! A64 top-level instruction-class dispatch.
//!
//! Routes a 32-bit word by bits 28:25 into one of the major encoding groups.
//! Only the loads/stores group is decoded here; the remaining groups are
//! owned by collaborating decoders and report their class through
//! [`DecodeError::Unimplemented`].

mod loadstore;

use crate::bits::field;
use crate::decoder::{Decoder, Instruction};
use crate::error::DecodeError;
use crate::mnemonic::Category;

/// Decoder for the A64 base instruction set.
pub struct A64Decoder;

impl A64Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for A64Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for A64Decoder {
    fn decode(&self, word: u32) -> Result<Instruction, DecodeError> {
        decode(word)
    }
}

/// Decode one 32-bit little-endian A64 instruction word.
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    let class = field(word, 28, 25);

    // Class 0000 with bit 31 clear is the reserved group.
    if word >> 31 == 0 && class == 0b0000 {
        return Err(DecodeError::Undefined {
            word,
            reason: "reserved group",
        });
    }

    match class {
        0b0001 | 0b0011 => Err(DecodeError::Undefined {
            word,
            reason: "unallocated instruction class",
        }),
        0b0000 => Err(DecodeError::Unimplemented {
            word,
            kind: Category::Sme,
        }),
        0b0010 => sve(word),
        0b1000 | 0b1001 => data_processing_imm(word),
        0b1010 | 0b1011 => branch_exception_system(word),
        0b0100 | 0b0110 | 0b1100 | 0b1110 => loadstore::decode(word),
        0b0101 | 0b1101 => data_processing_reg(word),
        _ => simd_fp(word),
    }
}

// Collaborator boundaries. Each group below is decoded by its own subtree
// upstream; this crate only names the class it saw.

fn sve(word: u32) -> Result<Instruction, DecodeError> {
    Err(DecodeError::Unimplemented {
        word,
        kind: Category::Sve,
    })
}

fn data_processing_imm(word: u32) -> Result<Instruction, DecodeError> {
    Err(DecodeError::Unimplemented {
        word,
        kind: Category::DataProcessingImm,
    })
}

fn branch_exception_system(word: u32) -> Result<Instruction, DecodeError> {
    Err(DecodeError::Unimplemented {
        word,
        kind: Category::BranchExceptionSystem,
    })
}

fn data_processing_reg(word: u32) -> Result<Instruction, DecodeError> {
    Err(DecodeError::Unimplemented {
        word,
        kind: Category::DataProcessingReg,
    })
}

fn simd_fp(word: u32) -> Result<Instruction, DecodeError> {
    Err(DecodeError::Unimplemented {
        word,
        kind: Category::SimdFp,
    })
}
