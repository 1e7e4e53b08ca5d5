pub mod alias;
pub mod bits;
pub mod decoder;
pub mod disasm;
pub mod driver;
pub mod error;
pub mod mnemonic;
pub mod register;

pub mod isa {
    pub mod a64; // ARMv8-A A64 base encoding
}

pub use decoder::{AddrMode, Decoder, ExtendType, Instruction, MemOperand, Operand, ShiftType};
pub use driver::{decode_all, decode_iter, DecodeFlags, InstrIter};
pub use error::{DecodeError, Error};
pub use mnemonic::{Category, Mnemonic};
pub use register::{Reg, RegFamily};
