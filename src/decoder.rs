use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::mnemonic::{Category, Mnemonic};
use crate::register::Reg;

/// Shift applied to a register-offset index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftType {
    Lsl = 0,
    Lsr = 1,
    Asr = 2,
    Ror = 3,
}

impl ShiftType {
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftType::Lsl => "lsl",
            ShiftType::Lsr => "lsr",
            ShiftType::Asr => "asr",
            ShiftType::Ror => "ror",
        }
    }
}

/// Extension applied to a register-offset index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtendType {
    Uxtb = 0,
    Uxth = 1,
    Uxtw = 2,
    Uxtx = 3,
    Sxtb = 4,
    Sxth = 5,
    Sxtw = 6,
    Sxtx = 7,
}

impl ExtendType {
    pub fn from_u32(val: u32) -> Self {
        match val & 7 {
            0 => ExtendType::Uxtb,
            1 => ExtendType::Uxth,
            2 => ExtendType::Uxtw,
            3 => ExtendType::Uxtx,
            4 => ExtendType::Sxtb,
            5 => ExtendType::Sxth,
            6 => ExtendType::Sxtw,
            _ => ExtendType::Sxtx,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtendType::Uxtb => "uxtb",
            ExtendType::Uxth => "uxth",
            ExtendType::Uxtw => "uxtw",
            ExtendType::Uxtx => "uxtx",
            ExtendType::Sxtb => "sxtb",
            ExtendType::Sxth => "sxth",
            ExtendType::Sxtw => "sxtw",
            ExtendType::Sxtx => "sxtx",
        }
    }
}

/// Addressing mode of a memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddrMode {
    /// Base + displacement, base unchanged.
    Offset,
    /// Base updated before the access.
    PreIndex,
    /// Base updated after the access.
    PostIndex,
}

/// Memory operand of a load or store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemOperand {
    pub base: Reg,
    /// Index register of the register-offset forms.
    pub index: Option<Reg>,
    pub offset: i64,
    pub mode: AddrMode,
    pub extend: Option<ExtendType>,
    pub shift: Option<ShiftType>,
    /// Extend or shift amount applied to the index register.
    pub amount: u8,
}

impl MemOperand {
    /// Immediate-displacement operand in the given addressing mode.
    pub fn immediate(base: Reg, offset: i64, mode: AddrMode) -> Self {
        Self {
            base,
            index: None,
            offset,
            mode,
            extend: None,
            shift: None,
            amount: 0,
        }
    }

    /// Plain base + displacement operand.
    pub fn offset(base: Reg, offset: i64) -> Self {
        Self::immediate(base, offset, AddrMode::Offset)
    }

    /// Register-offset operand.
    pub fn register(
        base: Reg,
        index: Reg,
        extend: Option<ExtendType>,
        shift: Option<ShiftType>,
        amount: u8,
    ) -> Self {
        Self {
            base,
            index: Some(index),
            offset: 0,
            mode: AddrMode::Offset,
            extend,
            shift,
            amount,
        }
    }
}

/// One operand slot of a decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    None,
    Reg(Reg),
    Imm(i64),
    Mem(MemOperand),
}

/// A decoded A64 instruction.
///
/// Built once per word by a leaf decoder; the driver stamps `address`
/// afterwards and may hand the record to the alias remapper. Operand slots
/// are populated from index 0 upward and unused slots stay `Operand::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub category: Option<Category>,
    pub operands: [Operand; 4],
    /// Virtual address, assigned by the driver.
    pub address: u64,
}

impl Instruction {
    pub fn new(mnemonic: Mnemonic, category: Option<Category>) -> Self {
        Self {
            mnemonic,
            category,
            operands: [Operand::None; 4],
            address: 0,
        }
    }

    /// Placeholder record for an undefined encoding the caller chose to
    /// skip over.
    pub fn invalid() -> Self {
        Self::new(Mnemonic::Invalid, None)
    }

    /// Placeholder record for an encoding family left to a collaborator.
    pub fn unimplemented(kind: Category) -> Self {
        Self::new(Mnemonic::Unimplemented, Some(kind))
    }

    /// First memory operand, if any.
    pub fn mem(&self) -> Option<&MemOperand> {
        self.operands.iter().find_map(|op| match op {
            Operand::Mem(m) => Some(m),
            _ => None,
        })
    }

    pub fn is_pre_indexed(&self) -> bool {
        matches!(self.mem(), Some(m) if m.mode == AddrMode::PreIndex)
    }
}

/// A decoder from 32-bit instruction words to [`Instruction`] records.
pub trait Decoder {
    fn decode(&self, word: u32) -> Result<Instruction, DecodeError>;
}
