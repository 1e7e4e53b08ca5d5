//! Loads and stores, the densest branch of the decode tree.
//!
//! A five-field classifier (`op0..op4`) routes each word to a leaf decoder:
//! register pairs, unsigned-offset immediates, unscaled immediates,
//! pre/post-indexed immediates, and register offsets. Mnemonic selection is
//! table-driven on the `(opc, size, V)` tuple; a `None` cell is an
//! architecturally unallocated hole.

use crate::bits::{bit, field, sign_extend};
use crate::decoder::{AddrMode, ExtendType, Instruction, MemOperand, Operand, ShiftType};
use crate::error::DecodeError;
use crate::mnemonic::{Category, Mnemonic};
use crate::register::{Reg, RegFamily};

/// Group classifier fields, extracted once per word.
struct Fields {
    word: u32,
    op0: u32,
    op1: u32,
    op2: u32,
    op3: u32,
    op4: u32,
}

impl Fields {
    fn new(word: u32) -> Self {
        Self {
            word,
            op0: field(word, 31, 28),
            op1: field(word, 26, 26),
            op2: field(word, 24, 23),
            op3: field(word, 21, 16),
            op4: field(word, 11, 10),
        }
    }
}

/// Field layout shared by all single-register load/store forms.
struct RegForm {
    size: u32,
    v: bool,
    opc: u32,
    rn: u32,
    rt: u32,
}

impl RegForm {
    fn new(word: u32) -> Self {
        Self {
            size: field(word, 31, 30),
            v: bit(word, 26),
            opc: field(word, 23, 22),
            rn: field(word, 9, 5),
            rt: field(word, 4, 0),
        }
    }
}

fn undefined(word: u32, reason: &'static str) -> DecodeError {
    DecodeError::Undefined { word, reason }
}

fn unimplemented(word: u32, kind: Category) -> DecodeError {
    DecodeError::Unimplemented { word, kind }
}

pub(crate) fn decode(word: u32) -> Result<Instruction, DecodeError> {
    let f = Fields::new(word);

    if f.op0 & 0b1011 == 0 {
        return simd_structure(&f);
    }
    if f.op0 == 0b1101 && f.op1 == 0 && f.op2 >> 1 == 1 && f.op3 >> 5 == 1 {
        return Err(unimplemented(word, Category::MemoryTags));
    }
    if f.op0 & 0b1011 == 0b1000 {
        return Err(unimplemented(word, Category::ExclusivePair));
    }

    match f.op0 & 0b11 {
        0b00 => Err(unimplemented(word, Category::Exclusive)),
        0b01 => Err(unimplemented(word, Category::AcquireReleaseOrLiteral)),
        0b10 => pair(&f),
        _ => register_or_atomic(&f),
    }
}

/// Advanced SIMD load/store structure. Both defined shapes belong to the
/// SIMD collaborator.
fn simd_structure(f: &Fields) -> Result<Instruction, DecodeError> {
    if f.op2 == 0b11 {
        // Single structure, post-indexed.
        return Err(unimplemented(f.word, Category::SimdStructure));
    }
    if f.op3 & 0b11111 == 0 {
        // Single structure.
        return Err(unimplemented(f.word, Category::SimdStructure));
    }
    Err(undefined(f.word, "advanced SIMD load/store structure"))
}

/// Load/store register pair.
fn pair(f: &Fields) -> Result<Instruction, DecodeError> {
    let word = f.word;
    let mode = match f.op2 {
        0b00 => return Err(unimplemented(word, Category::NoAllocatePair)),
        0b01 => AddrMode::PostIndex,
        0b10 => AddrMode::Offset,
        _ => AddrMode::PreIndex,
    };

    let opc = field(word, 31, 30);
    let v = bit(word, 26);
    let load = bit(word, 22);
    let imm7 = field(word, 21, 15);
    let rt2 = field(word, 14, 10);
    let rn = field(word, 9, 5);
    let rt = field(word, 4, 0);

    if opc == 0b11 {
        return Err(undefined(word, "load/store pair opc 0b11"));
    }

    let mut mnemonic = if load { Mnemonic::Ldp } else { Mnemonic::Stp };
    if opc == 0b01 && !v {
        mnemonic = if load { Mnemonic::Ldpsw } else { Mnemonic::Stgp };
    }

    let (family, data_bits) = match opc {
        0b00 if v => (RegFamily::S, 32),
        0b00 => (RegFamily::W, 32),
        0b01 if mnemonic == Mnemonic::Stgp => (RegFamily::W, 32),
        0b01 => (RegFamily::D, 64),
        _ if v => (RegFamily::V, 128),
        _ => (RegFamily::X, 64),
    };

    let offset = sign_extend(imm7 as u64, 7) * (data_bits / 8);

    let mut insn = Instruction::new(mnemonic, Some(Category::LoadStore));
    insn.operands[0] = Operand::Reg(Reg::new(family, rt as u8));
    insn.operands[1] = Operand::Reg(Reg::new(family, rt2 as u8));
    insn.operands[2] = Operand::Mem(MemOperand::immediate(Reg::base(rn), offset, mode));
    Ok(insn)
}

/// Load/store register or atomic: unsigned offset, register offset, and the
/// unscaled/indexed immediate forms.
fn register_or_atomic(f: &Fields) -> Result<Instruction, DecodeError> {
    if f.op2 >> 1 == 1 {
        return unsigned_offset(f.word);
    }
    if f.op3 >> 5 == 1 {
        return match f.op4 {
            0b00 => Err(unimplemented(f.word, Category::Atomic)),
            0b10 => register_offset(f.word),
            _ => Err(unimplemented(f.word, Category::PointerAuth)),
        };
    }
    match f.op4 {
        0b00 => unscaled(f.word),
        0b01 => indexed(f.word, AddrMode::PostIndex),
        0b10 => Err(unimplemented(f.word, Category::Unprivileged)),
        _ => indexed(f.word, AddrMode::PreIndex),
    }
}

use Mnemonic as M;

/// Mnemonics of the scaled and register-offset forms, indexed
/// `[opc][size][V]`.
const SCALED: [[[Option<Mnemonic>; 2]; 4]; 4] = [
    [
        [Some(M::Strb), Some(M::Str)],
        [Some(M::Strh), Some(M::Str)],
        [Some(M::Str), Some(M::Str)],
        [Some(M::Str), Some(M::Str)],
    ],
    [
        [Some(M::Ldrb), Some(M::Ldr)],
        [Some(M::Ldrh), Some(M::Ldr)],
        [Some(M::Ldr), Some(M::Ldr)],
        [Some(M::Ldr), Some(M::Ldr)],
    ],
    [
        [Some(M::Ldrsb), Some(M::Str)],
        [Some(M::Ldrsh), None],
        [Some(M::Ldrsw), None],
        [None, None],
    ],
    [
        [Some(M::Ldrsb), Some(M::Ldr)],
        [Some(M::Ldrsh), None],
        [Some(M::Prfm), None],
        [None, None],
    ],
];

/// Mnemonics of the unscaled forms, same shape as [`SCALED`].
const UNSCALED: [[[Option<Mnemonic>; 2]; 4]; 4] = [
    [
        [Some(M::Sturb), Some(M::Stur)],
        [Some(M::Sturh), Some(M::Stur)],
        [Some(M::Stur), Some(M::Stur)],
        [Some(M::Stur), Some(M::Stur)],
    ],
    [
        [Some(M::Ldurb), Some(M::Ldur)],
        [Some(M::Ldurh), Some(M::Ldur)],
        [Some(M::Ldur), Some(M::Ldur)],
        [Some(M::Ldur), Some(M::Ldur)],
    ],
    [
        [Some(M::Ldursb), Some(M::Stur)],
        [Some(M::Ldursh), None],
        [Some(M::Ldursw), None],
        [None, None],
    ],
    [
        [Some(M::Ldursb), Some(M::Ldur)],
        [Some(M::Ldursh), None],
        [Some(M::Prfum), None],
        [None, None],
    ],
];

fn lookup(
    table: &[[[Option<Mnemonic>; 2]; 4]; 4],
    opc: u32,
    size: u32,
    v: bool,
) -> Option<Mnemonic> {
    table[opc as usize][size as usize][v as usize]
}

/// Register family of `Rt` for the single-register forms.
///
/// Vector accesses with opc == 0 use the per-size scalar families B/H/S/D;
/// every other vector access uses the full vector register.
fn rt_family(mnemonic: Mnemonic, size: u32, opc: u32, v: bool) -> RegFamily {
    if v && opc == 0 {
        return match size {
            0 => RegFamily::B,
            1 => RegFamily::H,
            2 => RegFamily::S,
            _ => RegFamily::D,
        };
    }
    if v {
        return RegFamily::V;
    }
    match mnemonic {
        M::Strb | M::Ldrb | M::Strh | M::Ldrh | M::Sturb | M::Ldurb | M::Sturh | M::Ldurh => {
            RegFamily::W
        }
        M::Str | M::Ldr | M::Stur | M::Ldur => {
            if size == 0b10 {
                RegFamily::W
            } else {
                RegFamily::X
            }
        }
        M::Ldrsh | M::Ldursh | M::Ldrsb | M::Ldursb => {
            if opc == 0b10 {
                RegFamily::X
            } else {
                RegFamily::W
            }
        }
        // LDRSW/LDURSW; pair and prefetch mnemonics never reach here.
        _ => RegFamily::X,
    }
}

/// Build the common `Rt, [mem]` record shape.
fn single(mnemonic: Mnemonic, family: RegFamily, rt: u32, mem: MemOperand) -> Instruction {
    let mut insn = Instruction::new(mnemonic, Some(Category::LoadStore));
    insn.operands[0] = Operand::Reg(Reg::new(family, rt as u8));
    insn.operands[1] = Operand::Mem(mem);
    insn
}

/// Load/store register, unsigned scaled immediate.
fn unsigned_offset(word: u32) -> Result<Instruction, DecodeError> {
    let r = RegForm::new(word);
    let mnemonic = lookup(&SCALED, r.opc, r.size, r.v)
        .ok_or(undefined(word, "load/store unsigned immediate"))?;
    if mnemonic == M::Prfm {
        return Err(unimplemented(word, Category::Prefetch));
    }

    let imm12 = field(word, 21, 10);
    // Zero-extended, then scaled to the data width.
    let offset = (imm12 as i64) << r.size;

    let family = rt_family(mnemonic, r.size, r.opc, r.v);
    Ok(single(
        mnemonic,
        family,
        r.rt,
        MemOperand::offset(Reg::base(r.rn), offset),
    ))
}

/// Load/store register, register offset.
fn register_offset(word: u32) -> Result<Instruction, DecodeError> {
    let r = RegForm::new(word);
    let mnemonic =
        lookup(&SCALED, r.opc, r.size, r.v).ok_or(undefined(word, "load/store register offset"))?;
    if mnemonic == M::Prfm {
        return Err(unimplemented(word, Category::Prefetch));
    }

    let rm = field(word, 20, 16);
    let option = field(word, 15, 13);
    let s = bit(word, 12);

    // option 0b011 is the LSL form; everything else is an extend.
    let shifted = option == 0b011;
    let index_family = if option & 1 == 1 {
        RegFamily::X
    } else {
        RegFamily::W
    };
    let index = Reg::new(index_family, rm as u8);
    let (extend, shift) = if shifted {
        (None, Some(ShiftType::Lsl))
    } else {
        (Some(ExtendType::from_u32(option)), None)
    };
    let amount = if s {
        if r.v && r.opc == 0b11 && r.size == 0 {
            4
        } else {
            r.size as u8
        }
    } else {
        0
    };

    let family = rt_family(mnemonic, r.size, r.opc, r.v);
    let mem = MemOperand::register(Reg::base(r.rn), index, extend, shift, amount);
    Ok(single(mnemonic, family, r.rt, mem))
}

/// Load/store register, unscaled immediate (the STUR/LDUR family).
fn unscaled(word: u32) -> Result<Instruction, DecodeError> {
    let r = RegForm::new(word);
    let mnemonic = lookup(&UNSCALED, r.opc, r.size, r.v)
        .ok_or(undefined(word, "load/store unscaled immediate"))?;
    if mnemonic == M::Prfum {
        return Err(unimplemented(word, Category::Prefetch));
    }

    let imm9 = field(word, 20, 12);
    let offset = sign_extend(imm9 as u64, 9);

    let family = rt_family(mnemonic, r.size, r.opc, r.v);
    Ok(single(
        mnemonic,
        family,
        r.rt,
        MemOperand::offset(Reg::base(r.rn), offset),
    ))
}

/// Load/store register, immediate pre/post-indexed.
fn indexed(word: u32, mode: AddrMode) -> Result<Instruction, DecodeError> {
    let r = RegForm::new(word);
    // Prefetch has no updating form; its cell is a hole here.
    let mnemonic = lookup(&SCALED, r.opc, r.size, r.v)
        .filter(|&m| m != M::Prfm)
        .ok_or(undefined(word, "load/store immediate indexed"))?;

    let imm9 = field(word, 20, 12);
    let offset = sign_extend(imm9 as u64, 9);

    let family = rt_family(mnemonic, r.size, r.opc, r.v);
    Ok(single(
        mnemonic,
        family,
        r.rt,
        MemOperand::immediate(Reg::base(r.rn), offset, mode),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonic_tables_agree_on_holes() {
        for opc in 0..4usize {
            for size in 0..4usize {
                for v in 0..2usize {
                    assert_eq!(
                        SCALED[opc][size][v].is_none(),
                        UNSCALED[opc][size][v].is_none(),
                        "hole mismatch at opc={opc} size={size} v={v}"
                    );
                }
            }
        }
    }
}
