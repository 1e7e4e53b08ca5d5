use aarch64_rs::isa::a64::decode;
use aarch64_rs::{Category, DecodeError, ExtendType, Mnemonic, Operand, Reg, RegFamily, ShiftType};

fn enc_regoff(size: u32, v: u32, opc: u32, rm: u32, option: u32, s: u32, rn: u32, rt: u32) -> u32 {
    (size << 30)
        | (0b111 << 27)
        | (v << 26)
        | (opc << 22)
        | (1 << 21)
        | (rm << 16)
        | (option << 13)
        | (s << 12)
        | (0b10 << 10)
        | (rn << 5)
        | rt
}

#[test]
fn ldrb_uxtw_index() {
    // LDRB W0, [X1, W0, UXTW]
    let word = enc_regoff(0b00, 0, 0b01, 0, 0b010, 0, 1, 0);
    let insn = decode(word).unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Ldrb);
    assert_eq!(insn.operands[0], Operand::Reg(Reg::new(RegFamily::W, 0)));
    let mem = insn.mem().unwrap();
    assert_eq!(mem.base, Reg::new(RegFamily::X, 1));
    assert_eq!(mem.index, Some(Reg::new(RegFamily::W, 0)));
    assert_eq!(mem.extend, Some(ExtendType::Uxtw));
    assert_eq!(mem.shift, None);
    assert_eq!(mem.amount, 0);
}

#[test]
fn shifted_register_form_is_lsl() {
    // LDR X0, [X1, X2, LSL #3]
    let insn = decode(enc_regoff(0b11, 0, 0b01, 2, 0b011, 1, 1, 0)).unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Ldr);
    assert_eq!(insn.operands[0], Operand::Reg(Reg::new(RegFamily::X, 0)));
    let mem = insn.mem().unwrap();
    assert_eq!(mem.index, Some(Reg::new(RegFamily::X, 2)));
    assert_eq!(mem.extend, None);
    assert_eq!(mem.shift, Some(ShiftType::Lsl));
    assert_eq!(mem.amount, 3);
}

#[test]
fn index_family_follows_option_low_bit() {
    // SXTW keeps a 32-bit index register.
    let mem_w = decode(enc_regoff(0b10, 0, 0b01, 5, 0b110, 0, 1, 0)).unwrap();
    let mem_w = mem_w.mem().unwrap().index.unwrap();
    assert_eq!(mem_w.family, RegFamily::W);

    // SXTX keeps a 64-bit index register.
    let insn = decode(enc_regoff(0b10, 0, 0b01, 5, 0b111, 0, 1, 0)).unwrap();
    let mem = insn.mem().unwrap();
    assert_eq!(mem.index, Some(Reg::new(RegFamily::X, 5)));
    assert_eq!(mem.extend, Some(ExtendType::Sxtx));
}

#[test]
fn amount_is_zero_without_s() {
    let insn = decode(enc_regoff(0b11, 0, 0b01, 2, 0b011, 0, 1, 0)).unwrap();
    assert_eq!(insn.mem().unwrap().amount, 0);
}

#[test]
fn amount_follows_access_size() {
    for (size, expect) in [(0b00u32, 0u8), (0b01, 1), (0b10, 2), (0b11, 3)] {
        let insn = decode(enc_regoff(size, 0, 0b01, 2, 0b011, 1, 1, 0)).unwrap();
        assert_eq!(insn.mem().unwrap().amount, expect, "size={size}");
    }
}

#[test]
fn vector_128_bit_amount_is_four() {
    // LDR Q0, [X1, X2, LSL #4]
    let insn = decode(enc_regoff(0b00, 1, 0b11, 2, 0b011, 1, 1, 0)).unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Ldr);
    assert_eq!(insn.operands[0], Operand::Reg(Reg::new(RegFamily::V, 0)));
    assert_eq!(insn.mem().unwrap().amount, 4);
}

#[test]
fn signed_loads_resolve_like_the_scaled_table() {
    let insn = decode(enc_regoff(0b00, 0, 0b10, 2, 0b010, 0, 1, 3)).unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Ldrsb);
    assert_eq!(insn.operands[0], Operand::Reg(Reg::new(RegFamily::X, 3)));

    let insn = decode(enc_regoff(0b10, 0, 0b10, 2, 0b010, 0, 1, 3)).unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Ldrsw);
    assert_eq!(insn.operands[0], Operand::Reg(Reg::new(RegFamily::X, 3)));
}

#[test]
fn prfm_register_form_is_unimplemented() {
    let word = enc_regoff(0b10, 0, 0b11, 2, 0b010, 0, 1, 0);
    assert_eq!(
        decode(word),
        Err(DecodeError::Unimplemented {
            word,
            kind: Category::Prefetch,
        })
    );
}

#[test]
fn unallocated_cells_are_undefined() {
    for (size, opc, v) in [(0b11u32, 0b10u32, 0u32), (0b01, 0b10, 1), (0b10, 0b11, 1)] {
        let word = enc_regoff(size, v, opc, 2, 0b010, 0, 1, 0);
        assert!(
            matches!(decode(word), Err(DecodeError::Undefined { .. })),
            "size={size} opc={opc} v={v}"
        );
    }
}
