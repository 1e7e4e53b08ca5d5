use aarch64_rs::isa::a64::decode;
use aarch64_rs::{Category, DecodeError, Mnemonic, Operand, Reg, RegFamily};

fn enc_unscaled(size: u32, v: u32, opc: u32, imm9: u32, rn: u32, rt: u32) -> u32 {
    (size << 30) | (0b111 << 27) | (v << 26) | (opc << 22) | (imm9 << 12) | (rn << 5) | rt
}

#[test]
fn stur_negative_offset() {
    // STUR W0, [X1, #-8]
    let insn = decode(0xB81F_8020).unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Stur);
    assert_eq!(insn.operands[0], Operand::Reg(Reg::new(RegFamily::W, 0)));
    let mem = insn.mem().unwrap();
    assert_eq!(mem.base, Reg::new(RegFamily::X, 1));
    assert_eq!(mem.offset, -8);
    assert!(!insn.is_pre_indexed());
}

#[test]
fn imm9_is_sign_extended_and_unscaled() {
    // Highest bit set: -256 regardless of access size.
    for size in 0..4u32 {
        let insn = decode(enc_unscaled(size, 0, 0b01, 0x100, 1, 0)).unwrap();
        assert_eq!(insn.mem().unwrap().offset, -256, "size={size}");
    }
    // Positive immediate is taken verbatim.
    let insn = decode(enc_unscaled(0b11, 0, 0b01, 4, 1, 0)).unwrap();
    assert_eq!(insn.mem().unwrap().offset, 4);
}

#[test]
fn unscaled_mnemonic_variants() {
    let cases = [
        (0b00u32, 0b00u32, 0u32, Mnemonic::Sturb, RegFamily::W),
        (0b00, 0b01, 0, Mnemonic::Ldurb, RegFamily::W),
        (0b01, 0b00, 0, Mnemonic::Sturh, RegFamily::W),
        (0b01, 0b01, 0, Mnemonic::Ldurh, RegFamily::W),
        (0b10, 0b00, 0, Mnemonic::Stur, RegFamily::W),
        (0b11, 0b01, 0, Mnemonic::Ldur, RegFamily::X),
        (0b00, 0b10, 0, Mnemonic::Ldursb, RegFamily::X),
        (0b00, 0b11, 0, Mnemonic::Ldursb, RegFamily::W),
        (0b01, 0b10, 0, Mnemonic::Ldursh, RegFamily::X),
        (0b01, 0b11, 0, Mnemonic::Ldursh, RegFamily::W),
        (0b10, 0b10, 0, Mnemonic::Ldursw, RegFamily::X),
        (0b11, 0b00, 1, Mnemonic::Stur, RegFamily::D),
        (0b00, 0b11, 1, Mnemonic::Ldur, RegFamily::V),
    ];
    for (size, opc, v, mnemonic, family) in cases {
        let insn = decode(enc_unscaled(size, v, opc, 0, 1, 7)).unwrap();
        assert_eq!(insn.mnemonic, mnemonic, "size={size} opc={opc} v={v}");
        assert_eq!(
            insn.operands[0],
            Operand::Reg(Reg::new(family, 7)),
            "size={size} opc={opc} v={v}"
        );
    }
}

#[test]
fn vector_signed_rows_are_undefined() {
    // opc = 10 with V set only allocates the 128-bit size-00 store.
    for size in [0b01u32, 0b10, 0b11] {
        let word = enc_unscaled(size, 1, 0b10, 0, 1, 0);
        assert!(
            matches!(decode(word), Err(DecodeError::Undefined { .. })),
            "size={size}"
        );
    }
}

#[test]
fn remaining_holes_are_undefined() {
    for (size, opc, v) in [
        (0b01u32, 0b11u32, 1u32),
        (0b10, 0b11, 1),
        (0b11, 0b11, 0),
        (0b11, 0b11, 1),
        (0b11, 0b10, 0),
        (0b11, 0b10, 1),
    ] {
        let word = enc_unscaled(size, v, opc, 0, 1, 0);
        assert!(
            matches!(decode(word), Err(DecodeError::Undefined { .. })),
            "size={size} opc={opc} v={v}"
        );
    }
}

#[test]
fn prfum_is_unimplemented() {
    let word = enc_unscaled(0b10, 0, 0b11, 0, 1, 0);
    assert_eq!(
        decode(word),
        Err(DecodeError::Unimplemented {
            word,
            kind: Category::Prefetch,
        })
    );
}
