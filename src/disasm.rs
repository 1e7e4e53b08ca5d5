use crate::decoder::{AddrMode, Instruction, MemOperand, Operand};

/// Render a decoded record in assembler syntax.
pub fn fmt_instruction(insn: &Instruction) -> String {
    let operands: Vec<String> = insn.operands.iter().filter_map(fmt_operand).collect();
    if operands.is_empty() {
        insn.mnemonic.as_str().to_string()
    } else {
        format!("{} {}", insn.mnemonic.as_str(), operands.join(", "))
    }
}

fn fmt_operand(op: &Operand) -> Option<String> {
    match op {
        Operand::None => None,
        Operand::Reg(r) => Some(r.to_string()),
        Operand::Imm(v) => Some(format!("#{v}")),
        Operand::Mem(m) => Some(fmt_mem(m)),
    }
}

fn fmt_mem(m: &MemOperand) -> String {
    match m.mode {
        AddrMode::PreIndex => format!("[{}, #{}]!", m.base, m.offset),
        AddrMode::PostIndex => format!("[{}], #{}", m.base, m.offset),
        AddrMode::Offset => {
            if let Some(index) = m.index {
                let mut text = format!("[{}, {}", m.base, index);
                if let Some(ext) = m.extend {
                    text.push_str(", ");
                    text.push_str(ext.as_str());
                    if m.amount != 0 {
                        text.push_str(&format!(" #{}", m.amount));
                    }
                } else if let Some(shift) = m.shift {
                    // LSL prints only with an explicit amount.
                    if m.amount != 0 {
                        text.push_str(&format!(", {} #{}", shift.as_str(), m.amount));
                    }
                }
                text.push(']');
                text
            } else if m.offset != 0 {
                format!("[{}, #{}]", m.base, m.offset)
            } else {
                format!("[{}]", m.base)
            }
        }
    }
}
