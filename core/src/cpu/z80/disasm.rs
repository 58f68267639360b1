//! Instruction printer for the execution trace.
//!
//! Piggybacks on the recognizer so the printed form always agrees with
//! what the core will execute. Reads go through the caller's closure
//! and never disturb CPU state.

use crate::cpu::z80::decode::{self, Decoded, Prefix};
use crate::cpu::z80::tables::{self, Action};

const R_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
const ALU_NAMES: [&str; 8] = ["ADD A,", "ADC A,", "SUB", "SBC A,", "AND", "XOR", "OR", "CP"];
const CC_NAMES: [&str; 8] = ["NZ", "Z", "NC", "C", "PO", "PE", "P", "M"];
const ROT_NAMES: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SLL", "SRL"];

/// Render the instruction at `pc`. Returns the text and the number of
/// bytes it occupies; unclassifiable bytes render as `??`.
pub fn disassemble(pc: u16, mut read: impl FnMut(u16) -> u8) -> (String, u16) {
    let mut cursor = pc;
    let decoded = decode::decode(|| {
        let byte = read(cursor);
        cursor = cursor.wrapping_add(1);
        byte
    });
    let len = cursor.wrapping_sub(pc);
    let text = match decoded {
        Ok(ins) => format_ins(&ins, pc.wrapping_add(len)),
        Err(_) => "??".to_string(),
    };
    (text, len)
}

fn hl_name(prefix: Prefix) -> &'static str {
    match prefix {
        Prefix::Dd | Prefix::DdCb => "IX",
        Prefix::Fd | Prefix::FdCb => "IY",
        _ => "HL",
    }
}

/// The (HL) operand, spelled with its displacement under a prefix.
fn mem_name(prefix: Prefix, disp: Option<i8>) -> String {
    let base = hl_name(prefix);
    match (base, disp) {
        ("HL", _) => "(HL)".to_string(),
        (_, Some(d)) if d < 0 => format!("({}{})", base, d),
        (_, d) => format!("({}+{})", base, d.unwrap_or(0)),
    }
}

/// Register name with the index-half substitution for H and L.
fn reg8_ix_name(prefix: Prefix, r: u8) -> &'static str {
    match (prefix, r) {
        (Prefix::Dd, 4) => "IXH",
        (Prefix::Dd, 5) => "IXL",
        (Prefix::Fd, 4) => "IYH",
        (Prefix::Fd, 5) => "IYL",
        _ => R_NAMES[r as usize],
    }
}

fn pair_name(prefix: Prefix, rp: u8, af: bool) -> &'static str {
    match rp {
        0 => "BC",
        1 => "DE",
        2 => hl_name(prefix),
        _ if af => "AF",
        _ => "SP",
    }
}

fn format_ins(ins: &Decoded, next: u16) -> String {
    match ins.prefix {
        Prefix::Cb | Prefix::DdCb | Prefix::FdCb => format_cb(ins),
        Prefix::Ed => format_ed(ins),
        Prefix::None | Prefix::Dd | Prefix::Fd => format_main(ins, next),
    }
}

fn format_main(ins: &Decoded, next: u16) -> String {
    let op = ins.opcode;
    let prefix = ins.prefix;
    let dst = (op >> 3) & 0x07;
    let src = op & 0x07;
    let rp = (op >> 4) & 0x03;
    let mem = || mem_name(prefix, ins.disp);

    match tables::MAIN[op as usize].action {
        Action::Nop => "NOP".to_string(),
        Action::Halt => "HALT".to_string(),

        Action::LdRR if src == 6 => format!("LD {}, {}", R_NAMES[dst as usize], mem()),
        Action::LdRR if dst == 6 => format!("LD {}, {}", mem(), R_NAMES[src as usize]),
        Action::LdRR => format!(
            "LD {}, {}",
            reg8_ix_name(prefix, dst),
            reg8_ix_name(prefix, src)
        ),
        Action::LdRN if dst == 6 => format!("LD {}, {:#04X}", mem(), ins.imm.byte()),
        Action::LdRN => format!("LD {}, {:#04X}", reg8_ix_name(prefix, dst), ins.imm.byte()),
        Action::LdRrNn => format!("LD {}, {:#06X}", pair_name(prefix, rp, false), ins.imm.word()),
        Action::LdABc => "LD A, (BC)".to_string(),
        Action::LdADe => "LD A, (DE)".to_string(),
        Action::LdBcA => "LD (BC), A".to_string(),
        Action::LdDeA => "LD (DE), A".to_string(),
        Action::LdANn => format!("LD A, ({:#06X})", ins.imm.word()),
        Action::LdNnA => format!("LD ({:#06X}), A", ins.imm.word()),
        Action::LdNnHl => format!("LD ({:#06X}), {}", ins.imm.word(), hl_name(prefix)),
        Action::LdHlNnInd => format!("LD {}, ({:#06X})", hl_name(prefix), ins.imm.word()),
        Action::LdSpHl => format!("LD SP, {}", hl_name(prefix)),

        Action::IncR if dst == 6 => format!("INC {}", mem()),
        Action::IncR => format!("INC {}", reg8_ix_name(prefix, dst)),
        Action::DecR if dst == 6 => format!("DEC {}", mem()),
        Action::DecR => format!("DEC {}", reg8_ix_name(prefix, dst)),
        Action::IncRr => format!("INC {}", pair_name(prefix, rp, false)),
        Action::DecRr => format!("DEC {}", pair_name(prefix, rp, false)),

        Action::AluR if src == 6 => format!("{} {}", ALU_NAMES[dst as usize], mem()),
        Action::AluR => format!("{} {}", ALU_NAMES[dst as usize], reg8_ix_name(prefix, src)),
        Action::AluN => format!("{} {:#04X}", ALU_NAMES[dst as usize], ins.imm.byte()),
        Action::AddHlRr => format!("ADD {}, {}", hl_name(prefix), pair_name(prefix, rp, false)),

        Action::Rlca => "RLCA".to_string(),
        Action::Rrca => "RRCA".to_string(),
        Action::Rla => "RLA".to_string(),
        Action::Rra => "RRA".to_string(),
        Action::Daa => "DAA".to_string(),
        Action::Cpl => "CPL".to_string(),
        Action::Scf => "SCF".to_string(),
        Action::Ccf => "CCF".to_string(),

        Action::Jp => format!("JP {:#06X}", ins.imm.word()),
        Action::JpCc => format!("JP {}, {:#06X}", CC_NAMES[dst as usize], ins.imm.word()),
        Action::Jr => format!("JR {:#06X}", rel_target(next, ins.imm.byte())),
        Action::JrCc => format!(
            "JR {}, {:#06X}",
            CC_NAMES[(dst & 0x03) as usize],
            rel_target(next, ins.imm.byte())
        ),
        Action::JpHl => format!("JP ({})", hl_name(prefix)),
        Action::Djnz => format!("DJNZ {:#06X}", rel_target(next, ins.imm.byte())),
        Action::Call => format!("CALL {:#06X}", ins.imm.word()),
        Action::CallCc => format!("CALL {}, {:#06X}", CC_NAMES[dst as usize], ins.imm.word()),
        Action::Ret => "RET".to_string(),
        Action::RetCc => format!("RET {}", CC_NAMES[dst as usize]),
        Action::Rst => format!("RST {:#04X}", op & 0x38),

        Action::PushRr => format!("PUSH {}", pair_name(prefix, rp, true)),
        Action::PopRr => format!("POP {}", pair_name(prefix, rp, true)),

        Action::ExAfAf => "EX AF, AF'".to_string(),
        Action::Exx => "EXX".to_string(),
        Action::ExDeHl => "EX DE, HL".to_string(),
        Action::ExSpHl => format!("EX (SP), {}", hl_name(prefix)),

        Action::InAN => format!("IN A, ({:#04X})", ins.imm.byte()),
        Action::OutNA => format!("OUT ({:#04X}), A", ins.imm.byte()),
        Action::Di => "DI".to_string(),
        Action::Ei => "EI".to_string(),

        other => unreachable!("action {:?} in unprefixed disassembly", other),
    }
}

fn format_cb(ins: &Decoded) -> String {
    let op = ins.opcode;
    let quadrant = op >> 6;
    let y = (op >> 3) & 0x07;
    let z = op & 0x07;
    let indexed = ins.prefix != Prefix::Cb;
    let mem = || mem_name(ins.prefix, ins.disp);

    // Operand spelling: the indexed forms always address memory, and the
    // writing families name the copy register after it when z != 6.
    let operand = if !indexed {
        R_NAMES[z as usize].to_string()
    } else if quadrant != 1 && z != 6 {
        format!("{}, {}", mem(), R_NAMES[z as usize])
    } else {
        mem()
    };

    match quadrant {
        0 => format!("{} {}", ROT_NAMES[y as usize], operand),
        1 => format!("BIT {}, {}", y, if indexed { mem() } else { operand }),
        2 => format!("RES {}, {}", y, operand),
        _ => format!("SET {}, {}", y, operand),
    }
}

fn format_ed(ins: &Decoded) -> String {
    let op = ins.opcode;
    let r = (op >> 3) & 0x07;
    let rp = (op >> 4) & 0x03;

    match tables::ED[op as usize].action {
        Action::InRC if r == 6 => "IN (C)".to_string(),
        Action::InRC => format!("IN {}, (C)", R_NAMES[r as usize]),
        Action::OutCR if r == 6 => "OUT (C), 0".to_string(),
        Action::OutCR => format!("OUT (C), {}", R_NAMES[r as usize]),
        Action::SbcHlRr => format!("SBC HL, {}", pair_name(Prefix::Ed, rp, false)),
        Action::AdcHlRr => format!("ADC HL, {}", pair_name(Prefix::Ed, rp, false)),
        Action::LdNnRrEd => format!(
            "LD ({:#06X}), {}",
            ins.imm.word(),
            pair_name(Prefix::Ed, rp, false)
        ),
        Action::LdRrNnEd => format!(
            "LD {}, ({:#06X})",
            pair_name(Prefix::Ed, rp, false),
            ins.imm.word()
        ),
        Action::Neg => "NEG".to_string(),
        Action::RetN => "RETN".to_string(),
        Action::RetI => "RETI".to_string(),
        Action::Im => format!("IM {}", match r {
            0 => 0,
            2 => 1,
            _ => 2,
        }),
        Action::LdIA => "LD I, A".to_string(),
        Action::LdRA => "LD R, A".to_string(),
        Action::LdAI => "LD A, I".to_string(),
        Action::LdAR => "LD A, R".to_string(),
        Action::Rrd => "RRD".to_string(),
        Action::Rld => "RLD".to_string(),

        Action::Ldi => "LDI".to_string(),
        Action::Cpi => "CPI".to_string(),
        Action::Ini => "INI".to_string(),
        Action::Outi => "OUTI".to_string(),
        Action::Ldd => "LDD".to_string(),
        Action::Cpd => "CPD".to_string(),
        Action::Ind => "IND".to_string(),
        Action::Outd => "OUTD".to_string(),
        Action::Ldir => "LDIR".to_string(),
        Action::Cpir => "CPIR".to_string(),
        Action::Inir => "INIR".to_string(),
        Action::Otir => "OTIR".to_string(),
        Action::Lddr => "LDDR".to_string(),
        Action::Cpdr => "CPDR".to_string(),
        Action::Indr => "INDR".to_string(),
        Action::Otdr => "OTDR".to_string(),

        other => unreachable!("action {:?} in ED disassembly", other),
    }
}

fn rel_target(next: u16, e: u8) -> u16 {
    next.wrapping_add(e as i8 as i16 as u16)
}
