//! Dense per-prefix opcode tables.
//!
//! One 256-entry const array per prefix class. Each entry names the
//! semantic action family (selector bits are re-extracted from the
//! opcode inside the handler), the immediate the instruction consumes,
//! and whether a DD/FD prefix inserts a displacement byte. DD/FD
//! dispatch through MAIN with the index substitution applied by the
//! register accessors; DDCB/FDCB dispatch through CB with the
//! displacement interleaved before the final opcode.
//!
//! Entries marked Invalid reject at the recognizer: the prefix bytes in
//! their own opcode slots, and every ED opcode outside the documented
//! set (undocumented NEG/RETN/IM duplicates included).

/// Semantic action family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    // Unprefixed
    Nop,
    Halt,
    LdRR,
    LdRN,
    LdRrNn,
    LdABc,
    LdADe,
    LdBcA,
    LdDeA,
    LdANn,
    LdNnA,
    LdNnHl,
    LdHlNnInd,
    LdSpHl,
    IncR,
    DecR,
    IncRr,
    DecRr,
    AluR,
    AluN,
    AddHlRr,
    Rlca,
    Rrca,
    Rla,
    Rra,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jp,
    JpCc,
    Jr,
    JrCc,
    JpHl,
    Djnz,
    Call,
    CallCc,
    Ret,
    RetCc,
    Rst,
    PushRr,
    PopRr,
    ExAfAf,
    Exx,
    ExDeHl,
    ExSpHl,
    InAN,
    OutNA,
    Di,
    Ei,
    // CB
    Rot,
    Bit,
    Res,
    Set,
    // ED
    InRC,
    OutCR,
    SbcHlRr,
    AdcHlRr,
    LdNnRrEd,
    LdRrNnEd,
    Neg,
    RetN,
    RetI,
    Im,
    LdIA,
    LdRA,
    LdAI,
    LdAR,
    Rrd,
    Rld,
    Ldi,
    Cpi,
    Ini,
    Outi,
    Ldd,
    Cpd,
    Ind,
    Outd,
    Ldir,
    Cpir,
    Inir,
    Otir,
    Lddr,
    Cpdr,
    Indr,
    Otdr,
    // Unclassifiable opcode slot
    Invalid,
}

/// Trailing immediate the instruction consumes (after any displacement).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Imm {
    None,
    Byte,
    Word,
}

#[derive(Clone, Copy, Debug)]
pub struct OpEntry {
    pub action: Action,
    pub imm: Imm,
    /// True for opcodes addressing memory through (HL): under DD/FD a
    /// displacement byte is consumed for these (and only these).
    pub disp: bool,
}

const fn op(action: Action, imm: Imm) -> OpEntry {
    OpEntry {
        action,
        imm,
        disp: false,
    }
}

const fn opd(action: Action, imm: Imm) -> OpEntry {
    OpEntry {
        action,
        imm,
        disp: true,
    }
}

use Action as A;
use Imm as I;

const LD_R: OpEntry = op(A::LdRR, I::None);
const LD_M: OpEntry = opd(A::LdRR, I::None); // (HL) operand
const AL_R: OpEntry = op(A::AluR, I::None);
const AL_M: OpEntry = opd(A::AluR, I::None); // (HL) operand
const INV: OpEntry = op(A::Invalid, I::None);

/// Unprefixed opcodes (shared by DD/FD with the index substitution).
pub const MAIN: [OpEntry; 256] = [
    op(A::Nop, I::None),        // 0x00 NOP
    op(A::LdRrNn, I::Word),     // 0x01 LD BC, nn
    op(A::LdBcA, I::None),      // 0x02 LD (BC), A
    op(A::IncRr, I::None),      // 0x03 INC BC
    op(A::IncR, I::None),       // 0x04 INC B
    op(A::DecR, I::None),       // 0x05 DEC B
    op(A::LdRN, I::Byte),       // 0x06 LD B, n
    op(A::Rlca, I::None),       // 0x07 RLCA
    op(A::ExAfAf, I::None),     // 0x08 EX AF, AF'
    op(A::AddHlRr, I::None),    // 0x09 ADD HL, BC
    op(A::LdABc, I::None),      // 0x0A LD A, (BC)
    op(A::DecRr, I::None),      // 0x0B DEC BC
    op(A::IncR, I::None),       // 0x0C INC C
    op(A::DecR, I::None),       // 0x0D DEC C
    op(A::LdRN, I::Byte),       // 0x0E LD C, n
    op(A::Rrca, I::None),       // 0x0F RRCA
    op(A::Djnz, I::Byte),       // 0x10 DJNZ e
    op(A::LdRrNn, I::Word),     // 0x11 LD DE, nn
    op(A::LdDeA, I::None),      // 0x12 LD (DE), A
    op(A::IncRr, I::None),      // 0x13 INC DE
    op(A::IncR, I::None),       // 0x14 INC D
    op(A::DecR, I::None),       // 0x15 DEC D
    op(A::LdRN, I::Byte),       // 0x16 LD D, n
    op(A::Rla, I::None),        // 0x17 RLA
    op(A::Jr, I::Byte),         // 0x18 JR e
    op(A::AddHlRr, I::None),    // 0x19 ADD HL, DE
    op(A::LdADe, I::None),      // 0x1A LD A, (DE)
    op(A::DecRr, I::None),      // 0x1B DEC DE
    op(A::IncR, I::None),       // 0x1C INC E
    op(A::DecR, I::None),       // 0x1D DEC E
    op(A::LdRN, I::Byte),       // 0x1E LD E, n
    op(A::Rra, I::None),        // 0x1F RRA
    op(A::JrCc, I::Byte),       // 0x20 JR NZ, e
    op(A::LdRrNn, I::Word),     // 0x21 LD HL, nn
    op(A::LdNnHl, I::Word),     // 0x22 LD (nn), HL
    op(A::IncRr, I::None),      // 0x23 INC HL
    op(A::IncR, I::None),       // 0x24 INC H
    op(A::DecR, I::None),       // 0x25 DEC H
    op(A::LdRN, I::Byte),       // 0x26 LD H, n
    op(A::Daa, I::None),        // 0x27 DAA
    op(A::JrCc, I::Byte),       // 0x28 JR Z, e
    op(A::AddHlRr, I::None),    // 0x29 ADD HL, HL
    op(A::LdHlNnInd, I::Word),  // 0x2A LD HL, (nn)
    op(A::DecRr, I::None),      // 0x2B DEC HL
    op(A::IncR, I::None),       // 0x2C INC L
    op(A::DecR, I::None),       // 0x2D DEC L
    op(A::LdRN, I::Byte),       // 0x2E LD L, n
    op(A::Cpl, I::None),        // 0x2F CPL
    op(A::JrCc, I::Byte),       // 0x30 JR NC, e
    op(A::LdRrNn, I::Word),     // 0x31 LD SP, nn
    op(A::LdNnA, I::Word),      // 0x32 LD (nn), A
    op(A::IncRr, I::None),      // 0x33 INC SP
    opd(A::IncR, I::None),      // 0x34 INC (HL)
    opd(A::DecR, I::None),      // 0x35 DEC (HL)
    opd(A::LdRN, I::Byte),      // 0x36 LD (HL), n
    op(A::Scf, I::None),        // 0x37 SCF
    op(A::JrCc, I::Byte),       // 0x38 JR C, e
    op(A::AddHlRr, I::None),    // 0x39 ADD HL, SP
    op(A::LdANn, I::Word),      // 0x3A LD A, (nn)
    op(A::DecRr, I::None),      // 0x3B DEC SP
    op(A::IncR, I::None),       // 0x3C INC A
    op(A::DecR, I::None),       // 0x3D DEC A
    op(A::LdRN, I::Byte),       // 0x3E LD A, n
    op(A::Ccf, I::None),        // 0x3F CCF
    LD_R, LD_R, LD_R, LD_R, LD_R, LD_R, LD_M, LD_R, // 0x40 LD B, r
    LD_R, LD_R, LD_R, LD_R, LD_R, LD_R, LD_M, LD_R, // 0x48 LD C, r
    LD_R, LD_R, LD_R, LD_R, LD_R, LD_R, LD_M, LD_R, // 0x50 LD D, r
    LD_R, LD_R, LD_R, LD_R, LD_R, LD_R, LD_M, LD_R, // 0x58 LD E, r
    LD_R, LD_R, LD_R, LD_R, LD_R, LD_R, LD_M, LD_R, // 0x60 LD H, r
    LD_R, LD_R, LD_R, LD_R, LD_R, LD_R, LD_M, LD_R, // 0x68 LD L, r
    LD_M, LD_M, LD_M, LD_M, LD_M, LD_M,             // 0x70 LD (HL), r
    op(A::Halt, I::None),                           // 0x76 HALT
    LD_M,                                           // 0x77 LD (HL), A
    LD_R, LD_R, LD_R, LD_R, LD_R, LD_R, LD_M, LD_R, // 0x78 LD A, r
    AL_R, AL_R, AL_R, AL_R, AL_R, AL_R, AL_M, AL_R, // 0x80 ADD A, r
    AL_R, AL_R, AL_R, AL_R, AL_R, AL_R, AL_M, AL_R, // 0x88 ADC A, r
    AL_R, AL_R, AL_R, AL_R, AL_R, AL_R, AL_M, AL_R, // 0x90 SUB r
    AL_R, AL_R, AL_R, AL_R, AL_R, AL_R, AL_M, AL_R, // 0x98 SBC A, r
    AL_R, AL_R, AL_R, AL_R, AL_R, AL_R, AL_M, AL_R, // 0xA0 AND r
    AL_R, AL_R, AL_R, AL_R, AL_R, AL_R, AL_M, AL_R, // 0xA8 XOR r
    AL_R, AL_R, AL_R, AL_R, AL_R, AL_R, AL_M, AL_R, // 0xB0 OR r
    AL_R, AL_R, AL_R, AL_R, AL_R, AL_R, AL_M, AL_R, // 0xB8 CP r
    op(A::RetCc, I::None),      // 0xC0 RET NZ
    op(A::PopRr, I::None),      // 0xC1 POP BC
    op(A::JpCc, I::Word),       // 0xC2 JP NZ, nn
    op(A::Jp, I::Word),         // 0xC3 JP nn
    op(A::CallCc, I::Word),     // 0xC4 CALL NZ, nn
    op(A::PushRr, I::None),     // 0xC5 PUSH BC
    op(A::AluN, I::Byte),       // 0xC6 ADD A, n
    op(A::Rst, I::None),        // 0xC7 RST 00
    op(A::RetCc, I::None),      // 0xC8 RET Z
    op(A::Ret, I::None),        // 0xC9 RET
    op(A::JpCc, I::Word),       // 0xCA JP Z, nn
    INV,                        // 0xCB prefix, handled by the recognizer
    op(A::CallCc, I::Word),     // 0xCC CALL Z, nn
    op(A::Call, I::Word),       // 0xCD CALL nn
    op(A::AluN, I::Byte),       // 0xCE ADC A, n
    op(A::Rst, I::None),        // 0xCF RST 08
    op(A::RetCc, I::None),      // 0xD0 RET NC
    op(A::PopRr, I::None),      // 0xD1 POP DE
    op(A::JpCc, I::Word),       // 0xD2 JP NC, nn
    op(A::OutNA, I::Byte),      // 0xD3 OUT (n), A
    op(A::CallCc, I::Word),     // 0xD4 CALL NC, nn
    op(A::PushRr, I::None),     // 0xD5 PUSH DE
    op(A::AluN, I::Byte),       // 0xD6 SUB n
    op(A::Rst, I::None),        // 0xD7 RST 10
    op(A::RetCc, I::None),      // 0xD8 RET C
    op(A::Exx, I::None),        // 0xD9 EXX
    op(A::JpCc, I::Word),       // 0xDA JP C, nn
    op(A::InAN, I::Byte),       // 0xDB IN A, (n)
    op(A::CallCc, I::Word),     // 0xDC CALL C, nn
    INV,                        // 0xDD prefix, handled by the recognizer
    op(A::AluN, I::Byte),       // 0xDE SBC A, n
    op(A::Rst, I::None),        // 0xDF RST 18
    op(A::RetCc, I::None),      // 0xE0 RET PO
    op(A::PopRr, I::None),      // 0xE1 POP HL
    op(A::JpCc, I::Word),       // 0xE2 JP PO, nn
    op(A::ExSpHl, I::None),     // 0xE3 EX (SP), HL
    op(A::CallCc, I::Word),     // 0xE4 CALL PO, nn
    op(A::PushRr, I::None),     // 0xE5 PUSH HL
    op(A::AluN, I::Byte),       // 0xE6 AND n
    op(A::Rst, I::None),        // 0xE7 RST 20
    op(A::RetCc, I::None),      // 0xE8 RET PE
    op(A::JpHl, I::None),       // 0xE9 JP (HL)
    op(A::JpCc, I::Word),       // 0xEA JP PE, nn
    op(A::ExDeHl, I::None),     // 0xEB EX DE, HL
    op(A::CallCc, I::Word),     // 0xEC CALL PE, nn
    INV,                        // 0xED prefix, handled by the recognizer
    op(A::AluN, I::Byte),       // 0xEE XOR n
    op(A::Rst, I::None),        // 0xEF RST 28
    op(A::RetCc, I::None),      // 0xF0 RET P
    op(A::PopRr, I::None),      // 0xF1 POP AF
    op(A::JpCc, I::Word),       // 0xF2 JP P, nn
    op(A::Di, I::None),         // 0xF3 DI
    op(A::CallCc, I::Word),     // 0xF4 CALL P, nn
    op(A::PushRr, I::None),     // 0xF5 PUSH AF
    op(A::AluN, I::Byte),       // 0xF6 OR n
    op(A::Rst, I::None),        // 0xF7 RST 30
    op(A::RetCc, I::None),      // 0xF8 RET M
    op(A::LdSpHl, I::None),     // 0xF9 LD SP, HL
    op(A::JpCc, I::Word),       // 0xFA JP M, nn
    op(A::Ei, I::None),         // 0xFB EI
    op(A::CallCc, I::Word),     // 0xFC CALL M, nn
    INV,                        // 0xFD prefix, handled by the recognizer
    op(A::AluN, I::Byte),       // 0xFE CP n
    op(A::Rst, I::None),        // 0xFF RST 38
];

const ROT: OpEntry = op(A::Rot, I::None);
const BIT: OpEntry = op(A::Bit, I::None);
const RES: OpEntry = op(A::Res, I::None);
const SET: OpEntry = op(A::Set, I::None);

/// CB-prefixed opcodes (shared by DDCB/FDCB, displacement interleaved).
/// Fully regular: quadrant picks the family, bits 5-3 the rotate kind
/// or bit number, bits 2-0 the operand.
pub const CB: [OpEntry; 256] = [
    ROT, ROT, ROT, ROT, ROT, ROT, ROT, ROT, // 0x00 RLC r
    ROT, ROT, ROT, ROT, ROT, ROT, ROT, ROT, // 0x08 RRC r
    ROT, ROT, ROT, ROT, ROT, ROT, ROT, ROT, // 0x10 RL r
    ROT, ROT, ROT, ROT, ROT, ROT, ROT, ROT, // 0x18 RR r
    ROT, ROT, ROT, ROT, ROT, ROT, ROT, ROT, // 0x20 SLA r
    ROT, ROT, ROT, ROT, ROT, ROT, ROT, ROT, // 0x28 SRA r
    ROT, ROT, ROT, ROT, ROT, ROT, ROT, ROT, // 0x30 SLL r
    ROT, ROT, ROT, ROT, ROT, ROT, ROT, ROT, // 0x38 SRL r
    BIT, BIT, BIT, BIT, BIT, BIT, BIT, BIT, // 0x40 BIT 0, r
    BIT, BIT, BIT, BIT, BIT, BIT, BIT, BIT, // 0x48 BIT 1, r
    BIT, BIT, BIT, BIT, BIT, BIT, BIT, BIT, // 0x50 BIT 2, r
    BIT, BIT, BIT, BIT, BIT, BIT, BIT, BIT, // 0x58 BIT 3, r
    BIT, BIT, BIT, BIT, BIT, BIT, BIT, BIT, // 0x60 BIT 4, r
    BIT, BIT, BIT, BIT, BIT, BIT, BIT, BIT, // 0x68 BIT 5, r
    BIT, BIT, BIT, BIT, BIT, BIT, BIT, BIT, // 0x70 BIT 6, r
    BIT, BIT, BIT, BIT, BIT, BIT, BIT, BIT, // 0x78 BIT 7, r
    RES, RES, RES, RES, RES, RES, RES, RES, // 0x80 RES 0, r
    RES, RES, RES, RES, RES, RES, RES, RES, // 0x88 RES 1, r
    RES, RES, RES, RES, RES, RES, RES, RES, // 0x90 RES 2, r
    RES, RES, RES, RES, RES, RES, RES, RES, // 0x98 RES 3, r
    RES, RES, RES, RES, RES, RES, RES, RES, // 0xA0 RES 4, r
    RES, RES, RES, RES, RES, RES, RES, RES, // 0xA8 RES 5, r
    RES, RES, RES, RES, RES, RES, RES, RES, // 0xB0 RES 6, r
    RES, RES, RES, RES, RES, RES, RES, RES, // 0xB8 RES 7, r
    SET, SET, SET, SET, SET, SET, SET, SET, // 0xC0 SET 0, r
    SET, SET, SET, SET, SET, SET, SET, SET, // 0xC8 SET 1, r
    SET, SET, SET, SET, SET, SET, SET, SET, // 0xD0 SET 2, r
    SET, SET, SET, SET, SET, SET, SET, SET, // 0xD8 SET 3, r
    SET, SET, SET, SET, SET, SET, SET, SET, // 0xE0 SET 4, r
    SET, SET, SET, SET, SET, SET, SET, SET, // 0xE8 SET 5, r
    SET, SET, SET, SET, SET, SET, SET, SET, // 0xF0 SET 6, r
    SET, SET, SET, SET, SET, SET, SET, SET, // 0xF8 SET 7, r
];

/// ED-prefixed opcodes. Only the documented set (plus the flag-only
/// IN (C) / OUT (C), 0 pair) classifies; everything else rejects.
pub const ED: [OpEntry; 256] = [
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x00
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x08
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x10
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x18
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x20
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x28
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x30
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x38
    op(A::InRC, I::None),       // 0x40 IN B, (C)
    op(A::OutCR, I::None),      // 0x41 OUT (C), B
    op(A::SbcHlRr, I::None),    // 0x42 SBC HL, BC
    op(A::LdNnRrEd, I::Word),   // 0x43 LD (nn), BC
    op(A::Neg, I::None),        // 0x44 NEG
    op(A::RetN, I::None),       // 0x45 RETN
    op(A::Im, I::None),         // 0x46 IM 0
    op(A::LdIA, I::None),       // 0x47 LD I, A
    op(A::InRC, I::None),       // 0x48 IN C, (C)
    op(A::OutCR, I::None),      // 0x49 OUT (C), C
    op(A::AdcHlRr, I::None),    // 0x4A ADC HL, BC
    op(A::LdRrNnEd, I::Word),   // 0x4B LD BC, (nn)
    INV,                        // 0x4C NEG duplicate
    op(A::RetI, I::None),       // 0x4D RETI
    INV,                        // 0x4E IM duplicate
    op(A::LdRA, I::None),       // 0x4F LD R, A
    op(A::InRC, I::None),       // 0x50 IN D, (C)
    op(A::OutCR, I::None),      // 0x51 OUT (C), D
    op(A::SbcHlRr, I::None),    // 0x52 SBC HL, DE
    op(A::LdNnRrEd, I::Word),   // 0x53 LD (nn), DE
    INV,                        // 0x54 NEG duplicate
    INV,                        // 0x55 RETN duplicate
    op(A::Im, I::None),         // 0x56 IM 1
    op(A::LdAI, I::None),       // 0x57 LD A, I
    op(A::InRC, I::None),       // 0x58 IN E, (C)
    op(A::OutCR, I::None),      // 0x59 OUT (C), E
    op(A::AdcHlRr, I::None),    // 0x5A ADC HL, DE
    op(A::LdRrNnEd, I::Word),   // 0x5B LD DE, (nn)
    INV,                        // 0x5C NEG duplicate
    INV,                        // 0x5D RETN duplicate
    op(A::Im, I::None),         // 0x5E IM 2
    op(A::LdAR, I::None),       // 0x5F LD A, R
    op(A::InRC, I::None),       // 0x60 IN H, (C)
    op(A::OutCR, I::None),      // 0x61 OUT (C), H
    op(A::SbcHlRr, I::None),    // 0x62 SBC HL, HL
    op(A::LdNnRrEd, I::Word),   // 0x63 LD (nn), HL
    INV,                        // 0x64 NEG duplicate
    INV,                        // 0x65 RETN duplicate
    INV,                        // 0x66 IM duplicate
    op(A::Rrd, I::None),        // 0x67 RRD
    op(A::InRC, I::None),       // 0x68 IN L, (C)
    op(A::OutCR, I::None),      // 0x69 OUT (C), L
    op(A::AdcHlRr, I::None),    // 0x6A ADC HL, HL
    op(A::LdRrNnEd, I::Word),   // 0x6B LD HL, (nn)
    INV,                        // 0x6C NEG duplicate
    INV,                        // 0x6D RETN duplicate
    INV,                        // 0x6E IM duplicate
    op(A::Rld, I::None),        // 0x6F RLD
    op(A::InRC, I::None),       // 0x70 IN (C), flags only
    op(A::OutCR, I::None),      // 0x71 OUT (C), 0
    op(A::SbcHlRr, I::None),    // 0x72 SBC HL, SP
    op(A::LdNnRrEd, I::Word),   // 0x73 LD (nn), SP
    INV,                        // 0x74 NEG duplicate
    INV,                        // 0x75 RETN duplicate
    INV,                        // 0x76 IM duplicate
    INV,                        // 0x77
    op(A::InRC, I::None),       // 0x78 IN A, (C)
    op(A::OutCR, I::None),      // 0x79 OUT (C), A
    op(A::AdcHlRr, I::None),    // 0x7A ADC HL, SP
    op(A::LdRrNnEd, I::Word),   // 0x7B LD SP, (nn)
    INV,                        // 0x7C NEG duplicate
    INV,                        // 0x7D RETN duplicate
    INV,                        // 0x7E IM duplicate
    INV,                        // 0x7F
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x80
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x88
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x90
    INV, INV, INV, INV, INV, INV, INV, INV, // 0x98
    op(A::Ldi, I::None),        // 0xA0 LDI
    op(A::Cpi, I::None),        // 0xA1 CPI
    op(A::Ini, I::None),        // 0xA2 INI
    op(A::Outi, I::None),       // 0xA3 OUTI
    INV, INV, INV, INV,         // 0xA4
    op(A::Ldd, I::None),        // 0xA8 LDD
    op(A::Cpd, I::None),        // 0xA9 CPD
    op(A::Ind, I::None),        // 0xAA IND
    op(A::Outd, I::None),       // 0xAB OUTD
    INV, INV, INV, INV,         // 0xAC
    op(A::Ldir, I::None),       // 0xB0 LDIR
    op(A::Cpir, I::None),       // 0xB1 CPIR
    op(A::Inir, I::None),       // 0xB2 INIR
    op(A::Otir, I::None),       // 0xB3 OTIR
    INV, INV, INV, INV,         // 0xB4
    op(A::Lddr, I::None),       // 0xB8 LDDR
    op(A::Cpdr, I::None),       // 0xB9 CPDR
    op(A::Indr, I::None),       // 0xBA INDR
    op(A::Otdr, I::None),       // 0xBB OTDR
    INV, INV, INV, INV,         // 0xBC
    INV, INV, INV, INV, INV, INV, INV, INV, // 0xC0
    INV, INV, INV, INV, INV, INV, INV, INV, // 0xC8
    INV, INV, INV, INV, INV, INV, INV, INV, // 0xD0
    INV, INV, INV, INV, INV, INV, INV, INV, // 0xD8
    INV, INV, INV, INV, INV, INV, INV, INV, // 0xE0
    INV, INV, INV, INV, INV, INV, INV, INV, // 0xE8
    INV, INV, INV, INV, INV, INV, INV, INV, // 0xF0
    INV, INV, INV, INV, INV, INV, INV, INV, // 0xF8
];
