//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 operations, organized by
//! category. Each operation is a standalone function that receives the CPU, the
//! already-resolved operand, the cycle budget and the memory bus.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::{Cycles, MemoryBus, Operand, Operation, CPU};

/// Applies `operation` to a resolved operand.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU,
    operation: Operation,
    operand: Operand,
    cycles: &mut Cycles,
    memory: &mut M,
) {
    match operation {
        Operation::Lda => load_store::execute_lda(cpu, operand, cycles, memory),
        Operation::Ldx => load_store::execute_ldx(cpu, operand, cycles, memory),
        Operation::Ldy => load_store::execute_ldy(cpu, operand, cycles, memory),
        Operation::Sta => load_store::execute_sta(cpu, operand, cycles, memory),
        Operation::Stx => load_store::execute_stx(cpu, operand, cycles, memory),
        Operation::Sty => load_store::execute_sty(cpu, operand, cycles, memory),

        Operation::Adc => alu::execute_adc(cpu, operand, cycles, memory),
        Operation::Sbc => alu::execute_sbc(cpu, operand, cycles, memory),
        Operation::And => alu::execute_and(cpu, operand, cycles, memory),
        Operation::Ora => alu::execute_ora(cpu, operand, cycles, memory),
        Operation::Eor => alu::execute_eor(cpu, operand, cycles, memory),
        Operation::Cmp => alu::execute_cmp(cpu, operand, cycles, memory),
        Operation::Cpx => alu::execute_cpx(cpu, operand, cycles, memory),
        Operation::Cpy => alu::execute_cpy(cpu, operand, cycles, memory),
        Operation::Bit => alu::execute_bit(cpu, operand, cycles, memory),

        Operation::Asl => shifts::execute_asl(cpu, operand, cycles, memory),
        Operation::Lsr => shifts::execute_lsr(cpu, operand, cycles, memory),
        Operation::Rol => shifts::execute_rol(cpu, operand, cycles, memory),
        Operation::Ror => shifts::execute_ror(cpu, operand, cycles, memory),

        Operation::Inc => inc_dec::execute_inc(cpu, operand, cycles, memory),
        Operation::Dec => inc_dec::execute_dec(cpu, operand, cycles, memory),
        Operation::Inx => inc_dec::execute_inx(cpu, cycles),
        Operation::Iny => inc_dec::execute_iny(cpu, cycles),
        Operation::Dex => inc_dec::execute_dex(cpu, cycles),
        Operation::Dey => inc_dec::execute_dey(cpu, cycles),

        Operation::Bcc => branches::branch_if(!cpu.flag_c, cpu, operand, cycles),
        Operation::Bcs => branches::branch_if(cpu.flag_c, cpu, operand, cycles),
        Operation::Beq => branches::branch_if(cpu.flag_z, cpu, operand, cycles),
        Operation::Bne => branches::branch_if(!cpu.flag_z, cpu, operand, cycles),
        Operation::Bmi => branches::branch_if(cpu.flag_n, cpu, operand, cycles),
        Operation::Bpl => branches::branch_if(!cpu.flag_n, cpu, operand, cycles),
        Operation::Bvc => branches::branch_if(!cpu.flag_v, cpu, operand, cycles),
        Operation::Bvs => branches::branch_if(cpu.flag_v, cpu, operand, cycles),

        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Jsr => control::execute_jsr(cpu, operand, cycles, memory),
        Operation::Rts => control::execute_rts(cpu, cycles, memory),
        Operation::Rti => control::execute_rti(cpu, cycles, memory),
        Operation::Brk => control::execute_brk(cpu, cycles, memory),
        Operation::Nop => control::execute_nop(cycles),

        Operation::Pha => stack::execute_pha(cpu, cycles, memory),
        Operation::Php => stack::execute_php(cpu, cycles, memory),
        Operation::Pla => stack::execute_pla(cpu, cycles, memory),
        Operation::Plp => stack::execute_plp(cpu, cycles, memory),

        Operation::Clc => flags::execute_clc(cpu, cycles),
        Operation::Sec => flags::execute_sec(cpu, cycles),
        Operation::Cli => flags::execute_cli(cpu, cycles),
        Operation::Sei => flags::execute_sei(cpu, cycles),
        Operation::Cld => flags::execute_cld(cpu, cycles),
        Operation::Sed => flags::execute_sed(cpu, cycles),
        Operation::Clv => flags::execute_clv(cpu, cycles),

        Operation::Tax => transfer::execute_tax(cpu, cycles),
        Operation::Tay => transfer::execute_tay(cpu, cycles),
        Operation::Txa => transfer::execute_txa(cpu, cycles),
        Operation::Tya => transfer::execute_tya(cpu, cycles),
        Operation::Tsx => transfer::execute_tsx(cpu, cycles),
        Operation::Txs => transfer::execute_txs(cpu, cycles),
    }
}

/// Address of a memory operand. The opcode table only pairs memory
/// operations with modes that resolve to an address.
fn effective_address(operand: Operand) -> u16 {
    match operand {
        Operand::Address(addr) => addr,
        other => unreachable!("expected a memory operand, got {:?}", other),
    }
}
