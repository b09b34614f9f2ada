//! Tests for the opcode table and its agreement with the engine's cycle
//! accounting.

use emu6502::{AddressingMode, Cycles, ExecutionError, Memory, MemoryBus, Operation, CPU, OPCODE_TABLE};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> (CPU, Memory) {
    let mut memory = Memory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new();
    cpu.reset_from_vector(&memory);
    (cpu, memory)
}

fn documented_opcodes() -> Vec<u8> {
    (0..=255u8)
        .filter(|&op| OPCODE_TABLE[op as usize].operation.is_some())
        .collect()
}

#[test]
fn test_documented_opcode_count() {
    assert_eq!(documented_opcodes().len(), 151);
}

#[test]
fn test_size_matches_addressing_mode() {
    for opcode in documented_opcodes() {
        let metadata = &OPCODE_TABLE[opcode as usize];
        assert_eq!(
            metadata.size_bytes,
            1 + metadata.addressing_mode.operand_bytes(),
            "size mismatch for opcode 0x{:02X} ({})",
            opcode,
            metadata.mnemonic()
        );
    }
}

#[test]
fn test_known_entries() {
    let lda = &OPCODE_TABLE[0xA9];
    assert_eq!(lda.operation, Some(Operation::Lda));
    assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
    assert_eq!(lda.base_cycles, 2);
    assert_eq!(lda.mnemonic(), "LDA");

    let jsr = &OPCODE_TABLE[0x20];
    assert_eq!(jsr.operation, Some(Operation::Jsr));
    assert_eq!(jsr.addressing_mode, AddressingMode::Absolute);
    assert_eq!(jsr.base_cycles, 6);

    let jmp_ind = &OPCODE_TABLE[0x6C];
    assert_eq!(jmp_ind.addressing_mode, AddressingMode::Indirect);
    assert_eq!(jmp_ind.base_cycles, 5);

    assert_eq!(OPCODE_TABLE[0x02].operation, None);
    assert_eq!(OPCODE_TABLE[0x02].mnemonic(), "???");
}

/// Makes the branch at `opcode` fall through.
fn block_branch(cpu: &mut CPU, operation: Operation) {
    match operation {
        Operation::Bcc => cpu.set_flag_c(true),
        Operation::Bne => cpu.set_flag_z(true),
        Operation::Bpl => cpu.set_flag_n(true),
        Operation::Bvc => cpu.set_flag_v(true),
        // BCS, BEQ, BMI, BVS fall through with cleared flags
        _ => {}
    }
}

#[test]
fn test_engine_cycles_match_table_without_penalties() {
    for opcode in documented_opcodes() {
        let metadata = &OPCODE_TABLE[opcode as usize];
        let Some(operation) = metadata.operation else {
            continue;
        };

        let (mut cpu, mut memory) = setup_cpu();
        // Operand bytes pick 0x2010 / zero page 0x10; X and Y are zero, so
        // nothing crosses a page
        memory.load(0x8000, &[opcode, 0x10, 0x20]);
        block_branch(&mut cpu, operation);

        let mut cycles = Cycles::new(1);
        cpu.step(&mut cycles, &mut memory).unwrap();

        assert_eq!(
            cycles.consumed(),
            metadata.base_cycles as i64,
            "cycle mismatch for opcode 0x{:02X} ({} {:?})",
            opcode,
            metadata.mnemonic(),
            metadata.addressing_mode
        );
    }
}

#[test]
fn test_every_undocumented_opcode_is_reported() {
    for opcode in 0..=255u8 {
        if OPCODE_TABLE[opcode as usize].operation.is_some() {
            continue;
        }

        let (mut cpu, mut memory) = setup_cpu();
        memory.write(0x8000, opcode);
        let mut cycles = Cycles::new(1);

        assert_eq!(
            cpu.step(&mut cycles, &mut memory),
            Err(ExecutionError::UnknownOpcode {
                opcode,
                address: 0x8000
            })
        );
        assert_eq!(cycles.consumed(), 1);
        assert_eq!(cpu.pc(), 0x8001);
    }
}

#[test]
fn test_unknown_opcode_error_message() {
    let err = ExecutionError::UnknownOpcode {
        opcode: 0xFF,
        address: 0x1234,
    };

    assert_eq!(
        err.to_string(),
        "Instruction not handled: opcode 0xFF at 0x1234"
    );
}
