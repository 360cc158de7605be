//! Tests for JMP and the conditional jumps.
//!
//! A taken jump loads PC from the operand slot. A jump that is not taken
//! steps over the operand and falls through.

use lib8vm::{BufferedDevice, Processor, ProcessorConfig};

fn setup_cpu(program: &[u8]) -> Processor<BufferedDevice> {
    let config = ProcessorConfig {
        clock_hz: None,
        max_cycles: None,
    };
    let mut cpu = Processor::with_config(BufferedDevice::new(), config);
    cpu.load(program).unwrap();
    cpu
}

/// Runs one conditional jump `opcode $40` with the given flags and returns
/// the resulting PC.
fn branch_pc(opcode: u8, equal: bool, less: bool, more: bool) -> u8 {
    let mut cpu = setup_cpu(&[opcode, 0x40]);
    cpu.set_flags(equal, less, more);
    cpu.step().unwrap();
    cpu.pc()
}

const TAKEN: u8 = 0x40;
const NOT_TAKEN: u8 = 0x02;

#[test]
fn test_jmp_uses_operand_byte() {
    let mut cpu = setup_cpu(&[0x07, 0x05]);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x05);
}

#[test]
fn test_jmp_loop_with_cycle_limit() {
    let config = ProcessorConfig {
        clock_hz: None,
        max_cycles: Some(10),
    };
    let mut cpu = Processor::with_config(BufferedDevice::new(), config);
    cpu.load(&[0x07, 0x00]).unwrap();

    let summary = cpu.run().unwrap();
    assert_eq!(summary.cycles, 10);
    assert_eq!(cpu.pc(), 0x00);
}

#[test]
fn test_jl() {
    assert_eq!(branch_pc(0x08, false, true, false), TAKEN);
    assert_eq!(branch_pc(0x08, true, false, false), NOT_TAKEN);
    assert_eq!(branch_pc(0x08, false, false, true), NOT_TAKEN);
}

#[test]
fn test_jnl() {
    assert_eq!(branch_pc(0x09, false, true, false), NOT_TAKEN);
    assert_eq!(branch_pc(0x09, true, false, false), TAKEN);
    assert_eq!(branch_pc(0x09, false, false, true), TAKEN);
}

#[test]
fn test_jnm() {
    assert_eq!(branch_pc(0x0A, false, false, true), NOT_TAKEN);
    assert_eq!(branch_pc(0x0A, true, false, false), TAKEN);
    assert_eq!(branch_pc(0x0A, false, true, false), TAKEN);
}

#[test]
fn test_jm() {
    assert_eq!(branch_pc(0x0B, false, false, true), TAKEN);
    assert_eq!(branch_pc(0x0B, true, false, false), NOT_TAKEN);
}

#[test]
fn test_jne() {
    assert_eq!(branch_pc(0x0C, false, true, false), TAKEN);
    assert_eq!(branch_pc(0x0C, true, false, false), NOT_TAKEN);
}

#[test]
fn test_je() {
    assert_eq!(branch_pc(0x0D, true, false, false), TAKEN);
    assert_eq!(branch_pc(0x0D, false, false, true), NOT_TAKEN);
}

#[test]
fn test_flags_clear_at_reset() {
    // No cmp yet: all flags false, so jnl/jnm/jne are taken.
    assert_eq!(branch_pc(0x09, false, false, false), TAKEN);
    assert_eq!(branch_pc(0x0A, false, false, false), TAKEN);
    assert_eq!(branch_pc(0x0C, false, false, false), TAKEN);
    assert_eq!(branch_pc(0x0D, false, false, false), NOT_TAKEN);
}

#[test]
fn test_countdown_loop() {
    // r1 = 3; loop: sub r1, r2 (r2 = 1); cmp r1, #0; jne loop; hlt
    let program = [
        0x03, 0x01, 0x01, 0x03, // 00: lea r1, #3
        0x03, 0x01, 0x02, 0x01, // 04: lea r2, #1
        0x11, 0x01, 0x01, 0x02, // 08: sub r1, r2
        0x0E, 0x01, 0x01, 0x00, // 0C: cmp r1, #0
        0x0C, 0x08, // 10: jne $08
        0xFF, // 12: hlt
    ];
    let mut cpu = setup_cpu(&program);

    let summary = cpu.run().unwrap();
    assert_eq!(cpu.registers().get(0x01), 0);
    assert!(cpu.flag_equal());
    // 2 setup + 3 iterations of 3 + hlt
    assert_eq!(summary.cycles, 12);
}
