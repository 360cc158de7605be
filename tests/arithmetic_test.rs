//! Tests for ADD, SUB, MUL and DIV.
//!
//! Encoding for all four: `opcode mode dest src`. Both operands use the same
//! mode and the result is written back to `dest`, wrapping modulo 256.

use lib8vm::{BufferedDevice, ExecutionError, Processor, ProcessorConfig};

const REG: u8 = 0x01;
const MEM: u8 = 0x02;
const IND: u8 = 0x03;
const IMM: u8 = 0x00;

fn setup_cpu(program: &[u8]) -> Processor<BufferedDevice> {
    let config = ProcessorConfig {
        clock_hz: None,
        max_cycles: None,
    };
    let mut cpu = Processor::with_config(BufferedDevice::new(), config);
    cpu.load(program).unwrap();
    cpu
}

#[test]
fn test_add_registers_then_halt() {
    let mut cpu = setup_cpu(&[0x10, REG, 0x01, 0x02, 0xFF]);
    cpu.registers_mut().set(0x01, 3);
    cpu.registers_mut().set(0x02, 4);

    cpu.step().unwrap();
    assert_eq!(cpu.registers().get(0x01), 7);
    assert_eq!(cpu.registers().get(0x02), 4);
    assert_eq!(cpu.pc(), 4);

    let summary = cpu.run().unwrap();
    assert_eq!(summary.cycles, 1);
    assert!(cpu.halted());
}

#[test]
fn test_add_immediate_mode_discards_result() {
    // Mode 0x00 resolves both operands as literals; the write is dropped.
    let mut cpu = setup_cpu(&[0x10, IMM, 0x01, 0x02, 0xFF]);
    cpu.registers_mut().set(0x01, 3);
    cpu.registers_mut().set(0x02, 4);

    cpu.step().unwrap();

    assert_eq!(cpu.registers().get(0x01), 3);
    assert_eq!(cpu.memory().read(0x01), IMM);
    assert_eq!(cpu.pc(), 4);
}

#[test]
fn test_add_wraps() {
    let mut cpu = setup_cpu(&[0x10, REG, 0x01, 0x02]);
    cpu.registers_mut().set(0x01, 0xF0);
    cpu.registers_mut().set(0x02, 0x20);

    cpu.step().unwrap();
    assert_eq!(cpu.registers().get(0x01), 0x10);
}

#[test]
fn test_sub_wraps_below_zero() {
    let mut cpu = setup_cpu(&[0x11, REG, 0x01, 0x02]);
    cpu.registers_mut().set(0x01, 0x01);
    cpu.registers_mut().set(0x02, 0x02);

    cpu.step().unwrap();
    assert_eq!(cpu.registers().get(0x01), 0xFF);
}

#[test]
fn test_mul_memory_operands() {
    let mut program = vec![0x12, MEM, 0x80, 0x81];
    program.resize(0x82, 0);
    program[0x80] = 0x11;
    program[0x81] = 0x11;
    let mut cpu = setup_cpu(&program);

    cpu.step().unwrap();
    // 0x11 * 0x11 = 0x121
    assert_eq!(cpu.memory().read(0x80), 0x21);
    assert_eq!(cpu.memory().read(0x81), 0x11);
}

#[test]
fn test_div_truncates() {
    let mut cpu = setup_cpu(&[0x13, REG, 0x01, 0x02]);
    cpu.registers_mut().set(0x01, 17);
    cpu.registers_mut().set(0x02, 5);

    cpu.step().unwrap();
    assert_eq!(cpu.registers().get(0x01), 3);
}

#[test]
fn test_div_by_zero_is_zero_not_fault() {
    let mut cpu = setup_cpu(&[0x13, REG, 0x01, 0x02, 0xFF]);
    cpu.registers_mut().set(0x01, 99);

    assert!(cpu.step().is_ok());
    assert_eq!(cpu.registers().get(0x01), 0);
    assert!(!cpu.halted());
}

#[test]
fn test_add_register_indirect() {
    let mut cpu = setup_cpu(&[0x10, IND, 0x01, 0x02]);
    cpu.registers_mut().set(0x01, 0xA0);
    cpu.registers_mut().set(0x02, 0xA1);
    cpu.memory_mut().write(0xA0, 10);
    cpu.memory_mut().write(0xA1, 20);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0xA0), 30);
    assert_eq!(cpu.registers().get(0x01), 0xA0);
}

#[test]
fn test_high_nibble_does_not_change_family() {
    let mut cpu = setup_cpu(&[0x10, 0x31, 0x01, 0x02]);
    cpu.registers_mut().set(0x01, 1);
    cpu.registers_mut().set(0x02, 2);

    cpu.step().unwrap();
    assert_eq!(cpu.registers().get(0x01), 3);
}

#[test]
fn test_invalid_mode_faults() {
    let mut cpu = setup_cpu(&[0x10, 0x05, 0x01, 0x02]);

    assert_eq!(cpu.step(), Err(ExecutionError::InvalidAddressingMode(0x05)));
    assert!(cpu.halted());
    assert_eq!(cpu.registers().get(0x01), 0);
}
