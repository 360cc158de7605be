//! Tests for PUSH, POP, CAL and RET.
//!
//! The stack pointer starts at 0xFF and points at the most recently pushed
//! byte: push pre-decrements, pop post-increments. Both ends are checked
//! before SP moves.

use lib8vm::{BufferedDevice, ExecutionError, Processor, ProcessorConfig};

const REG: u8 = 0x01;

fn setup_cpu(program: &[u8]) -> Processor<BufferedDevice> {
    let config = ProcessorConfig {
        clock_hz: None,
        max_cycles: None,
    };
    let mut cpu = Processor::with_config(BufferedDevice::new(), config);
    cpu.load(program).unwrap();
    cpu
}

// ========== PUSH / POP ==========

#[test]
fn test_first_push_writes_0xfe() {
    let mut cpu = setup_cpu(&[0x26, 0x00, 0x42]);

    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0xFE);
    assert_eq!(cpu.memory().read(0xFE), 0x42);
    assert_eq!(cpu.pc(), 3);
}

#[test]
fn test_push_then_pop_restores_value() {
    // push r1 ; lea r1, #0 ; pop r1
    let mut cpu = setup_cpu(&[0x26, REG, 0x01, 0x03, REG, 0x01, 0x00, 0x27, REG, 0x01]);
    cpu.registers_mut().set(0x01, 0x9C);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.registers().get(0x01), 0x00);

    cpu.step().unwrap();
    assert_eq!(cpu.registers().get(0x01), 0x9C);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_pop_order_is_lifo() {
    let program = [
        0x26, 0x00, 0x01, // push #1
        0x26, 0x00, 0x02, // push #2
        0x27, REG, 0x0A, // pop r0A
        0x27, REG, 0x0B, // pop r0B
        0xFF,
    ];
    let mut cpu = setup_cpu(&program);

    cpu.run().unwrap();
    assert_eq!(cpu.registers().get(0x0A), 2);
    assert_eq!(cpu.registers().get(0x0B), 1);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_pop_on_empty_stack_underflows() {
    let mut cpu = setup_cpu(&[0x27, REG, 0x01]);

    assert_eq!(cpu.step(), Err(ExecutionError::StackUnderflow { pc: 0 }));
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.halted());
}

#[test]
fn test_push_at_zero_overflows() {
    let mut cpu = setup_cpu(&[0x00, 0x26, 0x00, 0x11]);
    cpu.step().unwrap();
    cpu.set_sp(0x00);

    assert_eq!(cpu.step(), Err(ExecutionError::StackOverflow { pc: 1 }));
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.memory().read(0xFF), 0x00);
}

#[test]
fn test_push_at_one_uses_address_zero() {
    let mut cpu = setup_cpu(&[0x26, 0x00, 0x11]);
    cpu.set_sp(0x01);

    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.memory().read(0x00), 0x11);
}

#[test]
fn test_push_invalid_mode_leaves_stack() {
    let mut cpu = setup_cpu(&[0x26, 0x0F, 0x11]);

    assert_eq!(cpu.step(), Err(ExecutionError::InvalidAddressingMode(0x0F)));
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== CAL / RET ==========

#[test]
fn test_cal_pushes_return_address() {
    let mut cpu = setup_cpu(&[0x06, 0x10]);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x10);
    assert_eq!(cpu.sp(), 0xFE);
    assert_eq!(cpu.memory().read(0xFE), 0x02);
}

#[test]
fn test_cal_ret_round_trip() {
    let mut program = vec![0u8; 0x12];
    program[0x00] = 0x06; // cal $10
    program[0x01] = 0x10;
    program[0x02] = 0xFF; // hlt
    program[0x10] = 0x01; // out #'R', 0
    program[0x11] = 0x00;
    program.extend_from_slice(&[b'R', 0x00, 0x05]); // ... ret
    let mut cpu = setup_cpu(&program);

    let summary = cpu.run().unwrap();

    assert_eq!(cpu.device().output_text(), "R");
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(summary.cycles, 4);
}

#[test]
fn test_ret_on_empty_stack_underflows() {
    let mut cpu = setup_cpu(&[0x05]);

    assert_eq!(cpu.step(), Err(ExecutionError::StackUnderflow { pc: 0 }));
    assert_eq!(cpu.pc(), 1);
}

#[test]
fn test_cal_overflow() {
    let mut cpu = setup_cpu(&[0x06, 0x40]);
    cpu.set_sp(0x00);

    assert_eq!(cpu.step(), Err(ExecutionError::StackOverflow { pc: 0 }));
    assert_ne!(cpu.pc(), 0x40);
}

#[test]
fn test_nested_calls() {
    let mut program = vec![0u8; 0x30];
    program[0x00] = 0x06; // cal $10
    program[0x01] = 0x10;
    program[0x02] = 0xFF;
    program[0x10] = 0x06; // cal $20
    program[0x11] = 0x20;
    program[0x12] = 0x05; // ret
    program[0x20] = 0x05; // ret
    let mut cpu = setup_cpu(&program);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.memory().read(0xFE), 0x02);
    assert_eq!(cpu.memory().read(0xFD), 0x12);

    cpu.run().unwrap();
    assert!(cpu.halted());
    assert_eq!(cpu.pc(), 0x03);
    assert_eq!(cpu.sp(), 0xFF);
}
