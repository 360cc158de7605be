//! Fuzz target for processor execution.
//!
//! Loads an arbitrary image and machine state, then runs a bounded number of
//! steps. Faults are expected; panics and broken invariants are bugs.

#![no_main]

use arbitrary::Arbitrary;
use lib8vm::{BufferedDevice, Processor, ProcessorConfig, StepOutcome};
use libfuzzer_sys::fuzz_target;

/// Arbitrary starting state
#[derive(Debug, Arbitrary)]
struct FuzzState {
    pc: u8,
    sp: u8,
    flag_equal: bool,
    flag_less: bool,
    flag_more: bool,
    registers: [u8; 16],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    image: Vec<u8>,
    input: Vec<u8>,
    state: FuzzState,
}

fuzz_target!(|input: FuzzInput| {
    let config = ProcessorConfig {
        clock_hz: None,
        max_cycles: None,
    };
    let mut cpu = Processor::with_config(BufferedDevice::with_input(&input.input), config);

    if cpu.load(&input.image).is_err() {
        assert!(input.image.len() > 256);
        return;
    }

    cpu.set_pc(input.state.pc);
    cpu.set_sp(input.state.sp);
    cpu.set_flags(
        input.state.flag_equal,
        input.state.flag_less,
        input.state.flag_more,
    );
    for (id, &value) in input.state.registers.iter().enumerate() {
        cpu.registers_mut().set(id as u8, value);
    }

    for _ in 0..256 {
        let sp_before = cpu.sp();
        match cpu.step() {
            Ok(StepOutcome::Running) => {
                // The stack pointer moves by at most one per instruction
                assert!(cpu.sp().abs_diff(sp_before) <= 1);
            }
            Ok(StepOutcome::Halted) => break,
            Err(_) => {
                assert!(cpu.halted());
                break;
            }
        }
    }

    // Comparison flags are either all clear or exactly one is set
    let set = [cpu.flag_equal(), cpu.flag_less(), cpu.flag_more()]
        .iter()
        .filter(|&&f| f)
        .count();
    let preset = [
        input.state.flag_equal,
        input.state.flag_less,
        input.state.flag_more,
    ]
    .iter()
    .filter(|&&f| f)
    .count();
    assert!(set <= 1 || set == preset);
});
