//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary byte sequences to the disassembler and checks that the
//! listing covers the input exactly.

#![no_main]

use arbitrary::Arbitrary;
use lib8vm::disassembler::{disassemble, format_listing};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u8,
}

fuzz_target!(|input: FuzzInput| {
    let instructions = disassemble(&input.bytes, input.start_address);

    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 4);
        assert_eq!(instr.operand_bytes.len() + 1, instr.size_bytes as usize);

        let _ = format_listing(instr);

        total_size += instr.size_bytes as usize;
        expected_address = expected_address.wrapping_add(instr.size_bytes);
    }

    assert_eq!(total_size, input.bytes.len().min(256));
});
