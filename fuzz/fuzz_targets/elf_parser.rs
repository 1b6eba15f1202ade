#![no_main]

use libfuzzer_sys::fuzz_target;
use rvdump_formats::Elf32;

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary bytes must never panic.
    match Elf32::parse(data) {
        Ok(elf) => {
            let _ = elf.text();
            let _ = elf.string_table();
            let _ = elf.tags();
            for section in elf.symbol_tables() {
                if let Ok(symbols) = elf.symbols(section) {
                    for sym in symbols {
                        let _ = sym.type_name();
                        let _ = sym.bind_name();
                        let _ = sym.visibility_name();
                        let _ = sym.section_index_name();
                    }
                }
            }
        }
        Err(_) => {
            // Parse errors are expected for malformed input.
        }
    }
});
