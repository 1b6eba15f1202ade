#![no_main]

use libfuzzer_sys::fuzz_target;
use rvdump_core::SymbolMap;
use rvdump_disasm::TextWalker;

fuzz_target!(|data: &[u8]| {
    // Walking arbitrary bytes must never panic; every slot either
    // decodes, reports an unknown encoding, or ends on truncation.
    let mut tags = SymbolMap::new();
    tags.insert(0, "start".to_string());
    tags.insert(4, "next".to_string());

    let mut previous = None;
    for (address, slot) in TextWalker::new(data, &tags) {
        if let Some(previous) = previous {
            let step = address - previous;
            assert!(step == 2 || step == 4);
        }
        previous = Some(address);

        if let Ok(inst) = slot {
            // Rendering a decoded instruction must always succeed.
            let _ = inst.render().unwrap();
        }
    }
});
