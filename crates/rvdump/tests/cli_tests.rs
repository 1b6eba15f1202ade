//! CLI integration tests for rvdump.
//!
//! Each test assembles a synthetic ELF32 image byte for byte, runs the
//! binary on it, and compares the complete report against a golden
//! string, pinning both the decoder output and the column layout.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Run rvdump with the given arguments.
fn run_rvdump(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rvdump"))
        .args(args)
        .output()
        .expect("failed to execute rvdump")
}

/// A scratch directory unique to the calling test.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rvdump-cli-{}-{}", std::process::id(), test));
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

/// Assembles an ELF32 image with a `.text` payload, one string table,
/// and one symbol table holding `symbols` as `(value, name, info,
/// shndx)` tuples.
fn build_elf(text: &[u8], symbols: &[(u32, &str, u8, u16)]) -> Vec<u8> {
    let mut strtab = vec![0u8];
    let mut name_offsets = Vec::new();
    for (_, name, _, _) in symbols {
        name_offsets.push(strtab.len() as u32);
        strtab.extend_from_slice(name.as_bytes());
        strtab.push(0);
    }

    let mut symtab = Vec::new();
    for ((value, _, info, shndx), name_off) in symbols.iter().zip(&name_offsets) {
        symtab.extend_from_slice(&name_off.to_le_bytes());
        symtab.extend_from_slice(&value.to_le_bytes());
        symtab.extend_from_slice(&0u32.to_le_bytes()); // st_size
        symtab.push(*info);
        symtab.push(0); // st_other
        symtab.extend_from_slice(&shndx.to_le_bytes());
    }

    let text_off = 52u32;
    let strtab_off = text_off + text.len() as u32;
    let symtab_off = strtab_off + strtab.len() as u32;
    let shoff = symtab_off + symtab.len() as u32;

    let mut image = vec![0u8; 52];
    image[0] = 0x7f;
    image[1..4].copy_from_slice(b"ELF");
    image[4] = 1; // ELFCLASS32
    image[5] = 1; // little-endian
    image[6] = 1;
    image[16..18].copy_from_slice(&1u16.to_le_bytes()); // ET_REL
    image[18..20].copy_from_slice(&243u16.to_le_bytes()); // EM_RISCV
    image[32..36].copy_from_slice(&shoff.to_le_bytes());
    image[46..48].copy_from_slice(&40u16.to_le_bytes());
    image[48..50].copy_from_slice(&4u16.to_le_bytes());

    image.extend_from_slice(text);
    image.extend_from_slice(&strtab);
    image.extend_from_slice(&symtab);

    let mut section = |sh_type: u32, offset: u32, size: u32, link: u32, entsize: u32| {
        image.extend_from_slice(&0u32.to_le_bytes()); // sh_name
        image.extend_from_slice(&sh_type.to_le_bytes());
        image.extend_from_slice(&[0u8; 8]); // sh_flags, sh_addr
        image.extend_from_slice(&offset.to_le_bytes());
        image.extend_from_slice(&size.to_le_bytes());
        image.extend_from_slice(&link.to_le_bytes());
        image.extend_from_slice(&[0u8; 8]); // sh_info, sh_addralign
        image.extend_from_slice(&entsize.to_le_bytes());
    };
    section(0, 0, 0, 0, 0);
    section(1, text_off, text.len() as u32, 0, 0);
    section(2, symtab_off, symtab.len() as u32, 3, 16);
    section(3, strtab_off, strtab.len() as u32, 0, 0);
    image
}

#[test]
fn disassembles_reference_program() {
    let text = [
        0x13, 0x05, 0xa0, 0x00, // addi a0, zero, 10
        0x93, 0x07, 0xf0, 0xff, // addi a5, zero, -1
        0x01, 0x00, // c.nop
        0x01, 0xa0, // c.j 0 (lands on its own address)
        0x82, 0x80, // c.jr ra
        0x33, 0x85, 0xa5, 0x00, // add a0, a1, a0
    ];
    let image = build_elf(&text, &[(0x0, "main", 0x12, 1), (0xa, "loop", 0x00, 1)]);

    let dir = scratch_dir("reference");
    let input = dir.join("input.elf");
    let output = dir.join("report.txt");
    fs::write(&input, image).unwrap();

    let result = run_rvdump(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    assert!(result.status.success(), "stderr: {:?}", result.stderr);

    let report = fs::read_to_string(&output).unwrap();
    let expected = "\
.text
00000000       main: addi a0, zero, 10
00000004             addi a5, zero, -1
00000008             c.nop
0000000a       loop: c.j loop
0000000c             c.jr ra
0000000e             add a0, a1, a0

.symtab
Symbol Value              Size Type     Bind     Vis       Index Name
[   0] 0x0                   0 FUNC     GLOBAL   DEFAULT       1 main
[   1] 0xA                   0 NOTYPE   LOCAL    DEFAULT       1 loop
";
    assert_eq!(report, expected);
}

#[test]
fn unknown_encodings_emit_bare_placeholder() {
    // ecall is outside the decoded subset; the placeholder line has no
    // address prefix and decoding continues after it.
    let text = [
        0x73, 0x00, 0x00, 0x00, // ecall
        0x01, 0x00, // c.nop
    ];
    let image = build_elf(&text, &[]);

    let dir = scratch_dir("placeholder");
    let input = dir.join("input.elf");
    let output = dir.join("report.txt");
    fs::write(&input, image).unwrap();

    let result = run_rvdump(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    assert!(result.status.success(), "stderr: {:?}", result.stderr);

    let report = fs::read_to_string(&output).unwrap();
    let expected = "\
.text
unknown_command
00000004             c.nop

.symtab
Symbol Value              Size Type     Bind     Vis       Index Name
";
    assert_eq!(report, expected);
}

#[test]
fn output_is_deterministic() {
    let text = [0x13, 0x05, 0xa0, 0x00, 0x01, 0xa0];
    let image = build_elf(&text, &[(0x4, "spin", 0x00, 1)]);

    let dir = scratch_dir("deterministic");
    let input = dir.join("input.elf");
    fs::write(&input, image).unwrap();

    let mut reports = Vec::new();
    for round in 0..2 {
        let output = dir.join(format!("report-{round}.txt"));
        let result = run_rvdump(&[input.to_str().unwrap(), output.to_str().unwrap()]);
        assert!(result.status.success());
        reports.push(fs::read(&output).unwrap());
    }
    assert_eq!(reports[0], reports[1]);
}

#[test]
fn rejects_non_elf_input() {
    let dir = scratch_dir("not-elf");
    let input = dir.join("input.bin");
    let output = dir.join("report.txt");
    fs::write(&input, b"this is not an object file").unwrap();

    let result = run_rvdump(&[input.to_str().unwrap(), output.to_str().unwrap()]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Error:"), "stderr: {stderr}");
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn rejects_missing_arguments() {
    let result = run_rvdump(&["only-one-path"]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Error:"), "stderr: {stderr}");
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn rejects_unreadable_input() {
    let dir = scratch_dir("unreadable");
    let result = run_rvdump(&[
        dir.join("does-not-exist.elf").to_str().unwrap(),
        dir.join("report.txt").to_str().unwrap(),
    ]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Error:"), "stderr: {stderr}");
}
