//! Report assembly: the `.text` listing followed by the `.symtab`
//! dump, in the fixed column layout downstream tooling expects.

use anyhow::Result;
use rvdump_core::SymbolMap;
use rvdump_disasm::TextWalker;
use rvdump_formats::Elf32;
use std::io::Write;

/// Writes the complete report for a parsed ELF image.
pub fn write_report(out: &mut impl Write, elf: &Elf32) -> Result<()> {
    let tags = elf.tags()?;

    out.write_all(b".text\n")?;
    write_listing(out, elf.text()?, &tags)?;

    out.write_all(b"\n.symtab\n")?;
    write_symtab(out, elf)?;
    Ok(())
}

/// Walks `.text` and writes one line per instruction slot.
///
/// Tagged addresses carry the tag right-justified in a ten-column field
/// after the address; untagged lines pad with thirteen spaces so the
/// mnemonics align either way. Unknown encodings produce the bare
/// `unknown_command` placeholder with no address prefix.
fn write_listing(out: &mut impl Write, text: &[u8], tags: &SymbolMap) -> Result<()> {
    for (address, slot) in TextWalker::new(text, tags) {
        match slot {
            Ok(inst) => {
                let body = inst.render()?;
                match tags.get(address) {
                    Some(tag) => writeln!(out, "{address:08x} {tag:>10}: {body}")?,
                    None => writeln!(out, "{address:08x}{:13}{body}", "")?,
                }
            }
            Err(err) if err.is_recoverable() => out.write_all(b"unknown_command\n")?,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Writes the `.symtab` section: a header line, then one line per
/// symbol with the index counted within its own symbol table.
fn write_symtab(out: &mut impl Write, elf: &Elf32) -> Result<()> {
    writeln!(
        out,
        "{} {:<15} {:>7} {:<8} {:<8} {:<8} {:>6} {}",
        "Symbol", "Value", "Size", "Type", "Bind", "Vis", "Index", "Name"
    )?;

    let strings = elf.string_table()?;
    for section in elf.symbol_tables() {
        for (index, sym) in elf.symbols(section)?.iter().enumerate() {
            writeln!(
                out,
                "[{:4}] 0x{:<15X} {:5} {:<8} {:<8} {:<8} {:>6} {}",
                index,
                sym.st_value,
                sym.st_size,
                sym.type_name()?,
                sym.bind_name()?,
                sym.visibility_name(),
                sym.section_index_name(),
                strings.get(sym.st_name as usize).unwrap_or("")
            )?;
        }
    }
    Ok(())
}
