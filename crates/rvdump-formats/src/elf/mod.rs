//! ELF32 (little-endian) container walking.
//!
//! The walk is deliberately shallow: locate the section header table,
//! find `.text` by section type, and read the symbol and string tables
//! needed for labeling. Relocations, segments, and DWARF are out of
//! scope.

mod header;
mod section;
mod symbol;

pub use header::ElfHeader;
pub use section::{SectionHeader, SHT_PROGBITS, SHT_STRTAB, SHT_SYMTAB};
pub use symbol::SymbolEntry;

use crate::ParseError;
use rvdump_core::SymbolMap;

/// A parsed ELF32 binary, borrowing the raw file bytes.
#[derive(Debug)]
pub struct Elf32<'a> {
    /// Raw bytes of the file.
    data: &'a [u8],
    /// Parsed file header.
    pub header: ElfHeader,
    /// Section headers in file order.
    pub sections: Vec<SectionHeader>,
}

impl<'a> Elf32<'a> {
    /// Parse an ELF32 file from raw bytes.
    pub fn parse(data: &'a [u8]) -> Result<Self, ParseError> {
        let header = ElfHeader::parse(data)?;
        let sections = Self::parse_section_headers(data, &header)?;
        Ok(Self {
            data,
            header,
            sections,
        })
    }

    fn parse_section_headers(
        data: &[u8],
        header: &ElfHeader,
    ) -> Result<Vec<SectionHeader>, ParseError> {
        if header.e_shnum > 0 && (header.e_shentsize as usize) < SectionHeader::SIZE {
            return Err(ParseError::invalid_structure(
                "section header table",
                header.e_shoff as u64,
                format!("entry size {} too small", header.e_shentsize),
            ));
        }

        let mut sections = Vec::with_capacity(header.e_shnum as usize);
        let mut offset = header.e_shoff as usize;

        for _ in 0..header.e_shnum {
            let end = offset
                .checked_add(header.e_shentsize as usize)
                .ok_or(ParseError::too_short(usize::MAX, data.len()))?;
            if end > data.len() {
                return Err(ParseError::too_short(end, data.len()));
            }
            sections.push(SectionHeader::parse(&data[offset..])?);
            offset = end;
        }

        Ok(sections)
    }

    /// Returns the first section of the given type, the convention this
    /// tool uses to locate `.text` and the string table.
    pub fn section_by_type(&self, sh_type: u32) -> Option<&SectionHeader> {
        self.sections.iter().find(|s| s.sh_type == sh_type)
    }

    /// Returns the raw contents of a section.
    pub fn section_data(&self, section: &SectionHeader) -> Result<&'a [u8], ParseError> {
        let start = section.sh_offset as usize;
        let end = start
            .checked_add(section.sh_size as usize)
            .ok_or(ParseError::too_short(usize::MAX, self.data.len()))?;
        if end > self.data.len() {
            return Err(ParseError::too_short(end, self.data.len()));
        }
        Ok(&self.data[start..end])
    }

    /// Returns the contents of `.text`, or an empty slice when no
    /// `PROGBITS` section exists.
    pub fn text(&self) -> Result<&'a [u8], ParseError> {
        match self.section_by_type(SHT_PROGBITS) {
            Some(section) => self.section_data(section),
            None => Ok(&[]),
        }
    }

    /// Returns the string table backing symbol names: the first
    /// `STRTAB` section, or an empty table when none exists.
    pub fn string_table(&self) -> Result<StringTable<'a>, ParseError> {
        match self.section_by_type(SHT_STRTAB) {
            Some(section) => Ok(StringTable::new(self.section_data(section)?)),
            None => Ok(StringTable::empty()),
        }
    }

    /// Returns every symbol table section in file order.
    pub fn symbol_tables(&self) -> impl Iterator<Item = &SectionHeader> {
        self.sections.iter().filter(|s| s.sh_type == SHT_SYMTAB)
    }

    /// Parses the entries of one symbol table section.
    pub fn symbols(&self, section: &SectionHeader) -> Result<Vec<SymbolEntry>, ParseError> {
        let data = self.section_data(section)?;
        let count = data.len() / SymbolEntry::SIZE;
        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            entries.push(SymbolEntry::parse(&data[index * SymbolEntry::SIZE..])?);
        }
        Ok(entries)
    }

    /// Builds the tag map: every named symbol across every symbol
    /// table, keyed by its value. Later entries overwrite earlier ones
    /// at the same address.
    pub fn tags(&self) -> Result<SymbolMap, ParseError> {
        let strings = self.string_table()?;
        let mut tags = SymbolMap::new();
        for section in self.symbol_tables() {
            for entry in self.symbols(section)? {
                if let Some(name) = strings.get(entry.st_name as usize) {
                    tags.insert(entry.st_value, name.to_string());
                }
            }
        }
        Ok(tags)
    }
}

/// A table of null-terminated strings.
#[derive(Debug)]
pub struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn empty() -> Self {
        Self { data: &[] }
    }

    /// Returns the string starting at `offset`, if the offset is in
    /// bounds and the bytes up to the terminator are UTF-8.
    pub fn get(&self, offset: usize) -> Option<&'a str> {
        if offset >= self.data.len() {
            return None;
        }
        let remaining = &self.data[offset..];
        let end = remaining.iter().position(|&b| b == 0)?;
        std::str::from_utf8(&remaining[..end]).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assembles a minimal ELF32 image: header, `.text` payload, a
    /// string table, one symbol table, and the section header table.
    fn sample_elf(text: &[u8], symbols: &[(u32, &str, u8, u16)]) -> Vec<u8> {
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
            symtab.extend_from_slice(&0u32.to_le_bytes());
            symtab.push(*info);
            symtab.push(0);
            symtab.extend_from_slice(&shndx.to_le_bytes());
        }

        let text_off = ElfHeader::SIZE as u32;
        let strtab_off = text_off + text.len() as u32;
        let symtab_off = strtab_off + strtab.len() as u32;
        let shoff = symtab_off + symtab.len() as u32;

        let mut image = vec![0u8; ElfHeader::SIZE];
        image[0] = 0x7f;
        image[1..4].copy_from_slice(b"ELF");
        image[4] = 1;
        image[5] = 1;
        image[32..36].copy_from_slice(&shoff.to_le_bytes());
        image[46..48].copy_from_slice(&(SectionHeader::SIZE as u16).to_le_bytes());
        image[48..50].copy_from_slice(&4u16.to_le_bytes());

        image.extend_from_slice(text);
        image.extend_from_slice(&strtab);
        image.extend_from_slice(&symtab);

        let section = |sh_type: u32, offset: u32, size: u32| {
            let mut rec = Vec::new();
            rec.extend_from_slice(&0u32.to_le_bytes());
            rec.extend_from_slice(&sh_type.to_le_bytes());
            rec.extend_from_slice(&[0u8; 8]);
            rec.extend_from_slice(&offset.to_le_bytes());
            rec.extend_from_slice(&size.to_le_bytes());
            rec.extend_from_slice(&[0u8; 16]);
            rec
        };
        image.extend_from_slice(&section(0, 0, 0));
        image.extend_from_slice(&section(SHT_PROGBITS, text_off, text.len() as u32));
        image.extend_from_slice(&section(SHT_STRTAB, strtab_off, strtab.len() as u32));
        image.extend_from_slice(&section(SHT_SYMTAB, symtab_off, symtab.len() as u32));
        image
    }

    #[test]
    fn finds_text_by_section_type() {
        let image = sample_elf(&[0x01, 0x00], &[]);
        let elf = Elf32::parse(&image).unwrap();
        assert_eq!(elf.text().unwrap(), &[0x01, 0x00]);
    }

    #[test]
    fn builds_tags_from_symtab() {
        let image = sample_elf(&[], &[(0x0, "main", 0x12, 1), (0xa, "loop", 0x00, 1)]);
        let elf = Elf32::parse(&image).unwrap();
        let tags = elf.tags().unwrap();
        assert_eq!(tags.get(0x0), Some("main"));
        assert_eq!(tags.get(0xa), Some("loop"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn missing_text_yields_empty_listing_input() {
        let mut image = sample_elf(&[], &[]);
        let elf = Elf32::parse(&image).unwrap();
        assert!(elf.text().unwrap().is_empty());
        drop(elf);

        // Flip the PROGBITS section to an unknown type: no `.text`.
        let shoff = u32::from_le_bytes(image[32..36].try_into().unwrap()) as usize;
        let progbits = shoff + SectionHeader::SIZE + 4;
        image[progbits..progbits + 4].copy_from_slice(&0x42u32.to_le_bytes());
        let elf = Elf32::parse(&image).unwrap();
        assert!(elf.section_by_type(SHT_PROGBITS).is_none());
        assert!(elf.text().unwrap().is_empty());
    }

    #[test]
    fn section_data_out_of_bounds_is_an_error() {
        let image = sample_elf(&[], &[]);
        let elf = Elf32::parse(&image).unwrap();
        let mut bogus = elf.sections[1].clone();
        bogus.sh_size = u32::MAX;
        assert!(matches!(
            elf.section_data(&bogus),
            Err(ParseError::TooShort { .. })
        ));
    }
}
