// Volume label validation and encoding
// FAT labels are stored in OEM code page 850, exFAT labels in UTF-16.

use crate::fat_common::constants::NO_NAME_LABEL;
use crate::params::FsType;
use sdfmt_core::{Diagnostics, FormatError};

pub const MAX_LABEL_CHARS: usize = 11;

/// Unicode code points for CP850 bytes 0x80..=0xFF.
const CP850_HIGH: [u16; 128] = [
    0x00C7, 0x00FC, 0x00E9, 0x00E2, 0x00E4, 0x00E0, 0x00E5, 0x00E7, // 0x80
    0x00EA, 0x00EB, 0x00E8, 0x00EF, 0x00EE, 0x00EC, 0x00C4, 0x00C5,
    0x00C9, 0x00E6, 0x00C6, 0x00F4, 0x00F6, 0x00F2, 0x00FB, 0x00F9, // 0x90
    0x00FF, 0x00D6, 0x00DC, 0x00F8, 0x00A3, 0x00D8, 0x00D7, 0x0192,
    0x00E1, 0x00ED, 0x00F3, 0x00FA, 0x00F1, 0x00D1, 0x00AA, 0x00BA, // 0xA0
    0x00BF, 0x00AE, 0x00AC, 0x00BD, 0x00BC, 0x00A1, 0x00AB, 0x00BB,
    0x2591, 0x2592, 0x2593, 0x2502, 0x2524, 0x00C1, 0x00C2, 0x00C0, // 0xB0
    0x00A9, 0x2563, 0x2551, 0x2557, 0x255D, 0x00A2, 0x00A5, 0x2510,
    0x2514, 0x2534, 0x252C, 0x251C, 0x2500, 0x253C, 0x00E3, 0x00C3, // 0xC0
    0x255A, 0x2554, 0x2569, 0x2566, 0x2560, 0x2550, 0x256C, 0x00A4,
    0x00F0, 0x00D0, 0x00CA, 0x00CB, 0x00C8, 0x0131, 0x00CD, 0x00CE, // 0xD0
    0x00CF, 0x2518, 0x250C, 0x2588, 0x2584, 0x00A6, 0x00CC, 0x2580,
    0x00D3, 0x00DF, 0x00D4, 0x00D2, 0x00F5, 0x00D5, 0x00B5, 0x00FE, // 0xE0
    0x00DE, 0x00DA, 0x00DB, 0x00D9, 0x00FD, 0x00DD, 0x00AF, 0x00B4,
    0x00AD, 0x00B1, 0x2017, 0x00BE, 0x00B6, 0x00A7, 0x00F7, 0x00B8, // 0xF0
    0x00B0, 0x00A8, 0x00B7, 0x00B9, 0x00B3, 0x00B2, 0x25A0, 0x00A0,
];

fn to_cp850(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if cp < 0x80 {
        return Some(cp as u8);
    }
    CP850_HIGH
        .iter()
        .position(|&u| u as u32 == cp)
        .map(|i| 0x80 + i as u8)
}

fn is_forbidden(byte: u8) -> bool {
    matches!(
        byte,
        0x00..=0x1F | 0x7F | b'"' | b'*' | b'+' | b',' | b'.' | b'/' | b':'..=b'?' | b'['..=b']' | b'|'
    )
}

fn invalid(label: &str, reason: impl std::fmt::Display) -> FormatError {
    FormatError::InvalidArgument(format!("invalid volume label {:?}: {}", label, reason))
}

/// A validated FAT volume label in CP850.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatLabel {
    text: String,
    bytes: [u8; 11],
    len: usize,
}

impl FatLabel {
    pub fn new(label: &str, diag: &mut Diagnostics) -> Result<Self, FormatError> {
        let count = label.chars().count();
        if count > MAX_LABEL_CHARS {
            return Err(invalid(label, format!("{} characters, at most {} allowed", count, MAX_LABEL_CHARS)));
        }
        if label.starts_with(' ') {
            return Err(invalid(label, "must not start with a space"));
        }

        let mut bytes = [b' '; 11];
        let mut has_ascii_lowercase = false;
        for (i, ch) in label.chars().enumerate() {
            // Drivers disagree on upcasing OEM letters, so only ASCII lowercase is tolerated.
            if !ch.is_ascii() && ch.is_lowercase() {
                return Err(invalid(
                    label,
                    format!(
                        "non-ASCII lowercase character {:?} is not allowed, only ASCII letters may be lowercase",
                        ch
                    ),
                ));
            }
            let byte = to_cp850(ch)
                .ok_or_else(|| invalid(label, format!("character {:?} is not in code page 850", ch)))?;
            if is_forbidden(byte) {
                return Err(invalid(label, format!("character {:?} is not allowed", ch)));
            }
            has_ascii_lowercase |= ch.is_ascii_lowercase();
            bytes[i] = byte;
        }

        if has_ascii_lowercase {
            diag.warn(format!(
                "Volume label {:?} contains lowercase characters. Some systems may not show it correctly.",
                label
            ));
        }

        Ok(Self { text: label.to_string(), bytes, len: count })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Label field of the boot sector: space padded, or `NO NAME` when empty.
    pub fn boot_sector_label(&self) -> [u8; 11] {
        if self.is_empty() {
            NO_NAME_LABEL
        } else {
            self.bytes
        }
    }

    /// Name field of the root directory VOLUME_ID entry, if there is a label.
    pub fn dir_entry_name(&self) -> Option<[u8; 11]> {
        if self.is_empty() {
            return None;
        }
        let mut name = self.bytes;
        // 0xE5 marks a free entry; the FAT convention stores it as 0x05.
        if name[0] == 0xE5 {
            name[0] = 0x05;
        }
        Some(name)
    }
}

/// A validated exFAT volume label in UTF-16.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExFatLabel {
    text: String,
    units: Vec<u16>,
}

impl ExFatLabel {
    pub fn new(label: &str) -> Result<Self, FormatError> {
        let units: Vec<u16> = label.encode_utf16().collect();
        if units.len() > MAX_LABEL_CHARS {
            return Err(invalid(
                label,
                format!("{} UTF-16 units, at most {} allowed", units.len(), MAX_LABEL_CHARS),
            ));
        }
        Ok(Self { text: label.to_string(), units })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }
}

/// A label encoded for the target filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Fat(FatLabel),
    ExFat(ExFatLabel),
}

impl Label {
    pub fn for_filesystem(fs_type: FsType, label: Option<&str>, diag: &mut Diagnostics) -> Result<Self, FormatError> {
        let label = label.unwrap_or("");
        match fs_type {
            FsType::ExFat => Ok(Label::ExFat(ExFatLabel::new(label)?)),
            _ => Ok(Label::Fat(FatLabel::new(label, diag)?)),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Label::Fat(l) => l.text(),
            Label::ExFat(l) => l.text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fat(label: &str) -> Result<FatLabel, FormatError> {
        FatLabel::new(label, &mut Diagnostics::new())
    }

    #[test]
    fn test_plain_label() {
        let l = fat("DATA").unwrap();
        assert_eq!(&l.boot_sector_label(), b"DATA       ");
        assert_eq!(l.dir_entry_name(), Some(*b"DATA       "));
    }

    #[test]
    fn test_empty_label_is_no_name() {
        let l = fat("").unwrap();
        assert!(l.is_empty());
        assert_eq!(&l.boot_sector_label(), b"NO NAME    ");
        assert_eq!(l.dir_entry_name(), None);
    }

    #[test]
    fn test_accented_lowercase_rejected() {
        match fat("déjà vu") {
            Err(FormatError::InvalidArgument(msg)) => {
                assert!(msg.contains("non-ASCII lowercase character 'é'"), "{}", msg);
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_ascii_lowercase_warns() {
        let mut diag = Diagnostics::new();
        let l = FatLabel::new("photos", &mut diag).unwrap();
        assert_eq!(&l.boot_sector_label(), b"photos     ");
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_uppercase_cp850() {
        let l = fat("ÄÖÜ É").unwrap();
        assert_eq!(&l.boot_sector_label()[..5], &[0x8E, 0x99, 0x9A, b' ', 0x90]);
        // Index 0x6F of the table is the acute accent
        assert_eq!(to_cp850('\u{00B4}'), Some(0xEF));
    }

    #[test]
    fn test_free_entry_marker_escaped() {
        let l = fat("ÕK").unwrap();
        assert_eq!(l.boot_sector_label()[0], 0xE5);
        assert_eq!(l.dir_entry_name().unwrap()[0], 0x05);
    }

    #[test]
    fn test_rejections() {
        assert!(fat("TWELVE CHARS").is_err());
        assert!(fat(" LEADING").is_err());
        for bad in ["A.B", "A*", "A+B", "A,B", "A/B", "A:B", "A;B", "A<B", "A=B", "A>B", "A?B", "A[B", "A\\B", "A]B", "A|B", "A\"B", "A\tB"] {
            assert!(fat(bad).is_err(), "{:?} should be rejected", bad);
        }
        // Not representable in CP850
        assert!(fat("€URO").is_err());
        assert!(fat("日本").is_err());
    }

    #[test]
    fn test_eleven_characters_allowed() {
        assert!(fat("ELEVENCHARS").is_ok());
        assert!(fat("ÉLEVENCHARS").is_ok());
    }

    #[test]
    fn test_exfat_label_utf16() {
        let l = ExFatLabel::new("Fotos 2024").unwrap();
        assert_eq!(l.units().len(), 10);

        // Surrogate pairs count as two units
        let l = ExFatLabel::new("🎵🎵🎵🎵🎵").unwrap();
        assert_eq!(l.units().len(), 10);
        assert!(ExFatLabel::new("🎵🎵🎵🎵🎵🎵").is_err());
        assert!(ExFatLabel::new("abcdefghijkl").is_err());
    }

    #[test]
    fn test_label_for_filesystem() {
        let mut diag = Diagnostics::new();
        assert!(matches!(
            Label::for_filesystem(FsType::ExFat, Some("déjà vu"), &mut diag),
            Ok(Label::ExFat(_))
        ));
        assert!(Label::for_filesystem(FsType::Fat16, Some("déjà vu"), &mut diag).is_err());
        assert!(matches!(Label::for_filesystem(FsType::Fat32, None, &mut diag), Ok(Label::Fat(l)) if l.is_empty()));
    }
}
