//! Bitmap fonts.
//!
//! A font table is a flat byte array. Its first four bytes are the glyph
//! width, glyph height, bytes per glyph and the code of the first glyph;
//! the glyph bitmaps follow back to back. Each glyph row starts on a byte
//! boundary and bits are consumed MSB first.

mod bold12;
mod bold8;
mod mono14;
mod normal20;
mod normal8;
mod seven_segment;

const HEADER_LEN: usize = 4;

/// The bundled glyph tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontKind {
    /// 6x8 bold
    Bold8,
    /// 12x16 bold
    Bold12,
    /// 6x8 regular
    Normal8,
    /// 18x24 regular
    Normal20,
    /// 12x14 monospace
    Mono14,
    /// 16x24 seven segment digits, '0'..='9' and ':' only
    SevenSegment,
}

impl FontKind {
    pub fn table(self) -> &'static [u8] {
        match self {
            FontKind::Bold8 => &bold8::BOLD_8,
            FontKind::Bold12 => &bold12::BOLD_12,
            FontKind::Normal8 => &normal8::NORMAL_8,
            FontKind::Normal20 => &normal20::NORMAL_20,
            FontKind::Mono14 => &mono14::MONO_14,
            FontKind::SevenSegment => &seven_segment::SEVEN_SEGMENT,
        }
    }
}

/// Glyph table together with the colors it is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    table: &'static [u8],
    width: u8,
    height: u8,
    bytes_per_glyph: u8,
    code_offset: u8,
    pub foreground: u16,
    pub background: u16,
}

impl Font {
    pub fn new(kind: FontKind, foreground: u16, background: u16) -> Self {
        let table = kind.table();
        Self {
            table,
            width: table[0],
            height: table[1],
            bytes_per_glyph: table[2],
            code_offset: table[3],
            foreground,
            background,
        }
    }

    /// Use a caller supplied table.
    ///
    /// Returns `None` when the header is inconsistent: zero sized glyphs,
    /// fewer bytes per glyph than the rows need, or no room for a single glyph.
    pub fn from_table(table: &'static [u8], foreground: u16, background: u16) -> Option<Self> {
        let header = table.get(..HEADER_LEN)?;
        let (width, height, bytes_per_glyph) = (header[0], header[1], header[2]);
        if width == 0 || height == 0 {
            return None;
        }
        let row_bytes = (width as usize + 7) / 8;
        if (bytes_per_glyph as usize) < row_bytes * height as usize {
            return None;
        }
        if table.len() < HEADER_LEN + bytes_per_glyph as usize {
            return None;
        }
        Some(Self {
            table,
            width,
            height,
            bytes_per_glyph,
            code_offset: header[3],
            foreground,
            background,
        })
    }

    pub fn width(&self) -> u16 {
        self.width as u16
    }

    pub fn height(&self) -> u16 {
        self.height as u16
    }

    pub fn bytes_per_glyph(&self) -> u16 {
        self.bytes_per_glyph as u16
    }

    pub fn code_offset(&self) -> u8 {
        self.code_offset
    }

    /// Bytes of one glyph row
    pub fn row_bytes(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    /// Bitmap of the glyph for a Windows-1251 code.
    ///
    /// Codes from 192 up are shifted down by 64 first, which is where
    /// Cyrillic tables keep their letters.
    pub fn glyph(&self, code: u16) -> Option<&'static [u8]> {
        let code = if code >= 192 { code - 64 } else { code };
        let index = code.checked_sub(self.code_offset as u16)? as usize;
        let size = self.bytes_per_glyph as usize;
        let start = HEADER_LEN + index * size;
        self.table.get(start..start + size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FontKind; 6] = [
        FontKind::Bold8,
        FontKind::Bold12,
        FontKind::Normal8,
        FontKind::Normal20,
        FontKind::Mono14,
        FontKind::SevenSegment,
    ];

    #[test]
    fn bundled_tables_have_consistent_headers() {
        for kind in ALL {
            let table = kind.table();
            let font = Font::from_table(table, 0xFFFF, 0).unwrap();
            assert_eq!(font, Font::new(kind, 0xFFFF, 0));
            assert_eq!((table.len() - 4) % table[2] as usize, 0);
        }
    }

    #[test]
    fn ascii_tables_cover_printable_range() {
        let font = Font::new(FontKind::Normal8, 0xFFFF, 0);
        assert!(font.glyph(' ' as u16).is_some());
        assert!(font.glyph('~' as u16).is_some());
        assert!(font.glyph(0x7F).is_some());
        assert!(font.glyph(0x1F).is_none());
        assert!(font.glyph(0x80).is_none());
        // 0xC0 is remapped to 0x80, still past the ASCII table
        assert!(font.glyph(0xC0).is_none());
    }

    #[test]
    fn glyph_lookup_uses_code_offset() {
        let font = Font::new(FontKind::SevenSegment, 0xFFFF, 0);
        assert_eq!(font.code_offset(), b'0');
        let zero = font.glyph('0' as u16).unwrap();
        assert_eq!(zero.as_ptr(), font.table[4..].as_ptr());
        assert!(font.glyph(':' as u16).is_some());
        assert!(font.glyph(';' as u16).is_none());
        assert!(font.glyph('A' as u16).is_none());
    }

    #[test]
    fn rejects_inconsistent_custom_tables() {
        static EMPTY: [u8; 2] = [8, 8];
        static ZERO_WIDTH: [u8; 12] = [0, 8, 8, 32, 0, 0, 0, 0, 0, 0, 0, 0];
        static SHORT_GLYPH: [u8; 12] = [12, 8, 8, 32, 0, 0, 0, 0, 0, 0, 0, 0];
        static TRUNCATED: [u8; 8] = [8, 8, 8, 32, 0, 0, 0, 0];
        static ONE_GLYPH: [u8; 12] = [8, 8, 8, 65, 0x80, 0, 0, 0, 0, 0, 0, 0];

        assert!(Font::from_table(&EMPTY, 0, 0).is_none());
        assert!(Font::from_table(&ZERO_WIDTH, 0, 0).is_none());
        assert!(Font::from_table(&SHORT_GLYPH, 0, 0).is_none());
        assert!(Font::from_table(&TRUNCATED, 0, 0).is_none());

        let font = Font::from_table(&ONE_GLYPH, 0, 0).unwrap();
        assert_eq!(font.glyph('A' as u16), Some(&ONE_GLYPH[4..]));
        assert!(font.glyph('B' as u16).is_none());
    }
}
