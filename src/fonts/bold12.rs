//! 12x16 bold ASCII glyphs.

#[rustfmt::skip]
pub(super) static BOLD_12: [u8; 4 + 96 * 32] = [
    12, 16, 32, 32,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, // '!'
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '"'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0, 0xFF, 0xF0, 0xFF, 0xF0, 0x3F, 0xC0, 0x3F, 0xC0, 0xFF, 0xF0, 0xFF, 0xF0, 0x3F, 0xC0, 0x3F, 0xC0, // '#'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x00, 0x0F, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0xFF, 0x00, 0xFF, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0x0F, 0xF0, 0x0F, 0xF0, 0xFF, 0xC0, 0xFF, 0xC0, // '$'
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFC, 0x00, 0xFC, 0x00, 0xFC, 0xF0, 0xFC, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF3, 0xF0, 0xF3, 0xF0, // '%'
    0x03, 0xF0, 0x03, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xF3, 0xC0, 0xF3, 0xC0, 0xFF, 0x00, 0xFF, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0xF3, 0xC0, 0xF3, 0xC0, // '&'
    0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x0F, 0x00, 0x0F, 0x00, // '('
    0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, // ')'
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0x0F, 0x00, 0x0F, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, // '*'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // ','
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, // '.'
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x00, // '/'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF3, 0xF0, 0xF3, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFC, 0xF0, 0xFC, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // '0'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x00, 0x0F, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // '1'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, // '2'
    0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xF0, 0xFF, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x03, 0xC0, 0x03, 0xC0, 0x00, 0xF0, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // '3'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x03, 0xC0, 0x03, 0xC0, 0x0F, 0xC0, 0x0F, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0, 0xF3, 0xC0, 0xF3, 0xC0, 0xFF, 0xF0, 0xFF, 0xF0, 0x03, 0xC0, 0x03, 0xC0, // '4'
    0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // '5'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0xC0, 0x0F, 0xC0, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // '6'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, // '7'
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // '8'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0, // '9'
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3F, 0x00, // ':'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // ';'
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x0F, 0x00, 0x0F, 0x00, // '<'
    0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00, // '='
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x03, 0xC0, 0x03, 0xC0, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, // '>'
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, // '?'
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x3F, 0xF0, 0x3F, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, // '@'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'A'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'B'
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, // 'C'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0x00, 0xFF, 0x00, 0xF3, 0xC0, 0xF3, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF3, 0xC0, 0xF3, 0xC0, // 'D'
    0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, // 'E'
    0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, // 'F'
    0xF0, 0x00, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'G'
    0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'H'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // 'I'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0xF0, 0x0F, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0xF3, 0xC0, 0xF3, 0xC0, // 'J'
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF3, 0xC0, 0xF3, 0xC0, 0xFF, 0x00, 0xFF, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xF3, 0xC0, 0xF3, 0xC0, // 'K'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, // 'L'
    0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'M'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFC, 0xF0, 0xFC, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xF3, 0xF0, 0xF3, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'N'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'O'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, // 'P'
    0xF0, 0x00, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xF3, 0xC0, 0xF3, 0xC0, // 'Q'
    0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xC0, 0xFF, 0xC0, 0xFF, 0x00, 0xFF, 0x00, 0xF3, 0xC0, 0xF3, 0xC0, // 'R'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xF0, 0x3F, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, // 'S'
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xF0, 0xFF, 0xF0, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // 'T'
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'U'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0xC0, 0x3F, 0xC0, // 'V'
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, // 'W'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0xC0, 0x3F, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, // 'X'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0xC0, 0x3F, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // 'Y'
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xF0, 0x00, 0xF0, 0x00, // 'Z'
    0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, // '['
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x03, 0xC0, 0x03, 0xC0, 0x00, 0xF0, 0x00, 0xF0, // '\\'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xC0, 0x3F, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, // ']'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x00, 0x0F, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '_'
    0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '`'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0xF0, 0x00, 0xF0, 0x3F, 0xF0, 0x3F, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'a'
    0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0xFC, 0xF0, 0xFC, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'b'
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, // 'c'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x3F, 0xF0, 0x3F, 0xF0, 0xF3, 0xF0, 0xF3, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'd'
    0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0x00, 0xF0, 0x00, // 'e'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0xC0, 0x0F, 0xC0, 0x3C, 0xF0, 0x3C, 0xF0, 0x3C, 0x00, 0x3C, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, // 'f'
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0xF0, 0x00, 0xF0, // 'g'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0xFC, 0xF0, 0xFC, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'h'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // 'i'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x0F, 0xC0, 0x0F, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0xC0, 0xF3, 0xC0, 0xF3, 0xC0, // 'j'
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF3, 0xC0, 0xF3, 0xC0, 0xFF, 0x00, 0xFF, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0xFF, 0x00, 0xFF, 0x00, // 'k'
    0xF3, 0xC0, 0xF3, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // 'l'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'm'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0xFC, 0xF0, 0xFC, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'n'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // 'o'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xC0, 0xFF, 0xC0, 0xF0, 0x00, 0xF0, 0x00, // 'p'
    0xF0, 0x00, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0, 0x3F, 0xF0, 0xF3, 0xF0, 0xF3, 0xF0, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0xF0, 0x00, 0xF0, // 'q'
    0x00, 0xF0, 0x00, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0, 0xFC, 0xF0, 0xFC, 0xF0, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, 0xF0, 0x00, // 'r'
    0xF0, 0x00, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0xF0, 0x00, 0xF0, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0xF0, 0x00, 0xF0, // 's'
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0xF0, 0x3C, 0xF0, // 't'
    0x0F, 0xC0, 0x0F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF3, 0xF0, 0xF3, 0xF0, // 'u'
    0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0xC0, 0x3F, 0xC0, // 'v'
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, // 'w'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0xC0, 0x3F, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3F, 0xC0, 0x3F, 0xC0, // 'x'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0x3F, 0xF0, 0x3F, 0xF0, 0x00, 0xF0, 0x00, 0xF0, // 'y'
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, // 'z'
    0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // '{'
    0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // '|'
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x03, 0xC0, 0x03, 0xC0, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, 0x0F, 0x00, // '}'
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0xFF, 0xF0, 0xFF, 0xF0, 0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00, // '~'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, 0xFF, 0xF0, // DEL
    0xFF, 0xF0, 0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00,
];
