//! 6x8 bold ASCII glyphs.

#[rustfmt::skip]
pub(super) static BOLD_8: [u8; 4 + 96 * 8] = [
    6, 8, 8, 32,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x30, 0x00, // '!'
    0x78, 0x78, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, // '"'
    0x78, 0x78, 0xFC, 0x78, 0xFC, 0x78, 0x78, 0x00, // '#'
    0x30, 0x7C, 0xF0, 0x78, 0x3C, 0xF8, 0x30, 0x00, // '$'
    0xE0, 0xEC, 0x18, 0x30, 0x60, 0xDC, 0x1C, 0x00, // '%'
    0x70, 0xD8, 0xF0, 0x60, 0xFC, 0xD8, 0x7C, 0x00, // '&'
    0x70, 0x30, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
    0x18, 0x30, 0x60, 0x60, 0x60, 0x30, 0x18, 0x00, // '('
    0x60, 0x30, 0x18, 0x18, 0x18, 0x30, 0x60, 0x00, // ')'
    0x00, 0x78, 0x30, 0xFC, 0x30, 0x78, 0x00, 0x00, // '*'
    0x00, 0x30, 0x30, 0xFC, 0x30, 0x30, 0x00, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x30, 0x60, 0x00, // ','
    0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x00, // '.'
    0x00, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x00, 0x00, // '/'
    0x78, 0xCC, 0xDC, 0xFC, 0xEC, 0xCC, 0x78, 0x00, // '0'
    0x30, 0x70, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // '1'
    0x78, 0xCC, 0x0C, 0x18, 0x30, 0x60, 0xFC, 0x00, // '2'
    0xFC, 0x18, 0x30, 0x18, 0x0C, 0xCC, 0x78, 0x00, // '3'
    0x18, 0x38, 0x78, 0xD8, 0xFC, 0x18, 0x18, 0x00, // '4'
    0xFC, 0xC0, 0xF8, 0x0C, 0x0C, 0xCC, 0x78, 0x00, // '5'
    0x38, 0x60, 0xC0, 0xF8, 0xCC, 0xCC, 0x78, 0x00, // '6'
    0xFC, 0x0C, 0x18, 0x30, 0x60, 0x60, 0x60, 0x00, // '7'
    0x78, 0xCC, 0xCC, 0x78, 0xCC, 0xCC, 0x78, 0x00, // '8'
    0x78, 0xCC, 0xCC, 0x7C, 0x0C, 0x18, 0x70, 0x00, // '9'
    0x00, 0x70, 0x70, 0x00, 0x70, 0x70, 0x00, 0x00, // ':'
    0x00, 0x70, 0x70, 0x00, 0x70, 0x30, 0x60, 0x00, // ';'
    0x18, 0x30, 0x60, 0xC0, 0x60, 0x30, 0x18, 0x00, // '<'
    0x00, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x00, // '='
    0x60, 0x30, 0x18, 0x0C, 0x18, 0x30, 0x60, 0x00, // '>'
    0x78, 0xCC, 0x0C, 0x18, 0x30, 0x00, 0x30, 0x00, // '?'
    0x78, 0xCC, 0x0C, 0x7C, 0xFC, 0xFC, 0x78, 0x00, // '@'
    0x78, 0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00, // 'A'
    0xF8, 0xCC, 0xCC, 0xF8, 0xCC, 0xCC, 0xF8, 0x00, // 'B'
    0x78, 0xCC, 0xC0, 0xC0, 0xC0, 0xCC, 0x78, 0x00, // 'C'
    0xF0, 0xD8, 0xCC, 0xCC, 0xCC, 0xD8, 0xF0, 0x00, // 'D'
    0xFC, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xFC, 0x00, // 'E'
    0xFC, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xC0, 0x00, // 'F'
    0x78, 0xCC, 0xC0, 0xFC, 0xCC, 0xCC, 0x7C, 0x00, // 'G'
    0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00, // 'H'
    0x78, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // 'I'
    0x3C, 0x18, 0x18, 0x18, 0x18, 0xD8, 0x70, 0x00, // 'J'
    0xCC, 0xD8, 0xF0, 0xE0, 0xF0, 0xD8, 0xCC, 0x00, // 'K'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFC, 0x00, // 'L'
    0xCC, 0xFC, 0xFC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00, // 'M'
    0xCC, 0xCC, 0xEC, 0xFC, 0xDC, 0xCC, 0xCC, 0x00, // 'N'
    0x78, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // 'O'
    0xF8, 0xCC, 0xCC, 0xF8, 0xC0, 0xC0, 0xC0, 0x00, // 'P'
    0x78, 0xCC, 0xCC, 0xCC, 0xFC, 0xD8, 0x7C, 0x00, // 'Q'
    0xF8, 0xCC, 0xCC, 0xF8, 0xF0, 0xD8, 0xCC, 0x00, // 'R'
    0x7C, 0xC0, 0xC0, 0x78, 0x0C, 0x0C, 0xF8, 0x00, // 'S'
    0xFC, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, // 'T'
    0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // 'U'
    0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00, // 'V'
    0xCC, 0xCC, 0xCC, 0xFC, 0xFC, 0xFC, 0x78, 0x00, // 'W'
    0xCC, 0xCC, 0x78, 0x30, 0x78, 0xCC, 0xCC, 0x00, // 'X'
    0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x30, 0x30, 0x00, // 'Y'
    0xFC, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0xFC, 0x00, // 'Z'
    0x78, 0x60, 0x60, 0x60, 0x60, 0x60, 0x78, 0x00, // '['
    0x00, 0xC0, 0x60, 0x30, 0x18, 0x0C, 0x00, 0x00, // '\\'
    0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x78, 0x00, // ']'
    0x30, 0x78, 0xCC, 0x00, 0x00, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, // '_'
    0x60, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, // '`'
    0x00, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x7C, 0x00, // 'a'
    0xC0, 0xC0, 0xF8, 0xEC, 0xCC, 0xCC, 0xF8, 0x00, // 'b'
    0x00, 0x00, 0x78, 0xC0, 0xC0, 0xCC, 0x78, 0x00, // 'c'
    0x0C, 0x0C, 0x7C, 0xDC, 0xCC, 0xCC, 0x7C, 0x00, // 'd'
    0x00, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // 'e'
    0x38, 0x6C, 0x60, 0xF0, 0x60, 0x60, 0x60, 0x00, // 'f'
    0x00, 0x7C, 0xCC, 0xCC, 0x7C, 0x0C, 0x78, 0x00, // 'g'
    0xC0, 0xC0, 0xF8, 0xEC, 0xCC, 0xCC, 0xCC, 0x00, // 'h'
    0x30, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // 'i'
    0x18, 0x00, 0x38, 0x18, 0x18, 0xD8, 0x70, 0x00, // 'j'
    0xC0, 0xC0, 0xD8, 0xF0, 0xE0, 0xF0, 0xD8, 0x00, // 'k'
    0x70, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // 'l'
    0x00, 0x00, 0xF8, 0xFC, 0xFC, 0xCC, 0xCC, 0x00, // 'm'
    0x00, 0x00, 0xF8, 0xEC, 0xCC, 0xCC, 0xCC, 0x00, // 'n'
    0x00, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // 'o'
    0x00, 0x00, 0xF8, 0xCC, 0xF8, 0xC0, 0xC0, 0x00, // 'p'
    0x00, 0x00, 0x7C, 0xDC, 0x7C, 0x0C, 0x0C, 0x00, // 'q'
    0x00, 0x00, 0xF8, 0xEC, 0xC0, 0xC0, 0xC0, 0x00, // 'r'
    0x00, 0x00, 0x78, 0xC0, 0x78, 0x0C, 0xF8, 0x00, // 's'
    0x60, 0x60, 0xF0, 0x60, 0x60, 0x6C, 0x38, 0x00, // 't'
    0x00, 0x00, 0xCC, 0xCC, 0xCC, 0xDC, 0x7C, 0x00, // 'u'
    0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00, // 'v'
    0x00, 0x00, 0xCC, 0xCC, 0xFC, 0xFC, 0x78, 0x00, // 'w'
    0x00, 0x00, 0xCC, 0x78, 0x30, 0x78, 0xCC, 0x00, // 'x'
    0x00, 0x00, 0xCC, 0xCC, 0x7C, 0x0C, 0x78, 0x00, // 'y'
    0x00, 0x00, 0xFC, 0x18, 0x30, 0x60, 0xFC, 0x00, // 'z'
    0x18, 0x30, 0x30, 0x60, 0x30, 0x30, 0x18, 0x00, // '{'
    0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, // '|'
    0x60, 0x30, 0x30, 0x18, 0x30, 0x30, 0x60, 0x00, // '}'
    0x00, 0x00, 0x60, 0xFC, 0x18, 0x00, 0x00, 0x00, // '~'
    0xFC, 0xFC, 0xFC, 0xFC, 0xFC, 0xFC, 0xFC, 0x00, // DEL
];
