//! Text rendering with the bitmap fonts.
//!
//! Glyphs are addressed by Windows-1251 code; `&str` input is encoded on the
//! fly, Cyrillic letters included. The bundled tables only carry ASCII, other
//! codes need a table supplied through [`Tft::set_custom_font`].

use core::fmt;

use heapless::String;

use crate::fonts::{Font, FontKind};
use crate::{Error, FrameController, Tft};

/// Capacity of the buffer `print_fmt` formats into; longer output is cut
pub const FORMAT_BUFFER_LEN: usize = 256;

const TAB_GLYPHS: u16 = 4;

/// Windows-1251 code of a character, `?` when it has none
pub fn cp1251(c: char) -> u16 {
    match c {
        '\0'..='\x7f' => c as u16,
        'А'..='я' => 0xC0 + (c as u32 - 'А' as u32) as u16,
        'Ё' => 0xA8,
        'ё' => 0xB8,
        _ => b'?' as u16,
    }
}

impl<C: FrameController> Tft<C> {
    /// Swap the current font for one of the bundled tables
    pub fn set_font(&mut self, kind: FontKind, foreground: u16, background: u16) {
        self.font = Font::new(kind, foreground, background);
    }

    pub fn set_custom_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Render one glyph with its top left corner at (x, y).
    ///
    /// Fails with `OutOfRange` if the glyph box does not fit on screen and
    /// with `WrongArgument` if the font has no glyph for `code`.
    pub fn print_char(&mut self, x: u16, y: u16, code: u16) -> Result<(), Error<C::PinError>> {
        let font = self.font;
        let o = self.orientation();
        if x as u32 + font.width() as u32 > o.width as u32
            || y as u32 + font.height() as u32 > o.height as u32
        {
            return Err(Error::OutOfRange);
        }
        let glyph = font.glyph(code).ok_or(Error::WrongArgument)?;

        self.controller
            .set_frame(x, y, x + font.width() - 1, y + font.height() - 1)?;

        let width = font.width() as usize;
        let row_bytes = font.row_bytes();
        let (fg, bg) = (font.foreground, font.background);
        let pixels = glyph
            .chunks(row_bytes)
            .take(font.height() as usize)
            .flat_map(move |row| {
                (0..width).map(move |col| {
                    if row[col / 8] & (0x80 >> (col % 8)) != 0 {
                        fg
                    } else {
                        bg
                    }
                })
            });
        self.controller.write_frame_iter(pixels)
    }

    /// Print a string starting at (x, y).
    ///
    /// Wraps to the next line when a glyph would cross the right edge and back
    /// to the top left corner past the bottom. Stops at the first failure.
    pub fn print_str(&mut self, x: u16, y: u16, s: &str) -> Result<(), Error<C::PinError>> {
        let (fw, fh) = (self.font.width() as u32, self.font.height() as u32);
        let o = self.orientation();
        let (mut x, mut y) = (x as u32, y as u32);

        for c in s.chars() {
            if x + fw > o.width as u32 {
                y += fh;
                x = 0;
            }
            if y + fh > o.height as u32 {
                y = 0;
                x = 0;
            }
            self.print_char(x as u16, y as u16, cp1251(c))?;
            x += fw;
        }
        Ok(())
    }

    /// Print the last `len` decimal digits of `num`, leading zeros shown as
    /// spaces. The last digit is always printed.
    pub fn print_num(
        &mut self,
        x: u16,
        y: u16,
        num: u32,
        len: u8,
    ) -> Result<(), Error<C::PinError>> {
        let mut x = x;
        let mut leading = true;
        for t in 0..len {
            let digit = nth_digit(num, len - t - 1);
            if leading && t < len - 1 && digit == 0 {
                self.print_char(x, y, b' ' as u16)?;
            } else {
                leading = false;
                self.print_char(x, y, b'0' as u16 + digit)?;
            }
            x = x.saturating_add(self.font.width());
        }
        Ok(())
    }

    /// Print the last `len` decimal digits of `num`, zero padded
    pub fn print_num0(
        &mut self,
        x: u16,
        y: u16,
        num: u32,
        len: u8,
    ) -> Result<(), Error<C::PinError>> {
        let mut x = x;
        for t in 0..len {
            self.print_char(x, y, b'0' as u16 + nth_digit(num, len - t - 1))?;
            x = x.saturating_add(self.font.width());
        }
        Ok(())
    }

    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Stream text at the cursor.
    ///
    /// `\n` starts a new line, `\r` returns to the left edge and `\t` skips
    /// four glyph widths. The cursor wraps at the right edge and returns to
    /// the top near the bottom edge. Glyphs that cannot be drawn are skipped;
    /// only bus errors are reported.
    pub fn write_text(&mut self, s: &str) -> Result<(), Error<C::PinError>> {
        let (fw, fh) = (self.font.width(), self.font.height());
        let o = self.orientation();

        for c in s.chars() {
            let (mut x, mut y) = self.cursor;
            match c {
                '\n' => {
                    y = y.saturating_add(fh);
                    x = 0;
                }
                '\r' => x = 0,
                '\t' => x = x.saturating_add(fw * TAB_GLYPHS),
                _ => {
                    if y >= o.height.saturating_sub(fh) {
                        y = 0;
                    }
                    skip_unprintable(self.print_char(x, y, cp1251(c)))?;
                    x = x.saturating_add(fw);
                    if x > o.width.saturating_sub(fw) {
                        y = y.saturating_add(fh);
                        x = 0;
                    }
                }
            }
            self.cursor = (x, y);
        }
        Ok(())
    }

    /// Format into a bounded buffer and stream the result at the cursor.
    ///
    /// Output beyond [`FORMAT_BUFFER_LEN`] bytes is dropped.
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error<C::PinError>> {
        let mut buf = Truncating::default();
        // The buffer never fails; a failing Display impl just ends the output
        let _ = fmt::write(&mut buf, args);
        self.write_text(&buf.text)
    }
}

impl<C: FrameController> fmt::Write for Tft<C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_text(s).map_err(|_| fmt::Error)
    }
}

fn nth_digit(num: u32, power: u8) -> u16 {
    10u32
        .checked_pow(power as u32)
        .map_or(0, |p| (num / p % 10) as u16)
}

fn skip_unprintable<E>(result: Result<(), Error<E>>) -> Result<(), Error<E>> {
    match result {
        Err(Error::OutOfRange | Error::WrongArgument) => Ok(()),
        other => other,
    }
}

#[derive(Default)]
struct Truncating {
    text: String<FORMAT_BUFFER_LEN>,
    full: bool,
}

impl fmt::Write for Truncating {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.full || self.text.push(c).is_err() {
                self.full = true;
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, RED, WHITE};
    use crate::mock::FakeFrames;
    use core::fmt::Write;

    fn tft() -> Tft<FakeFrames> {
        Tft::new(FakeFrames::new(320, 240))
    }

    #[test]
    fn encodes_windows_1251() {
        assert_eq!(cp1251('A'), 0x41);
        assert_eq!(cp1251('А'), 0xC0);
        assert_eq!(cp1251('я'), 0xFF);
        assert_eq!(cp1251('Ё'), 0xA8);
        assert_eq!(cp1251('ё'), 0xB8);
        assert_eq!(cp1251('€'), b'?' as u16);
    }

    #[test]
    fn print_char_streams_glyph_bits_msb_first() {
        let mut tft = tft();
        tft.set_font(FontKind::Normal8, RED, WHITE);
        tft.print_char(10, 20, 'A' as u16).unwrap();

        let glyph = tft.font().glyph('A' as u16).unwrap();
        let fake = tft.controller();
        assert_eq!(fake.frames, vec![(10, 20, 15, 27)]);
        assert_eq!(fake.pixel_writes, 48);
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..6 {
                let expected = if bits & (0x80 >> col) != 0 { RED } else { WHITE };
                assert_eq!(fake.pixel(10 + col, 20 + row as u16), expected);
            }
        }
    }

    #[test]
    fn print_char_checks_glyph_box_and_table() {
        let mut tft = tft();
        assert_eq!(tft.print_char(315, 0, 'A' as u16), Err(Error::OutOfRange));
        assert_eq!(tft.print_char(0, 233, 'A' as u16), Err(Error::OutOfRange));
        assert_eq!(tft.print_char(0, 0, 0x10), Err(Error::WrongArgument));
        assert!(tft.controller().frames.is_empty());
        assert_eq!(tft.print_char(314, 232, 'A' as u16), Ok(()));
    }

    #[test]
    fn print_str_wraps_right_and_bottom() {
        let mut tft = tft();
        tft.print_str(312, 0, "abc").unwrap();
        assert_eq!(
            tft.controller().frames,
            vec![(312, 0, 317, 7), (0, 8, 5, 15), (6, 8, 11, 15)]
        );

        tft.controller_mut().clear_log();
        tft.print_str(100, 236, "a").unwrap();
        assert_eq!(tft.controller().frames, vec![(0, 0, 5, 7)]);
    }

    #[test]
    fn print_str_stops_at_first_failure() {
        let mut tft = tft();
        assert_eq!(tft.print_str(0, 0, "ab\u{1}cd"), Err(Error::WrongArgument));
        assert_eq!(tft.controller().frames.len(), 2);
    }

    #[test]
    fn cyrillic_goes_through_the_remap() {
        static CYRILLIC: [u8; 4 + 64] = {
            let mut table = [0; 4 + 64];
            table[0] = 8;
            table[1] = 1;
            table[2] = 1;
            table[3] = 0x80;
            table[4] = 0xFF;
            table
        };
        let mut tft = tft();
        tft.set_custom_font(Font::from_table(&CYRILLIC, RED, BLACK).unwrap());
        tft.print_str(0, 0, "АБ").unwrap();
        let fake = tft.controller();
        assert_eq!(fake.count(RED), 8);
        assert_eq!(fake.frames.len(), 2);
    }

    fn rendered<F>(draw: F) -> Vec<u16>
    where
        F: FnOnce(&mut Tft<FakeFrames>),
    {
        let mut tft = tft();
        draw(&mut tft);
        let fake = tft.controller();
        (0..8)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .map(|(x, y)| fake.pixel(x, y))
            .collect()
    }

    #[test]
    fn print_num_pads_with_spaces() {
        let expected = rendered(|t| t.print_str(0, 0, "   42").unwrap());
        assert_eq!(rendered(|t| t.print_num(0, 0, 42, 5).unwrap()), expected);

        let expected = rendered(|t| t.print_str(0, 0, "  0").unwrap());
        assert_eq!(rendered(|t| t.print_num(0, 0, 0, 3).unwrap()), expected);

        let expected = rendered(|t| t.print_str(0, 0, "1005").unwrap());
        assert_eq!(rendered(|t| t.print_num(0, 0, 91005, 4).unwrap()), expected);
    }

    #[test]
    fn print_num0_pads_with_zeros() {
        let expected = rendered(|t| t.print_str(0, 0, "00042").unwrap());
        assert_eq!(rendered(|t| t.print_num0(0, 0, 42, 5).unwrap()), expected);

        let expected = rendered(|t| t.print_str(0, 0, "004294967295").unwrap());
        assert_eq!(rendered(|t| t.print_num0(0, 0, u32::MAX, 12).unwrap()), expected);
    }

    #[test]
    fn cursor_honours_control_characters() {
        let mut tft = tft();
        tft.write_text("a\tb\nc\rd").unwrap();
        let frames: Vec<_> = tft
            .controller()
            .frames
            .iter()
            .map(|&(x, y, _, _)| (x, y))
            .collect();
        assert_eq!(frames, vec![(0, 0), (30, 0), (0, 8), (0, 8)]);
        assert_eq!(tft.cursor(), (6, 8));
    }

    #[test]
    fn cursor_wraps_at_edges() {
        let mut tft = tft();
        tft.set_cursor(312, 0);
        tft.write_text("ab").unwrap();
        assert_eq!(tft.controller().frames[1].0, 0);
        assert_eq!(tft.controller().frames[1].1, 8);

        tft.controller_mut().clear_log();
        tft.set_cursor(0, 232);
        tft.write_text("x").unwrap();
        assert_eq!(tft.controller().frames, vec![(0, 0, 5, 7)]);
    }

    #[test]
    fn cursor_skips_missing_glyphs() {
        let mut tft = tft();
        tft.write_text("a\u{1}b").unwrap();
        assert_eq!(tft.controller().frames.len(), 2);
        assert_eq!(tft.cursor(), (18, 0));
    }

    #[test]
    fn formatted_output_is_bounded() {
        let mut tft = Tft::new(FakeFrames::new(2000, 2000));
        let long = "x".repeat(300);
        tft.print_fmt(format_args!("{}", long)).unwrap();
        assert_eq!(tft.controller().frames.len(), FORMAT_BUFFER_LEN);
    }

    #[test]
    fn fmt_write_streams_at_cursor() {
        let mut tft = tft();
        write!(tft, "k={}", 5).unwrap();
        assert_eq!(tft.controller().frames.len(), 3);
        assert_eq!(tft.cursor(), (18, 0));
    }

    #[test]
    fn set_font_swaps_metrics() {
        let mut tft = tft();
        tft.set_font(FontKind::Normal20, WHITE, BLACK);
        assert_eq!((tft.font().width(), tft.font().height()), (18, 24));
        tft.print_char(0, 0, '7' as u16).unwrap();
        assert_eq!(tft.controller().pixel_writes, 18 * 24);
    }
}
