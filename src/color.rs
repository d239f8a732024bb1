//! rgb565 color constants.

pub const WHITE: u16 = 0xFFFF;
pub const BLACK: u16 = 0x0000;
pub const BLUE: u16 = 0x001F;
pub const RED: u16 = 0xF800;
pub const MAGENTA: u16 = 0xF81F;
pub const GREEN: u16 = 0x07E0;
pub const CYAN: u16 = 0x7FFF;
pub const YELLOW: u16 = 0xFFE0;
pub const BROWN: u16 = 0xBC40;
pub const BRRED: u16 = 0xFC07;
pub const GRAY: u16 = 0x8430;
pub const DARKBLUE: u16 = 0x01CF;
pub const LIGHTBLUE: u16 = 0x7D7C;
pub const GRAYBLUE: u16 = 0x5458;

/// Every named color, in the order the color test draws them
pub const PALETTE: [u16; 14] = [
    WHITE, BLACK, BLUE, RED, MAGENTA, GREEN, CYAN, YELLOW, BROWN, BRRED, GRAY, DARKBLUE,
    LIGHTBLUE, GRAYBLUE,
];

/// Pack 8-bit channels into rgb565, dropping the low bits
pub const fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_channels() {
        assert_eq!(rgb565(255, 255, 255), WHITE);
        assert_eq!(rgb565(255, 0, 0), RED);
        assert_eq!(rgb565(0, 255, 0), GREEN);
        assert_eq!(rgb565(0, 0, 255), BLUE);
        assert_eq!(rgb565(0, 0, 0), BLACK);
    }
}
