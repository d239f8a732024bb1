//! Drawing primitives on top of a [`FrameController`].
//!
//! Every primitive works in logical (rotated) coordinates and reaches the
//! hardware only through frames: one `set_frame` followed by a burst of pixels
//! in raster order.

use core::iter::repeat;

use embedded_hal::delay::DelayNs;

use crate::color::{BLACK, PALETTE, WHITE};
use crate::fonts::{Font, FontKind};
use crate::{DisplayOrientation, Error, FrameController};

/// Rows per band drawn by [`Tft::colors_test`]
const COLOR_BAND_ROWS: u16 = 15;

/// Square pens are limited to fewer pixels than a 16-bit counter holds
const MAX_POINT_PIXELS: u32 = 65535;

/// Drawing context: the controller plus the current font and text cursor
pub struct Tft<C> {
    pub(crate) controller: C,
    pub(crate) font: Font,
    pub(crate) cursor: (u16, u16),
}

impl<C> Tft<C> {
    /// Wrap a controller. The font defaults to 6x8 regular, white on black.
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            font: Font::new(FontKind::Normal8, WHITE, BLACK),
            cursor: (0, 0),
        }
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    pub fn release(self) -> C {
        self.controller
    }
}

impl<C: FrameController> Tft<C> {
    /// Bring up the controller, restore the default font and cursor and fill
    /// the screen with `color`
    pub fn init<D: DelayNs>(
        &mut self,
        delay: &mut D,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        self.controller.init(delay)?;
        self.font = Font::new(FontKind::Normal8, WHITE, BLACK);
        self.cursor = (0, 0);
        self.fill_screen(color)
    }

    pub fn orientation(&self) -> DisplayOrientation {
        self.controller.orientation()
    }

    pub fn width(&self) -> u16 {
        self.controller.orientation().width
    }

    pub fn height(&self) -> u16 {
        self.controller.orientation().height
    }

    pub fn fill_screen(&mut self, color: u16) -> Result<(), Error<C::PinError>> {
        self.controller.fill_screen(color)
    }

    pub fn rotate_screen(&mut self, degrees: u16) -> Result<(), Error<C::PinError>> {
        self.controller.rotate(degrees)
    }

    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<C::PinError>> {
        self.controller.reset(delay)
    }

    /// Filled square of side `size` with its top left corner at (w, h).
    ///
    /// Fails with `OutOfRange` when `w + size` or `h + size` reaches the
    /// screen edge or the square holds 65535 pixels or more, and with
    /// `WrongArgument` for a zero size.
    pub fn draw_point(
        &mut self,
        w: u16,
        h: u16,
        size: u16,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        let o = self.orientation();
        if w as u32 + size as u32 >= o.width as u32 || h as u32 + size as u32 >= o.height as u32 {
            return Err(Error::OutOfRange);
        }
        let count = size as u32 * size as u32;
        if count >= MAX_POINT_PIXELS {
            return Err(Error::OutOfRange);
        }
        if size == 0 {
            return Err(Error::WrongArgument);
        }
        self.controller.set_frame(w, h, w + size - 1, h + size - 1)?;
        self.controller
            .write_frame_iter(repeat(color).take(count as usize))
    }

    /// Pen stamp for the outline primitives, silently skipped off screen
    fn pen(&mut self, x: i32, y: i32, width: u16, color: u16) -> Result<(), Error<C::PinError>> {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return Ok(());
        };
        skip_off_screen(self.draw_point(x, y, width, color))
    }

    /// Bresenham line from (x1, y1) to (x2, y2), both ends included, drawn
    /// with a square pen of side `width`
    pub fn draw_line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        width: u16,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        let (mut x, mut y) = (x1 as i32, y1 as i32);
        let (x2, y2) = (x2 as i32, y2 as i32);
        let dx = (x2 - x).abs();
        let dy = (y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.pen(x, y, width, color)?;
            if x == x2 && y == y2 {
                return Ok(());
            }
            let e2 = err * 2;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Rectangle outline spanning (x, y) to (x + long_x, y + long_y)
    pub fn draw_rectangle(
        &mut self,
        x: u16,
        y: u16,
        long_x: u16,
        long_y: u16,
        width: u16,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        let x2 = x.saturating_add(long_x);
        let y2 = y.saturating_add(long_y);
        self.draw_line(x, y, x2, y, width, color)?;
        self.draw_line(x, y, x, y2, width, color)?;
        self.draw_line(x, y2, x2, y2, width, color)?;
        self.draw_line(x2, y, x2, y2, width, color)
    }

    /// Solid `long_x` by `long_y` rectangle in a single frame
    pub fn fill_rectangle(
        &mut self,
        x: u16,
        y: u16,
        long_x: u16,
        long_y: u16,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        let x2 = far_corner(x, long_x).ok_or(Error::OutOfRange)?;
        let y2 = far_corner(y, long_y).ok_or(Error::OutOfRange)?;
        self.controller.set_frame(x, y, x2, y2)?;
        let count = long_x as usize * long_y as usize;
        self.controller.write_frame_iter(repeat(color).take(count))
    }

    pub fn draw_circle(
        &mut self,
        x0: u16,
        y0: u16,
        radius: u16,
        width: u16,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        let (cx, cy) = (x0 as i32, y0 as i32);
        for (x, y) in CircleSteps::new(radius) {
            self.pen(cx + x, cy + y, width, color)?;
            self.pen(cx + x, cy - y, width, color)?;
            self.pen(cx - x, cy - y, width, color)?;
            self.pen(cx - x, cy + y, width, color)?;
        }
        Ok(())
    }

    pub fn fill_circle(
        &mut self,
        x0: u16,
        y0: u16,
        radius: u16,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        let (cx, cy) = (x0 as i32, y0 as i32);
        for (x, y) in CircleSteps::new(radius) {
            skip_off_screen(self.draw_fast_v_line(cx - x, cy - y, 2 * y + 1, color))?;
            skip_off_screen(self.draw_fast_v_line(cx + x, cy - y, 2 * y + 1, color))?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        width: u16,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        self.draw_line(x0, y0, x1, y1, width, color)?;
        self.draw_line(x1, y1, x2, y2, width, color)?;
        self.draw_line(x2, y2, x0, y0, width, color)
    }

    /// Scanline triangle fill.
    ///
    /// Vertices are sorted by y. The upper half walks edges 0-1 and 0-2, the
    /// lower half edges 1-2 and 0-2; each edge keeps an integer accumulator
    /// advanced by its dx per row and divided by its dy on use. A triangle
    /// with all three vertices on one row is a single span. The first span
    /// that fails is returned.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        let mut v = [
            (x0 as i32, y0 as i32),
            (x1 as i32, y1 as i32),
            (x2 as i32, y2 as i32),
        ];
        v.sort_unstable_by_key(|&(_, y)| y);
        let [(x0, y0), (x1, y1), (x2, y2)] = v;

        if y0 == y2 {
            let a = x0.min(x1).min(x2);
            let b = x0.max(x1).max(x2);
            return self.draw_fast_h_line(a, y0, b - a + 1, color);
        }

        let (dx01, dy01) = (x1 - x0, y1 - y0);
        let (dx02, dy02) = (x2 - x0, y2 - y0);
        let (dx12, dy12) = (x2 - x1, y2 - y1);
        let (mut sa, mut sb) = (0, 0);

        // A flat bottom includes row y1 here, otherwise the lower half owns it
        let last = if y1 == y2 { y1 } else { y1 - 1 };
        let mut y = y0;
        while y <= last {
            let a = x0 + sa / dy01;
            let b = x0 + sb / dy02;
            sa += dx01;
            sb += dx02;
            self.span(a, b, y, color)?;
            y += 1;
        }

        sa = dx12 * (y - y1);
        sb = dx02 * (y - y0);
        while y <= y2 {
            let a = x1 + sa / dy12;
            let b = x0 + sb / dy02;
            sa += dx12;
            sb += dx02;
            self.span(a, b, y, color)?;
            y += 1;
        }
        Ok(())
    }

    fn span(&mut self, a: i32, b: i32, y: i32, color: u16) -> Result<(), Error<C::PinError>> {
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        self.draw_fast_h_line(a, y, b - a + 1, color)
    }

    /// One pixel high line, clipped to the screen.
    ///
    /// Fails with `OutOfRange` when the line lies entirely off screen or the
    /// length is not positive.
    pub fn draw_fast_h_line(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        let o = self.orientation();
        let (width, height) = (o.width as i32, o.height as i32);
        if length <= 0 || y < 0 || y >= height || x >= width {
            return Err(Error::OutOfRange);
        }
        let x2 = x.saturating_add(length - 1);
        if x2 < 0 {
            return Err(Error::OutOfRange);
        }
        let x = x.max(0);
        let x2 = x2.min(width - 1);

        self.controller
            .set_frame(x as u16, y as u16, x2 as u16, y as u16)?;
        self.controller
            .write_frame_iter(repeat(color).take((x2 - x + 1) as usize))
    }

    /// One pixel wide line, clipped to the screen.
    ///
    /// Fails with `OutOfRange` when the line lies entirely off screen or the
    /// length is not positive.
    pub fn draw_fast_v_line(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        color: u16,
    ) -> Result<(), Error<C::PinError>> {
        let o = self.orientation();
        let (width, height) = (o.width as i32, o.height as i32);
        if length <= 0 || x < 0 || x >= width || y >= height {
            return Err(Error::OutOfRange);
        }
        let y2 = y.saturating_add(length - 1);
        if y2 < 0 {
            return Err(Error::OutOfRange);
        }
        let y = y.max(0);
        let y2 = y2.min(height - 1);

        self.controller
            .set_frame(x as u16, y as u16, x as u16, y2 as u16)?;
        self.controller
            .write_frame_iter(repeat(color).take((y2 - y + 1) as usize))
    }

    /// Blit an image whose first two words are its width and height, followed
    /// by the rgb565 pixels in raster order
    pub fn pic_from_flash(
        &mut self,
        x: u16,
        y: u16,
        img: &[u16],
    ) -> Result<(), Error<C::PinError>> {
        let [width, height, pixels @ ..] = img else {
            return Err(Error::WrongArgument);
        };
        let count = *width as usize * *height as usize;
        let pixels = pixels.get(..count).ok_or(Error::WrongArgument)?;

        let x2 = far_corner(x, *width).ok_or(Error::OutOfRange)?;
        let y2 = far_corner(y, *height).ok_or(Error::OutOfRange)?;
        self.controller.set_frame(x, y, x2, y2)?;
        self.controller.write_frame_iter(pixels.iter().copied())
    }

    /// Diagnostic pattern: 15-row bands of every palette color from the top
    pub fn colors_test(&mut self) -> Result<(), Error<C::PinError>> {
        self.fill_screen(BLACK)?;

        let o = self.orientation();
        let rows = o.height.min(PALETTE.len() as u16 * COLOR_BAND_ROWS);
        if rows == 0 {
            return Ok(());
        }
        self.controller.set_frame(0, 0, o.width - 1, rows - 1)?;

        let width = o.width as usize;
        self.controller.write_frame_iter(
            (0..rows)
                .flat_map(|row| repeat(PALETTE[(row / COLOR_BAND_ROWS) as usize]).take(width)),
        )
    }
}

fn far_corner(origin: u16, length: u16) -> Option<u16> {
    origin.checked_add(length.checked_sub(1)?)
}

fn skip_off_screen<E>(result: Result<(), Error<E>>) -> Result<(), Error<E>> {
    match result {
        Err(Error::OutOfRange) => Ok(()),
        other => other,
    }
}

/// Midpoint circle walk over one quadrant, yielding (x, y) offsets with x
/// running from -radius up to 0
struct CircleSteps {
    x: i32,
    y: i32,
    err: i32,
}

impl CircleSteps {
    fn new(radius: u16) -> Self {
        let r = radius as i32;
        Self {
            x: -r,
            y: 0,
            err: 2 - 2 * r,
        }
    }
}

impl Iterator for CircleSteps {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x > 0 {
            return None;
        }
        let step = (self.x, self.y);
        let mut e2 = self.err;
        if e2 <= self.y {
            self.y += 1;
            self.err += self.y * 2 + 1;
            if -self.x == self.y && e2 <= self.x {
                e2 = 0;
            }
        }
        if e2 > self.x {
            self.x += 1;
            self.err += self.x * 2 + 1;
        }
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, GRAYBLUE, RED};
    use crate::mock::{FakeDelay, FakeFrames, FakePanel, NoopPin};
    use crate::{DisplaySize320x240, Ili9325};

    fn frames(width: u16, height: u16) -> Tft<FakeFrames> {
        Tft::new(FakeFrames::new(width, height))
    }

    #[test]
    fn draw_point_writes_size_squared_pixels() {
        let mut tft = frames(320, 240);
        tft.draw_point(10, 20, 3, RED).unwrap();
        let fake = tft.controller();
        assert_eq!(fake.frames, vec![(10, 20, 12, 22)]);
        assert_eq!(fake.pixel_writes, 9);
        assert_eq!(fake.count(RED), 9);
    }

    #[test]
    fn draw_point_range_checks() {
        let mut tft = frames(320, 240);
        assert_eq!(tft.draw_point(317, 0, 3, RED), Err(Error::OutOfRange));
        assert_eq!(tft.draw_point(0, 237, 3, RED), Err(Error::OutOfRange));
        assert_eq!(tft.draw_point(316, 236, 3, RED), Ok(()));
        assert_eq!(tft.draw_point(5, 5, 0, RED), Err(Error::WrongArgument));

        let mut tft = frames(1000, 1000);
        assert_eq!(tft.draw_point(0, 0, 255, RED), Ok(()));
        assert_eq!(tft.controller().pixel_writes, 255 * 255);
        assert_eq!(tft.draw_point(0, 0, 256, RED), Err(Error::OutOfRange));
        assert_eq!(tft.controller().pixel_writes, 255 * 255);
    }

    #[test]
    fn fast_h_line_off_screen_writes_nothing() {
        let mut tft = frames(320, 240);
        assert_eq!(tft.draw_fast_h_line(0, 240, 10, RED), Err(Error::OutOfRange));
        assert_eq!(tft.draw_fast_h_line(320, 0, 10, RED), Err(Error::OutOfRange));
        assert_eq!(tft.draw_fast_h_line(-20, 0, 10, RED), Err(Error::OutOfRange));
        assert_eq!(tft.draw_fast_h_line(0, 0, 0, RED), Err(Error::OutOfRange));
        assert_eq!(tft.controller().pixel_writes, 0);
        assert!(tft.controller().frames.is_empty());
    }

    #[test]
    fn fast_lines_clip_to_screen_edges() {
        let mut tft = frames(320, 240);
        tft.draw_fast_h_line(-5, 7, 10, RED).unwrap();
        assert_eq!(tft.controller().frames, vec![(0, 7, 4, 7)]);
        assert_eq!(tft.controller().pixel_writes, 5);

        let mut tft = frames(320, 240);
        tft.draw_fast_h_line(315, 7, 10, RED).unwrap();
        assert_eq!(tft.controller().frames, vec![(315, 7, 319, 7)]);

        let mut tft = frames(320, 240);
        tft.draw_fast_v_line(3, 230, 100, BLUE).unwrap();
        assert_eq!(tft.controller().frames, vec![(3, 230, 3, 239)]);
        assert_eq!(tft.controller().pixel_writes, 10);
    }

    #[test]
    fn fill_rectangle_end_to_end() {
        for degrees in [0, 90, 180, 270] {
            let panel = FakePanel::new();
            let mut tft = Tft::new(Ili9325::new(panel.clone(), NoopPin, DisplaySize320x240));
            tft.init(&mut FakeDelay::default(), BLACK).unwrap();
            tft.rotate_screen(degrees).unwrap();

            tft.fill_screen(BLACK).unwrap();
            tft.fill_rectangle(10, 10, 5, 5, WHITE).unwrap();

            let o = tft.orientation();
            assert_eq!(panel.count_color(&o, WHITE), 25);
            assert_eq!(panel.count_color(&o, BLACK), 320 * 240 - 25);
            for y in 10..15 {
                for x in 10..15 {
                    assert_eq!(panel.logical_pixel(&o, x, y), WHITE);
                }
            }
        }
    }

    #[test]
    fn fill_rectangle_rejects_bad_geometry() {
        let mut tft = frames(320, 240);
        assert_eq!(tft.fill_rectangle(300, 0, 30, 5, RED), Err(Error::OutOfRange));
        assert_eq!(tft.fill_rectangle(0, 0, 0, 5, RED), Err(Error::OutOfRange));
        assert_eq!(tft.controller().pixel_writes, 0);
    }

    #[test]
    fn lines_cover_all_octants() {
        let ends = [(20, 10), (30, 20), (30, 30), (20, 30), (10, 30), (0, 20), (0, 10), (10, 0)];
        for (x2, y2) in ends {
            let mut tft = frames(320, 240);
            tft.draw_line(15, 15, x2, y2, 1, RED).unwrap();
            let fake = tft.controller();
            assert_eq!(fake.pixel(15, 15), RED);
            assert_eq!(fake.pixel(x2, y2), RED);
            let dx = (x2 as i32 - 15).abs();
            let dy = (y2 as i32 - 15).abs();
            assert_eq!(fake.count(RED) as i32, dx.max(dy) + 1);
        }
    }

    #[test]
    fn line_leaving_the_screen_is_clipped() {
        let mut tft = frames(320, 240);
        tft.draw_line(300, 5, 400, 5, 1, RED).unwrap();
        // draw_point keeps clear of the last column
        assert_eq!(tft.controller().count(RED), 19);
    }

    #[test]
    fn circle_outline_touches_cardinal_points() {
        let mut tft = frames(320, 240);
        tft.draw_circle(50, 50, 10, 1, RED).unwrap();
        let fake = tft.controller();
        assert_eq!(fake.pixel(40, 50), RED);
        assert_eq!(fake.pixel(60, 50), RED);
        assert_eq!(fake.pixel(50, 40), RED);
        assert_eq!(fake.pixel(50, 60), RED);
        assert_eq!(fake.pixel(50, 50), 0);
    }

    #[test]
    fn filled_circle_is_solid_and_bounded() {
        let mut tft = frames(320, 240);
        tft.fill_circle(50, 50, 10, RED).unwrap();
        let fake = tft.controller();
        assert_eq!(fake.pixel(50, 50), RED);
        assert_eq!(fake.pixel(60, 50), RED);
        assert_eq!(fake.pixel(50, 40), RED);
        assert_eq!(fake.pixel(55, 55), RED);
        assert_eq!(fake.pixel(58, 58), 0);
        assert_eq!(fake.pixel(61, 50), 0);
    }

    #[test]
    fn filled_circle_near_edge_is_clipped() {
        let mut tft = frames(320, 240);
        assert_eq!(tft.fill_circle(2, 2, 10, RED), Ok(()));
        assert_eq!(tft.controller().pixel(0, 0), RED);
    }

    #[test]
    fn fill_triangle_covers_interior_only() {
        let mut tft = frames(320, 240);
        tft.fill_triangle(10, 10, 30, 10, 10, 30, RED).unwrap();
        let fake = tft.controller();
        assert_eq!(fake.pixel(10, 10), RED);
        assert_eq!(fake.pixel(30, 10), RED);
        assert_eq!(fake.pixel(10, 30), RED);
        assert_eq!(fake.pixel(15, 15), RED);
        assert_eq!(fake.pixel(25, 25), 0);
        assert_eq!(fake.pixel(9, 20), 0);
    }

    #[test]
    fn flat_triangle_is_a_single_span() {
        let mut tft = frames(320, 240);
        assert_eq!(tft.fill_triangle(12, 10, 5, 10, 20, 10, RED), Ok(()));
        let fake = tft.controller();
        assert_eq!(fake.frames, vec![(5, 10, 20, 10)]);
        assert_eq!(fake.count(RED), 16);
    }

    #[test]
    fn fill_triangle_reports_first_failed_span() {
        let mut tft = frames(320, 240);
        assert_eq!(
            tft.fill_triangle(10, 200, 30, 260, 50, 200, RED),
            Err(Error::OutOfRange)
        );
        assert_eq!(tft.controller().pixel(30, 200), RED);
    }

    #[test]
    fn pic_from_flash_blits_in_raster_order() {
        let mut tft = frames(320, 240);
        let img = [2, 2, 1, 2, 3, 4];
        tft.pic_from_flash(7, 8, &img).unwrap();
        let fake = tft.controller();
        assert_eq!(fake.pixel(7, 8), 1);
        assert_eq!(fake.pixel(8, 8), 2);
        assert_eq!(fake.pixel(7, 9), 3);
        assert_eq!(fake.pixel(8, 9), 4);

        assert_eq!(tft.pic_from_flash(0, 0, &[2, 2, 1, 2]), Err(Error::WrongArgument));
        assert_eq!(tft.pic_from_flash(0, 0, &[2]), Err(Error::WrongArgument));
        assert_eq!(tft.pic_from_flash(319, 0, &img), Err(Error::OutOfRange));
    }

    #[test]
    fn colors_test_draws_palette_bands() {
        let mut tft = frames(320, 240);
        tft.colors_test().unwrap();
        let fake = tft.controller();
        assert_eq!(fake.pixel(0, 0), WHITE);
        assert_eq!(fake.pixel(319, 14), WHITE);
        assert_eq!(fake.pixel(0, 15), BLACK);
        assert_eq!(fake.pixel(100, 30), BLUE);
        assert_eq!(fake.pixel(319, 209), GRAYBLUE);
        assert_eq!(fake.pixel(0, 210), BLACK);
    }

    #[test]
    fn rotation_passes_through() {
        let mut tft = frames(320, 240);
        tft.rotate_screen(90).unwrap();
        assert_eq!((tft.width(), tft.height()), (240, 320));
        assert_eq!(tft.rotate_screen(100), Err(Error::WrongArgument));
    }

    #[test]
    fn circle_walk_visits_quadrant_once() {
        let steps: Vec<_> = CircleSteps::new(0).collect();
        assert_eq!(steps, vec![(0, 0)]);

        let steps: Vec<_> = CircleSteps::new(5).collect();
        assert_eq!(steps.first(), Some(&(-5, 0)));
        assert_eq!(steps.last().map(|s| s.0), Some(0));
        assert!(steps.iter().all(|&(x, y)| {
            let d = x * x + y * y;
            (16..=36).contains(&d)
        }));
    }
}
