use crate::{Error, Ili9325};
use embedded_graphics_core::{
    pixelcolor::{raw::RawU16, Rgb565},
    prelude::*,
    primitives::Rectangle,
};
use embedded_hal::digital::OutputPin;

impl<IFACE, RESET> OriginDimensions for Ili9325<IFACE, RESET> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<PinE, IFACE, RESET> DrawTarget for Ili9325<IFACE, RESET>
where
    IFACE: display_interface::WriteOnlyDataCommand,
    RESET: OutputPin<Error = PinE>,
{
    type Error = Error<PinE>;

    type Color = Rgb565;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let screen = self.bounding_box();
        for Pixel(point, color) in pixels.into_iter().filter(|p| screen.contains(p.0)) {
            self.draw_pixel(point.x as u16, point.y as u16, raw(color))?;
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let visible = area.intersection(&self.bounding_box());
        if !self.open_frame(&visible)? {
            return Ok(());
        }

        if *area == visible {
            let count = area.size.width as usize * area.size.height as usize;
            self.write_frame_iter(colors.into_iter().take(count).map(raw))
        } else {
            // Drop the colors of pixels outside the frame
            let pixels = area
                .points()
                .zip(colors)
                .filter_map(|(point, color)| visible.contains(point).then(|| raw(color)));
            self.write_frame_iter(pixels)
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let visible = area.intersection(&self.bounding_box());
        if !self.open_frame(&visible)? {
            return Ok(());
        }
        let count = visible.size.width as usize * visible.size.height as usize;
        self.write_frame_iter(core::iter::repeat(raw(color)).take(count))
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(raw(color))
    }
}

impl<PinE, IFACE, RESET> Ili9325<IFACE, RESET>
where
    IFACE: display_interface::WriteOnlyDataCommand,
    RESET: OutputPin<Error = PinE>,
{
    /// Open a frame over an on-screen area, `false` when the area is empty
    fn open_frame(&mut self, area: &Rectangle) -> Result<bool, Error<PinE>> {
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(false);
        };
        self.set_frame(
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        )?;
        Ok(true)
    }
}

fn raw(color: Rgb565) -> u16 {
    RawU16::from(color).into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FakeDelay, FakePanel, NoopPin};
    use crate::DisplaySize320x240;

    #[test]
    fn fill_contiguous_clips_to_screen() {
        let panel = FakePanel::new();
        let mut lcd = Ili9325::new(panel.clone(), NoopPin, DisplaySize320x240);
        lcd.init(&mut FakeDelay::default()).unwrap();
        panel.clear_log();

        let area = Rectangle::new(Point::new(318, 238), Size::new(4, 4));
        lcd.fill_contiguous(&area, core::iter::repeat(Rgb565::RED).take(16))
            .unwrap();

        let red = RawU16::from(Rgb565::RED).into_inner();
        assert_eq!(panel.pixel_writes(), 4);
        assert_eq!(panel.count_color(&lcd.orientation(), red), 4);
        assert_eq!(panel.logical_pixel(&lcd.orientation(), 319, 239), red);
    }

    #[test]
    fn off_screen_pixels_are_ignored() {
        let panel = FakePanel::new();
        let mut lcd = Ili9325::new(panel.clone(), NoopPin, DisplaySize320x240);
        lcd.init(&mut FakeDelay::default()).unwrap();
        panel.clear_log();

        lcd.draw_iter([
            Pixel(Point::new(-1, 0), Rgb565::WHITE),
            Pixel(Point::new(5, 5), Rgb565::WHITE),
            Pixel(Point::new(320, 0), Rgb565::WHITE),
        ])
        .unwrap();
        assert_eq!(panel.pixel_writes(), 1);
    }

    #[test]
    fn fill_solid_uses_one_frame() {
        let panel = FakePanel::new();
        let mut lcd = Ili9325::new(panel.clone(), NoopPin, DisplaySize320x240);
        lcd.init(&mut FakeDelay::default()).unwrap();
        lcd.rotate_screen(90).unwrap();
        panel.clear_log();

        let area = Rectangle::new(Point::new(-2, 310), Size::new(6, 20));
        lcd.fill_solid(&area, Rgb565::BLUE).unwrap();

        let blue = raw(Rgb565::BLUE);
        assert_eq!(panel.pixel_writes(), 4 * 10);
        assert_eq!(panel.count_color(&lcd.orientation(), blue), 4 * 10);
        assert_eq!(panel.logical_pixel(&lcd.orientation(), 0, 319), blue);
        assert_eq!(panel.last_command(), Some(0x22));

        lcd.fill_solid(&Rectangle::new(Point::new(300, 0), Size::new(5, 5)), Rgb565::RED)
            .unwrap();
        assert_eq!(panel.pixel_writes(), 4 * 10);
    }

    #[test]
    fn fill_contiguous_ignores_surplus_colors() {
        let panel = FakePanel::new();
        let mut lcd = Ili9325::new(panel.clone(), NoopPin, DisplaySize320x240);
        lcd.init(&mut FakeDelay::default()).unwrap();
        panel.clear_log();

        let area = Rectangle::new(Point::new(10, 10), Size::new(4, 4));
        let colors = core::iter::repeat(Rgb565::RED)
            .take(16)
            .chain(core::iter::repeat(Rgb565::GREEN));
        lcd.fill_contiguous(&area, colors).unwrap();

        let o = lcd.orientation();
        assert_eq!(panel.pixel_writes(), 16);
        assert_eq!(panel.count_color(&o, raw(Rgb565::RED)), 16);
        assert_eq!(panel.count_color(&o, raw(Rgb565::GREEN)), 0);
    }
}
