#![cfg_attr(not(test), no_std)]

//! A platform agnostic driver for the ILI9325 TFT LCD controller, together with
//! a small graphics and text layer and a driver for the XPT2046 resistive touch
//! digitizer usually glued on top of ILI9325 panels.
//!
//! The controller is reached through a
//! [`display_interface::WriteOnlyDataCommand`]; [`gpio::Gpio16Interface`]
//! implements it for a GPIO driven 16-bit parallel bus.

use core::iter::{once, repeat};

use display_interface::DataFormat::U16BEIter;
use display_interface::WriteOnlyDataCommand;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

pub mod color;
pub mod fonts;
pub mod gpio;
pub mod graphics;
pub mod pin;
pub mod spi;
pub mod text;
pub mod tick;
pub mod touch;

mod orientation;

#[cfg(feature = "graphics")]
mod graphics_core;

#[cfg(test)]
mod mock;

pub use crate::graphics::Tft;
pub use crate::orientation::{DisplayOrientation, OrientationFlag, Rotation, RotationRegisters};

/// Trait that defines display size information
pub trait DisplaySize {
    /// Native width in pixels
    const WIDTH: u16;
    /// Native height in pixels
    const HEIGHT: u16;
}

/// The usual ILI9325 panel: 320x240 pixels in its native (landscape) orientation
pub struct DisplaySize320x240;

impl DisplaySize for DisplaySize320x240 {
    const WIDTH: u16 = 320;
    const HEIGHT: u16 = 240;
}

/// Panels wired with the long side as the native vertical axis
pub struct DisplaySize240x320;

impl DisplaySize for DisplaySize240x320 {
    const WIDTH: u16 = 240;
    const HEIGHT: u16 = 320;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<PinE> {
    /// Coordinates or geometry exceed the current screen or a safety limit
    OutOfRange,
    /// Unsupported argument value, e.g. an invalid rotation
    WrongArgument,
    Interface,
    OutputPin(PinE),
}

/// Capabilities the drawing layers need from a display controller
///
/// Everything above the controller ([`Tft`], text rendering, touch
/// calibration screens) is written against this trait only.
pub trait FrameController {
    type PinError;

    /// Current logical resolution and rotation
    fn orientation(&self) -> DisplayOrientation;

    /// Full controller bring-up
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<Self::PinError>>;

    /// Open the window (w1, h1)-(w2, h2) for a burst of pixel writes
    fn set_frame(
        &mut self,
        w1: u16,
        h1: u16,
        w2: u16,
        h2: u16,
    ) -> Result<(), Error<Self::PinError>>;

    /// Write one pixel into the open frame
    fn write_frame_pixel(&mut self, color: u16) -> Result<(), Error<Self::PinError>>;

    /// Write a sequence of pixels into the open frame
    fn write_frame_iter<I: IntoIterator<Item = u16>>(
        &mut self,
        colors: I,
    ) -> Result<(), Error<Self::PinError>>;

    fn fill_screen(&mut self, color: u16) -> Result<(), Error<Self::PinError>>;

    /// Rotate by 0, 90, 180, 270 or 360 degrees relative to the native orientation
    fn rotate(&mut self, degrees: u16) -> Result<(), Error<Self::PinError>>;

    /// Replay the bring-up sequence keeping the current rotation
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<Self::PinError>>;
}

/// Drawing always goes through a frame (window):
///
/// - A drawing window is prepared with [set_frame](struct.Ili9325.html#method.set_frame)
/// - The controller positions its address counter at the window's top left
///   corner and issues the GRAM write command
/// - Every 16-bit word written afterwards is an rgb565 pixel, the address
///   counter advances inside the window after each one
///
/// The controller always sweeps its native axes. In the portrait rotations the
/// logical coordinates are swapped before they reach the window registers so
/// that the pixel order stays row-major in logical coordinates.
pub struct Ili9325<IFACE, RESET> {
    interface: IFACE,
    reset: RESET,
    native_width: u16,
    native_height: u16,
    orientation: DisplayOrientation,
}

impl<IFACE, RESET> Ili9325<IFACE, RESET> {
    /// Create a driver for a panel of a known size. No bus traffic happens
    /// until [init](struct.Ili9325.html#method.init) is called.
    pub fn new<SIZE>(interface: IFACE, reset: RESET, _display_size: SIZE) -> Self
    where
        SIZE: DisplaySize,
    {
        Self::with_resolution(interface, reset, SIZE::WIDTH, SIZE::HEIGHT)
    }

    /// Create a driver with a runtime native resolution.
    ///
    /// A zero width or height turns `init` into a no-op.
    pub fn with_resolution(interface: IFACE, reset: RESET, width: u16, height: u16) -> Self {
        Self {
            interface,
            reset,
            native_width: width,
            native_height: height,
            orientation: DisplayOrientation::unset(),
        }
    }

    pub fn orientation(&self) -> DisplayOrientation {
        self.orientation
    }

    /// Get the current screen width. It can change based on the current orientation
    pub fn width(&self) -> u16 {
        self.orientation.width
    }

    /// Get the current screen height. It can change based on the current orientation
    pub fn height(&self) -> u16 {
        self.orientation.height
    }

    pub fn release(self) -> (IFACE, RESET) {
        (self.interface, self.reset)
    }
}

impl<PinE, IFACE, RESET> Ili9325<IFACE, RESET>
where
    IFACE: WriteOnlyDataCommand,
    RESET: OutputPin<Error = PinE>,
{
    /// Controller bring-up, ending with a black screen in the native rotation.
    ///
    /// Must be called once before any drawing.
    pub fn init<DELAY>(&mut self, delay: &mut DELAY) -> Result<(), Error<PinE>>
    where
        DELAY: DelayNs,
    {
        if self.native_width == 0 || self.native_height == 0 {
            return Ok(());
        }
        self.orientation =
            DisplayOrientation::rotated(self.native_width, self.native_height, Rotation::Deg0);
        self.bring_up(delay, Rotation::Deg0.registers())?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "ili9325: initialized {}x{}",
            self.native_width,
            self.native_height
        );
        Ok(())
    }

    /// Reset the controller and replay the bring-up sequence, keeping the
    /// rotation that was active
    pub fn reset_screen<DELAY>(&mut self, delay: &mut DELAY) -> Result<(), Error<PinE>>
    where
        DELAY: DelayNs,
    {
        if self.orientation.width == 0 || self.orientation.height == 0 {
            return Ok(());
        }
        self.bring_up(delay, self.orientation.rotation.registers())
    }

    fn bring_up<DELAY>(
        &mut self,
        delay: &mut DELAY,
        rotation: RotationRegisters,
    ) -> Result<(), Error<PinE>>
    where
        DELAY: DelayNs,
    {
        // Hold reset low long enough for the controller to latch it
        self.reset.set_low().map_err(Error::OutputPin)?;
        delay.delay_ms(100);
        self.reset.set_high().map_err(Error::OutputPin)?;
        delay.delay_ms(100);

        for step in INIT_SEQUENCE {
            match *step {
                InitStep::Write(reg, value) => self.write_reg(reg, value)?,
                InitStep::Delay(ms) => delay.delay_ms(ms),
                InitStep::DriverOutput => {
                    self.write_reg(Register::DriverOutput as u16, rotation.driver_output)?
                }
                InitStep::EntryMode => {
                    self.write_reg(Register::EntryMode as u16, rotation.entry_mode)?
                }
                InitStep::GateScan => {
                    self.write_reg(Register::GateScan as u16, rotation.gate_scan)?
                }
            }
        }

        self.fill_screen(0x0000)
    }

    fn command(&mut self, reg: u16) -> Result<(), Error<PinE>> {
        self.interface
            .send_commands(U16BEIter(&mut once(reg)))
            .map_err(|_| Error::Interface)
    }

    fn write_reg(&mut self, reg: u16, value: u16) -> Result<(), Error<PinE>> {
        self.command(reg)?;
        self.interface
            .send_data(U16BEIter(&mut once(value)))
            .map_err(|_| Error::Interface)
    }

    /// Open the drawing window (w1, h1)-(w2, h2), both corners included.
    ///
    /// Fails with `OutOfRange` when any coordinate lies outside the current
    /// (rotated) screen. On success the address counter sits at the window's
    /// first pixel and the controller expects pixel data.
    pub fn set_frame(&mut self, w1: u16, h1: u16, w2: u16, h2: u16) -> Result<(), Error<PinE>> {
        let o = self.orientation;
        if !o.contains(w1, h1) || !o.contains(w2, h2) {
            return Err(Error::OutOfRange);
        }
        let (w1, h1) = o.to_hardware(w1, h1);
        let (w2, h2) = o.to_hardware(w2, h2);

        self.write_reg(Register::HorizontalStart as u16, h1)?;
        self.write_reg(Register::HorizontalEnd as u16, h2)?;
        self.write_reg(Register::VerticalStart as u16, w1)?;
        self.write_reg(Register::VerticalEnd as u16, w2)?;
        self.write_reg(Register::GramHorizontal as u16, h1)?;
        self.write_reg(Register::GramVertical as u16, w1)?;

        self.command(Register::GramWrite as u16)
    }

    /// Write one pixel into the frame opened by `set_frame`
    pub fn write_frame_pixel(&mut self, color: u16) -> Result<(), Error<PinE>> {
        self.write_frame_iter(once(color))
    }

    /// Write rgb565 pixels into the frame opened by `set_frame`.
    ///
    /// The iterator is useful to avoid wasting memory by holding a buffer for
    /// the whole frame when it is not necessary.
    pub fn write_frame_iter<I>(&mut self, colors: I) -> Result<(), Error<PinE>>
    where
        I: IntoIterator<Item = u16>,
    {
        self.interface
            .send_data(U16BEIter(&mut colors.into_iter()))
            .map_err(|_| Error::Interface)
    }

    /// Draw a single pixel through a 1x1 frame
    pub fn draw_pixel(&mut self, w: u16, h: u16, color: u16) -> Result<(), Error<PinE>> {
        self.set_frame(w, h, w, h)?;
        self.write_frame_pixel(color)
    }

    /// Fill the whole screen with one color
    pub fn fill_screen(&mut self, color: u16) -> Result<(), Error<PinE>> {
        let o = self.orientation;
        if o.width == 0 || o.height == 0 {
            return Err(Error::OutOfRange);
        }
        self.set_frame(0, 0, o.width - 1, o.height - 1)?;
        let count = o.width as usize * o.height as usize;
        self.write_frame_iter(repeat(color).take(count))
    }

    /// Change the orientation of the screen.
    ///
    /// Accepts 0 (or 360), 90, 180 and 270 degrees; other values fail with
    /// `WrongArgument` and leave the orientation untouched.
    pub fn rotate_screen(&mut self, degrees: u16) -> Result<(), Error<PinE>> {
        let rotation = Rotation::from_degrees(degrees).ok_or(Error::WrongArgument)?;
        self.orientation =
            DisplayOrientation::rotated(self.native_width, self.native_height, rotation);

        let regs = rotation.registers();
        self.write_reg(Register::GateScan as u16, regs.gate_scan)?;
        self.write_reg(Register::DriverOutput as u16, regs.driver_output)?;
        self.write_reg(Register::EntryMode as u16, regs.entry_mode)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("ili9325: rotated to {} degrees", rotation.degrees());
        Ok(())
    }
}

impl<PinE, IFACE, RESET> FrameController for Ili9325<IFACE, RESET>
where
    IFACE: WriteOnlyDataCommand,
    RESET: OutputPin<Error = PinE>,
{
    type PinError = PinE;

    fn orientation(&self) -> DisplayOrientation {
        self.orientation
    }

    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<PinE>> {
        Ili9325::init(self, delay)
    }

    fn set_frame(&mut self, w1: u16, h1: u16, w2: u16, h2: u16) -> Result<(), Error<PinE>> {
        Ili9325::set_frame(self, w1, h1, w2, h2)
    }

    fn write_frame_pixel(&mut self, color: u16) -> Result<(), Error<PinE>> {
        Ili9325::write_frame_pixel(self, color)
    }

    fn write_frame_iter<I: IntoIterator<Item = u16>>(
        &mut self,
        colors: I,
    ) -> Result<(), Error<PinE>> {
        Ili9325::write_frame_iter(self, colors)
    }

    fn fill_screen(&mut self, color: u16) -> Result<(), Error<PinE>> {
        Ili9325::fill_screen(self, color)
    }

    fn rotate(&mut self, degrees: u16) -> Result<(), Error<PinE>> {
        self.rotate_screen(degrees)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<PinE>> {
        self.reset_screen(delay)
    }
}

#[derive(Clone, Copy)]
enum Register {
    DriverOutput = 0x01,
    EntryMode = 0x03,
    DisplayControl1 = 0x07,
    PowerControl1 = 0x10,
    PowerControl2 = 0x11,
    PowerControl3 = 0x12,
    PowerControl4 = 0x13,
    GramHorizontal = 0x20,
    GramVertical = 0x21,
    GramWrite = 0x22,
    HorizontalStart = 0x50,
    HorizontalEnd = 0x51,
    VerticalStart = 0x52,
    VerticalEnd = 0x53,
    GateScan = 0x60,
}

#[derive(Clone, Copy)]
enum InitStep {
    Write(u16, u16),
    Delay(u32),
    /// Rotation dependent registers, taken from the rotation table
    DriverOutput,
    EntryMode,
    GateScan,
}

use InitStep::{Delay, Write};

const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::DriverOutput,
    Write(0x02, 0x0700),
    InitStep::EntryMode,
    Write(0x04, 0x0000),
    Write(Register::DisplayControl1 as u16, 0x0000),
    Write(0x08, 0x0302),
    Write(0x09, 0x0000),
    Write(0x0A, 0x0000),
    Write(0x0C, 0x0000),
    Write(0x0D, 0x0000),
    Write(0x0F, 0x0000),
    // power on
    Write(Register::PowerControl1 as u16, 0x1290),
    Write(Register::PowerControl2 as u16, 0x0007),
    Delay(100),
    Write(Register::PowerControl3 as u16, 0x0092),
    Delay(100),
    Write(Register::PowerControl4 as u16, 0x0E00),
    Delay(100),
    Write(0x29, 0x0005),
    Write(0x2B, 0x000E),
    // gamma
    Write(0x30, 0x0004),
    Write(0x31, 0x0307),
    Write(0x32, 0x0002),
    Write(0x35, 0x0206),
    Write(0x36, 0x0A00),
    Write(0x37, 0x0507),
    Write(0x38, 0x0204),
    Write(0x39, 0x0707),
    Write(0x3C, 0x0405),
    Write(0x3D, 0x0000),
    // full GRAM window, 240x320
    Write(Register::HorizontalStart as u16, 0x0000),
    Write(Register::HorizontalEnd as u16, 0x00EF),
    Write(Register::VerticalStart as u16, 0x0000),
    Write(Register::VerticalEnd as u16, 0x013F),
    InitStep::GateScan,
    Write(0x61, 0x0001),
    Write(0x6A, 0x0000),
    // partial display off
    Write(0x80, 0x0000),
    Write(0x81, 0x0000),
    Write(0x82, 0x0000),
    Write(0x83, 0x0000),
    Write(0x84, 0x0000),
    Write(0x85, 0x0000),
    // panel interface
    Write(0x90, 0x0029),
    Write(0x92, 0x0600),
    Write(0x93, 0x0003),
    Write(0x95, 0x0110),
    Write(0x97, 0x0000),
    Write(0x98, 0x0000),
    // display on
    Write(Register::DisplayControl1 as u16, 0x0133),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FakeDelay, FakePanel, NoopPin};

    fn lcd() -> (Ili9325<FakePanel, NoopPin>, FakePanel) {
        let panel = FakePanel::new();
        let mut lcd = Ili9325::new(panel.clone(), NoopPin, DisplaySize320x240);
        lcd.init(&mut FakeDelay::default()).unwrap();
        panel.clear_log();
        (lcd, panel)
    }

    #[test]
    fn init_programs_native_rotation_and_clears_screen() {
        let panel = FakePanel::new();
        let mut lcd = Ili9325::new(panel.clone(), NoopPin, DisplaySize320x240);
        let mut delay = FakeDelay::default();
        lcd.init(&mut delay).unwrap();

        assert_eq!((lcd.width(), lcd.height()), (320, 240));
        assert_eq!(lcd.orientation().rotation, Rotation::Deg0);
        assert_eq!(panel.reg(0x01), 0x0000);
        assert_eq!(panel.reg(0x03), 0x1038);
        assert_eq!(panel.reg(0x60), 0xA700);
        assert_eq!(panel.reg(0x07), 0x0133);
        assert_eq!(panel.pixel_writes(), 320 * 240);
        assert!(delay.total_ms() >= 500);
    }

    #[test]
    fn init_is_noop_without_resolution() {
        let panel = FakePanel::new();
        let mut lcd = Ili9325::with_resolution(panel.clone(), NoopPin, 0, 240);
        lcd.init(&mut FakeDelay::default()).unwrap();
        assert!(panel.register_writes().is_empty());
        assert_eq!(lcd.width(), 0);
    }

    #[test]
    fn rotation_sets_dimensions_and_registers() {
        let (mut lcd, panel) = lcd();
        let cases = [
            (0, (320, 240), [0xA700, 0x0000, 0x1038]),
            (90, (240, 320), [0x2700, 0x0000, 0x1030]),
            (180, (320, 240), [0x2700, 0x0100, 0x1038]),
            (270, (240, 320), [0xA700, 0x0100, 0x1030]),
            (360, (320, 240), [0xA700, 0x0000, 0x1038]),
        ];
        for (degrees, size, regs) in cases {
            panel.clear_log();
            lcd.rotate_screen(degrees).unwrap();
            assert_eq!((lcd.width(), lcd.height()), size);
            assert_eq!(
                panel.register_writes(),
                vec![(0x60, regs[0]), (0x01, regs[1]), (0x03, regs[2])]
            );
        }
    }

    #[test]
    fn unsupported_rotation_leaves_state_unchanged() {
        let (mut lcd, panel) = lcd();
        lcd.rotate_screen(90).unwrap();
        panel.clear_log();
        let before = lcd.orientation();
        assert_eq!(lcd.rotate_screen(45), Err(Error::WrongArgument));
        assert_eq!(lcd.orientation(), before);
        assert!(panel.register_writes().is_empty());
    }

    #[test]
    fn set_frame_rejects_coordinates_outside_current_frame() {
        let (mut lcd, panel) = lcd();
        assert_eq!(lcd.set_frame(0, 0, 320, 10), Err(Error::OutOfRange));
        assert_eq!(lcd.set_frame(0, 240, 10, 10), Err(Error::OutOfRange));
        assert!(panel.register_writes().is_empty());

        lcd.rotate_screen(90).unwrap();
        assert!(lcd.set_frame(0, 0, 239, 319).is_ok());
        assert_eq!(lcd.set_frame(0, 0, 240, 10), Err(Error::OutOfRange));
    }

    #[test]
    fn set_frame_programs_window_in_native_axes() {
        let (mut lcd, panel) = lcd();
        lcd.set_frame(10, 20, 30, 40).unwrap();
        assert_eq!(
            panel.register_writes(),
            vec![(0x50, 20), (0x51, 40), (0x52, 10), (0x53, 30), (0x20, 20), (0x21, 10)]
        );
        assert_eq!(panel.last_command(), Some(0x22));

        lcd.rotate_screen(90).unwrap();
        panel.clear_log();
        lcd.set_frame(10, 20, 30, 40).unwrap();
        assert_eq!(
            panel.register_writes(),
            vec![(0x50, 10), (0x51, 30), (0x52, 20), (0x53, 40), (0x20, 10), (0x21, 20)]
        );
    }

    #[test]
    fn pixels_land_in_raster_order_in_every_rotation() {
        for degrees in [0, 90, 180, 270] {
            let (mut lcd, panel) = lcd();
            lcd.rotate_screen(degrees).unwrap();
            lcd.set_frame(4, 6, 6, 7).unwrap();
            lcd.write_frame_iter(1..=6).unwrap();
            let o = lcd.orientation();
            assert_eq!(panel.logical_pixel(&o, 4, 6), 1);
            assert_eq!(panel.logical_pixel(&o, 6, 6), 3);
            assert_eq!(panel.logical_pixel(&o, 4, 7), 4);
            assert_eq!(panel.logical_pixel(&o, 6, 7), 6);
        }
    }

    #[test]
    fn draw_pixel_writes_exactly_one_pixel() {
        let (mut lcd, panel) = lcd();
        lcd.draw_pixel(319, 239, 0xF800).unwrap();
        assert_eq!(panel.pixel_writes(), 1);
        assert_eq!(panel.logical_pixel(&lcd.orientation(), 319, 239), 0xF800);
        assert_eq!(lcd.draw_pixel(320, 0, 0xF800), Err(Error::OutOfRange));
    }

    #[test]
    fn reset_keeps_active_rotation() {
        let (mut lcd, panel) = lcd();
        lcd.rotate_screen(270).unwrap();
        lcd.reset_screen(&mut FakeDelay::default()).unwrap();

        assert_eq!((lcd.width(), lcd.height()), (240, 320));
        assert_eq!(panel.reg(0x01), 0x0100);
        assert_eq!(panel.reg(0x03), 0x1030);
        assert_eq!(panel.reg(0x60), 0xA700);
    }
}
