//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::pin::{Port, PortAccess};
use crate::spi::TouchBus;
use crate::{DisplayOrientation, Error, FrameController, Rotation};

const PORTS: usize = 11;

#[derive(Default)]
struct PortState {
    input: [u16; PORTS],
    output: [u16; PORTS],
    log: Vec<(Port, u16)>,
}

/// In-memory GPIO ports; clones share the same registers
#[derive(Clone, Default)]
pub struct FakePorts(Rc<RefCell<PortState>>);

impl FakePorts {
    pub fn output(&self, port: Port) -> u16 {
        self.0.borrow().output[port.index() as usize]
    }

    pub fn set_output(&self, port: Port, value: u16) {
        self.0.borrow_mut().output[port.index() as usize] = value;
    }

    pub fn set_input(&self, port: Port, value: u16) {
        self.0.borrow_mut().input[port.index() as usize] = value;
    }

    /// Every output register write since the last `clear_log`
    pub fn log(&self) -> Vec<(Port, u16)> {
        self.0.borrow().log.clone()
    }

    pub fn clear_log(&self) {
        self.0.borrow_mut().log.clear();
    }
}

impl PortAccess for FakePorts {
    fn read_input(&self, port: Port) -> u16 {
        self.0.borrow().input[port.index() as usize]
    }

    fn read_output(&self, port: Port) -> u16 {
        self.output(port)
    }

    fn write_output(&mut self, port: Port, value: u16) {
        let mut state = self.0.borrow_mut();
        state.output[port.index() as usize] = value;
        state.log.push((port, value));
    }
}

const GRAM_H: usize = 240;
const GRAM_V: usize = 320;

struct PanelState {
    index: u16,
    regs: [u16; 256],
    gram: Vec<u16>,
    h: u16,
    v: u16,
    writes: Vec<(u16, u16)>,
    commands: Vec<u16>,
    pixel_writes: usize,
}

/// Register level model of an ILI9325 with its 240x320 GRAM
///
/// Tracks the index register, window and address counter registers and the
/// entry mode AM bit so that pixel bursts land where the real controller would
/// put them.
#[derive(Clone)]
pub struct FakePanel(Rc<RefCell<PanelState>>);

impl FakePanel {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(PanelState {
            index: 0,
            regs: [0; 256],
            gram: vec![0; GRAM_H * GRAM_V],
            h: 0,
            v: 0,
            writes: Vec::new(),
            commands: Vec::new(),
            pixel_writes: 0,
        })))
    }

    pub fn reg(&self, reg: u16) -> u16 {
        self.0.borrow().regs[reg as usize & 0xff]
    }

    /// Register writes (excluding GRAM data) since the last `clear_log`
    pub fn register_writes(&self) -> Vec<(u16, u16)> {
        self.0.borrow().writes.clone()
    }

    pub fn last_command(&self) -> Option<u16> {
        self.0.borrow().commands.last().copied()
    }

    /// GRAM pixel writes since the last `clear_log`
    pub fn pixel_writes(&self) -> usize {
        self.0.borrow().pixel_writes
    }

    pub fn clear_log(&self) {
        let mut state = self.0.borrow_mut();
        state.writes.clear();
        state.commands.clear();
        state.pixel_writes = 0;
    }

    /// GRAM content at native address (horizontal, vertical)
    pub fn gram(&self, h: u16, v: u16) -> u16 {
        self.0.borrow().gram[v as usize * GRAM_H + h as usize]
    }

    /// GRAM content at a logical coordinate under the given orientation
    pub fn logical_pixel(&self, orientation: &DisplayOrientation, x: u16, y: u16) -> u16 {
        let (w, h) = orientation.to_hardware(x, y);
        self.gram(h, w)
    }

    /// Number of logical pixels of the whole frame holding `color`
    pub fn count_color(&self, orientation: &DisplayOrientation, color: u16) -> usize {
        let mut count = 0;
        for y in 0..orientation.height {
            for x in 0..orientation.width {
                if self.logical_pixel(orientation, x, y) == color {
                    count += 1;
                }
            }
        }
        count
    }

    fn word(&self, data: bool, word: u16) {
        let mut s = self.0.borrow_mut();
        if !data {
            s.index = word;
            s.commands.push(word);
            return;
        }
        match s.index {
            0x22 => {
                let (h, v) = (s.h as usize, s.v as usize);
                if h < GRAM_H && v < GRAM_V {
                    s.gram[v * GRAM_H + h] = word;
                }
                s.pixel_writes += 1;
                s.advance();
            }
            reg => {
                s.regs[reg as usize & 0xff] = word;
                s.writes.push((reg, word));
                match reg {
                    0x20 => s.h = word,
                    0x21 => s.v = word,
                    _ => {}
                }
            }
        }
    }

    fn words(&self, data: bool, words: DataFormat<'_>) -> Result<(), DisplayError> {
        match words {
            DataFormat::U16(buf) => buf.iter().for_each(|w| self.word(data, *w)),
            DataFormat::U16BEIter(iter) => iter.for_each(|w| self.word(data, w)),
            _ => return Err(DisplayError::DataFormatNotImplemented),
        }
        Ok(())
    }
}

impl PanelState {
    fn advance(&mut self) {
        let (h_start, h_end) = (self.regs[0x50], self.regs[0x51]);
        let (v_start, v_end) = (self.regs[0x52], self.regs[0x53]);
        let vertical_first = self.regs[0x03] & 0x0008 != 0;
        if vertical_first {
            self.v += 1;
            if self.v > v_end {
                self.v = v_start;
                self.h += 1;
                if self.h > h_end {
                    self.h = h_start;
                }
            }
        } else {
            self.h += 1;
            if self.h > h_end {
                self.h = h_start;
                self.v += 1;
                if self.v > v_end {
                    self.v = v_start;
                }
            }
        }
    }
}

impl WriteOnlyDataCommand for FakePanel {
    fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
        self.words(false, cmd)
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        self.words(true, buf)
    }
}

/// `FrameController` over a logical framebuffer of any size
///
/// Pixels land in raster order inside the open frame, independent of the
/// rotation, which only swaps the logical dimensions.
pub struct FakeFrames {
    native: (u16, u16),
    orientation: DisplayOrientation,
    window: (u16, u16, u16, u16),
    cursor: (u16, u16),
    buffer: Vec<u16>,
    /// Every successful `set_frame`
    pub frames: Vec<(u16, u16, u16, u16)>,
    pub pixel_writes: usize,
    pub resets: usize,
}

impl FakeFrames {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            native: (width, height),
            orientation: DisplayOrientation::rotated(width, height, Rotation::Deg0),
            window: (0, 0, 0, 0),
            cursor: (0, 0),
            buffer: vec![0; width as usize * height as usize],
            frames: Vec::new(),
            pixel_writes: 0,
            resets: 0,
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> u16 {
        self.buffer[y as usize * self.orientation.width as usize + x as usize]
    }

    pub fn count(&self, color: u16) -> usize {
        self.buffer.iter().filter(|&&c| c == color).count()
    }

    pub fn clear_log(&mut self) {
        self.frames.clear();
        self.pixel_writes = 0;
    }

    fn put(&mut self, color: u16) {
        let (x, y) = self.cursor;
        let width = self.orientation.width as usize;
        self.buffer[y as usize * width + x as usize] = color;
        self.pixel_writes += 1;

        let (x1, y1, x2, y2) = self.window;
        self.cursor = if x < x2 {
            (x + 1, y)
        } else if y < y2 {
            (x1, y + 1)
        } else {
            (x1, y1)
        };
    }
}

impl FrameController for FakeFrames {
    type PinError = Infallible;

    fn orientation(&self) -> DisplayOrientation {
        self.orientation
    }

    fn init<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Error<Infallible>> {
        self.orientation =
            DisplayOrientation::rotated(self.native.0, self.native.1, Rotation::Deg0);
        self.fill_screen(0)
    }

    fn set_frame(&mut self, w1: u16, h1: u16, w2: u16, h2: u16) -> Result<(), Error<Infallible>> {
        if !self.orientation.contains(w1, h1) || !self.orientation.contains(w2, h2) {
            return Err(Error::OutOfRange);
        }
        self.window = (w1, h1, w2, h2);
        self.cursor = (w1, h1);
        self.frames.push(self.window);
        Ok(())
    }

    fn write_frame_pixel(&mut self, color: u16) -> Result<(), Error<Infallible>> {
        self.put(color);
        Ok(())
    }

    fn write_frame_iter<I: IntoIterator<Item = u16>>(
        &mut self,
        colors: I,
    ) -> Result<(), Error<Infallible>> {
        colors.into_iter().for_each(|c| self.put(c));
        Ok(())
    }

    fn fill_screen(&mut self, color: u16) -> Result<(), Error<Infallible>> {
        let o = self.orientation;
        self.set_frame(0, 0, o.width - 1, o.height - 1)?;
        self.write_frame_iter(core::iter::repeat(color).take(o.width as usize * o.height as usize))
    }

    fn rotate(&mut self, degrees: u16) -> Result<(), Error<Infallible>> {
        let rotation = Rotation::from_degrees(degrees).ok_or(Error::WrongArgument)?;
        self.orientation = DisplayOrientation::rotated(self.native.0, self.native.1, rotation);
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Error<Infallible>> {
        self.resets += 1;
        Ok(())
    }
}

/// Output pin that does nothing
pub struct NoopPin;

impl ErrorType for NoopPin {
    type Error = Infallible;
}

impl OutputPin for NoopPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Delay that returns immediately and accumulates the requested time
#[derive(Default)]
pub struct FakeDelay {
    ns: u64,
}

impl FakeDelay {
    pub fn total_ms(&self) -> u64 {
        self.ns / 1_000_000
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns += ns as u64;
    }
}

/// Scripted XPT2046
///
/// Each Z2 conversion (the first of a touch sample) pops the next contact from
/// the script; `None` or an exhausted script means nothing touches the panel.
/// X and Y conversions answer the raw value of the popped contact for the
/// 0xD2 and 0x92 channels respectively.
#[derive(Default)]
pub struct FakeTouchBus {
    script: VecDeque<Option<(u16, u16)>>,
    current: Option<(u16, u16)>,
    pub commands: Vec<u8>,
}

impl FakeTouchBus {
    pub fn new<I: IntoIterator<Item = Option<(u16, u16)>>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn sample(&mut self, cmd: u8) -> u16 {
        match cmd {
            0xC2 => {
                self.current = self.script.pop_front().flatten();
                if self.current.is_some() {
                    0
                } else {
                    4095
                }
            }
            0xB2 => {
                if self.current.is_some() {
                    1000
                } else {
                    0
                }
            }
            0xD2 => self.current.map_or(0, |(a, _)| a),
            0x92 => self.current.map_or(0, |(_, b)| b),
            _ => 0,
        }
    }
}

impl TouchBus for FakeTouchBus {
    type Error = Infallible;

    fn transfer(&mut self, tx: &[u8; 3], rx: &mut [u8; 3]) -> Result<(), Self::Error> {
        self.commands.push(tx[0]);
        let value = self.sample(tx[0]) << 3;
        rx[0] = 0;
        rx[1] = (value >> 8) as u8 & 0x7f;
        rx[2] = value as u8;
        Ok(())
    }
}
