use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};

use crate::pin::{Gpio, GroupPin, PinGroup, Port, PortAccess};

/// Wiring of the 16-bit i8080-style bus
///
/// The control lines (RS, WR, CS, RESET, RD) share one port, the data bus
/// occupies a pin group of another (or the same) port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusLayout {
    pub ctrl: PinGroup,
    pub data: PinGroup,
    /// Register select: low for command, high for data
    pub rs: u8,
    pub wr: u8,
    pub cs: u8,
    pub reset: u8,
    pub rd: u8,
}

impl Default for BusLayout {
    /// Control on port C pins 6..=10, data on all of port E
    fn default() -> Self {
        let (rs, wr, cs, reset, rd) = (6, 7, 8, 9, 10);
        Self {
            ctrl: PinGroup::new(
                Port::C,
                (1 << rs) | (1 << wr) | (1 << cs) | (1 << reset) | (1 << rd),
            ),
            data: PinGroup::new(Port::E, 0xffff),
            rs,
            wr,
            cs,
            reset,
            rd,
        }
    }
}

/// `WriteOnlyDataCommand` implementation for a GPIO driven 16-bit parallel bus
///
/// Example usage:
///
/// let iface = ili9325::gpio::Gpio16Interface::new(ports, BusLayout::default());
/// let reset = iface.reset_pin();
/// let lcd = ili9325::Ili9325::new(iface, reset, DisplaySize320x240);
pub struct Gpio16Interface<A> {
    gpio: Gpio<A>,
    layout: BusLayout,
}

impl<A: PortAccess> Gpio16Interface<A> {
    /// Create a new Gpio16Interface and park the control lines
    pub fn new(access: A, layout: BusLayout) -> Self {
        let mut gpio = Gpio::new(access);
        gpio.group_pin_set(&layout.ctrl, layout.cs, true);
        gpio.group_pin_set(&layout.ctrl, layout.wr, true);
        gpio.group_pin_set(&layout.ctrl, layout.rd, true);
        Self { gpio, layout }
    }

    /// The RESET control line as an output pin
    pub fn reset_pin(&self) -> GroupPin<A>
    where
        A: Clone,
    {
        GroupPin::new(
            self.gpio.access().clone(),
            self.layout.ctrl,
            self.layout.reset,
        )
    }

    pub fn layout(&self) -> &BusLayout {
        &self.layout
    }

    pub fn release(self) -> A {
        self.gpio.release()
    }

    /// Clocks one word onto the bus
    fn write_word(&mut self, data: bool, word: u16) {
        let ctrl = self.layout.ctrl;
        self.gpio.group_pin_set(&ctrl, self.layout.rs, data);
        self.gpio.group_pin_set(&ctrl, self.layout.cs, false);
        self.gpio.group_set(&self.layout.data, word);
        self.gpio.group_pin_set(&ctrl, self.layout.wr, false);
        self.gpio.group_pin_set(&ctrl, self.layout.wr, true);
        self.gpio.group_pin_set(&ctrl, self.layout.cs, true);
    }

    fn write_format(&mut self, data: bool, words: DataFormat<'_>) -> Result<(), DisplayError> {
        match words {
            DataFormat::U8(buf) => buf.iter().for_each(|b| self.write_word(data, *b as u16)),
            DataFormat::U16(buf) => buf.iter().for_each(|w| self.write_word(data, *w)),
            DataFormat::U16BE(buf) | DataFormat::U16LE(buf) => {
                buf.iter().for_each(|w| self.write_word(data, *w))
            }
            DataFormat::U8Iter(iter) => iter.for_each(|b| self.write_word(data, b as u16)),
            DataFormat::U16BEIter(iter) | DataFormat::U16LEIter(iter) => {
                iter.for_each(|w| self.write_word(data, w))
            }
            _ => return Err(DisplayError::DataFormatNotImplemented),
        }
        Ok(())
    }
}

impl<A: PortAccess> WriteOnlyDataCommand for Gpio16Interface<A> {
    fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
        self.write_format(false, cmd)
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        self.write_format(true, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::FakePorts;
    use core::iter::once;

    #[test]
    fn word_write_follows_bus_timing() {
        let ports = FakePorts::default();
        let layout = BusLayout::default();
        let mut iface = Gpio16Interface::new(ports.clone(), layout);
        ports.clear_log();

        iface
            .send_data(DataFormat::U16BEIter(&mut once(0xBEEF)))
            .unwrap();

        let rs = 1 << layout.rs;
        let wr = 1 << layout.wr;
        let cs = 1 << layout.cs;
        let log = ports.log();
        // rs high, cs low, data, wr low, wr high, cs high
        assert_eq!(log.len(), 6);
        assert_eq!(log[0], (Port::C, rs | wr | cs | (1 << layout.rd)));
        assert_eq!(log[1].1 & cs, 0);
        assert_eq!(log[2], (Port::E, 0xBEEF));
        assert_eq!(log[3].1 & wr, 0);
        assert_eq!(log[4].1 & wr, wr);
        assert_eq!(log[5].1 & cs, cs);
    }

    #[test]
    fn commands_drive_register_select_low() {
        let ports = FakePorts::default();
        let layout = BusLayout::default();
        let mut iface = Gpio16Interface::new(ports.clone(), layout);

        iface.send_commands(DataFormat::U16(&[0x22])).unwrap();
        assert_eq!(ports.output(Port::C) & (1 << layout.rs), 0);
        assert_eq!(ports.output(Port::E), 0x22);

        iface.send_data(DataFormat::U8(&[0x7f])).unwrap();
        assert_eq!(ports.output(Port::C) & (1 << layout.rs), 1 << layout.rs);
        assert_eq!(ports.output(Port::E), 0x7f);
    }

    #[test]
    fn reset_pin_shares_control_port() {
        use embedded_hal::digital::OutputPin;

        let ports = FakePorts::default();
        let layout = BusLayout::default();
        let iface = Gpio16Interface::new(ports.clone(), layout);
        let mut reset = iface.reset_pin();
        reset.set_low().unwrap();
        assert_eq!(ports.output(Port::C) & (1 << layout.reset), 0);
        reset.set_high().unwrap();
        assert_eq!(ports.output(Port::C) & (1 << layout.reset), 1 << layout.reset);
    }
}
