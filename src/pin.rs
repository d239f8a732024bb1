//! GPIO pin and pin-group abstraction.
//!
//! Pins are plain value descriptors (`port`, `pin`, `inverted`). The actual
//! register access is delegated to a [`PortAccess`] implementation supplied by
//! the board support code, so the same descriptors work on any MCU family that
//! exposes 16-bit wide GPIO ports.
//!
//! Groups let callers work with a contiguous ("dense") value even when the
//! physical pins are scattered across a port: reading densifies the port value
//! against the group mask, writing sparsifies it back.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

/// GPIO port identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    #[cfg(not(feature = "compact-pins"))]
    I = 8,
    #[cfg(not(feature = "compact-pins"))]
    J = 9,
    #[cfg(not(feature = "compact-pins"))]
    K = 10,
}

impl Port {
    /// Port from its index (A = 0)
    pub fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Port::A,
            1 => Port::B,
            2 => Port::C,
            3 => Port::D,
            4 => Port::E,
            5 => Port::F,
            6 => Port::G,
            7 => Port::H,
            #[cfg(not(feature = "compact-pins"))]
            8 => Port::I,
            #[cfg(not(feature = "compact-pins"))]
            9 => Port::J,
            #[cfg(not(feature = "compact-pins"))]
            10 => Port::K,
            _ => return None,
        })
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Packed pin descriptor storage
#[cfg(not(feature = "compact-pins"))]
pub type PackedPin = u16;

/// Packed pin descriptor storage
#[cfg(feature = "compact-pins")]
pub type PackedPin = u8;

#[cfg(not(feature = "compact-pins"))]
const PORT_BITS: u32 = 4;
#[cfg(feature = "compact-pins")]
const PORT_BITS: u32 = 3;

/// A single GPIO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin {
    pub port: Port,
    /// Pin number inside the port (0..=15)
    pub pin: u8,
    /// Input and output levels are inverted when set
    pub inverted: bool,
}

impl Pin {
    pub const fn new(port: Port, pin: u8) -> Self {
        Self {
            port,
            pin,
            inverted: false,
        }
    }

    pub const fn inverted(port: Port, pin: u8) -> Self {
        Self {
            port,
            pin,
            inverted: true,
        }
    }

    fn mask(&self) -> u16 {
        1 << (self.pin & 0x0f)
    }

    /// Encode as a packed bitfield: port, then pin number, then the inversion bit.
    ///
    /// The default encoding is 16 bits wide with 7 reserved bits. With the
    /// `compact-pins` feature it fits into a single byte.
    pub fn pack(&self) -> PackedPin {
        let port = self.port.index() as PackedPin;
        let pin = (self.pin & 0x0f) as PackedPin;
        port | (pin << PORT_BITS) | ((self.inverted as PackedPin) << (PORT_BITS + 4))
    }

    /// Decode a packed descriptor. Returns `None` for a port that does not exist.
    pub fn unpack(packed: PackedPin) -> Option<Self> {
        let port_mask = (1 << PORT_BITS) - 1;
        let port = Port::from_index((packed & port_mask) as u8)?;
        Some(Self {
            port,
            pin: ((packed >> PORT_BITS) & 0x0f) as u8,
            inverted: (packed >> (PORT_BITS + 4)) & 1 == 1,
        })
    }
}

/// Group of pins residing in the same port, read and written at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinGroup {
    pub port: Port,
    /// Each set bit selects the corresponding pin of the port
    pub pins: u16,
    /// Each set bit inverts the corresponding pin
    pub inversions: u16,
}

impl PinGroup {
    pub const fn new(port: Port, pins: u16) -> Self {
        Self {
            port,
            pins,
            inversions: 0,
        }
    }
}

/// Collect the bits of `sparse` selected by `mask` into a contiguous value.
///
/// ```text
///   mask   = 0b1010000011110010
///   sparse = 0b1010101010101010
///   result = 0b1 1     1010  1   -> 0b11_1010_1
/// ```
pub fn densify(mask: u16, sparse: u16) -> u16 {
    let mut dense = 0;
    let mut idx = 0;
    for bit in 0..16 {
        if mask & (1 << bit) != 0 {
            if sparse & (1 << bit) != 0 {
                dense |= 1 << idx;
            }
            idx += 1;
        }
    }
    dense
}

/// Spread the low bits of `dense` over the positions selected by `mask`.
///
/// Inverse of [`densify`] for the bits inside `mask`.
pub fn sparsify(mask: u16, dense: u16) -> u16 {
    let mut sparse = 0;
    let mut idx = 0;
    for bit in 0..16 {
        if mask & (1 << bit) != 0 {
            if dense & (1 << idx) != 0 {
                sparse |= 1 << bit;
            }
            idx += 1;
        }
    }
    sparse
}

/// Raw access to GPIO port registers
///
/// Implemented by board support code on top of the MCU's PAC or HAL. Access
/// is not required to be atomic; it must not be used from interrupt context.
pub trait PortAccess {
    /// Value of the port input register
    fn read_input(&self, port: Port) -> u16;

    /// Value of the port output register
    fn read_output(&self, port: Port) -> u16;

    /// Overwrite the port output register
    fn write_output(&mut self, port: Port, value: u16);

    fn set_bits(&mut self, port: Port, mask: u16) {
        let value = self.read_output(port) | mask;
        self.write_output(port, value);
    }

    fn clear_bits(&mut self, port: Port, mask: u16) {
        let value = self.read_output(port) & !mask;
        self.write_output(port, value);
    }

    fn toggle_bits(&mut self, port: Port, mask: u16) {
        let value = self.read_output(port) ^ mask;
        self.write_output(port, value);
    }
}

/// Pin and group operations on top of a [`PortAccess`]
///
/// Inversion is honoured transparently on every read and write.
#[derive(Debug, Clone)]
pub struct Gpio<A> {
    access: A,
}

impl<A: PortAccess> Gpio<A> {
    pub fn new(access: A) -> Self {
        Self { access }
    }

    /// Read the input level of a pin
    ///
    /// Does not check that the pin is configured as an input.
    pub fn pin_read(&self, pin: Pin) -> bool {
        let high = self.access.read_input(pin.port) & pin.mask() != 0;
        high ^ pin.inverted
    }

    /// Drive a pin to the given logical level
    pub fn pin_set(&mut self, pin: Pin, value: bool) {
        if value ^ pin.inverted {
            self.access.set_bits(pin.port, pin.mask());
        } else {
            self.access.clear_bits(pin.port, pin.mask());
        }
    }

    pub fn pin_toggle(&mut self, pin: Pin) {
        self.access.toggle_bits(pin.port, pin.mask());
    }

    /// Read the group pins and return them densified
    pub fn group_read(&self, group: &PinGroup) -> u16 {
        let raw = self.access.read_input(group.port) ^ group.inversions;
        densify(group.pins, raw)
    }

    /// Set the group pins to a densified value, leaving the other port pins untouched
    pub fn group_set(&mut self, group: &PinGroup, value: u16) {
        let sparse = (sparsify(group.pins, value) ^ group.inversions) & group.pins;
        let current = self.access.read_output(group.port);
        self.access
            .write_output(group.port, (current & !group.pins) | sparse);
    }

    /// Toggle the group pins selected by a densified value
    pub fn group_toggle(&mut self, group: &PinGroup, value: u16) {
        let sparse = sparsify(group.pins, value);
        self.access.toggle_bits(group.port, sparse);
    }

    /// Drive one pin of a group, honouring that pin's inversion bit
    pub fn group_pin_set(&mut self, group: &PinGroup, bit: u8, value: bool) {
        let mask = 1u16 << (bit & 0x0f);
        let inverted = group.inversions & mask != 0;
        if value ^ inverted {
            self.access.set_bits(group.port, mask);
        } else {
            self.access.clear_bits(group.port, mask);
        }
    }

    pub fn access(&self) -> &A {
        &self.access
    }

    pub fn release(self) -> A {
        self.access
    }
}

/// One pin of a [`PinGroup`] exposed as an `embedded-hal` output pin
#[derive(Debug, Clone)]
pub struct GroupPin<A> {
    gpio: Gpio<A>,
    group: PinGroup,
    bit: u8,
}

impl<A: PortAccess> GroupPin<A> {
    pub fn new(access: A, group: PinGroup, bit: u8) -> Self {
        Self {
            gpio: Gpio::new(access),
            group,
            bit,
        }
    }
}

impl<A> ErrorType for GroupPin<A> {
    type Error = Infallible;
}

impl<A: PortAccess> OutputPin for GroupPin<A> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.gpio.group_pin_set(&self.group, self.bit, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.gpio.group_pin_set(&self.group, self.bit, true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::FakePorts;
    use proptest::prelude::*;

    #[test]
    fn densify_collects_masked_bits() {
        assert_eq!(densify(0b1010_0000_1111_0010, 0b1010_1010_1010_1010), 0b11_1010_1);
    }

    #[test]
    fn sparsify_spreads_dense_bits() {
        assert_eq!(
            sparsify(0b0101_0000_0000_0011, 0b1101),
            0b0101_0000_0000_0001
        );
    }

    proptest! {
        #[test]
        fn sparsify_inverts_densify(mask in any::<u16>(), value in any::<u16>()) {
            let inside = value & mask;
            prop_assert_eq!(sparsify(mask, densify(mask, value)), inside);
        }
    }

    #[cfg(not(feature = "compact-pins"))]
    const PORT_COUNT: u8 = 11;
    #[cfg(feature = "compact-pins")]
    const PORT_COUNT: u8 = 8;

    proptest! {
        #[test]
        fn pin_roundtrips_through_packed_encoding(
            port in 0..PORT_COUNT,
            number in 0u8..16,
            inverted in any::<bool>(),
        ) {
            let pin = Pin {
                port: Port::from_index(port).unwrap(),
                pin: number,
                inverted,
            };
            prop_assert_eq!(Pin::unpack(pin.pack()), Some(pin));
        }
    }

    #[cfg(not(feature = "compact-pins"))]
    #[test]
    fn wide_encoding_layout() {
        assert_eq!(Port::from_index(PORT_COUNT), None);
        assert_eq!(Pin::unpack(PORT_COUNT as PackedPin), None);
        assert_eq!(Pin::inverted(Port::H, 13).pack(), 7 | 13 << 4 | 1 << 8);
        assert_eq!(Pin::new(Port::K, 15).pack(), 10 | 15 << 4);
    }

    #[cfg(feature = "compact-pins")]
    #[test]
    fn compact_encoding_fits_one_byte() {
        assert_eq!(Pin::inverted(Port::H, 13).pack(), 0xEF);
        assert_eq!(Pin::new(Port::A, 15).pack(), 15 << 3);
        assert_eq!(Pin::unpack(0xEF), Some(Pin::inverted(Port::H, 13)));
        assert_eq!(Port::from_index(PORT_COUNT), None);
    }

    #[test]
    fn pin_toggle_twice_restores_level() {
        let ports = FakePorts::default();
        ports.set_output(Port::A, 0b0001);
        let mut gpio = Gpio::new(ports.clone());
        let pin = Pin::new(Port::A, 3);

        gpio.pin_toggle(pin);
        assert_eq!(ports.output(Port::A), 0b1001);
        gpio.pin_toggle(pin);
        assert_eq!(ports.output(Port::A), 0b0001);
    }

    #[test]
    fn group_toggle_flips_selected_pins_only() {
        let ports = FakePorts::default();
        ports.set_output(Port::E, 0b1000_0000_0000_1000);
        let mut gpio = Gpio::new(ports.clone());
        let group = PinGroup::new(Port::E, 0b0101_0000_0000_0011);

        // dense bits 0 and 3 are physical pins 0 and 14
        gpio.group_toggle(&group, 0b1001);
        assert_eq!(ports.output(Port::E), 0b1100_0000_0000_1001);
        gpio.group_toggle(&group, 0b1001);
        assert_eq!(ports.output(Port::E), 0b1000_0000_0000_1000);
    }

    #[test]
    fn inverted_pin_drives_opposite_level() {
        let ports = FakePorts::default();
        let mut gpio = Gpio::new(ports.clone());
        let pin = Pin::inverted(Port::B, 12);

        gpio.pin_set(pin, true);
        assert_eq!(ports.output(Port::B) & (1 << 12), 0);
        gpio.pin_set(pin, false);
        assert_eq!(ports.output(Port::B) & (1 << 12), 1 << 12);

        ports.set_input(Port::B, 0);
        assert!(gpio.pin_read(pin));
    }

    #[test]
    fn group_set_leaves_other_pins_alone() {
        let ports = FakePorts::default();
        ports.set_output(Port::C, 0xffff);
        let mut gpio = Gpio::new(ports.clone());
        let group = PinGroup::new(Port::C, 0b0101_0000_0000_0011);

        gpio.group_set(&group, 0b0000);
        assert_eq!(ports.output(Port::C), 0xffff & !group.pins);

        gpio.group_set(&group, 0b1010);
        assert_eq!(ports.output(Port::C), (0xffff & !group.pins) | 0b0100_0000_0000_0010);
    }

    #[test]
    fn group_read_applies_inversions_before_densify() {
        let ports = FakePorts::default();
        let gpio = Gpio::new(ports.clone());
        let group = PinGroup {
            port: Port::D,
            pins: 0b1100,
            inversions: 0b0100,
        };
        ports.set_input(Port::D, 0b1000);
        assert_eq!(gpio.group_read(&group), 0b11);
    }

    #[test]
    fn group_pin_drives_single_bit() {
        let ports = FakePorts::default();
        let group = PinGroup::new(Port::C, 0b11111 << 6);
        let mut reset = GroupPin::new(ports.clone(), group, 9);
        reset.set_high().unwrap();
        assert_eq!(ports.output(Port::C), 1 << 9);
        reset.set_low().unwrap();
        assert_eq!(ports.output(Port::C), 0);
    }
}
