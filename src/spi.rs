use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, Phase, Polarity, SpiBus};

/// SPI mode
pub const MODE: Mode = Mode {
    polarity: Polarity::IdleLow,
    phase: Phase::CaptureOnFirstTransition,
};

/// Full duplex three byte exchange with a touch controller
///
/// The first transmitted byte is the control byte, the conversion result
/// arrives in the second and third received bytes.
pub trait TouchBus {
    type Error;

    fn transfer(&mut self, tx: &[u8; 3], rx: &mut [u8; 3]) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError<SpiE, PinE> {
    Spi(SpiE),
    Pin(PinE),
}

/// `TouchBus` implementation for a SPI bus with a dedicated chip select
pub struct SpiTouchBus<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiTouchBus<SPI, CS> {
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS, SpiE, PinE> TouchBus for SpiTouchBus<SPI, CS>
where
    SPI: SpiBus<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
{
    type Error = BusError<SpiE, PinE>;

    fn transfer(&mut self, tx: &[u8; 3], rx: &mut [u8; 3]) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(BusError::Pin)?;

        let result = self
            .spi
            .transfer(rx, tx)
            .and_then(|_| self.spi.flush())
            .map_err(BusError::Spi);

        // Release the chip select even when the transfer failed
        self.cs.set_high().map_err(BusError::Pin)?;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorKind, ErrorType};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Wire(Rc<RefCell<Vec<&'static str>>>);

    struct LoopbackSpi {
        wire: Wire,
        fail: bool,
    }

    impl ErrorType for LoopbackSpi {
        type Error = ErrorKind;
    }

    impl SpiBus<u8> for LoopbackSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), ErrorKind> {
            Ok(())
        }

        fn write(&mut self, _words: &[u8]) -> Result<(), ErrorKind> {
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), ErrorKind> {
            self.wire.0.borrow_mut().push("transfer");
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for (r, w) in read.iter_mut().zip(write) {
                *r = w.wrapping_add(1);
            }
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), ErrorKind> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ErrorKind> {
            Ok(())
        }
    }

    struct Cs(Wire);

    impl PinErrorType for Cs {
        type Error = Infallible;
    }

    impl OutputPin for Cs {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0 .0.borrow_mut().push("cs low");
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0 .0.borrow_mut().push("cs high");
            Ok(())
        }
    }

    #[test]
    fn transfer_is_framed_by_chip_select() {
        let wire = Wire::default();
        let spi = LoopbackSpi {
            wire: wire.clone(),
            fail: false,
        };
        let mut bus = SpiTouchBus::new(spi, Cs(wire.clone()));
        let mut rx = [0; 3];
        bus.transfer(&[0xD2, 0xFF, 0xFF], &mut rx).unwrap();
        assert_eq!(rx, [0xD3, 0x00, 0x00]);
        assert_eq!(*wire.0.borrow(), vec!["cs low", "transfer", "cs high"]);
    }

    #[test]
    fn chip_select_released_after_failed_transfer() {
        let wire = Wire::default();
        let spi = LoopbackSpi {
            wire: wire.clone(),
            fail: true,
        };
        let mut bus = SpiTouchBus::new(spi, Cs(wire.clone()));
        let mut rx = [0; 3];
        assert_eq!(
            bus.transfer(&[0x92, 0xFF, 0xFF], &mut rx),
            Err(BusError::Spi(ErrorKind::Other))
        );
        assert_eq!(wire.0.borrow().last(), Some(&"cs high"));
    }
}
