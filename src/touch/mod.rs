//! XPT2046 resistive touch controller.
//!
//! The controller is an ADC polled over a [`TouchBus`]. A touch is confirmed
//! by the pressure estimate derived from the Z1 and Z2 channels, then X and Y
//! are sampled [`JITTER`] times and averaged after dropping the extremes. Raw
//! ADC values map to pixels through [`CalibrationCoefficients`].

use embedded_hal::delay::DelayNs;

use crate::spi::TouchBus;

pub mod calibration;

/// Samples taken per averaged reading
pub const JITTER: usize = 20;

/// Samples dropped from each end of a sorted batch
pub const JITTER_CUT: usize = 3;

/// Full scale of the 12-bit ADC
pub const MAX_ADC: u16 = 4095;

/// Pressure above which the panel counts as touched
pub const DEFAULT_PRESSURE_THRESHOLD: u16 = 250;

const CMD_X: u8 = 0xD2;
const CMD_Y: u8 = 0x92;
const CMD_Z1: u8 = 0xB2;
const CMD_Z2: u8 = 0xC2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<BusE> {
    Bus(BusE),
}

/// Linear map from raw ADC values to pixels: `pixel = adc / scale - offset`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationCoefficients {
    pub scale_x: f32,
    pub scale_y: f32,
    pub offset_x: i16,
    pub offset_y: i16,
}

impl Default for CalibrationCoefficients {
    /// Empirical values for the common 320x240 ILI9325 modules
    fn default() -> Self {
        Self {
            scale_x: 11.23,
            scale_y: 15.46,
            offset_x: 14,
            offset_y: 12,
        }
    }
}

impl CalibrationCoefficients {
    /// Pixel position of a raw reading, `None` when it falls off a
    /// `width` x `height` screen
    pub fn map(&self, adc_x: u16, adc_y: u16, width: u16, height: u16) -> Option<(u16, u16)> {
        let x = map_axis(adc_x, self.scale_x, self.offset_x, width)?;
        let y = map_axis(adc_y, self.scale_y, self.offset_y, height)?;
        Some((x, y))
    }
}

fn map_axis(adc: u16, scale: f32, offset: i16, limit: u16) -> Option<u16> {
    let pixel = adc as f32 / scale - offset as f32;
    if !pixel.is_finite() || pixel < 0.0 || pixel >= limit as f32 {
        return None;
    }
    Some(pixel as u16)
}

/// Panel wiring and screen geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchConfig {
    /// The panel's X plate is read through the controller's Y channel
    pub swap_xy: bool,
    /// Report `MAX_ADC - raw` for X
    pub mirror_x: bool,
    /// Report `MAX_ADC - raw` for Y
    pub mirror_y: bool,
    pub pressure_threshold: u16,
    /// Screen size readings are mapped onto
    pub width: u16,
    pub height: u16,
    /// Missed samples tolerated while collecting one calibration batch
    pub max_restarts: u16,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            swap_xy: true,
            mirror_x: false,
            mirror_y: true,
            pressure_threshold: DEFAULT_PRESSURE_THRESHOLD,
            width: 320,
            height: 240,
            max_restarts: 64,
        }
    }
}

/// Mean of a batch after sorting it and dropping [`JITTER_CUT`] samples from
/// each end
pub fn trimmed_average(mut samples: [u16; JITTER]) -> u16 {
    samples.sort_unstable();
    let kept = &samples[JITTER_CUT..JITTER - JITTER_CUT];
    let sum: u32 = kept.iter().map(|&s| s as u32).sum();
    (sum / kept.len() as u32) as u16
}

pub struct Xpt2046<BUS> {
    bus: BUS,
    config: TouchConfig,
    calibration: CalibrationCoefficients,
}

impl<BUS> Xpt2046<BUS> {
    /// Create a driver using the default calibration
    pub fn new(bus: BUS, config: TouchConfig) -> Self {
        Self {
            bus,
            config,
            calibration: CalibrationCoefficients::default(),
        }
    }

    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    pub fn calibration(&self) -> CalibrationCoefficients {
        self.calibration
    }

    /// Use coefficients from an earlier calibration
    pub fn set_calibration(&mut self, calibration: CalibrationCoefficients) {
        self.calibration = calibration;
    }

    /// Follow a rotation of the screen readings are mapped onto
    pub fn set_screen_size(&mut self, width: u16, height: u16) {
        self.config.width = width;
        self.config.height = height;
    }

    pub fn release(self) -> BUS {
        self.bus
    }
}

impl<BUS, BusE> Xpt2046<BUS>
where
    BUS: TouchBus<Error = BusE>,
{
    /// Control bytes for the panel's X and Y axes
    fn axis_commands(&self) -> (u8, u8) {
        if self.config.swap_xy {
            (CMD_Y, CMD_X)
        } else {
            (CMD_X, CMD_Y)
        }
    }

    /// Run one conversion and return the 12-bit result
    pub fn conversion(&mut self, cmd: u8) -> Result<u16, Error<BusE>> {
        let tx = [cmd, 0xFF, 0xFF];
        let mut rx = [0; 3];
        self.bus.transfer(&tx, &mut rx).map_err(Error::Bus)?;
        let adc = ((rx[1] as u16 & 0x7F) << 8) | rx[2] as u16;
        Ok(adc >> 3)
    }

    /// Discard the first conversion after power up
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<BusE>> {
        let (x, _) = self.axis_commands();
        self.conversion(x)?;
        delay.delay_ms(1);
        Ok(())
    }

    /// Pressure estimate, `(MAX_ADC - Z2 + Z1) / 2`
    pub fn read_pressure(&mut self) -> Result<u16, Error<BusE>> {
        let z2 = self.conversion(CMD_Z2)?;
        let z1 = self.conversion(CMD_Z1)?;
        Ok((MAX_ADC - z2.min(MAX_ADC) + z1) / 2)
    }

    /// One raw X/Y reading, `None` when the panel is not pressed hard enough
    pub fn get_adc_xy(&mut self) -> Result<Option<(u16, u16)>, Error<BusE>> {
        if self.read_pressure()? <= self.config.pressure_threshold {
            return Ok(None);
        }
        let (cmd_x, cmd_y) = self.axis_commands();
        let x = self.conversion(cmd_x)?;
        let y = self.conversion(cmd_y)?;
        let x = if self.config.mirror_x { MAX_ADC - x } else { x };
        let y = if self.config.mirror_y { MAX_ADC - y } else { y };
        Ok(Some((x, y)))
    }

    /// Filtered raw reading over a batch of [`JITTER`] samples.
    ///
    /// Gives up with `None` on the first sample without contact.
    pub fn get_raw_xy(&mut self) -> Result<Option<(u16, u16)>, Error<BusE>> {
        let mut xs = [0; JITTER];
        let mut ys = [0; JITTER];
        for i in 0..JITTER {
            let Some((x, y)) = self.get_adc_xy()? else {
                return Ok(None);
            };
            xs[i] = x;
            ys[i] = y;
        }
        Ok(Some((trimmed_average(xs), trimmed_average(ys))))
    }

    /// Touch position in pixels, `None` without contact or off screen
    pub fn get_xy(&mut self) -> Result<Option<(u16, u16)>, Error<BusE>> {
        let Some((x, y)) = self.get_raw_xy()? else {
            return Ok(None);
        };
        Ok(self
            .calibration
            .map(x, y, self.config.width, self.config.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FakeDelay, FakeTouchBus};
    use proptest::prelude::*;

    fn plain() -> TouchConfig {
        TouchConfig {
            swap_xy: false,
            mirror_x: false,
            mirror_y: false,
            ..TouchConfig::default()
        }
    }

    #[test]
    fn trimmed_average_drops_extremes() {
        let samples = [5, 1, 9, 3, 7, 2, 8, 4, 6, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20];
        // mean of 4..=17 is 10.5, truncated
        assert_eq!(trimmed_average(samples), 10);

        let mut spiky = [1000; JITTER];
        spiky[0] = 0;
        spiky[7] = 4095;
        spiky[19] = 4095;
        assert_eq!(trimmed_average(spiky), 1000);
    }

    proptest! {
        #[test]
        fn trimmed_average_ignores_order(samples in prop::array::uniform20(0u16..=MAX_ADC)) {
            let mut sorted = samples;
            sorted.sort_unstable();
            let expected = sorted[3..17].iter().map(|&s| s as u32).sum::<u32>() / 14;
            let mut reversed = samples;
            reversed.reverse();
            prop_assert_eq!(trimmed_average(samples) as u32, expected);
            prop_assert_eq!(trimmed_average(reversed) as u32, expected);
        }

        #[test]
        fn mapped_points_stay_on_screen(
            x in 0u16..=MAX_ADC,
            y in 0u16..=MAX_ADC,
            scale in 1.0f32..20.0,
            offset in -50i16..50,
        ) {
            let c = CalibrationCoefficients {
                scale_x: scale,
                scale_y: scale,
                offset_x: offset,
                offset_y: offset,
            };
            if let Some((px, py)) = c.map(x, y, 320, 240) {
                prop_assert!(px < 320);
                prop_assert!(py < 240);
            }
        }
    }

    #[test]
    fn reading_requires_pressure() {
        let mut touch = Xpt2046::new(FakeTouchBus::new([None]), plain());
        assert_eq!(touch.get_adc_xy(), Ok(None));
        assert_eq!(touch.release().commands, vec![CMD_Z2, CMD_Z1]);
    }

    #[test]
    fn reading_decodes_twelve_bit_results() {
        let mut touch = Xpt2046::new(FakeTouchBus::new([Some((1234, 3000))]), plain());
        assert_eq!(touch.get_adc_xy(), Ok(Some((1234, 3000))));
        assert_eq!(
            touch.release().commands,
            vec![CMD_Z2, CMD_Z1, CMD_X, CMD_Y]
        );
    }

    #[test]
    fn swap_and_mirror_follow_config() {
        let config = TouchConfig {
            swap_xy: true,
            mirror_x: true,
            mirror_y: false,
            ..plain()
        };
        let mut touch = Xpt2046::new(FakeTouchBus::new([Some((1234, 3000))]), config);
        assert_eq!(touch.get_adc_xy(), Ok(Some((MAX_ADC - 3000, 1234))));
        assert_eq!(touch.release().commands[2..], [CMD_Y, CMD_X]);
    }

    #[test]
    fn pressure_combines_both_plates() {
        let mut touch = Xpt2046::new(FakeTouchBus::new([Some((0, 0))]), plain());
        // the fake answers Z2 = 0 and Z1 = 1000 while touched
        assert_eq!(touch.read_pressure(), Ok((4095 + 1000) / 2));
        let mut touch = Xpt2046::new(FakeTouchBus::new([]), plain());
        assert_eq!(touch.read_pressure(), Ok(0));
    }

    #[test]
    fn init_discards_one_x_conversion() {
        let mut delay = FakeDelay::default();
        let mut touch = Xpt2046::new(FakeTouchBus::default(), TouchConfig::default());
        touch.init(&mut delay).unwrap();
        assert_eq!(touch.release().commands, vec![CMD_Y]);
        assert_eq!(delay.total_ms(), 1);
    }

    #[test]
    fn raw_reading_filters_batch() {
        let mut script = vec![Some((1000, 2000)); JITTER];
        script[4] = Some((4000, 10));
        script[11] = Some((10, 4000));
        let mut touch = Xpt2046::new(FakeTouchBus::new(script), plain());
        assert_eq!(touch.get_raw_xy(), Ok(Some((1000, 2000))));
    }

    #[test]
    fn raw_reading_stops_on_lost_contact() {
        let mut script = vec![Some((1000, 2000)); JITTER];
        script[5] = None;
        let mut touch = Xpt2046::new(FakeTouchBus::new(script), plain());
        assert_eq!(touch.get_raw_xy(), Ok(None));
        assert_eq!(touch.release().remaining(), JITTER - 6);
    }

    #[test]
    fn position_uses_calibration() {
        let script = vec![Some((1000, 1000)); JITTER];
        let mut touch = Xpt2046::new(FakeTouchBus::new(script), plain());
        // 1000 / 11.23 - 14 and 1000 / 15.46 - 12
        assert_eq!(touch.get_xy(), Ok(Some((75, 52))));

        let script = vec![Some((MAX_ADC, 1000)); JITTER];
        let mut touch = Xpt2046::new(FakeTouchBus::new(script), plain());
        assert_eq!(touch.get_xy(), Ok(None));
    }

    #[test]
    fn negative_pixels_are_rejected() {
        let c = CalibrationCoefficients {
            scale_x: 10.0,
            scale_y: 10.0,
            offset_x: 20,
            offset_y: 0,
        };
        assert_eq!(c.map(150, 100, 320, 240), None);
        assert_eq!(c.map(200, 100, 320, 240), Some((0, 10)));
        let zero = CalibrationCoefficients {
            scale_x: 0.0,
            ..c
        };
        assert_eq!(zero.map(0, 100, 320, 240), None);
    }
}
