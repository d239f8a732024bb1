//! Four point calibration.
//!
//! The user touches a target near each corner. Every touch is averaged over a
//! batch, assigned to a corner by the quadrant of its raw value and the
//! resulting corner readings give scale and offset for both axes.

use core::cmp::Ordering::{Greater, Less};

use embedded_hal::delay::DelayNs;

use super::{trimmed_average, CalibrationCoefficients, Error, Xpt2046, JITTER, MAX_ADC};
use crate::color::{BLACK, GREEN, RED};
use crate::graphics::Tft;
use crate::spi::TouchBus;
use crate::FrameController;

/// Distance of the targets from the screen edges
pub const TARGET_INSET: u16 = 20;

const TARGET_RADIUS: u16 = 5;
const SETTLE_MS: u32 = 100;
const SAMPLE_INTERVAL_MS: u32 = 5;
const RELEASE_PAUSE_MS: u32 = 1000;
const SUMMARY_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Corner {
    LeftTop,
    RightTop,
    RightDown,
    LeftDown,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::LeftTop,
        Corner::RightTop,
        Corner::RightDown,
        Corner::LeftDown,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Target positions in pixels, indexed by [`Corner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationTargets {
    points: [(u16, u16); 4],
}

impl CalibrationTargets {
    pub fn for_screen(width: u16, height: u16) -> Self {
        let right = width.saturating_sub(TARGET_INSET);
        let bottom = height.saturating_sub(TARGET_INSET);
        Self {
            points: [
                (TARGET_INSET, TARGET_INSET),
                (right, TARGET_INSET),
                (right, bottom),
                (TARGET_INSET, bottom),
            ],
        }
    }

    pub fn point(&self, corner: Corner) -> (u16, u16) {
        self.points[corner.index()]
    }

    pub fn points(&self) -> &[(u16, u16); 4] {
        &self.points
    }
}

/// Corner a raw reading belongs to, by quadrant around the ADC midpoint.
/// Readings exactly on a midline belong to none.
pub fn classify(x: u16, y: u16) -> Option<Corner> {
    let mid = MAX_ADC / 2;
    match (x.cmp(&mid), y.cmp(&mid)) {
        (Less, Less) => Some(Corner::LeftTop),
        (Greater, Less) => Some(Corner::RightTop),
        (Greater, Greater) => Some(Corner::RightDown),
        (Less, Greater) => Some(Corner::LeftDown),
        _ => None,
    }
}

/// Coefficients from the raw readings at the four targets, indexed by
/// [`Corner`]. Opposite edges are averaged per axis.
pub fn compute_coefficients(
    raw: &[(u16, u16); 4],
    targets: &CalibrationTargets,
) -> CalibrationCoefficients {
    let [left_top, right_top, right_down, left_down] = *raw;
    let mean = |a: u16, b: u16| ((a as u32 + b as u32) / 2) as f32;

    let far_x = mean(right_down.0, right_top.0);
    let near_x = mean(left_top.0, left_down.0);
    let far_y = mean(right_down.1, left_down.1);
    let near_y = mean(left_top.1, right_top.1);

    let (x1, y1) = targets.point(Corner::LeftTop);
    let (x3, y3) = targets.point(Corner::RightDown);

    let scale_x = (far_x - near_x) / (x3 as f32 - x1 as f32);
    let scale_y = (far_y - near_y) / (y3 as f32 - y1 as f32);

    CalibrationCoefficients {
        scale_x,
        scale_y,
        offset_x: (near_x / scale_x - x1 as f32) as i16,
        offset_y: (near_y / scale_y - y1 as f32) as i16,
    }
}

/// Screen side of the calibration routine
pub trait CalibrationUi {
    type Error;

    /// Show instructions and the targets still to touch
    fn start(&mut self, targets: &CalibrationTargets) -> Result<(), Self::Error>;

    /// Acknowledge the target of a recorded corner
    fn mark(&mut self, corner: Corner, point: (u16, u16)) -> Result<(), Self::Error>;

    /// Present the result; may block for a while
    fn finish<D: DelayNs>(
        &mut self,
        coefficients: &CalibrationCoefficients,
        delay: &mut D,
    ) -> Result<(), Self::Error>;
}

impl<C: FrameController> CalibrationUi for Tft<C> {
    type Error = crate::Error<C::PinError>;

    fn start(&mut self, targets: &CalibrationTargets) -> Result<(), Self::Error> {
        self.fill_screen(BLACK)?;
        self.set_cursor(0, self.height() / 4);
        self.write_text("\t\t\tSCREEN CALIBRATION\n")?;
        self.write_text("\t\tTouch points on the screen\n")?;
        for &(x, y) in targets.points() {
            self.fill_circle(x, y, TARGET_RADIUS, GREEN)?;
        }
        Ok(())
    }

    fn mark(&mut self, _corner: Corner, (x, y): (u16, u16)) -> Result<(), Self::Error> {
        self.fill_circle(x, y, TARGET_RADIUS, RED)
    }

    fn finish<D: DelayNs>(
        &mut self,
        c: &CalibrationCoefficients,
        delay: &mut D,
    ) -> Result<(), Self::Error> {
        self.fill_screen(BLACK)?;
        self.set_cursor(1, 1);
        self.print_fmt(format_args!(
            "SCREEN CALIBRATION FINISHED\nkX = {:.6}\nkY = {:.6}\noffsetX = {:4}\noffsetY = {:4}\n",
            c.scale_x, c.scale_y, c.offset_x, c.offset_y
        ))?;
        delay.delay_ms(SUMMARY_MS);
        self.fill_screen(BLACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError<BusE, UiE> {
    Touch(Error<BusE>),
    Ui(UiE),
}

impl<BusE, UiE> From<Error<BusE>> for CalibrationError<BusE, UiE> {
    fn from(e: Error<BusE>) -> Self {
        Self::Touch(e)
    }
}

impl<BUS, BusE> Xpt2046<BUS>
where
    BUS: TouchBus<Error = BusE>,
{
    /// Run the interactive calibration and adopt its result.
    ///
    /// Blocks until a reading has been recorded for every corner. A touch
    /// that loses contact more than `max_restarts` times while its batch is
    /// collected is dropped and the routine waits for a new one.
    pub fn calibrate<UI, D>(
        &mut self,
        ui: &mut UI,
        delay: &mut D,
    ) -> Result<CalibrationCoefficients, CalibrationError<BusE, UI::Error>>
    where
        UI: CalibrationUi,
        D: DelayNs,
    {
        let targets = CalibrationTargets::for_screen(self.config.width, self.config.height);
        ui.start(&targets).map_err(CalibrationError::Ui)?;

        let mut raw = [(0, 0); 4];
        let mut recorded = [false; 4];

        while recorded.contains(&false) {
            while self.get_adc_xy()?.is_none() {}
            delay.delay_ms(SETTLE_MS);

            let Some((x, y)) = self.sample_held_touch(delay)? else {
                #[cfg(feature = "defmt")]
                defmt::warn!("xpt2046: touch lost during calibration, retrying");
                continue;
            };

            if let Some(corner) = classify(x, y) {
                let i = corner.index();
                if !recorded[i] {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("xpt2046: {} at raw {}, {}", corner, x, y);
                    raw[i] = (x, y);
                    recorded[i] = true;
                    ui.mark(corner, targets.point(corner))
                        .map_err(CalibrationError::Ui)?;
                }
            }

            while self.get_adc_xy()?.is_some() {}
            delay.delay_ms(RELEASE_PAUSE_MS);
        }

        let coefficients = compute_coefficients(&raw, &targets);
        #[cfg(feature = "defmt")]
        defmt::info!("xpt2046: calibrated {}", coefficients);
        self.calibration = coefficients;
        ui.finish(&coefficients, delay)
            .map_err(CalibrationError::Ui)?;
        Ok(coefficients)
    }

    /// Collect a full batch from a held touch, starting over on every miss
    fn sample_held_touch<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<Option<(u16, u16)>, Error<BusE>> {
        let mut xs = [0; JITTER];
        let mut ys = [0; JITTER];
        let mut restarts = 0;
        let mut i = 0;
        while i < JITTER {
            match self.get_adc_xy()? {
                Some((x, y)) => {
                    xs[i] = x;
                    ys[i] = y;
                    i += 1;
                }
                None => {
                    restarts += 1;
                    if restarts > self.config.max_restarts {
                        return Ok(None);
                    }
                    i = 0;
                }
            }
            delay.delay_ms(SAMPLE_INTERVAL_MS);
        }
        Ok(Some((trimmed_average(xs), trimmed_average(ys))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FakeDelay, FakeFrames, FakeTouchBus};
    use crate::touch::TouchConfig;
    use core::convert::Infallible;
    use proptest::prelude::*;

    fn plain() -> TouchConfig {
        TouchConfig {
            swap_xy: false,
            mirror_x: false,
            mirror_y: false,
            ..TouchConfig::default()
        }
    }

    /// Raw readings a panel with `scale` ADC steps per pixel and `offset`
    /// pixels of dead border reports at the targets of a 320x240 screen
    fn readings(scale: u16, offset: u16) -> [(u16, u16); 4] {
        let targets = CalibrationTargets::for_screen(320, 240);
        Corner::ALL.map(|c| {
            let (x, y) = targets.point(c);
            ((x + offset) * scale, (y + offset) * scale)
        })
    }

    /// One touch as the calibration loop consumes it: the detecting sample,
    /// a full batch, then release
    fn press(script: &mut Vec<Option<(u16, u16)>>, at: (u16, u16)) {
        script.extend(core::iter::repeat(Some(at)).take(JITTER + 1));
        script.push(None);
    }

    #[derive(Default)]
    struct RecordingUi {
        started: bool,
        marked: Vec<(Corner, (u16, u16))>,
        finished: Option<CalibrationCoefficients>,
    }

    impl CalibrationUi for RecordingUi {
        type Error = Infallible;

        fn start(&mut self, _targets: &CalibrationTargets) -> Result<(), Infallible> {
            self.started = true;
            Ok(())
        }

        fn mark(&mut self, corner: Corner, point: (u16, u16)) -> Result<(), Infallible> {
            self.marked.push((corner, point));
            Ok(())
        }

        fn finish<D: DelayNs>(
            &mut self,
            coefficients: &CalibrationCoefficients,
            _delay: &mut D,
        ) -> Result<(), Infallible> {
            self.finished = Some(*coefficients);
            Ok(())
        }
    }

    #[test]
    fn targets_are_inset() {
        let t = CalibrationTargets::for_screen(320, 240);
        assert_eq!(t.point(Corner::LeftTop), (20, 20));
        assert_eq!(t.point(Corner::RightTop), (300, 20));
        assert_eq!(t.point(Corner::RightDown), (300, 220));
        assert_eq!(t.point(Corner::LeftDown), (20, 220));
    }

    #[test]
    fn quadrants() {
        assert_eq!(classify(100, 100), Some(Corner::LeftTop));
        assert_eq!(classify(4000, 100), Some(Corner::RightTop));
        assert_eq!(classify(4000, 4000), Some(Corner::RightDown));
        assert_eq!(classify(100, 4000), Some(Corner::LeftDown));
        assert_eq!(classify(2047, 100), None);
        assert_eq!(classify(100, 2047), None);
    }

    proptest! {
        #[test]
        fn coefficients_recover_linear_panel(scale in 1u16..=12, offset in 0u16..=15) {
            let targets = CalibrationTargets::for_screen(320, 240);
            let c = compute_coefficients(&readings(scale, offset), &targets);
            prop_assert_eq!(c.scale_x, scale as f32);
            prop_assert_eq!(c.scale_y, scale as f32);
            prop_assert_eq!(c.offset_x, offset as i16);
            prop_assert_eq!(c.offset_y, offset as i16);

            for corner in Corner::ALL {
                let (rx, ry) = readings(scale, offset)[corner as usize];
                prop_assert_eq!(c.map(rx, ry, 320, 240), Some(targets.point(corner)));
            }
        }
    }

    #[test]
    fn calibration_records_every_corner() {
        let raw = readings(12, 5);
        let mut script = Vec::new();
        for &r in &raw {
            press(&mut script, r);
        }
        let mut touch = Xpt2046::new(FakeTouchBus::new(script), plain());
        let mut ui = RecordingUi::default();
        let mut delay = FakeDelay::default();

        let c = touch.calibrate(&mut ui, &mut delay).unwrap();
        let expected = CalibrationCoefficients {
            scale_x: 12.0,
            scale_y: 12.0,
            offset_x: 5,
            offset_y: 5,
        };
        assert_eq!(c, expected);
        assert_eq!(touch.calibration(), expected);
        assert!(ui.started);
        assert_eq!(ui.finished, Some(expected));
        let targets = CalibrationTargets::for_screen(320, 240);
        assert_eq!(
            ui.marked,
            Corner::ALL.map(|c| (c, targets.point(c))).to_vec()
        );
        // settle, batch and release pause per corner
        assert_eq!(delay.total_ms(), 4 * (100 + 20 * 5 + 1000));
        assert_eq!(touch.release().remaining(), 0);
    }

    #[test]
    fn repeated_corner_keeps_first_reading() {
        let raw = readings(12, 5);
        let mut script = Vec::new();
        press(&mut script, raw[0]);
        press(&mut script, (100, 100));
        for &r in &raw[1..] {
            press(&mut script, r);
        }
        let mut touch = Xpt2046::new(FakeTouchBus::new(script), plain());
        let mut ui = RecordingUi::default();

        let c = touch.calibrate(&mut ui, &mut FakeDelay::default()).unwrap();
        assert_eq!((c.offset_x, c.offset_y), (5, 5));
        assert_eq!(ui.marked.len(), 4);
    }

    #[test]
    fn unsteady_touch_is_dropped() {
        let raw = readings(12, 5);
        let mut script = vec![Some(raw[0]); 6];
        script.push(None);
        for &r in &raw {
            press(&mut script, r);
        }
        let config = TouchConfig {
            max_restarts: 0,
            ..plain()
        };
        let mut touch = Xpt2046::new(FakeTouchBus::new(script), config);
        let mut ui = RecordingUi::default();

        let c = touch.calibrate(&mut ui, &mut FakeDelay::default()).unwrap();
        assert_eq!(c.scale_x, 12.0);
        assert_eq!(ui.marked.len(), 4);
        assert_eq!(touch.release().remaining(), 0);
    }

    #[test]
    fn brief_miss_restarts_batch() {
        let raw = readings(12, 5);
        let mut script = vec![Some(raw[0]); 4];
        script.push(None);
        press(&mut script, raw[0]);
        for &r in &raw[1..] {
            press(&mut script, r);
        }
        let mut touch = Xpt2046::new(FakeTouchBus::new(script), plain());
        let mut ui = RecordingUi::default();
        let mut delay = FakeDelay::default();

        touch.calibrate(&mut ui, &mut delay).unwrap();
        // three samples and the miss before the batch starts over
        assert_eq!(delay.total_ms(), 4 * 1200 + 4 * 5);
        assert_eq!(touch.release().remaining(), 0);
    }

    #[test]
    fn screen_shows_targets_and_summary() {
        let mut tft = Tft::new(FakeFrames::new(320, 240));
        let targets = CalibrationTargets::for_screen(320, 240);

        tft.start(&targets).unwrap();
        for &(x, y) in targets.points() {
            assert_eq!(tft.controller().pixel(x, y), GREEN);
        }

        tft.mark(Corner::RightTop, (300, 20)).unwrap();
        assert_eq!(tft.controller().pixel(300, 20), RED);
        assert_eq!(tft.controller().pixel(20, 20), GREEN);

        let mut delay = FakeDelay::default();
        tft.finish(&CalibrationCoefficients::default(), &mut delay)
            .unwrap();
        assert_eq!(delay.total_ms(), 5000);
        assert_eq!(tft.controller().count(BLACK), 320 * 240);
    }
}
