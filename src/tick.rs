//! Tick counter driven by a periodic interrupt, and delays built on it.
//!
//! ```ignore
//! static TICKS: TickCounter = TickCounter::new(1000);
//!
//! #[exception]
//! fn SysTick() {
//!     TICKS.on_tick();
//! }
//!
//! let mut delay = TickDelay::with_wait(&TICKS, cortex_m::asm::wfi);
//! ```

use core::sync::atomic::{AtomicU32, Ordering};

use embedded_hal::delay::DelayNs;

/// Callback run by the periodic tick interrupt
///
/// [`TickCounter`] is the stock handler. Boards that need more work done on
/// every tick implement this on their own type and forward to the counter.
pub trait TickHandler {
    fn on_tick(&self);
}

/// 32-bit tick counter, wrapping on overflow
pub struct TickCounter {
    ticks: AtomicU32,
    rate_hz: u32,
}

impl TickCounter {
    pub const fn new(rate_hz: u32) -> Self {
        Self {
            ticks: AtomicU32::new(0),
            rate_hz,
        }
    }

    pub fn now(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn set(&self, ticks: u32) {
        self.ticks.store(ticks, Ordering::Relaxed);
    }

    /// Tick frequency in Hz
    pub fn rate_hz(&self) -> u32 {
        self.rate_hz
    }
}

impl TickHandler for TickCounter {
    fn on_tick(&self) {
        // Only the interrupt writes the counter, no read-modify-write needed
        let ticks = self.ticks.load(Ordering::Relaxed);
        self.ticks.store(ticks.wrapping_add(1), Ordering::Relaxed);
    }
}

/// Whether `now` lies past `deadline`, correct across one counter wrap
pub fn deadline_reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) > 0
}

/// SysTick reload value and clock source for a tick period in core cycles
///
/// Only built through [`SysTickConfig::for_period`], so the reload is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SysTickConfig {
    reload: u32,
    div8: bool,
}

impl SysTickConfig {
    /// Periods divisible by 8 use the divided clock to reach further.
    /// Returns `None` for a zero period or one that does not fit the 24-bit
    /// reload register.
    pub fn for_period(period: u32) -> Option<Self> {
        if period == 0 {
            return None;
        }
        let (reload, div8) = if period % 8 == 0 {
            (period / 8, true)
        } else {
            (period, false)
        };
        if reload & 0xFF00_0000 != 0 {
            return None;
        }
        Some(Self { reload, div8 })
    }

    /// Value for the 24-bit reload register
    pub fn reload(&self) -> u32 {
        self.reload
    }

    /// Clock the timer from the core clock divided by 8
    pub fn div8(&self) -> bool {
        self.div8
    }

    /// Resulting tick rate for a core clock of `core_hz`
    pub fn rate_hz(&self, core_hz: u32) -> u32 {
        let rate = core_hz / self.reload;
        if self.div8 {
            rate / 8
        } else {
            rate
        }
    }
}

/// Blocking delay that waits for the tick counter to pass a deadline
///
/// Between polls the `wait` hook runs; it spins by default, pass `wfi` to
/// sleep until the next interrupt. Resolution is one tick and every delay
/// lasts at least one tick.
pub struct TickDelay<'a, W = fn()> {
    counter: &'a TickCounter,
    wait: W,
}

impl<'a> TickDelay<'a> {
    pub fn new(counter: &'a TickCounter) -> Self {
        Self {
            counter,
            wait: core::hint::spin_loop,
        }
    }
}

impl<'a, W: FnMut()> TickDelay<'a, W> {
    pub fn with_wait(counter: &'a TickCounter, wait: W) -> Self {
        Self { counter, wait }
    }

    fn wait_ticks(&mut self, ticks: u32) {
        let deadline = self.counter.now().wrapping_add(ticks);
        while !deadline_reached(self.counter.now(), deadline) {
            (self.wait)();
        }
    }

    fn ticks_for(&self, amount: u32, per_second: u64) -> u32 {
        let ticks = (amount as u64 * self.counter.rate_hz() as u64).div_ceil(per_second);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}

impl<'a, W: FnMut()> DelayNs for TickDelay<'a, W> {
    fn delay_ns(&mut self, ns: u32) {
        let ticks = self.ticks_for(ns, 1_000_000_000);
        self.wait_ticks(ticks);
    }

    fn delay_us(&mut self, us: u32) {
        let ticks = self.ticks_for(us, 1_000_000);
        self.wait_ticks(ticks);
    }

    fn delay_ms(&mut self, ms: u32) {
        let ticks = (self.counter.rate_hz() / 1000).saturating_mul(ms);
        self.wait_ticks(ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_ordering_survives_wraparound() {
        assert!(deadline_reached(11, 10));
        assert!(!deadline_reached(10, 10));
        assert!(!deadline_reached(9, 10));
        assert!(deadline_reached(2, u32::MAX - 1));
        assert!(!deadline_reached(u32::MAX, 1));
        assert!(!deadline_reached(0, 1));
    }

    #[test]
    fn counter_wraps() {
        let counter = TickCounter::new(1000);
        counter.set(u32::MAX);
        counter.on_tick();
        assert_eq!(counter.now(), 0);
    }

    #[test]
    fn delay_waits_past_deadline() {
        let counter = TickCounter::new(1000);
        let mut delay = TickDelay::with_wait(&counter, || counter.on_tick());
        delay.delay_ms(3);
        assert_eq!(counter.now(), 4);
    }

    #[test]
    fn delay_across_counter_wrap() {
        let counter = TickCounter::new(1000);
        counter.set(u32::MAX - 1);
        let mut delay = TickDelay::with_wait(&counter, || counter.on_tick());
        delay.delay_ms(3);
        assert_eq!(counter.now(), 2);
    }

    #[test]
    fn sub_tick_delays_round_up() {
        let counter = TickCounter::new(1000);
        let mut delay = TickDelay::with_wait(&counter, || counter.on_tick());
        delay.delay_us(10);
        assert_eq!(counter.now(), 2);

        counter.set(0);
        delay.delay_ns(0);
        assert_eq!(counter.now(), 1);
    }

    #[test]
    fn systick_prefers_divided_clock() {
        assert_eq!(
            SysTickConfig::for_period(72_000),
            Some(SysTickConfig {
                reload: 9_000,
                div8: true
            })
        );
        assert_eq!(
            SysTickConfig::for_period(72_001),
            Some(SysTickConfig {
                reload: 72_001,
                div8: false
            })
        );
        assert_eq!(SysTickConfig::for_period(0), None);
        assert_eq!(SysTickConfig::for_period(0x0100_0001), None);
        assert_eq!(SysTickConfig::for_period(0x0800_0000), None);
        assert!(SysTickConfig::for_period(0x07FF_FFF8).is_some());

        let config = SysTickConfig::for_period(72_000).unwrap();
        assert_eq!(config.rate_hz(72_000_000), 1000);
    }

    #[test]
    fn shortest_period_has_nonzero_reload() {
        for period in 1..=16 {
            let config = SysTickConfig::for_period(period).unwrap();
            assert!(config.reload() > 0);
            assert_eq!(config.div8(), period % 8 == 0);
            assert_eq!(config.rate_hz(8_000_000), 8_000_000 / period);
        }
    }
}
