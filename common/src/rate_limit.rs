//! Timing state for throttled and debounced callbacks and for coalescing
//! bursts of events into one per animation frame.
//!
//! The state machines here are clock-agnostic: callers pass the current time
//! in milliseconds from a monotonic source. Scheduling the deferred work
//! (timers, animation frames) is left to the caller.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock advanced by hand, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Leading-edge throttle. Calls within `interval_ms` of the last executed
/// call are dropped; nothing is queued.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    start: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            start: None,
        }
    }

    /// Returns true if the call at `now` should run, recording it as the
    /// new window start.
    pub fn try_acquire(&mut self, now: f64) -> bool {
        match self.start {
            Some(start) if now < start + self.interval_ms => false,
            _ => {
                self.start = Some(now);
                true
            }
        }
    }

    /// Forget the last executed call so the next one runs immediately.
    pub fn reset(&mut self) {
        self.start = None;
    }

    pub fn last_run(&self) -> Option<f64> {
        self.start
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

/// A throttled callback bound to a clock.
pub struct Throttled<F, C> {
    callback: F,
    clock: C,
    throttle: Throttle,
}

impl<F, C: Clock> Throttled<F, C> {
    pub fn new(callback: F, interval_ms: f64, clock: C) -> Self {
        Self {
            callback,
            clock,
            throttle: Throttle::new(interval_ms),
        }
    }

    /// `None` when the call fell inside the throttle window.
    pub fn call<A, R>(&mut self, arg: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.throttle.try_acquire(self.clock.now_ms()) {
            Some((self.callback)(arg))
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.throttle.reset();
    }
}

/// What the caller must do with its timers after a debounced call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebounceStep {
    /// Cancel the previously scheduled timer before arming the new one.
    pub cancel_previous: bool,
    /// Delay for the new timer.
    pub delay_ms: f64,
}

/// Trailing-edge debounce.
///
/// Every call arms a new timer. The previous timer is cancelled only when a
/// previous call exists and arrived less than `delay_ms` ago; a previous
/// timer that outlived its window is left to fire.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay_ms: f64,
    last: Option<f64>,
    armed: bool,
}

impl Debounce {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            last: None,
            armed: false,
        }
    }

    pub fn call(&mut self, now: f64) -> DebounceStep {
        let cancel_previous = self.armed
            && matches!(self.last, Some(last) if now - last < self.delay_ms);
        self.armed = true;
        self.last = Some(now);
        DebounceStep {
            cancel_previous,
            delay_ms: self.delay_ms,
        }
    }

    /// Drop all timing state. Returns true if a timer had been armed.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = false;
        self.last = None;
        was_armed
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }
}

/// Fate of the previously scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousTimer {
    /// Release the handle; clears the timer if it has not run yet.
    Drop,
    /// Keep the timer alive past its handle so it still runs.
    Forget,
}

/// A still-pending timer is kept only when the debounce does not cancel it;
/// a timer that already ran is always released.
pub fn previous_timer(step: &DebounceStep, fired: bool) -> PreviousTimer {
    if step.cancel_previous || fired {
        PreviousTimer::Drop
    } else {
        PreviousTimer::Forget
    }
}

/// Allows one outstanding animation-frame callback at a time.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    running: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the caller should request a frame now.
    pub fn try_begin(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn finish(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_drops_calls_inside_window() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.try_acquire(0.0));
        assert!(!throttle.try_acquire(50.0));
        assert!(throttle.try_acquire(150.0));
        assert_eq!(throttle.last_run(), Some(150.0));
    }

    #[test]
    fn test_throttle_window_boundary_is_inclusive() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.try_acquire(10.0));
        assert!(!throttle.try_acquire(109.9));
        assert!(throttle.try_acquire(110.0));
    }

    #[test]
    fn test_throttle_reset() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.try_acquire(0.0));
        throttle.reset();
        assert!(throttle.try_acquire(1.0));
    }

    #[test]
    fn test_throttled_callback() {
        let clock = ManualClock::new(0.0);
        let mut seen = Vec::new();
        {
            let mut throttled = Throttled::new(|x: u32| seen.push(x), 100.0, clock.clone());
            assert_eq!(throttled.call(1), Some(()));
            clock.set(50.0);
            assert_eq!(throttled.call(2), None);
            clock.set(150.0);
            assert_eq!(throttled.call(3), Some(()));
        }
        assert_eq!(seen, vec![1, 3]);
    }

    #[test]
    fn test_throttled_returns_callback_result() {
        let clock = ManualClock::new(0.0);
        let mut throttled = Throttled::new(|x: i32| x * 2, 20.0, clock.clone());
        assert_eq!(throttled.call(4), Some(8));
        clock.advance(5.0);
        assert_eq!(throttled.call(5), None);
        throttled.reset();
        assert_eq!(throttled.call(6), Some(12));
    }

    /// Drives a `Debounce` with a simulated timer queue, returning the times
    /// at which the callback ran and the argument it ran with.
    fn simulate_debounce(delay: f64, calls: &[(f64, u32)], until: f64) -> Vec<(f64, u32)> {
        let mut debounce = Debounce::new(delay);
        let mut timers: Vec<(f64, u32)> = Vec::new();
        let mut fired = Vec::new();

        for &(at, arg) in calls {
            timers.retain(|&(due, a)| {
                if due <= at {
                    fired.push((due, a));
                    false
                } else {
                    true
                }
            });
            let step = debounce.call(at);
            if step.cancel_previous {
                timers.pop();
            }
            timers.push((at + step.delay_ms, arg));
        }
        for (due, arg) in timers {
            if due <= until {
                fired.push((due, arg));
            }
        }
        fired
    }

    #[test]
    fn test_debounce_collapses_burst() {
        let fired = simulate_debounce(100.0, &[(0.0, 1), (50.0, 2)], 1000.0);
        assert_eq!(fired, vec![(150.0, 2)]);
    }

    #[test]
    fn test_debounce_spaced_calls_all_fire() {
        let fired = simulate_debounce(100.0, &[(0.0, 1), (200.0, 2)], 1000.0);
        assert_eq!(fired, vec![(100.0, 1), (300.0, 2)]);
    }

    #[test]
    fn test_debounce_first_call_never_cancels() {
        let mut debounce = Debounce::new(100.0);
        assert!(!debounce.call(0.0).cancel_previous);
        assert!(debounce.call(99.0).cancel_previous);
        assert!(!debounce.call(199.0).cancel_previous);
    }

    #[test]
    fn test_debounce_cancel() {
        let mut debounce = Debounce::new(100.0);
        assert!(!debounce.cancel());
        debounce.call(0.0);
        assert!(debounce.cancel());
        assert!(!debounce.call(10.0).cancel_previous);
    }

    #[test]
    fn test_previous_timer_released_after_it_ran() {
        let mut debounce = Debounce::new(100.0);
        debounce.call(0.0);
        // timer armed at 0 ran at 100; the spaced call must not leak it
        let step = debounce.call(200.0);
        assert!(!step.cancel_previous);
        assert_eq!(previous_timer(&step, true), PreviousTimer::Drop);
    }

    #[test]
    fn test_previous_timer_cancelled_inside_window() {
        let mut debounce = Debounce::new(100.0);
        debounce.call(0.0);
        let step = debounce.call(50.0);
        assert_eq!(previous_timer(&step, false), PreviousTimer::Drop);
    }

    #[test]
    fn test_late_previous_timer_left_to_run() {
        let mut debounce = Debounce::new(100.0);
        debounce.call(0.0);
        let step = debounce.call(150.0);
        assert_eq!(previous_timer(&step, false), PreviousTimer::Forget);
    }

    #[test]
    fn test_frame_gate() {
        let mut gate = FrameGate::new();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        assert!(gate.is_running());
        gate.finish();
        assert!(gate.try_begin());
    }

    #[test]
    fn test_frame_gate_reopens_when_frame_request_fails() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let gate = Rc::new(RefCell::new(FrameGate::new()));
        let frame_gate = gate.clone();
        assert!(gate.borrow_mut().try_begin());
        // the frame callback never runs; the listener resets its own handle
        drop(frame_gate);
        gate.borrow_mut().finish();
        assert!(!gate.borrow().is_running());
        assert!(gate.borrow_mut().try_begin());
    }
}
