//! Tone playback scheduling.
//!
//! [`Scheduler`] turns a symbol sequence into a timeline of tone pulses and
//! drives an injected audio device through it. The device is abstracted
//! behind [`ToneDevice`] so the scheduling logic runs identically against
//! the real Web Audio backend and a recording fake in tests.
//!
//! At most one playback is audible at a time: scheduling silences whatever
//! the previous call left sounding before any new tone is created.

use std::time::Duration;

use crate::morse::Symbol;

/// Tone length of a dot.
pub const SHORT_ON: Duration = Duration::from_millis(150);
/// Tone length of a dash.
pub const LONG_ON: Duration = Duration::from_millis(450);
/// Silence after every element before the next one may start.
pub const SYMBOL_GAP: Duration = Duration::from_millis(50);
/// Sine frequency of every pulse.
pub const TONE_HZ: f32 = 700.0;

fn on_duration(sym: Symbol) -> Option<Duration> {
    match sym {
        Symbol::Short => Some(SHORT_ON),
        Symbol::Long => Some(LONG_ON),
        Symbol::Break => None,
    }
}

/// One scheduled tone event, relative to the start of its playback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub start_offset: Duration,
    pub on_duration: Duration,
    pub tone_hz: f32,
}

/// Pulse timeline for a symbol sequence. Pulses are strictly ordered and
/// non-overlapping; a [`Symbol::Break`] emits no pulse but still advances
/// the cursor by the gap.
pub fn pulse_timeline(code: &[Symbol], tone_hz: f32) -> Vec<Pulse> {
    let mut cursor = Duration::ZERO;
    let mut pulses = Vec::new();
    for &sym in code {
        if let Some(on) = on_duration(sym) {
            pulses.push(Pulse { start_offset: cursor, on_duration: on, tone_hz });
            cursor += on;
        }
        cursor += SYMBOL_GAP;
    }
    pulses
}

/// Total wall time a sequence occupies: tone time plus one gap per element.
pub fn total_duration(code: &[Symbol]) -> Duration {
    code.iter()
        .map(|&sym| on_duration(sym).unwrap_or(Duration::ZERO) + SYMBOL_GAP)
        .sum()
}

// -----------------------------------------------------------------------------
// Device abstraction
// -----------------------------------------------------------------------------

/// A single already-started tone generator.
pub trait ToneHandle {
    /// Immediately silence the generator. Must be safe on a generator that
    /// already ended naturally.
    fn silence(&mut self);
}

/// The audio output the scheduler drives.
///
/// Construction of the concrete device is the only fallible step; every
/// trait operation assumes a working device.
pub trait ToneDevice {
    type Tone: ToneHandle;

    /// Device clock in seconds.
    fn clock_s(&self) -> f64;

    /// Create a tone generator sounding `freq_hz` over `[start_s, stop_s]`
    /// on the device clock.
    fn start_tone(&mut self, freq_hz: f32, start_s: f64, stop_s: f64) -> Self::Tone;

    /// Run `f` once after `delay` has elapsed on the host event loop.
    fn run_after(&mut self, delay: Duration, f: Box<dyn FnOnce()>);
}

// -----------------------------------------------------------------------------
// Playback handle
// -----------------------------------------------------------------------------

/// Observable playback lifecycle. The idle phase (nothing scheduled yet) is
/// represented by the scheduler holding no handle at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Pulses are registered with the device and may still sound.
    Scheduled,
    /// The last pulse's stop time has elapsed.
    Completed,
    /// Explicitly silenced before natural completion.
    Stopped,
}

/// The tone generators of one `schedule` call, in creation order.
pub struct PlaybackHandle<T: ToneHandle> {
    tones: Vec<T>,
    end_s: f64,
    stopped: bool,
}

impl<T: ToneHandle> PlaybackHandle<T> {
    pub fn state(&self, clock_s: f64) -> PlaybackState {
        if self.stopped {
            PlaybackState::Stopped
        } else if clock_s >= self.end_s {
            PlaybackState::Completed
        } else {
            PlaybackState::Scheduled
        }
    }

    /// Device-clock time at which the last scheduled gap ends.
    pub fn end_s(&self) -> f64 {
        self.end_s
    }

    pub fn tone_count(&self) -> usize {
        self.tones.len()
    }

    /// Silence every generator still registered. Idempotent: the second
    /// call touches no generator again.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        for tone in &mut self.tones {
            tone.silence();
        }
        self.stopped = true;
    }
}

// -----------------------------------------------------------------------------
// Scheduler
// -----------------------------------------------------------------------------

/// Owns the audio device and the playback currently in flight.
pub struct Scheduler<D: ToneDevice> {
    device: D,
    tone_hz: f32,
    active: Option<PlaybackHandle<D::Tone>>,
}

impl<D: ToneDevice> Scheduler<D> {
    pub fn new(device: D) -> Self {
        Self::with_tone(device, TONE_HZ)
    }

    pub fn with_tone(device: D, tone_hz: f32) -> Self {
        Self { device, tone_hz, active: None }
    }

    /// Register the sequence's pulses with the device and return its total
    /// duration. A playback still sounding from an earlier call is silenced
    /// first, so old and new pulses never overlap.
    pub fn schedule(&mut self, code: &[Symbol]) -> Duration {
        self.stop();
        let base = self.device.clock_s();
        let tones = pulse_timeline(code, self.tone_hz)
            .into_iter()
            .map(|p| {
                let start = base + p.start_offset.as_secs_f64();
                let stop = start + p.on_duration.as_secs_f64();
                self.device.start_tone(p.tone_hz, start, stop)
            })
            .collect();
        let total = total_duration(code);
        self.active = Some(PlaybackHandle {
            tones,
            end_s: base + total.as_secs_f64(),
            stopped: false,
        });
        total
    }

    /// [`Scheduler::schedule`], plus a fire-once callback invoked when the
    /// sequence's total duration has elapsed.
    pub fn schedule_then(&mut self, code: &[Symbol], done: impl FnOnce() + 'static) -> Duration {
        let total = self.schedule(code);
        self.device.run_after(total, Box::new(done));
        total
    }

    /// Silence the current playback, if any. Safe to call at any time.
    pub fn stop(&mut self) {
        if let Some(handle) = self.active.as_mut() {
            handle.stop();
        }
    }

    pub fn playback(&self) -> Option<&PlaybackHandle<D::Tone>> {
        self.active.as_ref()
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morse::{text_to_code, Symbol::*};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Start { id: usize, freq: f32, start_s: f64, stop_s: f64 },
        Silence { id: usize },
    }

    type Log = Rc<RefCell<Vec<Event>>>;
    type Deferred = Rc<RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>>;

    struct FakeTone {
        id: usize,
        log: Log,
    }

    impl ToneHandle for FakeTone {
        fn silence(&mut self) {
            self.log.borrow_mut().push(Event::Silence { id: self.id });
        }
    }

    struct FakeDevice {
        log: Log,
        deferred: Deferred,
        clock: Rc<Cell<f64>>,
        next_id: usize,
    }

    impl FakeDevice {
        fn new() -> (Self, Log, Deferred, Rc<Cell<f64>>) {
            let log: Log = Rc::default();
            let deferred: Deferred = Rc::default();
            let clock = Rc::new(Cell::new(0.0));
            let dev = Self {
                log: log.clone(),
                deferred: deferred.clone(),
                clock: clock.clone(),
                next_id: 0,
            };
            (dev, log, deferred, clock)
        }
    }

    impl ToneDevice for FakeDevice {
        type Tone = FakeTone;

        fn clock_s(&self) -> f64 {
            self.clock.get()
        }

        fn start_tone(&mut self, freq_hz: f32, start_s: f64, stop_s: f64) -> FakeTone {
            let id = self.next_id;
            self.next_id += 1;
            self.log
                .borrow_mut()
                .push(Event::Start { id, freq: freq_hz, start_s, stop_s });
            FakeTone { id, log: self.log.clone() }
        }

        fn run_after(&mut self, delay: Duration, f: Box<dyn FnOnce()>) {
            self.deferred.borrow_mut().push((delay, f));
        }
    }

    fn starts(log: &Log) -> Vec<(f64, f64)> {
        log.borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Start { start_s, stop_s, .. } => Some((*start_s, *stop_s)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn total_duration_closed_form() {
        // dot + dash + gap each: 200 + 500
        assert_eq!(total_duration(&[Short, Long]), Duration::from_millis(700));
        // break contributes the gap only
        assert_eq!(total_duration(&[Break]), Duration::from_millis(50));
        assert_eq!(total_duration(&[]), Duration::ZERO);
    }

    #[test]
    fn timeline_is_ordered_and_gapped() {
        let pulses = pulse_timeline(&[Short, Break, Short], TONE_HZ);
        assert_eq!(pulses.len(), 2);
        assert_eq!(pulses[0].start_offset, Duration::ZERO);
        assert_eq!(pulses[0].on_duration, SHORT_ON);
        // dot on + gap + break gap
        assert_eq!(pulses[1].start_offset, Duration::from_millis(250));
    }

    #[test]
    fn schedule_emits_nonoverlapping_pulses_at_tone_hz() {
        let (dev, log, _, _) = FakeDevice::new();
        let mut sched = Scheduler::new(dev);
        sched.schedule(&text_to_code("SOS"));

        let spans = starts(&log);
        assert_eq!(spans.len(), 9);
        for win in spans.windows(2) {
            let (_, stop_a) = win[0];
            let (start_b, _) = win[1];
            assert!(start_b >= stop_a, "pulse overlap: {stop_a} > {start_b}");
        }
        assert!(log.borrow().iter().all(|e| match e {
            Event::Start { freq, .. } => *freq == TONE_HZ,
            _ => true,
        }));
    }

    #[test]
    fn schedule_preempts_previous_playback() {
        let (dev, log, _, _) = FakeDevice::new();
        let mut sched = Scheduler::new(dev);
        sched.schedule(&[Short, Short]);
        sched.schedule(&[Long]);

        // The first playback's generators are silenced before the second
        // playback's first start is registered.
        let events = log.borrow();
        let silence_positions: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, Event::Silence { id } if *id < 2))
            .map(|(i, _)| i)
            .collect();
        let second_start = events
            .iter()
            .position(|e| matches!(e, Event::Start { id: 2, .. }))
            .expect("second playback never started");
        assert_eq!(silence_positions.len(), 2);
        assert!(silence_positions.iter().all(|&i| i < second_start));
    }

    #[test]
    fn stop_is_idempotent() {
        let (dev, log, _, _) = FakeDevice::new();
        let mut sched = Scheduler::new(dev);
        sched.schedule(&[Short, Long, Short]);

        sched.stop();
        let after_first = log.borrow().len();
        sched.stop();
        assert_eq!(log.borrow().len(), after_first);
    }

    #[test]
    fn stop_without_playback_is_a_noop() {
        let (dev, log, _, _) = FakeDevice::new();
        let mut sched: Scheduler<FakeDevice> = Scheduler::new(dev);
        sched.stop();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn playback_state_transitions() {
        let (dev, _, _, clock) = FakeDevice::new();
        let mut sched = Scheduler::new(dev);
        let total = sched.schedule(&[Short]);

        let end = total.as_secs_f64();
        assert_eq!(sched.playback().unwrap().state(0.0), PlaybackState::Scheduled);
        assert_eq!(sched.playback().unwrap().state(end), PlaybackState::Completed);

        // A new schedule starts over; stopping it early is terminal.
        clock.set(10.0);
        sched.schedule(&[Long]);
        sched.stop();
        let handle = sched.playback().unwrap();
        assert_eq!(handle.state(10.0), PlaybackState::Stopped);
        assert_eq!(handle.state(1000.0), PlaybackState::Stopped);
    }

    #[test]
    fn empty_code_schedules_nothing() {
        let (dev, log, _, _) = FakeDevice::new();
        let mut sched = Scheduler::new(dev);
        let total = sched.schedule(&[]);
        assert_eq!(total, Duration::ZERO);
        assert!(log.borrow().is_empty());
        assert_eq!(sched.playback().unwrap().tone_count(), 0);
    }

    #[test]
    fn schedule_then_defers_completion_for_total_duration() {
        let (dev, _, deferred, _) = FakeDevice::new();
        let mut sched = Scheduler::new(dev);
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let total = sched.schedule_then(&text_to_code("E"), move || flag.set(true));

        let (delay, callback) = deferred.borrow_mut().pop().expect("no completion registered");
        assert_eq!(delay, total);
        assert!(!fired.get());
        callback();
        assert!(fired.get());
    }
}
