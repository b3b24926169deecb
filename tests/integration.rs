// Integration tests (native) for the `echo-dots` crate.
// These tests avoid wasm-specific functionality and exercise the scheduler
// through its public device trait so they can run under `cargo test` on the
// host.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use echo_dots::morse::{code_for, text_to_code, Symbol, MORSE_TABLE};
use echo_dots::scheduler::{total_duration, Scheduler, ToneDevice, ToneHandle, SYMBOL_GAP};

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Start { id: usize, start_s: f64, stop_s: f64 },
    Silence { id: usize },
}

type Log = Rc<RefCell<Vec<Event>>>;

struct RecordingTone {
    id: usize,
    log: Log,
}

impl ToneHandle for RecordingTone {
    fn silence(&mut self) {
        self.log.borrow_mut().push(Event::Silence { id: self.id });
    }
}

#[derive(Default)]
struct RecordingDevice {
    log: Log,
    next_id: usize,
}

impl ToneDevice for RecordingDevice {
    type Tone = RecordingTone;

    fn clock_s(&self) -> f64 {
        0.0
    }

    fn start_tone(&mut self, _freq_hz: f32, start_s: f64, stop_s: f64) -> RecordingTone {
        let id = self.next_id;
        self.next_id += 1;
        self.log.borrow_mut().push(Event::Start { id, start_s, stop_s });
        RecordingTone { id, log: self.log.clone() }
    }

    fn run_after(&mut self, _delay: Duration, _f: Box<dyn FnOnce()>) {}
}

fn recording_scheduler() -> (Scheduler<RecordingDevice>, Log) {
    let device = RecordingDevice::default();
    let log = device.log.clone();
    (Scheduler::new(device), log)
}

// Every table entry's duration matches the closed-form sum over its pattern.
#[test]
fn total_duration_matches_closed_form_for_whole_alphabet() {
    for &(ch, pattern) in MORSE_TABLE {
        let code = code_for(ch);
        let expected_on: u64 = pattern
            .chars()
            .map(|c| if c == '.' { 150 } else { 450 })
            .sum();
        let expected = Duration::from_millis(expected_on) + SYMBOL_GAP * pattern.len() as u32;
        assert_eq!(total_duration(&code), expected, "duration mismatch for '{ch}'");
    }
}

#[test]
fn word_break_adds_gap_but_no_tone() {
    let (mut sched, log) = recording_scheduler();
    sched.schedule(&text_to_code("A B"));

    // A is two tones, B is four; the break in between produces none.
    let starts: Vec<f64> = log
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Start { start_s, .. } => Some(*start_s),
            _ => None,
        })
        .collect();
    assert_eq!(starts.len(), 6);
    // dot(150) + gap + break gap before the dash of B starts
    assert!((starts[2] - (0.15 + 0.05 + 0.45 + 0.05 + 0.05)).abs() < 1e-9);
}

#[test]
fn rescheduling_silences_earlier_playback_first() {
    let (mut sched, log) = recording_scheduler();
    sched.schedule(&code_for('S'));
    sched.schedule(&code_for('O'));

    let events = log.borrow();
    let last_silence = events
        .iter()
        .rposition(|e| matches!(e, Event::Silence { .. }))
        .expect("first playback was never silenced");
    let first_new_start = events
        .iter()
        .position(|e| matches!(e, Event::Start { id, .. } if *id >= 3))
        .expect("second playback never started");
    assert!(last_silence < first_new_start);
}

#[test]
fn stopping_twice_touches_the_device_once() {
    let (mut sched, log) = recording_scheduler();
    sched.schedule(&code_for('K'));

    sched.stop();
    let interactions = log.borrow().len();
    sched.stop();
    sched.stop();
    assert_eq!(log.borrow().len(), interactions);
}

#[test]
fn unmapped_text_schedules_only_the_mapped_letters() {
    let (mut sched, log) = recording_scheduler();
    sched.schedule(&text_to_code("E#E"));

    let tone_count = log
        .borrow()
        .iter()
        .filter(|e| matches!(e, Event::Start { .. }))
        .count();
    assert_eq!(tone_count, 2);
}

#[test]
fn sos_symbol_sequence_and_duration() {
    use Symbol::{Break, Long, Short};
    let code = text_to_code("SOS");
    assert_eq!(
        code,
        vec![Short, Short, Short, Break, Long, Long, Long, Break, Short, Short, Short]
    );
    // 6 dots + 3 dashes of tone, one 50 ms gap per element
    assert_eq!(total_duration(&code), Duration::from_millis(6 * 150 + 3 * 450 + 11 * 50));
}
