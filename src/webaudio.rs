//! Web Audio backend for the tone scheduler.
//!
//! One [`WebAudioDevice`] wraps one `AudioContext` for the whole session;
//! each pulse becomes a short-lived `OscillatorNode` with scheduled
//! start/stop times. Acquiring the context is the only fallible step.

use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, AudioContext, OscillatorNode, OscillatorType};

use crate::scheduler::{ToneDevice, ToneHandle};

pub struct WebAudioDevice {
    ctx: AudioContext,
}

impl WebAudioDevice {
    /// Acquire the audio output. Fails where the platform offers no audio
    /// capability; everything after construction assumes the context lives.
    pub fn new() -> Result<Self, JsValue> {
        Ok(Self { ctx: AudioContext::new()? })
    }
}

/// One oscillator of an in-flight playback.
pub struct WebTone {
    osc: Option<OscillatorNode>,
}

impl ToneHandle for WebTone {
    fn silence(&mut self) {
        if let Some(osc) = self.osc.take() {
            // stop() on an oscillator that already ended is harmless.
            osc.stop().ok();
        }
    }
}

impl ToneDevice for WebAudioDevice {
    type Tone = WebTone;

    fn clock_s(&self) -> f64 {
        self.ctx.current_time()
    }

    fn start_tone(&mut self, freq_hz: f32, start_s: f64, stop_s: f64) -> WebTone {
        // The context starts suspended until the first user gesture;
        // resume is a no-op once running.
        let _ = self.ctx.resume();
        WebTone { osc: spawn_oscillator(&self.ctx, freq_hz, start_s, stop_s).ok() }
    }

    fn run_after(&mut self, delay: Duration, f: Box<dyn FnOnce()>) {
        if let Some(win) = window() {
            let cb = Closure::once_into_js(f);
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.unchecked_ref::<js_sys::Function>(),
                delay.as_millis() as i32,
            )
            .ok();
        }
    }
}

fn spawn_oscillator(
    ctx: &AudioContext,
    freq_hz: f32,
    start_s: f64,
    stop_s: f64,
) -> Result<OscillatorNode, JsValue> {
    let osc = ctx.create_oscillator()?;
    osc.set_type(OscillatorType::Sine);
    osc.frequency().set_value(freq_hz);
    osc.connect_with_audio_node(&ctx.destination())?;
    osc.start_with_when(start_s)?;
    osc.stop_with_when(stop_s)?;
    Ok(osc)
}
