//! EchoDots core crate.
//!
//! A browser Morse-code trainer: a practice keyboard that sounds out
//! letters, a free-text translator, and three quiz levels (listen & pick,
//! keyed dot/dash entry, word decoding). Playback goes through the tone
//! scheduler in [`scheduler`] against the Web Audio backend in
//! [`webaudio`]; everything else is DOM glue in `screens`.

use wasm_bindgen::prelude::*;

pub mod morse;
pub mod rng;
pub mod scheduler;
pub mod webaudio;

mod screens;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Shared word bank for the decoding quiz
// -----------------------------------------------------------------------------

pub const WORD_BANK: &[&str] = &[
    "ECHO", "CODE", "DOT", "PULSE", "SIGNAL", "START", "OPERATOR", "SPROUT", "COMMANDER",
    "DECODER",
];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Boot the game UI on the landing screen. Fails when the document is
/// unavailable or the platform offers no audio output.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    screens::start()
}
