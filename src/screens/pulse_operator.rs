//! Pulse Operator (Skilled): hear a whole word, type it back.
//!
//! A run draws a shuffled slice of the shared word bank. The first word
//! plays after a short pre-roll; replays are on demand. A miss reveals the
//! word and the same word is asked again.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::{
    back_arrow, cancel_defer, defer, el, modal, on_click, rerender, text_el, with_app, App,
    QuizTiming, Screen, BG_MODAL, BG_MODAL_RESULT, BG_QUIZ, BORDER_QUIZ, BORDER_SOFT, FONT,
    TEXT_DIM,
};
use crate::morse;
use crate::WORD_BANK;

const TIMING: QuizTiming = QuizTiming {
    preroll_ms: 100,
    correct_dismiss_ms: 1200,
    wrong_dismiss_ms: 2000,
};

const WORD_CHOICES: [usize; 3] = [5, 10, 20];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Select,
    Quiz,
    Done,
}

pub(crate) struct OperatorState {
    pub phase: Phase,
    pub words: Vec<&'static str>,
    pub idx: usize,
    pub input: String,
    pub verdict: Option<bool>,
    pub modal_timer: Option<i32>,
}

impl Default for OperatorState {
    fn default() -> Self {
        Self {
            phase: Phase::Select,
            words: Vec::new(),
            idx: 0,
            input: String::new(),
            verdict: None,
            modal_timer: None,
        }
    }
}

pub(crate) fn render(doc: &Document, root: &Element, app: &App) -> Result<(), JsValue> {
    let s = &app.operator;
    let page = el(
        doc,
        "div",
        &format!(
            "position:relative; min-height:100vh; background:{BG_QUIZ}; display:flex; \
             flex-direction:column; align-items:center; padding:24px 16px; font-family:{FONT};"
        ),
    )?;
    back_arrow(doc, &page, Screen::Levels)?;

    page.append_child(&text_el(
        doc,
        "h1",
        &format!(
            "color:{TEXT_DIM}; font-size:3rem; font-weight:700; margin:26px 0 0 0; \
             letter-spacing:0.08em; text-shadow:0 6px 16px rgba(0,0,0,0.22);"
        ),
        "Pulse Operator",
    )?.into())?;
    page.append_child(&text_el(
        doc,
        "div",
        &format!("color:{TEXT_DIM}; font-size:1rem; margin:5px 0 24px 0;"),
        "Listen closely to the Morse signal sequence.",
    )?.into())?;

    let board = el(
        doc,
        "div",
        &format!(
            "width:900px; max-width:95vw; border:5px solid {BORDER_QUIZ}; border-radius:18px; \
             display:flex; flex-direction:column; align-items:center; gap:28px; padding:48px 24px;"
        ),
    )?;

    let play = text_el(
        doc,
        "button",
        &format!(
            "padding:12px 36px; border:3px solid {BORDER_QUIZ}; border-radius:16px; \
             background:transparent; color:#fff; font-size:1.4rem; cursor:pointer; \
             font-family:{FONT};"
        ),
        "▶ Play",
    )?;
    if s.phase != Phase::Quiz {
        play.set_attribute("disabled", "")?;
    }
    on_click(&play, || with_app(play_word));
    board.append_child(&play)?;

    let field = el(
        doc,
        "input",
        &format!(
            "width:80%; box-sizing:border-box; font-size:1.8rem; font-weight:700; \
             padding:0.5em 1em; border-radius:1em; border:2px solid {BORDER_SOFT}; \
             background:transparent; color:#fff; outline:none; text-align:center; \
             letter-spacing:0.12em; font-family:{FONT};"
        ),
    )?;
    field.set_attribute("type", "text")?;
    field.set_attribute("placeholder", "Input Text")?;
    let field: HtmlInputElement = field.dyn_into()?;
    field.set_value(&s.input);
    hook_input(&field);
    board.append_child(&field)?;

    let submit = text_el(
        doc,
        "button",
        &format!(
            "padding:10px 40px; border:3px solid {BORDER_QUIZ}; border-radius:16px; \
             background:transparent; color:#fff; font-size:1.4rem; cursor:pointer; \
             font-family:{FONT};"
        ),
        "Submit",
    )?;
    if s.phase != Phase::Quiz {
        submit.set_attribute("disabled", "")?;
    }
    on_click(&submit, || with_app(submit_guess));
    board.append_child(&submit)?;
    page.append_child(&board)?;

    match (s.phase, s.verdict) {
        (Phase::Select, _) => render_select_modal(doc, &page)?,
        (Phase::Done, _) => render_done_modal(doc, &page)?,
        (Phase::Quiz, Some(hit)) => {
            let answer = s.words.get(s.idx).copied().unwrap_or("");
            render_verdict_modal(doc, &page, hit, answer)?;
        }
        _ => {}
    }

    root.append_child(&page)?;
    Ok(())
}

fn render_select_modal(doc: &Document, page: &Element) -> Result<(), JsValue> {
    let (_overlay, body) = modal(doc, page, BG_MODAL)?;
    body.append_child(&text_el(
        doc,
        "div",
        "font-size:2rem; font-weight:700; color:#fff; margin-bottom:2.2rem;",
        "Selection Mode",
    )?.into())?;
    let row = el(doc, "div", "display:flex; gap:2rem; flex-wrap:wrap; justify-content:center;")?;
    for count in WORD_CHOICES {
        let btn = text_el(
            doc,
            "button",
            &format!(
                "background:transparent; color:#fff; border:3px solid {BORDER_QUIZ}; \
                 border-radius:1em; font-size:1.3rem; font-weight:600; padding:0.7em 1.8em; \
                 cursor:pointer; font-family:{FONT};"
            ),
            &format!("{count} Words"),
        )?;
        on_click(&btn, move || with_app(move |app| begin(app, count)));
        row.append_child(&btn)?;
    }
    body.append_child(&row)?;
    Ok(())
}

fn render_verdict_modal(doc: &Document, page: &Element, hit: bool, answer: &str) -> Result<(), JsValue> {
    let (overlay, body) = modal(doc, page, BG_MODAL_RESULT)?;
    on_click(&overlay, || with_app(dismiss_verdict));
    body.append_child(&text_el(
        doc,
        "div",
        "font-size:2.5rem; font-weight:bold; color:#222; margin-bottom:1.2rem;",
        if hit { "Correct" } else { "Incorrect" },
    )?.into())?;
    if !hit {
        body.append_child(&text_el(
            doc,
            "div",
            "font-size:1.4rem; color:#222; margin-bottom:1.2rem;",
            "Correct answer",
        )?.into())?;
        body.append_child(&text_el(
            doc,
            "div",
            "font-size:2rem; color:#fff; font-weight:700; letter-spacing:0.12em;",
            answer,
        )?.into())?;
    }
    Ok(())
}

fn render_done_modal(doc: &Document, page: &Element) -> Result<(), JsValue> {
    let (_overlay, body) = modal(doc, page, BG_MODAL)?;
    body.append_child(&text_el(
        doc,
        "div",
        "font-size:2.4rem; font-weight:700; color:#fff; margin-bottom:2.2rem;",
        "Finished!",
    )?.into())?;
    let restart = text_el(
        doc,
        "button",
        &format!(
            "background:transparent; color:#fff; border:3px solid {BORDER_QUIZ}; \
             border-radius:1em; font-size:1.3rem; font-weight:600; padding:0.7em 2.2em; \
             cursor:pointer; font-family:{FONT};"
        ),
        "Restart",
    )?;
    on_click(&restart, || {
        with_app(|app| {
            app.operator = Default::default();
            rerender(app);
        })
    });
    body.append_child(&restart)?;
    Ok(())
}

fn hook_input(field: &HtmlInputElement) {
    let source = field.clone();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let value = source.value();
        with_app(|app| app.operator.input = value.clone());
    }) as Box<dyn FnMut(_)>);
    field
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

// --- Run flow ----------------------------------------------------------------

fn begin(app: &mut App, count: usize) {
    let mut bank: Vec<&'static str> = WORD_BANK.to_vec();
    app.rng.shuffle(&mut bank);
    bank.truncate(count);
    app.operator = OperatorState {
        phase: Phase::Quiz,
        words: bank,
        idx: 0,
        input: String::new(),
        verdict: None,
        modal_timer: None,
    };
    rerender(app);
    // Let the fresh screen paint before the first word sounds.
    defer(TIMING.preroll_ms, || with_app(play_word));
}

fn play_word(app: &mut App) {
    if app.screen != Screen::PulseOperator || app.operator.phase != Phase::Quiz {
        return;
    }
    if let Some(word) = app.operator.words.get(app.operator.idx) {
        app.scheduler.schedule(&morse::text_to_code(word));
    }
}

fn submit_guess(app: &mut App) {
    let s = &app.operator;
    if s.phase != Phase::Quiz || s.verdict.is_some() {
        return;
    }
    let Some(&word) = s.words.get(s.idx) else {
        return;
    };
    let hit = s.input.trim().to_ascii_uppercase() == word;
    app.operator.verdict = Some(hit);
    rerender(app);
    let dismiss = if hit { TIMING.correct_dismiss_ms } else { TIMING.wrong_dismiss_ms };
    app.operator.modal_timer = defer(dismiss, || with_app(dismiss_verdict));
}

/// Shared by the auto-dismiss timer and an early click on the overlay.
fn dismiss_verdict(app: &mut App) {
    if app.screen != Screen::PulseOperator {
        return;
    }
    if let Some(timer) = app.operator.modal_timer.take() {
        cancel_defer(timer);
    }
    let Some(hit) = app.operator.verdict.take() else {
        return;
    };
    app.operator.input.clear();
    if hit {
        if app.operator.idx + 1 < app.operator.words.len() {
            app.operator.idx += 1;
        } else {
            app.operator.phase = Phase::Done;
        }
    }
    rerender(app);
}
