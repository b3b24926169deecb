//! Signal Starter (Novice): key the shown letter as dots and dashes.
//!
//! The dot/dash keys sound their own beep as they are pressed. The answer
//! modal auto-dismisses (faster on a hit) and can be clicked away early.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{
    back_arrow, cancel_defer, defer, el, modal, on_click, random_letter, rerender, text_el,
    with_app, App, QuizTiming, Screen, BG_QUIZ, BORDER_QUIZ, FONT, TEXT_DIM,
};
use crate::morse::{self, Symbol};

const TIMING: QuizTiming = QuizTiming {
    preroll_ms: 0,
    correct_dismiss_ms: 1200,
    wrong_dismiss_ms: 2000,
};

pub(crate) struct StarterState {
    pub current: char,
    pub entry: Vec<Symbol>,
    pub verdict: Option<bool>,
    pub modal_timer: Option<i32>,
}

impl StarterState {
    pub(crate) fn with_letter(letter: char) -> Self {
        Self { current: letter, entry: Vec::new(), verdict: None, modal_timer: None }
    }
}

impl Default for StarterState {
    fn default() -> Self {
        Self::with_letter('A')
    }
}

pub(crate) fn render(doc: &Document, root: &Element, app: &App) -> Result<(), JsValue> {
    let s = &app.starter;
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
        "Signal Starter",
    )?.into())?;
    page.append_child(&text_el(
        doc,
        "div",
        &format!("color:{TEXT_DIM}; font-size:1rem; margin:5px 0 24px 0;"),
        "Type the correct morse code based on the given letter.",
    )?.into())?;

    let board = el(
        doc,
        "div",
        &format!(
            "width:900px; max-width:95vw; border:5px solid {BORDER_QUIZ}; border-radius:18px; \
             display:flex; flex-direction:column;"
        ),
    )?;
    board.append_child(&text_el(
        doc,
        "div",
        "height:170px; display:flex; align-items:center; justify-content:center; \
         color:#fff; font-size:7rem; font-weight:600;",
        &s.current.to_string(),
    )?.into())?;

    let entry_row = el(
        doc,
        "div",
        &format!(
            "position:relative; height:120px; border-top:4px solid {BORDER_QUIZ}; \
             display:flex; align-items:center; justify-content:center;"
        ),
    )?;
    let entry_glyphs: String = s
        .entry
        .iter()
        .map(|&sym| if sym == Symbol::Short { "●" } else { "—" })
        .collect::<Vec<_>>()
        .join(" ");
    entry_row.append_child(&text_el(
        doc,
        "div",
        "max-width:90%; overflow-x:auto; white-space:nowrap; color:#fff; font-size:3.2rem; \
         letter-spacing:8px; padding:0 12px;",
        &entry_glyphs,
    )?.into())?;
    let clear = text_el(
        doc,
        "button",
        &format!(
            "position:absolute; top:18px; right:24px; background:rgba(86,114,93,0.92); \
             border:3px solid {BORDER_QUIZ}; border-radius:16px; color:#fff; font-size:1.2rem; \
             padding:10px 30px; cursor:pointer; font-family:{FONT};"
        ),
        "Clear",
    )?;
    on_click(&clear, || {
        with_app(|app| {
            app.starter.entry.clear();
            rerender(app);
        })
    });
    entry_row.append_child(&clear)?;
    board.append_child(&entry_row)?;
    page.append_child(&board)?;

    let keys = el(doc, "div", "display:flex; gap:32px; margin-top:48px;")?;
    let key_style = format!(
        "width:130px; height:80px; border-radius:16px; border:3px solid {BORDER_QUIZ}; \
         background:transparent; display:flex; align-items:center; justify-content:center; \
         cursor:pointer; font-family:{FONT};"
    );
    let dot = el(doc, "button", &key_style)?;
    dot.append_child(&el(
        doc,
        "span",
        "width:38px; height:38px; background:#fff; border-radius:50%; display:inline-block;",
    )?.into())?;
    on_click(&dot, || with_app(|app| key_symbol(app, Symbol::Short)));
    keys.append_child(&dot)?;

    let dash = el(doc, "button", &key_style)?;
    dash.append_child(&el(
        doc,
        "span",
        "width:70px; height:16px; background:#fff; border-radius:8px; display:inline-block;",
    )?.into())?;
    on_click(&dash, || with_app(|app| key_symbol(app, Symbol::Long)));
    keys.append_child(&dash)?;

    let submit = text_el(
        doc,
        "button",
        &format!("{key_style} color:#fff; font-size:1.6rem;"),
        "Submit",
    )?;
    on_click(&submit, || with_app(submit_entry));
    keys.append_child(&submit)?;
    page.append_child(&keys)?;

    if let Some(hit) = s.verdict {
        render_verdict_modal(doc, &page, hit, s.current)?;
    }

    root.append_child(&page)?;
    Ok(())
}

fn render_verdict_modal(doc: &Document, page: &Element, hit: bool, answer: char) -> Result<(), JsValue> {
    let (overlay, body) = modal(doc, page, "#7b9b74")?;
    on_click(&overlay, || with_app(close_modal));
    body.append_child(&text_el(
        doc,
        "div",
        "font-size:2.4rem; font-weight:700; color:#222; margin-bottom:12px;",
        if hit { "Correct" } else { "Incorrect" },
    )?.into())?;
    if !hit {
        body.append_child(&text_el(
            doc,
            "div",
            "font-size:1.3rem; color:#222; margin-bottom:10px;",
            "Correct answer",
        )?.into())?;
        body.append_child(&text_el(
            doc,
            "div",
            "font-size:2.5rem; color:#fff; letter-spacing:8px;",
            &morse::pattern_glyphs(morse::pattern_for(answer).unwrap_or("")),
        )?.into())?;
    }
    Ok(())
}

// --- Entry flow --------------------------------------------------------------

fn key_symbol(app: &mut App, sym: Symbol) {
    if app.starter.verdict.is_some() {
        return;
    }
    app.starter.entry.push(sym);
    // Audible echo of the key press itself.
    app.scheduler.schedule(&[sym]);
    rerender(app);
}

fn submit_entry(app: &mut App) {
    if app.starter.verdict.is_some() {
        return;
    }
    let hit = app.starter.entry == morse::code_for(app.starter.current);
    app.starter.verdict = Some(hit);
    rerender(app);
    let dismiss = if hit { TIMING.correct_dismiss_ms } else { TIMING.wrong_dismiss_ms };
    app.starter.modal_timer = defer(dismiss, || with_app(close_modal));
}

/// Shared by the auto-dismiss timer and an early click on the overlay.
fn close_modal(app: &mut App) {
    if app.screen != Screen::SignalStarter {
        return;
    }
    if let Some(timer) = app.starter.modal_timer.take() {
        cancel_defer(timer);
    }
    if app.starter.verdict.take().is_none() {
        return;
    }
    app.starter.entry.clear();
    app.starter.current = random_letter(&mut app.rng);
    rerender(app);
}
