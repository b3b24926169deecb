//! Dot Sprout (Beginner): hear a letter, pick it from the keyboard.
//!
//! A run is 10/20/30 rounds chosen up front. Each round's signal plays
//! after a short pre-roll and the keyboard stays locked until the last
//! pulse ends; the scheduler's completion callback unlocks it.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{
    back_arrow, defer, el, modal, on_click, random_letter, rerender, text_el, with_app, App,
    QuizTiming, Screen, BG_MODAL, BG_QUIZ, BORDER_QUIZ, BORDER_SOFT, FONT, TEXT_DIM,
};
use crate::morse;

const TIMING: QuizTiming = QuizTiming {
    preroll_ms: 200,
    correct_dismiss_ms: 2000,
    wrong_dismiss_ms: 2000,
};

const ROUND_CHOICES: [u32; 3] = [10, 20, 30];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Select,
    Quiz,
    Done,
}

pub(crate) struct SproutState {
    pub phase: Phase,
    pub limit: u32,
    pub question: u32,
    pub correct: u32,
    pub challenge: char,
    pub verdict: Option<bool>,
    pub playing: bool,
}

impl Default for SproutState {
    fn default() -> Self {
        Self {
            phase: Phase::Select,
            limit: 0,
            question: 1,
            correct: 0,
            challenge: 'A',
            verdict: None,
            playing: false,
        }
    }
}

pub(crate) fn render(doc: &Document, root: &Element, app: &App) -> Result<(), JsValue> {
    let s = &app.sprout;
    let page = el(
        doc,
        "div",
        &format!(
            "position:relative; min-height:100vh; background:{BG_QUIZ}; display:flex; \
             flex-direction:column; align-items:center; padding:24px 16px; font-family:{FONT};"
        ),
    )?;
    back_arrow(doc, &page, Screen::Levels)?;

    let header = el(
        doc,
        "div",
        "display:flex; align-items:center; justify-content:center; gap:24px; margin-top:12px;",
    )?;
    header.append_child(&text_el(
        doc,
        "h1",
        &format!(
            "color:{TEXT_DIM}; font-size:3rem; font-weight:700; margin:0; \
             letter-spacing:0.08em; text-shadow:0 6px 16px rgba(0,0,0,0.22);"
        ),
        "Dot Sprout",
    )?.into())?;
    if s.phase == Phase::Quiz {
        header.append_child(&counter_badge(doc, s.question, s.limit)?.into())?;
    }
    page.append_child(&header)?;

    page.append_child(&text_el(
        doc,
        "div",
        &format!("color:{TEXT_DIM}; font-size:1.05rem; margin:10px 0 28px 0;"),
        "Choose the letter that matches the signal by tapping one of the buttons below.",
    )?.into())?;

    let grid = el(
        doc,
        "div",
        "display:flex; gap:32px; align-items:stretch; justify-content:center; \
         flex-wrap:wrap; width:100%; max-width:1100px;",
    )?;

    // Signal display + replay.
    let signal_box = el(
        doc,
        "div",
        &format!(
            "flex:1; min-width:320px; border:5px solid {BORDER_QUIZ}; border-radius:18px; \
             display:flex; flex-direction:column; align-items:center; justify-content:center; \
             gap:28px; padding:36px 16px;"
        ),
    )?;
    let glyphs = if s.phase == Phase::Quiz {
        morse::pattern_glyphs(morse::pattern_for(s.challenge).unwrap_or(""))
    } else {
        "● —".to_string()
    };
    signal_box.append_child(&text_el(
        doc,
        "div",
        "color:#fff; font-size:3.5rem; font-weight:bold; letter-spacing:8px;",
        &glyphs,
    )?.into())?;
    let play = text_el(
        doc,
        "button",
        &format!(
            "padding:10px 30px; border:3px solid {BORDER_QUIZ}; border-radius:16px; \
             background:transparent; color:#fff; font-size:1.3rem; cursor:pointer; \
             font-family:{FONT};"
        ),
        "▶ Play",
    )?;
    if s.playing || s.phase != Phase::Quiz {
        play.set_attribute("disabled", "")?;
    }
    on_click(&play, || with_app(play_challenge));
    signal_box.append_child(&play)?;
    grid.append_child(&signal_box)?;

    // Answer keyboard.
    let letters_box = el(
        doc,
        "div",
        &format!(
            "flex:1.2; min-width:380px; border:5px solid {BORDER_QUIZ}; border-radius:18px; \
             display:flex; align-items:center; justify-content:center; padding:24px;"
        ),
    )?;
    let letters_grid = el(
        doc,
        "div",
        "display:grid; grid-template-columns:repeat(7, 1fr); gap:10px;",
    )?;
    for letter in morse::letters() {
        let key = text_el(
            doc,
            "button",
            &format!(
                "background:transparent; color:#fff; border:2px solid {BORDER_SOFT}; \
                 border-radius:0.6em; font-size:1.3rem; font-weight:bold; padding:10px 0; \
                 cursor:pointer; font-family:{FONT};"
            ),
            &letter.to_string(),
        )?;
        if s.playing || s.phase != Phase::Quiz {
            key.set_attribute("disabled", "")?;
        }
        on_click(&key, move || with_app(move |app| pick(app, letter)));
        letters_grid.append_child(&key)?;
    }
    letters_box.append_child(&letters_grid)?;
    grid.append_child(&letters_box)?;
    page.append_child(&grid)?;

    match (s.phase, s.verdict) {
        (Phase::Select, _) => render_select_modal(doc, &page)?,
        (Phase::Done, _) => render_done_modal(doc, &page, s.correct, s.limit)?,
        (Phase::Quiz, Some(hit)) => render_verdict_modal(doc, &page, hit, s.challenge)?,
        _ => {}
    }

    root.append_child(&page)?;
    Ok(())
}

fn counter_badge(doc: &Document, question: u32, limit: u32) -> Result<Element, JsValue> {
    let badge = el(
        doc,
        "div",
        &format!(
            "background:rgba(0,0,0,0.08); border:4px solid {BORDER_SOFT}; border-radius:3em; \
             padding:0.3em 1.2em; color:#fff; font-size:1.4rem; text-align:center;"
        ),
    )?;
    badge.append_child(&text_el(doc, "div", "", &question.to_string())?.into())?;
    badge.append_child(&el(
        doc,
        "div",
        "border-bottom:2px solid #fff; width:2em; margin:0.1em auto;",
    )?.into())?;
    badge.append_child(&text_el(doc, "div", "", &limit.to_string())?.into())?;
    Ok(badge)
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
    for limit in ROUND_CHOICES {
        let btn = text_el(
            doc,
            "button",
            &format!(
                "background:transparent; color:#fff; border:3px solid {BORDER_QUIZ}; \
                 border-radius:1em; font-size:1.3rem; font-weight:600; padding:0.7em 1.8em; \
                 cursor:pointer; font-family:{FONT};"
            ),
            &format!("{limit} Letters"),
        )?;
        on_click(&btn, move || with_app(move |app| begin(app, limit)));
        row.append_child(&btn)?;
    }
    body.append_child(&row)?;
    Ok(())
}

fn render_verdict_modal(doc: &Document, page: &Element, hit: bool, answer: char) -> Result<(), JsValue> {
    let (_overlay, body) = modal(doc, page, BG_MODAL)?;
    body.append_child(&text_el(
        doc,
        "div",
        "font-size:2.4rem; font-weight:700; color:#222;",
        if hit { "Correct" } else { "Incorrect" },
    )?.into())?;
    if !hit {
        body.append_child(&text_el(
            doc,
            "div",
            "font-size:1.6rem; color:#fff; margin-top:12px;",
            &format!("It is ‘{answer}’"),
        )?.into())?;
    }
    Ok(())
}

fn render_done_modal(doc: &Document, page: &Element, correct: u32, limit: u32) -> Result<(), JsValue> {
    let (_overlay, body) = modal(doc, page, BG_MODAL)?;
    body.append_child(&text_el(
        doc,
        "div",
        "font-size:2.2rem; font-weight:700; color:#fff; margin-bottom:2rem;",
        "Challenge Result",
    )?.into())?;
    let score = el(doc, "div", "font-size:3.2rem; color:#fff; font-weight:600; line-height:1.1;")?;
    score.append_child(&text_el(doc, "div", "", &correct.to_string())?.into())?;
    score.append_child(&el(
        doc,
        "div",
        "border-bottom:3px solid #fff; width:2.5em; margin:0.1em auto;",
    )?.into())?;
    score.append_child(&text_el(doc, "div", "", &limit.to_string())?.into())?;
    body.append_child(&score)?;
    let again = text_el(
        doc,
        "button",
        &format!(
            "margin-top:2.2rem; background:transparent; color:#fff; \
             border:3px solid {BORDER_QUIZ}; border-radius:1em; font-size:1.2rem; \
             font-weight:600; padding:0.7em 2.2em; cursor:pointer; font-family:{FONT};"
        ),
        "Select Mode",
    )?;
    on_click(&again, || {
        with_app(|app| {
            app.sprout = Default::default();
            rerender(app);
        })
    });
    body.append_child(&again)?;
    Ok(())
}

// --- Run flow ----------------------------------------------------------------

fn begin(app: &mut App, limit: u32) {
    app.sprout = SproutState {
        phase: Phase::Quiz,
        limit,
        question: 1,
        correct: 0,
        challenge: random_letter(&mut app.rng),
        verdict: None,
        playing: false,
    };
    rerender(app);
    queue_playback();
}

fn queue_playback() {
    defer(TIMING.preroll_ms, || with_app(play_challenge));
}

fn play_challenge(app: &mut App) {
    if app.screen != Screen::DotSprout || app.sprout.phase != Phase::Quiz || app.sprout.playing {
        return;
    }
    app.sprout.playing = true;
    let code = morse::code_for(app.sprout.challenge);
    app.scheduler.schedule_then(&code, || {
        with_app(|app| {
            app.sprout.playing = false;
            if app.screen == Screen::DotSprout {
                rerender(app);
            }
        })
    });
    rerender(app);
}

fn pick(app: &mut App, letter: char) {
    let s = &mut app.sprout;
    if s.phase != Phase::Quiz || s.playing || s.verdict.is_some() {
        return;
    }
    let hit = letter == s.challenge;
    if hit {
        s.correct += 1;
    }
    s.verdict = Some(hit);
    rerender(app);
    let dismiss = if hit { TIMING.correct_dismiss_ms } else { TIMING.wrong_dismiss_ms };
    defer(dismiss, || with_app(advance));
}

fn advance(app: &mut App) {
    if app.screen != Screen::DotSprout || app.sprout.verdict.take().is_none() {
        return;
    }
    let s = &mut app.sprout;
    if s.question >= s.limit {
        s.phase = Phase::Done;
        rerender(app);
        return;
    }
    s.question += 1;
    s.challenge = random_letter(&mut app.rng);
    rerender(app);
    queue_playback();
}
