//! Practice keyboard: tap a letter to see and hear its code.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{
    back_arrow, el, goto, on_click, rerender, text_el, with_app, App, Screen, BG_MAIN, BORDER_SOFT,
    FONT, TEXT_DIM,
};
use crate::morse;

#[derive(Default)]
pub(crate) struct PracticeState {
    pub selected: Option<char>,
}

pub(crate) fn render(doc: &Document, root: &Element, app: &App) -> Result<(), JsValue> {
    let page = el(
        doc,
        "div",
        &format!(
            "position:relative; min-height:100vh; background:{BG_MAIN}; display:flex; \
             flex-direction:column; align-items:center; padding:32px 16px; font-family:{FONT};"
        ),
    )?;
    back_arrow(doc, &page, Screen::ModeSelect)?;

    page.append_child(&text_el(
        doc,
        "h1",
        &format!(
            "color:{TEXT_DIM}; font-size:3rem; font-weight:bold; margin:12px 0 28px 0; \
             letter-spacing:0.06em; text-shadow:0 6px 16px rgba(0,0,0,0.22);"
        ),
        "Practice Mode",
    )?.into())?;

    // Letter keyboard, two rows of thirteen.
    let letters: Vec<char> = morse::letters().collect();
    let keyboard = el(
        doc,
        "div",
        "display:flex; flex-direction:column; gap:10px; align-items:center; margin-bottom:28px;",
    )?;
    for row in letters.chunks(13) {
        let row_el = el(doc, "div", "display:flex; gap:12px;")?;
        for &letter in row {
            let is_selected = app.practice.selected == Some(letter);
            let style = if is_selected {
                format!(
                    "background:{BORDER_SOFT}; color:#222; border:2px solid transparent; \
                     border-radius:0.7em; font-size:1.4rem; font-weight:bold; \
                     padding:8px 18px; cursor:pointer; font-family:{FONT}; \
                     box-shadow:0 6px 16px rgba(0,0,0,0.18);"
                )
            } else {
                format!(
                    "background:transparent; color:#fff; border:2px solid {BORDER_SOFT}; \
                     border-radius:0.7em; font-size:1.4rem; font-weight:bold; \
                     padding:8px 18px; cursor:pointer; font-family:{FONT}; \
                     box-shadow:0 2px 8px rgba(0,0,0,0.10);"
                )
            };
            let key = text_el(doc, "button", &style, &letter.to_string())?;
            on_click(&key, move || with_app(move |app| select_letter(app, letter)));
            row_el.append_child(&key)?;
        }
        keyboard.append_child(&row_el)?;
    }
    page.append_child(&keyboard)?;

    // Display panel: symbols on the left, the letter on the right.
    let panel = el(
        doc,
        "div",
        &format!(
            "width:100%; max-width:820px; border:4px solid {BORDER_SOFT}; border-radius:0.8em; \
             background:rgba(0,0,0,0.03); display:flex; flex-direction:column; \
             align-items:center; padding:48px 0 32px 0;"
        ),
    )?;
    let split = el(doc, "div", "display:flex; align-items:center; width:100%;")?;
    let (glyphs, letter_text, dimmed) = match app.practice.selected {
        Some(letter) => (
            morse::pattern_glyphs(morse::pattern_for(letter).unwrap_or("")),
            letter.to_string(),
            false,
        ),
        None => ("● —".to_string(), "A".to_string(), true),
    };
    let dim = if dimmed { "opacity:0.4;" } else { "" };
    split.append_child(&text_el(
        doc,
        "div",
        &format!("flex:1; text-align:center; font-size:3.5rem; color:#fff; font-weight:bold; {dim}"),
        &glyphs,
    )?.into())?;
    split.append_child(&el(
        doc,
        "div",
        &format!("width:4px; height:128px; background:{BORDER_SOFT}; margin:0 32px;"),
    )?.into())?;
    split.append_child(&text_el(
        doc,
        "div",
        &format!("flex:1; text-align:center; font-size:6.5rem; color:#fff; font-weight:bold; {dim}"),
        &letter_text,
    )?.into())?;
    panel.append_child(&split)?;

    let play = text_el(
        doc,
        "button",
        &format!(
            "margin-top:32px; padding:8px 24px; border-radius:0.7em; border:none; \
             background:#eaeaea; color:#222; font-size:1.3rem; font-weight:bold; \
             cursor:pointer; font-family:{FONT};"
        ),
        "▶ Play",
    )?;
    if app.practice.selected.is_none() {
        play.set_attribute("disabled", "")?;
    }
    on_click(&play, || with_app(replay));
    panel.append_child(&play)?;
    page.append_child(&panel)?;

    let advanced = text_el(
        doc,
        "span",
        "color:#fff; font-size:1.2rem; font-weight:600; cursor:pointer; margin-top:20px; \
         padding:0.4em 1.2em;",
        "Advanced Mode ›",
    )?;
    on_click(&advanced, || with_app(|app| goto(app, Screen::Advanced)));
    page.append_child(&advanced)?;

    root.append_child(&page)?;
    Ok(())
}

fn select_letter(app: &mut App, letter: char) {
    app.practice.selected = Some(letter);
    app.scheduler.schedule(&morse::code_for(letter));
    rerender(app);
}

fn replay(app: &mut App) {
    if let Some(letter) = app.practice.selected {
        app.scheduler.schedule(&morse::code_for(letter));
    }
}
