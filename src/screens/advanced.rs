//! Advanced mode: free text in, live Morse pattern out, whole-phrase audio.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::{
    back_arrow, document, el, goto, on_click, text_el, with_app, App, Screen, BG_MAIN, BORDER_SOFT,
    FONT, TEXT_DIM,
};
use crate::morse;

#[derive(Default)]
pub(crate) struct AdvancedState {
    pub input: String,
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
    back_arrow(doc, &page, Screen::Practice)?;

    page.append_child(&text_el(
        doc,
        "h1",
        &format!(
            "color:{TEXT_DIM}; font-size:3rem; font-weight:bold; margin:24px 0; \
             letter-spacing:0.08em; text-shadow:0 6px 16px rgba(0,0,0,0.22);"
        ),
        "Advanced Mode",
    )?.into())?;

    let column = el(doc, "div", "width:90%; max-width:1200px;")?;

    let field = el(
        doc,
        "input",
        &format!(
            "width:100%; box-sizing:border-box; font-size:2rem; font-weight:700; \
             padding:0.6em 1em; border-radius:1em; border:2px solid {BORDER_SOFT}; \
             background:transparent; color:#fff; outline:none; margin-bottom:1.2rem; \
             font-family:{FONT};"
        ),
    )?;
    field.set_attribute("type", "text")?;
    field.set_attribute("placeholder", "Input Text")?;
    field.set_attribute("maxlength", "50")?;
    let field: HtmlInputElement = field.dyn_into()?;
    field.set_value(&app.advanced.input);
    hook_input(&field);
    column.append_child(&field)?;

    let output = el(
        doc,
        "div",
        &format!(
            "min-height:320px; border:2px solid {BORDER_SOFT}; border-radius:1em; color:#fff; \
             font-size:2rem; font-weight:500; padding:1.2em; white-space:pre-wrap; \
             word-break:break-word; display:flex; flex-direction:column; align-items:center; \
             justify-content:center;"
        ),
    )?;
    let pattern = text_el(
        doc,
        "div",
        "width:100%; text-align:left; min-height:2em;",
        &morse::text_to_pattern(&app.advanced.input),
    )?;
    pattern.set_id("ed-adv-pattern");
    output.append_child(&pattern)?;

    let play = text_el(
        doc,
        "button",
        &format!(
            "margin-top:4rem; padding:0.6em 2.2em; border-radius:1em; \
             border:2px solid {BORDER_SOFT}; background:#eaeaea; color:#222; font-size:1rem; \
             font-weight:700; cursor:pointer; font-family:{FONT};"
        ),
        "▶ Play",
    )?;
    play.set_id("ed-adv-play");
    if app.advanced.input.is_empty() {
        play.set_attribute("disabled", "")?;
    }
    on_click(&play, || with_app(play_text));
    output.append_child(&play)?;
    column.append_child(&output)?;
    page.append_child(&column)?;

    let basic = text_el(
        doc,
        "span",
        "color:#fff; font-size:1.2rem; font-weight:600; cursor:pointer; margin-top:1.5rem; \
         padding:0.4em 1.2em;",
        "‹ Basic Mode",
    )?;
    on_click(&basic, || with_app(|app| goto(app, Screen::Practice)));
    page.append_child(&basic)?;

    root.append_child(&page)?;
    Ok(())
}

/// Keep state and the pattern display in sync while typing, without a full
/// screen rebuild.
fn hook_input(field: &HtmlInputElement) {
    let source = field.clone();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let value = source.value();
        with_app(|app| {
            app.advanced.input = value.clone();
            if let Ok(doc) = document() {
                if let Some(out) = doc.get_element_by_id("ed-adv-pattern") {
                    out.set_text_content(Some(&morse::text_to_pattern(&app.advanced.input)));
                }
                if let Some(play) = doc.get_element_by_id("ed-adv-play") {
                    if app.advanced.input.is_empty() {
                        play.set_attribute("disabled", "").ok();
                    } else {
                        play.remove_attribute("disabled").ok();
                    }
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    field
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

fn play_text(app: &mut App) {
    if app.advanced.input.is_empty() {
        return;
    }
    app.scheduler.schedule(&morse::text_to_code(&app.advanced.input));
}
