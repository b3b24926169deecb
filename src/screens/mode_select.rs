//! Mode selection: practice keyboard vs. quiz levels.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{el, goto, on_click, text_el, with_app, Screen, BG_CARD, BG_MAIN, FONT, TEXT_DIM};

pub(crate) fn render(doc: &Document, root: &Element) -> Result<(), JsValue> {
    let page = el(
        doc,
        "div",
        &format!(
            "min-height:100vh; background:{BG_MAIN}; display:flex; flex-direction:column; \
             align-items:center; justify-content:center; font-family:{FONT};"
        ),
    )?;

    page.append_child(&text_el(
        doc,
        "h1",
        &format!(
            "color:{TEXT_DIM}; font-size:5rem; font-weight:bold; margin:-80px 0 48px 0; \
             text-align:center; letter-spacing:0.06em; \
             text-shadow:0 6px 16px rgba(0,0,0,0.22), 0 2px 8px rgba(0,0,0,0.18);"
        ),
        "Select Mode",
    )?.into())?;

    let row = el(doc, "div", "display:flex; gap:48px;")?;
    for (label, target) in [
        ("Learn Morse Code", Screen::Practice),
        ("Test Your Skills", Screen::Levels),
    ] {
        let card = text_el(
            doc,
            "button",
            &format!(
                "background:{BG_CARD}; color:#fff; font-size:2.6rem; font-weight:bold; \
                 border:2px solid #222; border-radius:1.5em; cursor:pointer; width:350px; \
                 height:280px; display:flex; align-items:center; justify-content:center; \
                 text-align:center; line-height:1.2; font-family:{FONT}; \
                 box-shadow:0 12px 18px rgba(0,0,0,0.28); \
                 text-shadow:0 2px 8px rgba(0,0,0,0.18);"
            ),
            label,
        )?;
        on_click(&card, move || with_app(move |app| goto(app, target)));
        row.append_child(&card)?;
    }
    page.append_child(&row)?;

    root.append_child(&page)?;
    Ok(())
}
