//! Landing screen: title, tagline and the entry into mode selection.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{el, goto, on_click, text_el, with_app, Screen, BG_MAIN, FONT, TEXT_DIM};

pub(crate) fn render(doc: &Document, root: &Element) -> Result<(), JsValue> {
    let page = el(
        doc,
        "div",
        &format!(
            "position:relative; min-height:100vh; width:100%; background:{BG_MAIN}; \
             display:flex; flex-direction:column; align-items:center; justify-content:center; \
             font-family:{FONT};"
        ),
    )?;

    let content = el(doc, "div", "max-width:760px; text-align:center; padding:0 24px;")?;
    content.append_child(&text_el(
        doc,
        "h1",
        &format!(
            "color:{TEXT_DIM}; font-size:5.5rem; font-weight:bold; margin:0 0 10px 0; \
             letter-spacing:0.06em; text-shadow:0 6px 16px rgba(0,0,0,0.22), 0 2px 8px rgba(0,0,0,0.18);"
        ),
        "EchoDots",
    )?.into())?;
    content.append_child(&text_el(
        doc,
        "h2",
        &format!("color:{TEXT_DIM}; font-size:1.8rem; font-weight:600; margin:0 0 24px 0;"),
        "Where every dot is a message",
    )?.into())?;
    content.append_child(&text_el(
        doc,
        "p",
        "color:#eef2e6; font-size:1.1rem; line-height:1.6; margin:0 0 36px 0;",
        "Learn the rhythm of dots and dashes through fun lessons, real-time practice, \
         and addictive mini-games. Whether you're just starting out or brushing up your \
         skills, EchoDots makes decoding simple, smart, and engaging. Start your journey \
         today and let your messages be heard in a whole new way.",
    )?.into())?;

    let learn = text_el(
        doc,
        "button",
        &format!(
            "background:#7fa77c; color:#fff; font-size:1.6rem; font-weight:bold; \
             border:2px solid #222; border-radius:1em; padding:0.5em 2em; cursor:pointer; \
             box-shadow:0 12px 18px rgba(0,0,0,0.28); font-family:{FONT};"
        ),
        "Learn Now",
    )?;
    on_click(&learn, || with_app(|app| goto(app, Screen::ModeSelect)));
    content.append_child(&learn)?;
    page.append_child(&content)?;

    page.append_child(&text_el(
        doc,
        "footer",
        &format!(
            "position:absolute; bottom:16px; left:0; width:100%; text-align:center; \
             color:{TEXT_DIM}; font-size:0.9rem;"
        ),
        "© 2025 EchoDots. All rights reserved.",
    )?.into())?;

    root.append_child(&page)?;
    Ok(())
}
