//! Level select: five difficulty cards, three of them playable.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{back_arrow, el, goto, on_click, text_el, with_app, Screen, BG_CARD, BG_MAIN, FONT, TEXT_DIM};

const LEVELS: [(&str, &str, &str, Option<Screen>); 5] = [
    ("Dot", "Sprout", "Beginner", Some(Screen::DotSprout)),
    ("Signal", "Starter", "Novice", Some(Screen::SignalStarter)),
    ("Pulse", "Operator", "Skilled", Some(Screen::PulseOperator)),
    ("Echo", "Decoder", "Expert", None),
    ("Code", "Commander", "Master", None),
];

pub(crate) fn render(doc: &Document, root: &Element) -> Result<(), JsValue> {
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
            "color:{TEXT_DIM}; font-size:3.5rem; font-weight:bold; margin:26px 0 40px 0; \
             letter-spacing:0.06em; text-shadow:0 6px 16px rgba(0,0,0,0.22);"
        ),
        "Test Your Skills",
    )?.into())?;

    let grid = el(
        doc,
        "div",
        "display:flex; flex-direction:column; gap:32px; align-items:center;",
    )?;
    for chunk in LEVELS.chunks(3) {
        let row = el(doc, "div", "display:flex; gap:32px; justify-content:center;")?;
        for &(line1, line2, subtitle, target) in chunk {
            row.append_child(&level_card(doc, line1, line2, subtitle, target)?.into())?;
        }
        grid.append_child(&row)?;
    }
    page.append_child(&grid)?;

    root.append_child(&page)?;
    Ok(())
}

fn level_card(
    doc: &Document,
    line1: &str,
    line2: &str,
    subtitle: &str,
    target: Option<Screen>,
) -> Result<Element, JsValue> {
    let playable = target.is_some();
    let card = el(
        doc,
        "button",
        &format!(
            "background:{BG_CARD}; border:2px solid #222; border-radius:1.2em; width:240px; \
             height:200px; display:flex; flex-direction:column; align-items:center; \
             justify-content:center; gap:12px; font-family:{FONT}; \
             box-shadow:0 10px 16px rgba(0,0,0,0.25); cursor:{cursor}; opacity:{opacity};",
            cursor = if playable { "pointer" } else { "default" },
            opacity = if playable { "1" } else { "0.55" },
        ),
    )?;
    let title = el(
        doc,
        "div",
        "color:#fff; font-size:1.9rem; font-weight:bold; line-height:1.15; text-align:center; \
         text-shadow:0 2px 8px rgba(0,0,0,0.18);",
    )?;
    title.append_child(&text_el(doc, "div", "", line1)?.into())?;
    title.append_child(&text_el(doc, "div", "", line2)?.into())?;
    card.append_child(&title)?;
    card.append_child(&text_el(
        doc,
        "div",
        "color:#e8ecd9; font-size:1.05rem; font-weight:500;",
        subtitle,
    )?.into())?;
    if let Some(screen) = target {
        on_click(&card, move || with_app(move |app| goto(app, screen)));
    }
    Ok(card)
}
