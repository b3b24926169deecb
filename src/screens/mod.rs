//! Screen router and shared DOM plumbing.
//!
//! The whole UI lives under one `#ed-root` element; navigating rebuilds it
//! from the current [`App`] state. App state sits in a `thread_local`
//! because the browser event loop is single-threaded; event handlers and
//! deferred timers re-enter through [`with_app`].

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, window, Document, Element};

use crate::morse;
use crate::rng::Lcg;
use crate::scheduler::Scheduler;
use crate::webaudio::WebAudioDevice;

mod advanced;
mod dot_sprout;
mod landing;
mod levels;
mod mode_select;
mod practice;
mod pulse_operator;
mod signal_starter;

// --- Palette -----------------------------------------------------------------

pub(crate) const BG_MAIN: &str = "#5d8662";
pub(crate) const BG_QUIZ: &str = "#56725d";
pub(crate) const BG_CARD: &str = "#7fa77c";
pub(crate) const BG_MODAL: &str = "#6d8a6d";
pub(crate) const BG_MODAL_RESULT: &str = "#8aa784";
pub(crate) const BORDER_SOFT: &str = "#d9d9b0";
pub(crate) const BORDER_QUIZ: &str = "#e6e9c2";
pub(crate) const TEXT_DIM: &str = "#d9d9d9";
pub(crate) const FONT: &str = "'Lexend', sans-serif";

// --- Presentation timing -----------------------------------------------------

/// Audio pre-roll and modal dismiss delays of one quiz screen. These are
/// presentation choices of the calling screen, not playback behavior.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub(crate) struct QuizTiming {
    pub preroll_ms: i32,
    pub correct_dismiss_ms: i32,
    pub wrong_dismiss_ms: i32,
}

// --- App state ---------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    Landing,
    ModeSelect,
    Practice,
    Advanced,
    Levels,
    DotSprout,
    SignalStarter,
    PulseOperator,
}

pub(crate) struct App {
    pub scheduler: Scheduler<WebAudioDevice>,
    pub rng: Lcg,
    pub screen: Screen,
    pub practice: practice::PracticeState,
    pub advanced: advanced::AdvancedState,
    pub sprout: dot_sprout::SproutState,
    pub starter: signal_starter::StarterState,
    pub operator: pulse_operator::OperatorState,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Construct the app and show the landing screen.
pub(crate) fn start() -> Result<(), JsValue> {
    let device = match WebAudioDevice::new() {
        Ok(d) => d,
        Err(e) => {
            console::error_1(&"no audio output available".into());
            return Err(e);
        }
    };
    let mut rng = Lcg::from_entropy();
    let starter = signal_starter::StarterState::with_letter(random_letter(&mut rng));
    let mut app = App {
        scheduler: Scheduler::new(device),
        rng,
        screen: Screen::Landing,
        practice: Default::default(),
        advanced: Default::default(),
        sprout: Default::default(),
        starter,
        operator: Default::default(),
    };
    let doc = document()?;
    render(&doc, &mut app)?;
    APP.with(|cell| cell.replace(Some(app)));
    Ok(())
}

/// Run `f` against the live app, if the game has been started.
pub(crate) fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            f(app);
        }
    });
}

/// Switch screens: silence playback, reset the target's run state, render.
pub(crate) fn goto(app: &mut App, screen: Screen) {
    app.scheduler.stop();
    match screen {
        Screen::DotSprout => app.sprout = Default::default(),
        Screen::SignalStarter => {
            app.starter = signal_starter::StarterState::with_letter(random_letter(&mut app.rng));
        }
        Screen::PulseOperator => app.operator = Default::default(),
        Screen::Advanced => app.advanced = Default::default(),
        _ => {}
    }
    app.screen = screen;
    rerender(app);
}

pub(crate) fn rerender(app: &mut App) {
    if let Ok(doc) = document() {
        let _ = render(&doc, app);
    }
}

pub(crate) fn render(doc: &Document, app: &mut App) -> Result<(), JsValue> {
    let root = mount(doc)?;
    root.set_inner_html("");
    match app.screen {
        Screen::Landing => landing::render(doc, &root),
        Screen::ModeSelect => mode_select::render(doc, &root),
        Screen::Practice => practice::render(doc, &root, app),
        Screen::Advanced => advanced::render(doc, &root, app),
        Screen::Levels => levels::render(doc, &root),
        Screen::DotSprout => dot_sprout::render(doc, &root, app),
        Screen::SignalStarter => signal_starter::render(doc, &root, app),
        Screen::PulseOperator => pulse_operator::render(doc, &root, app),
    }
}

// --- DOM helpers -------------------------------------------------------------

pub(crate) fn document() -> Result<Document, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Get-or-create the root container the screens render into.
fn mount(doc: &Document) -> Result<Element, JsValue> {
    if let Some(existing) = doc.get_element_by_id("ed-root") {
        return Ok(existing);
    }
    let root = doc.create_element("div")?;
    root.set_id("ed-root");
    root.set_attribute(
        "style",
        "position:fixed; inset:0; overflow:auto; margin:0; padding:0;",
    )?;
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&root)?;
    Ok(root)
}

pub(crate) fn el(doc: &Document, tag: &str, style: &str) -> Result<Element, JsValue> {
    let e = doc.create_element(tag)?;
    if !style.is_empty() {
        e.set_attribute("style", style)?;
    }
    Ok(e)
}

pub(crate) fn text_el(doc: &Document, tag: &str, style: &str, text: &str) -> Result<Element, JsValue> {
    let e = el(doc, tag, style)?;
    e.set_text_content(Some(text));
    Ok(e)
}

pub(crate) fn on_click(target: &Element, mut f: impl FnMut() + 'static) {
    let closure =
        Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| f()) as Box<dyn FnMut(_)>);
    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

/// Standard back control in the top-left corner.
pub(crate) fn back_arrow(doc: &Document, parent: &Element, to: Screen) -> Result<(), JsValue> {
    let btn = text_el(
        doc,
        "button",
        "position:absolute; left:32px; top:32px; background:none; border:none; \
         font-size:36px; color:#fff; cursor:pointer;",
        "←",
    )?;
    on_click(&btn, move || with_app(|app| goto(app, to)));
    parent.append_child(&btn)?;
    Ok(())
}

/// Full-screen dimmed overlay with a centered modal box. Returns both so
/// callers can fill the box and hook dismissal on the overlay.
pub(crate) fn modal(doc: &Document, parent: &Element, bg: &str) -> Result<(Element, Element), JsValue> {
    let overlay = el(
        doc,
        "div",
        "position:fixed; top:0; left:0; width:100vw; height:100vh; \
         background:rgba(0,0,0,0.32); z-index:1000; display:flex; \
         align-items:center; justify-content:center;",
    )?;
    let body = el(
        doc,
        "div",
        &format!(
            "min-width:320px; min-height:180px; background:{bg}; border-radius:18px; \
             box-shadow:0 8px 32px rgba(0,0,0,0.18); display:flex; flex-direction:column; \
             align-items:center; justify-content:center; padding:36px 32px 32px 32px; \
             text-align:center; font-family:{FONT};"
        ),
    )?;
    overlay.append_child(&body)?;
    parent.append_child(&overlay)?;
    Ok((overlay, body))
}

/// Fire-once timer; returns the handle so callers may cancel early.
pub(crate) fn defer(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let win = window()?;
    let cb = Closure::once_into_js(f);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref::<js_sys::Function>(),
        ms,
    )
    .ok()
}

pub(crate) fn cancel_defer(handle: i32) {
    if let Some(win) = window() {
        win.clear_timeout_with_handle(handle);
    }
}

pub(crate) fn random_letter(rng: &mut Lcg) -> char {
    let pool: Vec<char> = morse::letters().collect();
    pool[rng.index(pool.len())]
}
