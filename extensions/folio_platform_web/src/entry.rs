//! Browser entry point

use folio_app::{FolioConfig, PortfolioApp};
use folio_layout::html::render_element;
use folio_platform::TimerHost;
use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::platform::WebPlatform;

/// Roughly one frame; entrances repaint at this cadence while running
const FRAME_MS: u32 = 16;

const STYLE_ID: &str = "folio-style";

thread_local! {
    static APP: RefCell<Option<PortfolioApp<WebPlatform>>> = const { RefCell::new(None) };
    static FRAME_PENDING: Cell<bool> = const { Cell::new(false) };
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Mount the portfolio into `#folio-root`, or the body when absent
#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    let platform = WebPlatform::new().map_err(to_js)?;
    let document = platform.document().clone();
    let root: Element = match document.get_element_by_id("folio-root") {
        Some(root) => root,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .into(),
    };

    let app = PortfolioApp::mount(platform.clone(), FolioConfig::default()).map_err(to_js)?;
    install_stylesheet(&document, &app.stylesheet())?;
    let subscriptions = (
        app.tracker().subscribe(|_| request_paint()),
        app.theme().subscribe(|_| request_paint()),
        app.nav().on_menu_change(|_| request_paint()),
    );
    app.greeting().on_advance(|_| request_paint());
    app.headline().on_advance(|_| request_paint());

    APP.with(|slot| *slot.borrow_mut() = Some(app));
    // Page lifetime: the subscriptions live as long as the document.
    std::mem::forget(subscriptions);

    let on_click = Closure::<dyn FnMut(Event)>::new(handle_click);
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    paint(&root);
    // Anchors exist now; resolve the active section against them.
    with_app(|app| {
        app.tracker().recompute_from(app.platform());
    });
    tracing::info!("folio mounted");
    Ok(())
}

/// Add the page stylesheet to `<head>` once
fn install_stylesheet(document: &Document, css: &str) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root"))?
            .append_child(&style)?,
    };
    Ok(())
}

fn with_app<R>(f: impl FnOnce(&PortfolioApp<WebPlatform>) -> R) -> Option<R> {
    APP.with(|slot| slot.borrow().as_ref().map(f))
}

fn root_element(app: &PortfolioApp<WebPlatform>) -> Option<Element> {
    let document = app.platform().document();
    document
        .get_element_by_id("folio-root")
        .or_else(|| document.body().map(Into::into))
}

/// Coalesce repaints into one per frame
fn request_paint() {
    if FRAME_PENDING.with(|pending| pending.replace(true)) {
        return;
    }
    with_app(|app| {
        app.platform().schedule(
            FRAME_MS,
            Box::new(|| {
                FRAME_PENDING.with(|pending| pending.set(false));
                let root = with_app(root_element).flatten();
                if let Some(root) = root {
                    paint(&root);
                }
            }),
        );
    });
}

fn paint(root: &Element) {
    let animating = with_app(|app| {
        root.set_inner_html(&render_element(&app.render()));
        if let Some(html) = app.platform().document().document_element() {
            let _ = html
                .class_list()
                .toggle_with_force("dark", app.theme().is_dark());
        }
        app.is_animating()
    });
    if animating == Some(true) {
        request_paint();
    }
}

fn handle_click(event: Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let closest = |selector: &str| target.closest(selector).ok().flatten();

    with_app(|app| {
        if closest("#theme-toggle").is_some() {
            app.toggle_theme();
        } else if closest("#menu-toggle").is_some() {
            app.toggle_menu();
        } else if closest("#back-to-top").is_some() {
            app.scroll_to_top();
        } else if let Some(link) = closest("a[href^='#']") {
            let Some(anchor) = link.get_attribute("href") else {
                return;
            };
            let name = anchor.trim_start_matches('#');
            if app.sections().get(name).is_ok() {
                event.prevent_default();
                if let Err(err) = app.follow_nav_link(name) {
                    tracing::warn!("nav link {}: {}", name, err);
                }
            }
        }
    });
}
