//! Browser implementation of the Folio platform traits

use folio_core::{Rect, Subscription, ViewportSnapshot};
use folio_platform::{
    AnchorGeometry, Platform, PlatformError, Result, ScrollRequest, TimerCallback, TimerHost,
    TimerId, ViewportEvent, ViewportEvents, ViewportHandler, ViewportSource,
};
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

struct PendingTimeout {
    handle: i32,
    callback: TimerCallback,
}

struct WebInner {
    window: Window,
    document: Document,
    next_timer: Cell<u64>,
    timeouts: RefCell<FxHashMap<u64, PendingTimeout>>,
}

/// The browser window as a Folio platform
///
/// Clones share the same window and timer table.
#[derive(Clone)]
pub struct WebPlatform {
    inner: Rc<WebInner>,
}

impl WebPlatform {
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| PlatformError::Unavailable("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PlatformError::Unavailable("window has no document".into()))?;

        Ok(Self {
            inner: Rc::new(WebInner {
                window,
                document,
                next_timer: Cell::new(1),
                timeouts: RefCell::new(FxHashMap::default()),
            }),
        })
    }

    pub fn window(&self) -> &Window {
        &self.inner.window
    }

    pub fn document(&self) -> &Document {
        &self.inner.document
    }
}

fn fire(weak: &Weak<WebInner>, id: u64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let pending = inner.timeouts.borrow_mut().remove(&id);
    drop(inner);
    if let Some(pending) = pending {
        (pending.callback)();
    }
}

impl TimerHost for WebPlatform {
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimerId {
        let id = self.inner.next_timer.get();
        self.inner.next_timer.set(id + 1);

        // The JS side only carries the id; the Rust callback stays in the
        // table so cancelling drops it.
        let weak = Rc::downgrade(&self.inner);
        let trampoline: js_sys::Function =
            Closure::once_into_js(move || fire(&weak, id)).unchecked_into();
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);

        match self
            .inner
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                &trampoline,
                timeout,
            ) {
            Ok(handle) => {
                self.inner
                    .timeouts
                    .borrow_mut()
                    .insert(id, PendingTimeout { handle, callback });
            }
            Err(err) => tracing::warn!("setTimeout failed: {:?}", err),
        }
        TimerId::from_raw(id)
    }

    fn cancel(&self, id: TimerId) -> bool {
        let removed = self.inner.timeouts.borrow_mut().remove(&id.to_raw());
        match removed {
            Some(pending) => {
                self.inner.window.clear_timeout_with_handle(pending.handle);
                true
            }
            None => false,
        }
    }

    fn now_ms(&self) -> f64 {
        self.inner
            .window
            .performance()
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}

impl ViewportSource for WebPlatform {
    fn snapshot(&self) -> ViewportSnapshot {
        let window = &self.inner.window;
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let document_height = self
            .inner
            .document
            .body()
            .map(|body| f64::from(body.scroll_height()))
            .unwrap_or(viewport_height);
        ViewportSnapshot::new(scroll_top, viewport_height, document_height)
    }
}

impl AnchorGeometry for WebPlatform {
    fn bounding_rect(&self, anchor: &str) -> Option<Rect> {
        let element = self.inner.document.get_element_by_id(anchor)?;
        let r = element.get_bounding_client_rect();
        Some(Rect::new(r.x(), r.y(), r.width(), r.height()))
    }
}

impl ViewportEvents for WebPlatform {
    fn subscribe_viewport(&self, handler: ViewportHandler) -> Subscription {
        let window = self.inner.window.clone();

        let on_scroll_handler = handler.clone();
        let on_scroll =
            Closure::<dyn FnMut()>::new(move || on_scroll_handler(ViewportEvent::Scroll));
        let on_resize = Closure::<dyn FnMut()>::new(move || handler(ViewportEvent::Resize));

        for (event, closure) in [("scroll", &on_scroll), ("resize", &on_resize)] {
            if let Err(err) =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                tracing::warn!("failed to listen for {}: {:?}", event, err);
            }
        }

        Subscription::new(move || {
            for (event, closure) in [("scroll", &on_scroll), ("resize", &on_resize)] {
                let _ = window
                    .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
            drop(on_scroll);
            drop(on_resize);
        })
    }
}

impl Platform for WebPlatform {
    fn name(&self) -> &'static str {
        "web"
    }

    fn prefers_dark(&self) -> bool {
        self.inner
            .window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn request_scroll(&self, request: ScrollRequest) {
        match request {
            ScrollRequest::Top => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                self.inner.window.scroll_to_with_scroll_to_options(&options);
            }
            ScrollRequest::Anchor(anchor) => {
                match self.inner.document.get_element_by_id(&anchor) {
                    Some(element) => {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                    None => tracing::debug!("no element #{} to scroll to", anchor),
                }
            }
        }
    }
}
