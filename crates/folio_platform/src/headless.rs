//! Headless platform
//!
//! An in-memory page with a clock that only moves when told to. Section
//! anchors are laid out in document coordinates; the platform translates
//! them into viewport coordinates using the current scroll offset, exactly
//! as a browser's `getBoundingClientRect` would.
//!
//! Timers fire in due-time order (ties in scheduling order) while
//! [`HeadlessPlatform::advance`] walks the clock forward, including timers
//! scheduled by callbacks that fall inside the same window.

use folio_core::{Rect, Subscription, ViewportSnapshot};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, Key, KeyData, SlotMap};
use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{ScrollRequest, ViewportEvent, ViewportEvents, ViewportHandler};
use crate::geometry::{AnchorGeometry, ViewportSource};
use crate::platform::Platform;
use crate::timer::{TimerCallback, TimerHost, TimerId};

new_key_type! {
    struct TimerKey;
    struct ListenerKey;
}

struct PendingTimer {
    due_ms: u64,
    seq: u64,
    callback: TimerCallback,
}

struct HeadlessInner {
    now_ms: u64,
    next_seq: u64,
    timers: SlotMap<TimerKey, PendingTimer>,
    listeners: SlotMap<ListenerKey, ViewportHandler>,
    /// Anchor rects in document coordinates
    anchors: FxHashMap<String, Rect>,
    viewport: ViewportSnapshot,
    prefers_dark: bool,
    scroll_requests: Vec<ScrollRequest>,
}

/// In-memory platform with a manual clock
#[derive(Clone)]
pub struct HeadlessPlatform {
    inner: Rc<RefCell<HeadlessInner>>,
}

impl HeadlessPlatform {
    /// An empty document in a viewport of the given height
    pub fn new(viewport_height: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HeadlessInner {
                now_ms: 0,
                next_seq: 0,
                timers: SlotMap::with_key(),
                listeners: SlotMap::with_key(),
                anchors: FxHashMap::default(),
                viewport: ViewportSnapshot::new(0.0, viewport_height, viewport_height),
                prefers_dark: false,
                scroll_requests: Vec::new(),
            })),
        }
    }

    /// Stack anchors top to bottom with the given heights
    ///
    /// The document height becomes the sum of the heights (never less than
    /// the viewport).
    pub fn with_stacked_anchors<I, S>(viewport_height: f64, anchors: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let platform = Self::new(viewport_height);
        platform.stack_anchors(anchors);
        platform
    }

    /// Replace the layout with anchors stacked top to bottom
    pub fn stack_anchors<I, S>(&self, anchors: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut inner = self.inner.borrow_mut();
        inner.anchors.clear();
        let mut top = 0.0;
        for (anchor, height) in anchors {
            inner.anchors.insert(anchor.into(), Rect::band(top, height));
            top += height;
        }
        inner.viewport.document_height = top.max(inner.viewport.viewport_height);
    }

    /// Place one anchor at an explicit document position
    pub fn set_anchor(&self, anchor: impl Into<String>, rect: Rect) {
        self.inner.borrow_mut().anchors.insert(anchor.into(), rect);
    }

    pub fn remove_anchor(&self, anchor: &str) {
        self.inner.borrow_mut().anchors.remove(anchor);
    }

    pub fn set_document_height(&self, height: f64) {
        self.inner.borrow_mut().viewport.document_height = height;
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.inner.borrow_mut().prefers_dark = dark;
    }

    /// Scroll to `scroll_top` (clamped to the scrollable range) and notify
    /// listeners
    pub fn scroll_to(&self, scroll_top: f64) {
        {
            let mut inner = self.inner.borrow_mut();
            let max = inner.viewport.max_scroll().max(0.0);
            inner.viewport.scroll_top = scroll_top.clamp(0.0, max);
        }
        self.dispatch(ViewportEvent::Scroll);
    }

    /// Scroll without clamping, as overscroll on touch devices can
    pub fn scroll_unclamped(&self, scroll_top: f64) {
        self.inner.borrow_mut().viewport.scroll_top = scroll_top;
        self.dispatch(ViewportEvent::Scroll);
    }

    /// Change the viewport height and notify listeners
    pub fn resize(&self, viewport_height: f64) {
        self.inner.borrow_mut().viewport.viewport_height = viewport_height;
        self.dispatch(ViewportEvent::Resize);
    }

    /// Move the clock forward, firing every timer that comes due
    ///
    /// Returns the number of timers fired.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.inner.borrow().now_ms + ms;
        let mut fired = 0;

        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .timers
                    .iter()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.seq))
                    .map(|(key, _)| key);
                match due.and_then(|key| inner.timers.remove(key)) {
                    Some(timer) => {
                        inner.now_ms = timer.due_ms;
                        Some(timer.callback)
                    }
                    None => None,
                }
            };

            match next {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }

        self.inner.borrow_mut().now_ms = target;
        if fired > 0 {
            tracing::trace!("headless clock at {}ms, fired {} timer(s)", target, fired);
        }
        fired
    }

    /// Current clock value in whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Scroll requests received so far, oldest first
    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.inner.borrow().scroll_requests.clone()
    }

    fn dispatch(&self, event: ViewportEvent) {
        let handlers: Vec<ViewportHandler> =
            self.inner.borrow().listeners.values().cloned().collect();
        for handler in handlers {
            handler(event);
        }
    }
}

impl TimerHost for HeadlessPlatform {
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let due_ms = inner.now_ms + u64::from(delay_ms);
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let key = inner.timers.insert(PendingTimer {
            due_ms,
            seq,
            callback,
        });
        TimerId::from_raw(key.data().as_ffi())
    }

    fn cancel(&self, id: TimerId) -> bool {
        let key = TimerKey::from(KeyData::from_ffi(id.to_raw()));
        self.inner.borrow_mut().timers.remove(key).is_some()
    }

    fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms as f64
    }
}

impl ViewportSource for HeadlessPlatform {
    fn snapshot(&self) -> ViewportSnapshot {
        self.inner.borrow().viewport
    }
}

impl AnchorGeometry for HeadlessPlatform {
    fn bounding_rect(&self, anchor: &str) -> Option<Rect> {
        let inner = self.inner.borrow();
        let scroll_top = inner.viewport.scroll_top;
        inner.anchors.get(anchor).map(|r| r.offset_y(-scroll_top))
    }
}

impl ViewportEvents for HeadlessPlatform {
    fn subscribe_viewport(&self, handler: ViewportHandler) -> Subscription {
        let key = self.inner.borrow_mut().listeners.insert(handler);
        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.remove(key);
            }
        })
    }
}

impl Platform for HeadlessPlatform {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn prefers_dark(&self) -> bool {
        self.inner.borrow().prefers_dark
    }

    fn request_scroll(&self, request: ScrollRequest) {
        let target = match &request {
            ScrollRequest::Top => Some(0.0),
            ScrollRequest::Anchor(anchor) => {
                self.inner.borrow().anchors.get(anchor).map(Rect::top)
            }
        };
        self.inner.borrow_mut().scroll_requests.push(request);
        if let Some(top) = target {
            self.scroll_to(top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_timers_fire_in_due_order() {
        let platform = HeadlessPlatform::new(800.0);
        let order = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("c", 30u32), ("a", 10), ("b", 20), ("a2", 10)] {
            let order = order.clone();
            platform.schedule(delay, Box::new(move || order.borrow_mut().push(label)));
        }

        assert_eq!(platform.advance(25), 3);
        assert_eq!(*order.borrow(), vec!["a", "a2", "b"]);
        assert_eq!(platform.advance(5), 1);
        assert_eq!(platform.pending_timers(), 0);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let platform = HeadlessPlatform::new(800.0);
        let fired = Rc::new(Cell::new(false));

        let fired_clone = fired.clone();
        let id = platform.schedule(50, Box::new(move || fired_clone.set(true)));

        assert!(platform.cancel(id));
        assert!(!platform.cancel(id));
        platform.advance(100);
        assert!(!fired.get());
    }

    #[test]
    fn test_chained_timers_inside_one_advance() {
        let platform = HeadlessPlatform::new(800.0);
        let ticks = Rc::new(Cell::new(0));

        fn chain(platform: HeadlessPlatform, ticks: Rc<Cell<u32>>) {
            let next = platform.clone();
            platform.schedule(
                10,
                Box::new(move || {
                    ticks.set(ticks.get() + 1);
                    if ticks.get() < 5 {
                        chain(next, ticks);
                    }
                }),
            );
        }

        chain(platform.clone(), ticks.clone());
        assert_eq!(platform.advance(35), 3);
        assert_eq!(platform.elapsed_ms(), 35);
        assert_eq!(platform.advance(100), 2);
        assert_eq!(ticks.get(), 5);
    }

    #[test]
    fn test_bounding_rect_tracks_scroll() {
        let platform =
            HeadlessPlatform::with_stacked_anchors(800.0, [("hero", 800.0), ("about", 600.0)]);
        assert_eq!(platform.snapshot().document_height, 1400.0);
        assert_eq!(platform.bounding_rect("about").unwrap().top(), 800.0);

        platform.scroll_to(500.0);
        let about = platform.bounding_rect("about").unwrap();
        assert_eq!(about.top(), 300.0);
        assert_eq!(about.bottom(), 900.0);
        assert!(platform.bounding_rect("missing").is_none());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let platform = HeadlessPlatform::with_stacked_anchors(800.0, [("hero", 1000.0)]);
        platform.scroll_to(5000.0);
        assert_eq!(platform.snapshot().scroll_top, 200.0);
        platform.scroll_to(-10.0);
        assert_eq!(platform.snapshot().scroll_top, 0.0);
    }

    #[test]
    fn test_listener_released_on_drop() {
        let platform = HeadlessPlatform::new(800.0);
        let events = Rc::new(RefCell::new(Vec::new()));

        let events_clone = events.clone();
        let sub = platform.subscribe_viewport(Rc::new(move |e: ViewportEvent| events_clone.borrow_mut().push(e)));
        platform.scroll_to(0.0);
        platform.resize(600.0);
        assert_eq!(*events.borrow(), vec![ViewportEvent::Scroll, ViewportEvent::Resize]);

        drop(sub);
        assert_eq!(platform.listener_count(), 0);
        platform.scroll_to(0.0);
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_scroll_requests() {
        let platform =
            HeadlessPlatform::with_stacked_anchors(800.0, [("hero", 800.0), ("contact", 800.0)]);
        platform.request_scroll(ScrollRequest::Anchor("contact".into()));
        assert_eq!(platform.snapshot().scroll_top, 800.0);

        platform.request_scroll(ScrollRequest::Top);
        assert_eq!(platform.snapshot().scroll_top, 0.0);
        assert_eq!(platform.scroll_requests().len(), 2);
    }
}
