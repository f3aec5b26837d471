//! Scroll tracking
//!
//! Derives a [`ScrollState`] from the viewport and the positions of the
//! section anchors:
//!
//! - **progress**: scrolled distance over scrollable distance, in `[0, 1]`
//! - **active section**: the first section, in declared order, whose anchor
//!   straddles the activation line near the top of the viewport
//! - **top affordance**: whether the page is scrolled far enough to offer a
//!   "back to top" control
//!
//! [`ScrollTracker::recompute`] is a pure function of its inputs plus the
//! previously active section, so it can run at mount and on every scroll or
//! resize event without changing the result. [`ScrollBinding`] wires a
//! tracker to a [`Platform`]'s viewport events and detaches on drop.
//!
//! # Example
//!
//! ```rust
//! use folio_core::SectionList;
//! use folio_layout::{ScrollBinding, ScrollTracker};
//! use folio_platform::HeadlessPlatform;
//!
//! let sections = SectionList::from_names(["Hero", "About", "Contact"]).unwrap();
//! let platform = HeadlessPlatform::with_stacked_anchors(
//!     800.0,
//!     [("hero", 800.0), ("about", 800.0), ("contact", 800.0)],
//! );
//!
//! let tracker = ScrollTracker::new(sections);
//! let _binding = ScrollBinding::attach(&platform, tracker.clone());
//!
//! platform.scroll_to(800.0);
//! let state = tracker.state();
//! assert_eq!(state.active_section.name(), "About");
//! assert_eq!(state.progress, 0.5);
//! assert!(state.show_top_affordance);
//! ```

use folio_core::{Section, SectionList, Store, Subscription, ViewportSnapshot};
use folio_platform::{AnchorGeometry, Platform, ViewportEvent};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Scroll offset past which the back-to-top control appears
pub const DEFAULT_TOP_THRESHOLD: f64 = 400.0;

/// Fraction of the viewport height where a section becomes active
pub const DEFAULT_ACTIVATION_RATIO: f64 = 0.45;

/// Tunables for [`ScrollTracker`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTrackerConfig {
    /// `show_top_affordance` is true strictly above this offset
    pub top_threshold: f64,
    /// A section is active while its top is above
    /// `activation_ratio * viewport_height` and its bottom below zero
    pub activation_ratio: f64,
}

impl Default for ScrollTrackerConfig {
    fn default() -> Self {
        Self {
            top_threshold: DEFAULT_TOP_THRESHOLD,
            activation_ratio: DEFAULT_ACTIVATION_RATIO,
        }
    }
}

/// Everything the page shell derives from the scroll position
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScrollState {
    /// Always within `[0, 1]`
    pub progress: f64,
    /// Always one of the tracker's sections
    pub active_section: Section,
    pub show_top_affordance: bool,
}

impl ScrollState {
    /// State before any scroll event: top of the page, first section active
    pub fn initial(sections: &SectionList) -> Self {
        Self {
            progress: 0.0,
            active_section: sections.first().clone(),
            show_top_affordance: false,
        }
    }

    /// Progress as a CSS percentage, e.g. `"37.5%"`
    pub fn progress_percent(&self) -> String {
        format!("{}%", self.progress * 100.0)
    }
}

/// Fraction of the scrollable distance already scrolled
///
/// Zero when the document is not taller than the viewport.
pub fn scroll_progress(viewport: &ViewportSnapshot) -> f64 {
    let max_scroll = viewport.max_scroll();
    if max_scroll <= 0.0 {
        return 0.0;
    }
    let progress = viewport.scroll_top / max_scroll;
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn shows_top_affordance(scroll_top: f64, threshold: f64) -> bool {
    scroll_top > threshold
}

/// First section in declared order whose anchor crosses the activation line
///
/// Sections whose anchor cannot be found are skipped.
pub fn resolve_active<'a>(
    sections: &'a SectionList,
    geometry: &dyn AnchorGeometry,
    viewport_height: f64,
    activation_ratio: f64,
) -> Option<&'a Section> {
    let line = activation_ratio * viewport_height;
    sections.iter().find(|section| {
        geometry
            .bounding_rect(&section.anchor())
            .map(|rect| rect.top() < line && rect.bottom() > 0.0)
            .unwrap_or(false)
    })
}

/// Derives and publishes [`ScrollState`] for a fixed list of sections
///
/// Clones share the same state.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    sections: SectionList,
    config: ScrollTrackerConfig,
    state: Store<ScrollState>,
}

impl ScrollTracker {
    pub fn new(sections: SectionList) -> Self {
        Self::with_config(sections, ScrollTrackerConfig::default())
    }

    pub fn with_config(sections: SectionList, config: ScrollTrackerConfig) -> Self {
        let state = Store::new(ScrollState::initial(&sections));
        Self {
            sections,
            config,
            state,
        }
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn config(&self) -> &ScrollTrackerConfig {
        &self.config
    }

    /// Latest derived state
    pub fn state(&self) -> ScrollState {
        self.state.get()
    }

    pub fn active_section(&self) -> Section {
        self.state.with(|s| s.active_section.clone())
    }

    /// Recompute from a viewport snapshot and anchor geometry
    ///
    /// Subscribers are only notified when the result differs from the
    /// previous state.
    pub fn recompute(
        &self,
        viewport: &ViewportSnapshot,
        geometry: &dyn AnchorGeometry,
    ) -> ScrollState {
        let previous = self.state.get();

        let active_section = resolve_active(
            &self.sections,
            geometry,
            viewport.viewport_height,
            self.config.activation_ratio,
        )
        .cloned()
        .unwrap_or_else(|| previous.active_section.clone());

        let next = ScrollState {
            progress: scroll_progress(viewport),
            active_section,
            show_top_affordance: shows_top_affordance(
                viewport.scroll_top,
                self.config.top_threshold,
            ),
        };

        if next != previous {
            tracing::debug!(
                "scroll: top={} progress={:.3} active={} show_top={}",
                viewport.scroll_top,
                next.progress,
                next.active_section.name(),
                next.show_top_affordance
            );
            self.state.set(next.clone());
        }
        next
    }

    /// Recompute from the platform's current viewport
    pub fn recompute_from<P: Platform>(&self, platform: &P) -> ScrollState {
        self.recompute(&platform.snapshot(), platform)
    }

    /// Observe state changes until the guard is dropped
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ScrollState) + 'static,
    {
        self.state.subscribe(callback)
    }
}

/// Keeps a [`ScrollTracker`] in sync with a platform's viewport
///
/// Attaching recomputes once immediately. Dropping the binding removes the
/// scroll/resize listener.
#[must_use = "dropping the binding detaches the tracker"]
pub struct ScrollBinding {
    tracker: ScrollTracker,
    _listener: Subscription,
}

impl ScrollBinding {
    pub fn attach<P: Platform>(platform: &P, tracker: ScrollTracker) -> Self {
        tracker.recompute_from(platform);

        let host = platform.clone();
        let bound = tracker.clone();
        let listener = platform.subscribe_viewport(Rc::new(move |event: ViewportEvent| {
            tracing::trace!("scroll tracker: {:?}", event);
            bound.recompute_from(&host);
        }));

        tracing::debug!(
            "scroll tracker attached to {} ({} sections)",
            platform.name(),
            tracker.sections().len()
        );

        Self {
            tracker,
            _listener: listener,
        }
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }
}
