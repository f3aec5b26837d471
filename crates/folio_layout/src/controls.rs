//! Fixed-position page controls

use folio_theme::ThemeState;

use crate::element::{button, div, span, text, Element};
use crate::scroll_tracker::ScrollState;

/// Thin bar along the top edge whose width tracks scroll progress
pub fn progress_bar(state: &ScrollState) -> Element {
    div()
        .id("scroll-progress")
        .class("fixed top-0 left-0 h-1 bg-purple-500 z-50")
        .style(format!("width: {}", state.progress_percent()))
}

/// Round button that flips the color scheme
pub fn theme_toggle(theme: &ThemeState) -> Element {
    div().class("fixed top-20 right-6 z-50").child(
        button()
            .id("theme-toggle")
            .class("w-12 h-12 flex items-center justify-center bg-gray-200 dark:bg-gray-800 rounded-full shadow hover:scale-105 transition-transform")
            .attr("aria-label", theme.toggle_label())
            .child(span().child(text(theme.toggle_icon()))),
    )
}

/// Back-to-top button, present only once the page is scrolled far enough
pub fn back_to_top(state: &ScrollState) -> Option<Element> {
    state.show_top_affordance.then(|| {
        button()
            .id("back-to-top")
            .class("fixed bottom-6 right-6 w-12 h-12 bg-purple-500 text-white rounded-full shadow hover:scale-110")
            .attr("aria-label", "Back to top")
            .child(text("↑"))
    })
}
