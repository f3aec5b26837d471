//! Typing text widget

use folio_animation::{Caret, RevealState};

use crate::element::{span, text, Element};

/// The revealed prefix of `state` followed by a pulsing caret
///
/// The caret blinks through the stylesheet's `@keyframes`, see
/// [`Caret::keyframes_css`].
pub fn typing_text(state: &RevealState, caret: &Caret) -> Element {
    span()
        .class("whitespace-pre-wrap font-medium tracking-normal")
        .attr("aria-label", state.source())
        .child(text(state.revealed_text()))
        .child(
            span()
                .class("typing-caret")
                .attr("aria-hidden", "true")
                .style(caret.style()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_caret() {
        let mut state = RevealState::new("Hi there", 80);
        state.advance_by(2);

        let widget = typing_text(&state, &Caret::default());
        assert_eq!(widget.text_content(), "Hi");
        assert_eq!(widget.get_attr("aria-label"), Some("Hi there"));

        let carets = widget.find_all_by_class("typing-caret");
        assert_eq!(carets.len(), 1);
        assert!(carets[0]
            .inline_style()
            .unwrap()
            .contains("animation: folio-pulse 2000ms"));
    }
}
