//! "You're viewing" card pinned to the bottom-left corner

use folio_core::{Section, SectionList};

use crate::element::{div, el, p, text, Element};

pub const END_MESSAGE: &str = "You reached the end — nice!";

/// Tells the reader where they are and what comes next
#[derive(Clone, Debug)]
pub struct SectionGuide {
    sections: SectionList,
}

impl SectionGuide {
    pub fn new(sections: SectionList) -> Self {
        Self { sections }
    }

    pub fn viewing_label(&self, active: &Section) -> String {
        format!("You’re viewing: {}", active.name())
    }

    /// The section after `active`, or `None` at the end of the page
    pub fn next<'a>(&'a self, active: &Section) -> Option<&'a Section> {
        self.sections.next_after(active)
    }

    pub fn render(&self, active: &Section) -> Element {
        let hint = match self.next(active) {
            Some(next) => el("p")
                .class("mt-1 text-gray-600 dark:text-gray-300")
                .child(text("Next up: "))
                .child(el("strong").child(text(next.name()))),
            None => p(END_MESSAGE).class("mt-1 text-gray-600 dark:text-gray-300"),
        };

        div()
            .id("section-guide")
            .class("fixed bottom-6 left-6 w-64 bg-white dark:bg-gray-800 shadow-xl rounded-2xl p-4 text-sm border border-gray-200 dark:border-gray-700")
            .child(div().class("text-lg").child(text("🤖")))
            .child(el("strong").child(text(self.viewing_label(active))))
            .child(hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_end() {
        let sections = SectionList::from_names(["Hero", "About", "Contact"]).unwrap();
        let guide = SectionGuide::new(sections.clone());

        let hero = sections.first();
        assert_eq!(guide.next(hero).map(Section::name), Some("About"));
        assert_eq!(
            guide.render(hero).text_content(),
            "🤖You’re viewing: HeroNext up: About"
        );

        let contact = sections.get("Contact").unwrap();
        assert!(guide.next(contact).is_none());
        assert!(guide.render(contact).text_content().ends_with(END_MESSAGE));
    }
}
